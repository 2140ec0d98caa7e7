use crate::domain::model::Pet;
use crate::utils::error::Result;
use std::fmt;

/// Byte-level persistence. Paths are relative to the storage root.
pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn data_dir(&self) -> &str;
    fn data_file(&self) -> &str;
    /// Inclusive `(min, max)` accepted for the year of birth.
    fn birth_year_bounds(&self) -> (i32, i32);
}

/// Behaviour every pet category provides.
pub trait PetProfile: fmt::Display {
    fn pet(&self) -> &Pet;

    fn current_weight(&self, days_since_birth: i64) -> f64;

    fn name(&self) -> &str {
        self.pet().name()
    }

    fn owner_name(&self) -> &str {
        &self.pet().owner().name
    }
}
