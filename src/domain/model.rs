use crate::domain::growth;
use crate::domain::ports::PetProfile;
use crate::utils::error::{InventoryError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Owner {
    pub name: String,
    pub address: String,
}

impl Owner {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
        }
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {}", self.name, self.address)
    }
}

/// 所有類別共用的基本欄位。
///
/// Only constructible through [`Pet::new`], which enforces a birth weight
/// strictly greater than zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    name: String,
    date_of_birth: NaiveDate,
    birth_weight_oz: f64,
    owner: Owner,
}

impl Pet {
    pub fn new(
        name: impl Into<String>,
        date_of_birth: NaiveDate,
        birth_weight_oz: f64,
        owner: Owner,
    ) -> Result<Self> {
        if birth_weight_oz.is_nan() || birth_weight_oz <= 0.0 {
            return Err(InventoryError::InvalidBirthWeight {
                value: birth_weight_oz,
            });
        }

        Ok(Self {
            name: name.into(),
            date_of_birth,
            birth_weight_oz,
            owner,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }

    pub fn birth_weight_oz(&self) -> f64 {
        self.birth_weight_oz
    }

    pub fn owner(&self) -> &Owner {
        &self.owner
    }

    /// Whole calendar days between `today` and the date of birth. Negative
    /// when the birth date lies in the future.
    pub fn days_since_birth_on(&self, today: NaiveDate) -> i64 {
        (today - self.date_of_birth).num_days()
    }
}

impl fmt::Display for Pet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {}",
            self.name,
            self.date_of_birth,
            format_weight(self.birth_weight_oz),
            self.owner
        )
    }
}

/// Shortest round-trip form that keeps a trailing `.0` on whole numbers and
/// writes exponents signed with at least two digits (`1e-05`, `1e+16`).
pub fn format_weight(value: f64) -> String {
    // {:?} 讓 10.0 顯示為 "10.0" 而不是 "10"
    let repr = format!("{:?}", value);
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => repr,
    }
}

/// A `y`/`n` answer, kept as the token the user typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YesNo {
    #[serde(rename = "y")]
    Yes,
    #[serde(rename = "n")]
    No,
}

impl YesNo {
    pub const TOKENS: [&'static str; 2] = ["y", "n"];

    pub fn token(self) -> &'static str {
        match self {
            YesNo::Yes => "y",
            YesNo::No => "n",
        }
    }
}

impl FromStr for YesNo {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "y" => Ok(YesNo::Yes),
            "n" => Ok(YesNo::No),
            other => Err(InventoryError::ValidationError {
                message: format!("expected 'y' or 'n', got '{}'", other),
            }),
        }
    }
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleCondition {
    Smooth,
    Rough,
}

impl ScaleCondition {
    pub const TOKENS: [&'static str; 2] = ["smooth", "rough"];

    pub fn token(self) -> &'static str {
        match self {
            ScaleCondition::Smooth => "smooth",
            ScaleCondition::Rough => "rough",
        }
    }
}

impl FromStr for ScaleCondition {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "smooth" => Ok(ScaleCondition::Smooth),
            "rough" => Ok(ScaleCondition::Rough),
            other => Err(InventoryError::ValidationError {
                message: format!("expected 'smooth' or 'rough', got '{}'", other),
            }),
        }
    }
}

impl fmt::Display for ScaleCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mammal {
    pub pet: Pet,
    pub litter_size: i32,
    pub has_claws: YesNo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fish {
    pub pet: Pet,
    pub scale_condition: ScaleCondition,
    /// Collected as a whole number of inches.
    pub length_inches: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Amphibian {
    pub pet: Pet,
    pub num_limbs: i32,
    pub is_venomous: YesNo,
}

impl PetProfile for Mammal {
    fn pet(&self) -> &Pet {
        &self.pet
    }

    fn current_weight(&self, days_since_birth: i64) -> f64 {
        growth::mammal_weight(self.pet.birth_weight_oz, days_since_birth)
    }
}

impl PetProfile for Fish {
    fn pet(&self) -> &Pet {
        &self.pet
    }

    fn current_weight(&self, days_since_birth: i64) -> f64 {
        growth::fish_weight(self.pet.birth_weight_oz, days_since_birth)
    }
}

impl PetProfile for Amphibian {
    fn pet(&self) -> &Pet {
        &self.pet
    }

    fn current_weight(&self, days_since_birth: i64) -> f64 {
        growth::amphibian_weight(self.pet.birth_weight_oz, days_since_birth)
    }
}

impl fmt::Display for Mammal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {} | {}", self.pet, self.litter_size, self.has_claws)
    }
}

impl fmt::Display for Fish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {}",
            self.pet, self.scale_condition, self.length_inches
        )
    }
}

impl fmt::Display for Amphibian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {} | {}", self.pet, self.num_limbs, self.is_venomous)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Mammal,
    Fish,
    Amphibian,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Mammal, Category::Fish, Category::Amphibian];

    /// 選單代號：1-Mammal; 2-Fish; 3-Amphibian
    pub fn from_menu_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Category::Mammal),
            2 => Some(Category::Fish),
            3 => Some(Category::Amphibian),
            _ => None,
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            Category::Mammal => "Mammals",
            Category::Fish => "Fish",
            Category::Amphibian => "Amphibians",
        }
    }
}

/// One persisted record, tagged by category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PetRecord {
    Mammal(Mammal),
    Fish(Fish),
    Amphibian(Amphibian),
}

impl PetRecord {
    pub fn category(&self) -> Category {
        match self {
            PetRecord::Mammal(_) => Category::Mammal,
            PetRecord::Fish(_) => Category::Fish,
            PetRecord::Amphibian(_) => Category::Amphibian,
        }
    }

    fn profile(&self) -> &dyn PetProfile {
        match self {
            PetRecord::Mammal(m) => m,
            PetRecord::Fish(f) => f,
            PetRecord::Amphibian(a) => a,
        }
    }
}

impl PetProfile for PetRecord {
    fn pet(&self) -> &Pet {
        self.profile().pet()
    }

    fn current_weight(&self, days_since_birth: i64) -> f64 {
        self.profile().current_weight(days_since_birth)
    }
}

impl fmt::Display for PetRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PetRecord::Mammal(m) => fmt::Display::fmt(m, f),
            PetRecord::Fish(x) => fmt::Display::fmt(x, f),
            PetRecord::Amphibian(a) => fmt::Display::fmt(a, f),
        }
    }
}

impl From<Mammal> for PetRecord {
    fn from(value: Mammal) -> Self {
        PetRecord::Mammal(value)
    }
}

impl From<Fish> for PetRecord {
    fn from(value: Fish) -> Self {
        PetRecord::Fish(value)
    }
}

impl From<Amphibian> for PetRecord {
    fn from(value: Amphibian) -> Self {
        PetRecord::Amphibian(value)
    }
}
