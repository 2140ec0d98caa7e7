pub mod app;
pub mod inventory;
pub mod report;
pub mod store;

pub use crate::domain::model::{Category, PetRecord};
pub use crate::domain::ports::{ConfigProvider, PetProfile, Storage};
pub use crate::utils::error::Result;
