pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, Settings};

pub use self::core::{app::InventoryApp, inventory::Inventory, store::InventoryStore};
pub use utils::error::{InventoryError, Result};
pub use utils::input::{Constraint, Prompter};
