pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::FileStorage;
pub use config::toml_config::TomlConfig;
pub use core::{app::InventoryApp, console::Console, inventory::Inventory};
pub use domain::model::Shoe;
pub use utils::error::{InventoryError, Result};
