pub mod toml_config;

pub const DEFAULT_INVENTORY_PATH: &str = "inventory.txt";
pub const DEFAULT_CURRENCY_SYMBOL: &str = "R";

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
