use crate::config::{DEFAULT_CURRENCY_SYMBOL, DEFAULT_INVENTORY_PATH};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "shoe-inventory")]
#[command(about = "Interactive shoe inventory backed by a flat text file")]
pub struct CliConfig {
    /// Backing inventory file [default: inventory.txt]
    #[arg(short, long)]
    pub file: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Rewrite the inventory file after capturing a shoe
    #[arg(long)]
    pub persist_on_add: bool,

    /// Currency prefix used when displaying costs [default: R]
    #[arg(long)]
    pub currency: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn inventory_path(&self) -> &str {
        self.file.as_deref().unwrap_or(DEFAULT_INVENTORY_PATH)
    }

    fn currency_symbol(&self) -> &str {
        self.currency.as_deref().unwrap_or(DEFAULT_CURRENCY_SYMBOL)
    }

    fn persist_on_add(&self) -> bool {
        self.persist_on_add
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("--file", self.inventory_path())?;
        validate_non_empty_string("--currency", self.currency_symbol())?;
        Ok(())
    }
}
