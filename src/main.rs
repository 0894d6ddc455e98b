use anyhow::Context;
use clap::Parser;
use shoe_inventory::core::ConfigProvider;
use shoe_inventory::utils::{logger, validation::Validate};
use shoe_inventory::{CliConfig, Console, FileStorage, InventoryApp, TomlConfig};
use std::io;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    match &cli.config {
        Some(path) => {
            let mut config = match TomlConfig::from_file(path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", path, e);
                    eprintln!("💡 Make sure the file exists and is valid TOML format");
                    std::process::exit(1);
                }
            };
            config.apply_cli_overrides(&cli);
            logger::init_cli_logger(cli.verbose, config.log_level());
            tracing::info!("📁 Loaded configuration from: {}", path);
            run(config)
        }
        None => {
            logger::init_cli_logger(cli.verbose, None);
            run(cli)
        }
    }
}

fn run<C: ConfigProvider + Validate>(config: C) -> anyhow::Result<()> {
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let storage = FileStorage::new(config.inventory_path());
    let console = Console::new(io::stdin().lock(), io::stdout());

    let mut app = match InventoryApp::open(storage, config, console) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!("❌ Could not load inventory: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    app.run().context("inventory session failed")?;
    Ok(())
}
