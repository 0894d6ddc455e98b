use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "shoe_inventory=warn";

/// Builds the filter directive: `--verbose` first, then the configured level.
pub fn filter_directive(verbose: bool, configured_level: Option<&str>) -> String {
    if verbose {
        return "shoe_inventory=debug,warn".to_string();
    }
    match configured_level {
        Some(level) if !level.trim().is_empty() => format!("shoe_inventory={}", level.trim()),
        _ => DEFAULT_FILTER.to_string(),
    }
}

/// `RUST_LOG` wins over the directive from [`filter_directive`].
pub fn init_cli_logger(verbose: bool, configured_level: Option<&str>) {
    let directive = filter_directive(verbose, configured_level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    // 互動選單佔用 stdout，日誌一律寫到 stderr
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
