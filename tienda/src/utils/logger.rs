//! Logging Infrastructure
//!
//! While the terminal UI owns stdout, log records go to the in-app log pane
//! (`tui-logger`) and, optionally, to daily rolling files.

use std::path::Path;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::core::Config;

/// Initialize the logger from the configuration
pub fn init_logger(config: &Config) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| level_env_filter(&config.log_level));

    // Add file output if log_dir exists
    let file_layer = config
        .log_dir
        .as_deref()
        .map(Path::new)
        .filter(|dir| dir.exists())
        .map(|dir| {
            let file_appender = tracing_appender::rolling::daily(dir, "tienda");
            tracing_subscriber::fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(false)
        });

    tracing_subscriber::registry()
        .with(tui_logger::tracing_subscriber_layer())
        .with(file_layer)
        .with(env_filter)
        .try_init()?;

    // `log` records reach the pane too; a no-op when tracing already bridged them
    let level = log_level_filter(&config.log_level);
    tui_logger::init_logger(level).ok();
    tui_logger::set_default_level(level);

    Ok(())
}

/// `EnvFilter` for a configured level, falling back to info
///
/// Accepts a plain level (`debug`, `WARN`) or `target=level` directives. A bare
/// word that is not a level would otherwise parse as a target and hide all logs.
pub fn level_env_filter(level: &str) -> EnvFilter {
    let level = level.trim();
    if (level.parse::<LevelFilter>().is_ok() || level.contains('='))
        && let Ok(filter) = EnvFilter::try_new(level)
    {
        return filter;
    }
    EnvFilter::new("info")
}

/// Map a textual level to a `log` filter, defaulting to Info
pub fn log_level_filter(level: &str) -> log::LevelFilter {
    level.trim().parse().unwrap_or(log::LevelFilter::Info)
}
