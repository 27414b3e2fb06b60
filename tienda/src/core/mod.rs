//! Core: configuration and start-up

pub mod config;

pub use config::{Config, DATA_FILE_NAME};

use crate::utils::logger::init_logger;

/// Load `.env`, read the configuration and install the logger.
pub fn setup_environment() -> anyhow::Result<Config> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    init_logger(&config)?;

    Ok(config)
}
