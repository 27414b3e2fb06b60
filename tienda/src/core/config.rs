use std::path::{Path, PathBuf};

/// File name of the product store, placed next to the executable by default
pub const DATA_FILE_NAME: &str = "productos.json";

/// Editor configuration
///
/// # Environment variables
///
/// Every setting can be overridden from the environment (or a `.env` file):
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | TIENDA_DATA_FILE | `<exe dir>/productos.json` | JSON product store |
/// | LOG_LEVEL | info | log level filter |
/// | LOG_DIR | (unset) | directory for daily log files |
///
/// # Example
///
/// ```ignore
/// TIENDA_DATA_FILE=/tmp/productos.json LOG_LEVEL=debug cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON store
    pub data_file: PathBuf,
    /// trace | debug | info | warn | error
    pub log_level: String,
    /// Extra file logging, only used when the directory exists
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or empty variables fall back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Default configuration pointing at a specific store file, ignoring the
    /// environment
    pub fn with_data_file(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
            log_level: "info".into(),
            log_dir: None,
        }
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            data_file: var("TIENDA_DATA_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(default_data_file),
            log_level: var("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: var("LOG_DIR"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

/// `productos.json` in the directory holding the running executable
pub fn default_data_file() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_default()
        .join(DATA_FILE_NAME)
}
