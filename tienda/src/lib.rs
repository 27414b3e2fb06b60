//! Tienda - product catalogue editor
//!
//! A single JSON file holds the whole product list; a terminal form and table
//! let the user add, update and delete records.
//!
//! # Module structure
//!
//! ```text
//! tienda/src/
//! ├── core/          # configuration, start-up
//! ├── db/            # JSON store + product repository
//! ├── tui/           # form/table controller and rendering
//! └── utils/         # logger
//! ```

pub mod core;
pub mod db;
pub mod tui;
pub mod utils;

// Re-export public types
pub use core::{Config, setup_environment};
pub use db::{JsonFileStore, ProductRepository, ProductStore};
pub use tui::App;
pub use utils::init_logger;
