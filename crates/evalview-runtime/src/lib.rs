pub mod config;
pub mod error;
pub mod loader;

pub use config::{Config, DEFAULT_RESULTS_DIR};
pub use error::{Error, Result};
pub use loader::load_results;
