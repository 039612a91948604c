//! Helpers for reading configuration layers from documents and the
//! environment.

mod error;
mod loader;
mod parser;

pub use loader::{ENV_NESTING_SEPARATOR, load_config_file, load_environment};
