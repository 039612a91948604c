//! Loading entrypoints for configuration documents and the environment.

use camino::Utf8Path;
use figment::Figment;
use figment::providers::Env;
use serde_json::{Map, Value};

use super::error::file_error;
use super::parser::parse_config_by_format;
use crate::{BuilderError, BuilderResult};

/// Separator between nesting levels in environment variable names.
pub const ENV_NESTING_SEPARATOR: &str = "__";

/// Load a configuration document, selecting the parser from its extension.
///
/// Returns `Ok(None)` if the file does not exist. Keys keep the order they
/// have in the document.
///
/// # Examples
///
/// ```rust,no_run
/// use camino::Utf8Path;
/// use response_builder::load_config_file;
///
/// # fn run() -> response_builder::BuilderResult<()> {
/// if let Some(node) = load_config_file(Utf8Path::new("response_builder.toml"))? {
///     println!("{} top-level keys", node.len());
/// }
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns a [`BuilderError::File`] if reading or parsing the file fails, or
/// if the document root is not a table.
pub fn load_config_file(path: &Utf8Path) -> BuilderResult<Option<Map<String, Value>>> {
    if !path.is_file() {
        tracing::debug!(%path, "configuration file not found");
        return Ok(None);
    }
    let data = std::fs::read_to_string(path).map_err(|e| file_error(path, e))?;
    let node = parse_config_by_format(path, &data)?;
    tracing::debug!(%path, keys = node.len(), "configuration file loaded");
    Ok(Some(node))
}

/// Collect environment variables starting with `prefix` into a node.
///
/// The prefix is stripped and names are lower-cased; `__` separates nesting
/// levels, so `APP_DEBUG__DEBUG_KEY=dbg` with prefix `APP_` yields
/// `{"debug": {"debug_key": "dbg"}}`. Values are parsed as scalars where
/// possible, so `"42"` becomes an integer.
///
/// # Errors
///
/// Returns a [`BuilderError::Gathering`] if the variables cannot be
/// extracted into a node.
pub fn load_environment(prefix: &str) -> BuilderResult<Map<String, Value>> {
    let node: Map<String, Value> = Figment::from(Env::prefixed(prefix).split(ENV_NESTING_SEPARATOR))
        .extract()
        .map_err(BuilderError::gathering_arc)?;
    tracing::debug!(prefix, keys = node.len(), "environment layer gathered");
    Ok(node)
}
