//! Format-specific parsing of configuration documents.

use serde_json::{Map, Value};

use camino::Utf8Path;

use super::error::{file_error, invalid_data};
use crate::BuilderResult;
use crate::kind::Inspect;

/// Parse a configuration document according to its extension.
///
/// `.json` documents are read with `serde_json`; anything else is treated as
/// TOML, which needs the `toml` feature.
///
/// # Errors
///
/// Returns a [`crate::BuilderError::File`] when the document fails to parse
/// or its root is not a table.
pub(super) fn parse_config_by_format(
    path: &Utf8Path,
    data: &str,
) -> BuilderResult<Map<String, Value>> {
    let ext = path.extension().map(str::to_ascii_lowercase);
    let value = match ext.as_deref() {
        Some("json") => serde_json::from_str::<Value>(data).map_err(|e| file_error(path, e))?,
        _ => parse_toml(path, data)?,
    };
    match value {
        Value::Object(map) => Ok(map),
        other => Err(invalid_data(
            path,
            format!("configuration root must be a table ({} given)", other.kind()),
        )),
    }
}

#[cfg(feature = "toml")]
fn parse_toml(path: &Utf8Path, data: &str) -> BuilderResult<Value> {
    let table: toml::Table = toml::from_str(data).map_err(|e| file_error(path, e))?;
    serde_json::to_value(table).map_err(|e| file_error(path, e))
}

#[cfg(not(feature = "toml"))]
fn parse_toml(path: &Utf8Path, _data: &str) -> BuilderResult<Value> {
    Err(file_error(
        path,
        std::io::Error::other(
            "toml feature disabled: enable the 'toml' feature to support this file format",
        ),
    ))
}
