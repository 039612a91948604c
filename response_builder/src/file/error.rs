//! Error constructors shared by file loading helpers.

use std::error::Error;
use std::sync::Arc;

use camino::Utf8Path;

use crate::BuilderError;

/// Construct a [`BuilderError::File`] for a configuration path.
pub(super) fn file_error(
    path: &Utf8Path,
    err: impl Into<Box<dyn Error + Send + Sync>>,
) -> Arc<BuilderError> {
    Arc::new(BuilderError::file(path, err))
}

pub(super) fn invalid_data(path: &Utf8Path, msg: impl Into<String>) -> Arc<BuilderError> {
    file_error(
        path,
        std::io::Error::new(std::io::ErrorKind::InvalidData, msg.into()),
    )
}
