//! Trait-based conversions between external error types and `BuilderError`.

use figment::Error as FigmentError;

use super::BuilderError;

/// JSON decoding failures surface when typed settings are extracted from a
/// merged node.
impl From<serde_json::Error> for BuilderError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e)
    }
}

impl From<FigmentError> for BuilderError {
    fn from(e: FigmentError) -> Self {
        Self::Gathering(e.into())
    }
}
