//! Provenance-tagged configuration layers.

use std::fmt;

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::{Map, Value};

/// Source a configuration layer was gathered from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum LayerProvenance {
    /// Values baked into the library.
    Defaults,
    /// Values read from a configuration document.
    File,
    /// Values collected from prefixed environment variables.
    Environment,
    /// Overrides supplied by the application at runtime.
    Runtime,
}

impl LayerProvenance {
    /// Lower-case name used in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Defaults => "defaults",
            Self::File => "file",
            Self::Environment => "environment",
            Self::Runtime => "runtime",
        }
    }
}

impl fmt::Display for LayerProvenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One configuration node together with where it came from.
#[derive(Clone, Debug)]
pub struct ConfigLayer {
    provenance: LayerProvenance,
    value: Map<String, Value>,
    path: Option<Utf8PathBuf>,
}

impl ConfigLayer {
    /// Layer holding the default node.
    #[must_use]
    pub const fn defaults(value: Map<String, Value>) -> Self {
        Self {
            provenance: LayerProvenance::Defaults,
            value,
            path: None,
        }
    }

    /// Layer read from a configuration document, optionally naming it.
    #[must_use]
    pub const fn file(value: Map<String, Value>, path: Option<Utf8PathBuf>) -> Self {
        Self {
            provenance: LayerProvenance::File,
            value,
            path,
        }
    }

    /// Layer collected from environment variables.
    #[must_use]
    pub const fn environment(value: Map<String, Value>) -> Self {
        Self {
            provenance: LayerProvenance::Environment,
            value,
            path: None,
        }
    }

    /// Layer of runtime overrides.
    #[must_use]
    pub const fn runtime(value: Map<String, Value>) -> Self {
        Self {
            provenance: LayerProvenance::Runtime,
            value,
            path: None,
        }
    }

    /// Where the layer came from.
    #[must_use]
    pub const fn provenance(&self) -> LayerProvenance {
        self.provenance
    }

    /// Document path for file layers that recorded one.
    #[must_use]
    pub fn path(&self) -> Option<&Utf8Path> {
        self.path.as_deref()
    }

    /// Borrows the configuration node.
    #[must_use]
    pub const fn value(&self) -> &Map<String, Value> {
        &self.value
    }
}
