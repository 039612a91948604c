//! Domain records and the capabilities they may expose.
//!
//! Response payloads often carry application models rather than plain JSON.
//! A [`Record`] gives such a model a runtime class name and a lineage so the
//! validator and the converter registry can reason about it, while
//! [`Arrayable`] is the opt-in capability that turns it into a mapping.

use std::fmt;

use serde_json::{Map, Value};

use crate::{BuilderError, BuilderResult};

/// Capability of producing a mapping representation of a record.
pub trait Arrayable {
    /// Returns the mapping representation.
    ///
    /// `request` carries optional request context for representations that
    /// depend on it; most implementations ignore it.
    fn to_array(&self, request: Option<&Value>) -> Map<String, Value>;
}

/// A domain object with a runtime class identity.
///
/// # Examples
///
/// ```
/// use response_builder::{Arrayable, Record};
/// use serde_json::{json, Map, Value};
///
/// #[derive(Debug)]
/// struct User {
///     name: String,
/// }
///
/// impl Record for User {
///     fn class(&self) -> &'static str {
///         "App\\Models\\User"
///     }
///
///     fn lineage(&self) -> &'static [&'static str] {
///         &["App\\Models\\Model"]
///     }
///
///     fn as_arrayable(&self) -> Option<&dyn Arrayable> {
///         Some(self)
///     }
/// }
///
/// impl Arrayable for User {
///     fn to_array(&self, _request: Option<&Value>) -> Map<String, Value> {
///         let mut map = Map::new();
///         map.insert("name".into(), json!(self.name));
///         map
///     }
/// }
///
/// let user = User { name: "ada".into() };
/// assert!(user.instance_of("App\\Models\\Model"));
/// assert!(!user.instance_of("App\\Models\\Post"));
/// ```
pub trait Record: fmt::Debug + Send + Sync {
    /// Fully qualified runtime class name.
    fn class(&self) -> &'static str;

    /// Classes and interfaces this record derives from, nearest first.
    fn lineage(&self) -> &'static [&'static str] {
        &[]
    }

    /// Exposes the [`Arrayable`] capability when the record implements it.
    fn as_arrayable(&self) -> Option<&dyn Arrayable> {
        None
    }

    /// Returns `true` when the record is `class` or derives from it.
    fn instance_of(&self, class: &str) -> bool {
        self.class() == class || self.lineage().contains(&class)
    }
}

/// Looks up the [`Arrayable`] capability of `record`.
///
/// # Errors
///
/// Returns [`BuilderError::MissingCapability`] when the record does not
/// expose it.
pub fn arrayable(record: &dyn Record) -> BuilderResult<&dyn Arrayable> {
    record.as_arrayable().ok_or_else(|| {
        std::sync::Arc::new(BuilderError::MissingCapability {
            class: record.class().to_owned(),
            capability: "to_array",
        })
    })
}
