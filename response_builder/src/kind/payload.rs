//! Dynamically typed response payload values.

use std::sync::Arc;

use serde_json::Value;

use super::{Inspect, Kind};
use crate::record::Record;

/// A value handed to the response builder as payload.
///
/// Payloads are either plain JSON or a shared domain record awaiting
/// conversion.
///
/// # Examples
///
/// ```
/// use response_builder::{Inspect, Kind, Payload};
/// use serde_json::json;
///
/// assert_eq!(Payload::from(json!({"id": 1})).kind(), Kind::Array);
/// assert_eq!(Payload::from(json!(7)).as_integer(), Some(7));
/// ```
#[derive(Clone, Debug)]
pub enum Payload {
    /// Plain JSON value.
    Json(Value),
    /// Domain record.
    Record(Arc<dyn Record>),
}

impl Payload {
    /// Wraps a domain record.
    #[must_use]
    pub fn record(record: impl Record + 'static) -> Self {
        Self::Record(Arc::new(record))
    }

    /// Returns the JSON value when the payload is not a record.
    #[must_use]
    pub const fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Record(_) => None,
        }
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        Self::Json(value)
    }
}

impl From<Arc<dyn Record>> for Payload {
    fn from(record: Arc<dyn Record>) -> Self {
        Self::Record(record)
    }
}

impl Inspect for Payload {
    fn kind(&self) -> Kind {
        match self {
            Self::Json(value) => value.kind(),
            Self::Record(_) => Kind::Object,
        }
    }

    fn as_integer(&self) -> Option<i128> {
        self.as_json().and_then(Inspect::as_integer)
    }

    fn as_record(&self) -> Option<&dyn Record> {
        match self {
            Self::Json(_) => None,
            Self::Record(record) => Some(record.as_ref()),
        }
    }
}
