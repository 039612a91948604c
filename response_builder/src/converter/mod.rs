//! Conversion of payload records into mappings.
//!
//! A [`Converter`] turns a record into a JSON mapping ahead of
//! serialisation. [`ToArrayConverter`] delegates to the record's own
//! [`crate::Arrayable`] capability, and [`ConverterRegistry`] picks a
//! converter per record class from the `converter.classes` configuration
//! node.

mod registry;

use std::fmt;

use serde_json::{Map, Value};

use crate::kind::Inspect;
use crate::{BuilderResult, record, validator};

pub use registry::{ConverterEntry, ConverterRegistry, ConverterRegistryBuilder};

/// Name under which [`ToArrayConverter`] is registered.
pub const TO_ARRAY_HANDLER: &str = "to_array";

/// Strategy turning a payload record into a mapping.
pub trait Converter: fmt::Debug + Send + Sync {
    /// Returns the mapping representation of `obj`.
    ///
    /// `config` is the configuration entry that selected this converter.
    ///
    /// # Errors
    ///
    /// Implementations return a [`crate::BuilderError`] when `obj` is not a
    /// convertible record.
    fn convert(&self, obj: &dyn Inspect, config: &Map<String, Value>)
    -> BuilderResult<Map<String, Value>>;
}

/// Converter returning the record's own [`crate::Arrayable::to_array`]
/// representation verbatim.
///
/// # Examples
///
/// ```
/// use response_builder::{Arrayable, Converter, Payload, Record, ToArrayConverter};
/// use serde_json::{json, Map, Value};
///
/// #[derive(Debug)]
/// struct Tag(&'static str);
///
/// impl Record for Tag {
///     fn class(&self) -> &'static str { "App\\Tag" }
///     fn as_arrayable(&self) -> Option<&dyn Arrayable> { Some(self) }
/// }
///
/// impl Arrayable for Tag {
///     fn to_array(&self, _request: Option<&Value>) -> Map<String, Value> {
///         let mut map = Map::new();
///         map.insert("val".into(), json!(self.0));
///         map
///     }
/// }
///
/// let converted = ToArrayConverter.convert(&Payload::record(Tag("rust")), &Map::new())?;
/// assert_eq!(Value::Object(converted), json!({"val": "rust"}));
///
/// assert!(ToArrayConverter.convert(&Payload::from(json!("rust")), &Map::new()).is_err());
/// # Ok::<_, std::sync::Arc<response_builder::BuilderError>>(())
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ToArrayConverter;

impl Converter for ToArrayConverter {
    fn convert(
        &self,
        obj: &dyn Inspect,
        _config: &Map<String, Value>,
    ) -> BuilderResult<Map<String, Value>> {
        let model = validator::assert_record("obj", obj)?;
        Ok(record::arrayable(model)?.to_array(None))
    }
}
