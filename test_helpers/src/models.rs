//! Sample payload records.

use response_builder::{Arrayable, Record};
use serde_json::{Map, Value};

/// Base class every sample model descends from.
pub const MODEL_CLASS: &str = "Illuminate\\Database\\Eloquent\\Model";

/// Capability marker class of arrayable models.
pub const ARRAYABLE_CLASS: &str = "Illuminate\\Contracts\\Support\\Arrayable";

/// Model without the `to_array` capability.
#[derive(Clone, Debug, Default)]
pub struct TestModel {
    /// Carried value.
    pub val: Option<String>,
}

impl TestModel {
    /// Class name of the model.
    pub const CLASS: &'static str = "Tests\\Models\\TestModel";
}

impl Record for TestModel {
    fn class(&self) -> &'static str {
        Self::CLASS
    }

    fn lineage(&self) -> &'static [&'static str] {
        &[MODEL_CLASS]
    }
}

/// Model whose array form is `{"val": <val>}`.
#[derive(Clone, Debug, Default)]
pub struct TestModelArrayable {
    /// Carried value.
    pub val: Option<String>,
}

impl TestModelArrayable {
    /// Class name of the model.
    pub const CLASS: &'static str = "Tests\\Models\\TestModelArrayable";

    /// Creates a model carrying `val`.
    #[must_use]
    pub fn new(val: impl Into<String>) -> Self {
        Self {
            val: Some(val.into()),
        }
    }
}

impl Record for TestModelArrayable {
    fn class(&self) -> &'static str {
        Self::CLASS
    }

    fn lineage(&self) -> &'static [&'static str] {
        &[MODEL_CLASS, ARRAYABLE_CLASS]
    }

    fn as_arrayable(&self) -> Option<&dyn Arrayable> {
        Some(self)
    }
}

impl Arrayable for TestModelArrayable {
    fn to_array(&self, _request: Option<&Value>) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert(
            "val".to_owned(),
            self.val.clone().map_or(Value::Null, Value::String),
        );
        map
    }
}

/// Arrayable model inheriting from [`TestModelArrayable`].
#[derive(Clone, Debug, Default)]
pub struct TestModelChild {
    /// Parent part of the model.
    pub parent: TestModelArrayable,
}

impl TestModelChild {
    /// Class name of the model.
    pub const CLASS: &'static str = "Tests\\Models\\TestModelChild";
}

impl Record for TestModelChild {
    fn class(&self) -> &'static str {
        Self::CLASS
    }

    fn lineage(&self) -> &'static [&'static str] {
        &[TestModelArrayable::CLASS, MODEL_CLASS, ARRAYABLE_CLASS]
    }

    fn as_arrayable(&self) -> Option<&dyn Arrayable> {
        Some(&self.parent)
    }
}
