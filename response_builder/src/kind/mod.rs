//! Runtime kind tags for dynamically typed values.
//!
//! Configuration nodes and response payloads are dynamically typed. The
//! [`Inspect`] trait classifies a value into a [`Kind`] so the validator can
//! report what it expected and what it was given, and [`Category`] is the
//! coarser classification the configuration merge uses to detect structural
//! conflicts.
//!
//! JSON lists and JSON mappings are both [`Kind::Array`]; only domain
//! [`Record`]s are [`Kind::Object`].

mod payload;

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde_json::{Map, Value};

use crate::record::Record;

pub use payload::Payload;

/// Runtime kind of a value.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Kind {
    /// `true` or `false`.
    Boolean,
    /// Any integer, signed or unsigned.
    Integer,
    /// Floating point number.
    Double,
    /// Text.
    String,
    /// List or mapping.
    Array,
    /// Domain record.
    Object,
    /// Absence of a value.
    Null,
}

impl Kind {
    /// Tag used in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Double => "double",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
            Self::Null => "null",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structural category of a configuration value.
///
/// Two values may only be merged when they share a category. Lists and
/// mappings are both containers: a list merged with a mapping is treated as
/// a mapping keyed by position.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Category {
    /// List or mapping.
    Container,
    /// Anything that is not a container, `null` included.
    Scalar,
}

impl Category {
    /// Classifies a JSON value.
    #[must_use]
    pub const fn of(value: &Value) -> Self {
        match value {
            Value::Object(_) | Value::Array(_) => Self::Container,
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => Self::Scalar,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Container => "container",
            Self::Scalar => "scalar",
        })
    }
}

/// Runtime introspection of a value.
///
/// Implemented for Rust primitives, strings, standard collections,
/// [`serde_json::Value`], [`Payload`] and `dyn Record`.
pub trait Inspect {
    /// Kind of the value.
    fn kind(&self) -> Kind;

    /// Integer value, when [`Inspect::kind`] is [`Kind::Integer`].
    fn as_integer(&self) -> Option<i128> {
        None
    }

    /// Record, when [`Inspect::kind`] is [`Kind::Object`].
    fn as_record(&self) -> Option<&dyn Record> {
        None
    }
}

macro_rules! inspect_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Inspect for $ty {
                fn kind(&self) -> Kind {
                    Kind::Integer
                }

                fn as_integer(&self) -> Option<i128> {
                    i128::try_from(*self).ok()
                }
            }
        )*
    };
}

inspect_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! inspect_as {
    ($kind:expr => $($ty:ty),* $(,)?) => {
        $(
            impl Inspect for $ty {
                fn kind(&self) -> Kind {
                    $kind
                }
            }
        )*
    };
}

inspect_as!(Kind::Boolean => bool);
inspect_as!(Kind::Double => f32, f64);
inspect_as!(Kind::String => str, String, char);
inspect_as!(Kind::Array => Map<String, Value>);

impl<T> Inspect for [T] {
    fn kind(&self) -> Kind {
        Kind::Array
    }
}

impl<T> Inspect for Vec<T> {
    fn kind(&self) -> Kind {
        Kind::Array
    }
}

impl<K, V> Inspect for BTreeMap<K, V> {
    fn kind(&self) -> Kind {
        Kind::Array
    }
}

impl<K, V, S> Inspect for HashMap<K, V, S> {
    fn kind(&self) -> Kind {
        Kind::Array
    }
}

impl<T: Inspect> Inspect for Option<T> {
    fn kind(&self) -> Kind {
        self.as_ref().map_or(Kind::Null, Inspect::kind)
    }

    fn as_integer(&self) -> Option<i128> {
        self.as_ref().and_then(Inspect::as_integer)
    }

    fn as_record(&self) -> Option<&dyn Record> {
        self.as_ref().and_then(Inspect::as_record)
    }
}

impl<T: Inspect + ?Sized> Inspect for &T {
    fn kind(&self) -> Kind {
        (**self).kind()
    }

    fn as_integer(&self) -> Option<i128> {
        (**self).as_integer()
    }

    fn as_record(&self) -> Option<&dyn Record> {
        (**self).as_record()
    }
}

impl Inspect for Value {
    fn kind(&self) -> Kind {
        match self {
            Self::Null => Kind::Null,
            Self::Bool(_) => Kind::Boolean,
            Self::Number(n) if n.is_i64() || n.is_u64() => Kind::Integer,
            Self::Number(_) => Kind::Double,
            Self::String(_) => Kind::String,
            Self::Array(_) | Self::Object(_) => Kind::Array,
        }
    }

    fn as_integer(&self) -> Option<i128> {
        let Self::Number(n) = self else {
            return None;
        };
        n.as_i64()
            .map(i128::from)
            .or_else(|| n.as_u64().map(i128::from))
    }
}

impl Inspect for dyn Record + '_ {
    fn kind(&self) -> Kind {
        Kind::Object
    }

    fn as_record(&self) -> Option<&dyn Record> {
        Some(self)
    }
}

#[cfg(test)]
mod tests;
