//! Runtime type assertions guarding every library entry point.
//!
//! Each assertion returns `Ok(())` when the value satisfies the constraint and
//! a [`BuilderError`] naming the value, the constraint and what was actually
//! supplied otherwise. Assertions are generic over [`Inspect`], so they accept
//! Rust values, JSON nodes and [`crate::Payload`]s alike.
//!
//! # Examples
//!
//! ```
//! use response_builder::validator;
//! use serde_json::json;
//!
//! validator::assert_is_int("port", &json!(8080))?;
//! assert!(validator::assert_is_int("port", &json!("8080")).is_err());
//! validator::assert_ok_http_code(&204)?;
//! # Ok::<_, std::sync::Arc<response_builder::BuilderError>>(())
//! ```

use std::sync::Arc;

use crate::kind::{Inspect, Kind};
use crate::record::Record;
use crate::{BuilderError, BuilderResult};

/// Lowest HTTP status accepted for error responses.
pub const ERROR_HTTP_CODE_MIN: i64 = 400;

/// Highest HTTP status accepted for error responses.
pub const ERROR_HTTP_CODE_MAX: i64 = 599;

/// Lowest HTTP status accepted for successful responses.
pub const OK_HTTP_CODE_MIN: i64 = 200;

/// Highest HTTP status accepted for successful responses.
pub const OK_HTTP_CODE_MAX: i64 = 299;

/// Asserts that `value` is a boolean.
///
/// # Errors
///
/// Returns [`BuilderError::InvalidType`] otherwise.
pub fn assert_is_bool<V: Inspect + ?Sized>(name: &str, value: &V) -> BuilderResult<()> {
    assert_is_type(name, value, &[Kind::Boolean])
}

/// Asserts that `value` is an integer.
///
/// # Errors
///
/// Returns [`BuilderError::InvalidType`] otherwise.
pub fn assert_is_int<V: Inspect + ?Sized>(name: &str, value: &V) -> BuilderResult<()> {
    assert_is_type(name, value, &[Kind::Integer])
}

/// Asserts that `value` is a list or a mapping.
///
/// # Errors
///
/// Returns [`BuilderError::InvalidType`] otherwise.
pub fn assert_is_array<V: Inspect + ?Sized>(name: &str, value: &V) -> BuilderResult<()> {
    assert_is_type(name, value, &[Kind::Array])
}

/// Asserts that `value` is a domain record.
///
/// # Errors
///
/// Returns [`BuilderError::InvalidType`] otherwise.
pub fn assert_is_object<V: Inspect + ?Sized>(name: &str, value: &V) -> BuilderResult<()> {
    assert_is_type(name, value, &[Kind::Object])
}

/// Asserts that `value` is a record and hands it back.
///
/// # Errors
///
/// Returns [`BuilderError::InvalidType`] naming `name` otherwise.
pub fn assert_record<'a, V: Inspect + ?Sized>(
    name: &str,
    value: &'a V,
) -> BuilderResult<&'a dyn Record> {
    value
        .as_record()
        .ok_or_else(|| Arc::new(BuilderError::invalid_type(name, &[Kind::Object], value.kind())))
}

/// Asserts that `value` is a string.
///
/// # Errors
///
/// Returns [`BuilderError::InvalidType`] otherwise.
pub fn assert_is_string<V: Inspect + ?Sized>(name: &str, value: &V) -> BuilderResult<()> {
    assert_is_type(name, value, &[Kind::String])
}

/// Asserts that the kind of `value` is one of `allowed`.
///
/// # Errors
///
/// Returns [`BuilderError::InvalidType`] listing every allowed kind when the
/// value's kind is not among them.
pub fn assert_is_type<V: Inspect + ?Sized>(
    name: &str,
    value: &V,
    allowed: &[Kind],
) -> BuilderResult<()> {
    let given = value.kind();
    if allowed.contains(&given) {
        Ok(())
    } else {
        Err(Arc::new(BuilderError::invalid_type(name, allowed, given)))
    }
}

/// Asserts that `value` is an integer within `min..=max`.
///
/// Inverted bounds are a defect in the calling code and are reported before
/// `value` is looked at.
///
/// # Errors
///
/// - [`BuilderError::Configuration`] when `min > max`;
/// - [`BuilderError::InvalidType`] when `value` is not an integer;
/// - [`BuilderError::OutOfRange`] when it lies outside the bounds.
pub fn assert_is_int_range<V: Inspect + ?Sized>(
    name: &str,
    value: &V,
    min: i64,
    max: i64,
) -> BuilderResult<()> {
    if min > max {
        return Err(Arc::new(BuilderError::configuration(
            name,
            format!("invalid range {min}-{max}. Ensure bound values are not swapped."),
        )));
    }
    assert_is_int(name, value)?;
    let Some(int) = value.as_integer() else {
        return Err(Arc::new(BuilderError::invalid_type(
            name,
            &[Kind::Integer],
            value.kind(),
        )));
    };
    if int < i128::from(min) || int > i128::from(max) {
        return Err(Arc::new(BuilderError::out_of_range(name, int, min, max)));
    }
    Ok(())
}

/// Asserts that `code` is a valid HTTP status for an error response.
///
/// # Errors
///
/// See [`assert_is_int_range`].
pub fn assert_error_http_code<V: Inspect + ?Sized>(code: &V) -> BuilderResult<()> {
    assert_is_int_range("http_code", code, ERROR_HTTP_CODE_MIN, ERROR_HTTP_CODE_MAX)
}

/// Asserts that `code` is a valid HTTP status for a successful response.
///
/// # Errors
///
/// See [`assert_is_int_range`].
pub fn assert_ok_http_code<V: Inspect + ?Sized>(code: &V) -> BuilderResult<()> {
    assert_is_int_range("http_code", code, OK_HTTP_CODE_MIN, OK_HTTP_CODE_MAX)
}

/// Asserts that `obj` is an instance of `class`, directly or through its
/// lineage.
///
/// # Errors
///
/// Returns [`BuilderError::InvalidType`] naming the expected and the actual
/// class.
pub fn assert_instance_of<R: Record + ?Sized>(name: &str, obj: &R, class: &str) -> BuilderResult<()> {
    if obj.instance_of(class) {
        Ok(())
    } else {
        Err(Arc::new(BuilderError::not_instance_of(name, class, obj.class())))
    }
}

#[cfg(test)]
mod tests;
