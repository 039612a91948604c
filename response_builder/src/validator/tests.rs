//! Unit tests for the type assertions.

use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::kind::Payload;

#[derive(Debug)]
struct StdClass;

impl Record for StdClass {
    fn class(&self) -> &'static str {
        "stdClass"
    }
}

#[derive(Debug)]
struct Resource;

impl Record for Resource {
    fn class(&self) -> &'static str {
        "App\\Http\\Resource"
    }

    fn lineage(&self) -> &'static [&'static str] {
        &["JsonResource", "JsonSerializable"]
    }
}

fn is_invalid_type(result: &BuilderResult<()>) -> bool {
    matches!(result, Err(err) if matches!(**err, BuilderError::InvalidType { .. }))
}

#[rstest]
fn is_int_accepts_integers() {
    assert!(assert_is_int("v", &666).is_ok());
    assert!(assert_is_int("v", &json!(-1)).is_ok());
}

#[rstest]
fn is_int_rejects_strings() {
    assert!(is_invalid_type(&assert_is_int("v", "chicken")));
}

#[rstest]
fn is_object_accepts_records() {
    assert!(assert_is_object("obj", &Payload::record(StdClass)).is_ok());
}

#[rstest]
#[case(json!("chicken"))]
#[case(json!({"a": 1}))]
#[case(json!(null))]
fn is_object_rejects_json(#[case] value: Value) {
    assert!(is_invalid_type(&assert_is_object("obj", &value)));
}

#[rstest]
#[case(json!([]))]
#[case(json!({}))]
fn is_array_accepts_containers(#[case] value: Value) {
    assert!(assert_is_array("v", &value).is_ok());
}

#[rstest]
fn is_array_rejects_booleans() {
    assert!(is_invalid_type(&assert_is_array("v", &false)));
}

#[rstest]
fn is_string_checks_kind() {
    assert!(assert_is_string("v", "string").is_ok());
    assert!(is_invalid_type(&assert_is_string("v", &666)));
}

#[rstest]
fn is_bool_checks_kind() {
    assert!(assert_is_bool("v", &false).is_ok());
    assert!(is_invalid_type(&assert_is_bool("v", &666)));
}

#[rstest]
#[case(json!(false), &[Kind::String], false)]
#[case(json!(false), &[Kind::Boolean], true)]
#[case(json!("foo"), &[Kind::String], true)]
#[case(json!(23), &[Kind::String], false)]
#[case(json!(666), &[Kind::Integer], true)]
#[case(json!("fail"), &[Kind::Integer, Kind::Boolean], false)]
#[case(json!(null), &[Kind::String, Kind::Null], true)]
#[case(json!(1.5), &[Kind::Integer], false)]
fn is_type_matches_allowed_kinds(
    #[case] value: Value,
    #[case] allowed: &[Kind],
    #[case] expected: bool,
) {
    assert_eq!(assert_is_type("item", &value, allowed).is_ok(), expected);
}

#[rstest]
fn is_type_reports_every_allowed_kind() {
    let err = assert_is_type("item", "fail", &[Kind::Integer, Kind::Boolean])
        .expect_err("string is neither integer nor boolean");
    assert_eq!(
        err.to_string(),
        "\"item\" must be one of allowed types: integer, boolean (string given)"
    );
}

#[rstest]
#[case(150, 100, 200)]
#[case(100, 100, 200)]
#[case(200, 100, 200)]
#[case(300, 100, 500)]
fn int_range_accepts_values_within_bounds(#[case] value: i64, #[case] min: i64, #[case] max: i64) {
    assert!(assert_is_int_range("v", &value, min, max).is_ok());
}

#[rstest]
#[case(50)]
#[case(99)]
#[case(201)]
fn int_range_rejects_values_outside_bounds(#[case] value: i64) {
    let err = assert_is_int_range("v", &value, 100, 200).expect_err("out of range");
    assert!(matches!(
        err.as_ref(),
        BuilderError::OutOfRange { value: v, min: 100, max: 200, .. } if *v == i128::from(value)
    ));
}

#[rstest]
fn int_range_rejects_non_integers() {
    assert!(is_invalid_type(&assert_is_int_range("v", "string", 100, 200)));
}

#[rstest]
#[case(json!(150))]
#[case(json!("not even an integer"))]
fn int_range_rejects_swapped_bounds_regardless_of_value(#[case] value: Value) {
    let err = assert_is_int_range("v", &value, 200, 100).expect_err("bounds swapped");
    assert!(matches!(err.as_ref(), BuilderError::Configuration { .. }));
}

#[rstest]
fn int_range_handles_values_beyond_i64() {
    let err = assert_is_int_range("v", &u64::MAX, 0, i64::MAX).expect_err("too large");
    assert!(matches!(err.as_ref(), BuilderError::OutOfRange { .. }));
}

#[rstest]
#[case(400, true)]
#[case(404, true)]
#[case(599, true)]
#[case(399, false)]
#[case(600, false)]
#[case(200, false)]
fn error_http_code_band(#[case] code: i64, #[case] ok: bool) {
    assert_eq!(assert_error_http_code(&code).is_ok(), ok);
}

#[rstest]
#[case(200, true)]
#[case(204, true)]
#[case(299, true)]
#[case(150, false)]
#[case(300, false)]
#[case(404, false)]
fn ok_http_code_band(#[case] code: i64, #[case] ok: bool) {
    assert_eq!(assert_ok_http_code(&code).is_ok(), ok);
}

#[rstest]
fn http_code_must_be_an_integer() {
    assert!(is_invalid_type(&assert_ok_http_code(&json!("200"))));
    assert!(is_invalid_type(&assert_error_http_code(&json!(404.0))));
}

#[rstest]
#[case(OK_HTTP_CODE_MIN, ERROR_HTTP_CODE_MIN)]
#[case(OK_HTTP_CODE_MAX, ERROR_HTTP_CODE_MAX)]
fn http_code_bands_do_not_overlap(#[case] ok: i64, #[case] error: i64) {
    assert!(assert_ok_http_code(&ok).is_ok());
    assert!(assert_error_http_code(&error).is_ok());
    assert!(assert_ok_http_code(&error).is_err());
    assert!(assert_error_http_code(&ok).is_err());
}

#[rstest]
fn record_assertion_returns_the_record() {
    let payload = Payload::record(StdClass);
    let record = assert_record("obj", &payload).expect("record payload");
    assert_eq!(record.class(), "stdClass");
}

#[rstest]
#[case(json!({"val": "foo"}))]
#[case(json!(null))]
#[case(json!("stdClass"))]
fn record_assertion_rejects_plain_values(#[case] value: Value) {
    let err = assert_record("payload", &value).expect_err("not a record");
    assert!(matches!(
        err.as_ref(),
        BuilderError::InvalidType { name, .. } if name == "payload"
    ));
}

#[rstest]
fn instance_of_accepts_exact_class() {
    assert!(assert_instance_of("obj", &StdClass, "stdClass").is_ok());
}

#[rstest]
fn instance_of_accepts_lineage() {
    assert!(assert_instance_of("obj", &Resource, "JsonSerializable").is_ok());
}

#[rstest]
fn instance_of_rejects_unrelated_class() {
    let err = assert_instance_of("obj", &StdClass, "JsonSerializable")
        .expect_err("stdClass is not JsonSerializable");
    assert_eq!(
        err.to_string(),
        "\"obj\" must be one of allowed types: instance of \"JsonSerializable\" (stdClass given)"
    );
}

#[rstest]
fn instance_of_works_through_trait_objects() {
    let record: &dyn Record = &Resource;
    assert!(assert_instance_of("obj", record, "JsonResource").is_ok());
}
