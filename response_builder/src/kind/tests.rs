//! Unit tests for kind classification.

use std::collections::BTreeMap;

use rstest::rstest;
use serde_json::{Value, json};

use super::{Category, Inspect, Kind, Payload};
use crate::record::Record;

#[derive(Debug)]
struct Model;

impl Record for Model {
    fn class(&self) -> &'static str {
        "App\\Model"
    }
}

#[rstest]
#[case(json!(null), Kind::Null)]
#[case(json!(false), Kind::Boolean)]
#[case(json!(-3), Kind::Integer)]
#[case(json!(u64::MAX), Kind::Integer)]
#[case(json!(1.5), Kind::Double)]
#[case(json!("foo"), Kind::String)]
#[case(json!([1, 2]), Kind::Array)]
#[case(json!({"a": 1}), Kind::Array)]
fn classifies_json(#[case] value: Value, #[case] expected: Kind) {
    assert_eq!(value.kind(), expected);
}

#[rstest]
fn classifies_rust_values() {
    assert_eq!(true.kind(), Kind::Boolean);
    assert_eq!(666_i32.kind(), Kind::Integer);
    assert_eq!(2.0_f64.kind(), Kind::Double);
    assert_eq!("chicken".kind(), Kind::String);
    assert_eq!(String::from("chicken").kind(), Kind::String);
    assert_eq!(Vec::<u8>::new().kind(), Kind::Array);
    assert_eq!(BTreeMap::<String, i32>::new().kind(), Kind::Array);
    assert_eq!(None::<i32>.kind(), Kind::Null);
    assert_eq!(Some(4_u8).kind(), Kind::Integer);
}

#[rstest]
fn integers_widen_losslessly() {
    assert_eq!(u64::MAX.as_integer(), Some(i128::from(u64::MAX)));
    assert_eq!(json!(u64::MAX).as_integer(), Some(i128::from(u64::MAX)));
    assert_eq!(json!(-7).as_integer(), Some(-7));
    assert_eq!(json!(1.0).as_integer(), None);
    assert_eq!("7".as_integer(), None);
}

#[rstest]
fn records_are_objects() {
    let payload = Payload::record(Model);
    assert_eq!(payload.kind(), Kind::Object);
    assert_eq!(payload.as_record().map(Record::class), Some("App\\Model"));
    assert!(payload.as_json().is_none());

    let record: &dyn Record = &Model;
    assert_eq!(record.kind(), Kind::Object);
}

#[rstest]
#[case(json!({}), Category::Container)]
#[case(json!([]), Category::Container)]
#[case(json!([{"a": 1}]), Category::Container)]
#[case(json!(null), Category::Scalar)]
#[case(json!("x"), Category::Scalar)]
#[case(json!(0), Category::Scalar)]
fn categorises_json(#[case] value: Value, #[case] expected: Category) {
    assert_eq!(Category::of(&value), expected);
}
