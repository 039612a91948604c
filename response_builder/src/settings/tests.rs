//! Unit tests for typed settings and layered loading.

use camino::Utf8PathBuf;
use figment::Jail;
use rstest::rstest;
use serde_json::{Map, Value, json};

use super::*;
use crate::BuilderError;

fn node(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected an object, got {other}"),
    }
}

#[rstest]
fn defaults_decode_to_default_settings() {
    let config = ResponseBuilderConfig::from_node(ResponseBuilderConfig::defaults())
        .expect("defaults are valid");
    assert_eq!(config, ResponseBuilderConfig::default());
    assert_eq!(config.encoding_options, 271);
    assert_eq!(config.debug.exception_handler.trace_key, "trace");
}

#[rstest]
fn partial_nodes_fall_back_to_defaults() {
    let config = ResponseBuilderConfig::from_node(node(json!({"max_code": 2000})))
        .expect("partial node");
    assert_eq!(config.min_code, DEFAULT_MIN_CODE);
    assert_eq!(config.max_code, 2000);
}

#[rstest]
fn mistyped_nodes_are_decode_errors() {
    let err = ResponseBuilderConfig::from_node(node(json!({"min_code": "low"})))
        .expect_err("string code");
    assert!(matches!(err.as_ref(), BuilderError::Decode(_)));
}

#[rstest]
#[case::negative_min(json!({"min_code": -1}), "min_code")]
#[case::max_below_min(json!({"min_code": 500, "max_code": 499}), "max_code")]
fn code_bounds_are_validated(#[case] settings: Value, #[case] expected_name: &str) {
    let err = ResponseBuilderConfig::from_node(node(settings)).expect_err("bad bounds");
    assert!(
        matches!(err.as_ref(), BuilderError::OutOfRange { name, .. } if name == expected_name),
        "unexpected error: {err}"
    );
}

#[rstest]
fn converter_table_is_validated() {
    let err = ResponseBuilderConfig::from_node(node(json!({
        "converter": {"classes": {"App\\Models\\User": {"handler": "to_json"}}}
    })))
    .expect_err("unknown handler");
    assert!(matches!(err.as_ref(), BuilderError::Configuration { .. }));
}

#[rstest]
#[case(100, true)]
#[case(1024, true)]
#[case(99, false)]
#[case(1025, false)]
fn api_codes_respect_configured_range(#[case] code: i64, #[case] accepted: bool) {
    let config = ResponseBuilderConfig::default();
    assert_eq!(config.assert_api_code(&code).is_ok(), accepted);
}

#[rstest]
fn converter_registry_follows_priorities() {
    let config = ResponseBuilderConfig::from_node(node(json!({
        "converter": {"classes": {
            "App\\Models\\Model": {"handler": "to_array"},
            "App\\Models\\User": {"handler": "to_array", "pri": 1}
        }}
    })))
    .expect("valid converters");
    let registry = config.converter_registry().expect("registry");
    let classes: Vec<_> = registry.entries().iter().map(|entry| entry.class()).collect();
    assert_eq!(classes, ["App\\Models\\User", "App\\Models\\Model"]);
}

#[rstest]
fn load_without_sources_yields_defaults() {
    let config = ResponseBuilderConfig::load(&LoadOptions::default()).expect("defaults load");
    assert_eq!(config, ResponseBuilderConfig::default());
}

#[rstest]
fn load_layers_file_environment_and_overrides() {
    Jail::expect_with(|j| {
        j.create_file(
            "response_builder.toml",
            r#"
min_code = 150
max_code = 900

[debug]
debug_key = "file_debug"
"#,
        )?;
        j.set_env("RB_SETTINGS_MAX_CODE", "950");
        j.set_env("RB_SETTINGS_DEBUG__EXCEPTION_HANDLER__TRACE_ENABLED", "true");
        let options = LoadOptions {
            file: Some(Utf8PathBuf::from("response_builder.toml")),
            env_prefix: Some("RB_SETTINGS_".to_owned()),
            overrides: Some(node(json!({"max_code": 999}))),
        };
        let config = ResponseBuilderConfig::load(&options).expect("layers load");
        assert_eq!(config.min_code, 150);
        assert_eq!(config.max_code, 999);
        assert_eq!(config.debug.debug_key, "file_debug");
        assert!(config.debug.exception_handler.trace_enabled);
        assert_eq!(config.debug.exception_handler.trace_key, "trace");
        Ok(())
    });
}

#[rstest]
fn load_skips_missing_documents() {
    Jail::expect_with(|_| {
        let options = LoadOptions {
            file: Some(Utf8PathBuf::from("absent.toml")),
            ..LoadOptions::default()
        };
        assert_eq!(
            ResponseBuilderConfig::load(&options).expect("missing file skipped"),
            ResponseBuilderConfig::default()
        );
        Ok(())
    });
}

#[rstest]
fn load_reports_every_failing_source() {
    Jail::expect_with(|j| {
        j.create_file("broken.json", "{")?;
        let options = LoadOptions {
            file: Some(Utf8PathBuf::from("broken.json")),
            overrides: Some(node(json!({"debug": "verbose"}))),
            ..LoadOptions::default()
        };
        let err = ResponseBuilderConfig::load(&options).expect_err("two failures");
        let BuilderError::Aggregate(errors) = err.as_ref() else {
            panic!("expected an aggregate, got {err:?}");
        };
        let collected: Vec<_> = errors.errors().collect();
        assert!(matches!(collected.as_slice(), [
            BuilderError::File { .. },
            BuilderError::ConfigTypeConflict { .. }
        ]));
        Ok(())
    });
}

#[rstest]
#[case::empty_list(json!({"converter": {"classes": []}}), 0)]
#[case::empty_mapping(json!({"converter": {"classes": {}}}), 0)]
#[case::list_of_entries(
    json!({"converter": {"classes": [{"handler": "to_array"}]}}),
    1
)]
fn load_accepts_converter_lists_over_default_mappings(
    #[case] overrides: Value,
    #[case] expected_entries: usize,
) {
    let options = LoadOptions {
        overrides: Some(node(overrides)),
        ..LoadOptions::default()
    };
    let config = ResponseBuilderConfig::load(&options).expect("list merges into mapping");
    assert_eq!(config.converter.classes.len(), expected_entries);
    let registry = config.converter_registry().expect("registry");
    assert_eq!(registry.entries().len(), expected_entries);
}

#[rstest]
fn load_returns_a_lone_failure_unwrapped() {
    let options = LoadOptions {
        overrides: Some(node(json!({"converter": "none"}))),
        ..LoadOptions::default()
    };
    let err = ResponseBuilderConfig::load(&options).expect_err("scalar over mapping");
    assert!(matches!(
        err.as_ref(),
        BuilderError::ConfigTypeConflict { key, .. } if key == "converter"
    ));
}
