use std::io::Write;
use std::path::PathBuf;

use bevprice::config::{ModelConfig, ModelKind};
use bevprice::{BevpriceError, Config, ModelSource, ValidationPolicy};

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn load_explicit_file() {
    let file = write_config(
        r#"
        [model]
        path = "/srv/models/price.json"

        [validation]
        policy = "collect_all"
        "#,
    );

    let config = Config::load(Some(file.path())).unwrap();
    let model = config.model.expect("model section");
    assert_eq!(model.kind, ModelKind::Linear);
    assert_eq!(config.validation.policy, ValidationPolicy::CollectAll);
    assert_eq!(
        model.source().unwrap(),
        ModelSource::linear("/srv/models/price.json")
    );
}

#[test]
fn empty_file_uses_defaults() {
    let file = write_config("");
    let config = Config::load(Some(file.path())).unwrap();
    assert_eq!(config.validation.policy, ValidationPolicy::FailFast);
}

#[test]
fn malformed_file_is_configuration_error() {
    let file = write_config("[model\npath = ");
    let err = Config::load(Some(file.path())).unwrap_err();
    assert!(matches!(err, BevpriceError::Configuration(ref msg) if msg.contains("Failed to parse")));
}

#[test]
fn model_section_requires_path() {
    let err = Config::from_toml_str("[model]\nkind = \"linear\"\n").unwrap_err();
    assert!(matches!(err, BevpriceError::Configuration(_)));
}

#[test]
fn unknown_policy_is_rejected() {
    let err = Config::from_toml_str("[validation]\npolicy = \"lenient\"\n").unwrap_err();
    assert!(err.to_string().contains("configuration error"));
}

#[test]
fn missing_explicit_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");
    let err = Config::load(Some(missing.as_path())).unwrap_err();
    assert!(err.to_string().contains("Config file not found"));
}

#[test]
fn model_kind_from_extension() {
    assert_eq!(ModelKind::from_path(&PathBuf::from("m.onnx")), ModelKind::Onnx);
    assert_eq!(ModelKind::from_path(&PathBuf::from("m.json")), ModelKind::Linear);
    assert_eq!(ModelKind::from_path(&PathBuf::from("model")), ModelKind::Linear);
}

#[test]
fn for_path_uses_default_tensor_names() {
    let model = ModelConfig::for_path("/m/price.onnx");
    assert_eq!(model.kind, ModelKind::Onnx);
    assert_eq!(model.input_name, "float_input");
    assert_eq!(model.output_name, "label");
}

#[test]
fn override_without_value_is_noop() {
    let config = Config::from_toml_str("[model]\npath = \"/a.json\"\n")
        .unwrap()
        .with_model_path(None);
    assert_eq!(config.model.unwrap().path, PathBuf::from("/a.json"));
}
