use jsonschema::JSONSchema;
use serde_json::json;

use disaster_impact::record::{Attribute, FieldKind, ScalarType};
use disaster_impact::schema::RecordSchema;

fn compile(schema: &str) -> JSONSchema {
    let schema_json: serde_json::Value = serde_json::from_str(schema).unwrap();
    JSONSchema::options().compile(&schema_json).unwrap()
}

#[test]
fn standard_example_is_valid() {
    let compiled = compile(include_str!("../schemas/standard_record.v1.json"));
    let instance: serde_json::Value =
        serde_json::from_str(include_str!("resources/standard_record_valid.json")).unwrap();
    assert!(compiled.is_valid(&instance));
}

#[test]
fn lowercase_country_code_is_rejected() {
    let compiled = compile(include_str!("../schemas/standard_record.v1.json"));
    let mut invalid: serde_json::Value =
        serde_json::from_str(include_str!("resources/standard_record_valid.json")).unwrap();
    invalid["Country_Code"] = json!("ken");
    assert!(!compiled.is_valid(&invalid), "country code pattern should fail");
}

#[test]
fn out_of_range_latitude_is_rejected() {
    let compiled = compile(include_str!("../schemas/standard_record.v1.json"));
    let mut invalid: serde_json::Value =
        serde_json::from_str(include_str!("resources/standard_record_valid.json")).unwrap();
    invalid["Latitude"] = json!([123.0]);
    assert!(!compiled.is_valid(&invalid));
}

#[test]
fn gdacs_override_declares_array_columns() {
    let schema_json: serde_json::Value =
        serde_json::from_str(include_str!("../schemas/gdacs.schema.json")).unwrap();
    assert!(JSONSchema::options().compile(&schema_json).is_ok());

    let schema = RecordSchema::from_json(&schema_json).unwrap();
    assert_eq!(schema.kind(Attribute::Severity), FieldKind::Array(ScalarType::Number));
    assert_eq!(schema.kind(Attribute::AlertLevel), FieldKind::Array(ScalarType::Text));
    // Undeclared columns keep their standard kind
    assert_eq!(schema.kind(Attribute::Fatalities), FieldKind::Scalar(ScalarType::Number));
}
