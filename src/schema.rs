//! Record schema resolution and defensive row validation.
//!
//! Per-source extracts declare their column types in a JSON Schema
//! document. Each declared type is resolved once into a [`FieldKind`], which
//! decides both how cells are parsed and how fields merge (arrays union,
//! scalars first-wins).

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use jsonschema::JSONSchema;
use serde_json::Value;
use tracing::debug;

use crate::error::{PipelineError, Result};
use crate::record::{Attribute, FieldKind, ScalarType};

/// Bundled JSON Schema for the standard attribute set.
pub const STANDARD_SCHEMA_JSON: &str = include_str!("../schemas/standard_record.v1.json");

/// Attribute → storage kind, covering at least the standard attribute set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSchema {
    kinds: BTreeMap<Attribute, FieldKind>,
}

impl RecordSchema {
    /// Kinds of the standard attribute set.
    pub fn standard() -> Self {
        let kinds = Attribute::STANDARD
            .iter()
            .map(|attr| (*attr, standard_kind(*attr)))
            .collect();
        Self { kinds }
    }

    /// Resolve a JSON Schema document. Properties the document omits keep
    /// their standard kind; properties that are not standard attributes are
    /// ignored.
    pub fn from_json(document: &Value) -> Result<Self> {
        let properties = document
            .get("properties")
            .and_then(Value::as_object)
            .ok_or_else(|| PipelineError::Schema("schema has no 'properties' object".to_string()))?;

        let mut schema = Self::standard();
        for (name, property) in properties {
            let Ok(attr) = name.parse::<Attribute>() else {
                debug!("Ignoring non-standard schema property '{}'", name);
                continue;
            };
            let kind = resolve_kind(property)
                .ok_or_else(|| PipelineError::Schema(format!("property '{}' has no usable type", name)))?;
            schema.kinds.insert(attr, kind);
        }
        Ok(schema)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let document: Value = serde_json::from_str(&content)?;
        Self::from_json(&document)
    }

    pub fn kind(&self, attr: Attribute) -> FieldKind {
        self.kinds.get(&attr).copied().unwrap_or_else(|| standard_kind(attr))
    }

    pub fn attributes(&self) -> impl Iterator<Item = (Attribute, FieldKind)> + '_ {
        self.kinds.iter().map(|(attr, kind)| (*attr, *kind))
    }

    pub fn with_kind(mut self, attr: Attribute, kind: FieldKind) -> Self {
        self.kinds.insert(attr, kind);
        self
    }

    /// A schema able to hold values of both: any field that is an array in
    /// either schema becomes an array.
    pub fn widen(&self, other: &RecordSchema) -> RecordSchema {
        let mut kinds = self.kinds.clone();
        for (attr, kind) in other.attributes() {
            let merged = match (self.kind(attr), kind) {
                (FieldKind::Array(t), _) | (_, FieldKind::Array(t)) => FieldKind::Array(t),
                (ours, _) => ours,
            };
            kinds.insert(attr, merged);
        }
        RecordSchema { kinds }
    }
}

impl Default for RecordSchema {
    fn default() -> Self {
        Self::standard()
    }
}

/// Storage kind of each standard attribute.
pub fn standard_kind(attr: Attribute) -> FieldKind {
    use Attribute::*;
    match attr {
        SourceEventIds | Location | Source | Comments | ExternalLinks | EventIds => {
            FieldKind::Array(ScalarType::Text)
        }
        Latitude | Longitude => FieldKind::Array(ScalarType::Number),
        Date => FieldKind::Scalar(ScalarType::Date),
        Year | Month | Day => FieldKind::Scalar(ScalarType::Integer),
        Severity | PopulationAffected | Fatalities | PeopleDisplaced | FinancialLoss => {
            FieldKind::Scalar(ScalarType::Number)
        }
        EventId | EventName | EventType | Country | CountryCode | Time | AlertLevel
        | DisasterImpactId => FieldKind::Scalar(ScalarType::Text),
    }
}

fn declared_types(property: &Value) -> Vec<&str> {
    match property.get("type") {
        Some(Value::String(t)) => vec![t.as_str()],
        Some(Value::Array(ts)) => ts.iter().filter_map(Value::as_str).collect(),
        _ => Vec::new(),
    }
}

fn resolve_scalar(property: &Value) -> Option<ScalarType> {
    let types = declared_types(property);
    let is_date = matches!(
        property.get("format").and_then(Value::as_str),
        Some("date") | Some("date-time")
    );
    types.iter().find(|t| **t != "null").map(|t| match *t {
        "number" => ScalarType::Number,
        "integer" => ScalarType::Integer,
        "string" if is_date => ScalarType::Date,
        _ => ScalarType::Text,
    })
}

fn resolve_kind(property: &Value) -> Option<FieldKind> {
    let types = declared_types(property);
    if types.contains(&"array") {
        let item = property
            .get("items")
            .and_then(resolve_scalar)
            .unwrap_or(ScalarType::Text);
        return Some(FieldKind::Array(item));
    }
    if types.is_empty() {
        return None;
    }
    // A null-only declaration still carries text
    Some(FieldKind::Scalar(resolve_scalar(property).unwrap_or(ScalarType::Text)))
}

/// Compiled JSON Schema used to flag malformed rows before merging.
pub struct SchemaValidator {
    compiled: JSONSchema,
}

impl SchemaValidator {
    pub fn compile(document: &Value) -> Result<Self> {
        let compiled = JSONSchema::options()
            .compile(document)
            .map_err(|e| PipelineError::Schema(format!("invalid JSON Schema: {}", e)))?;
        Ok(Self { compiled })
    }

    pub fn standard() -> Result<Self> {
        let document: Value = serde_json::from_str(STANDARD_SCHEMA_JSON)?;
        Self::compile(&document)
    }

    /// Human-readable violations for one row; empty when the row conforms.
    pub fn violations(&self, instance: &Value) -> Vec<String> {
        match self.compiled.validate(instance) {
            Ok(()) => Vec::new(),
            Err(errors) => errors
                .map(|e| format!("{}: {}", e.instance_path, e))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bundled_schema_matches_standard_kinds() {
        let document: Value = serde_json::from_str(STANDARD_SCHEMA_JSON).unwrap();
        let parsed = RecordSchema::from_json(&document).unwrap();
        assert_eq!(parsed, RecordSchema::standard());
    }

    #[test]
    fn test_source_override_declares_arrays() {
        let document = json!({
            "properties": {
                "Severity": {"type": ["array", "null"], "items": {"type": "number"}},
                "Alert_Level": {"type": "array", "items": {"type": "string"}},
                "Magnitude": {"type": "number"}
            }
        });
        let schema = RecordSchema::from_json(&document).unwrap();
        assert_eq!(schema.kind(Attribute::Severity), FieldKind::Array(ScalarType::Number));
        assert_eq!(schema.kind(Attribute::AlertLevel), FieldKind::Array(ScalarType::Text));
        assert_eq!(schema.kind(Attribute::Country), FieldKind::Scalar(ScalarType::Text));
    }

    #[test]
    fn test_schema_without_properties_is_rejected() {
        assert!(RecordSchema::from_json(&json!({"type": "object"})).is_err());
    }

    #[test]
    fn test_widen_prefers_arrays() {
        let gdacs = RecordSchema::standard()
            .with_kind(Attribute::Severity, FieldKind::Array(ScalarType::Number));
        let widened = RecordSchema::standard().widen(&gdacs);
        assert_eq!(widened.kind(Attribute::Severity), FieldKind::Array(ScalarType::Number));
        assert_eq!(widened.kind(Attribute::Date), FieldKind::Scalar(ScalarType::Date));
    }

    #[test]
    fn test_validator_flags_wrong_types() {
        let validator = SchemaValidator::standard().unwrap();
        let good = json!({"Event_Type": "FL", "Latitude": [1.0], "Date": "2020-01-01"});
        let bad = json!({"Event_Type": "FL", "Latitude": "north"});
        assert!(validator.violations(&good).is_empty());
        assert!(!validator.violations(&bad).is_empty());
    }
}
