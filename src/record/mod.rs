//! Record shapes flowing between the pipeline stages.
//!
//! Every stage consumes one immutable table and emits a new one; no record is
//! mutated across a stage boundary.

pub mod attribute;
pub mod literal;
pub mod table;
pub mod value;

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde_json::{Map, Value};

pub use attribute::Attribute;
pub use table::{ConsolidatedTable, SourceTable};
pub use value::{FieldKind, FieldValue, Scalar, ScalarType};

/// An attribute map for one row. Attributes absent from the map are missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: BTreeMap<Attribute, FieldValue>,
}

/// One disaster-impact observation from one source, after normalisation.
pub type SourceRecord = Record;

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter
    pub fn with(mut self, attr: Attribute, value: FieldValue) -> Self {
        self.fields.insert(attr, value);
        self
    }

    pub fn get(&self, attr: Attribute) -> Option<&FieldValue> {
        self.fields.get(&attr)
    }

    pub fn set(&mut self, attr: Attribute, value: FieldValue) {
        self.fields.insert(attr, value);
    }

    pub fn contains(&self, attr: Attribute) -> bool {
        self.fields.contains_key(&attr)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Attribute, &FieldValue)> {
        self.fields.iter()
    }

    /// First non-empty value of `attr`, rendered as trimmed text.
    pub fn text(&self, attr: Attribute) -> Option<String> {
        self.get(attr)
            .and_then(FieldValue::first)
            .map(|s| s.render().trim().to_string())
            .filter(|s| !s.is_empty())
    }

    /// All non-empty values of `attr`, rendered as trimmed text.
    pub fn texts(&self, attr: Attribute) -> Vec<String> {
        self.get(attr)
            .map(|v| {
                v.values()
                    .into_iter()
                    .map(|s| s.render().trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn event_type(&self) -> Option<String> {
        self.text(Attribute::EventType)
    }

    pub fn country(&self) -> Option<String> {
        self.text(Attribute::Country)
    }

    pub fn country_code(&self) -> Option<String> {
        self.text(Attribute::CountryCode)
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.get(Attribute::Date)
            .and_then(FieldValue::first)
            .and_then(Scalar::as_date)
    }

    pub fn source(&self) -> Option<String> {
        self.text(Attribute::Source)
    }

    pub fn source_event_ids(&self) -> Vec<String> {
        self.texts(Attribute::SourceEventIds)
    }

    /// Fill Year/Month/Day from the date where they are missing.
    pub fn derive_date_parts(&mut self) {
        let Some(date) = self.date() else {
            return;
        };
        let parts = [
            (Attribute::Year, date.year() as i64),
            (Attribute::Month, date.month() as i64),
            (Attribute::Day, date.day() as i64),
        ];
        for (attr, value) in parts {
            let missing = self.get(attr).map(FieldValue::is_missing).unwrap_or(true);
            if missing {
                self.set(attr, FieldValue::Scalar(Scalar::Integer(value)));
            }
        }
    }

    /// JSON object keyed by column name, used for schema validation.
    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .fields
            .iter()
            .map(|(attr, value)| (attr.column_name().to_string(), value.to_json()))
            .collect();
        Value::Object(map)
    }
}

/// One or more SourceRecords from the same source sharing
/// (event_type, country, date), merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsolidatedRecord {
    /// Content hash of the sorted, deduplicated source event ids
    pub event_id: String,
    pub source: String,
    pub record: Record,
}

impl ConsolidatedRecord {
    /// Source-prefixed id used for cross-source provenance.
    pub fn prefixed_id(&self) -> String {
        crate::hashing::prefixed(&self.source, &self.event_id)
    }
}

/// One or more ConsolidatedRecords from any sources describing the same
/// disaster, merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnifiedRecord {
    pub disaster_impact_id: String,
    /// Source-prefixed event ids of every constituent, sorted
    pub event_ids: Vec<String>,
    pub record: Record,
}

impl UnifiedRecord {
    /// Distinct contributing sources, in stored order.
    pub fn sources(&self) -> Vec<String> {
        self.record.texts(Attribute::Source)
    }

    /// Cell values in output column order: id, event ids, then the
    /// standard attributes.
    pub fn to_row(&self) -> Vec<String> {
        let mut row = Vec::with_capacity(Attribute::STANDARD.len() + 2);
        row.push(self.disaster_impact_id.clone());
        row.push(FieldValue::text_array(self.event_ids.iter().cloned()).to_cell());
        for attr in Attribute::STANDARD {
            row.push(self.record.get(attr).map(FieldValue::to_cell).unwrap_or_default());
        }
        row
    }
}

/// Header matching `UnifiedRecord::to_row`.
pub fn unified_header() -> Vec<&'static str> {
    let mut header = vec![
        Attribute::DisasterImpactId.column_name(),
        Attribute::EventIds.column_name(),
    ];
    header.extend(Attribute::STANDARD.iter().map(Attribute::column_name));
    header
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let record = Record::new()
            .with(Attribute::EventType, FieldValue::Scalar(Scalar::text(" FL ")))
            .with(Attribute::Country, FieldValue::Scalar(Scalar::text("Kenya")))
            .with(Attribute::CountryCode, FieldValue::Scalar(Scalar::text("")))
            .with(Attribute::Date, FieldValue::Scalar(Scalar::text("2021-03-01")))
            .with(Attribute::SourceEventIds, FieldValue::text_array(["A1", " ", "A2"]));

        assert_eq!(record.event_type().as_deref(), Some("FL"));
        assert_eq!(record.country().as_deref(), Some("Kenya"));
        assert_eq!(record.country_code(), None);
        assert_eq!(record.date(), NaiveDate::from_ymd_opt(2021, 3, 1));
        assert_eq!(record.source_event_ids(), vec!["A1", "A2"]);
    }

    #[test]
    fn test_derive_date_parts_keeps_existing_values() {
        let mut record = Record::new()
            .with(Attribute::Date, FieldValue::Scalar(Scalar::Date(NaiveDate::from_ymd_opt(2020, 1, 8).unwrap())))
            .with(Attribute::Year, FieldValue::Scalar(Scalar::Integer(1999)));
        record.derive_date_parts();

        assert_eq!(record.get(Attribute::Year), Some(&FieldValue::Scalar(Scalar::Integer(1999))));
        assert_eq!(record.get(Attribute::Month), Some(&FieldValue::Scalar(Scalar::Integer(1))));
        assert_eq!(record.get(Attribute::Day), Some(&FieldValue::Scalar(Scalar::Integer(8))));
    }

    #[test]
    fn test_unified_row_matches_header() {
        let unified = UnifiedRecord {
            disaster_impact_id: "DI_x".to_string(),
            event_ids: vec!["gdacs_1".to_string(), "glide_2".to_string()],
            record: Record::new(),
        };
        let row = unified.to_row();
        assert_eq!(row.len(), unified_header().len());
        assert_eq!(row[1], r#"["gdacs_1","glide_2"]"#);
    }
}
