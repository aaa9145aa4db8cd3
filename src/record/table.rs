use std::collections::BTreeSet;

use tracing::warn;

use super::{Attribute, ConsolidatedRecord, FieldValue, Record, Scalar};
use crate::observability::{emit_source_counter, MetricName};
use crate::schema::RecordSchema;

/// One source's records, shaped by that source's schema.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceTable {
    pub source: String,
    pub schema: RecordSchema,
    pub records: Vec<Record>,
    /// Columns no record carried, filled with schema defaults
    pub drifted_columns: Vec<Attribute>,
}

impl SourceTable {
    /// Build a table whose every record carries every schema attribute in
    /// the schema's storage shape.
    ///
    /// A column missing from all records is schema drift: it is filled with
    /// the kind's empty value and logged once. A missing `Source` is filled
    /// with the table's source name instead.
    pub fn new(source: impl Into<String>, schema: RecordSchema, records: Vec<Record>) -> Self {
        let source = source.into();
        let present: BTreeSet<Attribute> = records
            .iter()
            .flat_map(|r| r.iter().map(|(attr, _)| *attr))
            .collect();
        let drifted_columns: Vec<Attribute> = schema
            .attributes()
            .map(|(attr, _)| attr)
            .filter(|attr| !present.contains(attr) && *attr != Attribute::Source)
            .collect();
        if !records.is_empty() {
            for attr in &drifted_columns {
                warn!(source = %source, column = %attr, "Column missing from extract; filling with schema default");
            }
            if !drifted_columns.is_empty() {
                emit_source_counter(MetricName::LoadSchemaDriftFills, &source, drifted_columns.len() as u64);
            }
        }

        let records = records
            .into_iter()
            .map(|record| conform(record, &schema, &source))
            .collect();

        Self {
            source,
            schema,
            records,
            drifted_columns,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn conform(record: Record, schema: &RecordSchema, source: &str) -> Record {
    let mut out = Record::new();
    for (attr, kind) in schema.attributes() {
        let value = match record.get(attr) {
            Some(value) => value.clone().coerce(kind),
            None => FieldValue::empty(kind),
        };
        out.set(attr, value);
    }
    let source_missing = out.get(Attribute::Source).map(FieldValue::is_missing).unwrap_or(true);
    if source_missing {
        let kind = schema.kind(Attribute::Source);
        out.set(
            Attribute::Source,
            FieldValue::Scalar(Scalar::text(source)).coerce(kind),
        );
    }
    out
}

/// Output of intra-source consolidation for one source.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsolidatedTable {
    pub source: String,
    pub schema: RecordSchema,
    pub records: Vec<ConsolidatedRecord>,
    /// Keys of groups dropped for lacking source event ids
    pub skipped_groups: Vec<String>,
}

impl ConsolidatedTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{FieldKind, ScalarType};

    #[test]
    fn test_missing_columns_are_filled_with_defaults() {
        let record = Record::new()
            .with(Attribute::EventType, FieldValue::Scalar(Scalar::text("FL")))
            .with(Attribute::Country, FieldValue::Scalar(Scalar::text("Kenya")));
        let table = SourceTable::new("glide", RecordSchema::standard(), vec![record]);

        let conformed = &table.records[0];
        assert_eq!(conformed.get(Attribute::Comments), Some(&FieldValue::Array(Vec::new())));
        assert_eq!(conformed.get(Attribute::Severity), Some(&FieldValue::Scalar(Scalar::Null)));
        assert_eq!(conformed.source().as_deref(), Some("glide"));
        assert!(table.drifted_columns.contains(&Attribute::Comments));
        assert!(!table.drifted_columns.contains(&Attribute::EventType));
        assert!(!table.drifted_columns.contains(&Attribute::Source));
    }

    #[test]
    fn test_values_are_coerced_to_schema_kind() {
        let schema = RecordSchema::standard()
            .with_kind(Attribute::Severity, FieldKind::Array(ScalarType::Number));
        let record = Record::new()
            .with(Attribute::Severity, FieldValue::Scalar(Scalar::Number(2.5)));
        let table = SourceTable::new("gdacs", schema, vec![record]);

        assert_eq!(
            table.records[0].get(Attribute::Severity),
            Some(&FieldValue::Array(vec![Scalar::Number(2.5)]))
        );
    }
}
