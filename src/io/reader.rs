use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::constants::{canonical_source_name, known_sources, STANDARDISED_FILE_SUFFIX};
use crate::error::{PipelineError, Result};
use crate::observability::{emit_source_counter, MetricName};
use crate::record::{Attribute, FieldValue, Record, SourceTable, UnifiedRecord};
use crate::schema::{RecordSchema, SchemaValidator, STANDARD_SCHEMA_JSON};

/// Violations logged individually per table before only counting them.
const MAX_LOGGED_VIOLATIONS: usize = 5;

/// One per-source extract found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceExtract {
    pub source: String,
    pub path: PathBuf,
    /// `<stem>.schema.json` next to the extract, if present
    pub schema_path: Option<PathBuf>,
}

/// Find one extract per source in `dir`. When a source has both
/// `<source>_standardised.csv` and `<source>.csv`, the standardised file wins.
pub fn discover(dir: &Path) -> Result<Vec<SourceExtract>> {
    let mut found: BTreeMap<String, SourceExtract> = BTreeMap::new();
    let mut entries: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("csv")))
        .collect();
    entries.sort();

    for path in entries {
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let source = canonical_source_name(stem);
        if !known_sources().contains(&source.as_str()) {
            warn!(source = %source, path = %path.display(), "Unrecognised source; loading with its own name");
        }
        let standardised = stem.ends_with(STANDARDISED_FILE_SUFFIX);
        let schema_path = [
            dir.join(format!("{}.schema.json", stem)),
            dir.join(format!("{}.schema.json", source)),
        ]
        .into_iter()
        .find(|p| p.is_file());

        match found.get(&source) {
            Some(existing) if existing.path.to_string_lossy().contains(STANDARDISED_FILE_SUFFIX) || !standardised => {
                debug!(source = %source, skipped = %path.display(), "Extract already found for source");
            }
            _ => {
                found.insert(
                    source.clone(),
                    SourceExtract {
                        source,
                        path,
                        schema_path,
                    },
                );
            }
        }
    }
    Ok(found.into_values().collect())
}

/// Load every extract in `dir` into a table.
pub fn load_directory(dir: &Path) -> Result<Vec<SourceTable>> {
    if !dir.is_dir() {
        return Err(PipelineError::Config(format!(
            "input directory '{}' does not exist",
            dir.display()
        )));
    }
    let extracts = discover(dir)?;
    info!(dir = %dir.display(), extracts = extracts.len(), "Discovered source extracts");
    extracts.iter().map(load_extract).collect()
}

/// Load one extract with its schema override, validating every row.
pub fn load_extract(extract: &SourceExtract) -> Result<SourceTable> {
    let (schema, validator) = match &extract.schema_path {
        Some(path) => {
            let document: serde_json::Value = serde_json::from_str(&fs::read_to_string(path)?)?;
            debug!(source = %extract.source, schema = %path.display(), "Using source schema override");
            (RecordSchema::from_json(&document)?, SchemaValidator::compile(&document)?)
        }
        None => {
            let document: serde_json::Value = serde_json::from_str(STANDARD_SCHEMA_JSON)?;
            (RecordSchema::from_json(&document)?, SchemaValidator::compile(&document)?)
        }
    };
    read_table(&extract.path, &extract.source, schema, Some(&validator))
}

/// Schema violations found in one extract row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowViolations {
    /// Zero-based data row index
    pub row: usize,
    pub violations: Vec<String>,
}

/// A parsed row together with its cells as typed JSON, before unparseable
/// values are replaced by nulls.
struct ParsedRow {
    record: Record,
    cells: Value,
}

/// Read a CSV extract into a table shaped by `schema`. Rows are validated on
/// their raw cells, so values that fail to parse are still reported.
pub fn read_table(
    path: &Path,
    source: &str,
    schema: RecordSchema,
    validator: Option<&SchemaValidator>,
) -> Result<SourceTable> {
    let rows = read_rows(path, &schema)?;

    if let Some(validator) = validator {
        let failing = row_violations(&rows, validator);
        for failure in failing.iter().take(MAX_LOGGED_VIOLATIONS) {
            warn!(source = %source, row = failure.row, violations = ?failure.violations, "Row does not conform to schema");
        }
        if !failing.is_empty() {
            warn!(source = %source, rows = failing.len(), "Rows failing schema validation");
            emit_source_counter(MetricName::LoadSchemaViolations, source, failing.len() as u64);
        }
    }

    let records: Vec<Record> = rows
        .into_iter()
        .map(|row| {
            let mut record = row.record;
            record.derive_date_parts();
            record
        })
        .collect();
    emit_source_counter(MetricName::LoadRecordsRead, source, records.len() as u64);

    let table = SourceTable::new(source, schema, records);
    info!(source = %source, path = %path.display(), rows = table.len(), "Loaded source extract");
    Ok(table)
}

/// Check every row of an extract against `validator`. Returns the number of
/// rows read and the rows that fail.
pub fn validate_rows(
    path: &Path,
    schema: &RecordSchema,
    validator: &SchemaValidator,
) -> Result<(usize, Vec<RowViolations>)> {
    let rows = read_rows(path, schema)?;
    Ok((rows.len(), row_violations(&rows, validator)))
}

/// Read a unified table written by [`crate::io::write_unified`].
pub fn read_unified(path: &Path, schema: &RecordSchema) -> Result<Vec<UnifiedRecord>> {
    let rows = read_rows(path, schema)?;
    Ok(rows
        .into_iter()
        .map(|row| UnifiedRecord {
            disaster_impact_id: row.record.text(Attribute::DisasterImpactId).unwrap_or_default(),
            event_ids: row.record.texts(Attribute::EventIds),
            record: row.record,
        })
        .collect())
}

fn row_violations(rows: &[ParsedRow], validator: &SchemaValidator) -> Vec<RowViolations> {
    rows.iter()
        .enumerate()
        .filter_map(|(row, parsed)| {
            let violations = validator.violations(&parsed.cells);
            (!violations.is_empty()).then_some(RowViolations { row, violations })
        })
        .collect()
}

fn read_rows(path: &Path, schema: &RecordSchema) -> Result<Vec<ParsedRow>> {
    let mut reader = ReaderBuilder::new().flexible(true).from_path(path)?;
    let columns: Vec<Option<Attribute>> = reader
        .headers()?
        .iter()
        .map(|name| match name.parse::<Attribute>() {
            Ok(attr) => Some(attr),
            Err(_) => {
                debug!(column = %name, "Ignoring unknown column");
                None
            }
        })
        .collect();

    let mut rows = Vec::new();
    for row in reader.records() {
        let row = row?;
        let mut record = Record::new();
        let mut cells = Map::new();
        for (attr, cell) in columns.iter().zip(row.iter()) {
            if let Some(attr) = attr {
                let kind = schema.kind(*attr);
                record.set(*attr, FieldValue::parse(cell, kind));
                cells.insert(attr.column_name().to_string(), FieldValue::raw_json(cell, kind));
            }
        }
        rows.push(ParsedRow {
            record,
            cells: Value::Object(cells),
        });
    }
    Ok(rows)
}
