//! Country row splitting.
//!
//! A row naming several countries becomes one row per country, each carrying
//! a single country name and its ISO3 code. Rows are never dropped: a name
//! with no resolvable code keeps an empty code and is counted.

pub mod iso;
pub mod parse;
pub mod reference;

use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use crate::observability::{emit_source_counter, MetricName};
use crate::record::{Attribute, FieldValue, Record, Scalar, SourceTable};

pub use iso::{resolve, Resolution};
pub use parse::{parse_codes, parse_countries, CountryName};

/// Outcome of splitting one table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitReport {
    pub rows_in: usize,
    pub rows_out: usize,
    /// Input rows that named more than one country
    pub multi_value_rows: usize,
    /// Unresolvable country name → number of rows emitted with an empty code
    pub unresolved: BTreeMap<String, usize>,
}

impl SplitReport {
    pub fn unresolved_total(&self) -> usize {
        self.unresolved.values().sum()
    }

    pub fn absorb(&mut self, other: &SplitReport) {
        self.rows_in += other.rows_in;
        self.rows_out += other.rows_out;
        self.multi_value_rows += other.multi_value_rows;
        for (name, count) in &other.unresolved {
            *self.unresolved.entry(name.clone()).or_default() += count;
        }
    }
}

/// Splits multi-country rows and assigns ISO3 codes.
#[derive(Debug, Clone, Copy, Default)]
pub struct CountrySplitter;

impl CountrySplitter {
    pub fn new() -> Self {
        Self
    }

    /// Split every row of `table`, keeping row order.
    pub fn split_table(&self, table: &SourceTable) -> (SourceTable, SplitReport) {
        let mut report = SplitReport {
            rows_in: table.len(),
            ..Default::default()
        };

        let mut records = Vec::with_capacity(table.len());
        for record in &table.records {
            let rows = self.split_record(record, &mut report);
            records.extend(rows);
        }
        report.rows_out = records.len();

        for (name, count) in &report.unresolved {
            warn!(source = %table.source, country = %name, rows = count, "No ISO3 code for country name");
        }
        emit_source_counter(MetricName::CountryRowsEmitted, &table.source, report.rows_out as u64);
        emit_source_counter(MetricName::CountryMultiValueRows, &table.source, report.multi_value_rows as u64);
        emit_source_counter(
            MetricName::CountryUnresolvedCodes,
            &table.source,
            report.unresolved_total() as u64,
        );
        info!(
            source = %table.source,
            rows_in = report.rows_in,
            rows_out = report.rows_out,
            unresolved = report.unresolved_total(),
            "Country split complete"
        );

        let out = SourceTable {
            source: table.source.clone(),
            schema: table.schema.clone(),
            records,
            drifted_columns: table.drifted_columns.clone(),
        };
        (out, report)
    }

    /// Split one record into one record per country name.
    pub fn split_record(&self, record: &Record, report: &mut SplitReport) -> Vec<Record> {
        let names = record
            .get(Attribute::Country)
            .map(parse_countries)
            .unwrap_or_default();
        if names.is_empty() {
            // Nothing to split on; the row passes through untouched
            return vec![record.clone()];
        }
        if names.len() > 1 {
            report.multi_value_rows += 1;
        }

        let existing_codes = record
            .get(Attribute::CountryCode)
            .map(parse_codes)
            .unwrap_or_default();
        let zipped = existing_codes.len() == names.len();

        names
            .iter()
            .enumerate()
            .map(|(idx, country)| {
                let existing = if zipped { existing_codes.get(idx) } else { None };
                let code = self.code_for(country, existing.map(String::as_str));
                if code.is_empty() {
                    *report.unresolved.entry(country.name.clone()).or_default() += 1;
                }
                let mut row = record.clone();
                row.set(Attribute::Country, shaped(record, Attribute::Country, &country.name));
                row.set(Attribute::CountryCode, shaped(record, Attribute::CountryCode, &code));
                row
            })
            .collect()
    }

    /// Embedded code, then a valid positional code, then resolution by name.
    fn code_for(&self, country: &CountryName, existing: Option<&str>) -> String {
        if let Some(code) = &country.embedded_code {
            return code.clone();
        }
        if let Some(code) = existing.filter(|c| iso::is_valid_alpha3(c)) {
            return code.trim().to_uppercase();
        }
        let resolution = resolve(&country.name);
        if let Resolution::Fuzzy { code, score } = &resolution {
            debug!(country = %country.name, code = %code, score = score, "Fuzzy country match");
        }
        resolution.code().to_string()
    }
}

/// A single value in the storage shape the record already uses for `attr`.
fn shaped(record: &Record, attr: Attribute, value: &str) -> FieldValue {
    let scalar = Scalar::text(value);
    match record.get(attr) {
        Some(FieldValue::Array(_)) if value.is_empty() => FieldValue::Array(Vec::new()),
        Some(FieldValue::Array(_)) => FieldValue::Array(vec![scalar]),
        _ => FieldValue::Scalar(scalar),
    }
}
