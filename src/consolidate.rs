//! Intra-source consolidation.
//!
//! Rows of one source that share (event type, country, date) are merged into
//! a single [`ConsolidatedRecord`] whose id is the content hash of the
//! group's source event ids.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, info_span, warn};

use crate::error::{PipelineError, Result};
use crate::hashing::group_digest;
use crate::merge::{merge_records, InputOrder, MergeOrder};
use crate::observability::{emit_source_counter, MetricName};
use crate::record::{Attribute, ConsolidatedRecord, ConsolidatedTable, FieldValue, Record, Scalar, SourceTable};

/// What to do with a group that has no source event ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyIdPolicy {
    /// Abort the stage, reporting the group key
    #[default]
    Fail,
    /// Drop the group with a warning
    Skip,
}

/// Grouping key. Rows missing any key component are never grouped with
/// other rows; they sort after every complete key, in input order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum GroupKey {
    Keyed {
        event_type: String,
        country: String,
        date: NaiveDate,
    },
    Singleton(usize),
}

impl GroupKey {
    pub fn for_record(index: usize, record: &Record) -> Self {
        match (record.event_type(), record.country(), record.date()) {
            (Some(event_type), Some(country), Some(date)) => GroupKey::Keyed {
                event_type,
                country,
                date,
            },
            _ => GroupKey::Singleton(index),
        }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKey::Keyed {
                event_type,
                country,
                date,
            } => write!(f, "({}, {}, {})", event_type, country, date.format("%Y-%m-%d")),
            GroupKey::Singleton(index) => write!(f, "(incomplete key, row {})", index),
        }
    }
}

/// Collapses same-source rows into one record per group key.
#[derive(Clone)]
pub struct Consolidator {
    policy: EmptyIdPolicy,
    order: Arc<dyn MergeOrder>,
}

impl Default for Consolidator {
    fn default() -> Self {
        Self::new(EmptyIdPolicy::default())
    }
}

impl fmt::Debug for Consolidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Consolidator")
            .field("policy", &self.policy)
            .field("order", &self.order.name())
            .finish()
    }
}

impl Consolidator {
    pub fn new(policy: EmptyIdPolicy) -> Self {
        Self {
            policy,
            order: Arc::new(InputOrder),
        }
    }

    pub fn with_order(mut self, order: Arc<dyn MergeOrder>) -> Self {
        self.order = order;
        self
    }

    pub fn consolidate(&self, table: &SourceTable) -> Result<ConsolidatedTable> {
        let span = info_span!("consolidate", source = %table.source);
        let _enter = span.enter();

        let mut groups: BTreeMap<GroupKey, Vec<&Record>> = BTreeMap::new();
        for (index, record) in table.records.iter().enumerate() {
            groups
                .entry(GroupKey::for_record(index, record))
                .or_default()
                .push(record);
        }

        let mut records = Vec::with_capacity(groups.len());
        let mut skipped_groups = Vec::new();
        for (key, members) in &groups {
            let ids = members.iter().flat_map(|r| r.source_event_ids());
            let Some(event_id) = group_digest(ids) else {
                match self.policy {
                    EmptyIdPolicy::Fail => {
                        return Err(PipelineError::EmptySourceIdGroup {
                            source_name: table.source.clone(),
                            key: key.to_string(),
                        });
                    }
                    EmptyIdPolicy::Skip => {
                        warn!(key = %key, rows = members.len(), "Dropping group without source event ids");
                        skipped_groups.push(key.to_string());
                        continue;
                    }
                }
            };

            let mut merged = merge_records(members, &table.schema, self.order.as_ref());
            merged.set(Attribute::EventId, FieldValue::Scalar(Scalar::text(event_id.as_str())));
            if merged.get(Attribute::Source).map_or(true, FieldValue::is_missing) {
                let kind = table.schema.kind(Attribute::Source);
                merged.set(
                    Attribute::Source,
                    FieldValue::Scalar(Scalar::text(table.source.as_str())).coerce(kind),
                );
            }
            merged.derive_date_parts();

            records.push(ConsolidatedRecord {
                event_id,
                source: table.source.clone(),
                record: merged,
            });
        }

        emit_source_counter(MetricName::ConsolidationGroupsEmitted, &table.source, records.len() as u64);
        if !skipped_groups.is_empty() {
            emit_source_counter(
                MetricName::ConsolidationEmptyIdGroups,
                &table.source,
                skipped_groups.len() as u64,
            );
        }
        info!(
            rows = table.len(),
            groups = records.len(),
            skipped = skipped_groups.len(),
            "Consolidation complete"
        );

        Ok(ConsolidatedTable {
            source: table.source.clone(),
            schema: table.schema.clone(),
            records,
            skipped_groups,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::RecordSchema;

    fn row(ids: &[&str], country: &str, date: &str, comments: &[&str]) -> Record {
        Record::new()
            .with(Attribute::EventType, FieldValue::Scalar(Scalar::text("FL")))
            .with(Attribute::Country, FieldValue::Scalar(Scalar::text(country)))
            .with(Attribute::Date, FieldValue::parse(date, RecordSchema::standard().kind(Attribute::Date)))
            .with(Attribute::SourceEventIds, FieldValue::text_array(ids.iter().copied()))
            .with(Attribute::Comments, FieldValue::text_array(comments.iter().copied()))
    }

    fn table(records: Vec<Record>) -> SourceTable {
        SourceTable::new("glide", RecordSchema::standard(), records)
    }

    #[test]
    fn test_rows_sharing_key_are_merged() {
        let t = table(vec![
            row(&["A2"], "Kenya", "2020-01-01", &["a"]),
            row(&["A1"], "Kenya", "2020-01-01", &["a", "b"]),
            row(&["A3"], "Kenya", "2020-01-02", &[]),
        ]);
        let out = Consolidator::default().consolidate(&t).unwrap();

        assert_eq!(out.len(), 2);
        let first = &out.records[0];
        assert_eq!(first.event_id, group_digest(["A1", "A2"]).unwrap());
        assert_eq!(first.record.get(Attribute::Comments), Some(&FieldValue::text_array(["a", "b"])));
        assert_eq!(first.record.source_event_ids(), vec!["A2", "A1"]);
        assert_eq!(first.record.text(Attribute::EventId), Some(first.event_id.clone()));
        assert_eq!(first.record.get(Attribute::Year), Some(&FieldValue::Scalar(Scalar::Integer(2020))));
        assert_eq!(out.records[1].event_id, group_digest(["A3"]).unwrap());
    }

    #[test]
    fn test_ids_are_stable_across_input_order() {
        let a = row(&["A1"], "Kenya", "2020-01-01", &[]);
        let b = row(&["A2"], "Kenya", "2020-01-01", &[]);
        let forward = Consolidator::default().consolidate(&table(vec![a.clone(), b.clone()])).unwrap();
        let backward = Consolidator::default().consolidate(&table(vec![b, a])).unwrap();
        assert_eq!(forward.records[0].event_id, backward.records[0].event_id);
    }

    #[test]
    fn test_groups_are_emitted_in_key_order() {
        let t = table(vec![
            row(&["S1"], "Somalia", "2020-01-01", &[]),
            row(&["K1"], "Kenya", "2020-01-05", &[]),
        ]);
        let out = Consolidator::default().consolidate(&t).unwrap();
        let countries: Vec<_> = out.records.iter().map(|r| r.record.country().unwrap()).collect();
        assert_eq!(countries, vec!["Kenya", "Somalia"]);
    }

    #[test]
    fn test_empty_id_group_fails_with_key() {
        let t = table(vec![row(&[], "Kenya", "2020-01-01", &[])]);
        let err = Consolidator::default().consolidate(&t).unwrap_err();
        match err {
            PipelineError::EmptySourceIdGroup { source_name, key } => {
                assert_eq!(source_name, "glide");
                assert_eq!(key, "(FL, Kenya, 2020-01-01)");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_id_group_can_be_skipped() {
        let t = table(vec![
            row(&[], "Kenya", "2020-01-01", &[]),
            row(&["S1"], "Somalia", "2020-01-01", &[]),
        ]);
        let out = Consolidator::new(EmptyIdPolicy::Skip).consolidate(&t).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out.skipped_groups, vec!["(FL, Kenya, 2020-01-01)".to_string()]);
    }

    #[test]
    fn test_incomplete_keys_stay_single() {
        let t = table(vec![
            row(&["A1"], "Kenya", "", &[]),
            row(&["A2"], "Kenya", "", &[]),
        ]);
        let out = Consolidator::default().consolidate(&t).unwrap();
        assert_eq!(out.len(), 2);
    }
}
