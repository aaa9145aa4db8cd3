//! Cross-source linkage.
//!
//! Consolidated records from every source are bucketed by event type and
//! country, then windowed by date inside each bucket. Each group of linked
//! records becomes one [`UnifiedRecord`]. Every input record lands in exactly
//! one output record; [`check_partition`] verifies it before anything is
//! returned.

pub mod spatial;

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, info_span};

use crate::constants::DEFAULT_WINDOW_DAYS;
use crate::error::{PipelineError, Result};
use crate::hashing::disaster_impact_id;
use crate::merge::{merge_records, InputOrder, MergeOrder, SourcePriority};
use crate::observability::{emit_counter, emit_gauge, MetricName};
use crate::record::{Attribute, ConsolidatedTable, FieldKind, FieldValue, Record, Scalar, ScalarType, UnifiedRecord};
use crate::schema::RecordSchema;

pub use spatial::{SecondaryMatcher, SpatialProximityMatcher};

/// Which country attribute buckets records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKey {
    /// ISO3 code, falling back to the uppercased name when the code is empty
    #[default]
    CountryCode,
    Country,
}

/// Window and ordering rules for the linker.
#[derive(Debug, Clone)]
pub struct LinkagePolicy {
    pub window_days: i64,
    pub match_key: MatchKey,
    /// Unordered source pair → window override
    pub pair_windows: BTreeMap<(String, String), i64>,
    pub priority: SourcePriority,
}

impl Default for LinkagePolicy {
    fn default() -> Self {
        Self {
            window_days: DEFAULT_WINDOW_DAYS,
            match_key: MatchKey::default(),
            pair_windows: BTreeMap::new(),
            priority: SourcePriority::default(),
        }
    }
}

impl LinkagePolicy {
    pub fn with_window_days(mut self, days: i64) -> Self {
        self.window_days = days;
        self
    }

    pub fn with_match_key(mut self, key: MatchKey) -> Self {
        self.match_key = key;
        self
    }

    pub fn with_pair_window(mut self, a: &str, b: &str, days: i64) -> Self {
        self.pair_windows.insert(pair_key(a, b), days);
        self
    }

    pub fn with_priority(mut self, priority: SourcePriority) -> Self {
        self.priority = priority;
        self
    }

    /// Window half-width for an anchor of source `a` and a candidate of `b`.
    pub fn window_for(&self, a: &str, b: &str) -> i64 {
        self.pair_windows
            .get(&pair_key(a, b))
            .copied()
            .unwrap_or(self.window_days)
    }

    /// Widest window any pair can use; bounds the scan inside a bucket.
    fn max_window(&self) -> i64 {
        self.pair_windows
            .values()
            .copied()
            .chain(std::iter::once(self.window_days))
            .max()
            .unwrap_or(self.window_days)
    }

    pub fn validate(&self) -> Result<()> {
        if self.window_days < 0 {
            return Err(PipelineError::Config(format!(
                "window_days must not be negative, got {}",
                self.window_days
            )));
        }
        if let Some(((a, b), days)) = self.pair_windows.iter().find(|(_, d)| **d < 0) {
            return Err(PipelineError::Config(format!(
                "window for pair ({}, {}) must not be negative, got {}",
                a, b, days
            )));
        }
        Ok(())
    }

    fn merge_order(&self) -> Arc<dyn MergeOrder> {
        if self.priority.is_empty() {
            Arc::new(InputOrder)
        } else {
            Arc::new(self.priority.clone())
        }
    }
}

fn pair_key(a: &str, b: &str) -> (String, String) {
    let (a, b) = (a.to_lowercase(), b.to_lowercase());
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Bucket a record falls into. Records missing the event type, the date or
/// any country key cannot be compared and sort last, one bucket each.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum BucketKey {
    Keyed { event_type: String, country: String },
    Singleton(usize),
}

impl fmt::Display for BucketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BucketKey::Keyed { event_type, country } => write!(f, "({}, {})", event_type, country),
            BucketKey::Singleton(index) => write!(f, "(singleton {})", index),
        }
    }
}

/// One consolidated record as seen by the linker.
struct Candidate<'a> {
    index: usize,
    source: &'a str,
    prefixed_id: String,
    rank: usize,
    date: Option<NaiveDate>,
    record: &'a Record,
}

/// Schema able to hold every table's values. `Source` is always a list.
pub fn unified_schema<'a>(schemas: impl IntoIterator<Item = &'a RecordSchema>) -> RecordSchema {
    schemas
        .into_iter()
        .fold(RecordSchema::standard(), |acc, schema| acc.widen(schema))
        .with_kind(Attribute::Source, FieldKind::Array(ScalarType::Text))
}

/// Verify that `groups` use each of `0..total` exactly once.
pub fn check_partition<'a>(total: usize, groups: impl IntoIterator<Item = &'a [usize]>) -> Result<()> {
    let mut seen = vec![0usize; total];
    let mut out_of_range = Vec::new();
    for group in groups {
        for &index in group {
            match seen.get_mut(index) {
                Some(count) => *count += 1,
                None => out_of_range.push(index),
            }
        }
    }
    let missing: Vec<usize> = (0..total).filter(|i| seen[*i] == 0).collect();
    let duplicated: Vec<usize> = (0..total).filter(|i| seen[*i] > 1).collect();
    if missing.is_empty() && duplicated.is_empty() && out_of_range.is_empty() {
        return Ok(());
    }
    let sample = missing
        .iter()
        .chain(duplicated.iter())
        .chain(out_of_range.iter())
        .take(5)
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    Err(PipelineError::PartitionViolation {
        missing: missing.len(),
        duplicated: duplicated.len() + out_of_range.len(),
        sample: format!("record indices {}", sample),
    })
}

/// Build a unified record from already merged fields and its constituents'
/// prefixed ids.
pub fn build_unified(mut record: Record, mut event_ids: Vec<String>) -> Option<UnifiedRecord> {
    event_ids.sort();
    let id = disaster_impact_id(&event_ids)?;
    record.set(Attribute::DisasterImpactId, FieldValue::Scalar(Scalar::text(id.as_str())));
    record.set(Attribute::EventIds, FieldValue::text_array(event_ids.iter().cloned()));
    Some(UnifiedRecord {
        disaster_impact_id: id,
        event_ids,
        record,
    })
}

/// Links consolidated records across sources.
#[derive(Debug, Clone, Default)]
pub struct CrossSourceLinker {
    policy: LinkagePolicy,
}

impl CrossSourceLinker {
    pub fn new(policy: LinkagePolicy) -> Result<Self> {
        policy.validate()?;
        Ok(Self { policy })
    }

    pub fn policy(&self) -> &LinkagePolicy {
        &self.policy
    }

    /// Link every record of `tables` into unified records.
    ///
    /// Output order is bucket key order, then anchor order inside a bucket.
    pub fn link(&self, tables: &[ConsolidatedTable]) -> Result<Vec<UnifiedRecord>> {
        let span = info_span!("link", tables = tables.len());
        let _enter = span.enter();

        let schema = unified_schema(tables.iter().map(|t| &t.schema));
        let order = self.policy.merge_order();

        let candidates: Vec<Candidate<'_>> = tables
            .iter()
            .flat_map(|table| table.records.iter())
            .enumerate()
            .map(|(index, consolidated)| Candidate {
                index,
                source: consolidated.source.as_str(),
                prefixed_id: consolidated.prefixed_id(),
                rank: self.policy.priority.rank_of(&consolidated.source),
                date: consolidated.record.date(),
                record: &consolidated.record,
            })
            .collect();

        let mut buckets: BTreeMap<BucketKey, Vec<&Candidate<'_>>> = BTreeMap::new();
        for candidate in &candidates {
            buckets
                .entry(self.bucket_key(candidate))
                .or_default()
                .push(candidate);
        }
        let keyed_buckets = buckets
            .keys()
            .filter(|k| matches!(k, BucketKey::Keyed { .. }))
            .count();
        debug!(buckets = buckets.len(), keyed = keyed_buckets, "Bucketed candidates");

        let mut groups: Vec<Vec<usize>> = Vec::new();
        for (key, members) in buckets.iter_mut() {
            members.sort_by(|a, b| {
                a.date
                    .cmp(&b.date)
                    .then(a.rank.cmp(&b.rank))
                    .then_with(|| a.prefixed_id.cmp(&b.prefixed_id))
            });
            let bucket_groups = self.window_groups(members);
            if bucket_groups.len() < members.len() {
                debug!(bucket = %key, members = members.len(), groups = bucket_groups.len(), "Linked within bucket");
            }
            groups.extend(bucket_groups);
        }

        check_partition(candidates.len(), groups.iter().map(Vec::as_slice))?;

        let mut unified = Vec::with_capacity(groups.len());
        for group in &groups {
            let members: Vec<&Candidate<'_>> = group.iter().map(|i| &candidates[*i]).collect();
            let records: Vec<&Record> = members.iter().map(|c| c.record).collect();
            let mut merged = merge_records(&records, &schema, order.as_ref());
            // The anchor names the group in the Event_ID column
            merged.set(
                Attribute::EventId,
                FieldValue::Scalar(Scalar::text(members[0].prefixed_id.as_str())),
            );
            let event_ids = members.iter().map(|c| c.prefixed_id.clone()).collect();
            let record = build_unified(merged, event_ids).ok_or_else(|| PipelineError::PartitionViolation {
                missing: group.len(),
                duplicated: 0,
                sample: format!("group anchored at {} has no ids", members[0].prefixed_id),
            })?;
            unified.push(record);
        }

        let multi_source = unified.iter().filter(|u| u.sources().len() > 1).count();
        emit_counter(MetricName::LinkageRecordsConsumed, candidates.len() as u64);
        emit_counter(MetricName::LinkageUnifiedRecords, unified.len() as u64);
        emit_counter(MetricName::LinkageMultiSourceRecords, multi_source as u64);
        emit_gauge(MetricName::LinkageBuckets, keyed_buckets as f64);
        info!(
            consumed = candidates.len(),
            unified = unified.len(),
            multi_source = multi_source,
            "Linkage complete"
        );

        Ok(unified)
    }

    fn bucket_key(&self, candidate: &Candidate<'_>) -> BucketKey {
        let record = candidate.record;
        let country = match self.policy.match_key {
            MatchKey::CountryCode => record
                .country_code()
                .or_else(|| record.country())
                .map(|c| c.to_uppercase()),
            MatchKey::Country => record.country().map(|c| c.to_uppercase()),
        };
        match (record.event_type(), country, candidate.date) {
            (Some(event_type), Some(country), Some(_)) => BucketKey::Keyed { event_type, country },
            _ => BucketKey::Singleton(candidate.index),
        }
    }

    /// Greedy windowing over a bucket sorted by (date, rank, id): each
    /// unprocessed anchor absorbs every later unprocessed member inside its
    /// window.
    fn window_groups(&self, members: &[&Candidate<'_>]) -> Vec<Vec<usize>> {
        let max_window = self.policy.max_window();
        let mut processed = vec![false; members.len()];
        let mut groups = Vec::new();

        for i in 0..members.len() {
            if processed[i] {
                continue;
            }
            processed[i] = true;
            let anchor = members[i];
            let mut group = vec![anchor.index];

            if let Some(anchor_date) = anchor.date {
                for j in (i + 1)..members.len() {
                    let Some(date) = members[j].date else {
                        continue;
                    };
                    let gap = (date - anchor_date).num_days();
                    if gap > max_window {
                        break;
                    }
                    if processed[j] {
                        continue;
                    }
                    if gap.abs() <= self.policy.window_for(anchor.source, members[j].source) {
                        processed[j] = true;
                        group.push(members[j].index);
                    }
                }
            }
            groups.push(group);
        }
        groups
    }
}
