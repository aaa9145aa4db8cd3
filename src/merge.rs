//! Field merge policy shared by per-source consolidation and cross-source
//! linkage: array fields union with set semantics, scalar fields take the
//! first non-missing value under an explicit [`MergeOrder`].

use std::collections::HashSet;

use tracing::warn;

use crate::record::{Attribute, FieldValue, Record, Scalar};
use crate::schema::RecordSchema;

/// Ordering applied to a group before first-wins scalar selection.
pub trait MergeOrder: Send + Sync {
    /// Lower ranks are consulted first. Equal ranks keep traversal order.
    fn rank(&self, record: &Record) -> usize;

    fn name(&self) -> &'static str;
}

/// Keep the traversal order the caller supplies.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputOrder;

impl MergeOrder for InputOrder {
    fn rank(&self, _record: &Record) -> usize {
        0
    }

    fn name(&self) -> &'static str {
        "input_order"
    }
}

/// Prefer records from sources earlier in the list. Unlisted sources rank
/// after every listed one.
#[derive(Debug, Clone, Default)]
pub struct SourcePriority {
    sources: Vec<String>,
}

impl SourcePriority {
    pub fn new<I, S>(sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sources: sources.into_iter().map(|s| s.into().to_lowercase()).collect(),
        }
    }

    /// Rank of a source name on its own.
    pub fn rank_of(&self, source: &str) -> usize {
        let source = source.to_lowercase();
        self.sources
            .iter()
            .position(|s| *s == source)
            .unwrap_or(self.sources.len())
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl MergeOrder for SourcePriority {
    fn rank(&self, record: &Record) -> usize {
        // A record merged from several sources ranks as its best source
        record
            .texts(Attribute::Source)
            .iter()
            .map(|s| self.rank_of(s))
            .min()
            .unwrap_or(self.sources.len())
    }

    fn name(&self) -> &'static str {
        "source_priority"
    }
}

/// Merge `records` into one record over every attribute of `schema`.
/// Identifier attributes are left for the caller to assign.
pub fn merge_records(records: &[&Record], schema: &RecordSchema, order: &dyn MergeOrder) -> Record {
    let mut ordered: Vec<&Record> = records.to_vec();
    ordered.sort_by_key(|r| order.rank(r));

    let mut merged = Record::new();
    for (attr, kind) in schema.attributes() {
        if attr.is_identifier() {
            continue;
        }
        let value = if kind.is_array() {
            FieldValue::Array(union_values(ordered.iter().filter_map(|r| r.get(attr))))
        } else {
            ordered
                .iter()
                .filter_map(|r| r.get(attr))
                .find_map(FieldValue::first)
                .cloned()
                .map(FieldValue::Scalar)
                .unwrap_or_else(|| FieldValue::empty(kind))
        };
        merged.set(attr, value);
    }

    if schema.kind(Attribute::Latitude).is_array() && schema.kind(Attribute::Longitude).is_array() {
        match union_coordinates(&ordered) {
            Some((lats, lons)) => {
                merged.set(Attribute::Latitude, FieldValue::Array(lats));
                merged.set(Attribute::Longitude, FieldValue::Array(lons));
            }
            None => warn!("Latitude and longitude lists differ in length; coordinates merged per field"),
        }
    }
    merged
}

/// Union of (latitude, longitude) pairs in first-seen order, so points that
/// share one coordinate stay distinct. `None` when any record holds lists of
/// different lengths and cannot be paired.
fn union_coordinates(records: &[&Record]) -> Option<(Vec<Scalar>, Vec<Scalar>)> {
    let mut seen = HashSet::new();
    let mut lats = Vec::new();
    let mut lons = Vec::new();
    for record in records {
        let lat = record.get(Attribute::Latitude).map(FieldValue::values).unwrap_or_default();
        let lon = record.get(Attribute::Longitude).map(FieldValue::values).unwrap_or_default();
        if lat.len() != lon.len() {
            return None;
        }
        for (a, b) in lat.into_iter().zip(lon) {
            if seen.insert((a.clone(), b.clone())) {
                lats.push(a.clone());
                lons.push(b.clone());
            }
        }
    }
    Some((lats, lons))
}

/// Set union of every non-null value, in first-seen order.
pub fn union_values<'a>(values: impl Iterator<Item = &'a FieldValue>) -> Vec<Scalar> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for value in values {
        for scalar in value.values() {
            if seen.insert(scalar.clone()) {
                out.push(scalar.clone());
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(source: &str, severity: Option<f64>, comments: &[&str]) -> Record {
        Record::new()
            .with(Attribute::Source, FieldValue::text_array([source]))
            .with(
                Attribute::Severity,
                FieldValue::Scalar(severity.map(Scalar::Number).unwrap_or(Scalar::Null)),
            )
            .with(Attribute::Comments, FieldValue::text_array(comments.iter().copied()))
    }

    #[test]
    fn test_array_fields_union_without_duplicates() {
        let a = record("glide", None, &["a"]);
        let b = record("glide", None, &["a", "b"]);
        let merged = merge_records(&[&a, &b], &RecordSchema::standard(), &InputOrder);
        assert_eq!(merged.get(Attribute::Comments), Some(&FieldValue::text_array(["a", "b"])));
    }

    #[test]
    fn test_first_non_missing_scalar_wins() {
        let a = record("glide", None, &[]);
        let b = record("glide", Some(5.0), &[]);
        let merged = merge_records(&[&a, &b], &RecordSchema::standard(), &InputOrder);
        assert_eq!(merged.get(Attribute::Severity), Some(&FieldValue::Scalar(Scalar::Number(5.0))));

        let reversed = merge_records(&[&b, &a], &RecordSchema::standard(), &InputOrder);
        assert_eq!(reversed.get(Attribute::Severity), merged.get(Attribute::Severity));
    }

    #[test]
    fn test_source_priority_decides_conflicts() {
        let glide = record("glide", Some(1.0), &[]);
        let emdat = record("emdat", Some(3.0), &[]);
        let order = SourcePriority::new(["emdat", "glide"]);

        let forward = merge_records(&[&glide, &emdat], &RecordSchema::standard(), &order);
        let backward = merge_records(&[&emdat, &glide], &RecordSchema::standard(), &order);
        assert_eq!(forward.get(Attribute::Severity), Some(&FieldValue::Scalar(Scalar::Number(3.0))));
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_unlisted_sources_rank_last() {
        let order = SourcePriority::new(["emdat"]);
        assert_eq!(order.rank_of("EMDAT"), 0);
        assert_eq!(order.rank_of("cerf"), 1);
    }

    #[test]
    fn test_identifiers_are_not_merged() {
        let a = record("glide", None, &[])
            .with(Attribute::EventId, FieldValue::Scalar(Scalar::text("x")));
        let merged = merge_records(&[&a], &RecordSchema::standard(), &InputOrder);
        assert!(merged.get(Attribute::EventId).is_none());
    }

    fn at(lat: f64, lon: f64) -> Record {
        Record::new()
            .with(Attribute::Latitude, FieldValue::Array(vec![Scalar::Number(lat)]))
            .with(Attribute::Longitude, FieldValue::Array(vec![Scalar::Number(lon)]))
    }

    #[test]
    fn test_coordinates_merge_as_pairs() {
        // Same latitude, different longitude: still two points
        let merged = merge_records(&[&at(1.0, 2.0), &at(1.0, 3.0), &at(1.0, 2.0)], &RecordSchema::standard(), &InputOrder);
        assert_eq!(
            merged.get(Attribute::Latitude),
            Some(&FieldValue::Array(vec![Scalar::Number(1.0), Scalar::Number(1.0)]))
        );
        assert_eq!(
            merged.get(Attribute::Longitude),
            Some(&FieldValue::Array(vec![Scalar::Number(2.0), Scalar::Number(3.0)]))
        );
    }

    #[test]
    fn test_unpaired_coordinates_fall_back_to_field_union() {
        let unpaired = at(1.0, 2.0).with(
            Attribute::Longitude,
            FieldValue::Array(vec![Scalar::Number(2.0), Scalar::Number(4.0)]),
        );
        let merged = merge_records(&[&unpaired, &at(5.0, 6.0)], &RecordSchema::standard(), &InputOrder);
        assert_eq!(
            merged.get(Attribute::Latitude),
            Some(&FieldValue::Array(vec![Scalar::Number(1.0), Scalar::Number(5.0)]))
        );
        assert_eq!(merged.get(Attribute::Longitude).map(|v| v.values().len()), Some(3));
    }
}
