//! Secondary matching of point-located records onto unified records.
//!
//! The main linker never looks at coordinates. A point feed whose records
//! carry no reliable country or date key can instead be attached to the
//! nearest unified record by great-circle distance.

use std::sync::Arc;

use geo::{HaversineDistance, Point};
use tracing::{debug, info, info_span, warn};

use super::{build_unified, check_partition};
use crate::constants::DEFAULT_SPATIAL_RADIUS_KM;
use crate::error::{PipelineError, Result};
use crate::merge::{merge_records, InputOrder, MergeOrder};
use crate::observability::{emit_source_counter, MetricName};
use crate::record::{Attribute, ConsolidatedTable, FieldValue, Record, Scalar, UnifiedRecord};
use crate::schema::RecordSchema;

/// A pass that folds one more table into already unified records.
pub trait SecondaryMatcher {
    fn name(&self) -> &'static str;

    /// Attach or append every record of `table`. Every unified record and
    /// every record of `table` is accounted for exactly once in the result.
    fn enrich(
        &self,
        unified: Vec<UnifiedRecord>,
        table: &ConsolidatedTable,
        schema: &RecordSchema,
    ) -> Result<Vec<UnifiedRecord>>;
}

/// Nearest unified record within a radius.
#[derive(Clone)]
pub struct SpatialProximityMatcher {
    pub radius_km: f64,
    pub require_same_event_type: bool,
    order: Arc<dyn MergeOrder>,
}

impl std::fmt::Debug for SpatialProximityMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpatialProximityMatcher")
            .field("radius_km", &self.radius_km)
            .field("require_same_event_type", &self.require_same_event_type)
            .field("order", &self.order.name())
            .finish()
    }
}

impl Default for SpatialProximityMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_SPATIAL_RADIUS_KM, true)
    }
}

impl SpatialProximityMatcher {
    pub fn new(radius_km: f64, require_same_event_type: bool) -> Self {
        Self {
            radius_km,
            require_same_event_type,
            order: Arc::new(InputOrder),
        }
    }

    pub fn with_order(mut self, order: Arc<dyn MergeOrder>) -> Self {
        self.order = order;
        self
    }

    /// Index of the nearest eligible unified record and its distance in
    /// metres. Ties keep the earlier unified record.
    fn nearest(&self, record: &Record, targets: &[(Option<String>, Vec<Point<f64>>)]) -> Option<(usize, f64)> {
        let points = points_of(record);
        let event_type = record.event_type();
        let mut best: Option<(usize, f64)> = None;

        for (idx, (target_type, target_points)) in targets.iter().enumerate() {
            if self.require_same_event_type && (event_type.is_none() || *target_type != event_type) {
                continue;
            }
            for p in &points {
                for q in target_points {
                    let distance = p.haversine_distance(q);
                    if best.map_or(true, |(_, d)| distance < d) {
                        best = Some((idx, distance));
                    }
                }
            }
        }
        best.filter(|(_, d)| *d <= self.radius_km * 1000.0)
    }
}

impl SecondaryMatcher for SpatialProximityMatcher {
    fn name(&self) -> &'static str {
        "spatial_proximity"
    }

    fn enrich(
        &self,
        unified: Vec<UnifiedRecord>,
        table: &ConsolidatedTable,
        schema: &RecordSchema,
    ) -> Result<Vec<UnifiedRecord>> {
        let span = info_span!("spatial_enrich", source = %table.source, radius_km = self.radius_km);
        let _enter = span.enter();

        if !(self.radius_km.is_finite() && self.radius_km >= 0.0) {
            return Err(PipelineError::Config(format!(
                "spatial radius must be a non-negative number of km, got {}",
                self.radius_km
            )));
        }

        // Targets are fixed before matching so attachments never move them
        let targets: Vec<(Option<String>, Vec<Point<f64>>)> = unified
            .iter()
            .map(|u| (u.record.event_type(), points_of(&u.record)))
            .collect();

        let mut attached: Vec<Vec<usize>> = vec![Vec::new(); unified.len()];
        let mut standalone: Vec<usize> = Vec::new();
        for (idx, consolidated) in table.records.iter().enumerate() {
            match self.nearest(&consolidated.record, &targets) {
                Some((target, distance)) => {
                    debug!(
                        event_id = %consolidated.prefixed_id(),
                        target = %unified[target].disaster_impact_id,
                        distance_km = distance / 1000.0,
                        "Attached point record"
                    );
                    attached[target].push(idx);
                }
                None => standalone.push(idx),
            }
        }

        let groups = attached
            .iter()
            .map(Vec::as_slice)
            .chain(standalone.chunks(1));
        check_partition(table.len(), groups)?;

        let matched = table.len() - standalone.len();
        let mut out = Vec::with_capacity(unified.len() + standalone.len());
        for (existing, members) in unified.into_iter().zip(attached.iter()) {
            if members.is_empty() {
                out.push(existing);
                continue;
            }
            let mut records: Vec<&Record> = vec![&existing.record];
            records.extend(members.iter().map(|i| &table.records[*i].record));
            let mut merged = merge_records(&records, schema, self.order.as_ref());
            merged.set(
                Attribute::EventId,
                existing
                    .record
                    .get(Attribute::EventId)
                    .cloned()
                    .unwrap_or(FieldValue::Scalar(Scalar::Null)),
            );

            let mut event_ids = existing.event_ids.clone();
            event_ids.extend(members.iter().map(|i| table.records[*i].prefixed_id()));
            out.push(rebuilt(merged, event_ids)?);
        }

        for idx in &standalone {
            let consolidated = &table.records[*idx];
            let mut merged = merge_records(&[&consolidated.record], schema, self.order.as_ref());
            merged.set(
                Attribute::EventId,
                FieldValue::Scalar(Scalar::text(consolidated.prefixed_id())),
            );
            out.push(rebuilt(merged, vec![consolidated.prefixed_id()])?);
        }

        emit_source_counter(MetricName::SpatialMatched, &table.source, matched as u64);
        emit_source_counter(MetricName::SpatialUnmatched, &table.source, standalone.len() as u64);
        info!(matched = matched, unmatched = standalone.len(), "Spatial enrichment complete");

        Ok(out)
    }
}

fn rebuilt(record: Record, event_ids: Vec<String>) -> Result<UnifiedRecord> {
    let sample = event_ids.first().cloned().unwrap_or_default();
    build_unified(record, event_ids).ok_or_else(|| PipelineError::PartitionViolation {
        missing: 1,
        duplicated: 0,
        sample: format!("spatial group without ids near {}", sample),
    })
}

/// Valid (lat, lon) pairs of a record, zipped positionally. Lists of
/// different lengths yield no points.
fn points_of(record: &Record) -> Vec<Point<f64>> {
    let coords = |attr: Attribute| -> Vec<Option<f64>> {
        record
            .get(attr)
            .map(|v| v.values().iter().map(|s| s.as_f64()).collect())
            .unwrap_or_default()
    };
    let (lats, lons) = (coords(Attribute::Latitude), coords(Attribute::Longitude));
    if lats.len() != lons.len() {
        warn!(
            latitudes = lats.len(),
            longitudes = lons.len(),
            "Ignoring points whose coordinates cannot be paired"
        );
        return Vec::new();
    }
    lats.into_iter()
        .zip(lons)
        .filter_map(|(lat, lon)| match (lat, lon) {
            (Some(lat), Some(lon)) if (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon) => {
                Some(Point::new(lon, lat))
            }
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hashing::group_digest;
    use crate::link::unified_schema;
    use crate::record::ConsolidatedRecord;

    fn located(event_type: &str, lat: f64, lon: f64) -> Record {
        Record::new()
            .with(Attribute::EventType, FieldValue::Scalar(Scalar::text(event_type)))
            .with(Attribute::Latitude, FieldValue::Array(vec![Scalar::Number(lat)]))
            .with(Attribute::Longitude, FieldValue::Array(vec![Scalar::Number(lon)]))
    }

    fn unified_at(id: &str, lat: f64, lon: f64) -> UnifiedRecord {
        let record = located("EQ", lat, lon).with(Attribute::Source, FieldValue::text_array(["gdacs"]));
        build_unified(record, vec![format!("gdacs_{}", id)]).unwrap()
    }

    fn adam(id: &str, event_type: &str, lat: f64, lon: f64) -> ConsolidatedRecord {
        ConsolidatedRecord {
            event_id: group_digest([id]).unwrap(),
            source: "adam".to_string(),
            record: located(event_type, lat, lon).with(Attribute::Source, FieldValue::text_array(["adam"])),
        }
    }

    fn adam_table(records: Vec<ConsolidatedRecord>) -> ConsolidatedTable {
        ConsolidatedTable {
            source: "adam".to_string(),
            schema: RecordSchema::standard(),
            records,
            skipped_groups: Vec::new(),
        }
    }

    #[test]
    fn test_attaches_within_radius() {
        // Nairobi and a point roughly 30 km north of it
        let unified = vec![unified_at("1", -1.286, 36.817)];
        let table = adam_table(vec![adam("P1", "EQ", -1.0, 36.817)]);
        let schema = unified_schema([&table.schema]);

        let out = SpatialProximityMatcher::new(50.0, true)
            .enrich(unified.clone(), &table, &schema)
            .unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].event_ids.len(), 2);
        assert_ne!(out[0].disaster_impact_id, unified[0].disaster_impact_id);
        assert_eq!(out[0].sources(), vec!["gdacs", "adam"]);
    }

    #[test]
    fn test_outside_radius_stays_standalone() {
        let unified = vec![unified_at("1", -1.286, 36.817)];
        let table = adam_table(vec![adam("P1", "EQ", -1.0, 36.817)]);
        let schema = unified_schema([&table.schema]);

        let out = SpatialProximityMatcher::new(10.0, true)
            .enrich(unified.clone(), &table, &schema)
            .unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out[0], unified[0]);
        assert_eq!(out[1].event_ids, vec![table.records[0].prefixed_id()]);
    }

    #[test]
    fn test_event_type_must_match_when_required() {
        let unified = vec![unified_at("1", -1.286, 36.817)];
        let table = adam_table(vec![adam("P1", "FL", -1.286, 36.817)]);
        let schema = unified_schema([&table.schema]);

        let strict = SpatialProximityMatcher::new(50.0, true)
            .enrich(unified.clone(), &table, &schema)
            .unwrap();
        assert_eq!(strict.len(), 2);

        let loose = SpatialProximityMatcher::new(50.0, false)
            .enrich(unified, &table, &schema)
            .unwrap();
        assert_eq!(loose.len(), 1);
    }

    #[test]
    fn test_nearest_target_wins() {
        let unified = vec![unified_at("far", 0.0, 0.0), unified_at("near", 0.0, 0.5)];
        let table = adam_table(vec![adam("P1", "EQ", 0.0, 0.6)]);
        let schema = unified_schema([&table.schema]);

        let out = SpatialProximityMatcher::new(200.0, true)
            .enrich(unified, &table, &schema)
            .unwrap();
        assert_eq!(out[0].event_ids.len(), 1);
        assert_eq!(out[1].event_ids.len(), 2);
    }

    #[test]
    fn test_records_without_points_stay_standalone() {
        let unified = vec![unified_at("1", 0.0, 0.0)];
        let mut point = adam("P1", "EQ", 0.0, 0.0);
        point.record.set(Attribute::Latitude, FieldValue::Array(Vec::new()));
        let table = adam_table(vec![point]);
        let schema = unified_schema([&table.schema]);

        let out = SpatialProximityMatcher::default().enrich(unified, &table, &schema).unwrap();
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_merged_points_sharing_a_latitude_are_kept() {
        let merged = merge_records(
            &[&located("FL", 1.0, 2.0), &located("FL", 1.0, 3.0)],
            &RecordSchema::standard(),
            &InputOrder,
        );
        let points = points_of(&merged);
        assert_eq!(points, vec![Point::new(2.0, 1.0), Point::new(3.0, 1.0)]);
    }

    #[test]
    fn test_unpaired_coordinates_yield_no_points() {
        let record = located("FL", 1.0, 2.0).with(
            Attribute::Longitude,
            FieldValue::Array(vec![Scalar::Number(2.0), Scalar::Number(3.0)]),
        );
        assert!(points_of(&record).is_empty());
    }
}
