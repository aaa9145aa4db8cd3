//! Metrics for the consolidation pipeline.
//!
//! Names follow the Prometheus conventions. The library never installs a
//! recorder; without one every emit below is a no-op, so a binary decides
//! whether and how to export them.

use std::fmt;

/// Enum representing all metric names used in the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricName {
    // Load metrics
    LoadRecordsRead,
    LoadSchemaDriftFills,
    LoadSchemaViolations,

    // Country split metrics
    CountryRowsEmitted,
    CountryMultiValueRows,
    CountryUnresolvedCodes,

    // Consolidation metrics
    ConsolidationGroupsEmitted,
    ConsolidationEmptyIdGroups,

    // Linkage metrics
    LinkageRecordsConsumed,
    LinkageUnifiedRecords,
    LinkageMultiSourceRecords,
    LinkageBuckets,

    // Spatial enrichment metrics
    SpatialMatched,
    SpatialUnmatched,

    // Run metrics
    PipelineRuns,
    PipelineDurationSeconds,
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MetricName::LoadRecordsRead => "disaster_impact_load_records_read_total",
            MetricName::LoadSchemaDriftFills => "disaster_impact_load_schema_drift_fills_total",
            MetricName::LoadSchemaViolations => "disaster_impact_load_schema_violations_total",

            MetricName::CountryRowsEmitted => "disaster_impact_country_rows_emitted_total",
            MetricName::CountryMultiValueRows => "disaster_impact_country_multi_value_rows_total",
            MetricName::CountryUnresolvedCodes => "disaster_impact_country_unresolved_codes_total",

            MetricName::ConsolidationGroupsEmitted => "disaster_impact_consolidation_groups_total",
            MetricName::ConsolidationEmptyIdGroups => "disaster_impact_consolidation_empty_id_groups_total",

            MetricName::LinkageRecordsConsumed => "disaster_impact_linkage_records_consumed_total",
            MetricName::LinkageUnifiedRecords => "disaster_impact_linkage_unified_records_total",
            MetricName::LinkageMultiSourceRecords => "disaster_impact_linkage_multi_source_records_total",
            MetricName::LinkageBuckets => "disaster_impact_linkage_buckets",

            MetricName::SpatialMatched => "disaster_impact_spatial_matched_total",
            MetricName::SpatialUnmatched => "disaster_impact_spatial_unmatched_total",

            MetricName::PipelineRuns => "disaster_impact_pipeline_runs_total",
            MetricName::PipelineDurationSeconds => "disaster_impact_pipeline_duration_seconds",
        };
        write!(f, "{}", name)
    }
}

impl MetricName {
    /// Get metric metadata: (phase, description)
    pub fn metadata(&self) -> (&'static str, &'static str) {
        match self {
            MetricName::LoadRecordsRead => ("load", "Rows read from source extracts"),
            MetricName::LoadSchemaDriftFills => ("load", "Missing columns filled with schema defaults"),
            MetricName::LoadSchemaViolations => ("load", "Rows failing JSON Schema validation"),
            MetricName::CountryRowsEmitted => ("country", "Rows emitted after country splitting"),
            MetricName::CountryMultiValueRows => ("country", "Input rows holding several countries"),
            MetricName::CountryUnresolvedCodes => ("country", "Country names with no ISO3 match"),
            MetricName::ConsolidationGroupsEmitted => ("consolidation", "Per-source consolidated records"),
            MetricName::ConsolidationEmptyIdGroups => ("consolidation", "Groups without source event ids"),
            MetricName::LinkageRecordsConsumed => ("linkage", "Consolidated records fed to the linker"),
            MetricName::LinkageUnifiedRecords => ("linkage", "Unified records emitted"),
            MetricName::LinkageMultiSourceRecords => ("linkage", "Unified records spanning several sources"),
            MetricName::LinkageBuckets => ("linkage", "Event type and country buckets"),
            MetricName::SpatialMatched => ("spatial", "Point records attached to a unified record"),
            MetricName::SpatialUnmatched => ("spatial", "Point records left standalone"),
            MetricName::PipelineRuns => ("run", "Pipeline runs started"),
            MetricName::PipelineDurationSeconds => ("run", "Wall time of a full pipeline run"),
        }
    }
}

/// Increment a counter by `value`
pub fn emit_counter(name: MetricName, value: u64) {
    ::metrics::counter!(name.to_string()).increment(value);
}

/// Increment a counter carrying a `source` label
pub fn emit_source_counter(name: MetricName, source: &str, value: u64) {
    ::metrics::counter!(name.to_string(), "source" => source.to_string()).increment(value);
}

/// Set a gauge to `value`
pub fn emit_gauge(name: MetricName, value: f64) {
    ::metrics::gauge!(name.to_string()).set(value);
}

/// Record one observation in a histogram
pub fn emit_histogram(name: MetricName, value: f64) {
    ::metrics::histogram!(name.to_string()).record(value);
}
