use std::collections::BTreeMap;
use std::path::Path;
use std::time::Instant;

use serde::Serialize;
use tracing::{info, info_span, instrument, warn};
use uuid::Uuid;

use crate::config::PipelineConfig;
use crate::consolidate::Consolidator;
use crate::country::{CountrySplitter, SplitReport};
use crate::error::{Result, Stage};
use crate::io;
use crate::link::{unified_schema, CrossSourceLinker, SecondaryMatcher, SpatialProximityMatcher};
use crate::observability::{emit_counter, emit_histogram, MetricName};
use crate::record::{ConsolidatedTable, SourceTable, UnifiedRecord};

/// Per-source counts for one run
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct SourceSummary {
    pub source: String,
    pub rows_loaded: usize,
    pub rows_after_split: usize,
    pub consolidated_records: usize,
    /// Group keys dropped for lacking source event ids
    pub skipped_groups: Vec<String>,
    /// Columns filled with schema defaults at load
    pub drifted_columns: Vec<String>,
}

/// Result of a complete pipeline run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub run_id: Uuid,
    pub sources: Vec<SourceSummary>,
    /// Country names emitted without a code, with their row counts
    pub unresolved_countries: BTreeMap<String, usize>,
    pub unified_records: usize,
    pub multi_source_records: usize,
    /// Source matched by proximity instead of the main linker, if any
    pub spatial_source: Option<String>,
    /// Matcher that folded the spatial source in
    pub spatial_matcher: Option<String>,
    pub duration_secs: f64,
}

impl RunReport {
    pub fn unresolved_total(&self) -> usize {
        self.unresolved_countries.values().sum()
    }
}

/// Everything a run produced, before anything is written.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub consolidated: Vec<ConsolidatedTable>,
    pub unified: Vec<UnifiedRecord>,
    pub report: RunReport,
}

/// Composes country splitting, consolidation and linkage over immutable
/// tables.
#[derive(Debug, Clone)]
pub struct Pipeline {
    splitter: CountrySplitter,
    consolidator: Consolidator,
    linker: CrossSourceLinker,
    /// Point source and the matcher that folds it in
    spatial: Option<(String, SpatialProximityMatcher)>,
}

impl Pipeline {
    pub fn new(config: &PipelineConfig) -> Result<Self> {
        config.validate()?;
        let spatial = config
            .spatial_matcher()
            .map(|matcher| (config.spatial.source.to_lowercase(), matcher));
        Ok(Self {
            splitter: CountrySplitter::new(),
            consolidator: config.consolidator(),
            linker: CrossSourceLinker::new(config.linkage_policy())?,
            spatial,
        })
    }

    /// Split and consolidate one source.
    pub fn prepare_source(&self, table: &SourceTable) -> Result<(ConsolidatedTable, SplitReport)> {
        let (split, report) = self.splitter.split_table(table);
        let consolidated = self
            .consolidator
            .consolidate(&split)
            .map_err(|e| e.in_stage(Stage::Consolidate))?;
        Ok((consolidated, report))
    }

    /// Run every stage over already loaded tables.
    pub fn run(&self, tables: &[SourceTable]) -> Result<RunOutput> {
        let run_id = Uuid::new_v4();
        let span = info_span!("pipeline_run", run_id = %run_id);
        let _enter = span.enter();
        let started = Instant::now();
        emit_counter(MetricName::PipelineRuns, 1);
        info!("🚀 Starting run over {} source table(s)", tables.len());

        let mut summaries = Vec::with_capacity(tables.len());
        let mut split_totals = SplitReport::default();
        let mut consolidated = Vec::with_capacity(tables.len());
        for table in tables {
            let (out, split) = self.prepare_source(table)?;
            summaries.push(SourceSummary {
                source: table.source.clone(),
                rows_loaded: table.len(),
                rows_after_split: split.rows_out,
                consolidated_records: out.len(),
                skipped_groups: out.skipped_groups.clone(),
                drifted_columns: table.drifted_columns.iter().map(|a| a.to_string()).collect(),
            });
            split_totals.absorb(&split);
            consolidated.push(out);
        }

        let (held_out, linked_tables): (Vec<&ConsolidatedTable>, Vec<&ConsolidatedTable>) = consolidated
            .iter()
            .partition(|t| self.spatial.as_ref().is_some_and(|(source, _)| *source == t.source));
        let linked_tables: Vec<ConsolidatedTable> = linked_tables.into_iter().cloned().collect();

        let mut unified = self.linker.link(&linked_tables).map_err(|e| e.in_stage(Stage::Link))?;

        let mut spatial_source = None;
        let mut spatial_matcher = None;
        if let Some((source, matcher)) = &self.spatial {
            match held_out.first() {
                Some(table) => {
                    info!(source = %source, matcher = matcher.name(), records = table.len(), "Folding in point source");
                    let schema = unified_schema(consolidated.iter().map(|t| &t.schema));
                    unified = matcher
                        .enrich(unified, table, &schema)
                        .map_err(|e| e.in_stage(Stage::SpatialEnrich))?;
                    spatial_source = Some(source.clone());
                    spatial_matcher = Some(matcher.name().to_string());
                }
                None => warn!(source = %source, "Spatial matching enabled but source has no extract"),
            }
        }

        let duration_secs = started.elapsed().as_secs_f64();
        emit_histogram(MetricName::PipelineDurationSeconds, duration_secs);
        let report = RunReport {
            run_id,
            sources: summaries,
            unresolved_countries: split_totals.unresolved,
            unified_records: unified.len(),
            multi_source_records: unified.iter().filter(|u| u.sources().len() > 1).count(),
            spatial_source,
            spatial_matcher,
            duration_secs,
        };
        info!(
            "✅ Run complete: {} unified record(s), {} spanning several sources, {} unresolved country name(s)",
            report.unified_records,
            report.multi_source_records,
            report.unresolved_total()
        );

        Ok(RunOutput {
            consolidated,
            unified,
            report,
        })
    }

    /// Load every extract in `input_dir`, run, and write the unified table to
    /// `output`. Consolidated tables are written to `consolidated_dir` when
    /// given.
    #[instrument(skip_all, fields(input_dir = %input_dir.display(), output = %output.display()))]
    pub fn run_directory(
        &self,
        input_dir: &Path,
        output: &Path,
        consolidated_dir: Option<&Path>,
    ) -> Result<RunReport> {
        let tables = io::load_directory(input_dir).map_err(|e| e.in_stage(Stage::Load))?;
        let out = self.run(&tables)?;

        if let Some(dir) = consolidated_dir {
            for table in &out.consolidated {
                io::write_consolidated(dir, table).map_err(|e| e.in_stage(Stage::Write))?;
            }
        }
        io::write_unified(output, &out.unified).map_err(|e| e.in_stage(Stage::Write))?;
        info!("💾 Saved {} unified record(s) to {}", out.unified.len(), output.display());

        Ok(out.report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PipelineError;
    use crate::record::{Attribute, FieldValue, Record, Scalar};
    use crate::schema::RecordSchema;

    fn row(ids: &[&str], country: &str, date: &str) -> Record {
        Record::new()
            .with(Attribute::EventType, FieldValue::Scalar(Scalar::text("FL")))
            .with(Attribute::Country, FieldValue::Scalar(Scalar::text(country)))
            .with(Attribute::Date, FieldValue::parse(date, RecordSchema::standard().kind(Attribute::Date)))
            .with(Attribute::SourceEventIds, FieldValue::text_array(ids.iter().copied()))
    }

    fn table(source: &str, records: Vec<Record>) -> SourceTable {
        SourceTable::new(source, RecordSchema::standard(), records)
    }

    #[test]
    fn test_run_reports_every_source() {
        let pipeline = Pipeline::new(&PipelineConfig::default()).unwrap();
        let tables = vec![
            table("glide", vec![row(&["A1"], "Kenya, Somalia", "2021-03-01")]),
            table("gdacs", vec![row(&["B1"], "Kenya", "2021-03-05"), row(&["B2"], "Atlantis", "2021-03-05")]),
        ];
        let out = pipeline.run(&tables).unwrap();

        // Kenya merges across sources; Somalia and Atlantis stay alone
        assert_eq!(out.unified.len(), 3);
        assert_eq!(out.report.multi_source_records, 1);
        assert_eq!(out.report.sources[0].rows_after_split, 2);
        assert_eq!(out.report.unresolved_countries.get("Atlantis"), Some(&1));
    }

    #[test]
    fn test_consolidation_failure_names_stage() {
        let pipeline = Pipeline::new(&PipelineConfig::default()).unwrap();
        let tables = vec![table("glide", vec![row(&[], "Kenya", "2021-03-01")])];
        let err = pipeline.run(&tables).unwrap_err();
        match err {
            PipelineError::Stage { stage, source } => {
                assert_eq!(stage, Stage::Consolidate);
                assert!(matches!(*source, PipelineError::EmptySourceIdGroup { .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_spatial_source_is_held_out_of_linkage() {
        let config = PipelineConfig::from_toml("[spatial]\nenabled = true\nradius_km = 50.0").unwrap();
        let pipeline = Pipeline::new(&config).unwrap();

        let located = |ids: &[&str], lat: f64, lon: f64| {
            row(ids, "Kenya", "2021-03-01")
                .with(Attribute::Latitude, FieldValue::Array(vec![Scalar::Number(lat)]))
                .with(Attribute::Longitude, FieldValue::Array(vec![Scalar::Number(lon)]))
        };
        let tables = vec![
            table("gdacs", vec![located(&["B1"], -1.286, 36.817)]),
            // Same bucket and date, but matched only by distance: too far away
            table("adam", vec![located(&["P1"], 3.0, 40.0)]),
        ];
        let out = pipeline.run(&tables).unwrap();
        assert_eq!(out.unified.len(), 2);
        assert_eq!(out.report.spatial_source.as_deref(), Some("adam"));
        assert_eq!(out.report.spatial_matcher.as_deref(), Some("spatial_proximity"));
    }
}
