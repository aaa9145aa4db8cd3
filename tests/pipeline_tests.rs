use std::fs;
use std::path::Path;

use disaster_impact::config::PipelineConfig;
use disaster_impact::io::{load_directory, read_unified, write_unified};
use disaster_impact::link::unified_schema;
use disaster_impact::pipeline::Pipeline;

fn stage_extracts(dir: &Path) {
    fs::write(dir.join("glide.csv"), include_str!("resources/glide_extract.csv")).unwrap();
    fs::write(dir.join("gdacs.csv"), include_str!("resources/gdacs_extract.csv")).unwrap();
}

#[test]
fn run_directory_writes_unified_and_consolidated_tables() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    stage_extracts(input.path());

    let unified_path = output.path().join("unified.csv");
    let consolidated_dir = output.path().join("consolidated");
    let pipeline = Pipeline::new(&PipelineConfig::default()).unwrap();
    let report = pipeline
        .run_directory(input.path(), &unified_path, Some(&consolidated_dir))
        .unwrap();

    // Sources are discovered in name order
    let sources: Vec<_> = report.sources.iter().map(|s| s.source.as_str()).collect();
    assert_eq!(sources, vec!["gdacs", "glide"]);

    let glide = &report.sources[1];
    assert_eq!(glide.rows_loaded, 3);
    assert_eq!(glide.rows_after_split, 4);
    // Kenya rows A1 and A2 share a key and merge
    assert_eq!(glide.consolidated_records, 3);

    // (FL, KEN) spans both sources; Somalia, Atlantis and the quake stand alone
    assert_eq!(report.unified_records, 4);
    assert_eq!(report.multi_source_records, 1);
    assert_eq!(report.unresolved_countries.get("Atlantis"), Some(&1));

    let written = fs::read_to_string(&unified_path).unwrap();
    assert!(written.starts_with("Disaster_Impact_ID,Event_IDs,Event_ID"));
    assert_eq!(written.lines().count(), 5);
    assert!(consolidated_dir.join("glide_consolidated.csv").is_file());
    assert!(consolidated_dir.join("gdacs_consolidated.csv").is_file());
}

#[test]
fn unified_table_reads_back_cell_for_cell() {
    let input = tempfile::tempdir().unwrap();
    stage_extracts(input.path());

    let tables = load_directory(input.path()).unwrap();
    let out = Pipeline::new(&PipelineConfig::default()).unwrap().run(&tables).unwrap();

    let path = input.path().join("unified.csv");
    write_unified(&path, &out.unified).unwrap();
    let schema = unified_schema(out.consolidated.iter().map(|t| &t.schema));
    let read = read_unified(&path, &schema).unwrap();

    assert_eq!(read.len(), out.unified.len());
    for (original, reread) in out.unified.iter().zip(&read) {
        assert_eq!(reread.disaster_impact_id, original.disaster_impact_id);
        assert_eq!(reread.event_ids, original.event_ids);
        assert_eq!(reread.to_row(), original.to_row());
    }
}

#[test]
fn rerunning_the_same_inputs_yields_the_same_ids() {
    let input = tempfile::tempdir().unwrap();
    stage_extracts(input.path());
    let pipeline = Pipeline::new(&PipelineConfig::default()).unwrap();

    let tables = load_directory(input.path()).unwrap();
    let first = pipeline.run(&tables).unwrap();
    let second = pipeline.run(&tables).unwrap();

    let ids = |out: &disaster_impact::RunOutput| -> Vec<String> {
        out.unified.iter().map(|u| u.disaster_impact_id.clone()).collect()
    };
    assert_eq!(ids(&first), ids(&second));
    assert_ne!(first.report.run_id, second.report.run_id);
}

#[test]
fn missing_input_directory_fails_in_load_stage() {
    let dir = tempfile::tempdir().unwrap();
    let pipeline = Pipeline::new(&PipelineConfig::default()).unwrap();
    let err = pipeline
        .run_directory(&dir.path().join("absent"), &dir.path().join("out.csv"), None)
        .unwrap_err();
    assert!(err.to_string().starts_with("Stage 'load' failed"));
    assert!(!dir.path().join("out.csv").exists());
}
