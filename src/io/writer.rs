use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use csv::{Writer, WriterBuilder};
use tracing::info;
use uuid::Uuid;

use crate::error::{PipelineError, Result};
use crate::record::{unified_header, Attribute, ConsolidatedTable, FieldValue, UnifiedRecord};

/// Write the unified table to `path`. Nothing is left at `path` unless the
/// whole table was written.
pub fn write_unified(path: &Path, records: &[UnifiedRecord]) -> Result<()> {
    write_atomic(path, |w| {
        w.write_record(unified_header())?;
        for record in records {
            w.write_record(record.to_row())?;
        }
        Ok(())
    })?;
    info!(path = %path.display(), rows = records.len(), "Wrote unified table");
    Ok(())
}

/// Write one source's consolidated table as `<dir>/<source>_consolidated.csv`.
pub fn write_consolidated(dir: &Path, table: &ConsolidatedTable) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{}_consolidated.csv", table.source));
    write_consolidated_to(&path, table)?;
    Ok(path)
}

pub fn write_consolidated_to(path: &Path, table: &ConsolidatedTable) -> Result<()> {
    write_atomic(path, |w| {
        w.write_record(Attribute::STANDARD.iter().map(Attribute::column_name))?;
        for consolidated in &table.records {
            let row = Attribute::STANDARD.iter().map(|attr| {
                consolidated
                    .record
                    .get(*attr)
                    .map(FieldValue::to_cell)
                    .unwrap_or_default()
            });
            w.write_record(row)?;
        }
        Ok(())
    })?;
    info!(source = %table.source, path = %path.display(), rows = table.len(), "Wrote consolidated table");
    Ok(())
}

/// Render into a temporary sibling of `path`, then rename it into place.
fn write_atomic<F>(path: &Path, render: F) -> Result<()>
where
    F: FnOnce(&mut Writer<BufWriter<File>>) -> Result<()>,
{
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&dir)?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| PipelineError::Config(format!("output path '{}' has no file name", path.display())))?;
    let tmp = dir.join(format!(".{}.{}.tmp", file_name, Uuid::new_v4()));

    let result = render_to(&tmp, render).and_then(|()| Ok(fs::rename(&tmp, path)?));
    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result
}

fn render_to<F>(tmp: &Path, render: F) -> Result<()>
where
    F: FnOnce(&mut Writer<BufWriter<File>>) -> Result<()>,
{
    let file = File::create(tmp)?;
    let mut w = WriterBuilder::new().from_writer(BufWriter::new(file));
    render(&mut w)?;
    let mut inner = w
        .into_inner()
        .map_err(|e| PipelineError::Io(e.into_error()))?;
    inner.flush()?;
    inner.get_ref().sync_all()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Record, Scalar};

    #[test]
    fn test_write_unified_leaves_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("unified.csv");
        let record = UnifiedRecord {
            disaster_impact_id: "DI_abc".to_string(),
            event_ids: vec!["gdacs_1".to_string(), "glide_2".to_string()],
            record: Record::new()
                .with(Attribute::Comments, FieldValue::text_array(["a, b", "c"]))
                .with(Attribute::Severity, FieldValue::Scalar(Scalar::Number(5.0))),
        };
        write_unified(&path, &[record]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert!(lines.next().unwrap().starts_with("Disaster_Impact_ID,Event_IDs,Event_ID"));
        let row = lines.next().unwrap();
        assert!(row.starts_with(r#"DI_abc,"[""gdacs_1"",""glide_2""]""#));
        assert!(row.contains(r#""[""a, b"",""c""]""#));

        let leftovers: Vec<_> = fs::read_dir(path.parent().unwrap())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn test_write_consolidated_names_file_by_source() {
        let dir = tempfile::tempdir().unwrap();
        let table = ConsolidatedTable {
            source: "glide".to_string(),
            schema: Default::default(),
            records: Vec::new(),
            skipped_groups: Vec::new(),
        };
        let path = write_consolidated(dir.path(), &table).unwrap();
        assert!(path.ends_with("glide_consolidated.csv"));
        let header = fs::read_to_string(&path).unwrap();
        assert!(header.starts_with("Event_ID,Source_Event_IDs,Event_Name"));
    }
}
