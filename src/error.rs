use std::fmt;

use thiserror::Error;

/// Pipeline stage names used when reporting which stage failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Load,
    Consolidate,
    Link,
    SpatialEnrich,
    Write,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Load => "load",
            Stage::Consolidate => "consolidate",
            Stage::Link => "link",
            Stage::SpatialEnrich => "spatial_enrich",
            Stage::Write => "write",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Schema error: {0}")]
    Schema(String),

    #[error("Group {key} in source '{source_name}' has no source event ids")]
    EmptySourceIdGroup { source_name: String, key: String },

    #[error("Partition violated: {missing} record(s) missing, {duplicated} duplicated ({sample})")]
    PartitionViolation {
        missing: usize,
        duplicated: usize,
        sample: String,
    },

    #[error("Stage '{stage}' failed: {source}")]
    Stage {
        stage: Stage,
        #[source]
        source: Box<PipelineError>,
    },
}

impl PipelineError {
    /// Wrap an error with the stage it surfaced in.
    pub fn in_stage(self, stage: Stage) -> Self {
        match self {
            already @ PipelineError::Stage { .. } => already,
            other => PipelineError::Stage {
                stage,
                source: Box::new(other),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
