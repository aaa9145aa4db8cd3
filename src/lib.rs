pub mod config;
pub mod consolidate;
pub mod constants;
pub mod country;
pub mod error;
pub mod hashing;
pub mod io;
pub mod link;
pub mod logging;
pub mod merge;
pub mod observability;
pub mod pipeline;
pub mod record;
pub mod schema;

pub use config::PipelineConfig;
pub use error::{PipelineError, Result, Stage};
pub use pipeline::{Pipeline, RunOutput, RunReport};
