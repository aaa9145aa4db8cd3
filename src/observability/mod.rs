// Observability: metrics emitted by every pipeline stage

pub mod metrics;

pub use metrics::{emit_counter, emit_gauge, emit_histogram, emit_source_counter, MetricName};
