//! Session bookkeeping and export.

pub mod exporter;
pub mod summary;

pub use exporter::{SessionExporter, DEFAULT_EXPORT_PATH};
pub use summary::SessionSummary;
