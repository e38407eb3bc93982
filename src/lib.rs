pub mod config;
pub mod inference;
pub mod models;

use tracing_subscriber::EnvFilter;

pub use inference::{DiagnosticEngine, DiseaseRecord, DiseaseTable, TableDiagnosticEngine, TableError};
pub use models::{DiagnosisReport, DiagnosisResult, DiseaseDataset, MatchPhase, MatchResult};

/// Initialize tracing for binaries and harnesses.
/// Honors RUST_LOG, falling back to the crate default filter.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();
}
