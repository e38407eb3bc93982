//! Two-phase diagnostic inference: exact rule evaluation over the disease
//! table, then fuzzy overlap ranking when no rule fires. The phases are
//! independent policies (subset containment on one side, a percentage of the
//! query length with substring matching on the other) and must never be
//! conflated.

pub mod engine;
pub mod helpers;
pub mod matching;
pub mod table;

pub use engine::{DiagnosticEngine, TableDiagnosticEngine};
pub use table::{DiseaseRecord, DiseaseTable, TableError};
