pub mod dataset;
pub mod diagnosis;

pub use dataset::{DatasetRow, DiseaseDataset};
pub use diagnosis::{
    DiagnosisReport, DiagnosisResult, MatchPhase, MatchResult, NO_CLEAR_DIAGNOSIS,
};
