use std::fmt;

use serde::{Deserialize, Serialize};

/// Rendered text for a query that matched nothing in either phase.
pub const NO_CLEAR_DIAGNOSIS: &str = "No clear diagnosis";

// ---------------------------------------------------------------------------
// DiagnosisResult
// ---------------------------------------------------------------------------

/// Outcome of a diagnosis call: ranked disease names, or the sentinel.
/// The sentinel is a distinct variant so callers can tell "nothing qualified"
/// apart from an empty disease table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DiagnosisResult {
    /// One or more diseases qualified, best match first.
    Diagnoses(Vec<String>),
    /// Nothing qualified in either phase.
    NoClearDiagnosis,
}

impl DiagnosisResult {
    pub fn is_clear(&self) -> bool {
        matches!(self, Self::Diagnoses(_))
    }

    /// Disease names in rank order; empty for the sentinel.
    pub fn names(&self) -> &[String] {
        match self {
            Self::Diagnoses(names) => names,
            Self::NoClearDiagnosis => &[],
        }
    }
}

impl fmt::Display for DiagnosisResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Diagnoses(names) => f.write_str(&names.join(", ")),
            Self::NoClearDiagnosis => f.write_str(NO_CLEAR_DIAGNOSIS),
        }
    }
}

// ---------------------------------------------------------------------------
// MatchPhase & MatchResult
// ---------------------------------------------------------------------------

/// Which phase produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// All symptoms of at least one disease were present in the query.
    Exact,
    /// Fallback overlap ranking; entered only when no exact rule fired.
    Fuzzy,
    /// Neither phase qualified a disease.
    None,
}

impl MatchPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Fuzzy => "fuzzy",
            Self::None => "none",
        }
    }
}

/// A fuzzy-phase candidate: disease plus its overlap with the query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub disease: String,
    /// Percent of reported symptoms overlapping this disease, in [0, 100].
    pub match_percentage: f64,
}

// ---------------------------------------------------------------------------
// DiagnosisReport
// ---------------------------------------------------------------------------

/// Full evaluation output: the result plus how it was reached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosisReport {
    pub result: DiagnosisResult,
    pub phase: MatchPhase,
    /// Fuzzy-phase candidates with their percentages. Empty when the exact
    /// phase fired, since the fuzzy phase is never entered then.
    pub candidates: Vec<MatchResult>,
    pub processing_time_ms: u64,
}
