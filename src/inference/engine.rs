use std::time::Instant;

use crate::models::diagnosis::{DiagnosisReport, DiagnosisResult, MatchPhase};

use super::helpers::normalize_query;
use super::matching::{exact_matches, fuzzy_matches};
use super::table::DiseaseTable;

/// The diagnosis seam: collaborators hand in raw reported symptoms and get
/// back ranked disease names or the sentinel. Comma-splitting of free-text
/// input is the caller's job; the engine only sees symptom tokens.
pub trait DiagnosticEngine {
    /// Ranked disease names, or the sentinel when nothing qualifies.
    fn diagnose(&self, reported: &[String]) -> DiagnosisResult {
        self.evaluate(reported).result
    }

    /// Full evaluation: the result plus phase, fuzzy candidates and timing.
    fn evaluate(&self, reported: &[String]) -> DiagnosisReport;
}

/// Data-driven evaluator over an immutable disease table. Each disease acts
/// as one rule whose antecedent is the conjunction of its symptoms; with no
/// chained derivations, rule evaluation collapses to a subset check per
/// record. Stateless across calls.
pub struct TableDiagnosticEngine {
    table: DiseaseTable,
}

impl TableDiagnosticEngine {
    pub fn new(table: DiseaseTable) -> Self {
        Self { table }
    }
}

impl DiagnosticEngine for TableDiagnosticEngine {
    fn evaluate(&self, reported: &[String]) -> DiagnosisReport {
        let start = Instant::now();
        let query = normalize_query(reported);

        let fired = exact_matches(&self.table, &query);
        let (result, phase, candidates) = if !fired.is_empty() {
            // Exact rules fired: final answer, fuzzy phase skipped entirely.
            (DiagnosisResult::Diagnoses(fired), MatchPhase::Exact, Vec::new())
        } else {
            let candidates = fuzzy_matches(&self.table, &query);
            if candidates.is_empty() {
                (DiagnosisResult::NoClearDiagnosis, MatchPhase::None, candidates)
            } else {
                let names = candidates.iter().map(|m| m.disease.clone()).collect();
                (DiagnosisResult::Diagnoses(names), MatchPhase::Fuzzy, candidates)
            }
        };

        let processing_time_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            reported = reported.len(),
            distinct = query.len(),
            phase = phase.as_str(),
            matches = result.names().len(),
            processing_ms = processing_time_ms,
            "Diagnosis complete"
        );

        DiagnosisReport {
            result,
            phase,
            candidates,
            processing_time_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::dataset::{DatasetRow, DiseaseDataset};

    fn reported(symptoms: &[&str]) -> Vec<String> {
        symptoms.iter().map(|s| s.to_string()).collect()
    }

    fn engine() -> TableDiagnosticEngine {
        TableDiagnosticEngine::new(DiseaseTable::load_test())
    }

    /// Scenario: full symptom coverage fires the exact rule.
    #[test]
    fn exact_rule_fires_on_full_coverage() {
        let report = engine().evaluate(&reported(&["Fever", "Cough", "Fatigue"]));

        assert_eq!(
            report.result,
            DiagnosisResult::Diagnoses(vec!["Flu".to_string()])
        );
        assert_eq!(report.phase, MatchPhase::Exact);
        assert!(
            report.candidates.is_empty(),
            "Fuzzy phase must be skipped when an exact rule fires"
        );
    }

    /// Scenario: a lone symptom misses every rule but scores 100% of the
    /// query against Flu in the fuzzy phase.
    #[test]
    fn fuzzy_fallback_on_partial_coverage() {
        let report = engine().evaluate(&reported(&["fever"]));

        assert_eq!(report.phase, MatchPhase::Fuzzy);
        let names = report.result.names();
        assert!(names.contains(&"Flu".to_string()));
        assert!(report
            .candidates
            .iter()
            .all(|c| c.match_percentage == 100.0));
    }

    /// Scenario: empty disease table always yields the sentinel.
    #[test]
    fn empty_table_yields_sentinel() {
        let empty = DiseaseDataset {
            symptom_columns: vec!["fever".into()],
            rows: vec![],
        };
        let engine = TableDiagnosticEngine::new(DiseaseTable::build(&empty).unwrap());

        let report = engine.evaluate(&reported(&["fever", "cough"]));
        assert_eq!(report.result, DiagnosisResult::NoClearDiagnosis);
        assert_eq!(report.phase, MatchPhase::None);
    }

    /// Scenario: a disease whose row was all zeros never surfaces.
    #[test]
    fn all_zero_row_never_appears_in_results() {
        let dataset = DiseaseDataset {
            symptom_columns: vec!["fever".into(), "cough".into()],
            rows: vec![
                DatasetRow {
                    disease: "Inert".into(),
                    indicators: vec![0, 0],
                },
                DatasetRow {
                    disease: "Flu".into(),
                    indicators: vec![1, 1],
                },
            ],
        };
        let table = DiseaseTable::build(&dataset).unwrap();
        assert_eq!(table.len(), 1);

        let engine = TableDiagnosticEngine::new(table);
        let report = engine.evaluate(&reported(&["fever", "cough"]));
        assert_eq!(
            report.result.names(),
            &["Flu".to_string()],
            "Inert must never surface"
        );
    }

    #[test]
    fn empty_query_yields_sentinel() {
        let report = engine().evaluate(&[]);
        assert_eq!(report.result, DiagnosisResult::NoClearDiagnosis);
        assert_eq!(report.phase, MatchPhase::None);
        assert!(report.candidates.is_empty());
    }

    #[test]
    fn whitespace_only_query_yields_sentinel() {
        let report = engine().evaluate(&reported(&["", "   "]));
        assert_eq!(report.result, DiagnosisResult::NoClearDiagnosis);
    }

    #[test]
    fn multiple_exact_fires_keep_table_order() {
        let report = engine().evaluate(&reported(&[
            "sore throat",
            "sneezing",
            "cough",
            "fatigue",
            "fever",
        ]));

        assert_eq!(report.phase, MatchPhase::Exact);
        assert_eq!(
            report.result.names(),
            &["Flu".to_string(), "Common Cold".to_string()],
            "Exact ordering follows table insertion order"
        );
    }

    #[test]
    fn diagnose_projects_result_from_evaluate() {
        let engine = engine();
        let raw = reported(&["Fever", "Cough", "Fatigue"]);
        assert_eq!(engine.diagnose(&raw), engine.evaluate(&raw).result);
    }

    #[test]
    fn fuzzy_ranking_is_stable_on_ties() {
        let report = engine().evaluate(&reported(&["fever"]));
        // Flu and Strep Throat both score 100%; Flu precedes in the table.
        assert_eq!(
            report.result.names(),
            &["Flu".to_string(), "Strep Throat".to_string()]
        );
    }

    #[test]
    fn processing_time_is_recorded() {
        let report = engine().evaluate(&reported(&["fever"]));
        // Bounded synchronous scan; sub-second for a four-row table.
        assert!(report.processing_time_ms < 1000);
    }
}
