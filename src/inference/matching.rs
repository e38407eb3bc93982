use std::collections::HashSet;

use crate::config::FUZZY_MATCH_THRESHOLD;
use crate::models::diagnosis::MatchResult;

use super::table::DiseaseTable;

/// Exact-match phase: a disease fires iff its entire symptom set is present
/// in the query. The query may carry extra symptoms that belong to no firing
/// disease. Firing diseases are returned in table order, never sorted by
/// match count.
pub fn exact_matches(table: &DiseaseTable, query: &HashSet<String>) -> Vec<String> {
    table
        .records()
        .iter()
        .filter(|record| record.symptoms.iter().all(|s| query.contains(s)))
        .map(|record| record.name.clone())
        .collect()
}

/// Fuzzy fallback: for each disease, count the distinct query symptoms that
/// appear as a substring of at least one disease symptom, and score the
/// disease by that count as a percent of the query size. Substring rather
/// than equality tolerates compound phrasings ("throat" inside "sore throat")
/// at the cost of false positives. Qualifiers (>= threshold) are sorted by
/// descending percentage; the sort is stable, so ties keep table order.
pub fn fuzzy_matches(table: &DiseaseTable, query: &HashSet<String>) -> Vec<MatchResult> {
    if query.is_empty() {
        return Vec::new();
    }

    let mut results: Vec<MatchResult> = table
        .records()
        .iter()
        .filter_map(|record| {
            let match_count = query
                .iter()
                .filter(|reported| {
                    record
                        .symptoms
                        .iter()
                        .any(|symptom| symptom.contains(reported.as_str()))
                })
                .count();
            let match_percentage = 100.0 * match_count as f64 / query.len() as f64;

            if match_percentage >= FUZZY_MATCH_THRESHOLD {
                Some(MatchResult {
                    disease: record.name.clone(),
                    match_percentage,
                })
            } else {
                tracing::debug!(
                    disease = record.name.as_str(),
                    match_percentage,
                    "Below fuzzy threshold"
                );
                None
            }
        })
        .collect();

    results.sort_by(|a, b| b.match_percentage.total_cmp(&a.match_percentage));
    results
}
