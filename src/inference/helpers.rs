use std::collections::HashSet;

/// Normalize a single symptom token (lowercase + trim).
/// Idempotent: normalizing an already-normalized token is a no-op.
pub fn normalize_symptom(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Normalize reported symptoms into a set. Duplicates collapse; tokens that
/// are empty after trimming are dropped so they cannot substring-match every
/// disease symptom.
pub fn normalize_query(raw: &[String]) -> HashSet<String> {
    raw.iter()
        .map(|s| normalize_symptom(s))
        .filter(|s| !s.is_empty())
        .collect()
}
