/// Application-level constants
pub const APP_NAME: &str = "Prognosa";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Minimum fuzzy-phase overlap, as a percent of the reported symptoms, for a
/// disease to qualify as a candidate diagnosis.
pub const FUZZY_MATCH_THRESHOLD: f64 = 60.0;

/// Default tracing filter when RUST_LOG is not set.
pub fn default_log_filter() -> String {
    format!("info,{}=debug", env!("CARGO_PKG_NAME"))
}
