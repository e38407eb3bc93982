use std::path::Path;
use std::process::ExitCode;

use prognosa::{
    config, init_logging, DiagnosticEngine, DiseaseTable, MatchPhase, TableDiagnosticEngine,
};

fn main() -> ExitCode {
    init_logging();
    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dataset_path, symptoms_raw) = match args.as_slice() {
        [path, symptoms] => (path, symptoms),
        _ => {
            eprintln!("Usage: prognosa <dataset.json> \"<symptom, symptom, ...>\"");
            return ExitCode::from(2);
        }
    };

    let table = match DiseaseTable::load(Path::new(dataset_path)) {
        Ok(table) => table,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(diseases = table.len(), "Disease table loaded");

    // Splitting free text on commas is the collaborator's job; the engine
    // only ever sees symptom tokens.
    let reported: Vec<String> = symptoms_raw
        .split(',')
        .map(|s| s.trim().to_string())
        .collect();

    let engine = TableDiagnosticEngine::new(table);
    let report = engine.evaluate(&reported);

    match report.phase {
        MatchPhase::Exact => {
            for name in report.result.names() {
                println!("{name}");
            }
        }
        MatchPhase::Fuzzy => {
            for candidate in &report.candidates {
                println!(
                    "{} ({:.1}% match)",
                    candidate.disease, candidate.match_percentage
                );
            }
        }
        MatchPhase::None => println!("{}", report.result),
    }

    ExitCode::SUCCESS
}
