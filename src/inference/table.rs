use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;

use crate::models::dataset::DiseaseDataset;

use super::helpers::normalize_symptom;

/// A disease and its defining symptom set.
#[derive(Debug, Clone)]
pub struct DiseaseRecord {
    pub name: String,
    /// Normalized symptom names. Non-empty for every record in the table.
    pub symptoms: HashSet<String>,
}

/// Immutable disease knowledge table, built once at startup. Record order
/// follows the dataset; later ranking ties break on it. No mutation API is
/// exposed, so a shared table is safe across concurrent callers.
#[derive(Debug, Clone)]
pub struct DiseaseTable {
    records: Vec<DiseaseRecord>,
}

#[derive(Error, Debug)]
pub enum TableError {
    #[error("Dataset load failed ({0}): {1}")]
    DatasetLoad(String, String),

    #[error("Dataset parse failed ({0}): {1}")]
    DatasetParse(String, String),

    #[error("Row {row} has no disease name")]
    MissingDiseaseName { row: usize },

    #[error("Row {row} has {found} indicator cells, expected {expected}")]
    RowShape {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Row {row}, column \"{column}\": cell value {value} is not binary")]
    NonBinaryCell {
        row: usize,
        column: String,
        value: u8,
    },
}

impl DiseaseTable {
    /// Build the table from a raw tabular dataset.
    ///
    /// Symptom column names are normalized exactly once here. Rows whose
    /// symptom subset ends up empty are skipped: they could never fire a
    /// rule and cannot be scored. Malformed rows are fatal, no partial table
    /// is returned.
    pub fn build(dataset: &DiseaseDataset) -> Result<Self, TableError> {
        let columns: Vec<String> = dataset
            .symptom_columns
            .iter()
            .map(|c| normalize_symptom(c))
            .collect();

        let mut records: Vec<DiseaseRecord> = Vec::with_capacity(dataset.rows.len());
        let mut seen: HashSet<String> = HashSet::new();

        for (row, dataset_row) in dataset.rows.iter().enumerate() {
            let name = dataset_row.disease.trim();
            if name.is_empty() {
                return Err(TableError::MissingDiseaseName { row });
            }
            if dataset_row.indicators.len() != columns.len() {
                return Err(TableError::RowShape {
                    row,
                    expected: columns.len(),
                    found: dataset_row.indicators.len(),
                });
            }

            let mut symptoms = HashSet::new();
            for (col, &cell) in dataset_row.indicators.iter().enumerate() {
                match cell {
                    0 => {}
                    1 => {
                        symptoms.insert(columns[col].clone());
                    }
                    value => {
                        return Err(TableError::NonBinaryCell {
                            row,
                            column: columns[col].clone(),
                            value,
                        })
                    }
                }
            }

            if symptoms.is_empty() {
                tracing::warn!(disease = name, row, "Skipping disease row with no symptoms");
                continue;
            }
            if !seen.insert(name.to_string()) {
                tracing::warn!(
                    disease = name,
                    row,
                    "Skipping duplicate disease row; first occurrence wins"
                );
                continue;
            }

            records.push(DiseaseRecord {
                name: name.to_string(),
                symptoms,
            });
        }

        Ok(Self { records })
    }

    /// Load a table from a JSON dataset file.
    pub fn load(path: &Path) -> Result<Self, TableError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| TableError::DatasetLoad(path.display().to_string(), e.to_string()))?;
        let dataset: DiseaseDataset = serde_json::from_str(&json)
            .map_err(|e| TableError::DatasetParse(path.display().to_string(), e.to_string()))?;
        Self::build(&dataset)
    }

    /// Create a small table for tests (no file I/O).
    pub fn load_test() -> Self {
        fn record(name: &str, symptoms: &[&str]) -> DiseaseRecord {
            DiseaseRecord {
                name: name.into(),
                symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
            }
        }

        Self {
            records: vec![
                record("Flu", &["fever", "cough", "fatigue"]),
                record("Common Cold", &["cough", "sneezing", "sore throat"]),
                record("Strep Throat", &["fever", "sore throat", "swollen lymph nodes"]),
                record("Migraine", &["headache", "nausea", "light sensitivity"]),
            ],
        }
    }

    /// Records in dataset order.
    pub fn records(&self) -> &[DiseaseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
