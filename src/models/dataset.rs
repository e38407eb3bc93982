use serde::{Deserialize, Serialize};

/// Raw tabular disease dataset: one disease-name column plus an arbitrary
/// number of binary symptom columns. Any storage format that deserializes
/// into this shape qualifies; the table builder does not parse files itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiseaseDataset {
    /// Symptom column headers, in dataset order.
    pub symptom_columns: Vec<String>,
    pub rows: Vec<DatasetRow>,
}

/// One dataset row: a disease and its indicator cells, parallel to
/// `symptom_columns`. 1 = the disease exhibits that symptom.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetRow {
    pub disease: String,
    pub indicators: Vec<u8>,
}
