use serde::{Deserialize, Serialize};

/// Header names of the three required sample columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnNames {
    pub algorithm: String,
    pub input_size: String,
    pub measured_time: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            algorithm: "algo".to_string(),
            input_size: "taille".to_string(),
            measured_time: "temps".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CsvOptions {
    pub delimiter: u8,
    pub trim: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self { delimiter: b',', trim: true }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    pub csv: CsvOptions,
    pub columns: ColumnNames,
}
