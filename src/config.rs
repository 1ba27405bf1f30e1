use std::path::PathBuf;

/// Location of the dataset, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "Electric_Vehicle_Population_Data 2.csv";

/// Fixed settings of the analysis page.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsConfig {
    pub data_path: PathBuf,
    /// How many manufacturers the ranking shows.
    pub top_n: usize,
    /// Rows shown in the data structure preview.
    pub preview_rows: usize,
    pub columns: ColumnMapping,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            top_n: 10,
            preview_rows: 5,
            columns: ColumnMapping::default(),
        }
    }
}

impl AnalyticsConfig {
    /// Same settings, different data file.
    #[cfg(test)]
    pub fn with_data_path(path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: path.into(),
            ..Self::default()
        }
    }
}

/// Which source column feeds each aggregate view.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnMapping {
    pub manufacturer: String,
    pub model_year: String,
    pub vehicle_type: String,
    pub region: String,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            manufacturer: "Make".to_string(),
            model_year: "Model Year".to_string(),
            vehicle_type: "Electric Vehicle Type".to_string(),
            region: "State".to_string(),
        }
    }
}
