use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use crate::config::ColumnMapping;

use super::error::DataError;
use super::loader::load_file;
use super::model::Dataset;
use super::schema::Capabilities;

/// What a session gets back from [`DatasetSource::load`].
#[derive(Debug)]
pub struct LoadedDataset {
    pub dataset: Arc<Dataset>,
    /// Views computable for this schema.
    pub capabilities: Capabilities,
    /// Set when the file could not be read; the dataset is then empty.
    pub notice: Option<DataError>,
}

/// A dataset at a fixed path, read at most once.
#[derive(Debug)]
pub struct DatasetSource {
    path: PathBuf,
    mapping: ColumnMapping,
    loaded: OnceLock<LoadedDataset>,
}

impl DatasetSource {
    pub fn new(path: impl Into<PathBuf>, mapping: ColumnMapping) -> Self {
        Self {
            path: path.into(),
            mapping,
            loaded: OnceLock::new(),
        }
    }

    /// Load the dataset, reading the file only on the first call.
    ///
    /// A missing or unreadable file is not fatal: the result holds an empty
    /// dataset and a `DataUnavailable` notice.
    pub fn load(&self) -> &LoadedDataset {
        self.loaded.get_or_init(|| {
            let (dataset, notice) = match self.read() {
                Ok(dataset) => (dataset, None),
                Err(e) => {
                    log::error!("{e}");
                    (Dataset::empty(), Some(e))
                }
            };
            let capabilities = Capabilities::detect(&dataset, &self.mapping);
            if notice.is_none() && capabilities.is_empty() {
                log::warn!("No analysis view matches the columns of {}", self.path.display());
            } else {
                log::debug!(
                    "Analysis views available: {:?}",
                    capabilities.available().collect::<Vec<_>>()
                );
            }
            LoadedDataset {
                dataset: Arc::new(dataset),
                capabilities,
                notice,
            }
        })
    }

    /// Read and parse the file, bypassing the cache.
    pub fn read(&self) -> Result<Dataset, DataError> {
        let dataset = load_file(&self.path).map_err(|e| DataError::DataUnavailable {
            path: self.path.clone(),
            reason: format!("{e:#}"),
        })?;
        let (rows, cols) = dataset.shape();
        log::info!(
            "Loaded {rows} rows x {cols} columns from {}",
            self.path.display()
        );
        Ok(dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::aggregate::{counts_by_category, counts_by_year, top_category_counts};
    use crate::data::schema::AnalysisView;

    const SAMPLE_CSV: &str = "\
Make,Model Year,Electric Vehicle Type,State
TESLA,2022,BEV,CA
NISSAN,2021,BEV,WA
TESLA,2023,PHEV,CA
FORD,2022,PHEV,TX
TESLA,2022,BEV,CA
";

    #[test]
    fn test_load_well_formed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ev.csv");
        std::fs::write(&path, SAMPLE_CSV).unwrap();

        let source = DatasetSource::new(&path, ColumnMapping::default());
        let loaded = source.load();

        assert!(loaded.notice.is_none());
        assert_eq!(loaded.dataset.shape(), (5, 4));
        assert!(AnalysisView::ALL
            .into_iter()
            .all(|v| loaded.capabilities.supports(v)));
    }

    #[test]
    fn test_missing_file_falls_back_to_empty_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let source = DatasetSource::new(dir.path().join("absent.csv"), ColumnMapping::default());
        let loaded = source.load();

        assert!(matches!(
            loaded.notice,
            Some(DataError::DataUnavailable { ref path, .. }) if path.ends_with("absent.csv")
        ));
        assert!(loaded.dataset.is_empty());
        assert_eq!(loaded.dataset.shape(), (0, 0));
        assert!(loaded.capabilities.is_empty());

        let ds = &loaded.dataset;
        assert!(top_category_counts(ds, "Make", 10).is_empty());
        assert!(counts_by_year(ds, "Model Year").is_empty());
        assert!(counts_by_category(ds, "Electric Vehicle Type").is_empty());
        assert!(counts_by_category(ds, "State").is_empty());
    }

    #[test]
    fn test_load_is_cached_for_the_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ev.csv");
        std::fs::write(&path, SAMPLE_CSV).unwrap();

        let source = DatasetSource::new(&path, ColumnMapping::default());
        let first = source.load();
        std::fs::remove_file(&path).unwrap();
        let second = source.load();

        assert!(std::ptr::eq(first, second));
        assert!(Arc::ptr_eq(&first.dataset, &second.dataset));
        assert_eq!(second.dataset.len(), 5);
    }

    #[test]
    fn test_missing_file_notice_is_raised_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ev.csv");

        let source = DatasetSource::new(&path, ColumnMapping::default());
        let first = source.load();
        assert!(first.notice.is_some());

        // Appearing later does not trigger a second read or a second notice.
        std::fs::write(&path, SAMPLE_CSV).unwrap();
        let second = source.load();
        assert!(std::ptr::eq(first, second));
        assert!(second.dataset.is_empty());
    }

    #[test]
    fn test_malformed_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ev.json");
        std::fs::write(&path, "not json").unwrap();

        let source = DatasetSource::new(&path, ColumnMapping::default());
        let err = source.read().unwrap_err();
        assert!(matches!(err, DataError::DataUnavailable { .. }));
        assert!(err.to_string().contains("parsing JSON"));
    }
}
