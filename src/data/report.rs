use crate::config::AnalyticsConfig;

use super::aggregate::{
    CategoryCounts, YearCounts, counts_by_category, counts_by_year, top_category_counts,
};
use super::model::Record;
use super::schema::AnalysisView;
use super::source::LoadedDataset;

/// Everything the analysis page renders, computed in one go.
///
/// A view is `None` when its column is not in the schema.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalyticsReport {
    pub columns: Vec<String>,
    pub shape: (usize, usize),
    pub preview: Vec<Record>,
    pub manufacturers: Option<CategoryCounts>,
    pub yearly: Option<YearCounts>,
    pub vehicle_types: Option<CategoryCounts>,
    pub regions: Option<CategoryCounts>,
}

impl AnalyticsReport {
    pub fn compute(loaded: &LoadedDataset, config: &AnalyticsConfig) -> Self {
        let ds = loaded.dataset.as_ref();
        let caps = &loaded.capabilities;
        let cols = &config.columns;

        let view = |v: AnalysisView| caps.supports(v).then_some(v.column(cols));

        AnalyticsReport {
            columns: ds.columns.clone(),
            shape: ds.shape(),
            preview: ds.head(config.preview_rows).to_vec(),
            manufacturers: view(AnalysisView::ManufacturerRanking)
                .map(|c| top_category_counts(ds, c, config.top_n)),
            yearly: view(AnalysisView::YearlyCounts).map(|c| counts_by_year(ds, c)),
            vehicle_types: view(AnalysisView::TypeDistribution)
                .map(|c| counts_by_category(ds, c)),
            regions: view(AnalysisView::RegionalDistribution)
                .map(|c| counts_by_category(ds, c)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.shape.0 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::aggregate::CountEntry;
    use crate::data::model::CellValue;
    use crate::data::source::DatasetSource;

    fn load(csv: &str) -> (tempfile::TempDir, AnalyticsReport) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ev.csv");
        std::fs::write(&path, csv).unwrap();

        let config = AnalyticsConfig::with_data_path(&path);
        let source = DatasetSource::new(&config.data_path, config.columns.clone());
        let report = AnalyticsReport::compute(source.load(), &config);
        (dir, report)
    }

    #[test]
    fn test_report_over_full_schema() {
        let mut csv = String::from("VIN (1-10),Make,Model Year,Electric Vehicle Type,State\n");
        for i in 0..12 {
            csv.push_str(&format!("V{i},MAKE{},{},BEV,WA\n", i % 11, 2015 + i % 3));
        }
        let (_dir, report) = load(&csv);

        assert_eq!(report.shape, (12, 5));
        assert_eq!(report.preview.len(), 5);
        assert_eq!(report.columns[0], "VIN (1-10)");

        let makes = report.manufacturers.unwrap();
        assert_eq!(makes.len(), 10);
        assert_eq!(makes[0], CountEntry::new(CellValue::from("MAKE0"), 2));

        assert_eq!(
            report.yearly.unwrap(),
            vec![
                CountEntry::new(2015, 4),
                CountEntry::new(2016, 4),
                CountEntry::new(2017, 4),
            ]
        );
        assert_eq!(report.vehicle_types.unwrap(), vec![CountEntry::new(CellValue::from("BEV"), 12)]);
        assert_eq!(report.regions.unwrap(), vec![CountEntry::new(CellValue::from("WA"), 12)]);
    }

    #[test]
    fn test_missing_columns_omit_views() {
        let (_dir, report) = load("Make,County\nTESLA,King\nFORD,King\n");

        assert!(report.manufacturers.is_some());
        assert!(report.yearly.is_none());
        assert!(report.vehicle_types.is_none());
        assert!(report.regions.is_none());
    }

    #[test]
    fn test_unavailable_dataset_gives_empty_report() {
        let dir = tempfile::tempdir().unwrap();
        let config = AnalyticsConfig::with_data_path(dir.path().join("absent.csv"));
        let source = DatasetSource::new(&config.data_path, config.columns.clone());
        let report = AnalyticsReport::compute(source.load(), &config);

        assert!(report.is_empty());
        assert_eq!(report, AnalyticsReport::default());
    }
}
