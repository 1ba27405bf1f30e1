use std::collections::BTreeSet;

use crate::config::ColumnMapping;

use super::model::Dataset;

/// The aggregate views the analysis page can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AnalysisView {
    ManufacturerRanking,
    YearlyCounts,
    TypeDistribution,
    RegionalDistribution,
}

impl AnalysisView {
    pub const ALL: [AnalysisView; 4] = [
        AnalysisView::ManufacturerRanking,
        AnalysisView::YearlyCounts,
        AnalysisView::TypeDistribution,
        AnalysisView::RegionalDistribution,
    ];

    /// The source column this view aggregates.
    pub fn column<'a>(&self, mapping: &'a ColumnMapping) -> &'a str {
        match self {
            AnalysisView::ManufacturerRanking => &mapping.manufacturer,
            AnalysisView::YearlyCounts => &mapping.model_year,
            AnalysisView::TypeDistribution => &mapping.vehicle_type,
            AnalysisView::RegionalDistribution => &mapping.region,
        }
    }
}

/// Which views are computable for a loaded schema. Built once at load time
/// so the UI never re-checks column presence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Capabilities {
    available: BTreeSet<AnalysisView>,
}

impl Capabilities {
    pub fn detect(dataset: &Dataset, mapping: &ColumnMapping) -> Self {
        let available = AnalysisView::ALL
            .into_iter()
            .filter(|view| {
                let column = view.column(mapping);
                let present = dataset.has_column(column);
                if !present {
                    log::debug!("Skipping {view:?}: column '{column}' not in schema");
                }
                present
            })
            .collect();
        Capabilities { available }
    }

    pub fn supports(&self, view: AnalysisView) -> bool {
        self.available.contains(&view)
    }

    pub fn available(&self) -> impl Iterator<Item = AnalysisView> + '_ {
        self.available.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.available.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_schema_supports_every_view() {
        let ds = Dataset::new(
            vec![
                "State".into(),
                "Make".into(),
                "Model Year".into(),
                "Electric Vehicle Type".into(),
            ],
            Vec::new(),
        );
        let caps = Capabilities::detect(&ds, &ColumnMapping::default());
        assert_eq!(caps.available().collect::<Vec<_>>(), AnalysisView::ALL.to_vec());
    }

    #[test]
    fn test_missing_columns_drop_their_views() {
        let ds = Dataset::new(vec!["Make".into(), "County".into()], Vec::new());
        let caps = Capabilities::detect(&ds, &ColumnMapping::default());

        assert!(caps.supports(AnalysisView::ManufacturerRanking));
        assert!(!caps.supports(AnalysisView::YearlyCounts));
        assert!(!caps.supports(AnalysisView::TypeDistribution));
        assert!(!caps.supports(AnalysisView::RegionalDistribution));
    }

    #[test]
    fn test_empty_dataset_has_no_capabilities() {
        let caps = Capabilities::detect(&Dataset::empty(), &ColumnMapping::default());
        assert!(caps.is_empty());
    }

    #[test]
    fn test_custom_mapping() {
        let ds = Dataset::new(vec!["Region".into()], Vec::new());
        let mapping = ColumnMapping {
            region: "Region".into(),
            ..ColumnMapping::default()
        };
        let caps = Capabilities::detect(&ds, &mapping);
        assert_eq!(
            caps.available().collect::<Vec<_>>(),
            vec![AnalysisView::RegionalDistribution]
        );
    }
}
