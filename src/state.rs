use std::sync::OnceLock;

use crate::config::AnalyticsConfig;
use crate::data::report::AnalyticsReport;
use crate::data::source::{DatasetSource, LoadedDataset};
use crate::profile::Profile;

// ---------------------------------------------------------------------------
// Navigation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Background,
    Skills,
    DataAnalysis,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Home, Page::Background, Page::Skills, Page::DataAnalysis];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Background => "Education & Experience",
            Page::Skills => "Skills",
            Page::DataAnalysis => "Data Analysis",
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full session state, independent of rendering.
///
/// Owns the dataset for the lifetime of the window; the UI borrows it.
pub struct AppState {
    /// Currently selected page.
    pub page: Page,

    pub config: AnalyticsConfig,

    /// Profile content, or the error that prevented parsing it.
    pub profile: Result<Profile, String>,

    source: DatasetSource,

    /// Aggregates for the analysis page, computed on first visit.
    report: OnceLock<AnalyticsReport>,
}

impl AppState {
    pub fn new(config: AnalyticsConfig) -> Self {
        let profile = Profile::embedded().map_err(|e| {
            log::error!("{e:#}");
            format!("{e:#}")
        });
        let source = DatasetSource::new(&config.data_path, config.columns.clone());

        Self {
            page: Page::default(),
            config,
            profile,
            source,
            report: OnceLock::new(),
        }
    }

    /// The session's dataset, loaded on first access.
    pub fn dataset(&self) -> &LoadedDataset {
        self.source.load()
    }

    pub fn report(&self) -> &AnalyticsReport {
        self.report
            .get_or_init(|| AnalyticsReport::compute(self.dataset(), &self.config))
    }
}
