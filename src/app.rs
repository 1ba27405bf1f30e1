use eframe::egui;

use crate::config::AnalyticsConfig;
use crate::state::{AppState, Page};
use crate::ui::{analytics, pages, sidebar};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PortfolioApp {
    pub state: AppState,
}

impl PortfolioApp {
    /// Build the session and load the dataset up front.
    pub fn new(config: AnalyticsConfig) -> Self {
        let state = AppState::new(config);
        if let Some(notice) = &state.dataset().notice {
            log::warn!("Starting without data: {notice}");
        }
        Self { state }
    }
}

impl Default for PortfolioApp {
    fn default() -> Self {
        Self::new(AnalyticsConfig::default())
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Left side panel: navigation ----
        egui::SidePanel::left("navigation")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                sidebar::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: selected page ----
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| match self.state.page {
                    Page::Home => pages::home(ui, &self.state),
                    Page::Background => pages::background(ui, &self.state),
                    Page::Skills => pages::skills(ui, &self.state),
                    Page::DataAnalysis => analytics::analysis_page(ui, &self.state),
                });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_is_read_when_the_app_is_built() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ev.csv");
        std::fs::write(&path, "Make,Model Year\nTESLA,2022\nFORD,2021\n").unwrap();

        let app = PortfolioApp::new(AnalyticsConfig::with_data_path(path.clone()));
        std::fs::remove_file(&path).unwrap();

        let loaded = app.state.dataset();
        assert!(loaded.notice.is_none());
        assert_eq!(loaded.dataset.len(), 2);
    }
}
