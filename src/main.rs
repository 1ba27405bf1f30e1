mod app;
mod color;
mod config;
mod data;
mod profile;
mod state;
mod ui;

use app::PortfolioApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Portfolio – EV Data Analysis",
        options,
        Box::new(|_cc| Ok(Box::new(PortfolioApp::default()))),
    )
}
