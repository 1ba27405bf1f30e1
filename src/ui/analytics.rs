use eframe::egui::{self, Color32, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::report::AnalyticsReport;
use crate::state::AppState;
use crate::ui::{pie, plot, state_map};

// ---------------------------------------------------------------------------
// Data analysis page
// ---------------------------------------------------------------------------

/// Render the analysis page. Lays out whatever the report holds; a view
/// missing from the report is skipped without comment.
pub fn analysis_page(ui: &mut Ui, state: &AppState) {
    ui.heading("📊 Data Analysis: Electric Vehicles");
    ui.separator();

    if let Some(notice) = &state.dataset().notice {
        ui.colored_label(Color32::RED, format!("Error: {notice}"));
        return;
    }

    let report = state.report();
    if report.is_empty() {
        return;
    }

    ui.strong("1. Data structure");
    preview_table(ui, report);
    let (rows, cols) = report.shape;
    ui.label(format!("Dimensions: {rows} rows × {cols} columns"));

    if let Some(makes) = &report.manufacturers {
        ui.separator();
        ui.strong(format!("2. Distribution by manufacturer (top {})", state.config.top_n));
        plot::category_bar_chart(ui, "manufacturers", makes);
    }

    if let Some(years) = &report.yearly {
        ui.separator();
        ui.strong("3. Vehicles per model year");
        plot::yearly_line_chart(ui, "model_years", years);
    }

    if let Some(types) = &report.vehicle_types {
        ui.separator();
        ui.strong("4. Electric vehicle types");
        pie::pie_chart(ui, types);
    }

    if let Some(regions) = &report.regions {
        ui.separator();
        ui.strong("5. Geographic distribution by state");
        state_map::state_map(ui, regions);
    }
}

/// First rows of the dataset, every column.
fn preview_table(ui: &mut Ui, report: &AnalyticsReport) {
    egui::ScrollArea::horizontal()
        .id_salt("preview_scroll")
        .show(ui, |ui| {
            TableBuilder::new(ui)
                .striped(true)
                .vscroll(false)
                .columns(Column::auto().at_least(60.0).resizable(true), report.columns.len())
                .header(20.0, |mut header| {
                    for name in &report.columns {
                        header.col(|ui| {
                            ui.strong(name);
                        });
                    }
                })
                .body(|mut body| {
                    for record in &report.preview {
                        body.row(18.0, |mut row| {
                            for value in &record.values {
                                row.col(|ui| {
                                    ui.label(value.to_string());
                                });
                            }
                        });
                    }
                });
        });
}
