use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints, Points};

use crate::color::ColorMap;
use crate::data::aggregate::{CategoryCounts, YearCounts};

const CHART_HEIGHT: f32 = 280.0;

// ---------------------------------------------------------------------------
// Bar chart – one bar per category
// ---------------------------------------------------------------------------

/// Vertical bars in ranking order, category names on the x axis.
pub fn category_bar_chart(ui: &mut Ui, id: &str, counts: &CategoryCounts) {
    let colors = ColorMap::new(counts.iter().map(|e| &e.key));
    let names: Vec<String> = counts.iter().map(|e| e.key.to_string()).collect();

    let bars: Vec<Bar> = counts
        .iter()
        .enumerate()
        .map(|(i, e)| {
            Bar::new(i as f64, e.count as f64)
                .name(e.key.to_string())
                .fill(colors.color_for(&e.key))
                .width(0.7)
        })
        .collect();

    Plot::new(id)
        .height(CHART_HEIGHT)
        .y_axis_label("Vehicles")
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .x_axis_formatter(move |mark, _range| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() > f64::EPSILON || idx < 0.0 {
                return String::new();
            }
            names.get(idx as usize).cloned().unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

// ---------------------------------------------------------------------------
// Line chart – records per year
// ---------------------------------------------------------------------------

/// One point per year joined by a line, with markers.
pub fn yearly_line_chart(ui: &mut Ui, id: &str, counts: &YearCounts) {
    let points: Vec<[f64; 2]> = counts
        .iter()
        .map(|e| [e.key as f64, e.count as f64])
        .collect();

    Plot::new(id)
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .x_axis_label("Model year")
        .y_axis_label("Vehicles")
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(PlotPoints::from(points.clone()))
                    .name("Vehicles")
                    .color(Color32::LIGHT_BLUE)
                    .width(2.0),
            );
            plot_ui.points(
                Points::new(PlotPoints::from(points))
                    .color(Color32::LIGHT_BLUE)
                    .radius(4.0),
            );
        });
}
