use std::f32::consts::{FRAC_PI_2, TAU};

use eframe::egui::{self, Color32, Pos2, Sense, Shape, Stroke, Ui, Vec2};

use crate::color::ColorMap;
use crate::data::aggregate::CategoryCounts;

/// Arc resolution, in radians per polygon edge.
const ARC_STEP: f32 = 0.05;

/// Angular extent of one category, starting at twelve o'clock, clockwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slice {
    pub start: f32,
    pub sweep: f32,
    pub fraction: f32,
}

/// Split the full circle proportionally to the counts.
pub fn slices(counts: &CategoryCounts) -> Vec<Slice> {
    let total: usize = counts.iter().map(|e| e.count).sum();
    if total == 0 {
        return Vec::new();
    }

    let mut start = -FRAC_PI_2;
    counts
        .iter()
        .map(|e| {
            let fraction = e.count as f32 / total as f32;
            let slice = Slice {
                start,
                sweep: fraction * TAU,
                fraction,
            };
            start += slice.sweep;
            slice
        })
        .collect()
}

/// Pie with a legend to its right.
pub fn pie_chart(ui: &mut Ui, counts: &CategoryCounts) {
    let colors = ColorMap::new(counts.iter().map(|e| &e.key));
    let slices = slices(counts);

    ui.horizontal(|ui| {
        let size = 240.0;
        let (response, painter) = ui.allocate_painter(Vec2::splat(size), Sense::hover());
        let center = response.rect.center();
        let radius = size * 0.45;

        for (entry, slice) in counts.iter().zip(&slices) {
            paint_slice(&painter, center, radius, slice, colors.color_for(&entry.key));
        }

        ui.vertical(|ui| {
            for (entry, slice) in counts.iter().zip(&slices) {
                ui.horizontal(|ui| {
                    let (swatch, _) = ui.allocate_exact_size(Vec2::splat(12.0), Sense::hover());
                    ui.painter()
                        .rect_filled(swatch, 2.0, colors.color_for(&entry.key));
                    ui.label(format!(
                        "{}: {} ({:.1}%)",
                        entry.key,
                        entry.count,
                        slice.fraction * 100.0
                    ));
                });
            }
        });
    });
}

/// Fill one slice as a fan of convex pieces no wider than a quarter turn.
fn paint_slice(painter: &egui::Painter, center: Pos2, radius: f32, slice: &Slice, color: Color32) {
    let end = slice.start + slice.sweep;
    let mut piece_start = slice.start;

    while piece_start < end {
        let piece_end = (piece_start + FRAC_PI_2).min(end);
        let steps = (((piece_end - piece_start) / ARC_STEP).ceil() as usize).max(1);

        let mut points = Vec::with_capacity(steps + 2);
        points.push(center);
        for i in 0..=steps {
            let angle = piece_start + (piece_end - piece_start) * i as f32 / steps as f32;
            points.push(center + radius * Vec2::angled(angle));
        }
        painter.add(Shape::convex_polygon(points, color, Stroke::NONE));

        piece_start = piece_end;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::aggregate::CountEntry;
    use crate::data::model::CellValue;

    #[test]
    fn test_slices_cover_the_circle() {
        let counts = vec![
            CountEntry::new(CellValue::from("BEV"), 3),
            CountEntry::new(CellValue::from("PHEV"), 1),
        ];
        let s = slices(&counts);

        assert_eq!(s.len(), 2);
        assert!((s[0].fraction - 0.75).abs() < 1e-6);
        assert!((s[0].start + FRAC_PI_2).abs() < 1e-6);
        assert!((s[1].start - (s[0].start + s[0].sweep)).abs() < 1e-6);
        let total: f32 = s.iter().map(|x| x.sweep).sum();
        assert!((total - TAU).abs() < 1e-4);
    }

    #[test]
    fn test_no_slices_without_counts() {
        assert!(slices(&Vec::new()).is_empty());
    }
}
