use std::collections::HashMap;

use eframe::egui::{Align2, Color32, FontId, Rect, Sense, Ui, Vec2, vec2};

use crate::color::SequentialScale;
use crate::data::aggregate::CategoryCounts;

// ---------------------------------------------------------------------------
// US tile grid – one square per state, roughly in place
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub code: &'static str,
    pub col: u8,
    pub row: u8,
}

const fn t(code: &'static str, col: u8, row: u8) -> Tile {
    Tile { code, col, row }
}

const GRID_COLS: u8 = 12;
const GRID_ROWS: u8 = 8;

#[rustfmt::skip]
pub static US_TILES: [Tile; 51] = [
    t("AK", 0, 0), t("ME", 11, 0),
    t("WI", 6, 1), t("VT", 10, 1), t("NH", 11, 1),
    t("WA", 1, 2), t("ID", 2, 2), t("MT", 3, 2), t("ND", 4, 2), t("MN", 5, 2),
    t("IL", 6, 2), t("MI", 7, 2), t("NY", 9, 2), t("MA", 10, 2),
    t("OR", 1, 3), t("NV", 2, 3), t("WY", 3, 3), t("SD", 4, 3), t("IA", 5, 3),
    t("IN", 6, 3), t("OH", 7, 3), t("PA", 8, 3), t("NJ", 9, 3), t("CT", 10, 3),
    t("RI", 11, 3),
    t("CA", 1, 4), t("UT", 2, 4), t("CO", 3, 4), t("NE", 4, 4), t("MO", 5, 4),
    t("KY", 6, 4), t("WV", 7, 4), t("VA", 8, 4), t("MD", 9, 4), t("DE", 10, 4),
    t("AZ", 2, 5), t("NM", 3, 5), t("KS", 4, 5), t("AR", 5, 5), t("TN", 6, 5),
    t("NC", 7, 5), t("SC", 8, 5), t("DC", 9, 5),
    t("OK", 4, 6), t("LA", 5, 6), t("MS", 6, 6), t("AL", 7, 6), t("GA", 8, 6),
    t("HI", 0, 7), t("TX", 4, 7), t("FL", 9, 7),
];

pub fn tile(code: &str) -> Option<&'static Tile> {
    US_TILES.iter().find(|t| t.code == code)
}

/// Region counts split into those that sit on the map and those that don't.
#[derive(Debug, Default, PartialEq)]
pub struct MapLayout {
    pub by_state: HashMap<&'static str, usize>,
    /// Codes with no tile (e.g. overseas addresses), in view order.
    pub unplaced: Vec<(String, usize)>,
    pub max: usize,
}

pub fn layout(counts: &CategoryCounts) -> MapLayout {
    let mut out = MapLayout::default();
    for entry in counts {
        let code = entry.key.to_string().trim().to_ascii_uppercase();
        match tile(&code) {
            Some(t) => {
                *out.by_state.entry(t.code).or_default() += entry.count;
            }
            None => out.unplaced.push((entry.key.to_string(), entry.count)),
        }
    }
    out.max = out.by_state.values().copied().max().unwrap_or(0);
    out
}

/// Choropleth-style tile map coloured by count.
pub fn state_map(ui: &mut Ui, counts: &CategoryCounts) {
    let layout = layout(counts);
    let scale = SequentialScale::new(layout.max);

    let cell = ((ui.available_width() / GRID_COLS as f32).min(48.0)).max(24.0);
    let size = vec2(cell * GRID_COLS as f32, cell * GRID_ROWS as f32);
    let (response, painter) = ui.allocate_painter(size, Sense::hover());
    let origin = response.rect.min;

    for tile in &US_TILES {
        let min = origin + vec2(tile.col as f32 * cell, tile.row as f32 * cell);
        let rect = Rect::from_min_size(min, Vec2::splat(cell)).shrink(1.5);

        let count = layout.by_state.get(tile.code).copied();
        let (fill, text_color) = match count {
            Some(c) => (scale.color_for(c), scale.text_color_for(c)),
            None => (Color32::from_gray(225), Color32::DARK_GRAY),
        };
        painter.rect_filled(rect, 3.0, fill);

        let label = match count {
            Some(c) => format!("{}\n{c}", tile.code),
            None => tile.code.to_string(),
        };
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            label,
            FontId::proportional(cell * 0.22),
            text_color,
        );
    }

    if !layout.unplaced.is_empty() {
        ui.add_space(4.0);
        ui.label("Outside the map:");
        for (code, count) in &layout.unplaced {
            ui.label(format!("• {code}: {count}"));
        }
    }
}
