use std::collections::HashMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::CellValue;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            hsl_to_color32(Hsl::new(hue, 0.75, 0.55))
        })
        .collect()
}

fn hsl_to_color32(hsl: Hsl) -> Color32 {
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red.clamp(0.0, 1.0) * 255.0) as u8,
        (rgb.green.clamp(0.0, 1.0) * 255.0) as u8,
        (rgb.blue.clamp(0.0, 1.0) * 255.0) as u8,
    )
}

// ---------------------------------------------------------------------------
// Categorical mapping: category → Color32
// ---------------------------------------------------------------------------

/// Maps the categories of an aggregate view to distinct colours, in the
/// order the view lists them.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: HashMap<CellValue, Color32>,
    default_color: Color32,
}

impl ColorMap {
    pub fn new<'a>(categories: impl IntoIterator<Item = &'a CellValue>) -> Self {
        let categories: Vec<&CellValue> = categories.into_iter().collect();
        let palette = generate_palette(categories.len());
        let mapping = categories
            .into_iter()
            .zip(palette)
            .map(|(v, c)| (v.clone(), c))
            .collect();

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a given category.
    pub fn color_for(&self, value: &CellValue) -> Color32 {
        self.mapping
            .get(value)
            .copied()
            .unwrap_or(self.default_color)
    }
}

// ---------------------------------------------------------------------------
// Sequential scale: count → Color32 (choropleth fill)
// ---------------------------------------------------------------------------

/// Light-to-dark blue ramp over `[0, max]`.
#[derive(Debug, Clone, Copy)]
pub struct SequentialScale {
    max: usize,
}

impl SequentialScale {
    const HUE: f32 = 215.0;
    const LIGHTEST: f32 = 0.90;
    const DARKEST: f32 = 0.30;

    pub fn new(max: usize) -> Self {
        Self { max }
    }

    /// Position of `count` on the ramp, in `[0, 1]`.
    pub fn fraction(&self, count: usize) -> f32 {
        if self.max == 0 {
            return 0.0;
        }
        (count as f32 / self.max as f32).clamp(0.0, 1.0)
    }

    pub fn color_for(&self, count: usize) -> Color32 {
        let t = self.fraction(count);
        let lightness = Self::LIGHTEST + (Self::DARKEST - Self::LIGHTEST) * t;
        hsl_to_color32(Hsl::new(Self::HUE, 0.70, lightness))
    }

    /// Text colour that stays readable on top of `color_for(count)`.
    pub fn text_color_for(&self, count: usize) -> Color32 {
        if self.fraction(count) > 0.5 {
            Color32::WHITE
        } else {
            Color32::BLACK
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_is_distinct() {
        let colors = generate_palette(5);
        assert_eq!(colors.len(), 5);
        for (i, a) in colors.iter().enumerate() {
            assert!(colors[i + 1..].iter().all(|b| a != b));
        }
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn test_color_map_fallback() {
        let bev = CellValue::from("BEV");
        let phev = CellValue::from("PHEV");
        let map = ColorMap::new([&bev, &phev]);

        assert_ne!(map.color_for(&bev), map.color_for(&phev));
        assert_eq!(map.color_for(&CellValue::from("FCEV")), Color32::GRAY);
    }

    #[test]
    fn test_sequential_scale_darkens_with_count() {
        let scale = SequentialScale::new(100);
        let light = scale.color_for(0);
        let dark = scale.color_for(100);
        let sum = |c: Color32| c.r() as u32 + c.g() as u32 + c.b() as u32;

        assert!(sum(light) > sum(dark));
        assert_eq!(scale.fraction(250), 1.0);
        assert_eq!(SequentialScale::new(0).fraction(3), 0.0);
        assert_eq!(scale.text_color_for(90), Color32::WHITE);
    }
}
