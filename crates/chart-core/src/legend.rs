// File: crates/chart-core/src/legend.rs
// Summary: Period → color table (validated against the dataset) and legend layout.

use crate::dataset::Dataset;
use crate::error::{ChartError, Result};
use crate::geometry::{Point, RectF};
use crate::series::Period;
use crate::theme::Rgba;

/// Explicit foreground style table keyed by period name, in legend order.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorScale {
    entries: Vec<(String, Rgba)>,
}

impl ColorScale {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Rgba)>,
        S: Into<String>,
    {
        Self { entries: entries.into_iter().map(|(k, c)| (k.into(), c)).collect() }
    }

    /// current → blue, previous → gray.
    pub fn mood() -> Self {
        Self::new([(Period::Current.name(), Rgba::BLUE), (Period::Previous.name(), Rgba::GRAY)])
    }

    pub fn entries(&self) -> &[(String, Rgba)] {
        &self.entries
    }

    pub fn color_for(&self, period: Period) -> Result<Rgba> {
        self.entries
            .iter()
            .find(|(k, _)| k == period.name())
            .map(|(_, c)| *c)
            .ok_or_else(|| ChartError::UnmappedSeries(period.name().to_string()))
    }

    /// Check every key names a period and every series has a color.
    /// Returns the colors in dataset series order.
    pub fn validate(&self, dataset: &Dataset) -> Result<Vec<Rgba>> {
        if let Some((key, _)) = self.entries.iter().find(|(k, _)| Period::from_name(k).is_none()) {
            return Err(ChartError::UnknownScaleKey(key.clone()));
        }
        dataset.series().iter().map(|s| self.color_for(s.period)).collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LegendPosition {
    Top,
    #[default]
    Bottom,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LegendAlignment {
    Leading,
    #[default]
    Center,
    Trailing,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegendStyle {
    pub position: LegendPosition,
    pub alignment: LegendAlignment,
    pub font_size: f32,
    pub swatch_radius: f32,
    /// Gap between swatch and its label.
    pub label_gap: f32,
    /// Gap between consecutive entries.
    pub entry_gap: f32,
}

impl Default for LegendStyle {
    fn default() -> Self {
        Self {
            position: LegendPosition::Bottom,
            alignment: LegendAlignment::Center,
            font_size: 12.0,
            swatch_radius: 4.0,
            label_gap: 4.0,
            entry_gap: 12.0,
        }
    }
}

/// Placed legend entry: swatch center and label baseline start.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub name: String,
    pub color: Rgba,
    pub swatch: Point,
    pub label_at: Point,
}

/// Rough advance for proportional UI fonts; the rasterizer shapes the real text.
pub fn estimate_text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * 0.55
}

/// Lay the scale's entries out on one row inside `band`, baseline at `baseline_y`.
pub fn layout_legend(scale: &ColorScale, style: &LegendStyle, band: RectF, baseline_y: f32) -> Vec<LegendEntry> {
    let widths: Vec<f32> = scale
        .entries()
        .iter()
        .map(|(name, _)| style.swatch_radius * 2.0 + style.label_gap + estimate_text_width(name, style.font_size))
        .collect();
    let total = widths.iter().sum::<f32>() + style.entry_gap * widths.len().saturating_sub(1) as f32;
    let mut x = match style.alignment {
        LegendAlignment::Leading => band.left,
        LegendAlignment::Center => band.center_x() - total * 0.5,
        LegendAlignment::Trailing => band.right - total,
    };
    // Swatch is vertically centered on the x-height of the label.
    let swatch_y = baseline_y - style.font_size * 0.35;

    scale
        .entries()
        .iter()
        .zip(widths)
        .map(|((name, color), width)| {
            let entry = LegendEntry {
                name: name.clone(),
                color: *color,
                swatch: Point::new(x + style.swatch_radius, swatch_y),
                label_at: Point::new(x + style.swatch_radius * 2.0 + style.label_gap, baseline_y),
            };
            x += width + style.entry_gap;
            entry
        })
        .collect()
}
