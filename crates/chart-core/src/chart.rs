// File: crates/chart-core/src/chart.rs
// Summary: Line chart options and the pure render pipeline from a dataset to a draw list.

use crate::axis::{bin_ticks, format_value, TickStride, ValueAxis, XTick};
use crate::calendar::{Calendar, Gregorian};
use crate::dataset::Dataset;
use crate::draw::{DrawCommand, DrawList, TextAlign};
use crate::error::Result;
use crate::geometry::{Point, RectF};
use crate::interpolate::{path_through, Interpolation};
use crate::legend::{layout_legend, ColorScale, LegendEntry, LegendPosition, LegendStyle};
use crate::scale::{BandScale, ValueScale};
use crate::series::Series;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};

/// Height reserved for the legend row.
const LEGEND_BAND: f32 = 24.0;

#[derive(Clone, Debug, PartialEq)]
pub struct ChartOptions {
    pub width: u32,
    pub height: u32,
    pub insets: Insets,
    pub theme: Theme,
    pub line_width: f32,
    pub interpolation: Interpolation,
    pub y_axis: ValueAxis,
    pub x_stride: TickStride,
    /// Ordinal of the X tick drawn in the theme's highlight color.
    pub highlight_tick: Option<usize>,
    pub axis_font_size: f32,
    pub color_scale: ColorScale,
    pub legend: LegendStyle,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            line_width: 6.0,
            interpolation: Interpolation::CatmullRom,
            y_axis: ValueAxis::mood(),
            x_stride: TickStride::Day,
            highlight_tick: Some(3),
            axis_font_size: 11.0,
            color_scale: ColorScale::mood(),
            legend: LegendStyle::default(),
        }
    }
}

/// Plot area and legend row within the chart frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotLayout {
    pub frame: RectF,
    pub plot: RectF,
    pub legend_baseline: f32,
}

pub struct LineChart<C: Calendar = Gregorian> {
    pub options: ChartOptions,
    calendar: C,
}

impl LineChart<Gregorian> {
    pub fn new(options: ChartOptions) -> Self {
        Self { options, calendar: Gregorian }
    }
}

impl<C: Calendar> LineChart<C> {
    pub fn with_calendar(options: ChartOptions, calendar: C) -> Self {
        Self { options, calendar }
    }

    pub fn layout(&self) -> PlotLayout {
        let o = &self.options;
        let frame = RectF::from_ltwh(0.0, 0.0, o.width as f32, o.height as f32);
        let mut plot = RectF::from_ltrb(
            o.insets.left as f32,
            o.insets.top as f32,
            frame.right - o.insets.right as f32,
            frame.bottom - o.insets.bottom as f32,
        );
        let legend_baseline = match o.legend.position {
            LegendPosition::Bottom => frame.bottom - (LEGEND_BAND - o.legend.font_size) * 0.5,
            LegendPosition::Top => {
                let baseline = plot.top + o.legend.font_size;
                plot.top += LEGEND_BAND;
                baseline
            }
        };
        PlotLayout { frame, plot, legend_baseline }
    }

    /// X ticks over the dataset's reference week. Fails on unsupported binning.
    pub fn x_ticks(&self, dataset: &Dataset) -> Result<Vec<XTick>> {
        bin_ticks(&self.calendar, &dataset.reference_days(), self.options.x_stride, self.options.highlight_tick)
    }

    pub fn legend_entries(&self) -> Vec<LegendEntry> {
        let layout = self.layout();
        layout_legend(&self.options.color_scale, &self.options.legend, layout.frame, layout.legend_baseline)
    }

    /// Render the dataset. All validation happens before the first command is emitted.
    pub fn render(&self, dataset: &Dataset) -> Result<DrawList> {
        let o = &self.options;
        let colors = o.color_scale.validate(dataset)?;
        let ticks = self.x_ticks(dataset)?;

        let layout = self.layout();
        let plot = layout.plot;
        let xs = BandScale::new(plot.left, plot.right, ticks.len());
        let ys = ValueScale::new_linear(plot.top, plot.bottom, o.y_axis.min, o.y_axis.max);

        let mut out = DrawList::new(o.width, o.height);
        out.push(DrawCommand::Clear(o.theme.background));

        // Value gridlines + trailing labels
        for v in o.y_axis.ticks() {
            let y = ys.to_px(v);
            out.push(DrawCommand::Line {
                from: Point::new(plot.left, y),
                to: Point::new(plot.right, y),
                color: o.theme.grid,
                width: 1.0,
            });
            out.push(DrawCommand::Text {
                text: format_value(v),
                at: Point::new(plot.right + 6.0, y + o.axis_font_size * 0.35),
                size: o.axis_font_size,
                color: o.theme.axis_label,
                align: TextAlign::Left,
            });
        }

        // Day gridlines + centered weekday labels
        for tick in &ticks {
            let x = xs.start_px(tick.index);
            out.push(DrawCommand::Line {
                from: Point::new(x, plot.top),
                to: Point::new(x, plot.bottom),
                color: o.theme.grid,
                width: 1.0,
            });
            let color = if tick.highlighted { o.theme.highlight_label } else { o.theme.axis_label };
            out.push(DrawCommand::Text {
                text: tick.label.to_string(),
                at: Point::new(xs.center_px(tick.index), plot.bottom + o.axis_font_size + 4.0),
                size: o.axis_font_size,
                color,
                align: TextAlign::Center,
            });
        }

        for (series, color) in dataset.series().iter().zip(colors) {
            let points = series_points(series, &xs, &ys);
            let verbs = path_through(&points, o.interpolation);
            if verbs.is_empty() {
                continue;
            }
            out.push(DrawCommand::Path { verbs, color, width: o.line_width });
        }

        for entry in self.legend_entries() {
            out.push(DrawCommand::Circle { center: entry.swatch, radius: o.legend.swatch_radius, color: entry.color });
            out.push(DrawCommand::Text {
                text: entry.name,
                at: entry.label_at,
                size: o.legend.font_size,
                color: o.theme.legend_label,
                align: TextAlign::Left,
            });
        }

        tracing::debug!(
            series = dataset.series().len(),
            ticks = ticks.len(),
            commands = out.commands.len(),
            "rendered line chart"
        );
        Ok(out)
    }
}

/// Place samples by day offset within their own week so both weeks overlay.
fn series_points(series: &Series, xs: &BandScale, ys: &ValueScale) -> Vec<Point> {
    let samples = series.sorted_by_day(true);
    let Some(first) = samples.first().map(|s| s.day) else {
        return Vec::new();
    };
    samples
        .iter()
        .map(|s| {
            let offset = (s.day - first).num_days().max(0) as usize;
            Point::new(xs.center_px(offset), ys.to_px(s.value))
        })
        .collect()
}

/// Render with default options and the system calendar.
pub fn render(dataset: &Dataset) -> Result<DrawList> {
    LineChart::new(ChartOptions::default()).render(dataset)
}
