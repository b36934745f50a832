// File: crates/chart-core/tests/legend.rs
// Purpose: Color scale validation and bottom-centered legend layout.

use mood_chart::draw::DrawCommand;
use mood_chart::{ChartError, ChartOptions, ColorScale, Dataset, Gregorian, LineChart, Period, Rgba};

fn sample() -> Dataset {
    Dataset::sample(&Gregorian).expect("sample dataset")
}

#[test]
fn mood_scale_maps_current_blue_previous_gray() {
    let scale = ColorScale::mood();
    assert_eq!(scale.color_for(Period::Current), Ok(Rgba::BLUE));
    assert_eq!(scale.color_for(Period::Previous), Ok(Rgba::GRAY));
    // colors come back in dataset order: previous, current
    assert_eq!(scale.validate(&sample()), Ok(vec![Rgba::GRAY, Rgba::BLUE]));
}

#[test]
fn legend_lists_both_periods() {
    let chart = LineChart::new(ChartOptions::default());
    let entries = chart.legend_entries();
    let got: Vec<(&str, Rgba)> = entries.iter().map(|e| (e.name.as_str(), e.color)).collect();
    assert_eq!(got, [("current", Rgba::BLUE), ("previous", Rgba::GRAY)]);

    let list = chart.render(&sample()).expect("render");
    let swatches: Vec<Rgba> = list
        .commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Circle { color, .. } => Some(*color),
            _ => None,
        })
        .collect();
    assert_eq!(swatches, [Rgba::BLUE, Rgba::GRAY]);
}

#[test]
fn legend_sits_below_plot_and_is_centered() {
    let chart = LineChart::new(ChartOptions::default());
    let layout = chart.layout();
    let entries = chart.legend_entries();
    assert!(entries.iter().all(|e| e.label_at.y > layout.plot.bottom));

    let left = entries[0].swatch.x - chart.options.legend.swatch_radius;
    let last = &entries[1];
    let right = last.label_at.x + mood_chart::legend::estimate_text_width(&last.name, chart.options.legend.font_size);
    let mid = (left + right) * 0.5;
    assert!((mid - layout.frame.center_x()).abs() < 0.5, "legend mid {mid}");
}

#[test]
fn missing_period_is_a_validation_error() {
    let chart = LineChart::new(ChartOptions {
        color_scale: ColorScale::new([("current", Rgba::BLUE)]),
        ..ChartOptions::default()
    });
    assert_eq!(chart.render(&sample()).unwrap_err(), ChartError::UnmappedSeries("previous".into()));
}

#[test]
fn renamed_period_is_a_validation_error() {
    let scale = ColorScale::new([("current", Rgba::BLUE), ("last-week", Rgba::GRAY)]);
    assert_eq!(scale.validate(&sample()), Err(ChartError::UnknownScaleKey("last-week".into())));
}
