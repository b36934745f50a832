// File: crates/chart-core/tests/render.rs
// Purpose: Render policy: ticks, highlight, fixed value domain, series styling, idempotence.

use mood_chart::dataset::week_series;
use mood_chart::draw::DrawCommand;
use mood_chart::interpolate::PathVerb;
use mood_chart::scale::ValueScale;
use mood_chart::{
    ChartError, ChartOptions, Dataset, Gregorian, Interpolation, LineChart, Period, Rgba, TickStride,
};

fn sample() -> Dataset {
    Dataset::sample(&Gregorian).expect("sample dataset")
}

#[test]
fn seven_day_ticks_with_fourth_highlighted() {
    let chart = LineChart::new(ChartOptions::default());
    let ticks = chart.x_ticks(&sample()).expect("ticks");
    assert_eq!(ticks.len(), 7);
    let labels: Vec<&str> = ticks.iter().map(|t| t.label).collect();
    assert_eq!(labels, ["M", "T", "W", "T", "F", "S", "S"]);
    for t in &ticks {
        assert_eq!(t.highlighted, t.index == 3, "tick {}", t.index);
    }
}

#[test]
fn only_thursday_label_is_red() {
    let list = mood_chart::render(&sample()).expect("render");
    let red: Vec<&str> = list.texts().filter(|(_, c)| *c == Rgba::RED).map(|(t, _)| t).collect();
    assert_eq!(red, ["T"]);
}

#[test]
fn no_highlight_when_disabled() {
    let chart = LineChart::new(ChartOptions { highlight_tick: None, ..ChartOptions::default() });
    let list = chart.render(&sample()).expect("render");
    assert_eq!(list.texts().filter(|(_, c)| *c == Rgba::RED).count(), 0);
}

#[test]
fn weekday_binning_fails_fast() {
    let chart = LineChart::new(ChartOptions { x_stride: TickStride::Weekday, ..ChartOptions::default() });
    assert_eq!(chart.render(&sample()).unwrap_err(), ChartError::UnsupportedBinning(TickStride::Weekday));
    assert!(chart.x_ticks(&sample()).is_err());
}

#[test]
fn frame_is_500_by_400() {
    let list = mood_chart::render(&sample()).expect("render");
    assert_eq!((list.width, list.height), (500, 400));
    assert!(matches!(list.commands.first(), Some(DrawCommand::Clear(_))));
}

#[test]
fn one_six_unit_line_per_series_in_period_colors() {
    let list = mood_chart::render(&sample()).expect("render");
    let paths: Vec<_> = list.paths().collect();
    assert_eq!(paths.len(), 2);
    // previous is listed first and drawn first
    assert_eq!(paths[0].1, Rgba::GRAY);
    assert_eq!(paths[1].1, Rgba::BLUE);
    assert!(paths.iter().all(|(_, _, w)| *w == 6.0));
    // move + 6 curve segments through 7 samples
    assert!(paths.iter().all(|(verbs, _, _)| verbs.len() == 7));
    assert!(paths[0].0[1..].iter().all(|v| matches!(v, PathVerb::CubicTo { .. })));
}

#[test]
fn linear_interpolation_uses_straight_segments() {
    let chart = LineChart::new(ChartOptions { interpolation: Interpolation::Linear, ..ChartOptions::default() });
    let list = chart.render(&sample()).expect("render");
    for (verbs, _, _) in list.paths() {
        assert!(verbs[1..].iter().all(|v| matches!(v, PathVerb::LineTo(_))));
    }
}

#[test]
fn value_domain_ignores_data_range() {
    let prev = week_series(&Gregorian, Period::Previous, 2022, 8, 1, &[10.0; 7]).expect("series");
    let cur = week_series(&Gregorian, Period::Current, 2022, 8, 8, &[-3.0; 7]).expect("series");
    let wild = Dataset::new(vec![prev, cur]).expect("dataset");

    let chart = LineChart::new(ChartOptions::default());
    assert_eq!(chart.options.y_axis.domain(), (-0.5, 4.5));

    let list = chart.render(&wild).expect("render");
    let y_labels: Vec<&str> = list
        .texts()
        .filter(|(t, _)| t.chars().all(|c| c.is_ascii_digit()))
        .map(|(t, _)| t)
        .collect();
    assert_eq!(y_labels, ["0", "1", "2", "3", "4"]);

    let plot = chart.layout().plot;
    let ys = ValueScale::new_linear(plot.top, plot.bottom, -0.5, 4.5);
    let paths: Vec<_> = list.paths().collect();
    match paths[0].0[0] {
        PathVerb::MoveTo(p) => assert!((p.y - ys.to_px(10.0)).abs() < 1e-3),
        other => panic!("expected move, got {other:?}"),
    }
    // Domain edges land exactly on the plot edges
    assert!((ys.to_px(-0.5) - plot.bottom).abs() < 1e-4);
    assert!((ys.to_px(4.5) - plot.top).abs() < 1e-4);
}

#[test]
fn both_weeks_overlay_on_the_same_day_bins() {
    let list = mood_chart::render(&sample()).expect("render");
    let starts: Vec<f32> = list
        .paths()
        .map(|(verbs, _, _)| match verbs[0] {
            PathVerb::MoveTo(p) => p.x,
            _ => f32::NAN,
        })
        .collect();
    assert_eq!(starts.len(), 2);
    assert!((starts[0] - starts[1]).abs() < 1e-4);
}

#[test]
fn rendering_is_idempotent() {
    let ds = sample();
    let chart = LineChart::new(ChartOptions::default());
    let a = chart.render(&ds).expect("first render");
    let b = chart.render(&ds).expect("second render");
    assert_eq!(a, b);
}

#[test]
fn theme_changes_colors_not_geometry() {
    let ds = sample();
    let light = LineChart::new(ChartOptions::default()).render(&ds).expect("render");
    let dark = LineChart::new(ChartOptions { theme: mood_chart::Theme::dark(), ..ChartOptions::default() })
        .render(&ds)
        .expect("render");
    assert_ne!(light.commands[0], dark.commands[0]);
    assert_eq!(light.commands.len(), dark.commands.len());
    assert_eq!(light.paths().count(), dark.paths().count());
}

#[test]
fn injected_calendar_labels_the_same_week() {
    let cal = mood_chart::FixedCalendar {
        today: chrono::NaiveDate::from_ymd_opt(2026, 10, 16).expect("valid date"),
    };
    let chart = LineChart::with_calendar(ChartOptions::default(), cal);
    let ticks = chart.x_ticks(&sample()).expect("ticks");
    let labels: Vec<&str> = ticks.iter().map(|t| t.label).collect();
    assert_eq!(labels, ["M", "T", "W", "T", "F", "S", "S"]);
}

#[test]
fn top_legend_moves_plot_down() {
    use mood_chart::legend::{LegendPosition, LegendStyle};
    let top = LineChart::new(ChartOptions {
        legend: LegendStyle { position: LegendPosition::Top, ..LegendStyle::default() },
        ..ChartOptions::default()
    });
    let bottom = LineChart::new(ChartOptions::default());
    assert!(top.layout().plot.top > bottom.layout().plot.top);
    assert!(top.legend_entries().iter().all(|e| e.label_at.y < top.layout().plot.top));
}
