// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; mood data preparation and the pure line-chart renderer.

pub mod axis;
pub mod calendar;
pub mod chart;
pub mod dataset;
pub mod draw;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod interpolate;
pub mod legend;
pub mod present;
pub mod scale;
pub mod series;
pub mod theme;
pub mod types;

pub use axis::{TickStride, ValueAxis, XTick};
pub use calendar::{Calendar, FixedCalendar, Gregorian};
pub use chart::{render, ChartOptions, LineChart};
pub use dataset::Dataset;
pub use draw::{DrawCommand, DrawList, TextAlign};
pub use error::ChartError;
pub use interpolate::Interpolation;
pub use legend::ColorScale;
pub use present::{HostFrame, Presenter};
pub use series::{Period, Sample, Series};
pub use theme::{Rgba, Theme};
