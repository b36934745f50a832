// File: crates/chart-core/src/present.rs
// Summary: Hosting seam: embed the chart in a host surface and hand it to a presenter.

use crate::draw::{DrawCommand, DrawList};
use crate::geometry::Point;
use crate::theme::Rgba;
use crate::types::HOST_SIZE;

/// Anything that can put a finished view on screen (or on disk).
pub trait Presenter {
    fn present(&mut self, view: &DrawList) -> anyhow::Result<()>;
}

/// Host surface the chart view is centered in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HostFrame {
    pub width: u32,
    pub height: u32,
    pub background: Rgba,
}

impl Default for HostFrame {
    fn default() -> Self {
        Self { width: HOST_SIZE, height: HOST_SIZE, background: Rgba::WHITE }
    }
}

impl HostFrame {
    /// Offset that centers a `w`×`h` view in the host. Negative when the view is larger.
    pub fn origin_for(&self, w: u32, h: u32) -> (f32, f32) {
        (
            (self.width as f32 - w as f32) * 0.5,
            (self.height as f32 - h as f32) * 0.5,
        )
    }

    /// New host-sized draw list with the view translated to the center.
    pub fn embed(&self, view: &DrawList) -> DrawList {
        let (dx, dy) = self.origin_for(view.width, view.height);
        let mut out = DrawList::new(self.width, self.height);
        out.push(DrawCommand::Clear(self.background));
        // A view-level clear only covers the view rect once hosted.
        for cmd in view.translated(dx, dy) {
            match cmd {
                DrawCommand::Clear(color) => out.push(DrawCommand::Rect {
                    origin: Point::new(dx, dy),
                    width: view.width as f32,
                    height: view.height as f32,
                    color,
                }),
                other => out.push(other),
            }
        }
        out
    }

    pub fn present_in<P: Presenter>(&self, presenter: &mut P, view: &DrawList) -> anyhow::Result<()> {
        let hosted = self.embed(view);
        tracing::info!(width = hosted.width, height = hosted.height, "presenting chart");
        presenter.present(&hosted)
    }
}
