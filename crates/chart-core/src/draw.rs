// File: crates/chart-core/src/draw.rs
// Summary: Backend-neutral draw commands produced by the renderer and consumed by rasterizers.

use crate::geometry::Point;
use crate::interpolate::PathVerb;
use crate::theme::Rgba;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole surface.
    Clear(Rgba),
    /// Filled axis-aligned rectangle.
    Rect { origin: Point, width: f32, height: f32, color: Rgba },
    Line { from: Point, to: Point, color: Rgba, width: f32 },
    /// Stroked open path with round caps and joins.
    Path { verbs: Vec<PathVerb>, color: Rgba, width: f32 },
    /// Filled circle (legend swatches).
    Circle { center: Point, radius: f32, color: Rgba },
    /// `at` is the baseline anchor; `align` picks which edge of the text sits on it.
    Text { text: String, at: Point, size: f32, color: Rgba, align: TextAlign },
}

impl DrawCommand {
    fn translated(&self, dx: f32, dy: f32) -> Self {
        let mv = |p: Point| p.offset(dx, dy);
        match self {
            DrawCommand::Clear(c) => DrawCommand::Clear(*c),
            DrawCommand::Rect { origin, width, height, color } => {
                DrawCommand::Rect { origin: mv(*origin), width: *width, height: *height, color: *color }
            }
            DrawCommand::Line { from, to, color, width } => {
                DrawCommand::Line { from: mv(*from), to: mv(*to), color: *color, width: *width }
            }
            DrawCommand::Path { verbs, color, width } => DrawCommand::Path {
                verbs: verbs
                    .iter()
                    .map(|v| match *v {
                        PathVerb::MoveTo(p) => PathVerb::MoveTo(mv(p)),
                        PathVerb::LineTo(p) => PathVerb::LineTo(mv(p)),
                        PathVerb::CubicTo { c1, c2, to } => {
                            PathVerb::CubicTo { c1: mv(c1), c2: mv(c2), to: mv(to) }
                        }
                    })
                    .collect(),
                color: *color,
                width: *width,
            },
            DrawCommand::Circle { center, radius, color } => {
                DrawCommand::Circle { center: mv(*center), radius: *radius, color: *color }
            }
            DrawCommand::Text { text, at, size, color, align } => DrawCommand::Text {
                text: text.clone(),
                at: mv(*at),
                size: *size,
                color: *color,
                align: *align,
            },
        }
    }
}

/// A fixed-size drawable view: the renderer's whole output.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawList {
    pub width: u32,
    pub height: u32,
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, commands: Vec::new() }
    }

    pub fn push(&mut self, cmd: DrawCommand) {
        self.commands.push(cmd);
    }

    /// Copy of every command shifted by (dx, dy).
    pub fn translated(&self, dx: f32, dy: f32) -> Vec<DrawCommand> {
        self.commands.iter().map(|c| c.translated(dx, dy)).collect()
    }

    pub fn texts(&self) -> impl Iterator<Item = (&str, Rgba)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, color, .. } => Some((text.as_str(), *color)),
            _ => None,
        })
    }

    pub fn paths(&self) -> impl Iterator<Item = (&[PathVerb], Rgba, f32)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Path { verbs, color, width } => Some((verbs.as_slice(), *color, *width)),
            _ => None,
        })
    }
}
