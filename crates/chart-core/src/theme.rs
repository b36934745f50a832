// File: crates/chart-core/src/theme.rs
// Summary: Renderer-agnostic colors and the chart's light theme.

/// Straight (non-premultiplied) 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    // System palette
    pub const BLUE: Rgba = Rgba::rgb(0, 122, 255);
    pub const GRAY: Rgba = Rgba::rgb(142, 142, 147);
    pub const RED: Rgba = Rgba::rgb(255, 59, 48);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub grid: Rgba,
    pub axis_label: Rgba,
    pub highlight_label: Rgba,
    pub legend_label: Rgba,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::WHITE,
            grid: Rgba::rgb(222, 222, 226),
            axis_label: Rgba::rgb(110, 110, 115),
            highlight_label: Rgba::RED,
            legend_label: Rgba::rgb(110, 110, 115),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::rgb(18, 18, 20),
            grid: Rgba::rgb(40, 40, 45),
            axis_label: Rgba::rgb(174, 174, 178),
            highlight_label: Rgba::rgb(255, 69, 58),
            legend_label: Rgba::rgb(174, 174, 178),
        }
    }
}
