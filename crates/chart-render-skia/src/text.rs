// File: crates/chart-render-skia/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout, with left/center/right anchoring.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

use mood_chart::TextAlign;

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["SF Pro Text", "Segoe UI", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32) -> f32 {
        let p = self.layout(text, size, skia::Color::from_argb(0, 0, 0, 0));
        // width of the longest line
        p.longest_line()
    }

    /// Draw `text` with its baseline at `y`, anchored at `x` per `align`.
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color, align: TextAlign) {
        let p = self.layout(text, size, color);
        let w = p.longest_line();
        let left = match align {
            TextAlign::Left => x,
            TextAlign::Center => x - w * 0.5,
            TextAlign::Right => x - w,
        };
        // Paragraph draws from top-left; adjust baseline by glyph height approximation
        p.paint(canvas, (left, y - size * 0.8));
    }
}
