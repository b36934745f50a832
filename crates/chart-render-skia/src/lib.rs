// File: crates/chart-render-skia/src/lib.rs
// Summary: Headless Skia rasterizer for chart draw lists plus a presenter that writes PNG files.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use skia_safe as skia;

use mood_chart::interpolate::PathVerb;
use mood_chart::{DrawCommand, DrawList, Presenter, Rgba};

pub mod text;

pub use text::TextShaper;

#[derive(Clone, Copy, Debug)]
pub struct RasterOptions {
    /// Skip text commands; keeps pixel output independent of installed fonts.
    pub draw_text: bool,
    pub anti_alias: bool,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self { draw_text: true, anti_alias: true }
    }
}

pub struct SkiaRasterizer {
    pub options: RasterOptions,
    shaper: TextShaper,
}

impl Default for SkiaRasterizer {
    fn default() -> Self {
        Self::new(RasterOptions::default())
    }
}

impl SkiaRasterizer {
    pub fn new(options: RasterOptions) -> Self {
        Self { options, shaper: TextShaper::new() }
    }

    fn surface_for(&self, list: &DrawList) -> Result<skia::Surface> {
        let mut surface = skia::surfaces::raster_n32_premul((list.width as i32, list.height as i32))
            .ok_or_else(|| anyhow::anyhow!("failed to create {}x{} raster surface", list.width, list.height))?;
        self.paint_commands(surface.canvas(), list);
        Ok(surface)
    }

    /// Replay every command onto `canvas` in order.
    pub fn paint_commands(&self, canvas: &skia::Canvas, list: &DrawList) {
        for cmd in &list.commands {
            match cmd {
                DrawCommand::Clear(c) => {
                    canvas.clear(color(*c));
                }
                DrawCommand::Rect { origin, width, height, color: c } => {
                    let paint = self.fill(*c);
                    canvas.draw_rect(skia::Rect::from_xywh(origin.x, origin.y, *width, *height), &paint);
                }
                DrawCommand::Line { from, to, color: c, width } => {
                    let paint = self.stroke(*c, *width);
                    canvas.draw_line((from.x, from.y), (to.x, to.y), &paint);
                }
                DrawCommand::Path { verbs, color: c, width } => {
                    let path = to_skia_path(verbs);
                    let mut paint = self.stroke(*c, *width);
                    paint.set_stroke_cap(skia::paint::Cap::Round);
                    paint.set_stroke_join(skia::paint::Join::Round);
                    canvas.draw_path(&path, &paint);
                }
                DrawCommand::Circle { center, radius, color: c } => {
                    let paint = self.fill(*c);
                    canvas.draw_circle((center.x, center.y), *radius, &paint);
                }
                DrawCommand::Text { text, at, size, color: c, align } => {
                    if self.options.draw_text {
                        self.shaper.draw(canvas, text, at.x, at.y, *size, color(*c), *align);
                    }
                }
            }
        }
    }

    fn stroke(&self, c: Rgba, width: f32) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(self.options.anti_alias);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(width);
        paint.set_color(color(c));
        paint
    }

    fn fill(&self, c: Rgba) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(self.options.anti_alias);
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(color(c));
        paint
    }

    /// Rasterize into a tightly packed, unpremultiplied RGBA8 buffer.
    /// Returns (pixels, width, height, row stride in bytes).
    pub fn render_to_rgba8(&self, list: &DrawList) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.surface_for(list)?;
        let (w, h) = (list.width, list.height);
        let stride = w as usize * 4;
        let info = skia::ImageInfo::new(
            (w as i32, h as i32),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("reading back {w}x{h} pixels failed");
        }
        Ok((pixels, w, h, stride))
    }

    pub fn render_to_png_bytes(&self, list: &DrawList) -> Result<Vec<u8>> {
        let mut surface = self.surface_for(list)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render to a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(&self, list: &DrawList, output_png_path: impl AsRef<Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(list)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}

fn color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn to_skia_path(verbs: &[PathVerb]) -> skia::Path {
    let mut path = skia::Path::new();
    for verb in verbs {
        match *verb {
            PathVerb::MoveTo(p) => {
                path.move_to((p.x, p.y));
            }
            PathVerb::LineTo(p) => {
                path.line_to((p.x, p.y));
            }
            PathVerb::CubicTo { c1, c2, to } => {
                path.cubic_to((c1.x, c1.y), (c2.x, c2.y), (to.x, to.y));
            }
        }
    }
    path
}

/// Presents a view by rasterizing it to a PNG file.
pub struct PngPresenter {
    pub path: PathBuf,
    rasterizer: SkiaRasterizer,
}

impl PngPresenter {
    pub fn new(path: impl Into<PathBuf>, rasterizer: SkiaRasterizer) -> Self {
        Self { path: path.into(), rasterizer }
    }
}

impl Presenter for PngPresenter {
    fn present(&mut self, view: &DrawList) -> Result<()> {
        self.rasterizer.render_to_png(view, &self.path)?;
        tracing::info!(path = %self.path.display(), "wrote chart png");
        Ok(())
    }
}
