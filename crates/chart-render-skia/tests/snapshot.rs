// File: crates/chart-render-skia/tests/snapshot.rs
// Purpose: Golden snapshot of the mood chart with bless flow.
// Behavior:
// - Renders the sample chart without text to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use mood_chart::{Dataset, Gregorian};
use mood_chart_render_skia::{RasterOptions, SkiaRasterizer};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn render_bytes() -> Vec<u8> {
    let ds = Dataset::sample(&Gregorian).expect("sample dataset");
    let view = mood_chart::render(&ds).expect("render");
    let raster = SkiaRasterizer::new(RasterOptions { draw_text: false, ..RasterOptions::default() });
    raster.render_to_png_bytes(&view).expect("render bytes")
}

#[test]
fn golden_mood_chart() {
    let bytes = render_bytes();
    let snap_path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/mood_chart.png");

    if bless_mode() {
        if let Some(parent) = snap_path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(&snap_path, &bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read(&snap_path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(&bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "rendered pixels differ from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
    }
}

#[test]
fn renders_are_pixel_identical() {
    let a = image::load_from_memory(&render_bytes()).expect("decode a").to_rgba8();
    let b = image::load_from_memory(&render_bytes()).expect("decode b").to_rgba8();
    assert_eq!(a.as_raw(), b.as_raw());
}
