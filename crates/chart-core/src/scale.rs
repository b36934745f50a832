// File: crates/chart-core/src/scale.rs
// Summary: Day-band (X) and value (Y) scale transforms.

/// Value Y coordinate (mood).
pub type Value = f64;

/// Vertical value scale mapping a data domain to [top, bottom] pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: Value,
    pub vmax: Value,
}

impl ValueScale {
    pub fn new_linear(top_px: f32, bottom_px: f32, vmin: Value, vmax: Value) -> Self {
        let mut s = Self { top_px, bottom_px, vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }
    #[inline]
    pub fn to_px(&self, y: Value) -> f32 {
        let span = (self.vmax - self.vmin).max(1e-12);
        self.bottom_px - ((y - self.vmin) / span) as f32 * (self.bottom_px - self.top_px)
    }
}

/// Horizontal scale of equal-width day bins; bin `i` covers [i, i + 1).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BandScale {
    pub left_px: f32,
    pub right_px: f32,
    pub bins: usize,
}

impl BandScale {
    pub fn new(left_px: f32, right_px: f32, bins: usize) -> Self {
        Self { left_px, right_px, bins: bins.max(1) }
    }
    #[inline]
    pub fn bin_width(&self) -> f32 {
        (self.right_px - self.left_px) / self.bins as f32
    }
    /// Left edge of bin `i`.
    #[inline]
    pub fn start_px(&self, i: usize) -> f32 {
        self.left_px + i as f32 * self.bin_width()
    }
    /// Center of bin `i`; marks and centered labels sit here.
    #[inline]
    pub fn center_px(&self, i: usize) -> f32 {
        self.start_px(i) + self.bin_width() * 0.5
    }
}
