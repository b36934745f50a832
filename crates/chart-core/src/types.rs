// File: crates/chart-core/src/types.rs
// Summary: Shared sizes and paddings.

/// Chart frame width in logical units.
pub const WIDTH: u32 = 500;
/// Chart frame height in logical units.
pub const HEIGHT: u32 = 400;
/// Host surface the chart is embedded in (square).
pub const HOST_SIZE: u32 = 600;

/// Plot margins inside the chart frame.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    // Trailing room for y labels, bottom room for weekday labels + legend.
    fn default() -> Self {
        Self::new(8, 32, 8, 56)
    }
}
