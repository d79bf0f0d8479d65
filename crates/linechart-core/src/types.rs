// File: crates/linechart-core/src/types.rs
// Summary: Shared types and constants (sizes, margins, stroke widths).

/// Fallback surface width in layout units when the viewport is unmeasurable.
pub const WIDTH: f64 = 800.0;
/// Fixed overall surface height in layout units.
pub const HEIGHT: f64 = 400.0;

/// Stroke width used for every series line.
pub const SERIES_STROKE: f64 = 2.0;
/// Length of the colored swatch in a legend entry.
pub const LEGEND_SWATCH: f64 = 20.0;

/// Plot margins, in layout units.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Insets {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Insets {
    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> f64 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> f64 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(60.0, 30.0, 40.0, 50.0)
    }
}
