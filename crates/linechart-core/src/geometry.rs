// File: crates/linechart-core/src/geometry.rs
// Summary: Pure layout computation from a viewport width.

use crate::types::{Insets, HEIGHT, WIDTH};

/// Frame geometry for one render pass. Derived from the viewport width on
/// every pass and discarded afterwards; nothing here persists between renders.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub insets: Insets,
    /// Full surface width including margins.
    pub width: f64,
    /// Full surface height including margins.
    pub height: f64,
    /// Plot area width (surface width minus horizontal margins).
    pub plot_w: f64,
    /// Plot area height (fixed height minus vertical margins).
    pub plot_h: f64,
}

/// Compute the frame for a measured viewport width. An unmeasurable width
/// (absent or non-positive) falls back to the default surface width.
pub fn compute_layout(viewport_width: Option<f64>) -> Layout {
    let insets = Insets::default();
    let width = match viewport_width {
        Some(w) if w.is_finite() && w > 0.0 => w,
        _ => WIDTH,
    };
    let plot_w = (width - insets.hsum()).max(1.0);
    let plot_h = (HEIGHT - insets.vsum()).max(1.0);
    Layout { insets, width, height: HEIGHT, plot_w, plot_h }
}
