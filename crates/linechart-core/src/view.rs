// File: crates/linechart-core/src/view.rs
// Summary: Host-facing view: one description, one scene, re-render on change.

use crate::chart::ChartDescription;
use crate::error::ChartError;
use crate::render;
use crate::scene::Scene;

/// Binds one chart description to one scene and re-renders whenever the
/// description or the measured viewport width changes. Renders are
/// synchronous and last-write-wins; each pass fully replaces the prior
/// scene contents, so a later notification simply supersedes an earlier one.
#[derive(Debug, Default)]
pub struct ChartView {
    description: Option<ChartDescription>,
    viewport_width: Option<f64>,
    scene: Scene,
    error: Option<ChartError>,
}

impl ChartView {
    /// A view with no description yet; the scene stays empty until one
    /// arrives (the host's loading state).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_description(description: ChartDescription) -> Self {
        let mut view = Self::new();
        view.set_description(Some(description));
        view
    }

    /// Replace the description (None clears it) and re-render.
    pub fn set_description(&mut self, description: Option<ChartDescription>) {
        self.description = description;
        self.rerender();
    }

    /// Viewport-resize notification: record the new width and re-render.
    /// `None` means the viewport is unmeasurable and the default width is
    /// used.
    pub fn set_viewport_width(&mut self, width: Option<f64>) {
        self.viewport_width = width;
        self.rerender();
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The failure of the most recent render pass, if any.
    pub fn error(&self) -> Option<&ChartError> {
        self.error.as_ref()
    }

    fn rerender(&mut self) {
        self.error = render::render(
            self.description.as_ref(),
            self.viewport_width,
            &mut self.scene,
        )
        .err();
    }
}
