// File: crates/demo/src/main.rs
// Summary: Demo loads the bundled dataset and renders every chart to SVG, then
// re-renders the first chart at a wider viewport to exercise the resize path.

use anyhow::{Context, Result};
use linechart_core::{dataset, ChartView};
use std::path::PathBuf;
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let charts = dataset::bundled().context("failed to load bundled dataset")?;
    if charts.is_empty() {
        // Loading state: nothing to draw yet.
        info!("dataset is empty; nothing to render");
        return Ok(());
    }
    info!("loaded {} chart descriptions", charts.len());

    let out_dir = PathBuf::from("target/demo_out");
    let width = 800.0;

    let mut views = Vec::new();
    for (index, chart) in charts.into_iter().enumerate() {
        let title = chart.title.clone().unwrap_or_else(|| format!("chart {index}"));
        let mut view = ChartView::with_description(chart);
        view.set_viewport_width(Some(width));

        let out = out_dir.join(format!("chart_{index}.svg"));
        linechart_svg::write_svg(view.scene(), width, &out)
            .with_context(|| format!("failed to write {}", out.display()))?;
        match view.error() {
            Some(err) => info!("wrote {} (error panel: {err})", out.display()),
            None => info!("wrote {} ({title})", out.display()),
        }
        views.push(view);
    }

    // Viewport resize notification: re-render from scratch at the new width.
    let wide = 1100.0;
    let first = &mut views[0];
    first.set_viewport_width(Some(wide));
    let out = out_dir.join("chart_0_wide.svg");
    linechart_svg::write_svg(first.scene(), wide, &out)
        .with_context(|| format!("failed to write {}", out.display()))?;
    info!("wrote {} (resized to {wide})", out.display());

    Ok(())
}
