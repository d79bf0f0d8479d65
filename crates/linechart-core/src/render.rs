// File: crates/linechart-core/src/render.rs
// Summary: Render pipeline: validate, lay out, scale, and draw one chart into a scene.

use tracing::{debug, warn};

use crate::chart::ChartDescription;
use crate::error::ChartError;
use crate::geometry::{compute_layout, Layout};
use crate::grid::{format_tick, tick_values};
use crate::scale::LinearScale;
use crate::scene::{Anchor, ErrorPanel, Group, Path, Scene, Segment, Text};
use crate::series::{self, SeriesShape};
use crate::theme::Theme;
use crate::types::{LEGEND_SWATCH, SERIES_STROKE};

const X_TICKS: usize = 6;
const Y_TICKS: usize = 5;

/// Render one chart description into `scene`.
///
/// The scene is cleared on every call. On success it holds exactly one root
/// group with the full chart; on failure it holds exactly one error panel
/// and the error is returned. Nothing panics past this boundary.
pub fn render(
    description: Option<&ChartDescription>,
    viewport_width: Option<f64>,
    scene: &mut Scene,
) -> Result<(), ChartError> {
    scene.clear();
    match draw(description, viewport_width, scene) {
        Ok(()) => Ok(()),
        Err(err) => {
            warn!(kind = err.kind(), "chart render failed: {err}");
            scene.clear();
            scene.push(ErrorPanel { kind: err.kind(), message: err.to_string() });
            Err(err)
        }
    }
}

fn draw(
    description: Option<&ChartDescription>,
    viewport_width: Option<f64>,
    scene: &mut Scene,
) -> Result<(), ChartError> {
    let desc = description.ok_or(ChartError::MissingData)?;

    let title = desc
        .title
        .as_deref()
        .filter(|t| !t.is_empty())
        .ok_or(ChartError::MissingTitle)?;

    let data = match desc.data.as_deref() {
        Some(d) if !d.is_empty() => d,
        _ => return Err(ChartError::InvalidData),
    };

    let layout = compute_layout(viewport_width);
    let theme = Theme::default();
    let mut root = Group::new((layout.insets.left, layout.insets.top), "chart");

    // Title, centered above the plot area.
    root.push(
        Text::new(layout.plot_w / 2.0, -layout.insets.top / 2.0, title)
            .anchor(Anchor::Middle)
            .size(16.0)
            .bold()
            .class("title"),
    );

    // Shared horizontal scale over the x extent of all points.
    let x_scale = LinearScale::from_extent(data.iter().map(|p| p.x()), (0.0, layout.plot_w))
        .map_err(|e| ChartError::RenderFailure { reason: format!("time axis: {e}") })?;

    root.push(x_axis(&layout, &x_scale, &theme));
    root.push(
        Text::new(
            layout.plot_w / 2.0,
            layout.plot_h + layout.insets.bottom - 10.0,
            "Time",
        )
        .anchor(Anchor::Middle)
        .class("axis-label"),
    );

    let shape = series::classify(data);
    match shape {
        SeriesShape::Single => {
            let points = series::scalar_points(data);
            let y_scale = LinearScale::from_extent(
                points.iter().filter_map(|p| p.map(|(_, y)| y)),
                (layout.plot_h, 0.0),
            )
            .map_err(|e| ChartError::RenderFailure {
                reason: format!("single-series chart: {e}"),
            })?;

            root.push(y_axis(&layout, &y_scale, &theme));
            root.push(value_label(&layout));

            // One continuous line; missing samples break it instead of
            // being bridged.
            let mapped: Vec<Option<(f64, f64)>> = points
                .iter()
                .map(|p| p.map(|(x, y)| (x_scale.map(x), y_scale.map(y))))
                .collect();
            root.push(
                Path::new(mapped, theme.accent)
                    .stroke_width(SERIES_STROKE)
                    .class("series-line"),
            );
        }
        SeriesShape::Multi { count } => {
            // Shared vertical scale over every present value of every series.
            let y_scale =
                LinearScale::from_extent(series::all_values(data), (layout.plot_h, 0.0)).map_err(
                    |e| ChartError::RenderFailure {
                        reason: format!("multi-series chart: {e}"),
                    },
                )?;

            root.push(y_axis(&layout, &y_scale, &theme));
            root.push(value_label(&layout));

            let names = desc.series_names.as_deref();
            for i in 0..count {
                let color = theme.series_color(i);

                // Missing samples of a series are dropped before drawing.
                let mapped: Vec<Option<(f64, f64)>> = series::series_points(data, i)
                    .into_iter()
                    .map(|(x, y)| Some((x_scale.map(x), y_scale.map(y))))
                    .collect();
                root.push(
                    Path::new(mapped, color)
                        .stroke_width(SERIES_STROKE)
                        .class("series-line"),
                );

                // Legend row below the plot, entries spaced by series index.
                let legend_y = layout.plot_h + layout.insets.bottom - 15.0;
                let legend_x = layout.insets.left + (layout.plot_w / count as f64) * i as f64;
                root.push(
                    Segment::new(legend_x, legend_y, legend_x + LEGEND_SWATCH, legend_y, color)
                        .stroke_width(SERIES_STROKE)
                        .class("legend-swatch"),
                );
                root.push(
                    Text::new(legend_x + 25.0, legend_y + 4.0, series::display_name(names, i))
                        .size(12.0)
                        .class("legend-label"),
                );
            }
        }
    }

    debug!(
        points = data.len(),
        series = shape.series_count(),
        width = layout.width,
        "rendered chart '{title}'"
    );
    scene.push(root);
    Ok(())
}

fn x_axis(layout: &Layout, scale: &LinearScale, theme: &Theme) -> Group {
    let mut g = Group::new((0.0, layout.plot_h), "x-axis");
    g.push(Segment::new(0.0, 0.0, layout.plot_w, 0.0, theme.axis_line));
    let (min, max) = scale.domain();
    for t in tick_values(min, max, X_TICKS) {
        let x = scale.map(t);
        g.push(Segment::new(x, 0.0, x, 6.0, theme.axis_line).class("tick"));
        g.push(
            Text::new(x, 18.0, format_tick(t))
                .anchor(Anchor::Middle)
                .size(10.0)
                .class("tick-label"),
        );
    }
    g
}

fn y_axis(layout: &Layout, scale: &LinearScale, theme: &Theme) -> Group {
    let mut g = Group::new((0.0, 0.0), "y-axis");
    g.push(Segment::new(0.0, 0.0, 0.0, layout.plot_h, theme.axis_line));
    let (min, max) = scale.domain();
    for t in tick_values(min, max, Y_TICKS) {
        let y = scale.map(t);
        g.push(Segment::new(-6.0, y, 0.0, y, theme.axis_line).class("tick"));
        g.push(
            Text::new(-9.0, y + 3.0, format_tick(t))
                .anchor(Anchor::End)
                .size(10.0)
                .class("tick-label"),
        );
    }
    g
}

/// Rotated "Value" label along the left margin. Coordinates are in the
/// rotated frame, matching the SVG `rotate(-90)` convention.
fn value_label(layout: &Layout) -> Text {
    Text::new(-(layout.plot_h / 2.0), -layout.insets.left + 14.0, "Value")
        .anchor(Anchor::Middle)
        .rotate(-90.0)
        .class("axis-label")
}
