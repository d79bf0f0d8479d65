// File: crates/linechart-core/tests/multi_series.rs
// Purpose: Multi-series classification, legend naming, and palette cycling.

use linechart_core::{
    classify, multi_point, render, ChartDescription, Scene, SeriesShape, Theme,
};

fn two_series() -> Vec<linechart_core::DataPoint> {
    vec![
        multi_point(0.0, vec![Some(1.0), Some(2.0)]),
        multi_point(1.0, vec![Some(3.0), Some(4.0)]),
    ]
}

#[test]
fn first_point_shape_decides_classification() {
    let data = two_series();
    assert_eq!(classify(&data), SeriesShape::Multi { count: 2 });

    let scalar = vec![linechart_core::point(0.0, 1.0)];
    assert_eq!(classify(&scalar), SeriesShape::Single);
}

#[test]
fn two_series_draw_two_lines_and_two_legend_entries() {
    let desc = ChartDescription::new("Pair").with_data(two_series());
    let mut scene = Scene::new();
    render(Some(&desc), Some(800.0), &mut scene).expect("render");

    assert_eq!(scene.count_class("series-line"), 2);
    assert_eq!(scene.count_class("legend-swatch"), 2);
    assert_eq!(scene.count_class("legend-label"), 2);
    assert_eq!(scene.count_class("y-axis"), 1, "one shared vertical axis");
}

#[test]
fn provided_series_names_label_the_legend() {
    let desc = ChartDescription::new("Pair")
        .with_data(two_series())
        .with_series_names(vec!["A".into(), "B".into()]);
    let mut scene = Scene::new();
    render(Some(&desc), Some(800.0), &mut scene).expect("render");
    assert_eq!(scene.texts_with_class("legend-label"), vec!["A", "B"]);
}

#[test]
fn missing_series_names_fall_back_to_numbered_names() {
    let desc = ChartDescription::new("Pair").with_data(two_series());
    let mut scene = Scene::new();
    render(Some(&desc), Some(800.0), &mut scene).expect("render");
    assert_eq!(
        scene.texts_with_class("legend-label"),
        vec!["Series 1", "Series 2"]
    );
}

#[test]
fn short_name_list_falls_back_per_index() {
    let desc = ChartDescription::new("Pair")
        .with_data(two_series())
        .with_series_names(vec!["Only one".into()]);
    let mut scene = Scene::new();
    render(Some(&desc), Some(800.0), &mut scene).expect("render");
    assert_eq!(
        scene.texts_with_class("legend-label"),
        vec!["Only one", "Series 2"]
    );
}

#[test]
fn palette_wraps_past_six_series() {
    let point = |x: f64| multi_point(x, (0..7).map(|i| Some(i as f64 + x)).collect());
    let desc = ChartDescription::new("Seven").with_data(vec![point(0.0), point(1.0)]);
    let mut scene = Scene::new();
    render(Some(&desc), Some(800.0), &mut scene).expect("render");

    let lines = scene.paths_with_class("series-line");
    assert_eq!(lines.len(), 7);
    let theme = Theme::default();
    assert_eq!(lines[0].stroke, theme.palette[0]);
    assert_eq!(lines[6].stroke, theme.palette[0], "index 6 wraps to the first color");
    assert_eq!(lines[5].stroke, theme.palette[5]);
}
