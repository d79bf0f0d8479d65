// File: crates/linechart-core/tests/validate.rs
// Purpose: Validation failures produce exactly one error panel and no chart.

use linechart_core::{point, render, ChartDescription, ChartError, Scene};

fn assert_panel_only(scene: &Scene, kind: &str) {
    let panels = scene.error_panels();
    assert_eq!(panels.len(), 1, "exactly one error panel");
    assert_eq!(panels[0].kind, kind);
    assert_eq!(scene.total_nodes(), 1, "no chart elements beside the panel");
    assert_eq!(scene.count_class("chart"), 0);
    assert_eq!(scene.count_class("series-line"), 0);
}

#[test]
fn absent_description_is_missing_data() {
    let mut scene = Scene::new();
    let err = render(None, Some(800.0), &mut scene).unwrap_err();
    assert_eq!(err, ChartError::MissingData);
    assert_panel_only(&scene, "MissingData");
}

#[test]
fn absent_title_is_missing_title() {
    let desc = ChartDescription::default().with_data(vec![point(0.0, 1.0)]);
    let mut scene = Scene::new();
    let err = render(Some(&desc), Some(800.0), &mut scene).unwrap_err();
    assert_eq!(err, ChartError::MissingTitle);
    assert_panel_only(&scene, "MissingTitle");
}

#[test]
fn empty_title_is_missing_title() {
    let desc = ChartDescription::new("").with_data(vec![point(0.0, 1.0)]);
    let mut scene = Scene::new();
    let err = render(Some(&desc), Some(800.0), &mut scene).unwrap_err();
    assert_eq!(err, ChartError::MissingTitle);
}

#[test]
fn absent_data_is_invalid_data() {
    let desc = ChartDescription::new("No data");
    let mut scene = Scene::new();
    let err = render(Some(&desc), Some(800.0), &mut scene).unwrap_err();
    assert_eq!(err, ChartError::InvalidData);
    assert_panel_only(&scene, "InvalidData");
}

#[test]
fn empty_data_is_invalid_data() {
    let desc = ChartDescription::new("Empty data").with_data(Vec::new());
    let mut scene = Scene::new();
    let err = render(Some(&desc), Some(800.0), &mut scene).unwrap_err();
    assert_eq!(err, ChartError::InvalidData);
    assert_panel_only(&scene, "InvalidData");
}

#[test]
fn failure_clears_a_previously_drawn_chart() {
    let good = ChartDescription::new("Good").with_data(vec![point(0.0, 1.0), point(1.0, 2.0)]);
    let mut scene = Scene::new();
    render(Some(&good), Some(800.0), &mut scene).expect("valid chart renders");
    assert_eq!(scene.count_class("series-line"), 1);

    let bad = ChartDescription::new("Bad");
    render(Some(&bad), Some(800.0), &mut scene).unwrap_err();
    assert_panel_only(&scene, "InvalidData");
}
