// File: crates/linechart-svg/tests/svg.rs
// Purpose: SVG serialization of rendered scenes (structure, gaps, escaping).

use linechart_core::{multi_point, point, render, ChartDescription, Scene};
use linechart_svg::scene_to_svg;

#[test]
fn single_series_document_structure() {
    let desc = ChartDescription::new("Totals")
        .with_data(vec![point(0.0, 1.0), point(1.0, 2.0), point(2.0, 1.5)]);
    let mut scene = Scene::new();
    render(Some(&desc), Some(800.0), &mut scene).expect("render");

    let svg = scene_to_svg(&scene, 800.0);
    assert!(svg.starts_with("<svg"));
    assert!(svg.ends_with("</svg>"));
    assert!(svg.contains("width=\"800\""));
    assert!(svg.contains(">Totals</text>"));
    assert!(svg.contains("class=\"series-line\""));
    assert!(svg.contains("transform=\"rotate(-90)\""), "rotated Value label");
    assert_eq!(svg.matches("<path").count(), 1);
}

#[test]
fn gap_emits_a_fresh_move_command() {
    let desc = ChartDescription::new("Gap").with_data(vec![
        point(0.0, 1.0),
        point(1.0, 2.0),
        point(2.0, None),
        point(3.0, 4.0),
        point(4.0, 5.0),
    ]);
    let mut scene = Scene::new();
    render(Some(&desc), Some(800.0), &mut scene).expect("render");

    let svg = scene_to_svg(&scene, 800.0);
    let d_start = svg.find("class=\"series-line\"").expect("series path present");
    let path_tag = &svg[svg[..d_start].rfind("<path").unwrap()..d_start];
    assert_eq!(path_tag.matches('M').count(), 2, "one M per disjoint stroke");
}

#[test]
fn multi_series_emits_legend_and_palette_strokes() {
    let desc = ChartDescription::new("Pair")
        .with_data(vec![
            multi_point(0.0, vec![Some(1.0), Some(2.0)]),
            multi_point(1.0, vec![Some(3.0), Some(4.0)]),
        ])
        .with_series_names(vec!["A".into(), "B".into()]);
    let mut scene = Scene::new();
    render(Some(&desc), Some(800.0), &mut scene).expect("render");

    let svg = scene_to_svg(&scene, 800.0);
    assert_eq!(svg.matches("<path").count(), 2);
    assert_eq!(svg.matches("class=\"legend-swatch\"").count(), 2);
    assert!(svg.contains(">A</text>"));
    assert!(svg.contains(">B</text>"));
    assert!(svg.contains("stroke=\"#0000ff\""), "first palette color");
    assert!(svg.contains("stroke=\"#008000\""), "second palette color");
}

#[test]
fn error_panel_is_serialized_instead_of_a_chart() {
    let desc = ChartDescription::new("No data");
    let mut scene = Scene::new();
    render(Some(&desc), Some(800.0), &mut scene).unwrap_err();

    let svg = scene_to_svg(&scene, 800.0);
    assert!(svg.contains("class=\"error-panel\""));
    assert!(svg.contains("Error: InvalidData"));
    assert!(!svg.contains("<path"), "no chart elements beside the panel");
}

#[test]
fn text_content_is_xml_escaped() {
    let desc = ChartDescription::new("P&L <net>")
        .with_data(vec![point(0.0, 1.0), point(1.0, 2.0)]);
    let mut scene = Scene::new();
    render(Some(&desc), Some(800.0), &mut scene).expect("render");

    let svg = scene_to_svg(&scene, 800.0);
    assert!(svg.contains("P&amp;L &lt;net&gt;"));
    assert!(!svg.contains("P&L <net>"));
}
