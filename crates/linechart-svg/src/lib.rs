// File: crates/linechart-svg/src/lib.rs
// Summary: Serializes a rendered scene graph to an SVG document.

use linechart_core::scene::{Anchor, ErrorPanel, Group, Node, Path, Scene, Segment, Text};
use linechart_core::theme::Theme;
use linechart_core::types::HEIGHT;

/// Serialize a scene to a standalone SVG document of the given surface
/// width. The height is the fixed chart height.
pub fn scene_to_svg(scene: &Scene, width: f64) -> String {
    let mut svg = String::new();
    let height = HEIGHT;
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" \
         viewBox=\"0 0 {width} {height}\" font-family=\"sans-serif\">"
    ));
    for node in scene.nodes() {
        write_node(&mut svg, node, width);
    }
    svg.push_str("</svg>");
    svg
}

/// Serialize and write to a file, creating parent directories as needed.
pub fn write_svg(
    scene: &Scene,
    width: f64,
    path: impl AsRef<std::path::Path>,
) -> std::io::Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, scene_to_svg(scene, width))
}

fn write_node(out: &mut String, node: &Node, width: f64) {
    match node {
        Node::Text(t) => write_text(out, t),
        Node::Path(p) => write_path(out, p),
        Node::Segment(s) => write_segment(out, s),
        Node::Group(g) => write_group(out, g, width),
        Node::ErrorPanel(e) => write_error_panel(out, e, width),
    }
}

fn write_group(out: &mut String, group: &Group, width: f64) {
    let (tx, ty) = group.translate;
    out.push_str(&format!(
        "<g transform=\"translate({tx:.2},{ty:.2})\"{}>",
        class_attr(group.class)
    ));
    for child in &group.children {
        write_node(out, child, width);
    }
    out.push_str("</g>");
}

fn write_text(out: &mut String, text: &Text) {
    let anchor = match text.anchor {
        Anchor::Start => "start",
        Anchor::Middle => "middle",
        Anchor::End => "end",
    };
    let weight = if text.bold { " font-weight=\"bold\"" } else { "" };
    let transform = match text.rotate {
        Some(deg) => format!(" transform=\"rotate({deg})\""),
        None => String::new(),
    };
    out.push_str(&format!(
        "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"{anchor}\" font-size=\"{}\"{weight}{transform}{}>{}</text>",
        text.x,
        text.y,
        text.size,
        class_attr(text.class),
        escape_xml(&text.content)
    ));
}

fn write_path(out: &mut String, path: &Path) {
    let mut d = String::new();
    // A fresh `M` after every gap keeps missing samples unbridged.
    for run in path.segments() {
        for (i, (x, y)) in run.iter().enumerate() {
            let cmd = if i == 0 { 'M' } else { 'L' };
            d.push_str(&format!("{cmd}{x:.2},{y:.2}"));
        }
    }
    out.push_str(&format!(
        "<path d=\"{d}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"{}/>",
        path.stroke.to_css(),
        path.stroke_width,
        class_attr(path.class)
    ));
}

fn write_segment(out: &mut String, seg: &Segment) {
    out.push_str(&format!(
        "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"{}\"{}/>",
        seg.x1,
        seg.y1,
        seg.x2,
        seg.y2,
        seg.stroke.to_css(),
        seg.stroke_width,
        class_attr(seg.class)
    ));
}

fn write_error_panel(out: &mut String, panel: &ErrorPanel, width: f64) {
    let theme = Theme::default();
    out.push_str(&format!(
        "<rect x=\"0\" y=\"0\" width=\"{width}\" height=\"{HEIGHT}\" rx=\"6\" fill=\"{}\" class=\"error-panel\"/>",
        theme.error_background.to_css()
    ));
    out.push_str(&format!(
        "<text x=\"20\" y=\"40\" font-weight=\"bold\" fill=\"{}\">Error: {}</text>",
        theme.error_text.to_css(),
        escape_xml(panel.kind)
    ));
    out.push_str(&format!(
        "<text x=\"20\" y=\"64\" fill=\"{}\">{}</text>",
        theme.error_text.to_css(),
        escape_xml(&panel.message)
    ));
}

fn class_attr(class: &str) -> String {
    if class.is_empty() {
        String::new()
    } else {
        format!(" class=\"{class}\"")
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
