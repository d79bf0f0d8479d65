// File: crates/linechart-core/src/scene.rs
// Summary: Retained vector scene graph; the mutable drawing surface the renderer populates.

use crate::theme::Rgb;

/// Horizontal text alignment relative to the anchor point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

/// Positioned text with styling.
#[derive(Clone, Debug)]
pub struct Text {
    pub x: f64,
    pub y: f64,
    pub content: String,
    pub anchor: Anchor,
    pub size: f64,
    pub bold: bool,
    /// Rotation in degrees around the origin, when set.
    pub rotate: Option<f64>,
    pub class: &'static str,
}

impl Text {
    pub fn new(x: f64, y: f64, content: impl Into<String>) -> Self {
        Self {
            x,
            y,
            content: content.into(),
            anchor: Anchor::Start,
            size: 12.0,
            bold: false,
            rotate: None,
            class: "",
        }
    }
    pub fn anchor(mut self, anchor: Anchor) -> Self { self.anchor = anchor; self }
    pub fn size(mut self, size: f64) -> Self { self.size = size; self }
    pub fn bold(mut self) -> Self { self.bold = true; self }
    pub fn rotate(mut self, degrees: f64) -> Self { self.rotate = Some(degrees); self }
    pub fn class(mut self, class: &'static str) -> Self { self.class = class; self }
}

/// Polyline with a "skip if undefined" policy: a `None` entry breaks the
/// line, so adjacent present points are not joined across a gap.
#[derive(Clone, Debug)]
pub struct Path {
    pub points: Vec<Option<(f64, f64)>>,
    pub stroke: Rgb,
    pub stroke_width: f64,
    pub class: &'static str,
}

impl Path {
    pub fn new(points: Vec<Option<(f64, f64)>>, stroke: Rgb) -> Self {
        Self { points, stroke, stroke_width: 2.0, class: "" }
    }
    pub fn stroke_width(mut self, width: f64) -> Self { self.stroke_width = width; self }
    pub fn class(mut self, class: &'static str) -> Self { self.class = class; self }

    /// Contiguous runs of present points, split at each gap.
    pub fn segments(&self) -> Vec<Vec<(f64, f64)>> {
        let mut runs = Vec::new();
        let mut current = Vec::new();
        for p in &self.points {
            match p {
                Some(pt) => current.push(*pt),
                None => {
                    if !current.is_empty() {
                        runs.push(std::mem::take(&mut current));
                    }
                }
            }
        }
        if !current.is_empty() {
            runs.push(current);
        }
        runs
    }
}

/// Single straight stroke (axis lines, tick marks, legend swatches).
#[derive(Clone, Debug)]
pub struct Segment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke: Rgb,
    pub stroke_width: f64,
    pub class: &'static str,
}

impl Segment {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke: Rgb) -> Self {
        Self { x1, y1, x2, y2, stroke, stroke_width: 1.0, class: "" }
    }
    pub fn stroke_width(mut self, width: f64) -> Self { self.stroke_width = width; self }
    pub fn class(mut self, class: &'static str) -> Self { self.class = class; self }
}

/// Translated container of child nodes.
#[derive(Clone, Debug)]
pub struct Group {
    pub translate: (f64, f64),
    pub class: &'static str,
    pub children: Vec<Node>,
}

impl Group {
    pub fn new(translate: (f64, f64), class: &'static str) -> Self {
        Self { translate, class, children: Vec::new() }
    }
    pub fn push(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }
}

/// Styled validation/render error replacing the chart area.
#[derive(Clone, Debug)]
pub struct ErrorPanel {
    pub kind: &'static str,
    pub message: String,
}

#[derive(Clone, Debug)]
pub enum Node {
    Text(Text),
    Path(Path),
    Segment(Segment),
    Group(Group),
    ErrorPanel(ErrorPanel),
}

impl From<Text> for Node {
    fn from(t: Text) -> Self { Node::Text(t) }
}
impl From<Path> for Node {
    fn from(p: Path) -> Self { Node::Path(p) }
}
impl From<Segment> for Node {
    fn from(s: Segment) -> Self { Node::Segment(s) }
}
impl From<Group> for Node {
    fn from(g: Group) -> Self { Node::Group(g) }
}
impl From<ErrorPanel> for Node {
    fn from(e: ErrorPanel) -> Self { Node::ErrorPanel(e) }
}

/// The drawing surface. One renderer instance owns one scene; every render
/// pass clears it before appending fresh nodes, so stale elements never
/// accumulate across passes.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    nodes: Vec<Node>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove all children (the pre-draw wipe of the render contract).
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    pub fn push(&mut self, node: impl Into<Node>) {
        self.nodes.push(node.into());
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Count nodes (at any depth) tagged with `class`.
    pub fn count_class(&self, class: &str) -> usize {
        let mut n = 0;
        visit(&self.nodes, &mut |node| {
            if node_class(node) == Some(class) {
                n += 1;
            }
        });
        n
    }

    /// All paths (at any depth) tagged with `class`.
    pub fn paths_with_class(&self, class: &str) -> Vec<&Path> {
        let mut out = Vec::new();
        collect_paths(&self.nodes, class, &mut out);
        out
    }

    /// All text contents (at any depth) tagged with `class`.
    pub fn texts_with_class(&self, class: &str) -> Vec<&str> {
        let mut out = Vec::new();
        collect_texts(&self.nodes, class, &mut out);
        out
    }

    /// Error panels at any depth (the render contract puts at most one at
    /// the top level).
    pub fn error_panels(&self) -> Vec<&ErrorPanel> {
        let mut out = Vec::new();
        collect_panels(&self.nodes, &mut out);
        out
    }

    /// Total node count at every depth, for structural comparisons.
    pub fn total_nodes(&self) -> usize {
        let mut n = 0;
        visit(&self.nodes, &mut |_| n += 1);
        n
    }
}

fn node_class(node: &Node) -> Option<&'static str> {
    match node {
        Node::Text(t) => Some(t.class),
        Node::Path(p) => Some(p.class),
        Node::Segment(s) => Some(s.class),
        Node::Group(g) => Some(g.class),
        Node::ErrorPanel(_) => None,
    }
}

fn visit<'a>(nodes: &'a [Node], f: &mut impl FnMut(&'a Node)) {
    for node in nodes {
        f(node);
        if let Node::Group(g) = node {
            visit(&g.children, &mut *f);
        }
    }
}

fn collect_paths<'a>(nodes: &'a [Node], class: &str, out: &mut Vec<&'a Path>) {
    visit(nodes, &mut |node| {
        if let Node::Path(p) = node {
            if p.class == class {
                out.push(p);
            }
        }
    });
}

fn collect_texts<'a>(nodes: &'a [Node], class: &str, out: &mut Vec<&'a str>) {
    visit(nodes, &mut |node| {
        if let Node::Text(t) = node {
            if t.class == class {
                out.push(t.content.as_str());
            }
        }
    });
}

fn collect_panels<'a>(nodes: &'a [Node], out: &mut Vec<&'a ErrorPanel>) {
    visit(nodes, &mut |node| {
        if let Node::ErrorPanel(e) = node {
            out.push(e);
        }
    });
}
