// File: crates/linechart-core/src/series.rs
// Summary: Series classification and per-series point extraction.

use crate::chart::{DataPoint, YValue};

/// Whether a dataset carries one series or several, decided by the shape of
/// the FIRST point only. Later points are assumed to share the shape; this
/// mirrors the upstream contract and is deliberately not re-validated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesShape {
    Single,
    Multi { count: usize },
}

impl SeriesShape {
    pub fn series_count(&self) -> usize {
        match self {
            SeriesShape::Single => 1,
            SeriesShape::Multi { count } => *count,
        }
    }
}

/// Classify by inspecting the first data point.
/// Precondition: `data` is non-empty (enforced by validation upstream).
pub fn classify(data: &[DataPoint]) -> SeriesShape {
    match data.first().map(DataPoint::y) {
        Some(YValue::Multi(ys)) => SeriesShape::Multi { count: ys.len() },
        _ => SeriesShape::Single,
    }
}

/// Display name for series `index`: caller-provided name when present,
/// otherwise `Series {index+1}`.
pub fn display_name(names: Option<&[String]>, index: usize) -> String {
    names
        .and_then(|n| n.get(index))
        .cloned()
        .unwrap_or_else(|| format!("Series {}", index + 1))
}

/// Single-series points in draw order, `None` where the sample is missing.
/// Gaps are preserved so the line breaks instead of bridging a null.
pub fn scalar_points(data: &[DataPoint]) -> Vec<Option<(f64, f64)>> {
    data.iter()
        .map(|p| match p.y() {
            YValue::Scalar(Some(y)) => Some((p.x(), *y)),
            _ => None,
        })
        .collect()
}

/// `(x, y_index)` pairs for one series of a multi-series dataset, with
/// missing samples dropped. Points whose shape disagrees with the
/// classification are treated as missing.
pub fn series_points(data: &[DataPoint], index: usize) -> Vec<(f64, f64)> {
    data.iter()
        .filter_map(|p| match p.y() {
            YValue::Multi(ys) => ys.get(index).copied().flatten().map(|y| (p.x(), y)),
            YValue::Scalar(_) => None,
        })
        .collect()
}

/// Every present y value across all series, for the shared vertical extent.
pub fn all_values(data: &[DataPoint]) -> Vec<f64> {
    let mut out = Vec::new();
    for p in data {
        match p.y() {
            YValue::Scalar(Some(v)) => out.push(*v),
            YValue::Scalar(None) => {}
            YValue::Multi(ys) => out.extend(ys.iter().copied().flatten()),
        }
    }
    out
}
