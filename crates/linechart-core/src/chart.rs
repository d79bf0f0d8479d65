// File: crates/linechart-core/src/chart.rs
// Summary: Chart description input model, deserialized from the dataset JSON shape.

use serde::Deserialize;

/// One sample on the shared time axis. The JSON form is a 2-element array
/// `[x, y]` where `y` is a number-or-null (single series) or an array of
/// number-or-null (one slot per series).
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DataPoint(pub f64, pub YValue);

impl DataPoint {
    pub fn x(&self) -> f64 { self.0 }
    pub fn y(&self) -> &YValue { &self.1 }
}

/// Y payload of a data point. Null stands for a missing sample.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum YValue {
    Scalar(Option<f64>),
    Multi(Vec<Option<f64>>),
}

/// External input describing one chart. Fields are optional so that absence
/// can be reported through validation instead of failing deserialization.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDescription {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub series_names: Option<Vec<String>>,
    #[serde(default)]
    pub data: Option<Vec<DataPoint>>,
}

impl ChartDescription {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: Some(title.into()), series_names: None, data: None }
    }

    pub fn with_data(mut self, data: Vec<DataPoint>) -> Self {
        self.data = Some(data);
        self
    }

    pub fn with_series_names(mut self, names: Vec<String>) -> Self {
        self.series_names = Some(names);
        self
    }
}

/// Shorthand for building a single-series point.
pub fn point(x: f64, y: impl Into<Option<f64>>) -> DataPoint {
    DataPoint(x, YValue::Scalar(y.into()))
}

/// Shorthand for building a multi-series point.
pub fn multi_point(x: f64, ys: Vec<Option<f64>>) -> DataPoint {
    DataPoint(x, YValue::Multi(ys))
}
