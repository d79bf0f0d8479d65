// File: crates/linechart-core/src/lib.rs
// Summary: Core library entry point; exports the public API for chart rendering.

pub mod chart;
pub mod dataset;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod render;
pub mod scale;
pub mod scene;
pub mod series;
pub mod theme;
pub mod types;
pub mod view;

pub use chart::{multi_point, point, ChartDescription, DataPoint, YValue};
pub use error::{ChartError, DatasetError};
pub use geometry::{compute_layout, Layout};
pub use render::render;
pub use scale::LinearScale;
pub use scene::Scene;
pub use series::{classify, SeriesShape};
pub use theme::{Rgb, Theme};
pub use view::ChartView;
