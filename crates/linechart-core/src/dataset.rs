// File: crates/linechart-core/src/dataset.rs
// Summary: Dataset provider; parses chart descriptions from JSON, including the bundled set.

use crate::chart::ChartDescription;
use crate::error::DatasetError;

/// The dataset shipped with the crate.
const BUNDLED_JSON: &str = include_str!("../assets/dataset.json");

/// Parse an ordered sequence of chart descriptions from JSON.
pub fn parse_dataset(json: &str) -> Result<Vec<ChartDescription>, DatasetError> {
    Ok(serde_json::from_str(json)?)
}

/// The bundled dataset. An empty result is a host loading state, not an
/// error, so callers render a placeholder until descriptions arrive.
pub fn bundled() -> Result<Vec<ChartDescription>, DatasetError> {
    parse_dataset(BUNDLED_JSON)
}
