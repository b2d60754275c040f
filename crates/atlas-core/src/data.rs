/// Dataset loading.
///
/// The destination document is a single JSON file of the shape
/// `{"destinations": [...]}`. It is re-read on every call; there is no
/// cache, so an edit to the file is visible on the very next request
/// without a restart.
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::CoreError;
use crate::model::Destination;

#[derive(Debug, Deserialize)]
struct Dataset {
    destinations: Vec<Destination>,
}

/// Parse a dataset document into its destination records.
pub fn parse_dataset(content: &str) -> Result<Vec<Destination>, CoreError> {
    let dataset: Dataset = serde_json::from_str(content)?;
    debug!(count = dataset.destinations.len(), "dataset parsed");
    Ok(dataset.destinations)
}

/// Read and parse the dataset file at `path`.
pub fn load_destinations(path: &Path) -> Result<Vec<Destination>, CoreError> {
    let content = fs::read_to_string(path).map_err(|source| CoreError::Read {
        path: path.display().to_string(),
        source,
    })?;
    parse_dataset(&content)
}
