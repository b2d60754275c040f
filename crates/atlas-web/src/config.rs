use std::path::PathBuf;

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub data_path: PathBuf,
}

impl Config {
    /// Optional:
    /// - `ATLAS_LISTEN_ADDR` (default: "0.0.0.0:5000")
    /// - `ATLAS_DATA_PATH` (default: "data/destinations.json")
    ///
    /// The dataset file must exist at startup; it is re-read per request
    /// afterwards, so later edits do not require a restart.
    pub fn from_env() -> Result<Self, AppError> {
        let listen_addr =
            std::env::var("ATLAS_LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:5000".to_string());
        let data_path = PathBuf::from(
            std::env::var("ATLAS_DATA_PATH")
                .unwrap_or_else(|_| "data/destinations.json".to_string()),
        );

        if !data_path.is_file() {
            return Err(AppError::Config(format!(
                "dataset file not found: {}",
                data_path.display()
            )));
        }

        Ok(Self {
            listen_addr,
            data_path,
        })
    }
}
