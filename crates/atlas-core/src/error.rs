/// Errors produced while loading the dataset or deriving content from it.
///
/// The web crate wraps these via `#[from]`; every variant is an
/// unrecoverable request failure there. Missing optional record fields are
/// not errors; they are defaulted at deserialization.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("failed to read dataset at {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed dataset document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("dataset contains no destinations")]
    Empty,

    #[error("destination '{slug}' has no state, cannot build a quiz question")]
    MissingState { slug: String },
}
