use thiserror::Error;

/// Errors raised while turning a recording into a temperature source.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Recording contains no samples")]
    Empty,

    #[error("Sample {index} is not a finite temperature ({value})")]
    NonFinite { index: usize, value: f64 },

    #[error("Recording is neither a JSON array nor an object with a \"samples\" array")]
    UnsupportedLayout,

    #[error("Failed to decode recording: {0}")]
    Decode(#[from] serde_json::Error),
}
