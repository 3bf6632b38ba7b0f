use thiserror::Error;

#[derive(Debug, Error)]
pub enum PackError {
    #[error("Invalid bin dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Unknown heuristic: {0}")]
    UnknownHeuristic(String),
    #[error("Nothing to pack")]
    Empty,
    #[error("Rectangle '{key}' ({width}x{height}) does not fit an empty page")]
    TooLarge {
        key: String,
        width: u32,
        height: u32,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PackError>;
