use std::path::PathBuf;

/// Errors raised by the encode and preview pipelines.
#[derive(Debug, thiserror::Error)]
pub enum LoreError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The source image could not be opened or decoded.
    #[error("cannot read image {}: {source}", path.display())]
    Resource {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("could not parse lore data: {0}")]
    Parse(String),

    #[error("invalid color {0:?}, expected #RRGGBB")]
    InvalidColor(String),

    #[error("malformed lore line: {0}")]
    Json(#[from] serde_json::Error),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot encode preview image: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, LoreError>;
