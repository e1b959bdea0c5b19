use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeckError {
    #[error("a deck needs at least one slide")]
    Empty,

    #[error("duplicate slide id '{0}'")]
    DuplicateId(String),

    #[error("failed to read deck file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse deck file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("fullscreen request refused: {0}")]
    Refused(String),
}

#[derive(Debug, Error)]
pub enum TextureError {
    #[error("failed to read image {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode image {path:?}: {reason}")]
    Decode { path: PathBuf, reason: String },

    #[error("failed to create texture for {path:?}: {reason}")]
    Upload { path: PathBuf, reason: String },
}
