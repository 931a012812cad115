// src/error.rs
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ShortlistError {
    #[error("Missing AMZ_PARTNER_TAG. Set it as an environment variable or GitHub Actions secret.")]
    MissingTrackingTag,

    #[error("invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("unsupported URL scheme {scheme:?} in {url:?}; expected http or https")]
    UnsupportedScheme { url: String, scheme: String },

    #[error("failed to read input {path}: {source}", path = path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse input {path}: {source}", path = path.display())]
    InputParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("input {path} must be a JSON array of objects", path = path.display())]
    InputShape { path: PathBuf },

    #[error("path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    #[error("failed to write {path}: {source}", path = path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize snapshot: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid option: {0}")]
    InvalidOption(String),
}

pub type ShortlistResult<T> = std::result::Result<T, ShortlistError>;
