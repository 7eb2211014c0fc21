use thiserror::Error;

/// Reasons a course load can fail. The loader never returns these to its
/// caller directly; they ride inside [`super::LoadOutcome::Failed`].
#[derive(Debug, Error)]
pub enum LoadError {
    /// The server answered with a non-success status code.
    #[error("HTTP error! status: {0}")]
    Status(u16),
    /// The request could not be sent or its body could not be read.
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
    /// The local file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// The body was not a JSON array of courses.
    #[error("could not decode course list: {0}")]
    Decode(#[from] serde_json::Error),
}
