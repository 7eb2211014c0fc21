use std::fmt;
use std::path::PathBuf;

/// Where the course list lives. Anything that looks like an HTTP(S) URL is
/// fetched over the network, everything else is treated as a file path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// An `http://` or `https://` URL.
    Http(String),
    /// A local file path.
    File(PathBuf),
}

impl DataSource {
    /// Classify a raw command-line value as a URL or a path.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let lowered = trimmed.to_ascii_lowercase();
        if lowered.starts_with("http://") || lowered.starts_with("https://") {
            DataSource::Http(trimmed.to_string())
        } else {
            DataSource::File(PathBuf::from(trimmed))
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Http(url) => write!(f, "{url}"),
            DataSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}
