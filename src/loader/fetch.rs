use std::fs;

use reqwest::blocking::Client;
use tracing::{error, info};

use crate::models::Course;

use super::{DataSource, LoadError};

/// Result of the one load performed at startup. Callers that only want data
/// use [`LoadOutcome::into_courses`]; the controller also inspects the variant
/// so a failed load is reported differently from an empty file.
#[derive(Debug)]
pub enum LoadOutcome {
    /// At least one course was decoded.
    Loaded(Vec<Course>),
    /// The source was read and decoded but held no courses.
    Empty,
    /// The source could not be read or decoded.
    Failed(LoadError),
}

impl LoadOutcome {
    /// Whether the load produced courses.
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded(_))
    }

    /// The loaded courses, or an empty collection for `Empty` and `Failed`.
    pub fn into_courses(self) -> Vec<Course> {
        match self {
            LoadOutcome::Loaded(courses) => courses,
            LoadOutcome::Empty | LoadOutcome::Failed(_) => Vec::new(),
        }
    }
}

/// Fetch the full course collection. Every failure is logged and folded into
/// the returned outcome; nothing is propagated.
pub fn load_all_courses(source: &DataSource) -> LoadOutcome {
    match fetch_courses(source) {
        Ok(courses) if courses.is_empty() => {
            info!(%source, "course source contained no records");
            LoadOutcome::Empty
        }
        Ok(courses) => {
            info!(%source, count = courses.len(), "courses loaded");
            LoadOutcome::Loaded(courses)
        }
        Err(err) => {
            error!(%source, error = %err, "could not fetch courses");
            LoadOutcome::Failed(err)
        }
    }
}

fn fetch_courses(source: &DataSource) -> Result<Vec<Course>, LoadError> {
    let body = match source {
        DataSource::Http(url) => fetch_remote(url)?,
        DataSource::File(path) => fs::read_to_string(path).map_err(|err| LoadError::Io {
            path: path.display().to_string(),
            source: err,
        })?,
    };
    Ok(serde_json::from_str(&body)?)
}

fn fetch_remote(url: &str) -> Result<String, LoadError> {
    let client = Client::builder()
        .user_agent(concat!("course-catalog/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(LoadError::Transport)?;
    let response = client.get(url).send().map_err(LoadError::Transport)?;
    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Status(status.as_u16()));
    }
    response.text().map_err(LoadError::Transport)
}
