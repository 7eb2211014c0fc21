//! Data loading split across logical submodules.

mod error;
mod fetch;
mod source;

pub use error::LoadError;
pub use fetch::{load_all_courses, LoadOutcome};
pub use source::DataSource;
