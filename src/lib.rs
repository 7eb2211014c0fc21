//! Core library surface for the course catalog terminal viewer.
//!
//! The binary only wires configuration and logging; loading, filtering,
//! counting and rendering all live here so tests can drive them directly.
pub mod catalog;
pub mod config;
pub mod loader;
pub mod models;
pub mod ui;

/// The filter/search engine and the per-category counters.
pub use catalog::{
    update_category_span_counts, CatalogState, CategoryCounts, CategoryFilter, CategoryTab,
    CategoryTabs,
};

pub use config::{Cli, Config};

/// Startup load of the course list.
pub use loader::{load_all_courses, DataSource, LoadError, LoadOutcome};

pub use models::Course;

/// The interactive application entry point and state container.
pub use ui::{run_app, App, CatalogView};
