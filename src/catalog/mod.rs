//! In-memory catalog logic: the filter/search engine, category tabs and the
//! per-category counters. Nothing in here knows about the terminal.

mod counts;
mod state;
mod tabs;

pub use counts::{update_category_span_counts, CategoryCounts};
pub use state::{normalize_query, CatalogState, CategoryFilter, ALL_LABEL};
pub use tabs::{CategoryTab, CategoryTabs};
