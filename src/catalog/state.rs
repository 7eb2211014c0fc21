use std::fmt;

use tracing::debug;

use crate::models::Course;

/// Label of the sentinel tab that disables category narrowing.
pub const ALL_LABEL: &str = "All";

/// Category narrowing currently applied to the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    /// No category narrowing.
    All,
    /// Only courses whose category equals this label.
    Named(String),
}

impl CategoryFilter {
    /// Map a user-facing label onto a filter. The literal `All` is the
    /// sentinel; every other label is compared case-sensitively.
    pub fn from_label(label: &str) -> Self {
        let trimmed = label.trim();
        if trimmed == ALL_LABEL {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(trimmed.to_string())
        }
    }

    /// Label shown on the tab for this filter.
    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_LABEL,
            CategoryFilter::Named(name) => name,
        }
    }

    /// Whether `course` belongs to this category.
    pub fn admits(&self, course: &Course) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => course.category == *name,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Trim and lower-case a raw search string.
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Full collection plus the two pieces of transient state that narrow it.
/// The collection is only ever replaced wholesale; every query derives a new
/// subset.
#[derive(Debug, Default)]
pub struct CatalogState {
    courses: Vec<Course>,
    filter: CategoryFilter,
    search: String,
}

impl CatalogState {
    /// Start with `courses`, no category narrowing and no search text.
    pub fn new(courses: Vec<Course>) -> Self {
        Self {
            courses,
            filter: CategoryFilter::All,
            search: String::new(),
        }
    }

    /// The full collection, before any narrowing.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Category filter currently applied.
    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    /// Normalized search text currently applied.
    pub fn search_text(&self) -> &str {
        &self.search
    }

    /// Replace the full collection. Filter and search text are left alone.
    pub fn set_courses(&mut self, courses: Vec<Course>) {
        self.courses = courses;
    }

    /// Store `category` as the active filter and return the narrowed subset.
    pub fn filter_courses_by_category(&mut self, category: CategoryFilter) -> Vec<Course> {
        debug!(category = %category, search = %self.search, "filtering catalog by category");
        self.filter = category;
        self.visible_courses()
    }

    /// Normalize and store `query` as the search text and return the
    /// narrowed subset.
    pub fn search_courses(&mut self, query: &str) -> Vec<Course> {
        self.search = normalize_query(query);
        debug!(search = %self.search, category = %self.filter, "searching catalog");
        self.visible_courses()
    }

    /// Drop the search text, keep the category filter, and return the
    /// narrowed subset.
    pub fn clear_search(&mut self) -> Vec<Course> {
        self.search.clear();
        self.visible_courses()
    }

    /// Courses admitted by both the category filter and the search text, in
    /// collection order. Both narrowing steps are plain predicates over the
    /// same record, so the order they are set in never changes the result.
    pub fn visible_courses(&self) -> Vec<Course> {
        self.courses
            .iter()
            .filter(|course| self.filter.admits(course) && course.matches_query(&self.search))
            .cloned()
            .collect()
    }
}
