use std::collections::HashMap;

use tracing::warn;

use crate::models::Course;

use super::{CategoryFilter, CategoryTab};

/// Number of courses per category label plus the grand total.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    total: usize,
    by_category: HashMap<String, usize>,
}

impl CategoryCounts {
    /// Count every course under its category label.
    pub fn tally(courses: &[Course]) -> Self {
        let mut by_category = HashMap::new();
        for course in courses {
            *by_category.entry(course.category.clone()).or_insert(0) += 1;
        }
        Self {
            total: courses.len(),
            by_category,
        }
    }

    /// Number of courses tallied, i.e. the `All` count.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Count shown next to a tab. Labels that no course carries read as zero.
    pub fn count_for(&self, filter: &CategoryFilter) -> usize {
        match filter {
            CategoryFilter::All => self.total,
            CategoryFilter::Named(name) => self.by_category.get(name).copied().unwrap_or(0),
        }
    }
}

/// Recompute every tab counter from the full collection.
pub fn update_category_span_counts(tabs: &mut [CategoryTab], courses: &[Course]) {
    if courses.is_empty() {
        warn!("no courses available to count categories");
    }
    let counts = CategoryCounts::tally(courses);
    for tab in tabs.iter_mut() {
        tab.count = counts.count_for(&tab.filter);
    }
}
