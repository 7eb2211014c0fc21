use crate::models::Course;

use super::{CategoryFilter, ALL_LABEL};

/// One selectable category control. The filter is stored explicitly so the
/// counter and the click target never depend on how the label is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTab {
    /// Text shown on the tab.
    pub label: String,
    /// Narrowing applied when the tab is activated.
    pub filter: CategoryFilter,
    /// Courses in the full collection that fall under `filter`.
    pub count: usize,
}

impl CategoryTab {
    /// Tab for `label` with a zero count; `All` becomes the sentinel filter.
    pub fn from_label(label: &str) -> Self {
        let filter = CategoryFilter::from_label(label);
        Self {
            label: filter.label().to_string(),
            filter,
            count: 0,
        }
    }
}

/// Ordered tab bar with exactly one active tab.
#[derive(Debug, Clone)]
pub struct CategoryTabs {
    tabs: Vec<CategoryTab>,
    active: usize,
}

impl CategoryTabs {
    /// Build tabs from explicit labels. `All` is put in front when the list
    /// does not name it, and duplicate labels are dropped.
    pub fn from_labels<S: AsRef<str>>(labels: &[S]) -> Self {
        let mut tabs: Vec<CategoryTab> = Vec::with_capacity(labels.len() + 1);
        for label in labels {
            let label = label.as_ref();
            if label.trim().is_empty() {
                continue;
            }
            let tab = CategoryTab::from_label(label);
            if !tabs.iter().any(|existing| existing.filter == tab.filter) {
                tabs.push(tab);
            }
        }
        if !tabs.iter().any(|tab| tab.filter == CategoryFilter::All) {
            tabs.insert(0, CategoryTab::from_label(ALL_LABEL));
        }
        Self { tabs, active: 0 }
    }

    /// `All` followed by each distinct category in first-appearance order.
    pub fn from_courses(courses: &[Course]) -> Self {
        let labels: Vec<&str> = courses.iter().map(|c| c.category.as_str()).collect();
        Self::from_labels(&labels)
    }

    /// Tabs in display order.
    pub fn tabs(&self) -> &[CategoryTab] {
        &self.tabs
    }

    /// Mutable tabs, used to write counters.
    pub fn tabs_mut(&mut self) -> &mut [CategoryTab] {
        &mut self.tabs
    }

    /// Position of the single active tab.
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Filter of the active tab.
    pub fn active_filter(&self) -> &CategoryFilter {
        &self.tabs[self.active].filter
    }

    /// Make `index` the only active tab. Returns its filter, or `None` when the
    /// index is out of range (the previous tab stays active).
    pub fn activate(&mut self, index: usize) -> Option<CategoryFilter> {
        let tab = self.tabs.get(index)?;
        self.active = index;
        Some(tab.filter.clone())
    }

    /// Move the active marker by `offset`, wrapping around both ends.
    pub fn cycle(&mut self, offset: isize) -> CategoryFilter {
        let len = self.tabs.len() as isize;
        let next = (self.active as isize + offset).rem_euclid(len) as usize;
        self.active = next;
        self.tabs[next].filter.clone()
    }
}
