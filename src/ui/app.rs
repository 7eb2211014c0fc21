use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use open::that as open_link;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use tracing::{debug, info};

use crate::catalog::{update_category_span_counts, CatalogState, CategoryFilter, CategoryTabs};
use crate::loader::LoadOutcome;
use crate::models::Course;

use super::cards::{render_catalog, CatalogView};
use super::helpers::{key_hints_line, tab_bar_line};

/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Height of the bordered tab bar and search field.
const BAR_HEIGHT: u16 = 3;
/// Cards skipped by PageUp/PageDown.
const PAGE_STEP: isize = 5;
const SEARCH_PROMPT: &str = "Search: ";

/// Lifecycle of the controller. `Loading` only lasts until the single startup
/// load returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the startup load.
    Loading,
    /// Courses are loaded and interactive.
    Ready,
    /// The load failed or returned nothing.
    Empty,
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Application state: the catalog, its tab bar, the raw search field and the
/// currently displayed subset.
pub struct App {
    catalog: CatalogState,
    tabs: CategoryTabs,
    category_labels: Option<Vec<String>>,
    visible: Vec<Course>,
    selected: usize,
    search_input: String,
    phase: Phase,
    status: Option<StatusMessage>,
}

impl App {
    /// Create a controller in the `Loading` phase. When `category_labels` is
    /// set it fixes the tab bar; otherwise tabs are derived from the data.
    pub fn new(category_labels: Option<Vec<String>>) -> Self {
        let tabs = match &category_labels {
            Some(labels) => CategoryTabs::from_labels(labels.as_slice()),
            None => CategoryTabs::from_courses(&[]),
        };
        Self {
            catalog: CatalogState::default(),
            tabs,
            category_labels,
            visible: Vec::new(),
            selected: 0,
            search_input: String::new(),
            phase: Phase::Loading,
            status: None,
        }
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Subset currently displayed.
    pub fn visible_courses(&self) -> &[Course] {
        &self.visible
    }

    /// Category tab bar with counters.
    pub fn tabs(&self) -> &CategoryTabs {
        &self.tabs
    }

    /// Raw text of the search field.
    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    /// Index of the selected card within the visible subset.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Apply the startup load: store the collection, refresh the counters,
    /// activate the first tab and show the resulting subset.
    pub fn finish_load(&mut self, outcome: LoadOutcome) {
        match outcome {
            LoadOutcome::Loaded(courses) => {
                info!(count = courses.len(), "rendering initial catalog");
                self.set_status(format!("Loaded {} courses.", courses.len()), StatusKind::Info);
                self.catalog.set_courses(courses);
                self.phase = Phase::Ready;
            }
            LoadOutcome::Empty => {
                self.set_status("The course list is empty.", StatusKind::Info);
                self.catalog.set_courses(Vec::new());
                self.phase = Phase::Empty;
            }
            LoadOutcome::Failed(err) => {
                self.set_status(format!("Failed to load courses: {err}"), StatusKind::Error);
                self.catalog.set_courses(Vec::new());
                self.phase = Phase::Empty;
            }
        }

        if self.category_labels.is_none() {
            self.tabs = CategoryTabs::from_courses(self.catalog.courses());
        }
        update_category_span_counts(self.tabs.tabs_mut(), self.catalog.courses());
        if let Some(filter) = self.tabs.activate(0) {
            self.apply_category(filter);
        }
    }

    /// Process one key press. Returns `true` when the user asked to quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => true,
                KeyCode::Char('u') => {
                    if self.phase != Phase::Loading {
                        self.clear_search();
                    }
                    false
                }
                _ => false,
            };
        }

        if key.code == KeyCode::Esc {
            return true;
        }
        if self.phase == Phase::Loading {
            return false;
        }

        match key.code {
            KeyCode::Tab | KeyCode::Right => self.cycle_category(1),
            KeyCode::BackTab | KeyCode::Left => self.cycle_category(-1),
            KeyCode::Up => self.move_selection(-1),
            KeyCode::Down => self.move_selection(1),
            KeyCode::PageUp => self.move_selection(-PAGE_STEP),
            KeyCode::PageDown => self.move_selection(PAGE_STEP),
            KeyCode::Home => self.selected = 0,
            KeyCode::End => self.selected = self.visible.len().saturating_sub(1),
            KeyCode::Enter => self.open_selected_image(),
            KeyCode::Backspace => {
                self.search_input.pop();
                self.apply_search();
            }
            KeyCode::Char(ch) if !ch.is_control() => {
                self.search_input.push(ch);
                self.apply_search();
            }
            _ => {}
        }
        false
    }

    /// Activate the tab at `index` and narrow the catalog to its category.
    /// Out-of-range indices leave the current tab active.
    pub fn select_category(&mut self, index: usize) {
        if let Some(filter) = self.tabs.activate(index) {
            self.apply_category(filter);
        }
    }

    /// Replace the search field contents and narrow the catalog.
    pub fn set_search(&mut self, query: &str) {
        self.search_input = query.to_string();
        self.apply_search();
    }

    /// Empty the search field, keeping the active category.
    pub fn clear_search(&mut self) {
        self.search_input.clear();
        self.visible = self.catalog.clear_search();
        self.ensure_in_bounds();
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(BAR_HEIGHT),
                Constraint::Length(BAR_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);

        self.draw_tab_bar(frame, chunks[0]);
        self.draw_search_bar(frame, chunks[1]);

        if self.phase == Phase::Loading {
            let message = Paragraph::new("Loading courses...")
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title("Courses"));
            frame.render_widget(message, chunks[2]);
        } else {
            let view = CatalogView::from_courses(&self.visible);
            render_catalog(frame, chunks[2], &view, self.selected);
        }

        self.draw_footer(frame, chunks[3]);
    }

    fn draw_tab_bar(&self, frame: &mut Frame, area: Rect) {
        let bar = Paragraph::new(tab_bar_line(&self.tabs))
            .block(Block::default().borders(Borders::ALL).title("Categories"));
        frame.render_widget(bar, area);
    }

    fn draw_search_bar(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title("Search");
        let paragraph = Paragraph::new(Span::raw(format!("{SEARCH_PROMPT}{}", self.search_input)))
            .block(block.clone());
        frame.render_widget(paragraph, area);

        let inner = block.inner(area);
        if inner.width == 0 || inner.height == 0 {
            return;
        }
        frame.set_cursor_position((search_cursor_x(inner, &self.search_input), inner.y));
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let paragraph =
            Paragraph::new(vec![status_line, key_hints_line()]).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn cycle_category(&mut self, offset: isize) {
        let filter = self.tabs.cycle(offset);
        self.apply_category(filter);
    }

    fn apply_category(&mut self, filter: CategoryFilter) {
        debug!(category = %filter, "category selected");
        self.visible = self.catalog.filter_courses_by_category(filter);
        self.ensure_in_bounds();
    }

    fn apply_search(&mut self) {
        self.visible = self.catalog.search_courses(&self.search_input);
        self.ensure_in_bounds();
    }

    fn move_selection(&mut self, offset: isize) {
        if self.visible.is_empty() {
            return;
        }
        let last = self.visible.len() as isize - 1;
        self.selected = (self.selected as isize + offset).clamp(0, last) as usize;
    }

    fn ensure_in_bounds(&mut self) {
        if self.visible.is_empty() {
            self.selected = 0;
        } else if self.selected >= self.visible.len() {
            self.selected = self.visible.len() - 1;
        }
    }

    fn open_selected_image(&mut self) {
        let Some(course) = self.visible.get(self.selected).cloned() else {
            self.set_status("No course selected.", StatusKind::Error);
            return;
        };
        let url = course.image_url.trim();
        if url.is_empty() {
            self.set_status("This course has no image.", StatusKind::Error);
        } else if let Err(err) = open_link(url) {
            self.set_status(format!("Failed to open image: {err}"), StatusKind::Error);
        } else {
            self.set_status(format!("Opened image for {course}."), StatusKind::Info);
        }
    }

    fn set_status<S: Into<String>>(&mut self, text: S, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }
}

/// Column just past the typed query, measured in display cells and kept
/// inside `inner`.
fn search_cursor_x(inner: Rect, query: &str) -> u16 {
    let typed = Span::raw(format!("{SEARCH_PROMPT}{query}")).width();
    let offset = u16::try_from(typed).unwrap_or(u16::MAX);
    inner
        .x
        .saturating_add(offset)
        .min(inner.right().saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use super::*;
    use crate::loader::LoadError;

    fn course(title: &str, category: &str, instructor: &str) -> Course {
        Course {
            title: title.to_string(),
            category: category.to_string(),
            instructor: instructor.to_string(),
            price: "$15".to_string(),
            image_url: String::new(),
            category_class: None,
        }
    }

    fn loaded_app() -> App {
        let mut app = App::new(None);
        app.finish_load(LoadOutcome::Loaded(vec![
            course("Intro to Go", "A", "Rob"),
            course("Golf Basics", "A", "Tiger"),
            course("Brand Strategy", "B", "Ann"),
        ]));
        app
    }

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn titles(app: &App) -> Vec<&str> {
        app.visible_courses().iter().map(|c| c.title.as_str()).collect()
    }

    #[test]
    fn ready_after_load_with_all_tab_active() {
        let app = loaded_app();
        assert_eq!(app.phase(), Phase::Ready);
        assert_eq!(app.visible_courses().len(), 3);
        assert_eq!(app.tabs().active_index(), 0);
        let counts: Vec<(&str, usize)> = app
            .tabs()
            .tabs()
            .iter()
            .map(|t| (t.label.as_str(), t.count))
            .collect();
        assert_eq!(counts, vec![("All", 3), ("A", 2), ("B", 1)]);
    }

    #[test]
    fn failed_or_empty_load_lands_in_empty_phase() {
        let mut failed = App::new(None);
        failed.finish_load(LoadOutcome::Failed(LoadError::Status(500)));
        assert_eq!(failed.phase(), Phase::Empty);
        assert!(failed.visible_courses().is_empty());
        assert_eq!(failed.tabs().tabs()[0].count, 0);

        let mut empty = App::new(Some(vec!["All".into(), "A".into()]));
        empty.finish_load(LoadOutcome::Empty);
        assert_eq!(empty.phase(), Phase::Empty);
        assert!(empty.tabs().tabs().iter().all(|t| t.count == 0));

        // Input stays bound even without data.
        assert!(!press(&mut empty, KeyCode::Char('x')));
        assert_eq!(empty.search_input(), "x");
        assert!(empty.visible_courses().is_empty());
    }

    #[test]
    fn typing_narrows_on_every_keystroke() {
        let mut app = loaded_app();
        press(&mut app, KeyCode::Char('G'));
        assert_eq!(titles(&app).len(), 3);
        press(&mut app, KeyCode::Char('o'));
        assert_eq!(titles(&app), ["Intro to Go", "Golf Basics"]);
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(titles(&app), ["Golf Basics"]);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(titles(&app), ["Intro to Go", "Golf Basics"]);
    }

    #[test]
    fn switching_tabs_combines_with_search() {
        let mut app = loaded_app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.tabs().active_index(), 1);
        assert_eq!(titles(&app), ["Intro to Go", "Golf Basics"]);

        app.set_search("golf");
        assert_eq!(titles(&app), ["Golf Basics"]);

        press(&mut app, KeyCode::Right);
        assert!(app.visible_courses().is_empty());

        app.clear_search();
        assert_eq!(titles(&app), ["Brand Strategy"]);

        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.tabs().active_index(), 0);
        assert_eq!(app.visible_courses().len(), 3);
    }

    #[test]
    fn selection_is_clamped_to_visible_subset() {
        let mut app = loaded_app();
        press(&mut app, KeyCode::End);
        assert_eq!(app.selected(), 2);
        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.selected(), 2);
        app.select_category(2);
        assert_eq!(app.selected(), 0);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected(), 0);
    }

    #[test]
    fn loading_phase_ignores_everything_but_quit() {
        let mut app = App::new(None);
        assert_eq!(app.phase(), Phase::Loading);
        assert!(!press(&mut app, KeyCode::Char('a')));
        assert_eq!(app.search_input(), "");
        assert!(press(&mut app, KeyCode::Esc));
        assert!(app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    }

    #[test]
    fn ctrl_u_clears_search() {
        let mut app = loaded_app();
        app.set_search("zzz");
        assert!(app.visible_courses().is_empty());
        app.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert_eq!(app.search_input(), "");
        assert_eq!(app.visible_courses().len(), 3);
    }

    #[test]
    fn search_cursor_tracks_display_width() {
        let inner = Rect::new(2, 1, 40, 1);
        assert_eq!(search_cursor_x(inner, ""), 2 + SEARCH_PROMPT.len() as u16);
        assert_eq!(search_cursor_x(inner, "go"), 2 + SEARCH_PROMPT.len() as u16 + 2);
        // Each CJK character occupies two cells.
        assert_eq!(search_cursor_x(inner, "日本"), 2 + SEARCH_PROMPT.len() as u16 + 4);
    }

    #[test]
    fn search_cursor_stays_inside_field_for_huge_queries() {
        let inner = Rect::new(10, 1, 30, 1);
        let huge = "x".repeat(usize::from(u16::MAX) + 100);
        assert_eq!(search_cursor_x(inner, &huge), inner.right() - 1);

        let far_right = Rect::new(u16::MAX - 5, 0, 5, 1);
        assert_eq!(search_cursor_x(far_right, "query"), far_right.right() - 1);
    }

    #[test]
    fn draws_tabs_search_and_cards() {
        let mut app = loaded_app();
        app.set_search("brand");
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
        let buffer = terminal.backend().buffer();
        let screen: String = buffer
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains(" All 3 "));
        assert!(screen.contains("Search: brand"));
        assert!(screen.contains("Brand Strategy"));
        assert!(!screen.contains("Golf Basics"));
    }
}
