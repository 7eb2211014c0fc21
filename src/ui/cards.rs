use std::cmp::min;

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;
use tracing::warn;

use crate::models::Course;

use super::helpers::category_color;

/// Text shown in place of the catalog when nothing matches.
pub const NO_RESULTS: &str = "No courses found.";
/// Rows taken by one card: four content lines plus the border.
const CARD_HEIGHT: u16 = 6;

/// Everything a card displays, captured from one course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseCard {
    /// Course title, shown bold.
    pub title: String,
    /// Category label shown in the badge.
    pub category: String,
    /// Styling tag that picks the badge color.
    pub category_class: String,
    /// Price text.
    pub price: String,
    /// Instructor name, shown as `by <name>`.
    pub instructor: String,
    /// Image reference, opened with Enter.
    pub image_url: String,
}

impl CourseCard {
    /// Capture the display fields of `course`.
    pub fn from_course(course: &Course) -> Self {
        Self {
            title: course.title.clone(),
            category: course.category.clone(),
            category_class: course.category_class(),
            price: course.price.clone(),
            instructor: course.instructor.clone(),
            image_url: course.image_url.clone(),
        }
    }

    pub(crate) fn lines(&self, selected: bool) -> Vec<Line<'static>> {
        let title = if selected {
            format!("▶ {}", self.title)
        } else {
            self.title.clone()
        };
        let badge_style = Style::default()
            .fg(category_color(&self.category_class))
            .add_modifier(Modifier::BOLD);

        vec![
            Line::from(Span::styled(
                title,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled(format!("[{}]", self.category), badge_style),
                Span::raw("  "),
                Span::styled(self.price.clone(), Style::default().fg(Color::Green)),
            ]),
            Line::from(Span::styled(
                format!("by {}", self.instructor),
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(
                self.image_url.clone(),
                Style::default().fg(Color::Cyan),
            )),
        ]
    }
}

/// What the catalog area shows: either the placeholder or the cards in input
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogView {
    /// Nothing to show; the `No courses found.` message is drawn.
    Placeholder,
    /// One card per course, in input order.
    Cards(Vec<CourseCard>),
}

impl CatalogView {
    /// Placeholder for an empty slice, otherwise one card per course.
    pub fn from_courses(courses: &[Course]) -> Self {
        if courses.is_empty() {
            CatalogView::Placeholder
        } else {
            CatalogView::Cards(courses.iter().map(CourseCard::from_course).collect())
        }
    }

    /// Number of cards; zero for the placeholder.
    pub fn card_count(&self) -> usize {
        match self {
            CatalogView::Placeholder => 0,
            CatalogView::Cards(cards) => cards.len(),
        }
    }
}

/// Clear `area` and draw the view into it. When there are more cards than
/// fit, the window scrolls so `selected` stays visible.
pub fn render_catalog(frame: &mut Frame, area: Rect, view: &CatalogView, selected: usize) {
    if area.width == 0 || area.height == 0 {
        warn!(?area, "catalog area has no room, skipping render");
        return;
    }

    frame.render_widget(Clear, area);

    let cards = match view {
        CatalogView::Placeholder => {
            let message = Paragraph::new(NO_RESULTS)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title("Courses"));
            frame.render_widget(message, area);
            return;
        }
        CatalogView::Cards(cards) => cards,
    };

    let capacity = ((area.height / CARD_HEIGHT) as usize).max(1);
    let len = cards.len();
    let mut start = if selected >= capacity {
        selected + 1 - capacity
    } else {
        0
    };
    if start + capacity > len {
        start = len.saturating_sub(capacity);
    }
    let end = min(start + capacity, len);

    let constraints: Vec<Constraint> = (start..end)
        .map(|_| Constraint::Length(CARD_HEIGHT))
        .collect();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (chunk, index) in rows.iter().zip(start..end) {
        if chunk.height == 0 {
            continue;
        }
        let is_selected = index == selected;
        let mut block = Block::default()
            .borders(Borders::ALL)
            .title(format!("{}/{}", index + 1, len));
        if is_selected {
            block = block.style(Style::default().fg(Color::Yellow));
        }
        let card = Paragraph::new(cards[index].lines(is_selected))
            .block(block)
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Left);
        frame.render_widget(card, *chunk);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::Terminal;

    use super::*;

    fn course(title: &str, category: &str) -> Course {
        Course {
            title: title.to_string(),
            category: category.to_string(),
            instructor: "Jane Roe".to_string(),
            price: "$30".to_string(),
            image_url: format!("img/{}.png", title.to_lowercase().replace(' ', "-")),
            category_class: None,
        }
    }

    fn buffer_text(buffer: &Buffer) -> String {
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn draw(view: &CatalogView, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_catalog(frame, area, view, 0);
            })
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn one_card_per_course_in_order() {
        let courses = vec![
            course("Intro to Go", "Development"),
            course("Brand Strategy", "Marketing"),
            course("Golf Basics", "Sport"),
        ];
        let view = CatalogView::from_courses(&courses);
        assert_eq!(view.card_count(), 3);
        if let CatalogView::Cards(cards) = &view {
            let titles: Vec<&str> = cards.iter().map(|c| c.title.as_str()).collect();
            assert_eq!(titles, ["Intro to Go", "Brand Strategy", "Golf Basics"]);
            assert_eq!(cards[1].category_class, "category-marketing");
        }

        let screen = draw(&view, 60, 20);
        let go = screen.find("Intro to Go").unwrap();
        let brand = screen.find("Brand Strategy").unwrap();
        let golf = screen.find("Golf Basics").unwrap();
        assert!(go < brand && brand < golf);
        assert!(screen.contains("by Jane Roe"));
        assert!(screen.contains("[Marketing]"));
        assert!(!screen.contains(NO_RESULTS));
    }

    #[test]
    fn empty_input_shows_only_placeholder() {
        let view = CatalogView::from_courses(&[]);
        assert_eq!(view, CatalogView::Placeholder);
        let screen = draw(&view, 40, 5);
        assert!(screen.contains(NO_RESULTS));
        assert!(!screen.contains("by "));
    }

    #[test]
    fn window_follows_selection() {
        let courses: Vec<Course> = (1..=5).map(|n| course(&format!("Course {n}"), "A")).collect();
        let view = CatalogView::from_courses(&courses);
        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_catalog(frame, area, &view, 4);
            })
            .unwrap();
        let screen = buffer_text(terminal.backend().buffer());
        assert!(screen.contains("Course 5"));
        assert!(screen.contains("Course 4"));
        assert!(!screen.contains("Course 1"));
    }
}
