use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::catalog::CategoryTabs;

/// Badge colors rotated through by category class so every category keeps a
/// stable color without any per-category configuration.
const CATEGORY_PALETTE: &[Color] = &[
    Color::Cyan,
    Color::Magenta,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::LightRed,
    Color::LightGreen,
    Color::LightMagenta,
];

/// Pick a palette entry for a category class. The same class always maps to
/// the same color.
pub(crate) fn category_color(class: &str) -> Color {
    let hash = class
        .bytes()
        .fold(0usize, |acc, byte| acc.wrapping_mul(31).wrapping_add(byte as usize));
    CATEGORY_PALETTE[hash % CATEGORY_PALETTE.len()]
}

/// Render the category controls as one line, e.g. ` All 3   Design 1 `, with
/// the active tab highlighted.
pub(crate) fn tab_bar_line(tabs: &CategoryTabs) -> Line<'static> {
    let mut spans = Vec::with_capacity(tabs.tabs().len() * 3);
    for (index, tab) in tabs.tabs().iter().enumerate() {
        let active = index == tabs.active_index();
        let label_style = if active {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default()
        };
        let count_style = if active {
            label_style
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {} ", tab.label), label_style));
        spans.push(Span::styled(format!("{} ", tab.count), count_style));
        spans.push(Span::raw("  "));
    }
    Line::from(spans)
}

/// Key hints shown under the status line.
pub(crate) fn key_hints_line() -> Line<'static> {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    Line::from(vec![
        Span::styled("[Tab/←→]", key_style),
        Span::raw(" Category   "),
        Span::styled("[↑↓]", key_style),
        Span::raw(" Select   "),
        Span::styled("[Enter]", key_style),
        Span::raw(" Open Image   "),
        Span::styled("[type]", key_style),
        Span::raw(" Search   "),
        Span::styled("[Ctrl+U]", key_style),
        Span::raw(" Clear Search   "),
        Span::styled("[Esc]", key_style),
        Span::raw(" Quit"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_color_is_stable() {
        assert_eq!(
            category_color("category-design"),
            category_color("category-design")
        );
    }

    #[test]
    fn tab_bar_lists_labels_with_counts() {
        let mut tabs = CategoryTabs::from_labels(&["All", "Design"]);
        tabs.tabs_mut()[0].count = 4;
        tabs.tabs_mut()[1].count = 1;
        let text: String = tab_bar_line(&tabs)
            .spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect();
        assert_eq!(text, " All 4    Design 1   ");
    }
}
