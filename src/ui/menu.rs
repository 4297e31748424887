//! Bordered selection list used by both picker prompts.

use crate::theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
    Frame,
};

/// Render a selectable list filling `area`
pub fn render<S: AsRef<str>>(
    frame: &mut Frame,
    area: Rect,
    labels: &[S],
    list_state: &mut ListState,
    title: &str,
) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::BORDER_FOCUSED))
        .title(format!(" {title} "))
        .title_bottom(Line::from(crate::constants::PICKER_FOOTER).centered());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if labels.is_empty() {
        let empty = List::new(vec![ListItem::new(Line::from(vec![Span::styled(
            " Nothing to select ",
            Style::default().fg(theme::TEXT_SECONDARY),
        )]))]);
        frame.render_widget(empty, inner);
        return;
    }

    let items: Vec<ListItem> = labels
        .iter()
        .map(|label| {
            ListItem::new(Line::from(vec![Span::styled(
                label.as_ref().to_string(),
                Style::default().fg(theme::TEXT_PRIMARY),
            )]))
        })
        .collect();

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .bg(theme::ROW_SELECTED_BG)
                .fg(theme::ROW_SELECTED_FG)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");
    frame.render_stateful_widget(list, inner, list_state);
}
