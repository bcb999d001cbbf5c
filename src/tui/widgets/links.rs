//! Quick-link editor screen.

use crate::app::state::AppState;
use crate::links::MAX_LINKS;
use crate::tui::theme::Theme;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

pub fn render(frame: &mut Frame, state: &AppState, theme: &Theme, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.border))
        .title(format!(
            " {} Quick Links ({}/{MAX_LINKS}) ",
            theme.icons.link,
            state.links.len()
        ))
        .title_style(Style::default().fg(theme.palette.accent));

    if state.links.is_empty() {
        frame.render_widget(
            Paragraph::new("No links. Press 'a' to add one (name url).")
                .style(Style::default().fg(theme.palette.fg_secondary))
                .block(block),
            rows[0],
        );
    } else {
        let items: Vec<ListItem> = state
            .links
            .iter()
            .map(|link| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{:<20} ", link.name),
                        Style::default().fg(theme.palette.fg_primary),
                    ),
                    Span::styled(link.url.clone(), Style::default().fg(theme.palette.fg_secondary)),
                ]))
            })
            .collect();

        let mut list_state = ListState::default();
        list_state.select(Some(
            state.links_cursor.selected.min(items.len().saturating_sub(1)),
        ));

        let list = List::new(items)
            .block(block)
            .highlight_style(
                Style::default()
                    .fg(theme.palette.bg_primary)
                    .bg(theme.palette.accent)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▸ ");

        frame.render_stateful_widget(list, rows[0], &mut list_state);
    }

    let hint = Line::from(vec![
        Span::styled("a", Style::default().fg(theme.palette.accent_alt)),
        Span::styled(" add  ", Style::default().fg(theme.palette.fg_secondary)),
        Span::styled("d", Style::default().fg(theme.palette.accent_alt)),
        Span::styled(" remove  ", Style::default().fg(theme.palette.fg_secondary)),
        Span::styled("Enter", Style::default().fg(theme.palette.accent_alt)),
        Span::styled(" open in browser", Style::default().fg(theme.palette.fg_secondary)),
    ]);
    let hint_block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.border));
    frame.render_widget(Paragraph::new(hint).block(hint_block), rows[1]);
}
