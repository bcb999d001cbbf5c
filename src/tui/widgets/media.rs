//! Media screen: the merged playback list with add/import/remove controls.

use crate::app::state::AppState;
use crate::playlist::Entry;
use crate::tui::theme::Theme;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

pub fn render(frame: &mut Frame, state: &AppState, theme: &Theme, area: Rect) {
    let icons = &theme.icons;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(area);

    let title = if state.playlist_loading {
        format!(" {} Media {} ", icons.media, icons.loading)
    } else {
        format!(" {} Media ({}) ", icons.media, state.playlist.len())
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.border))
        .title(title)
        .title_style(Style::default().fg(theme.palette.accent));

    if state.playlist.is_empty() {
        let hint = if state.playlist_loading {
            "Loading media..."
        } else {
            "No media yet. Press 'a' to add a URL or 'i' to import a file."
        };
        frame.render_widget(
            Paragraph::new(hint)
                .style(Style::default().fg(theme.palette.fg_secondary))
                .block(block),
            rows[0],
        );
    } else {
        let playing = state.playlist.current_index();
        let items: Vec<ListItem> = state
            .playlist
            .entries()
            .iter()
            .enumerate()
            .map(|(i, entry)| entry_item(i, entry, playing, state, theme))
            .collect();

        let mut list_state = ListState::default();
        list_state.select(Some(
            state.media_cursor.selected.min(items.len().saturating_sub(1)),
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
        Span::styled(" add URL  ", Style::default().fg(theme.palette.fg_secondary)),
        Span::styled("i", Style::default().fg(theme.palette.accent_alt)),
        Span::styled(" import file  ", Style::default().fg(theme.palette.fg_secondary)),
        Span::styled("d", Style::default().fg(theme.palette.accent_alt)),
        Span::styled(" remove  ", Style::default().fg(theme.palette.fg_secondary)),
        Span::styled("Enter", Style::default().fg(theme.palette.accent_alt)),
        Span::styled(" play", Style::default().fg(theme.palette.fg_secondary)),
    ]);
    let hint_block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.border));
    frame.render_widget(Paragraph::new(hint).block(hint_block), rows[1]);
}

fn entry_item(
    index: usize,
    entry: &Entry,
    playing: Option<usize>,
    state: &AppState,
    theme: &Theme,
) -> ListItem<'static> {
    let (tag, tag_color) = match entry {
        Entry::Remote(_) => ("curated", theme.palette.fg_secondary),
        Entry::User(_) => ("url", theme.palette.accent_alt),
        Entry::Local(_) => ("local", theme.palette.accent),
    };

    let is_playing = playing == Some(index);
    let name_style = if is_playing {
        Style::default()
            .fg(theme.palette.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.palette.fg_primary)
    };

    let mut spans = vec![
        Span::styled(format!("[{tag:7}] "), Style::default().fg(tag_color)),
        Span::styled(truncate(entry.display_name(), 64), name_style),
    ];
    if is_playing {
        let glyph = if state.paused {
            theme.icons.pause
        } else {
            theme.icons.play
        };
        spans.push(Span::styled(
            format!("  {glyph}"),
            Style::default().fg(theme.palette.accent),
        ));
    }

    ListItem::new(Line::from(spans))
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}
