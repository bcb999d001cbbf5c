//! Root layout widget - orchestrates the main layout structure
//!
//! ┌──────────┬─────────────────────────────────────────┐
//! │  Menu    │           Main Content                  │
//! │          │      (Home/Media/Links/Settings)        │
//! │  Home    │                                         │
//! │  Media   │                                         │
//! │  Links   │                                         │
//! ├──────────┴─────────────────────────────────────────┤
//! │ status: background · playback · toast / prompt     │
//! └────────────────────────────────────────────────────┘

use crate::app::state::{AppState, Screen, ToastKind};
use crate::config::{BackgroundMode, Config};
use crate::tui::theme::{Theme, get_theme};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::{help, home, links, media, settings, sidebar};

pub fn render(frame: &mut Frame, cfg: &Config, state: &mut AppState) {
    let theme = get_theme(cfg.ui.theme);
    let root = frame.area();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(3)])
        .split(root);

    let top_cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(18), Constraint::Min(40)])
        .split(rows[0]);

    sidebar::render(frame, state, &theme, top_cols[0]);

    match state.screen {
        Screen::Home => home::render(frame, cfg, state, &theme, top_cols[1]),
        Screen::Media => media::render(frame, state, &theme, top_cols[1]),
        Screen::Links => links::render(frame, state, &theme, top_cols[1]),
        Screen::Settings => settings::render(frame, cfg, state, &theme, top_cols[1]),
        Screen::Help => help::render(frame, &theme, top_cols[1]),
    }

    if state.prompt.is_some() {
        render_prompt(frame, state, &theme, rows[1]);
    } else {
        render_status(frame, cfg, state, &theme, rows[1]);
    }
}

fn render_prompt(frame: &mut Frame, state: &AppState, theme: &Theme, area: Rect) {
    let Some(prompt) = &state.prompt else {
        return;
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.accent))
        .title(format!(" {} ", prompt.title()))
        .title_style(Style::default().fg(theme.palette.accent));

    let line = Line::from(vec![
        Span::styled(
            format!("{} ", theme.icons.search),
            Style::default().fg(theme.palette.accent),
        ),
        Span::styled(
            prompt.buffer.clone(),
            Style::default().fg(theme.palette.fg_primary),
        ),
        Span::styled("█", Style::default().fg(theme.palette.accent)),
    ]);
    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_status(frame: &mut Frame, cfg: &Config, state: &AppState, theme: &Theme, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(40)])
        .split(inner);

    let mut spans: Vec<Span> = Vec::new();
    match cfg.background.mode {
        BackgroundMode::Video => {
            let glyph = if state.paused {
                theme.icons.pause
            } else {
                theme.icons.play
            };
            let name = state.now_playing.as_deref().unwrap_or("nothing playing");
            spans.push(Span::styled(
                format!("{glyph} "),
                Style::default().fg(theme.palette.accent),
            ));
            spans.push(Span::styled(
                truncate(name, 48),
                Style::default().fg(theme.palette.fg_primary),
            ));
        }
        BackgroundMode::Image => {
            let wallpaper = state.current_wallpaper.as_deref().unwrap_or("loading...");
            spans.push(Span::styled(
                "bg ",
                Style::default().fg(theme.palette.fg_secondary),
            ));
            spans.push(Span::styled(
                truncate(wallpaper, 48),
                Style::default().fg(theme.palette.fg_primary),
            ));
        }
    }
    if !state.status.is_empty() {
        spans.push(Span::styled(
            format!("  {}  {}", theme.icons.bullet, state.status),
            Style::default().fg(theme.palette.fg_secondary),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), cols[0]);

    if let Some(toast) = &state.toast {
        let color = match toast.kind {
            ToastKind::Success => theme.palette.success,
            ToastKind::Error => theme.palette.error,
        };
        let glyph = match toast.kind {
            ToastKind::Success => theme.icons.success,
            ToastKind::Error => theme.icons.error,
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!("{glyph} {}", truncate(&toast.message, 36)),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )))
            .right_aligned(),
            cols[1],
        );
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}
