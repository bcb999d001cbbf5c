//! Settings screen: one row per setting, toggled/cycled/edited with Enter.

use crate::app::state::{AppState, SettingsRow};
use crate::config::Config;
use crate::tui::theme::Theme;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

pub fn render(frame: &mut Frame, cfg: &Config, state: &AppState, theme: &Theme, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.accent))
        .title(format!(" {} Settings ", theme.icons.settings))
        .title_style(Style::default().fg(theme.palette.accent));

    let items: Vec<ListItem> = SettingsRow::ALL
        .iter()
        .map(|row| {
            let value = row_value(*row, cfg, state);
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<20}", row.label()),
                    Style::default().fg(theme.palette.fg_primary),
                ),
                Span::styled(value, Style::default().fg(theme.palette.accent_alt)),
            ]))
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(
        state
            .settings_cursor
            .selected
            .min(SettingsRow::ALL.len() - 1),
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

    let hint = Line::from(vec![
        Span::styled("Enter", Style::default().fg(theme.palette.accent_alt)),
        Span::styled(
            " toggle / cycle / edit  ",
            Style::default().fg(theme.palette.fg_secondary),
        ),
        Span::styled("Esc", Style::default().fg(theme.palette.accent_alt)),
        Span::styled(" close", Style::default().fg(theme.palette.fg_secondary)),
    ]);
    let hint_block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.border));
    frame.render_widget(Paragraph::new(hint).block(hint_block), rows[1]);
}

fn on_off(v: bool) -> String {
    if v { "on".to_string() } else { "off".to_string() }
}

fn row_value(row: SettingsRow, cfg: &Config, state: &AppState) -> String {
    match row {
        SettingsRow::ShowClock => on_off(cfg.ui.show_clock),
        SettingsRow::ShowQuote => on_off(cfg.ui.show_quote),
        SettingsRow::ShowWeather => on_off(cfg.ui.show_weather),
        SettingsRow::ShowQuickLinks => on_off(cfg.ui.show_quick_links),
        SettingsRow::Clock24h => on_off(cfg.ui.clock_24h),
        SettingsRow::FocusMode => on_off(cfg.ui.focus_mode),
        SettingsRow::ZenMode => on_off(cfg.ui.zen_mode),
        SettingsRow::Theme => cfg.ui.theme.label().to_string(),
        SettingsRow::SearchEngine => cfg.search.engine.label().to_string(),
        SettingsRow::BackgroundMode => cfg.background.mode.label().to_string(),
        SettingsRow::ImageSource => format!("{:?}", cfg.background.image_source).to_lowercase(),
        SettingsRow::CustomUrl => {
            if cfg.background.custom_url.is_empty() {
                "(unset)".to_string()
            } else {
                cfg.background.custom_url.clone()
            }
        }
        SettingsRow::RotationMinutes => cfg.background.rotation_minutes.to_string(),
        SettingsRow::BlurLevel => cfg.background.blur_level.to_string(),
        SettingsRow::LocalOnly => on_off(cfg.background.local_only),
        SettingsRow::UserName => {
            if cfg.ui.user_name.is_empty() {
                "(unset)".to_string()
            } else {
                cfg.ui.user_name.clone()
            }
        }
        SettingsRow::DailyFocus => {
            if cfg.ui.daily_focus.is_empty() {
                "(unset)".to_string()
            } else {
                cfg.ui.daily_focus.clone()
            }
        }
        SettingsRow::Notes => {
            let first = state.notes.lines().next().unwrap_or("");
            if first.is_empty() {
                "(empty)".to_string()
            } else {
                format!("{first}…")
            }
        }
    }
}
