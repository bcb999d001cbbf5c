//! The dashboard itself: greeting, clock, quote, weather, quick links.

use crate::app::state::AppState;
use crate::clock;
use crate::config::Config;
use crate::tui::theme::Theme;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn render(frame: &mut Frame, cfg: &Config, state: &AppState, theme: &Theme, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.border))
        .title(format!(" {} Atrium ", theme.icons.home))
        .title_style(Style::default().fg(theme.palette.accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // greeting + focus line
            Constraint::Length(3), // clock
            Constraint::Length(1), // date
            Constraint::Length(1), // spacer
            Constraint::Length(2), // quote
            Constraint::Length(2), // weather
            Constraint::Min(0),    // notes + quick links
        ])
        .split(inner);

    let now = clock::now_local();
    // Zen keeps only the clock (and the search prompt); focus additionally
    // drops quote, weather, links and the focus line.
    let calm = cfg.ui.focus_mode || cfg.ui.zen_mode;

    if cfg.ui.show_clock {
        let mut header = vec![Line::from(Span::styled(
            clock::greeting(now, &cfg.ui.user_name),
            Style::default().fg(theme.palette.fg_secondary),
        ))];
        if !calm && !cfg.ui.daily_focus.trim().is_empty() {
            header.push(Line::from(Span::styled(
                format!("— {} —", cfg.ui.daily_focus.trim()),
                Style::default().fg(theme.palette.accent_alt),
            )));
        }
        frame.render_widget(Paragraph::new(header).alignment(Alignment::Center), rows[0]);

        let time_line = Line::from(Span::styled(
            clock::format_time(now, cfg.ui.clock_24h),
            Style::default()
                .fg(theme.palette.accent)
                .add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(
            Paragraph::new(vec![Line::default(), time_line]).alignment(Alignment::Center),
            rows[1],
        );
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                clock::format_date(now),
                Style::default().fg(theme.palette.fg_primary),
            )))
            .alignment(Alignment::Center),
            rows[2],
        );
    }

    if cfg.ui.zen_mode {
        return;
    }

    if cfg.ui.show_quote && !calm {
        let quote = state.quote.as_deref().unwrap_or("…");
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(
                    format!("{} ", theme.icons.quote),
                    Style::default().fg(theme.palette.accent_alt),
                ),
                Span::styled(
                    format!("\"{quote}\""),
                    Style::default()
                        .fg(theme.palette.fg_secondary)
                        .add_modifier(Modifier::ITALIC),
                ),
            ]))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
            rows[4],
        );
    }

    if cfg.ui.show_weather && !calm {
        frame.render_widget(
            Paragraph::new(weather_line(state, theme)).alignment(Alignment::Center),
            rows[5],
        );
    }

    let mut tail: Vec<Line> = Vec::new();
    if !calm && !state.notes.trim().is_empty() {
        tail.push(Line::default());
        for line in state.notes.lines().take(3) {
            tail.push(Line::from(Span::styled(
                line.to_string(),
                Style::default().fg(theme.palette.fg_secondary),
            )));
        }
    }
    if cfg.ui.show_quick_links && !calm && !state.links.is_empty() {
        tail.push(Line::default());
        let mut spans: Vec<Span> = Vec::new();
        for (i, link) in state.links.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(
                    format!("  {}  ", theme.icons.bullet),
                    Style::default().fg(theme.palette.border),
                ));
            }
            spans.push(Span::styled(
                link.name.clone(),
                Style::default().fg(theme.palette.accent),
            ));
        }
        tail.push(Line::from(spans));
    }
    if !tail.is_empty() {
        frame.render_widget(
            Paragraph::new(tail)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            rows[6],
        );
    }
}

fn weather_line(state: &AppState, theme: &Theme) -> Line<'static> {
    if let Some(report) = &state.weather {
        return Line::from(vec![
            Span::styled(
                format!("{} ", report.condition.glyph(report.is_day)),
                Style::default().fg(theme.palette.accent),
            ),
            Span::styled(
                format!("{}°C {}", report.temp_c, report.condition.label()),
                Style::default().fg(theme.palette.fg_primary),
            ),
            Span::styled(
                format!("  {} {}", theme.icons.location, report.location),
                Style::default().fg(theme.palette.fg_secondary),
            ),
        ]);
    }
    if state.weather_loading {
        return Line::from(Span::styled(
            format!("{} fetching weather...", theme.icons.loading),
            Style::default().fg(theme.palette.fg_secondary),
        ));
    }
    if let Some(reason) = &state.weather_error {
        return Line::from(Span::styled(
            format!("{} weather unavailable ({reason})", theme.icons.error),
            Style::default().fg(theme.palette.fg_secondary),
        ));
    }
    Line::default()
}
