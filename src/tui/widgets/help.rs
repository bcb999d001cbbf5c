//! Help screen showing keybindings.

use crate::tui::theme::Theme;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn render(frame: &mut Frame, theme: &Theme, area: Rect) {
    let icons = &theme.icons;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.border))
        .title(format!(" {} Keybinds ", icons.help))
        .title_style(Style::default().fg(theme.palette.accent));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let left_content = vec![
        section_header("Navigation", theme),
        keybind("j / Down", "Move down", theme),
        keybind("k / Up", "Move up", theme),
        keybind("g / G", "Top / bottom", theme),
        keybind("h / l", "Previous / next screen", theme),
        keybind("Tab", "Next screen", theme),
        keybind("1-5", "Go to screen", theme),
        keybind("s", "Open / close settings", theme),
        Line::default(),
        section_header("Dashboard", theme),
        keybind("/", "Search the web", theme),
        keybind("n", "Next background", theme),
        keybind("Space", "Pause background video", theme),
        keybind("Ctrl+r / F5", "Refresh widgets", theme),
    ];
    frame.render_widget(
        Paragraph::new(left_content).wrap(Wrap { trim: false }),
        cols[0],
    );

    let right_content = vec![
        section_header("Media", theme),
        keybind("a", "Add video URL", theme),
        keybind("i", "Import local file", theme),
        keybind("d / Del", "Remove selected", theme),
        keybind("Enter", "Play selected", theme),
        Line::default(),
        section_header("Links", theme),
        keybind("a", "Add link (name url)", theme),
        keybind("d / Del", "Remove selected", theme),
        keybind("Enter", "Open in browser", theme),
        Line::default(),
        section_header("General", theme),
        keybind("q", "Quit", theme),
        keybind("Esc", "Close prompt / settings / quit", theme),
    ];
    frame.render_widget(
        Paragraph::new(right_content).wrap(Wrap { trim: false }),
        cols[1],
    );
}

fn section_header(title: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![Span::styled(
        format!("━━ {} ━━", title),
        Style::default()
            .fg(theme.palette.accent)
            .add_modifier(Modifier::BOLD),
    )])
}

fn keybind(key: &str, desc: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled("  ", Style::default()),
        Span::styled(
            format!("{:12}", key),
            Style::default()
                .fg(theme.palette.accent_alt)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(desc.to_string(), Style::default().fg(theme.palette.fg_primary)),
    ])
}
