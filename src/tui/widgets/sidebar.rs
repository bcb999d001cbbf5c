use crate::app::state::AppState;
use crate::tui::theme::Theme;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};

struct MenuItem {
    icon: &'static str,
    label: &'static str,
}

pub fn render(frame: &mut Frame, state: &AppState, theme: &Theme, area: Rect) {
    let icons = &theme.icons;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.border))
        .title(" Menu ")
        .title_style(Style::default().fg(theme.palette.accent));

    let menu_items = [
        MenuItem { icon: icons.home, label: "Home" },
        MenuItem { icon: icons.media, label: "Media" },
        MenuItem { icon: icons.link, label: "Links" },
        MenuItem { icon: icons.settings, label: "Settings" },
        MenuItem { icon: icons.help, label: "Help" },
    ];

    let items: Vec<ListItem> = menu_items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let is_selected = i == state.sidebar_selected;

            let style = if is_selected {
                Style::default()
                    .fg(theme.palette.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.palette.fg_primary)
            };
            let icon_style = if is_selected {
                Style::default().fg(theme.palette.accent)
            } else {
                Style::default().fg(theme.palette.fg_secondary)
            };
            let prefix = if is_selected {
                icons.selected
            } else {
                icons.unselected
            };

            ListItem::new(Line::from(vec![
                Span::styled(prefix, icon_style),
                Span::raw(" "),
                Span::styled(item.icon, icon_style),
                Span::raw(" "),
                Span::styled(item.label, style),
            ]))
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(state.sidebar_selected.min(4)));

    let list = List::new(items).block(block).highlight_symbol("");

    frame.render_stateful_widget(list, area, &mut list_state);
}
