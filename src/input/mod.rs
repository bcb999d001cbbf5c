use crate::app::actions::Action;
use crate::app::events::{Event, InputEvent};
use crate::app::state::{AppState, Screen};
use crossterm::event::{
    self, Event as CtEvent, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind,
};
use tokio::sync::mpsc;

pub fn spawn_input_task(tx: mpsc::Sender<Event>, mouse_enabled: bool) {
    tokio::task::spawn_blocking(move || {
        let _ = mouse_enabled;
        loop {
            if event::poll(std::time::Duration::from_millis(250)).unwrap_or(false) {
                match event::read() {
                    Ok(CtEvent::Key(k)) => {
                        if k.kind == KeyEventKind::Press
                            && tx.blocking_send(Event::Input(InputEvent::Key(k))).is_err()
                        {
                            break;
                        }
                    }
                    Ok(CtEvent::Mouse(m)) => {
                        if tx.blocking_send(Event::Input(InputEvent::Mouse(m))).is_err() {
                            break;
                        }
                    }
                    Ok(CtEvent::Resize(_, _)) => {
                        if tx.blocking_send(Event::Input(InputEvent::Resize)).is_err() {
                            break;
                        }
                    }
                    Ok(_) => {}
                    Err(_) => {}
                }
            }
        }
    });
}

pub fn map_input_to_action(state: &AppState, ev: InputEvent) -> Option<Action> {
    match ev {
        InputEvent::Resize => Some(Action::Resize),
        InputEvent::Mouse(m) => match m.kind {
            MouseEventKind::ScrollUp => Some(Action::ListUp),
            MouseEventKind::ScrollDown => Some(Action::ListDown),
            _ => None,
        },
        InputEvent::Key(k) => {
            if state.prompt.is_some() {
                handle_prompt(k)
            } else {
                handle_screen(state, k)
            }
        }
    }
}

/// Line-editor mode: every printable character goes into the buffer.
fn handle_prompt(k: crossterm::event::KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Esc => Some(Action::CancelInput),
        KeyCode::Enter => Some(Action::CommitInput),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Char('u') if k.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Action::ClearInput)
        }
        KeyCode::Char(c) => Some(Action::InputChar(c)),
        _ => None,
    }
}

fn handle_screen(state: &AppState, k: crossterm::event::KeyEvent) -> Option<Action> {
    // Screen-specific bindings first, shared chrome below.
    if let Some(action) = match state.screen {
        Screen::Home => handle_home(k),
        Screen::Media => handle_media(k),
        Screen::Links => handle_links(k),
        Screen::Settings | Screen::Help => None,
    } {
        return Some(action);
    }

    match k.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Esc => match state.screen {
            Screen::Home => Some(Action::Quit),
            Screen::Settings => Some(Action::CloseSettings),
            _ => Some(Action::SetScreen(Screen::Home)),
        },

        KeyCode::Up | KeyCode::Char('k') => Some(Action::ListUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::ListDown),
        KeyCode::Char('g') => Some(Action::GoTop),
        KeyCode::Char('G') => Some(Action::GoBottom),

        KeyCode::Left | KeyCode::Char('h') => Some(Action::PrevScreen),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::NextScreen),
        KeyCode::Tab => Some(Action::NextScreen),
        KeyCode::BackTab => Some(Action::PrevScreen),
        KeyCode::Char('1') => Some(Action::SetScreen(Screen::Home)),
        KeyCode::Char('2') => Some(Action::SetScreen(Screen::Media)),
        KeyCode::Char('3') => Some(Action::SetScreen(Screen::Links)),
        KeyCode::Char('4') => Some(Action::SetScreen(Screen::Settings)),
        KeyCode::Char('5') => Some(Action::SetScreen(Screen::Help)),
        KeyCode::Char('s') => Some(if state.screen == Screen::Settings {
            Action::CloseSettings
        } else {
            Action::SetScreen(Screen::Settings)
        }),

        KeyCode::Char('n') => Some(Action::NextBackground),
        KeyCode::Char(' ') => Some(Action::TogglePause),

        KeyCode::Enter => Some(Action::Activate),
        KeyCode::Char('r') if k.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Refresh),
        KeyCode::F(5) => Some(Action::Refresh),
        KeyCode::Char('?') | KeyCode::F(1) => Some(Action::SetScreen(Screen::Help)),

        _ => None,
    }
}

fn handle_home(k: crossterm::event::KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Char('/') => Some(Action::FocusSearch),
        _ => None,
    }
}

fn handle_media(k: crossterm::event::KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Char('a') => Some(Action::BeginAddSource),
        KeyCode::Char('i') => Some(Action::BeginImportMedia),
        KeyCode::Char('d') | KeyCode::Delete => Some(Action::RemoveSelected),
        _ => None,
    }
}

fn handle_links(k: crossterm::event::KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Char('a') => Some(Action::BeginAddLink),
        KeyCode::Char('d') | KeyCode::Delete => Some(Action::RemoveSelected),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyEventKind, KeyEventState};

    fn key(code: KeyCode) -> InputEvent {
        InputEvent::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn escape_closes_settings_but_quits_home() {
        let mut state = AppState::new();
        state.screen = Screen::Settings;
        assert!(matches!(
            map_input_to_action(&state, key(KeyCode::Esc)),
            Some(Action::CloseSettings)
        ));

        state.screen = Screen::Home;
        assert!(matches!(
            map_input_to_action(&state, key(KeyCode::Esc)),
            Some(Action::Quit)
        ));
    }

    #[test]
    fn prompt_mode_captures_characters() {
        let mut state = AppState::new();
        state.prompt = Some(crate::app::state::Prompt::new(
            crate::app::state::PromptKind::Search,
        ));
        assert!(matches!(
            map_input_to_action(&state, key(KeyCode::Char('q'))),
            Some(Action::InputChar('q'))
        ));
        assert!(matches!(
            map_input_to_action(&state, key(KeyCode::Enter)),
            Some(Action::CommitInput)
        ));
        assert!(matches!(
            map_input_to_action(&state, key(KeyCode::Esc)),
            Some(Action::CancelInput)
        ));
    }

    #[test]
    fn media_screen_has_library_bindings() {
        let mut state = AppState::new();
        state.screen = Screen::Media;
        assert!(matches!(
            map_input_to_action(&state, key(KeyCode::Char('a'))),
            Some(Action::BeginAddSource)
        ));
        assert!(matches!(
            map_input_to_action(&state, key(KeyCode::Char('i'))),
            Some(Action::BeginImportMedia)
        ));
        assert!(matches!(
            map_input_to_action(&state, key(KeyCode::Char('d'))),
            Some(Action::RemoveSelected)
        ));
    }
}
