#[derive(Debug, Clone)]
pub enum Event {
    Input(InputEvent),
    /// One-second heartbeat: clock redraw, rotation and re-poll schedules.
    Tick,
    Player(PlayerEvent),
    Network(NetworkEvent),
}

#[derive(Debug, Clone)]
pub enum InputEvent {
    Key(crossterm::event::KeyEvent),
    Mouse(crossterm::event::MouseEvent),
    Resize,
}

#[derive(Debug, Clone)]
pub enum PlayerEvent {
    Started,
    Paused,
    Ended,
    Error(String),
}

#[derive(Debug, Clone)]
pub enum NetworkEvent {
    Error(String),
    /// The three media lists, fetched/loaded together so the union order
    /// stays deterministic. `feed_error` carries a failed remote fetch.
    PlaylistLoaded {
        remote: Vec<String>,
        user: Vec<String>,
        local: Vec<crate::library::LocalMedia>,
        feed_error: Option<String>,
    },
    Wallpapers {
        urls: Vec<String>,
    },
    Quote {
        text: String,
    },
    Weather {
        report: crate::feeds::weather::WeatherReport,
        from_cache: bool,
    },
    WeatherUnavailable {
        reason: String,
    },
    /// A library/source mutation finished; `message` feeds the toast and the
    /// playlist reloads to pick up the change.
    LibraryChanged {
        message: String,
    },
}
