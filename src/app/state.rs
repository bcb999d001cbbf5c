use crate::feeds::wallpapers::WallpaperRotation;
use crate::feeds::weather::WeatherReport;
use crate::links::QuickLink;
use crate::playlist::Playlist;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Media,
    Links,
    Settings,
    Help,
}

impl Screen {
    pub fn next(self) -> Self {
        match self {
            Screen::Home => Screen::Media,
            Screen::Media => Screen::Links,
            Screen::Links => Screen::Settings,
            Screen::Settings => Screen::Help,
            Screen::Help => Screen::Home,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Screen::Home => Screen::Help,
            Screen::Media => Screen::Home,
            Screen::Links => Screen::Media,
            Screen::Settings => Screen::Links,
            Screen::Help => Screen::Settings,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Screen::Home => 0,
            Screen::Media => 1,
            Screen::Links => 2,
            Screen::Settings => 3,
            Screen::Help => 4,
        }
    }
}

/// Rows on the settings screen, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsRow {
    ShowClock,
    ShowQuote,
    ShowWeather,
    ShowQuickLinks,
    Clock24h,
    FocusMode,
    ZenMode,
    Theme,
    SearchEngine,
    BackgroundMode,
    ImageSource,
    CustomUrl,
    RotationMinutes,
    BlurLevel,
    LocalOnly,
    UserName,
    DailyFocus,
    Notes,
}

impl SettingsRow {
    pub const ALL: [SettingsRow; 18] = [
        SettingsRow::ShowClock,
        SettingsRow::ShowQuote,
        SettingsRow::ShowWeather,
        SettingsRow::ShowQuickLinks,
        SettingsRow::Clock24h,
        SettingsRow::FocusMode,
        SettingsRow::ZenMode,
        SettingsRow::Theme,
        SettingsRow::SearchEngine,
        SettingsRow::BackgroundMode,
        SettingsRow::ImageSource,
        SettingsRow::CustomUrl,
        SettingsRow::RotationMinutes,
        SettingsRow::BlurLevel,
        SettingsRow::LocalOnly,
        SettingsRow::UserName,
        SettingsRow::DailyFocus,
        SettingsRow::Notes,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SettingsRow::ShowClock => "Show clock",
            SettingsRow::ShowQuote => "Show quote",
            SettingsRow::ShowWeather => "Show weather",
            SettingsRow::ShowQuickLinks => "Show quick links",
            SettingsRow::Clock24h => "24-hour clock",
            SettingsRow::FocusMode => "Focus mode",
            SettingsRow::ZenMode => "Zen mode",
            SettingsRow::Theme => "Theme",
            SettingsRow::SearchEngine => "Search engine",
            SettingsRow::BackgroundMode => "Background",
            SettingsRow::ImageSource => "Image source",
            SettingsRow::CustomUrl => "Custom image URL",
            SettingsRow::RotationMinutes => "Rotation minutes",
            SettingsRow::BlurLevel => "Blur level",
            SettingsRow::LocalOnly => "Local media only",
            SettingsRow::UserName => "Name",
            SettingsRow::DailyFocus => "Daily focus",
            SettingsRow::Notes => "Notes",
        }
    }

    /// Rows edited through the line editor rather than toggled/cycled.
    pub fn is_text(self) -> bool {
        matches!(
            self,
            SettingsRow::CustomUrl
                | SettingsRow::RotationMinutes
                | SettingsRow::BlurLevel
                | SettingsRow::UserName
                | SettingsRow::DailyFocus
                | SettingsRow::Notes
        )
    }
}

/// What the line editor is collecting input for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Search,
    AddSource,
    ImportMedia,
    AddLink,
    EditSetting(SettingsRow),
}

#[derive(Debug, Clone)]
pub struct Prompt {
    pub kind: PromptKind,
    pub buffer: String,
}

impl Prompt {
    pub fn new(kind: PromptKind) -> Self {
        Self {
            kind,
            buffer: String::new(),
        }
    }

    pub fn with_buffer(kind: PromptKind, buffer: impl Into<String>) -> Self {
        Self {
            kind,
            buffer: buffer.into(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self.kind {
            PromptKind::Search => "Search",
            PromptKind::AddSource => "Add video URL",
            PromptKind::ImportMedia => "Import video file (path)",
            PromptKind::AddLink => "Add quick link (name url)",
            PromptKind::EditSetting(row) => row.label(),
        }
    }
}

/// Cursor + scroll window for a vertical list.
#[derive(Debug, Clone, Default)]
pub struct ListCursor {
    pub selected: usize,
    pub scroll_offset: usize,
}

impl ListCursor {
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self, len: usize) {
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
        self.scroll_offset = self.scroll_offset.min(self.selected);
    }

    pub fn update_scroll(&mut self, visible_height: usize) {
        if visible_height == 0 {
            return;
        }
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        } else if self.selected >= self.scroll_offset + visible_height {
            self.scroll_offset = self.selected - visible_height + 1;
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub created_at: std::time::Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Success,
            created_at: std::time::Instant::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Error,
            created_at: std::time::Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > std::time::Duration::from_secs(3)
    }
}

pub struct AppState {
    pub should_quit: bool,
    pub tick: u64,

    pub screen: Screen,
    pub sidebar_selected: usize,
    pub prompt: Option<Prompt>,

    // Media
    pub playlist: Playlist,
    pub playlist_loading: bool,
    pub media_cursor: ListCursor,
    pub now_playing: Option<String>,
    pub paused: bool,

    // Background (image mode)
    pub rotation: Option<WallpaperRotation>,
    pub current_wallpaper: Option<String>,

    // Widgets
    pub quote: Option<String>,
    pub weather: Option<WeatherReport>,
    pub weather_loading: bool,
    pub weather_error: Option<String>,

    // Quick links
    pub links: Vec<QuickLink>,
    pub links_cursor: ListCursor,

    // Settings
    pub settings_cursor: ListCursor,
    pub notes: String,

    pub toast: Option<Toast>,
    pub status: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            tick: 0,
            screen: Screen::Home,
            sidebar_selected: 0,
            prompt: None,
            playlist: Playlist::new(),
            playlist_loading: false,
            media_cursor: ListCursor::default(),
            now_playing: None,
            paused: false,
            rotation: None,
            current_wallpaper: None,
            quote: None,
            weather: None,
            weather_loading: false,
            weather_error: None,
            links: Vec::new(),
            links_cursor: ListCursor::default(),
            settings_cursor: ListCursor::default(),
            notes: String::new(),
            toast: None,
            status: String::new(),
        }
    }

    pub fn selected_settings_row(&self) -> SettingsRow {
        SettingsRow::ALL[self.settings_cursor.selected.min(SettingsRow::ALL.len() - 1)]
    }

    pub fn active_list_len(&self) -> usize {
        match self.screen {
            Screen::Media => self.playlist.len(),
            Screen::Links => self.links.len(),
            Screen::Settings => SettingsRow::ALL.len(),
            _ => 0,
        }
    }

    pub fn active_cursor_mut(&mut self) -> Option<&mut ListCursor> {
        match self.screen {
            Screen::Media => Some(&mut self.media_cursor),
            Screen::Links => Some(&mut self.links_cursor),
            Screen::Settings => Some(&mut self.settings_cursor),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screens_cycle_both_ways() {
        let mut s = Screen::Home;
        for _ in 0..5 {
            s = s.next();
        }
        assert_eq!(s, Screen::Home);
        for _ in 0..5 {
            s = s.prev();
        }
        assert_eq!(s, Screen::Home);
    }

    #[test]
    fn cursor_clamps_to_shrinking_lists() {
        let mut c = ListCursor {
            selected: 9,
            scroll_offset: 5,
        };
        c.clamp(3);
        assert_eq!(c.selected, 2);
        assert!(c.scroll_offset <= c.selected);
        c.clamp(0);
        assert_eq!(c.selected, 0);
    }
}
