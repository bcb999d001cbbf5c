pub mod actions;
pub mod events;
pub mod state;

use crate::config::{BackgroundMode, Config, ImageSource};
use crate::feeds::{QuoteClient, VideoFeedClient, WallpaperClient, WeatherClient, weather};
use crate::library::{self, MediaSession};
use crate::links;
use crate::player::mpv::MpvHandle;
use crate::playlist::Entry;
use crate::sources;
use crate::storage::StorageHandle;
use crate::tui::{self, TuiTerminal};
use crate::{input, notes};
use actions::Action;
use events::{Event, NetworkEvent, PlayerEvent};
use state::{AppState, Prompt, PromptKind, Screen, SettingsRow, Toast};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Weather re-polls unconditionally on this cadence while the TUI runs.
const WEATHER_POLL_SECS: u64 = 30 * 60;

pub struct App {
    cfg: Config,
    config_path: std::path::PathBuf,
    state: AppState,
    storage: StorageHandle,
    session: Arc<MediaSession>,
    video_feed: VideoFeedClient,
    wallpapers: WallpaperClient,
    quotes: QuoteClient,
    weather: WeatherClient,
    mpv: Option<MpvHandle>,
}

impl App {
    pub fn new(cfg: Config, config_path: std::path::PathBuf) -> anyhow::Result<Self> {
        let db_path = cfg.paths.data_dir.join("atrium.sqlite3");
        let storage = StorageHandle::new(db_path);
        // Open once so schema problems surface before the terminal flips.
        let db = storage.open()?;

        let mut state = AppState::new();
        state.links = links::load(&db)?;
        state.notes = notes::load(&db)?;

        Ok(Self {
            cfg,
            config_path,
            state,
            storage,
            session: Arc::new(MediaSession::new()?),
            video_feed: VideoFeedClient::new(),
            wallpapers: WallpaperClient::new(),
            quotes: QuoteClient::new(),
            weather: WeatherClient::new(),
            mpv: None,
        })
    }

    pub async fn run(&mut self, terminal: &mut TuiTerminal) -> anyhow::Result<()> {
        let (tx, mut rx) = mpsc::channel::<Event>(256);

        input::spawn_input_task(tx.clone(), self.cfg.input.mouse);
        spawn_tick_task(tx.clone());

        if self.cfg.background.mode == BackgroundMode::Video {
            self.ensure_player(&tx).await;
        }

        tui::draw(terminal, &self.cfg, &mut self.state)?;

        // Initial loads; each widget honors its visibility toggle.
        self.spawn_load_playlist(&tx);
        if self.cfg.background.mode == BackgroundMode::Image {
            self.spawn_load_wallpapers(&tx);
        }
        if self.cfg.ui.show_quote {
            self.spawn_load_quote(&tx);
        }
        if self.cfg.ui.show_weather {
            self.spawn_load_weather(&tx);
        }

        while let Some(ev) = rx.recv().await {
            match ev {
                Event::Input(input_ev) => {
                    if let Some(action) = input::map_input_to_action(&self.state, input_ev) {
                        self.handle_action(action, &tx).await;
                    }
                }
                Event::Tick => self.handle_tick(&tx),
                Event::Player(pe) => self.handle_player(pe, &tx).await,
                Event::Network(ne) => self.handle_network(ne, &tx).await,
            }

            if self.state.should_quit {
                break;
            }

            tui::draw(terminal, &self.cfg, &mut self.state)?;
        }

        Ok(())
    }

    fn handle_tick(&mut self, tx: &mpsc::Sender<Event>) {
        self.state.tick += 1;

        if self.cfg.ui.show_weather && self.state.tick % WEATHER_POLL_SECS == 0 {
            self.spawn_load_weather(tx);
        }

        let rotation_secs = u64::from(self.cfg.background.rotation_minutes) * 60;
        if self.cfg.background.mode == BackgroundMode::Image
            && rotation_secs > 0
            && self.state.tick % rotation_secs == 0
        {
            self.rotate_wallpaper();
        }
    }

    async fn handle_action(&mut self, action: Action, tx: &mpsc::Sender<Event>) {
        match action {
            Action::Activate => self.activate(tx).await,
            Action::RemoveSelected => self.remove_selected(tx),
            Action::CommitInput => self.commit_prompt(tx).await,
            Action::NextBackground => self.next_background(tx).await,
            Action::TogglePause => {
                if let Some(mpv) = &self.mpv
                    && let Err(e) = mpv.toggle_pause().await
                {
                    self.state.status = format!("player error: {e:#}");
                }
            }
            Action::Refresh => match self.state.screen {
                Screen::Home => {
                    if self.cfg.ui.show_quote {
                        self.spawn_load_quote(tx);
                    }
                    if self.cfg.ui.show_weather {
                        self.spawn_load_weather(tx);
                    }
                }
                Screen::Media => self.spawn_load_playlist(tx),
                _ => {}
            },
            other => self.reduce(other),
        }
    }

    /// Pure state transitions: navigation, cursors, prompt editing.
    fn reduce(&mut self, action: Action) {
        match action {
            Action::Quit => self.state.should_quit = true,
            Action::NextScreen => self.set_screen(self.state.screen.next()),
            Action::PrevScreen => self.set_screen(self.state.screen.prev()),
            Action::SetScreen(screen) => self.set_screen(screen),
            Action::CloseSettings => self.set_screen(Screen::Home),
            Action::ListUp => {
                if let Some(cursor) = self.state.active_cursor_mut() {
                    cursor.select_prev();
                    cursor.update_scroll(20);
                }
            }
            Action::ListDown => {
                let len = self.state.active_list_len();
                if let Some(cursor) = self.state.active_cursor_mut() {
                    cursor.select_next(len);
                    cursor.update_scroll(20);
                }
            }
            Action::GoTop => {
                if let Some(cursor) = self.state.active_cursor_mut() {
                    cursor.selected = 0;
                    cursor.scroll_offset = 0;
                }
            }
            Action::GoBottom => {
                let len = self.state.active_list_len();
                if let Some(cursor) = self.state.active_cursor_mut() {
                    cursor.selected = len.saturating_sub(1);
                    cursor.update_scroll(20);
                }
            }
            Action::FocusSearch => self.state.prompt = Some(Prompt::new(PromptKind::Search)),
            Action::BeginAddSource => self.state.prompt = Some(Prompt::new(PromptKind::AddSource)),
            Action::BeginImportMedia => {
                self.state.prompt = Some(Prompt::new(PromptKind::ImportMedia));
            }
            Action::BeginAddLink => {
                if self.state.links.len() >= links::MAX_LINKS {
                    self.state.toast =
                        Some(Toast::error(format!("Link limit is {}", links::MAX_LINKS)));
                } else {
                    self.state.prompt = Some(Prompt::new(PromptKind::AddLink));
                }
            }
            Action::InputChar(c) => {
                if let Some(prompt) = &mut self.state.prompt {
                    prompt.buffer.push(c);
                }
            }
            Action::Backspace => {
                if let Some(prompt) = &mut self.state.prompt {
                    prompt.buffer.pop();
                }
            }
            Action::ClearInput => {
                if let Some(prompt) = &mut self.state.prompt {
                    prompt.buffer.clear();
                }
            }
            Action::CancelInput => self.state.prompt = None,
            Action::Resize => {}
            // Side-effectful actions are intercepted in handle_action.
            _ => {}
        }
    }

    fn set_screen(&mut self, screen: Screen) {
        self.state.screen = screen;
        self.state.sidebar_selected = screen.index();
        self.state.prompt = None;
    }

    async fn activate(&mut self, tx: &mpsc::Sender<Event>) {
        match self.state.screen {
            Screen::Home => self.reduce(Action::FocusSearch),
            Screen::Media => {
                let idx = self.state.media_cursor.selected;
                if idx < self.state.playlist.len() {
                    self.state.playlist.set_current(idx);
                    self.play_current(tx).await;
                }
            }
            Screen::Links => {
                let Some(link) = self.state.links.get(self.state.links_cursor.selected) else {
                    return;
                };
                match opener::open(&link.url) {
                    Ok(()) => self.state.status = format!("Opened {}", link.name),
                    Err(e) => self.state.toast = Some(Toast::error(format!("open failed: {e}"))),
                }
            }
            Screen::Settings => self.activate_settings_row(tx).await,
            Screen::Help => {}
        }
    }

    async fn activate_settings_row(&mut self, tx: &mpsc::Sender<Event>) {
        let row = self.state.selected_settings_row();
        if row.is_text() {
            let current = match row {
                SettingsRow::CustomUrl => self.cfg.background.custom_url.clone(),
                SettingsRow::RotationMinutes => self.cfg.background.rotation_minutes.to_string(),
                SettingsRow::BlurLevel => self.cfg.background.blur_level.to_string(),
                SettingsRow::UserName => self.cfg.ui.user_name.clone(),
                SettingsRow::DailyFocus => self.cfg.ui.daily_focus.clone(),
                SettingsRow::Notes => self.state.notes.clone(),
                _ => String::new(),
            };
            self.state.prompt = Some(Prompt::with_buffer(PromptKind::EditSetting(row), current));
            return;
        }

        match row {
            SettingsRow::ShowClock => self.cfg.ui.show_clock = !self.cfg.ui.show_clock,
            SettingsRow::ShowQuote => {
                self.cfg.ui.show_quote = !self.cfg.ui.show_quote;
                if self.cfg.ui.show_quote && self.state.quote.is_none() {
                    self.spawn_load_quote(tx);
                }
            }
            SettingsRow::ShowWeather => {
                self.cfg.ui.show_weather = !self.cfg.ui.show_weather;
                if self.cfg.ui.show_weather {
                    self.spawn_load_weather(tx);
                }
            }
            SettingsRow::ShowQuickLinks => {
                self.cfg.ui.show_quick_links = !self.cfg.ui.show_quick_links;
            }
            SettingsRow::Clock24h => self.cfg.ui.clock_24h = !self.cfg.ui.clock_24h,
            SettingsRow::FocusMode => self.cfg.ui.focus_mode = !self.cfg.ui.focus_mode,
            SettingsRow::ZenMode => self.cfg.ui.zen_mode = !self.cfg.ui.zen_mode,
            SettingsRow::Theme => {
                self.cfg.ui.theme = self.cfg.ui.theme.next();
                self.state.status = format!("Theme: {}", self.cfg.ui.theme.label());
            }
            SettingsRow::SearchEngine => {
                self.cfg.search.engine = self.cfg.search.engine.next();
                self.state.status = format!("Search: {}", self.cfg.search.engine.label());
            }
            SettingsRow::BackgroundMode => {
                self.cfg.background.mode = match self.cfg.background.mode {
                    BackgroundMode::Video => BackgroundMode::Image,
                    BackgroundMode::Image => BackgroundMode::Video,
                };
                match self.cfg.background.mode {
                    BackgroundMode::Image => {
                        if self.state.rotation.is_none() {
                            self.spawn_load_wallpapers(tx);
                        }
                    }
                    BackgroundMode::Video => {
                        self.ensure_player(tx).await;
                        self.spawn_load_playlist(tx);
                    }
                }
            }
            SettingsRow::ImageSource => {
                self.cfg.background.image_source = match self.cfg.background.image_source {
                    ImageSource::Curated => ImageSource::Picsum,
                    ImageSource::Picsum => ImageSource::Custom,
                    ImageSource::Custom => ImageSource::Curated,
                };
            }
            SettingsRow::LocalOnly => {
                self.cfg.background.local_only = !self.cfg.background.local_only;
                self.spawn_load_playlist(tx);
            }
            _ => {}
        }
        self.save_config();
    }

    fn apply_setting_text(&mut self, row: SettingsRow, value: String) {
        match row {
            SettingsRow::CustomUrl => self.cfg.background.custom_url = value.trim().to_string(),
            SettingsRow::RotationMinutes => match value.trim().parse::<u32>() {
                Ok(minutes) => self.cfg.background.rotation_minutes = minutes,
                Err(_) => {
                    self.state.toast = Some(Toast::error("Rotation must be a number of minutes"));
                    return;
                }
            },
            SettingsRow::BlurLevel => match value.trim().parse::<u8>() {
                Ok(level) => self.cfg.background.blur_level = level,
                Err(_) => {
                    self.state.toast = Some(Toast::error("Blur must be 0-255"));
                    return;
                }
            },
            SettingsRow::UserName => self.cfg.ui.user_name = value.trim().to_string(),
            SettingsRow::DailyFocus => self.cfg.ui.daily_focus = value.trim().to_string(),
            SettingsRow::Notes => {
                self.state.notes = value.clone();
                let storage = self.storage.clone();
                let now = now_unix();
                tokio::task::spawn_blocking(move || {
                    if let Ok(db) = storage.open() {
                        let _ = notes::save(&db, &value, now);
                    }
                });
                return;
            }
            _ => return,
        }
        self.save_config();
    }

    fn save_config(&mut self) {
        if let Err(e) = crate::config::save(&self.cfg, Some(&self.config_path)) {
            self.state.toast = Some(Toast::error(format!("save settings failed: {e:#}")));
        }
    }

    fn remove_selected(&mut self, tx: &mpsc::Sender<Event>) {
        match self.state.screen {
            Screen::Media => {
                let idx = self.state.media_cursor.selected;
                let Some(entry) = self.state.playlist.entries().get(idx).cloned() else {
                    return;
                };
                match entry {
                    Entry::Remote(_) => {
                        self.state.toast = Some(Toast::error("Curated entries can't be removed"));
                    }
                    Entry::User(url) => {
                        let storage = self.storage.clone();
                        let tx = tx.clone();
                        let now = now_unix();
                        tokio::task::spawn_blocking(move || {
                            let result = storage
                                .open()
                                .and_then(|db| sources::remove(&db, &url, now).map_err(Into::into));
                            let ev = match result {
                                Ok(_) => Event::Network(NetworkEvent::LibraryChanged {
                                    message: "Removed".to_string(),
                                }),
                                Err(e) => Event::Network(NetworkEvent::Error(format!("{e:#}"))),
                            };
                            let _ = tx.blocking_send(ev);
                        });
                    }
                    Entry::Local(media) => {
                        let storage = self.storage.clone();
                        let tx = tx.clone();
                        tokio::task::spawn_blocking(move || {
                            let result = storage
                                .open()
                                .and_then(|db| library::remove(&db, media.id).map_err(Into::into));
                            let ev = match result {
                                Ok(()) => Event::Network(NetworkEvent::LibraryChanged {
                                    message: "Removed".to_string(),
                                }),
                                Err(e) => Event::Network(NetworkEvent::Error(format!("{e:#}"))),
                            };
                            let _ = tx.blocking_send(ev);
                        });
                    }
                }
            }
            Screen::Links => {
                let idx = self.state.links_cursor.selected;
                if idx < self.state.links.len() {
                    let removed = self.state.links.remove(idx);
                    self.persist_links();
                    self.state.links_cursor.clamp(self.state.links.len());
                    self.state.toast = Some(Toast::success(format!("Removed {}", removed.name)));
                }
            }
            _ => {}
        }
    }

    fn persist_links(&mut self) {
        let result = self
            .storage
            .open()
            .and_then(|db| links::save(&db, &self.state.links, now_unix()));
        if let Err(e) = result {
            self.state.toast = Some(Toast::error(format!("save links failed: {e:#}")));
        }
    }

    async fn commit_prompt(&mut self, tx: &mpsc::Sender<Event>) {
        let Some(prompt) = self.state.prompt.take() else {
            return;
        };
        let value = prompt.buffer;

        match prompt.kind {
            PromptKind::Search => {
                let query = value.trim();
                if query.is_empty() {
                    return;
                }
                let url = self.cfg.search.engine.query_url(query);
                if let Err(e) = opener::open(&url) {
                    self.state.toast = Some(Toast::error(format!("open failed: {e}")));
                }
            }
            PromptKind::AddSource => {
                let url = value.trim().to_string();
                if url.is_empty() {
                    return;
                }
                let storage = self.storage.clone();
                let tx = tx.clone();
                let now = now_unix();
                tokio::task::spawn_blocking(move || {
                    let result = storage.open().map_err(sources::SourceError::Storage).and_then(
                        |db| {
                            sources::add(&db, &url, now)?;
                            Ok(url)
                        },
                    );
                    let ev = match result {
                        Ok(url) => Event::Network(NetworkEvent::LibraryChanged {
                            message: format!("Added {url}"),
                        }),
                        Err(e) => Event::Network(NetworkEvent::Error(e.to_string())),
                    };
                    let _ = tx.blocking_send(ev);
                });
            }
            PromptKind::ImportMedia => {
                let path = std::path::PathBuf::from(value.trim());
                if path.as_os_str().is_empty() {
                    return;
                }
                let storage = self.storage.clone();
                let tx = tx.clone();
                let now = now_unix();
                tokio::task::spawn_blocking(move || {
                    let result = storage
                        .open()
                        .map_err(library::MediaError::Storage)
                        .and_then(|db| library::add(&db, &path, now));
                    let ev = match result {
                        Ok(record) => Event::Network(NetworkEvent::LibraryChanged {
                            message: format!("Imported {}", record.name),
                        }),
                        Err(e) => Event::Network(NetworkEvent::Error(e.to_string())),
                    };
                    let _ = tx.blocking_send(ev);
                });
            }
            PromptKind::AddLink => {
                let Some((name, url)) = value.trim().split_once(char::is_whitespace) else {
                    self.state.toast = Some(Toast::error("Format: name url"));
                    return;
                };
                self.state.links.push(crate::links::QuickLink {
                    name: name.trim().to_string(),
                    url: url.trim().to_string(),
                });
                self.persist_links();
                self.state.toast = Some(Toast::success("Link added"));
            }
            PromptKind::EditSetting(row) => self.apply_setting_text(row, value),
        }
    }

    async fn next_background(&mut self, tx: &mpsc::Sender<Event>) {
        match self.cfg.background.mode {
            BackgroundMode::Video => {
                if self.state.playlist.is_empty() {
                    return;
                }
                self.state.playlist.pick_next(&mut rand::rng());
                self.play_current(tx).await;
            }
            BackgroundMode::Image => self.rotate_wallpaper(),
        }
    }

    fn rotate_wallpaper(&mut self) {
        if let Some(rotation) = &mut self.state.rotation {
            let url = rotation.next_url(&self.cfg.background, &mut rand::rng());
            self.state.current_wallpaper = Some(url);
        }
    }

    async fn ensure_player(&mut self, tx: &mpsc::Sender<Event>) {
        if self.mpv.is_some() {
            return;
        }
        let mpv_log = self.cfg.paths.data_dir.join("mpv.log");
        match MpvHandle::spawn(tx.clone(), Some(&mpv_log)).await {
            Ok(h) => self.mpv = Some(h),
            Err(e) => {
                self.state.toast = Some(Toast::error(format!("mpv disabled: {e:#}")));
                self.mpv = None;
            }
        }
    }

    async fn play_current(&mut self, _tx: &mpsc::Sender<Event>) {
        let Some(entry) = self.state.playlist.current_entry() else {
            return;
        };
        let location = entry.location();
        let name = entry.display_name().to_string();

        self.state.now_playing = Some(name);
        if let Some(mpv) = &self.mpv {
            if let Err(e) = mpv.load(&location).await {
                self.state.status = format!("load failed: {e:#}");
            }
        } else {
            self.state.status = "mpv not available".into();
        }
    }

    async fn handle_player(&mut self, pe: PlayerEvent, tx: &mpsc::Sender<Event>) {
        match pe {
            PlayerEvent::Started => self.state.paused = false,
            PlayerEvent::Paused => self.state.paused = true,
            PlayerEvent::Ended => {
                if self.cfg.background.mode == BackgroundMode::Video
                    && !self.state.playlist.is_empty()
                {
                    self.state.playlist.pick_next(&mut rand::rng());
                    self.play_current(tx).await;
                }
            }
            PlayerEvent::Error(e) => {
                self.state.status = format!("Playback error: {e}");
                // Deterministic advance: a broken item must not be redrawn.
                if self.cfg.background.mode == BackgroundMode::Video
                    && !self.state.playlist.is_empty()
                {
                    self.state.playlist.advance_on_error();
                    self.play_current(tx).await;
                }
            }
        }
    }

    async fn handle_network(&mut self, ne: NetworkEvent, tx: &mpsc::Sender<Event>) {
        match ne {
            NetworkEvent::Error(e) => {
                self.state.playlist_loading = false;
                self.state.weather_loading = false;
                self.state.toast = Some(Toast::error(e.clone()));
                self.state.status = format!("Error: {e}");
            }
            NetworkEvent::PlaylistLoaded {
                remote,
                user,
                local,
                feed_error,
            } => {
                self.state.playlist_loading = false;
                self.state.playlist.rebuild(remote, user, local);
                self.state.media_cursor.clamp(self.state.playlist.len());

                if let Some(reason) = feed_error {
                    self.state.status = format!("Curated feed unavailable ({reason})");
                } else {
                    self.state.status = format!("Media: {} items", self.state.playlist.len());
                }

                if self.cfg.background.mode == BackgroundMode::Video
                    && !self.state.playlist.is_empty()
                {
                    self.state.playlist.pick_next(&mut rand::rng());
                    self.play_current(tx).await;
                }
            }
            NetworkEvent::Wallpapers { urls } => {
                let mut rotation = crate::feeds::wallpapers::WallpaperRotation::new(urls);
                let url = rotation.random_url(&self.cfg.background, &mut rand::rng());
                self.state.current_wallpaper = Some(url);
                self.state.rotation = Some(rotation);
            }
            NetworkEvent::Quote { text } => {
                self.state.quote = Some(text);
            }
            NetworkEvent::Weather { report, from_cache } => {
                self.state.weather_loading = false;
                self.state.weather_error = None;
                self.state.weather = Some(report);
                if !from_cache {
                    self.state.status = "Weather updated".into();
                }
            }
            NetworkEvent::WeatherUnavailable { reason } => {
                self.state.weather_loading = false;
                self.state.weather_error = Some(reason);
            }
            NetworkEvent::LibraryChanged { message } => {
                self.state.toast = Some(Toast::success(message));
                self.spawn_load_playlist(tx);
            }
        }
    }

    fn spawn_load_playlist(&mut self, tx: &mpsc::Sender<Event>) {
        if self.state.playlist_loading {
            return;
        }
        self.state.playlist_loading = true;
        self.state.status = "Loading media...".into();

        let feed = self.video_feed.clone();
        let storage = self.storage.clone();
        let session = Arc::clone(&self.session);
        let local_only = self.cfg.background.local_only;
        let tx = tx.clone();

        tokio::spawn(async move {
            let (remote, feed_error) = if local_only {
                (Vec::new(), None)
            } else {
                match feed.fetch().await {
                    Ok(urls) => (urls, None),
                    Err(e) => (Vec::new(), Some(e.reason)),
                }
            };

            let stored = tokio::task::spawn_blocking(move || {
                let db = storage.open()?;
                let user = sources::load(&db)?;
                let local = library::list(&db, &session)?;
                anyhow::Ok((user, local))
            })
            .await;

            let ev = match stored {
                Ok(Ok((user, local))) => Event::Network(NetworkEvent::PlaylistLoaded {
                    remote,
                    user,
                    local,
                    feed_error,
                }),
                Ok(Err(e)) => Event::Network(NetworkEvent::Error(format!("{e:#}"))),
                Err(e) => Event::Network(NetworkEvent::Error(format!("task failed: {e}"))),
            };
            let _ = tx.send(ev).await;
        });
    }

    fn spawn_load_wallpapers(&mut self, tx: &mpsc::Sender<Event>) {
        let client = self.wallpapers.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let urls = client.fetch().await;
            let _ = tx.send(Event::Network(NetworkEvent::Wallpapers { urls })).await;
        });
    }

    fn spawn_load_quote(&mut self, tx: &mpsc::Sender<Event>) {
        let client = self.quotes.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let text = client.fetch().await;
            let _ = tx.send(Event::Network(NetworkEvent::Quote { text })).await;
        });
    }

    fn spawn_load_weather(&mut self, tx: &mpsc::Sender<Event>) {
        if self.state.weather_loading {
            return;
        }
        self.state.weather_loading = true;

        let client = self.weather.clone();
        let storage = self.storage.clone();
        let coords = self
            .cfg
            .weather
            .latitude
            .zip(self.cfg.weather.longitude);
        let tx = tx.clone();

        tokio::spawn(async move {
            let now = now_unix();

            // Cache check first: a fresh entry skips the network entirely.
            let cache_hit = tokio::task::spawn_blocking({
                let storage = storage.clone();
                move || storage.open().and_then(|db| weather::cached(&db, now))
            })
            .await;
            if let Ok(Ok(Some(report))) = cache_hit {
                let _ = tx
                    .send(Event::Network(NetworkEvent::Weather {
                        report,
                        from_cache: true,
                    }))
                    .await;
                return;
            }

            let result = async {
                let (lat, lon) = match coords {
                    Some(pair) => pair,
                    None => client.locate().await?,
                };
                client.fetch(lat, lon).await
            }
            .await;

            match result {
                Ok(report) => {
                    let _ = tokio::task::spawn_blocking({
                        let storage = storage.clone();
                        let report = report.clone();
                        move || storage.open().and_then(|db| weather::cache(&db, &report, now))
                    })
                    .await;
                    let _ = tx
                        .send(Event::Network(NetworkEvent::Weather {
                            report,
                            from_cache: false,
                        }))
                        .await;
                }
                Err(e) => {
                    let _ = tx
                        .send(Event::Network(NetworkEvent::WeatherUnavailable {
                            reason: format!("{e:#}"),
                        }))
                        .await;
                }
            }
        });
    }
}

fn spawn_tick_task(tx: mpsc::Sender<Event>) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_secs(1));
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        loop {
            interval.tick().await;
            if tx.send(Event::Tick).await.is_err() {
                break;
            }
        }
    });
}

pub fn now_unix() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}
