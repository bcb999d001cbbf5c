use anyhow::Context;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub background: BackgroundConfig,
    pub search: SearchConfig,
    pub weather: WeatherConfig,
    pub input: InputConfig,
    pub paths: PathsConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Default,
    Amber,
    Cyan,
    Rose,
    Violet,
}

impl ThemeName {
    pub fn next(self) -> Self {
        match self {
            ThemeName::Default => ThemeName::Amber,
            ThemeName::Amber => ThemeName::Cyan,
            ThemeName::Cyan => ThemeName::Rose,
            ThemeName::Rose => ThemeName::Violet,
            ThemeName::Violet => ThemeName::Default,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemeName::Default => "default",
            ThemeName::Amber => "amber",
            ThemeName::Cyan => "cyan",
            ThemeName::Rose => "rose",
            ThemeName::Violet => "violet",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    pub show_clock: bool,
    pub show_quote: bool,
    pub show_weather: bool,
    pub show_quick_links: bool,
    /// 24-hour clock; 12-hour with AM/PM when false.
    pub clock_24h: bool,
    /// Hides quote, weather, quick links and the focus line.
    pub focus_mode: bool,
    /// Hides everything except clock and search.
    pub zen_mode: bool,
    pub theme: ThemeName,
    pub user_name: String,
    pub daily_focus: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_clock: true,
            show_quote: true,
            show_weather: true,
            show_quick_links: true,
            clock_24h: true,
            focus_mode: false,
            zen_mode: false,
            theme: ThemeName::Default,
            user_name: String::new(),
            daily_focus: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundMode {
    #[default]
    Video,
    Image,
}

impl BackgroundMode {
    pub fn label(self) -> &'static str {
        match self {
            BackgroundMode::Video => "video",
            BackgroundMode::Image => "image",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ImageSource {
    #[default]
    Curated,
    Picsum,
    Custom,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BackgroundConfig {
    pub mode: BackgroundMode,
    pub image_source: ImageSource,
    pub custom_url: String,
    /// Minutes between image rotations; 0 disables rotation.
    pub rotation_minutes: u32,
    pub blur_level: u8,
    /// Skip the remote feed and play only user/local media.
    pub local_only: bool,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            mode: BackgroundMode::Video,
            image_source: ImageSource::Curated,
            custom_url: String::new(),
            rotation_minutes: 10,
            blur_level: 0,
            local_only: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SearchEngine {
    #[default]
    Google,
    DuckDuckGo,
}

impl SearchEngine {
    pub fn next(self) -> Self {
        match self {
            SearchEngine::Google => SearchEngine::DuckDuckGo,
            SearchEngine::DuckDuckGo => SearchEngine::Google,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SearchEngine::Google => "google",
            SearchEngine::DuckDuckGo => "duckduckgo",
        }
    }

    pub fn query_url(self, query: &str) -> String {
        let q = urlencoding::encode(query);
        match self {
            SearchEngine::Google => format!("https://www.google.com/search?q={q}"),
            SearchEngine::DuckDuckGo => format!("https://duckduckgo.com/?q={q}"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct SearchConfig {
    pub engine: SearchEngine,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct WeatherConfig {
    /// Manual coordinates; when unset, an IP lookup supplies them.
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    pub mouse: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self { mouse: true }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PathsConfig {
    pub data_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        let proj = ProjectDirs::from("dev", "atrium", "atrium");
        let data_dir = proj
            .as_ref()
            .map(|p| p.data_dir().to_path_buf())
            .unwrap_or_else(|| std::env::temp_dir().join("atrium"));
        Self { data_dir }
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    let proj = ProjectDirs::from("dev", "atrium", "atrium").context("ProjectDirs unavailable")?;
    Ok(proj.config_dir().join("config.toml"))
}

pub fn save(cfg: &Config, override_path: Option<&Path>) -> anyhow::Result<()> {
    let path = match override_path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create dir {}", parent.display()))?;
    }
    let raw = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&path, raw).with_context(|| format!("write {}", path.display()))?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let _ = fs::set_permissions(&path, fs::Permissions::from_mode(0o600));
    }
    Ok(())
}

/// Load settings, merging stored overrides onto defaults. A missing file is
/// seeded with defaults; an unreadable or corrupt file falls back to pure
/// defaults rather than failing the whole program.
pub fn load(override_path: Option<&Path>) -> anyhow::Result<Config> {
    let path = match override_path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };

    if !path.exists() {
        let cfg = Config::default();
        save(&cfg, Some(&path))?;
        return Ok(cfg);
    }

    let raw = match fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!("unreadable config {}: {e}", path.display());
            return Ok(Config::default());
        }
    };
    match toml::from_str::<Config>(&raw) {
        Ok(cfg) => Ok(cfg),
        Err(e) => {
            tracing::warn!("corrupt config {}: {e}", path.display());
            Ok(Config::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_load_round_trips_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut cfg = Config::default();
        cfg.ui.clock_24h = false;
        cfg.ui.user_name = "Ada".to_string();
        cfg.background.rotation_minutes = 5;
        cfg.search.engine = SearchEngine::DuckDuckGo;
        save(&cfg, Some(&path)).unwrap();

        let loaded = load(Some(&path)).unwrap();
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn missing_file_seeds_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let cfg = load(Some(&path)).unwrap();
        assert_eq!(cfg, Config::default());
        assert!(path.exists());
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "not = [valid").unwrap();
        let cfg = load(Some(&path)).unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn unknown_keys_are_dropped_missing_keys_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[ui]\nclock_24h = false\nno_such_field = 3\n").unwrap();
        let cfg = load(Some(&path)).unwrap();
        assert!(!cfg.ui.clock_24h);
        assert!(cfg.ui.show_clock);
        assert_eq!(cfg.background, BackgroundConfig::default());
    }

    #[test]
    fn search_urls_encode_queries() {
        assert_eq!(
            SearchEngine::Google.query_url("terminal dashboards"),
            "https://www.google.com/search?q=terminal%20dashboards"
        );
        assert!(
            SearchEngine::DuckDuckGo
                .query_url("a&b")
                .starts_with("https://duckduckgo.com/?q=a%26b")
        );
    }
}
