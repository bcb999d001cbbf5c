//! Remote feed clients for the dashboard widgets: the curated video list,
//! the wallpaper list, the quote API, and the weather stack.
//!
//! Each client performs a single attempt per invocation — no retries, no
//! backoff — and the caller decides when to re-invoke.

pub mod quote;
pub mod videos;
pub mod wallpapers;
pub mod weather;

pub use quote::QuoteClient;
pub use videos::VideoFeedClient;
pub use wallpapers::WallpaperClient;
pub use weather::WeatherClient;

pub const USER_AGENT: &str = "atrium/0.1.0 (terminal dashboard)";
pub const HTTP_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(10);

/// A feed that could not be used this attempt: transport error, bad status,
/// malformed body, or an empty list all collapse into this one condition.
#[derive(Debug, thiserror::Error)]
#[error("feed unavailable: {reason}")]
pub struct Unavailable {
    pub reason: String,
}

impl Unavailable {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

pub(crate) fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(HTTP_TIMEOUT)
        .build()
        .expect("failed to create reqwest client")
}
