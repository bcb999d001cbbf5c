//! Quick links: named shortcut URLs shown on the dashboard, user-ordered.

use crate::storage::Storage;
use anyhow::Context;
use serde::{Deserialize, Serialize};

pub const KV_KEY: &str = "quick_links";

pub const MAX_LINKS: usize = 12;
pub const NAME_MAX: usize = 20;
pub const URL_MAX: usize = 500;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickLink {
    pub name: String,
    pub url: String,
}

impl QuickLink {
    fn clamped(mut self) -> Self {
        self.name.truncate(floor_char_boundary(&self.name, NAME_MAX));
        self.url.truncate(floor_char_boundary(&self.url, URL_MAX));
        self
    }
}

fn floor_char_boundary(s: &str, max: usize) -> usize {
    if s.len() <= max {
        return s.len();
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    end
}

pub fn defaults() -> Vec<QuickLink> {
    [
        ("Gmail", "https://mail.google.com"),
        ("YouTube", "https://youtube.com"),
        ("GitHub", "https://github.com"),
        ("Reddit", "https://reddit.com"),
        ("Twitter", "https://x.com"),
        ("ChatGPT", "https://chat.openai.com"),
    ]
    .into_iter()
    .map(|(name, url)| QuickLink {
        name: name.to_string(),
        url: url.to_string(),
    })
    .collect()
}

/// Load stored links, clamped to caps. Missing or corrupt storage yields the
/// built-in default set.
pub fn load(storage: &Storage) -> anyhow::Result<Vec<QuickLink>> {
    let Some(json) = storage.get_kv(KV_KEY)? else {
        return Ok(defaults());
    };
    match serde_json::from_str::<Vec<QuickLink>>(&json) {
        Ok(links) => Ok(links
            .into_iter()
            .take(MAX_LINKS)
            .map(QuickLink::clamped)
            .collect()),
        Err(e) => {
            tracing::warn!("corrupt quick links: {e}");
            Ok(defaults())
        }
    }
}

/// Persist the list in display order, dropping entries beyond the cap and
/// clamping field lengths.
pub fn save(storage: &Storage, links: &[QuickLink], now_unix: i64) -> anyhow::Result<()> {
    let clamped: Vec<QuickLink> = links
        .iter()
        .take(MAX_LINKS)
        .cloned()
        .map(QuickLink::clamped)
        .collect();
    let json = serde_json::to_string(&clamped).context("serialize quick links")?;
    storage.put_kv(KV_KEY, &json, now_unix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(name: &str, url: &str) -> QuickLink {
        QuickLink {
            name: name.to_string(),
            url: url.to_string(),
        }
    }

    #[test]
    fn missing_storage_yields_defaults() {
        let storage = Storage::open_in_memory().unwrap();
        assert_eq!(load(&storage).unwrap(), defaults());
    }

    #[test]
    fn corrupt_storage_yields_defaults() {
        let storage = Storage::open_in_memory().unwrap();
        storage.put_kv(KV_KEY, "{broken", 0).unwrap();
        assert_eq!(load(&storage).unwrap(), defaults());
    }

    #[test]
    fn save_preserves_order_and_caps_count() {
        let storage = Storage::open_in_memory().unwrap();
        let many: Vec<QuickLink> = (0..20)
            .map(|i| link(&format!("l{i}"), &format!("https://x.com/{i}")))
            .collect();
        save(&storage, &many, 0).unwrap();

        let loaded = load(&storage).unwrap();
        assert_eq!(loaded.len(), MAX_LINKS);
        assert_eq!(loaded[0].name, "l0");
        assert_eq!(loaded[11].name, "l11");
    }

    #[test]
    fn fields_are_length_clamped() {
        let storage = Storage::open_in_memory().unwrap();
        let long = link(&"n".repeat(50), &format!("https://x.com/{}", "u".repeat(600)));
        save(&storage, &[long], 0).unwrap();

        let loaded = load(&storage).unwrap();
        assert_eq!(loaded[0].name.len(), NAME_MAX);
        assert_eq!(loaded[0].url.len(), URL_MAX);
    }
}
