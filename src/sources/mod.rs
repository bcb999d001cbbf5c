//! User-submitted video URLs, allow-listed and persisted as one JSON list.

use crate::storage::Storage;
use anyhow::Context;

pub const KV_KEY: &str = "user_videos";

const VIDEO_EXTENSIONS: [&str; 4] = [".mp4", ".webm", ".ogg", ".mov"];
const KNOWN_HOSTS: [&str; 5] = [
    "pexels.com",
    "pixabay.com",
    "catbox.moe",
    "youtube.com",
    "vimeo.com",
];

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("invalid video URL")]
    InvalidUrl,
    #[error("video already exists")]
    Duplicate,
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// A URL qualifies when it parses as http(s) and either ends in a known
/// video extension or points at a known hosting provider. Script markers are
/// rejected outright even though URL parsing would usually catch them.
pub fn validate(raw: &str) -> bool {
    let lowered = raw.to_ascii_lowercase();
    if lowered.contains("javascript:") || lowered.contains("<script") {
        return false;
    }

    let Ok(parsed) = url::Url::parse(raw) else {
        return false;
    };
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return false;
    }

    let path = parsed.path().to_ascii_lowercase();
    let has_video_extension = VIDEO_EXTENSIONS.iter().any(|ext| path.ends_with(ext));
    let known_host = parsed
        .host_str()
        .map(|host| KNOWN_HOSTS.iter().any(|known| host.contains(known)))
        .unwrap_or(false);

    has_video_extension || known_host
}

pub fn load(storage: &Storage) -> anyhow::Result<Vec<String>> {
    let Some(json) = storage.get_kv(KV_KEY)? else {
        return Ok(Vec::new());
    };
    // Corrupt stored lists degrade to empty rather than poisoning startup.
    Ok(serde_json::from_str(&json).unwrap_or_default())
}

fn persist(storage: &Storage, list: &[String], now_unix: i64) -> anyhow::Result<()> {
    let json = serde_json::to_string(list).context("serialize user videos")?;
    storage.put_kv(KV_KEY, &json, now_unix)
}

/// Append a validated URL. Exact case-sensitive duplicates are rejected and
/// leave the stored list untouched.
pub fn add(storage: &Storage, url: &str, now_unix: i64) -> Result<Vec<String>, SourceError> {
    if !validate(url) {
        return Err(SourceError::InvalidUrl);
    }
    let mut list = load(storage)?;
    if list.iter().any(|existing| existing == url) {
        return Err(SourceError::Duplicate);
    }
    list.push(url.to_string());
    persist(storage, &list, now_unix)?;
    Ok(list)
}

/// Remove an exact match; absent URLs are a no-op.
pub fn remove(storage: &Storage, url: &str, now_unix: i64) -> Result<Vec<String>, SourceError> {
    let mut list = load(storage)?;
    let before = list.len();
    list.retain(|existing| existing != url);
    if list.len() != before {
        persist(storage, &list, now_unix)?;
    }
    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_known_host_and_extension() {
        assert!(validate("https://pexels.com/clip"));
        assert!(validate("https://example.com/a.mp4"));
        assert!(validate("https://cdn.example.com/v/a.webm?x=1"));
    }

    #[test]
    fn validate_rejects_bad_scheme_extension_and_injection() {
        assert!(!validate("ftp://x.com/a.mp4"));
        assert!(!validate("https://example.com/a.txt"));
        assert!(!validate("not a url"));
        assert!(!validate("javascript:alert(1)"));
        assert!(!validate("https://example.com/<script>.mp4"));
    }

    #[test]
    fn add_rejects_duplicates_without_mutating() {
        let storage = Storage::open_in_memory().unwrap();
        let list = add(&storage, "https://example.com/a.mp4", 1).unwrap();
        assert_eq!(list, vec!["https://example.com/a.mp4".to_string()]);

        let err = add(&storage, "https://example.com/a.mp4", 2).unwrap_err();
        assert!(matches!(err, SourceError::Duplicate));
        assert_eq!(load(&storage).unwrap().len(), 1);

        // Case-sensitive comparison: a differently-cased URL is distinct.
        let list = add(&storage, "https://example.com/A.mp4", 3).unwrap();
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn add_rejects_invalid_url() {
        let storage = Storage::open_in_memory().unwrap();
        let err = add(&storage, "https://example.com/nope.txt", 1).unwrap_err();
        assert!(matches!(err, SourceError::InvalidUrl));
        assert!(load(&storage).unwrap().is_empty());
    }

    #[test]
    fn remove_is_exact_and_tolerates_absent() {
        let storage = Storage::open_in_memory().unwrap();
        add(&storage, "https://example.com/a.mp4", 1).unwrap();
        add(&storage, "https://example.com/b.mp4", 2).unwrap();

        let list = remove(&storage, "https://example.com/a.mp4", 3).unwrap();
        assert_eq!(list, vec!["https://example.com/b.mp4".to_string()]);

        let list = remove(&storage, "https://example.com/absent.mp4", 4).unwrap();
        assert_eq!(list.len(), 1);
    }
}
