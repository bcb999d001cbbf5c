//! Free-form notes text, persisted as one JSON string in the kv store.

use crate::storage::Storage;
use anyhow::Context;

pub const KV_KEY: &str = "notes";

pub fn load(storage: &Storage) -> anyhow::Result<String> {
    let Some(json) = storage.get_kv(KV_KEY)? else {
        return Ok(String::new());
    };
    Ok(serde_json::from_str(&json).unwrap_or_default())
}

pub fn save(storage: &Storage, text: &str, now_unix: i64) -> anyhow::Result<()> {
    let json = serde_json::to_string(text).context("serialize notes")?;
    storage.put_kv(KV_KEY, &json, now_unix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_and_missing_default() {
        let storage = Storage::open_in_memory().unwrap();
        assert_eq!(load(&storage).unwrap(), "");

        save(&storage, "ship the release\nwater plants", 1).unwrap();
        assert_eq!(load(&storage).unwrap(), "ship the release\nwater plants");

        save(&storage, "", 2).unwrap();
        assert_eq!(load(&storage).unwrap(), "");
    }
}
