use anyhow::Context;
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;

/// Metadata for a stored media record. The blob itself never leaves this
/// module except through [`Storage::read_media_blob`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaRecord {
    pub id: i64,
    pub name: String,
    pub mime: String,
    pub size: u64,
    pub added_at: i64,
}

pub struct Storage {
    conn: Connection,
}

impl Storage {
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create dir {}", parent.display()))?;
        }

        let conn = Connection::open(path).with_context(|| format!("open {}", path.display()))?;
        let s = Self { conn };
        s.init_schema()?;
        Ok(s)
    }

    #[cfg(test)]
    pub fn open_in_memory() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory().context("open in-memory db")?;
        let s = Self { conn };
        s.init_schema()?;
        Ok(s)
    }

    fn init_schema(&self) -> anyhow::Result<()> {
        self.conn
            .execute_batch(
                r#"
CREATE TABLE IF NOT EXISTS media (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  name TEXT NOT NULL,
  mime TEXT NOT NULL,
  size INTEGER NOT NULL,
  data BLOB NOT NULL,
  added_at INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS kv (
  key TEXT PRIMARY KEY,
  value_json TEXT NOT NULL,
  updated_at INTEGER NOT NULL
);
"#,
            )
            .context("init schema")?;
        Ok(())
    }

    pub fn insert_media(
        &self,
        name: &str,
        mime: &str,
        data: &[u8],
        now_unix: i64,
    ) -> anyhow::Result<i64> {
        self.conn
            .execute(
                "INSERT INTO media(name, mime, size, data, added_at) VALUES(?1, ?2, ?3, ?4, ?5)",
                params![name, mime, data.len() as i64, data, now_unix],
            )
            .context("insert media")?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Metadata only, oldest first (import order).
    pub fn list_media(&self) -> anyhow::Result<Vec<MediaRecord>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, mime, size, added_at FROM media ORDER BY id")
            .context("prepare list media")?;
        let records = stmt
            .query_map([], |row| {
                Ok(MediaRecord {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    mime: row.get(2)?,
                    size: row.get::<_, i64>(3)? as u64,
                    added_at: row.get(4)?,
                })
            })
            .context("query media")?
            .collect::<Result<Vec<_>, _>>()
            .context("read media rows")?;
        Ok(records)
    }

    pub fn read_media_blob(&self, id: i64) -> anyhow::Result<Option<Vec<u8>>> {
        self.conn
            .query_row("SELECT data FROM media WHERE id=?1", params![id], |row| {
                row.get(0)
            })
            .optional()
            .context("read media blob")
    }

    /// Delete by id. Absent ids are a no-op, not an error.
    pub fn delete_media(&self, id: i64) -> anyhow::Result<()> {
        self.conn
            .execute("DELETE FROM media WHERE id=?1", params![id])
            .context("delete media")?;
        Ok(())
    }

    pub fn get_kv(&self, key: &str) -> anyhow::Result<Option<String>> {
        self.conn
            .query_row("SELECT value_json FROM kv WHERE key=?1", params![key], |row| {
                row.get(0)
            })
            .optional()
            .context("get kv")
    }

    pub fn put_kv(&self, key: &str, value_json: &str, now_unix: i64) -> anyhow::Result<()> {
        self.conn
            .execute(
                r#"
INSERT INTO kv(key, value_json, updated_at)
VALUES(?1, ?2, ?3)
ON CONFLICT(key) DO UPDATE SET
  value_json=excluded.value_json,
  updated_at=excluded.updated_at
"#,
                params![key, value_json, now_unix],
            )
            .context("put kv")?;
        Ok(())
    }

    #[allow(dead_code)]
    pub fn delete_kv(&self, key: &str) -> anyhow::Result<()> {
        self.conn
            .execute("DELETE FROM kv WHERE key=?1", params![key])
            .context("delete kv")?;
        Ok(())
    }
}

/// Cheap cloneable handle for using storage from spawned tasks: opens a
/// connection per operation rather than sharing one across threads.
#[derive(Clone)]
pub struct StorageHandle {
    path: std::path::PathBuf,
}

impl StorageHandle {
    pub fn new(path: std::path::PathBuf) -> Self {
        Self { path }
    }

    pub fn open(&self) -> anyhow::Result<Storage> {
        Storage::open(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_insert_list_delete() {
        let s = Storage::open_in_memory().unwrap();
        let id = s.insert_media("clip.mp4", "video/mp4", b"abc", 1_000).unwrap();
        let id2 = s.insert_media("b.webm", "video/webm", b"defg", 1_001).unwrap();
        assert!(id2 > id);

        let records = s.list_media().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "clip.mp4");
        assert_eq!(records[0].size, 3);
        assert_eq!(records[1].id, id2);

        assert_eq!(s.read_media_blob(id).unwrap().unwrap(), b"abc");

        s.delete_media(id).unwrap();
        assert_eq!(s.list_media().unwrap().len(), 1);
        assert!(s.read_media_blob(id).unwrap().is_none());

        // Deleting an absent id is a no-op.
        s.delete_media(9999).unwrap();
    }

    #[test]
    fn kv_round_trip_and_overwrite() {
        let s = Storage::open_in_memory().unwrap();
        assert!(s.get_kv("user_videos").unwrap().is_none());

        s.put_kv("user_videos", r#"["a"]"#, 1).unwrap();
        assert_eq!(s.get_kv("user_videos").unwrap().unwrap(), r#"["a"]"#);

        s.put_kv("user_videos", r#"["a","b"]"#, 2).unwrap();
        assert_eq!(s.get_kv("user_videos").unwrap().unwrap(), r#"["a","b"]"#);

        s.delete_kv("user_videos").unwrap();
        assert!(s.get_kv("user_videos").unwrap().is_none());
    }
}
