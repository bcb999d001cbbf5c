//! Local media library: user-imported video files kept as blobs in the
//! block store, handed out as session-scoped file references.

use crate::storage::{MediaRecord, Storage};
use anyhow::Context;
use std::path::{Path, PathBuf};

pub const MAX_MEDIA_BYTES: u64 = 100 * 1024 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    #[error("not a video file")]
    InvalidType,
    #[error("file exceeds {} MiB", MAX_MEDIA_BYTES / (1024 * 1024))]
    TooLarge,
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// A playable reference to a stored record, valid for the current session
/// only. The path points into the session temp dir and disappears with it.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalMedia {
    pub id: i64,
    pub name: String,
    pub path: PathBuf,
}

fn mime_for_extension(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "mp4" | "m4v" => Some("video/mp4"),
        "webm" => Some("video/webm"),
        "ogg" | "ogv" => Some("video/ogg"),
        "mov" => Some("video/quicktime"),
        "mkv" => Some("video/x-matroska"),
        "avi" => Some("video/x-msvideo"),
        _ => None,
    }
}

/// Gate an import before any bytes are read: the file must report a video
/// media type and fit the size cap. Returns the mime on pass.
pub fn validate_import(path: &Path, size: u64) -> Result<&'static str, MediaError> {
    let mime = mime_for_extension(path).ok_or(MediaError::InvalidType)?;
    if size > MAX_MEDIA_BYTES {
        return Err(MediaError::TooLarge);
    }
    Ok(mime)
}

/// Import a file into the block store. No partial writes: validation happens
/// before the blob is read, and persistence is a single insert.
pub fn add(storage: &Storage, path: &Path, now_unix: i64) -> Result<MediaRecord, MediaError> {
    let meta = std::fs::metadata(path)
        .with_context(|| format!("stat {}", path.display()))
        .map_err(MediaError::Storage)?;
    let mime = validate_import(path, meta.len())?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "unnamed".to_string());
    let data = std::fs::read(path)
        .with_context(|| format!("read {}", path.display()))
        .map_err(MediaError::Storage)?;

    let id = storage.insert_media(&name, mime, &data, now_unix)?;
    Ok(MediaRecord {
        id,
        name,
        mime: mime.to_string(),
        size: data.len() as u64,
        added_at: now_unix,
    })
}

/// List all records, each with a freshly minted session reference.
pub fn list(storage: &Storage, session: &MediaSession) -> Result<Vec<LocalMedia>, MediaError> {
    let mut out = Vec::new();
    for record in storage.list_media()? {
        let Some(blob) = storage.read_media_blob(record.id)? else {
            continue;
        };
        let path = session.materialize(&record, &blob)?;
        out.push(LocalMedia {
            id: record.id,
            name: record.name,
            path,
        });
    }
    Ok(out)
}

/// Delete by id; absent ids are a no-op. Already-issued session references
/// stay on disk until the session ends — callers discard them themselves.
pub fn remove(storage: &Storage, id: i64) -> Result<(), MediaError> {
    storage.delete_media(id)?;
    Ok(())
}

/// Owns the temp directory backing session references. Dropping it at
/// teardown releases every materialized file.
pub struct MediaSession {
    dir: tempfile::TempDir,
}

impl MediaSession {
    pub fn new() -> anyhow::Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix("atrium-media-")
            .tempdir()
            .context("create session dir")?;
        Ok(Self { dir })
    }

    fn materialize(&self, record: &MediaRecord, blob: &[u8]) -> anyhow::Result<PathBuf> {
        let ext = match record.mime.as_str() {
            "video/webm" => "webm",
            "video/ogg" => "ogv",
            "video/quicktime" => "mov",
            "video/x-matroska" => "mkv",
            "video/x-msvideo" => "avi",
            _ => "mp4",
        };
        let path = self.dir.path().join(format!("{}.{ext}", record.id));
        std::fs::write(&path, blob).with_context(|| format!("write {}", path.display()))?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn validate_rejects_non_video_extension() {
        let err = validate_import(Path::new("notes.txt"), 10).unwrap_err();
        assert!(matches!(err, MediaError::InvalidType));
        let err = validate_import(Path::new("noext"), 10).unwrap_err();
        assert!(matches!(err, MediaError::InvalidType));
    }

    #[test]
    fn validate_rejects_oversized_file() {
        // 101 MiB is over the cap; exactly 100 MiB is allowed.
        let err = validate_import(Path::new("big.mp4"), 101 * 1024 * 1024).unwrap_err();
        assert!(matches!(err, MediaError::TooLarge));
        assert_eq!(
            validate_import(Path::new("ok.mp4"), MAX_MEDIA_BYTES).unwrap(),
            "video/mp4"
        );
    }

    #[test]
    fn oversized_add_leaves_no_record() {
        let storage = Storage::open_in_memory().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.mp4");
        // Sparse-ish: the size gate fires on metadata, before any read.
        let f = std::fs::File::create(&path).unwrap();
        f.set_len(MAX_MEDIA_BYTES + 1024 * 1024).unwrap();

        let err = add(&storage, &path, 0).unwrap_err();
        assert!(matches!(err, MediaError::TooLarge));
        assert!(storage.list_media().unwrap().is_empty());
    }

    #[test]
    fn add_list_remove_round_trip() {
        let storage = Storage::open_in_memory().unwrap();
        let session = MediaSession::new().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clip.webm");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(b"webm-bytes").unwrap();
        drop(f);

        let record = add(&storage, &path, 42).unwrap();
        assert_eq!(record.mime, "video/webm");
        assert_eq!(record.size, 10);

        let listed = list(&storage, &session).unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "clip.webm");
        // The reference is a session file, not the import source.
        assert_ne!(listed[0].path, path);
        assert_eq!(std::fs::read(&listed[0].path).unwrap(), b"webm-bytes");

        remove(&storage, record.id).unwrap();
        assert!(list(&storage, &session).unwrap().is_empty());
        remove(&storage, record.id).unwrap(); // absent id: no-op
    }
}
