use crate::app::events::{Event, PlayerEvent};
use anyhow::Context;
use serde_json::json;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::{
    io::{AsyncBufReadExt, AsyncWriteExt, BufReader},
    net::UnixStream,
    process::{Child, Command},
    sync::mpsc,
};

/// Background video player: a muted fullscreen mpv driven over its JSON IPC
/// socket. Playback end and failure come back as app events so the selector
/// can advance.
#[derive(Debug)]
pub struct MpvHandle {
    child: Child,
    socket_path: PathBuf,
    writer: tokio::sync::Mutex<tokio::io::WriteHalf<UnixStream>>,
    request_id: AtomicU64,
}

impl MpvHandle {
    pub async fn spawn(
        event_tx: mpsc::Sender<Event>,
        log_file: Option<&std::path::Path>,
    ) -> anyhow::Result<Self> {
        let socket_path = std::env::temp_dir().join("atrium-mpv.sock");
        let _ = std::fs::remove_file(&socket_path);

        let mut cmd = Command::new("mpv");
        cmd.args([
            "--idle=yes",
            "--input-terminal=no",
            "--really-quiet",
            // Ambient background: muted, fullscreen, no on-screen controls.
            "--mute=yes",
            "--fullscreen",
            "--no-osc",
            "--loop-file=no",
        ]);
        if let Some(p) = log_file {
            cmd.arg(format!("--log-file={}", p.display()));
        }
        let child = cmd
            .arg(format!("--input-ipc-server={}", socket_path.display()))
            .stdin(std::process::Stdio::null())
            .stdout(std::process::Stdio::null())
            .stderr(std::process::Stdio::null())
            .spawn()
            .context("spawn mpv")?;

        // mpv creates the socket shortly after starting.
        let stream = connect_with_retry(&socket_path).await?;
        let (reader, writer) = tokio::io::split(stream);

        tokio::spawn(read_events_loop(reader, event_tx.clone()));

        let this = Self {
            child,
            socket_path,
            writer: tokio::sync::Mutex::new(writer),
            request_id: AtomicU64::new(1),
        };

        this.command(json!({"command":["request_log_messages", "warn"]}))
            .await?;
        this.command(json!({"command":["observe_property", 1, "pause"]}))
            .await?;
        this.command(json!({"command":["observe_property", 2, "eof-reached"]}))
            .await?;

        Ok(this)
    }

    /// Load and play a location: a URL or a session file path.
    pub async fn load(&self, location: &str) -> anyhow::Result<()> {
        self.command(json!({"command":["loadfile", location, "replace"]}))
            .await
    }

    pub async fn toggle_pause(&self) -> anyhow::Result<()> {
        self.command(json!({"command":["cycle", "pause"]})).await
    }

    async fn command(&self, mut v: serde_json::Value) -> anyhow::Result<()> {
        // Tag requests so replies carry structured errors back on the stream.
        if v.get("request_id").is_none() {
            let id = self.request_id.fetch_add(1, Ordering::Relaxed);
            if let serde_json::Value::Object(ref mut o) = v {
                o.insert("request_id".to_string(), serde_json::Value::from(id));
            }
        }
        let mut w = self.writer.lock().await;
        let mut line = serde_json::to_vec(&v).context("encode mpv json")?;
        line.push(b'\n');
        w.write_all(&line).await.context("write mpv ipc")?;
        w.flush().await.context("flush mpv ipc")?;
        Ok(())
    }
}

impl Drop for MpvHandle {
    fn drop(&mut self) {
        let _ = self.child.start_kill();
        let _ = std::fs::remove_file(&self.socket_path);
    }
}

async fn connect_with_retry(path: &PathBuf) -> anyhow::Result<UnixStream> {
    let deadline = tokio::time::Instant::now() + std::time::Duration::from_secs(5);
    loop {
        match UnixStream::connect(path).await {
            Ok(s) => return Ok(s),
            Err(e) => {
                if tokio::time::Instant::now() > deadline {
                    return Err(e).with_context(|| format!("connect to mpv ipc {}", path.display()));
                }
                tokio::time::sleep(std::time::Duration::from_millis(50)).await;
            }
        }
    }
}

async fn read_events_loop(reader: tokio::io::ReadHalf<UnixStream>, event_tx: mpsc::Sender<Event>) {
    let mut lines = BufReader::new(reader).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        if let Ok(v) = serde_json::from_str::<serde_json::Value>(&line) {
            // Command replies: {"request_id":..., "error":"..."}
            if let (Some(_rid), Some(err)) = (v.get("request_id"), v.get("error"))
                && let Some(err_s) = err.as_str()
                && err_s != "success"
            {
                let _ = event_tx
                    .send(Event::Player(PlayerEvent::Error(format!(
                        "mpv ipc error: {err_s}"
                    ))))
                    .await;
            }
            if let Some(pe) = map_mpv_event(&v) {
                let _ = event_tx.send(Event::Player(pe)).await;
            }
        }
    }
}

fn map_mpv_event(v: &serde_json::Value) -> Option<PlayerEvent> {
    match v.get("event")?.as_str()? {
        "property-change" => {
            let name = v.get("name")?.as_str()?;
            match name {
                "pause" => {
                    let paused = v.get("data")?.as_bool().unwrap_or(false);
                    Some(if paused {
                        PlayerEvent::Paused
                    } else {
                        PlayerEvent::Started
                    })
                }
                "eof-reached" => {
                    let eof = v.get("data")?.as_bool().unwrap_or(false);
                    if eof { Some(PlayerEvent::Ended) } else { None }
                }
                _ => None,
            }
        }
        "end-file" => {
            // A failing item ends with reason=error; everything else is a
            // normal end of playback.
            let reason = v.get("reason").and_then(|x| x.as_str()).unwrap_or("");
            if reason == "error" {
                let err = v.get("error").and_then(|x| x.as_str()).unwrap_or("unknown");
                Some(PlayerEvent::Error(format!("mpv end-file error: {err}")))
            } else {
                Some(PlayerEvent::Ended)
            }
        }
        "log-message" => {
            let level = v.get("level")?.as_str().unwrap_or("info");
            let text = v.get("text")?.as_str().unwrap_or("").trim();
            if (level == "warn" || level == "error") && !text.is_empty() {
                Some(PlayerEvent::Error(format!("mpv {level}: {text}")))
            } else {
                None
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_file_error_maps_to_player_error() {
        let v: serde_json::Value =
            serde_json::from_str(r#"{"event":"end-file","reason":"error","error":"loading failed"}"#)
                .unwrap();
        assert!(matches!(map_mpv_event(&v), Some(PlayerEvent::Error(_))));
    }

    #[test]
    fn end_file_eof_maps_to_ended() {
        let v: serde_json::Value =
            serde_json::from_str(r#"{"event":"end-file","reason":"eof"}"#).unwrap();
        assert!(matches!(map_mpv_event(&v), Some(PlayerEvent::Ended)));
    }

    #[test]
    fn pause_property_maps_to_pause_state() {
        let v: serde_json::Value = serde_json::from_str(
            r#"{"event":"property-change","name":"pause","data":true}"#,
        )
        .unwrap();
        assert!(matches!(map_mpv_event(&v), Some(PlayerEvent::Paused)));
    }
}
