mod app;
mod clock;
mod config;
mod feeds;
mod input;
mod library;
mod links;
mod notes;
mod player;
mod playlist;
mod sources;
mod storage;
mod tui;

use anyhow::Context;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "atrium", version, about = "Terminal start page: ambient background, clock, weather, quick links")]
struct Cli {
    /// Override config file path.
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the interactive dashboard (default).
    Tui,
    /// Print the merged playback list to stdout (headless).
    Playlist,
    /// Fetch and print a quote (headless).
    Quote,
    /// Fetch and print the weather (headless).
    Weather,
    /// Print the quick links (headless).
    Links,

    /// Local media library management.
    Media {
        #[command(subcommand)]
        cmd: MediaCommand,
    },

    /// User video URL management.
    Source {
        #[command(subcommand)]
        cmd: SourceCommand,
    },
}

#[derive(Debug, Subcommand)]
enum MediaCommand {
    /// Import a video file into the library.
    Add { path: std::path::PathBuf },
    /// List stored media records.
    List,
    /// Remove a record by id.
    Rm { id: i64 },
}

#[derive(Debug, Subcommand)]
enum SourceCommand {
    /// Add an allow-listed video URL.
    Add { url: String },
    /// List user URLs.
    List,
    /// Remove a URL (exact match).
    Rm { url: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cli = Cli::parse();
    let cfg = config::load(cli.config.as_deref()).context("load config")?;
    let cfg_path = match cli.config.clone() {
        Some(p) => p,
        None => config::default_config_path().context("default config path")?,
    };

    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => {
            let mut terminal = tui::TerminalGuard::enter().context("init terminal")?;
            let mut app = app::App::new(cfg, cfg_path)?;
            app.run(terminal.terminal_mut()).await?;
        }
        Command::Playlist => {
            let storage = open_storage(&cfg)?;
            let session = library::MediaSession::new()?;

            let (remote, feed_note) = if cfg.background.local_only {
                (Vec::new(), Some("local-only mode".to_string()))
            } else {
                match feeds::VideoFeedClient::new().fetch().await {
                    Ok(urls) => (urls, None),
                    Err(e) => (Vec::new(), Some(e.reason)),
                }
            };
            let user = sources::load(&storage)?;
            let local = library::list(&storage, &session)
                .map_err(|e| anyhow::anyhow!(e.to_string()))?;

            let mut playlist = playlist::Playlist::new();
            playlist.rebuild(remote, user, local);

            if let Some(note) = feed_note {
                eprintln!("(curated feed skipped: {note})");
            }
            for (i, entry) in playlist.entries().iter().enumerate() {
                let tag = match entry {
                    playlist::Entry::Remote(_) => "curated",
                    playlist::Entry::User(_) => "url",
                    playlist::Entry::Local(_) => "local",
                };
                println!("{:02}. [{tag}] {}", i + 1, entry.display_name());
            }
        }
        Command::Quote => {
            println!("\"{}\"", feeds::QuoteClient::new().fetch().await);
        }
        Command::Weather => {
            let storage = open_storage(&cfg)?;
            let now = app::now_unix();

            let report = match feeds::weather::cached(&storage, now)? {
                Some(report) => report,
                None => {
                    let client = feeds::WeatherClient::new();
                    let (lat, lon) = match cfg.weather.latitude.zip(cfg.weather.longitude) {
                        Some(pair) => pair,
                        None => client.locate().await.context("locate")?,
                    };
                    let report = client.fetch(lat, lon).await.context("fetch weather")?;
                    feeds::weather::cache(&storage, &report, now)?;
                    report
                }
            };
            println!(
                "{} {}°C {} — {}",
                report.condition.glyph(report.is_day),
                report.temp_c,
                report.condition.label(),
                report.location
            );
        }
        Command::Links => {
            let storage = open_storage(&cfg)?;
            for link in links::load(&storage)? {
                println!("{:<20} {}", link.name, link.url);
            }
        }
        Command::Media { cmd } => {
            let storage = open_storage(&cfg)?;
            match cmd {
                MediaCommand::Add { path } => {
                    match library::add(&storage, &path, app::now_unix()) {
                        Ok(record) => {
                            println!("Imported {} (id={}, {} bytes)", record.name, record.id, record.size);
                        }
                        Err(library::MediaError::Storage(e)) => return Err(e),
                        Err(e) => {
                            eprintln!("Rejected: {e}");
                            std::process::exit(1);
                        }
                    }
                }
                MediaCommand::List => {
                    for record in storage.list_media()? {
                        println!(
                            "{:>4}  {:<40} {:>10} bytes  {}",
                            record.id, record.name, record.size, record.mime
                        );
                    }
                }
                MediaCommand::Rm { id } => {
                    library::remove(&storage, id).map_err(|e| anyhow::anyhow!(e.to_string()))?;
                    println!("Removed {id} (if present)");
                }
            }
        }
        Command::Source { cmd } => {
            let storage = open_storage(&cfg)?;
            match cmd {
                SourceCommand::Add { url } => match sources::add(&storage, &url, app::now_unix()) {
                    Ok(list) => println!("Added. {} source(s).", list.len()),
                    Err(sources::SourceError::Storage(e)) => return Err(e),
                    Err(e) => {
                        eprintln!("Rejected: {e}");
                        std::process::exit(1);
                    }
                },
                SourceCommand::List => {
                    for url in sources::load(&storage)? {
                        println!("{url}");
                    }
                }
                SourceCommand::Rm { url } => {
                    sources::remove(&storage, &url, app::now_unix())
                        .map_err(|e| anyhow::anyhow!(e.to_string()))?;
                    println!("Removed (if present)");
                }
            }
        }
    }

    Ok(())
}

fn open_storage(cfg: &config::Config) -> anyhow::Result<storage::Storage> {
    storage::Storage::open(&cfg.paths.data_dir.join("atrium.sqlite3"))
}
