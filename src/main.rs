//! questlist binary entrypoint: lays out a panel snapshot with the stored options.

mod args;

use std::fmt;
use std::process::ExitCode;
use std::sync::{Arc, OnceLock};

use clap::Parser;
use tokio::sync::mpsc;

use questlist::app::{HostEvent, QuestListEngine, Runtime};
use questlist::catalog::Catalog;
use questlist::config::{FileConfigStore, logs_dir, settings_path};
use questlist::logic::menu::{self, RESET};
use questlist::surface::{MemoryMenu, MemoryPanel, MenuSurface};

use args::{Args, determine_log_level, load_panel, load_player};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Target text used for the quest tab menu.
const QUEST_TAB_TARGET: &str = "Quest List";

struct QuestlistTimer;

impl tracing_subscriber::fmt::time::FormatTime for QuestlistTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Local::now()
            .format("%Y-%m-%d-T %H:%M:%S")
            .to_string();
        w.write_str(&ts)
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Install the global tracing subscriber.
///
/// Inputs:
/// - `level`: Default filter when `RUST_LOG` is unset.
///
/// Details:
/// - Logs go to `~/.config/questlist/logs/questlist.log`; stderr if the file cannot be opened.
fn init_logging(level: &str) {
    let mut log_path = logs_dir();
    log_path.push("questlist.log");
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(QuestlistTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            // Fallback: stderr keeps the CLI usable on read-only homes
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_timer(QuestlistTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

/// What: Load inputs, replay the requested clicks through the runtime and print the panel.
///
/// Inputs:
/// - `args`: Parsed command line.
///
/// Output:
/// - `Ok(())` once the panel was printed.
///
/// # Errors
/// - Unreadable snapshot, catalog or output serialization failures.
async fn run(args: &Args) -> Result<()> {
    let panel = MemoryPanel::from_snapshot(load_panel(&args.panel)?);
    let catalog = match &args.catalog {
        Some(path) => Catalog::load(path)?,
        None => Catalog::builtin().clone(),
    };
    let store = FileConfigStore::open(settings_path(args.settings.as_deref()));
    if let Err(e) = store.validate() {
        tracing::warn!(path = %store.path().display(), error = %e, "[Config] Settings file has invalid values");
    }

    let mut runtime = Runtime::new(
        QuestListEngine::new(Arc::new(catalog)),
        panel,
        MemoryMenu::default(),
        store,
    );
    if let Some(path) = &args.player {
        runtime = runtime.with_player(load_player(path)?);
    }

    let (tx, rx) = mpsc::unbounded_channel();
    let _ = tx.send(HostEvent::PanelLoaded);
    let clicks = args
        .reset
        .then(|| RESET.to_string())
        .into_iter()
        .chain(args.clicks.iter().cloned());
    for label in clicks {
        let _ = tx.send(HostEvent::MenuOpened {
            target: QUEST_TAB_TARGET.to_string(),
            on_quest_tab: true,
        });
        let _ = tx.send(HostEvent::MenuEntryClicked { label });
    }
    drop(tx);
    let runtime = runtime.run(rx).await;

    if args.menu {
        let mut fresh = MemoryMenu::default();
        menu::contribute(&mut fresh, &runtime.options(), QUEST_TAB_TARGET);
        for entry in fresh.entries() {
            if entry.action.is_some() {
                println!("{}", entry.label);
            }
        }
    }
    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&runtime.panel().snapshot())?
        );
    } else {
        print!("{}", runtime.panel());
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&determine_log_level(&args));
    tracing::info!(panel = %args.panel.display(), "questlist starting");
    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "questlist failed");
            eprintln!("questlist: {err}");
            ExitCode::FAILURE
        }
    }
}
