//! `TaskCal`: terminal task list and calendar planner.
//!
//! Launches the TUI with an empty, in-memory planner. Configuration via CLI
//! flags, environment variables, or config file
//! (`~/.config/taskcal/config.toml`).
//!
//! ```bash
//! cargo run --bin taskcal
//!
//! # Start in week view with Monday as the first day
//! cargo run --bin taskcal -- --view week --week-start monday
//!
//! # Verbose logging
//! TASKCAL_LOG=debug cargo run --bin taskcal
//! ```

use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tracing_appender::non_blocking::WorkerGuard;

use taskcal::app::App;
use taskcal::config::{AppConfig, CliArgs};
use taskcal::ui;

/// Capacity of the terminal input channel.
const INPUT_CHANNEL_CAPACITY: usize = 64;

/// How often the input reader checks whether the app has exited.
const INPUT_POLL: Duration = Duration::from_millis(100);

#[tokio::main]
async fn main() -> io::Result<()> {
    let cli = CliArgs::parse();

    // Load and resolve configuration (CLI args > config file > env > defaults).
    // A broken file still honours the CLI overrides.
    let (config, config_error) = match AppConfig::load(&cli) {
        Ok(c) => (c, None),
        Err(e) => {
            eprintln!("Warning: failed to load config: {e}");
            (AppConfig::from_cli(&cli), Some(e))
        }
    };

    // Initialize logging before terminal setup (logs go to file, not stdout).
    let _log_guard = init_logging(&cli.log_level, cli.log_file.as_deref());

    if let Some(e) = config_error {
        tracing::warn!(error = %e, "failed to load config, using CLI flags and defaults");
    }
    tracing::info!(?config, "taskcal starting");

    // Set up terminal.
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app.
    let result = run_app(&mut terminal, &config).await;

    // Restore terminal.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("taskcal exiting");
    result
}

/// Initialize file-based logging.
///
/// Logs are written to a file (never stdout, since ratatui owns the terminal).
/// Returns a [`WorkerGuard`] that must be held until shutdown to ensure all
/// buffered log entries are flushed.
fn init_logging(level: &str, file_path: Option<&Path>) -> Option<WorkerGuard> {
    let default_path = std::env::temp_dir().join("taskcal.log");
    let log_path = file_path.unwrap_or(&default_path);

    let log_dir = log_path.parent()?;
    let file_name = log_path.file_name()?.to_str()?;

    let file_appender = tracing_appender::rolling::never(log_dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(env_filter)
        .with_ansi(false)
        .init();

    Some(guard)
}

/// Main application loop.
///
/// Terminal input arrives over a channel from a blocking reader task; a
/// frame ticker advances the fanfare between key presses.
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &AppConfig,
) -> io::Result<()> {
    let mut app = App::new(config, chrono::Local::now().date_naive());

    let (input_tx, mut input_rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
    tokio::task::spawn_blocking(move || forward_input(&input_tx));

    let mut ticker = tokio::time::interval(config.tick_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        terminal.draw(|frame| ui::draw(frame, &app, Instant::now()))?;

        tokio::select! {
            input = input_rx.recv() => match input {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    app.handle_key_event(key, Instant::now());
                }
                // Resize and other events only need a redraw.
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e),
                None => return Ok(()),
            },
            _ = ticker.tick() => app.tick(Instant::now()),
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Read terminal events and forward them until the receiver is dropped.
fn forward_input(tx: &mpsc::Sender<io::Result<Event>>) {
    loop {
        match event::poll(INPUT_POLL) {
            Ok(true) => {
                let read = event::read();
                let failed = read.is_err();
                if tx.blocking_send(read).is_err() || failed {
                    return;
                }
            }
            Ok(false) => {
                if tx.is_closed() {
                    return;
                }
            }
            Err(e) => {
                let _ = tx.blocking_send(Err(e));
                return;
            }
        }
    }
}
