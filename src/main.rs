//! A terminal UI for tracking what you and your friends owe each other.
//!
//! Pick a friend, enter a bill and your share of it, say who paid, and the
//! friend's balance is adjusted. Nothing is saved between runs.

mod app;
mod config;
mod core;
mod ui;

use std::io::{self, stdout, Stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::app::{
    event::{spawn_event_reader, AppEvent},
    handler,
    state::AppState,
};
use crate::config::AppConfig;

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Split bills with friends")]
struct Cli {
    /// Read settings from this file instead of the default location.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Do not capture the mouse (keyboard only).
    #[arg(long = "no-mouse")]
    no_mouse: bool,

    /// Print the effective configuration and exit.
    #[arg(long = "print-config")]
    print_config: bool,
}

type Tui = Terminal<CrosstermBackend<Stdout>>;

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    // Only logs when RUST_LOG is set; stderr keeps the UI on stdout clean.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref());
    if cli.no_mouse {
        config.mouse = false;
    }
    if cli.print_config {
        print!("{}", config.serialise());
        return Ok(());
    }

    let mouse = config.mouse;
    let mut state = AppState::new(config);

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    let mut stdout_handle = stdout();
    execute!(stdout_handle, EnterAlternateScreen)?;
    if mouse {
        execute!(stdout_handle, EnableMouseCapture)?;
    }
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let result = run(&mut terminal, &mut state).await;

    // ── teardown ──────────────────────────────────────────────
    disable_raw_mode()?;
    if mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Draw, wait for the next input event, apply it; until the user quits.
async fn run(terminal: &mut Tui, state: &mut AppState) -> Result<()> {
    let mut events = spawn_event_reader(Duration::from_millis(100));

    loop {
        terminal.draw(|frame| ui::draw(frame, state))?;

        tokio::select! {
            biased;

            event = events.recv() => {
                match event {
                    Some(AppEvent::Key(k)) => handler::handle_key(state, k),
                    Some(AppEvent::Mouse(m)) => handler::handle_mouse(state, m),
                    Some(AppEvent::Resize(w, h)) => tracing::trace!(w, h, "resize"),
                    None => {
                        tracing::warn!("event reader stopped");
                        break;
                    }
                }
            }

            _ = tokio::signal::ctrl_c() => {
                tracing::info!("interrupted");
                break;
            }
        }

        if state.should_quit {
            break;
        }
    }

    tracing::info!(friends = state.friends.len(), "exiting");
    Ok(())
}
