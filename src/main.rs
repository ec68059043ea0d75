//! An interactive tree view over an in-memory file/folder hierarchy.
//!
//! Run the binary to browse the built-in sample tree, or pass a JSON file
//! describing your own tree.  Run with `--init-config` to write the default
//! configuration file.

mod app;
mod config;
mod core;
mod ui;

use std::fs::File;
use std::io::{self, stderr, Stderr};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};

use crate::app::{
    event::{spawn_event_reader, AppEvent},
    handler,
    state::AppState,
};
use crate::ui::screen;

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Interactive file/folder tree view")]
struct Cli {
    /// JSON file describing the tree (defaults to a built-in sample).
    tree: Option<PathBuf>,

    /// Write log output to this file instead of stderr.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Write the current configuration to the config file and exit.
    #[arg(long = "init-config")]
    init_config: bool,
}

type Term = Terminal<CrosstermBackend<Stderr>>;

fn init_tracing(log_file: Option<&PathBuf>) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::from_default_env();
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr) // never pollute stdout
                .init();
        }
    }
    Ok(())
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_ref())?;

    let user_config = crate::config::AppConfig::load();

    if cli.init_config {
        let path = user_config.save()?;
        println!("wrote {}", path.display());
        return Ok(());
    }

    // ── load tree ─────────────────────────────────────────────
    let tree = match &cli.tree {
        Some(path) => crate::core::load::load_tree(path)?,
        None => crate::core::sample::sample_tree(),
    };
    let mut state = AppState::new(tree, user_config);
    if let Some(path) = &cli.tree {
        state.title = path.display().to_string();
    }

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    let mut stderr_handle = stderr();
    execute!(stderr_handle, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stderr());
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut state).await;

    // ── teardown ──────────────────────────────────────────────
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

async fn run(terminal: &mut Term, state: &mut AppState) -> Result<()> {
    let mut events = spawn_event_reader(Duration::from_millis(250));

    loop {
        let size = terminal.size()?;
        state.terminal_area = Rect::new(0, 0, size.width, size.height);
        terminal.draw(|frame| screen::draw(frame, state))?;

        let Some(event) = events.recv().await else {
            break;
        };
        match event {
            AppEvent::Key(k) => handler::handle_key(state, k),
            AppEvent::Mouse(m) => handler::handle_mouse(state, m),
            AppEvent::Resize(w, h) => handler::handle_resize(state, w, h),
            AppEvent::Tick => {}
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}
