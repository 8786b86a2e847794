//! usertable binary entry point.
//!
//! Parses the command line, sets up optional file logging, initializes the
//! terminal in raw mode, runs the TUI event loop, and restores the terminal
//! state on exit.
//!
use crate::error::Result;
use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod api;
mod app;
mod error;
mod model;
mod table;
mod ui;

/// Browse, search and sort user records from a REST directory.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Base URL of the user directory API (records come from `<url>/users`)
    #[arg(
        long,
        env = "USERTABLE_API_URL",
        default_value = "https://jsonplaceholder.typicode.com"
    )]
    api_url: String,

    /// Rows per table page
    #[arg(long, env = "USERTABLE_PAGE_SIZE", default_value_t = table::DEFAULT_PAGE_SIZE)]
    page_size: usize,

    /// Append tracing output to this file (verbosity via RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// Initialize a Crossterm-backed `ratatui` terminal in raw mode.
fn init_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Program entry point: run the TUI and report any top-level error to stderr.
fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.page_size == 0 {
        return Err(error::simple_error("--page-size must be at least 1"));
    }

    // The terminal belongs to the UI, so logs go to a file or nowhere.
    if let Some(path) = &cli.log_file {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::sync::Arc::new(file))
            .with_ansi(false)
            .init();
    }

    let source = api::HttpUserSource::new(cli.api_url)?;
    let mut terminal = init_terminal().map_err(|e| format!("init terminal: {}", e))?;

    let res = app::run(&mut terminal, cli.page_size, source);

    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .ok();
    terminal.show_cursor().ok();

    if let Err(err) = res {
        eprintln!("application error: {err}");
    }
    Ok(())
}
