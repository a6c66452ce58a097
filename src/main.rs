//! vitrine - a terminal catalog browser with windowed infinite scrolling.
//!
//! Displays a bidirectionally scrollable list of products fetched
//! page-by-page from a remote HTTP API. At most ~30 items are held in
//! memory; scrolling near either edge of the viewport prefetches the next
//! page in that direction behind a trailing-edge debounce.

mod api;
mod app;
mod config;
mod error;
mod scroll;
mod widgets;
mod window;
mod worker;

use std::io::{self, Stdout};
use std::sync::mpsc;

use anyhow::Context;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;

use crate::api::CatalogClient;
use crate::app::Application;
use crate::worker::{CatalogWorker, FetchRequest};

fn main() -> anyhow::Result<()> {
    let _guard = init_logging().context("failed to initialize logging")?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let client = CatalogClient::new().context("failed to build catalog client")?;
    let (events_tx, events_rx) = mpsc::channel();
    let requester = runtime.block_on(CatalogWorker::spawn(client, events_tx));

    // One initial load of three pages; everything after is scroll-driven.
    requester.fetch(FetchRequest::initial());

    let mut app = Application::new(requester, events_rx);

    install_panic_hook();
    let mut terminal = setup_terminal().context("failed to set up terminal")?;
    let result = app.run(&mut terminal);
    restore_terminal(&mut terminal).context("failed to restore terminal")?;

    info!("exiting");
    result.map_err(Into::into)
}

/// Write logs to a file; the terminal itself belongs to the UI.
fn init_logging() -> anyhow::Result<WorkerGuard> {
    let dir = dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("vitrine");
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(&dir, "vitrine.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();

    Ok(guard)
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()
}

/// Restore the terminal before the default hook prints, so a panic
/// message is not lost to the alternate screen.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        default_hook(info);
    }));
}
