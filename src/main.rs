//! user-table binary entry point.
//!
//! Parses configuration, starts the tokio runtime used for the HTTP request,
//! initializes the terminal in raw mode, runs the TUI event loop, and
//! restores the terminal state on exit.
//!
use anyhow::Context;
use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::runtime::Builder;

use user_table::Result;
use user_table::api::UserApi;
use user_table::app::{self, AppState, Theme};
use user_table::config::CliArgs;
use user_table::logging;

/// Initialize a Crossterm-backed `ratatui` terminal in raw mode.
fn init_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Program entry point: run the TUI and report any top-level error to stderr.
fn main() -> Result<()> {
    let args = CliArgs::parse();
    logging::init_tracing(args.log_file.as_deref())?;

    let runtime = Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .context("create tokio runtime")?;

    let api = UserApi::new(args.url);
    let app_state = AppState::new(Theme::load(&args.theme));
    tracing::info!(url = api.url(), "starting user-table");

    let mut terminal = init_terminal().context("init terminal")?;

    let res = app::run(&mut terminal, runtime.handle(), &api, app_state);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    if let Err(err) = res {
        tracing::error!(error = %err, "application error");
        eprintln!("application error: {err:#}");
    }
    Ok(())
}
