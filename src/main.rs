//! Registration TUI - terminal registration form
//!
//! A Ratatui-based form with inline validation that hands a valid
//! submission to a read-only confirmation screen.

mod app;
mod config;
mod logging;
mod platform;
mod state;
mod storage;
mod ui;
mod validation;

use anyhow::Result;
use app::App;
use config::RegistrationConfig;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

/// How long to wait for input before redrawing
const POLL_INTERVAL: Duration = Duration::from_millis(100);

#[tokio::main]
async fn main() -> Result<()> {
    let (config, source) = RegistrationConfig::load_or_create()?;

    // Hold the guard until exit so buffered log lines are flushed
    let _log_guard = logging::init_logging(&config)?;
    match RegistrationConfig::config_path() {
        Some(path) => tracing::info!(path = %path.display(), ?source, "configuration loaded"),
        None => tracing::info!(?source, "configuration loaded"),
    }

    let mut app = App::new(&config)?;
    app.start().await;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        tracing::error!(error = %err, "exiting after error");
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                // Windows reports releases as well as presses
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key).await?;
                }
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
