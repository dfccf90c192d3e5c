//! Terminal User Interface module using ratatui
//!
//! Two screens: the model catalog and the prompt builder. Pages talk back to
//! the application through an event channel; the main loop draws, waits for
//! input or a tick, and dispatches.

mod app;
mod components;
mod events;
mod keys;
mod pages;
mod route;
mod styles;
mod utils;

pub use route::Route;

use app::{App, AppConfig};
use events::EventHandler;

use crate::config::Config;
use crate::prompt::{PromptExporter, PromptGenerator, SystemClipboard};
use anyhow::Result;
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::info;

pub type Backend = CrosstermBackend<io::Stdout>;
pub type Frame<'a> = ratatui::Frame<'a>;

/// Set while raw mode and the alternate screen are in effect
static TERMINAL_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Initialize the terminal for TUI mode
pub fn init_terminal(mouse: bool) -> Result<Terminal<Backend>> {
    enable_raw_mode()?;
    TERMINAL_ACTIVE.store(true, Ordering::SeqCst);
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    if mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode
pub fn restore_terminal(terminal: &mut Terminal<Backend>) -> Result<()> {
    TERMINAL_ACTIVE.store(false, Ordering::SeqCst);
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

/// Best-effort restore for the panic hook, where no `Terminal` is at hand.
/// Returns false, writing nothing, when the TUI is not on screen.
pub fn reset_terminal() -> bool {
    if !TERMINAL_ACTIVE.swap(false, Ordering::SeqCst) {
        return false;
    }
    let _ = disable_raw_mode();
    let _ = execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableBracketedPaste,
        DisableMouseCapture,
        crossterm::cursor::Show
    );
    true
}

/// Main TUI entry point
pub async fn run(config: &Config, start: Route) -> Result<()> {
    let generator = PromptGenerator::new(config.generation_delay());
    let exporter =
        PromptExporter::new(Box::new(SystemClipboard::new()), config.download_dir.clone());
    let app_config = AppConfig {
        mouse_enabled: config.mouse_enabled,
        ..AppConfig::default()
    };
    let mut app = App::new(start, generator, exporter, app_config).await?;
    let mut event_handler = EventHandler::new(config.tick_rate());

    let mut terminal = init_terminal(config.mouse_enabled)?;
    let result = run_app(&mut terminal, &mut app, &mut event_handler).await;
    restore_terminal(&mut terminal)?;

    info!("Exited at {}", app.page_manager.current_route());
    result
}

/// Main application loop
async fn run_app(
    terminal: &mut Terminal<Backend>,
    app: &mut App,
    event_handler: &mut EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        let event = event_handler.next().await;
        if app.handle_event(event).await? {
            break; // Exit requested
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_is_a_no_op_without_tui() {
        assert!(!reset_terminal());
    }
}
