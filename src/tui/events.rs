use crate::tui::route::Route;
use crossterm::event::{Event as CrosstermEvent, KeyEvent, KeyEventKind, MouseEvent};
use std::time::Duration;

/// Application events
#[derive(Debug, Clone)]
pub enum Event {
    /// Keyboard input event
    Key(KeyEvent),

    /// Mouse input event
    Mouse(MouseEvent),

    /// Terminal resize event
    Resize(u16, u16),

    /// Bracketed paste
    Paste(String),

    /// Periodic tick event
    Tick,

    /// Navigate to a route, mounting a fresh page
    Navigate(Route),

    /// Copy a generated prompt to the clipboard
    CopyPrompt(String),

    /// Save a generated prompt to a file named after the model
    SavePrompt { model_name: String, prompt: String },

    /// Status message event
    StatusMessage(String),
}

/// Reads terminal input, falling back to a tick when nothing arrives
pub struct EventHandler {
    /// Tick interval for periodic events
    tick_interval: Duration,
}

impl EventHandler {
    /// Create a new event handler
    pub fn new(tick_interval: Duration) -> Self {
        Self { tick_interval }
    }

    /// Get the next event
    pub async fn next(&mut self) -> Event {
        let tick = self.tick_interval;
        let polled = tokio::task::spawn_blocking(move || read_event(tick)).await;

        match polled {
            Ok(Ok(Some(event))) => {
                if let Some(event) = convert_crossterm_event(event) {
                    return event;
                }
            }
            Ok(Ok(None)) => {}
            Ok(Err(e)) => tracing::warn!("Failed to read terminal event: {}", e),
            Err(e) => tracing::warn!("Terminal reader task failed: {}", e),
        }

        // Return tick event if no other events
        Event::Tick
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(Duration::from_millis(100))
    }
}

/// Wait up to `tick` for a terminal event
fn read_event(tick: Duration) -> std::io::Result<Option<CrosstermEvent>> {
    if crossterm::event::poll(tick)? {
        crossterm::event::read().map(Some)
    } else {
        Ok(None)
    }
}

/// Convert crossterm events to application events
fn convert_crossterm_event(event: CrosstermEvent) -> Option<Event> {
    match event {
        // Windows reports both press and release
        CrosstermEvent::Key(key_event) if key_event.kind == KeyEventKind::Release => None,
        CrosstermEvent::Key(key_event) => Some(Event::Key(key_event)),
        CrosstermEvent::Mouse(mouse_event) => Some(Event::Mouse(mouse_event)),
        CrosstermEvent::Resize(width, height) => Some(Event::Resize(width, height)),
        CrosstermEvent::Paste(text) => Some(Event::Paste(text)),
        CrosstermEvent::FocusGained | CrosstermEvent::FocusLost => None,
    }
}
