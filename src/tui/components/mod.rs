pub mod input;
pub mod model_card;
pub mod select;

pub use input::TextField;
pub use model_card::ModelCard;
pub use select::{SelectField, SelectOption};

use crate::tui::{styles::Theme, Frame};
use anyhow::Result;
use async_trait::async_trait;
use crossterm::event::KeyEvent;
use ratatui::layout::Rect;

/// Base trait for all UI components
#[async_trait]
pub trait Component: Send + Sync {
    /// Handle keyboard input
    async fn handle_key_event(&mut self, event: KeyEvent) -> Result<()> {
        let _ = event;
        Ok(())
    }

    /// Render the component
    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme);

    /// Check if component has focus
    fn has_focus(&self) -> bool {
        false
    }

    /// Set component focus
    fn set_focus(&mut self, focus: bool) {
        let _ = focus;
    }
}

/// Base component state
#[derive(Debug, Clone, Default)]
pub struct ComponentState {
    pub has_focus: bool,
}

impl ComponentState {
    pub fn new() -> Self {
        Self::default()
    }
}
