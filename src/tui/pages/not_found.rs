use super::{Page, PageContext, PageId};
use crate::tui::{route::Route, styles::Theme, utils::layout::centered_rect, Frame};
use anyhow::Result;
use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tracing::warn;

/// Shown in place of the builder when the model id is not registered
pub struct NotFoundPage {
    id: PageId,
    title: String,
    model_id: String,
    context: PageContext,
}

impl NotFoundPage {
    pub fn new(model_id: String, context: PageContext) -> Self {
        Self {
            id: "not_found".to_string(),
            title: "Model Not Found".to_string(),
            model_id,
            context,
        }
    }
}

#[async_trait]
impl Page for NotFoundPage {
    fn id(&self) -> &PageId {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    async fn on_enter(&mut self) -> Result<()> {
        warn!("Unknown model id: {}", self.model_id);
        Ok(())
    }

    async fn handle_key_event(&mut self, event: KeyEvent) -> Result<()> {
        if matches!(event.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            self.context.navigate(Route::Catalog);
        }
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let lines = vec![
            Line::from(Span::styled("Model Not Found", theme.error_style())),
            Line::default(),
            Line::from(Span::styled(
                format!("No model is registered as \"{}\".", self.model_id),
                theme.dim_style(),
            )),
            Line::default(),
            Line::from(Span::styled(" Choose a Model (Enter) ", theme.button_style(true))),
        ];

        let popup = centered_rect(56, 9, area);
        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.border_style()),
            );
        frame.render_widget(paragraph, popup);
    }

    fn help_text(&self) -> Vec<(&str, &str)> {
        vec![("Enter/Esc", "Choose a model")]
    }
}
