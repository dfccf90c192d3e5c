use super::{Component, ComponentState};
use crate::prompt::{Complexity, Tone};
use crate::tui::{styles::Theme, Frame};
use anyhow::Result;
use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// A value that can be picked from a fixed list
pub trait SelectOption: Copy + PartialEq + Send + Sync + 'static {
    fn options() -> &'static [Self];
    fn label(&self) -> &'static str;
}

impl SelectOption for Tone {
    fn options() -> &'static [Self] {
        &Tone::ALL
    }

    fn label(&self) -> &'static str {
        Tone::label(*self)
    }
}

impl SelectOption for Complexity {
    fn options() -> &'static [Self] {
        &Complexity::ALL
    }

    fn label(&self) -> &'static str {
        Complexity::label(*self)
    }
}

/// Single-choice field cycled with the arrow keys
pub struct SelectField<T: SelectOption> {
    state: ComponentState,
    label: String,
    index: usize,
    _marker: std::marker::PhantomData<T>,
}

impl<T: SelectOption> SelectField<T> {
    pub fn new(label: impl Into<String>, initial: T) -> Self {
        let index = T::options()
            .iter()
            .position(|option| *option == initial)
            .unwrap_or(0);
        Self {
            state: ComponentState::new(),
            label: label.into(),
            index,
            _marker: std::marker::PhantomData,
        }
    }

    pub fn value(&self) -> T {
        T::options()[self.index]
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % T::options().len();
    }

    pub fn previous(&mut self) {
        let len = T::options().len();
        self.index = (self.index + len - 1) % len;
    }
}

#[async_trait]
impl<T: SelectOption> Component for SelectField<T> {
    async fn handle_key_event(&mut self, event: KeyEvent) -> Result<()> {
        match event.code {
            KeyCode::Right | KeyCode::Down | KeyCode::Char(' ') => self.next(),
            KeyCode::Left | KeyCode::Up => self.previous(),
            _ => {}
        }
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let border_style = if self.has_focus() {
            theme.focused_border_style()
        } else {
            theme.border_style()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(format!(" {} ", self.label), theme.text_style()));

        let arrow_style = if self.has_focus() {
            theme.focused_border_style()
        } else {
            theme.dim_style()
        };
        let line = Line::from(vec![
            Span::styled("◀ ", arrow_style),
            Span::styled(self.value().label(), theme.text_style()),
            Span::styled(" ▶", arrow_style),
            Span::styled(
                format!("  ({}/{})", self.index + 1, T::options().len()),
                theme.dim_style(),
            ),
        ]);

        frame.render_widget(Paragraph::new(line).block(block), area);
    }

    fn has_focus(&self) -> bool {
        self.state.has_focus
    }

    fn set_focus(&mut self, focus: bool) {
        self.state.has_focus = focus;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_starts_at_initial_value() {
        let field = SelectField::new("Tone", Tone::Professional);
        assert_eq!(field.value(), Tone::Professional);

        let field = SelectField::new("Detail", Complexity::Detailed);
        assert_eq!(field.value(), Complexity::Detailed);
    }

    #[tokio::test]
    async fn test_cycles_with_wraparound() {
        let mut field = SelectField::new("Detail", Complexity::Brief);
        field
            .handle_key_event(KeyEvent::new(KeyCode::Left, KeyModifiers::NONE))
            .await
            .unwrap();
        assert_eq!(field.value(), Complexity::StepByStep);

        field
            .handle_key_event(KeyEvent::new(KeyCode::Right, KeyModifiers::NONE))
            .await
            .unwrap();
        assert_eq!(field.value(), Complexity::Brief);

        for _ in 0..6 {
            field.next();
        }
        assert_eq!(field.value(), Complexity::Comprehensive);
    }
}
