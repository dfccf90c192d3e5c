//! Labelled text field for the prompt form
//!
//! Single-line fields turn pasted newlines into spaces; multi-line fields keep
//! them and accept Enter as a line break. The cursor is tracked as a char index.

use super::{Component, ComponentState};
use crate::tui::{styles::Theme, Frame};
use anyhow::Result;
use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

pub struct TextField {
    state: ComponentState,
    label: String,
    placeholder: String,
    required: bool,
    multiline: bool,
    value: String,
    cursor: usize,
}

impl TextField {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            state: ComponentState::new(),
            label: label.into(),
            placeholder: String::new(),
            required: false,
            multiline: false,
            value: String::new(),
            cursor: 0,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn multiline(mut self) -> Self {
        self.multiline = true;
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    #[cfg(test)]
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.clear();
        self.insert_str(&value.into());
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn insert_char(&mut self, c: char) {
        let c = if c == '\n' && !self.multiline { ' ' } else { c };
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    /// Insert text at the cursor, e.g. from a paste
    pub fn insert_str(&mut self, text: &str) {
        let mut normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        if !self.multiline {
            normalized = normalized.replace('\n', " ");
        }
        let at = self.byte_index(self.cursor);
        self.value.insert_str(at, &normalized);
        self.cursor += normalized.chars().count();
    }

    /// Backspace
    pub fn delete_previous_char(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
    }

    /// Delete
    pub fn delete_char(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_len());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    /// Row and display column of the cursor within the text, saturating at
    /// `u16::MAX`
    fn cursor_position(&self) -> (u16, u16) {
        let before = &self.value[..self.byte_index(self.cursor)];
        let row = before.matches('\n').count();
        let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        let col = before[line_start..].width();
        (
            u16::try_from(row).unwrap_or(u16::MAX),
            u16::try_from(col).unwrap_or(u16::MAX),
        )
    }

    fn title(&self) -> String {
        if self.required {
            format!(" {} * ", self.label)
        } else {
            format!(" {} ", self.label)
        }
    }
}

#[async_trait]
impl Component for TextField {
    async fn handle_key_event(&mut self, event: KeyEvent) -> Result<()> {
        if event
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return Ok(());
        }

        match event.code {
            KeyCode::Char(c) => self.insert_char(c),
            KeyCode::Enter if self.multiline => self.insert_char('\n'),
            KeyCode::Backspace => self.delete_previous_char(),
            KeyCode::Delete => self.delete_char(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.move_home(),
            KeyCode::End => self.move_end(),
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
            .title(Span::styled(self.title(), theme.text_style()));
        let inner = block.inner(area);

        let (row, col) = self.cursor_position();
        let scroll_y = row.saturating_sub(inner.height.saturating_sub(1));
        let scroll_x = col.saturating_sub(inner.width.saturating_sub(1));

        let paragraph = if self.value.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                self.placeholder.as_str(),
                theme.placeholder_style(),
            )))
        } else {
            Paragraph::new(self.value.as_str())
                .style(theme.text_style())
                .scroll((scroll_y, scroll_x))
        };
        frame.render_widget(paragraph.block(block), area);

        if self.state.has_focus && inner.width > 0 && inner.height > 0 {
            frame.set_cursor(inner.x + (col - scroll_x), inner.y + (row - scroll_y));
        }
    }

    fn has_focus(&self) -> bool {
        self.state.has_focus
    }

    fn set_focus(&mut self, focus: bool) {
        self.state.has_focus = focus;
    }
}
