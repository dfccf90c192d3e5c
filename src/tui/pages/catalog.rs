use super::{Page, PageContext, PageId};
use crate::models::{self, ModelDescriptor};
use crate::tui::{components::ModelCard, route::Route, styles::Theme, Frame};
use anyhow::Result;
use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};
use tracing::info;

const CARD_WIDTH: u16 = 36;
const CARD_HEIGHT: u16 = 18;

/// Model catalog: a carousel of model cards
pub struct CatalogPage {
    id: PageId,
    title: String,
    context: PageContext,
    selected: usize,
    /// Where each visible card was last drawn, for mouse hits
    card_areas: Vec<(usize, Rect)>,
}

impl CatalogPage {
    pub fn new(context: PageContext) -> Self {
        Self {
            id: "catalog".to_string(),
            title: "Choose Your AI Model".to_string(),
            context,
            selected: 0,
            card_areas: Vec::new(),
        }
    }

    pub fn selected_model(&self) -> &'static ModelDescriptor {
        &models::all()[self.selected]
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < models::all().len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Open the builder for the highlighted model
    pub fn choose(&self) {
        let model = self.selected_model();
        info!("Selected model {}", model.id);
        self.context.navigate(Route::builder(model.id));
    }

    /// Indices of the cards that fit, keeping the selection centred when possible
    fn visible_range(&self, slots: usize) -> std::ops::Range<usize> {
        let total = models::all().len();
        let slots = slots.clamp(1, total);
        let start = self
            .selected
            .saturating_sub(slots / 2)
            .min(total - slots);
        start..start + slots
    }

    fn render_cards(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let slots = (area.width / (CARD_WIDTH + 2)).max(1) as usize;
        let range = self.visible_range(slots);
        let count = range.len() as u16;

        let height = CARD_HEIGHT.min(area.height);
        let row = Rect {
            x: area.x + area.width.saturating_sub(count * (CARD_WIDTH + 2)) / 2,
            y: area.y + (area.height - height) / 2,
            width: (count * (CARD_WIDTH + 2)).min(area.width),
            height,
        };

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, count as u32); count as usize])
            .split(row);

        self.card_areas.clear();
        for (slot, index) in range.enumerate() {
            let card_area = columns[slot].inner(&ratatui::layout::Margin {
                horizontal: 1,
                vertical: 0,
            });
            ModelCard::new(&models::all()[index])
                .selected(index == self.selected)
                .render(frame, card_area, theme);
            self.card_areas.push((index, card_area));
        }
    }

    fn pagination(&self, theme: &Theme) -> Line<'static> {
        let spans: Vec<Span> = (0..models::all().len())
            .map(|i| {
                if i == self.selected {
                    Span::styled("● ", Style::default().fg(theme.primary))
                } else {
                    Span::styled("○ ", theme.dim_style())
                }
            })
            .collect();
        Line::from(spans)
    }
}

#[async_trait]
impl Page for CatalogPage {
    fn id(&self) -> &PageId {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    async fn handle_key_event(&mut self, event: KeyEvent) -> Result<()> {
        match event.code {
            KeyCode::Left | KeyCode::Up | KeyCode::Char('h') | KeyCode::Char('k') => {
                self.select_previous()
            }
            KeyCode::Right | KeyCode::Down | KeyCode::Char('l') | KeyCode::Char('j') => {
                self.select_next()
            }
            KeyCode::Home => self.selected = 0,
            KeyCode::End => self.selected = models::all().len() - 1,
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if index < models::all().len() {
                    self.selected = index;
                    self.choose();
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.choose(),
            _ => {}
        }
        Ok(())
    }

    async fn handle_mouse_event(&mut self, event: MouseEvent) -> Result<()> {
        match event.kind {
            MouseEventKind::ScrollDown => self.select_next(),
            MouseEventKind::ScrollUp => self.select_previous(),
            MouseEventKind::Down(MouseButton::Left) => {
                let hit = self.card_areas.iter().find(|(_, area)| {
                    event.column >= area.x
                        && event.column < area.x + area.width
                        && event.row >= area.y
                        && event.row < area.y + area.height
                });
                // First click focuses a card, a click on the focused card selects it
                if let Some(&(index, _)) = hit {
                    if index == self.selected {
                        self.choose();
                    } else {
                        self.selected = index;
                    }
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // spacing
                Constraint::Length(1), // heading
                Constraint::Length(2), // subtitle
                Constraint::Min(3),    // cards
                Constraint::Length(1), // pagination
            ])
            .split(area);

        let heading = Line::from(vec![
            Span::styled("Choose Your ", theme.title_style()),
            Span::styled("AI Model", theme.focused_border_style()),
        ]);
        frame.render_widget(
            Paragraph::new(heading).alignment(Alignment::Center),
            chunks[1],
        );

        frame.render_widget(
            Paragraph::new(
                "Select the perfect AI model for your prompt generation needs. \
                 Each model has unique strengths and capabilities.",
            )
            .style(theme.dim_style())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
            chunks[2],
        );

        self.render_cards(frame, chunks[3], theme);

        frame.render_widget(
            Paragraph::new(self.pagination(theme)).alignment(Alignment::Center),
            chunks[4],
        );
    }

    fn help_text(&self) -> Vec<(&str, &str)> {
        vec![
            ("←/→", "Browse models"),
            ("Enter", "Select model"),
            ("1-3", "Jump to model"),
            ("Click", "Focus, then select a card"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::PromptGenerator;
    use crate::tui::events::Event;
    use crossterm::event::KeyModifiers;
    use std::time::Duration;
    use tokio::sync::mpsc;

    fn page() -> (CatalogPage, mpsc::UnboundedReceiver<Event>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let context = PageContext::new(tx, PromptGenerator::new(Duration::ZERO));
        (CatalogPage::new(context), rx)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[tokio::test]
    async fn test_selection_is_clamped() {
        let (mut page, _rx) = page();
        page.handle_key_event(key(KeyCode::Left)).await.unwrap();
        assert_eq!(page.selected_model().id, "llama4-maverick");

        for _ in 0..5 {
            page.handle_key_event(key(KeyCode::Right)).await.unwrap();
        }
        assert_eq!(page.selected_model().id, "nemotron-49b");
    }

    #[tokio::test]
    async fn test_enter_navigates_to_builder() {
        let (mut page, mut rx) = page();
        page.handle_key_event(key(KeyCode::Right)).await.unwrap();
        page.handle_key_event(key(KeyCode::Enter)).await.unwrap();

        match rx.try_recv() {
            Ok(Event::Navigate(route)) => assert_eq!(route, Route::builder("shisa-v2")),
            other => panic!("expected navigation, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_number_key_jumps_and_selects() {
        let (mut page, mut rx) = page();
        page.handle_key_event(key(KeyCode::Char('3'))).await.unwrap();
        assert!(matches!(
            rx.try_recv(),
            Ok(Event::Navigate(Route::Builder(id))) if id == "nemotron-49b"
        ));

        page.handle_key_event(key(KeyCode::Char('7'))).await.unwrap();
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_mouse_click_focuses_then_selects() {
        let (mut page, mut rx) = page();
        page.card_areas = vec![(0, Rect::new(0, 0, 10, 10)), (1, Rect::new(10, 0, 10, 10))];

        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 12,
            row: 3,
            modifiers: KeyModifiers::NONE,
        };
        page.handle_mouse_event(click).await.unwrap();
        assert_eq!(page.selected_model().id, "shisa-v2");
        assert!(rx.try_recv().is_err());

        page.handle_mouse_event(click).await.unwrap();
        assert!(matches!(rx.try_recv(), Ok(Event::Navigate(_))));
    }

    #[test]
    fn test_visible_range_follows_selection() {
        let (mut page, _rx) = page();
        assert_eq!(page.visible_range(1), 0..1);
        assert_eq!(page.visible_range(3), 0..3);
        assert_eq!(page.visible_range(10), 0..3);

        page.selected = 2;
        assert_eq!(page.visible_range(1), 2..3);
        assert_eq!(page.visible_range(2), 1..3);
    }
}
