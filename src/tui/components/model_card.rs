use crate::models::ModelDescriptor;
use crate::tui::{styles::Theme, Frame};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        block::{Position, Title},
        Block, BorderType, Borders, Paragraph, Wrap,
    },
};

/// Card showing one model. Capabilities are listed on the catalog only.
pub struct ModelCard<'a> {
    model: &'a ModelDescriptor,
    selected: bool,
    show_capabilities: bool,
}

impl<'a> ModelCard<'a> {
    pub fn new(model: &'a ModelDescriptor) -> Self {
        Self {
            model,
            selected: false,
            show_capabilities: true,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn show_capabilities(mut self, show: bool) -> Self {
        self.show_capabilities = show;
        self
    }

    fn lines(&self, theme: &Theme) -> Vec<Line<'a>> {
        let accent = theme.accent_style(self.model.accent);
        let accent_end = Style::default().fg(theme.accent_end_color(self.model.accent));

        let mut lines = vec![
            Line::from(vec![
                Span::styled(
                    format!(" {} ", self.model.icon.glyph()),
                    accent.add_modifier(Modifier::REVERSED),
                ),
                Span::styled("▌", accent_end),
            ]),
            Line::default(),
            Line::from(Span::styled(self.model.name, theme.title_style())),
            Line::default(),
            Line::from(Span::styled(self.model.description, theme.dim_style())),
        ];

        if self.show_capabilities {
            lines.push(Line::default());
            for capability in self.model.capabilities {
                lines.push(Line::from(vec![
                    Span::styled("• ", Style::default().fg(theme.primary)),
                    Span::styled(*capability, theme.text_style()),
                ]));
            }
        }

        lines
    }

    pub fn render(self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let (border_style, border_type) = if self.selected {
            (theme.accent_style(self.model.accent), BorderType::Thick)
        } else {
            (theme.border_style(), BorderType::Rounded)
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(border_style);
        if self.selected && self.show_capabilities {
            block = block.title(
                Title::from(Span::styled(" Enter: Select Model ", theme.button_style(true)))
                    .position(Position::Bottom)
                    .alignment(Alignment::Center),
            );
        }

        let paragraph = Paragraph::new(self.lines(theme))
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models;

    #[test]
    fn test_capabilities_only_when_requested() {
        let theme = Theme::default();
        let model = models::lookup("llama4-maverick").unwrap();

        let text = |card: ModelCard| {
            card.lines(&theme)
                .iter()
                .flat_map(|line| line.spans.iter().map(|span| span.content.to_string()))
                .collect::<String>()
        };

        let catalog = text(ModelCard::new(model));
        assert!(catalog.contains("Llama 4 Maverick"));
        assert!(catalog.contains("Code Generation"));

        let builder = text(ModelCard::new(model).show_capabilities(false));
        assert!(builder.contains("Cutting-edge model"));
        assert!(!builder.contains("Code Generation"));
    }
}
