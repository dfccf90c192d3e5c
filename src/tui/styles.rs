use crate::models::Accent;
use ratatui::style::{Color, Modifier, Style};

/// Application theme configuration
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary colors
    pub primary: Color,
    pub secondary: Color,

    /// Text colors
    pub text: Color,
    pub text_dim: Color,
    pub text_bright: Color,

    /// Background colors
    pub background: Color,
    pub background_alt: Color,

    /// Border colors
    pub border: Color,
    pub border_focused: Color,

    /// Status colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,

    /// Special colors
    pub placeholder: Color,
    pub disabled: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create a dark theme
    pub fn dark() -> Self {
        Self {
            primary: Color::Rgb(34, 211, 238),    // Cyan-400
            secondary: Color::Rgb(168, 85, 247),  // Purple-500

            text: Color::Rgb(248, 250, 252),      // Slate-50
            text_dim: Color::Rgb(148, 163, 184),  // Slate-400
            text_bright: Color::Rgb(255, 255, 255),

            background: Color::Rgb(15, 23, 42),   // Slate-900
            background_alt: Color::Rgb(30, 41, 59), // Slate-800

            border: Color::Rgb(71, 85, 105),      // Slate-600
            border_focused: Color::Rgb(34, 211, 238),

            success: Color::Rgb(34, 197, 94),     // Green-500
            warning: Color::Rgb(245, 158, 11),    // Amber-500
            error: Color::Rgb(239, 68, 68),       // Red-500

            placeholder: Color::Rgb(100, 116, 139), // Slate-500
            disabled: Color::Rgb(75, 85, 99),     // Gray-600
        }
    }

    /// Base style for normal elements
    pub fn base_style(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    /// Style for text content
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Style for secondary text
    pub fn dim_style(&self) -> Style {
        Style::default().fg(self.text_dim)
    }

    /// Style for headings
    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.text_bright)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for borders
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for focused borders
    pub fn focused_border_style(&self) -> Style {
        Style::default()
            .fg(self.border_focused)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the status bar
    pub fn status_bar_style(&self) -> Style {
        Style::default().fg(self.text).bg(self.background_alt)
    }

    /// Style for help text
    pub fn help_style(&self) -> Style {
        Style::default()
            .fg(self.text)
            .bg(self.background)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for placeholder text
    pub fn placeholder_style(&self) -> Style {
        Style::default()
            .fg(self.placeholder)
            .add_modifier(Modifier::ITALIC)
    }

    /// Style for an action that can be triggered
    pub fn button_style(&self, focused: bool) -> Style {
        let style = Style::default()
            .fg(self.text_bright)
            .bg(self.secondary)
            .add_modifier(Modifier::BOLD);
        if focused {
            style.bg(self.primary).fg(self.background)
        } else {
            style
        }
    }

    /// Style for an action that is currently unavailable
    pub fn disabled_button_style(&self) -> Style {
        Style::default().fg(self.text_dim).bg(self.disabled)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }

    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    /// Leading colour of a model's accent gradient
    pub fn accent_color(&self, accent: Accent) -> Color {
        let ((r, g, b), _) = accent.gradient();
        Color::Rgb(r, g, b)
    }

    /// Trailing colour of a model's accent gradient
    pub fn accent_end_color(&self, accent: Accent) -> Color {
        let (_, (r, g, b)) = accent.gradient();
        Color::Rgb(r, g, b)
    }

    pub fn accent_style(&self, accent: Accent) -> Style {
        Style::default()
            .fg(self.accent_color(accent))
            .add_modifier(Modifier::BOLD)
    }
}
