use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Key binding configuration
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub label: &'static str,
    pub description: &'static str,
}

impl KeyBinding {
    pub const fn new(
        key: KeyCode,
        modifiers: KeyModifiers,
        label: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            key,
            modifiers,
            label,
            description,
        }
    }

    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.key == event.code && self.modifiers == event.modifiers
    }
}

/// Application-wide key mappings; page bindings live with each page
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Quit application
    pub quit: KeyBinding,

    /// Show help
    pub help: KeyBinding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            quit: KeyBinding::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
                "Ctrl+C",
                "Quit application",
            ),
            help: KeyBinding::new(
                KeyCode::Char('g'),
                KeyModifiers::CONTROL,
                "Ctrl+G",
                "Show/hide help",
            ),
        }
    }
}

impl KeyMap {
    /// Check if the event should quit the application
    pub fn should_quit(&self, event: &KeyEvent) -> bool {
        self.quit.matches(event)
    }

    /// Check if the event should show help
    pub fn should_show_help(&self, event: &KeyEvent) -> bool {
        self.help.matches(event)
    }

    /// Help lines for the global bindings followed by the page's own
    pub fn help_text(&self, page_help: &[(&str, &str)]) -> String {
        let mut lines = vec![
            format!("{:<12} {}", self.quit.label, self.quit.description),
            format!("{:<12} {}", self.help.label, self.help.description),
        ];
        if !page_help.is_empty() {
            lines.push(String::new());
            lines.extend(
                page_help
                    .iter()
                    .map(|(key, description)| format!("{:<12} {}", key, description)),
            );
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_binding() {
        let keys = KeyMap::default();
        assert!(keys.should_quit(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!keys.should_quit(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_help_text_includes_page_bindings() {
        let keys = KeyMap::default();
        let text = keys.help_text(&[("Enter", "Select model")]);
        assert!(text.contains("Quit application"));
        assert!(text.contains("Select model"));
    }
}
