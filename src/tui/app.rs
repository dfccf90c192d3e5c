use crate::prompt::{PromptExporter, PromptGenerator};
use crate::tui::{
    events::Event,
    keys::KeyMap,
    pages::{PageContext, PageManager},
    route::Route,
    styles::Theme,
    utils::layout::centered_rect_percent,
    Frame,
};
use anyhow::Result;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::{debug, error};

/// How long a status message stays in the status bar
const STATUS_TIMEOUT: Duration = Duration::from_secs(4);

/// How a status message is coloured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Error,
}

/// Main application state and controller
pub struct App {
    /// Whether the application should quit
    pub should_quit: bool,

    /// Current application dimensions
    pub size: Rect,

    /// Key mappings for the application
    pub key_map: KeyMap,

    /// Page manager for handling different screens
    pub page_manager: PageManager,

    /// Current theme for styling
    pub theme: Theme,

    /// Status message to display, with its level and the time it was set
    pub status_message: Option<(String, StatusLevel, Instant)>,

    /// Application configuration
    pub config: AppConfig,

    /// Copies and saves generated prompts
    exporter: PromptExporter,

    /// Event receiver for events raised by pages
    event_receiver: mpsc::UnboundedReceiver<Event>,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Show help text
    pub show_help: bool,

    /// Enable mouse support
    pub mouse_enabled: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            show_help: false,
            mouse_enabled: false,
        }
    }
}

impl App {
    /// Create a new application instance
    pub async fn new(
        start: Route,
        generator: PromptGenerator,
        exporter: PromptExporter,
        config: AppConfig,
    ) -> Result<Self> {
        debug!("Prompts are saved to {}", exporter.download_dir().display());
        let (event_sender, event_receiver) = mpsc::unbounded_channel();
        let context = PageContext::new(event_sender, generator);
        let page_manager = PageManager::new(context, start).await?;

        Ok(Self {
            should_quit: false,
            size: Rect::default(),
            key_map: KeyMap::default(),
            page_manager,
            theme: Theme::default(),
            status_message: None,
            config,
            exporter,
            event_receiver,
        })
    }

    /// Handle incoming events; returns true when the application should exit
    pub async fn handle_event(&mut self, event: Event) -> Result<bool> {
        self.dispatch(event).await?;

        // Pages raise navigation and export requests through the channel
        while let Ok(internal_event) = self.event_receiver.try_recv() {
            self.dispatch(internal_event).await?;
        }

        Ok(self.should_quit)
    }

    async fn dispatch(&mut self, event: Event) -> Result<()> {
        match event {
            Event::Key(key_event) => {
                if self.key_map.should_quit(&key_event) {
                    self.should_quit = true;
                    return Ok(());
                }

                if self.key_map.should_show_help(&key_event) {
                    self.config.show_help = !self.config.show_help;
                    return Ok(());
                }

                self.page_manager
                    .current_page_mut()
                    .handle_key_event(key_event)
                    .await?;
            }

            Event::Mouse(mouse_event) => {
                if self.config.mouse_enabled {
                    self.page_manager
                        .current_page_mut()
                        .handle_mouse_event(mouse_event)
                        .await?;
                }
            }

            Event::Paste(text) => {
                self.page_manager.current_page_mut().handle_paste(text).await?;
            }

            Event::Resize(width, height) => {
                self.size = Rect::new(0, 0, width, height);
            }

            Event::Tick => {
                self.page_manager.current_page_mut().tick().await?;
                if let Some((_, _, set_at)) = &self.status_message {
                    if set_at.elapsed() >= STATUS_TIMEOUT {
                        self.status_message = None;
                    }
                }
            }

            Event::Navigate(route) => {
                self.page_manager.navigate_to(route).await?;
                self.status_message = None;
            }

            Event::CopyPrompt(prompt) => match self.exporter.copy(&prompt) {
                Ok(()) => self.set_status("Prompt copied to clipboard", StatusLevel::Success),
                Err(e) => {
                    error!("Copy failed: {}", e);
                    self.set_status(format!("Copy failed: {}", e), StatusLevel::Error);
                }
            },

            Event::SavePrompt { model_name, prompt } => {
                match self.exporter.save(&model_name, &prompt) {
                    Ok(path) => {
                        self.set_status(format!("Saved {}", path.display()), StatusLevel::Success)
                    }
                    Err(e) => {
                        error!("Save failed: {}", e);
                        self.set_status(format!("Save failed: {}", e), StatusLevel::Error);
                    }
                }
            }

            Event::StatusMessage(message) => self.set_status(message, StatusLevel::Info),
        }
        Ok(())
    }

    fn set_status(&mut self, message: impl Into<String>, level: StatusLevel) {
        let message = message.into();
        debug!("Status: {}", message);
        self.status_message = Some((message, level, Instant::now()));
    }

    /// Render the application UI
    pub fn render(&mut self, frame: &mut Frame) {
        self.size = frame.size();
        frame.render_widget(Block::default().style(self.theme.base_style()), self.size);

        // Create main layout
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),    // Main content
                Constraint::Length(1), // Status bar
            ])
            .split(frame.size());

        self.page_manager
            .current_page_mut()
            .render(frame, chunks[0], &self.theme);

        // Render status bar
        self.render_status_bar(frame, chunks[1]);

        // Render help overlay if enabled
        if self.config.show_help {
            self.render_help_overlay(frame);
        }
    }

    /// Render the status bar
    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let (status_text, style) = match &self.status_message {
            Some((message, level, _)) => {
                let style = match level {
                    StatusLevel::Info => self.theme.status_bar_style(),
                    StatusLevel::Success => self.theme.success_style(),
                    StatusLevel::Error => self.theme.error_style(),
                };
                (message.clone(), style)
            }
            None => (
                format!(
                    "{} | {} | Ctrl+G for help | Ctrl+C to quit",
                    self.page_manager.current_page().title(),
                    self.page_manager.current_route()
                ),
                self.theme.status_bar_style(),
            ),
        };

        let status_paragraph = Paragraph::new(status_text).style(style);

        frame.render_widget(status_paragraph, area);
    }

    /// Render help overlay
    fn render_help_overlay(&self, frame: &mut Frame) {
        let help_area = centered_rect_percent(60, 50, frame.size());

        let page = self.page_manager.current_page();
        let help_text = self.key_map.help_text(&page.help_text());
        let help_block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Help: {} ", page.title()))
            .style(self.theme.help_style());

        let help_paragraph = Paragraph::new(help_text)
            .block(help_block)
            .style(self.theme.text_style());

        frame.render_widget(Clear, help_area);
        frame.render_widget(help_paragraph, help_area);
    }

    /// Current status message, if any
    pub fn status(&self) -> Option<&str> {
        self.status_message.as_ref().map(|(message, _, _)| message.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::MemoryClipboard;
    use crate::tui::pages::Screen;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};
    use tempfile::TempDir;

    async fn app_at(start: Route, dir: &TempDir, clipboard: MemoryClipboard) -> App {
        let exporter = PromptExporter::new(Box::new(clipboard), dir.path());
        App::new(
            start,
            PromptGenerator::new(Duration::ZERO),
            exporter,
            AppConfig::default(),
        )
        .await
        .unwrap()
    }

    async fn press(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> bool {
        app.handle_event(Event::Key(KeyEvent::new(code, modifiers)))
            .await
            .unwrap()
    }

    async fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c), KeyModifiers::NONE).await;
        }
    }

    async fn generate(app: &mut App) {
        press(app, KeyCode::Char('s'), KeyModifiers::CONTROL).await;
        for _ in 0..200 {
            app.handle_event(Event::Tick).await.unwrap();
            if rendered(app).contains("Generated Prompt") {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("generation did not finish");
    }

    fn rendered(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[tokio::test]
    async fn test_quit_key() {
        let dir = TempDir::new().unwrap();
        let mut app = app_at(Route::Catalog, &dir, MemoryClipboard::default()).await;
        assert!(press(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL).await);
    }

    #[tokio::test]
    async fn test_catalog_to_builder_and_back() {
        let dir = TempDir::new().unwrap();
        let mut app = app_at(Route::Catalog, &dir, MemoryClipboard::default()).await;
        assert_eq!(app.page_manager.current_screen(), &Screen::Catalog);

        press(&mut app, KeyCode::Right, KeyModifiers::NONE).await;
        press(&mut app, KeyCode::Enter, KeyModifiers::NONE).await;
        assert_eq!(
            app.page_manager.current_screen(),
            &Screen::Builder("shisa-v2".to_string())
        );

        press(&mut app, KeyCode::Esc, KeyModifiers::NONE).await;
        assert_eq!(app.page_manager.current_screen(), &Screen::Catalog);
    }

    #[tokio::test]
    async fn test_not_found_recovers_to_catalog() {
        let dir = TempDir::new().unwrap();
        let mut app = app_at(Route::builder("gpt-x"), &dir, MemoryClipboard::default()).await;
        assert_eq!(
            app.page_manager.current_screen(),
            &Screen::NotFound("gpt-x".to_string())
        );
        assert!(rendered(&mut app).contains("Model Not Found"));

        press(&mut app, KeyCode::Enter, KeyModifiers::NONE).await;
        assert_eq!(app.page_manager.current_screen(), &Screen::Catalog);
    }

    #[tokio::test]
    async fn test_builder_state_resets_between_visits() {
        let dir = TempDir::new().unwrap();
        let mut app = app_at(Route::builder("shisa-v2"), &dir, MemoryClipboard::default()).await;

        type_text(&mut app, "Zookeeper").await;
        press(&mut app, KeyCode::Tab, KeyModifiers::NONE).await;
        press(&mut app, KeyCode::Tab, KeyModifiers::NONE).await;
        type_text(&mut app, "Do research").await;
        generate(&mut app).await;
        assert!(rendered(&mut app).contains("Task: Do research"));

        // Leave and come back to the same model
        press(&mut app, KeyCode::Esc, KeyModifiers::NONE).await;
        press(&mut app, KeyCode::Char('2'), KeyModifiers::NONE).await;
        assert_eq!(
            app.page_manager.current_screen(),
            &Screen::Builder("shisa-v2".to_string())
        );

        let screen = rendered(&mut app);
        assert!(!screen.contains("Generated Prompt"));
        assert!(!screen.contains("Zookeeper"));
        assert!(!screen.contains("Do research"));
    }

    #[tokio::test]
    async fn test_copy_and_save_from_builder() {
        let dir = TempDir::new().unwrap();
        let clipboard = MemoryClipboard::default();
        let contents = clipboard.contents.clone();
        let mut app = app_at(Route::builder("nemotron-49b"), &dir, clipboard).await;

        type_text(&mut app, "Architect").await;
        press(&mut app, KeyCode::Tab, KeyModifiers::NONE).await;
        press(&mut app, KeyCode::Tab, KeyModifiers::NONE).await;
        type_text(&mut app, "Design a pipeline").await;
        generate(&mut app).await;

        press(&mut app, KeyCode::Char('y'), KeyModifiers::CONTROL).await;
        assert_eq!(app.status(), Some("Prompt copied to clipboard"));
        let copied = contents.lock().unwrap().clone().unwrap();
        assert!(copied.starts_with("You are an expert Architect specializing in general tasks."));

        press(&mut app, KeyCode::Char('d'), KeyModifiers::CONTROL).await;
        let saved = std::fs::read_to_string(dir.path().join("nemotron-49b-prompt.txt")).unwrap();
        assert_eq!(saved, copied);
        assert!(app.status().unwrap().starts_with("Saved "));
    }

    #[tokio::test]
    async fn test_help_overlay_lists_page_keys() {
        let dir = TempDir::new().unwrap();
        let mut app = app_at(Route::Catalog, &dir, MemoryClipboard::default()).await;
        press(&mut app, KeyCode::Char('g'), KeyModifiers::CONTROL).await;
        assert!(app.config.show_help);
        assert!(rendered(&mut app).contains("Browse models"));
    }

    #[tokio::test]
    async fn test_catalog_renders_all_models() {
        let dir = TempDir::new().unwrap();
        let mut app = app_at(Route::Catalog, &dir, MemoryClipboard::default()).await;
        let screen = rendered(&mut app);
        assert!(screen.contains("Llama 4 Maverick"));
        assert!(screen.contains("Shisa V2"));
        assert!(screen.contains("Nemotron 49B"));
    }
}
