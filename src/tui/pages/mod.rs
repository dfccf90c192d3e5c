pub mod builder;
pub mod catalog;
pub mod not_found;

use crate::models;
use crate::prompt::PromptGenerator;
use crate::tui::{events::Event, route::Route, styles::Theme, Frame};
use anyhow::Result;
use async_trait::async_trait;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::layout::Rect;
use tokio::sync::mpsc;
use tracing::{debug, info};

use builder::BuilderPage;
use catalog::CatalogPage;
use not_found::NotFoundPage;

/// Page identifier type
pub type PageId = String;

/// Base trait for all pages
#[async_trait]
pub trait Page: Send + Sync {
    /// Get the page ID
    fn id(&self) -> &PageId;

    /// Get the page title
    fn title(&self) -> &str;

    /// Handle keyboard input
    async fn handle_key_event(&mut self, event: KeyEvent) -> Result<()>;

    /// Handle mouse input
    async fn handle_mouse_event(&mut self, _event: MouseEvent) -> Result<()> {
        Ok(())
    }

    /// Handle pasted text
    async fn handle_paste(&mut self, _text: String) -> Result<()> {
        Ok(())
    }

    /// Handle periodic updates
    async fn tick(&mut self) -> Result<()> {
        Ok(())
    }

    /// Render the page
    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme);

    /// Called when the page becomes active
    async fn on_enter(&mut self) -> Result<()> {
        Ok(())
    }

    /// Called when the page becomes inactive
    async fn on_exit(&mut self) -> Result<()> {
        Ok(())
    }

    /// Get page-specific help text
    fn help_text(&self) -> Vec<(&str, &str)> {
        vec![]
    }
}

/// What pages need from the application
#[derive(Clone)]
pub struct PageContext {
    /// Channel back to the application
    pub events: mpsc::UnboundedSender<Event>,

    /// Produces prompts for builder pages
    pub generator: PromptGenerator,
}

impl PageContext {
    pub fn new(events: mpsc::UnboundedSender<Event>, generator: PromptGenerator) -> Self {
        Self { events, generator }
    }

    /// Ask the application to navigate
    pub fn navigate(&self, route: Route) {
        self.send(Event::Navigate(route));
    }

    pub fn send(&self, event: Event) {
        if self.events.send(event).is_err() {
            debug!("Application event channel closed");
        }
    }
}

/// The screen shown for a route
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Catalog,
    Builder(String),
    /// A builder route whose model id is not registered
    NotFound(String),
}

impl Screen {
    pub fn resolve(route: &Route) -> Self {
        match route {
            Route::Catalog => Screen::Catalog,
            Route::Builder(id) if models::lookup(id).is_some() => Screen::Builder(id.clone()),
            Route::Builder(id) => Screen::NotFound(id.clone()),
        }
    }
}

/// Owns the active page. Every navigation mounts a fresh page, so no page
/// state survives leaving a screen.
pub struct PageManager {
    context: PageContext,
    current_route: Route,
    current_screen: Screen,
    current_page: Box<dyn Page>,
}

impl PageManager {
    /// Create a page manager showing `start`
    pub async fn new(context: PageContext, start: Route) -> Result<Self> {
        let current_screen = Screen::resolve(&start);
        let mut current_page = mount(&current_screen, &context);
        current_page.on_enter().await?;
        info!("Starting at {}", start);

        Ok(Self {
            context,
            current_route: start,
            current_screen,
            current_page,
        })
    }

    /// Navigate to a route, discarding the current page
    pub async fn navigate_to(&mut self, route: Route) -> Result<()> {
        self.current_page.on_exit().await?;

        let screen = Screen::resolve(&route);
        debug!("Navigating from {} to {} ({:?})", self.current_route, route, screen);

        let mut page = mount(&screen, &self.context);
        page.on_enter().await?;

        self.current_page = page;
        self.current_route = route;
        self.current_screen = screen;
        Ok(())
    }

    /// Get the current page
    pub fn current_page(&self) -> &dyn Page {
        self.current_page.as_ref()
    }

    /// Get the current page mutably
    pub fn current_page_mut(&mut self) -> &mut dyn Page {
        self.current_page.as_mut()
    }

    pub fn current_route(&self) -> &Route {
        &self.current_route
    }

    pub fn current_screen(&self) -> &Screen {
        &self.current_screen
    }
}

fn mount(screen: &Screen, context: &PageContext) -> Box<dyn Page> {
    match screen {
        Screen::Catalog => Box::new(CatalogPage::new(context.clone())),
        Screen::Builder(id) => match models::lookup(id) {
            Some(model) => Box::new(BuilderPage::new(model, context.clone())),
            None => Box::new(NotFoundPage::new(id.clone(), context.clone())),
        },
        Screen::NotFound(id) => Box::new(NotFoundPage::new(id.clone(), context.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn context() -> (PageContext, mpsc::UnboundedReceiver<Event>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (PageContext::new(tx, PromptGenerator::new(Duration::ZERO)), rx)
    }

    #[test]
    fn test_resolve_screens() {
        assert_eq!(Screen::resolve(&Route::Catalog), Screen::Catalog);
        assert_eq!(
            Screen::resolve(&Route::builder("shisa-v2")),
            Screen::Builder("shisa-v2".to_string())
        );
        assert_eq!(
            Screen::resolve(&Route::builder("gpt-9")),
            Screen::NotFound("gpt-9".to_string())
        );
    }

    #[tokio::test]
    async fn test_starts_on_catalog() {
        let (ctx, _rx) = context();
        let manager = PageManager::new(ctx, Route::Catalog).await.unwrap();
        assert_eq!(manager.current_screen(), &Screen::Catalog);
        assert_eq!(manager.current_page().id(), "catalog");
    }

    #[tokio::test]
    async fn test_unknown_model_mounts_not_found() {
        let (ctx, _rx) = context();
        let mut manager = PageManager::new(ctx, Route::Catalog).await.unwrap();

        manager.navigate_to(Route::builder("missing")).await.unwrap();
        assert_eq!(manager.current_route(), &Route::builder("missing"));
        assert_eq!(manager.current_screen(), &Screen::NotFound("missing".to_string()));
        assert_eq!(manager.current_page().id(), "not_found");

        manager.navigate_to(Route::builder("nemotron-49b")).await.unwrap();
        assert_eq!(manager.current_page().id(), "builder");
        assert_eq!(manager.current_page().title(), "Nemotron 49B");
    }
}
