//! Prompt builder page
//!
//! Holds the form for one model, runs at most one generation at a time and
//! shows the latest generated prompt with copy/save actions. All of this state
//! lives only as long as the page; navigating away drops it.

use super::{Page, PageContext, PageId};
use crate::models::ModelDescriptor;
use crate::prompt::{Complexity, PendingGeneration, PromptFormInput, Tone};
use crate::tui::{
    components::{Component, ModelCard, SelectField, TextField},
    events::Event,
    route::Route,
    styles::Theme,
    Frame,
};
use anyhow::Result;
use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use tracing::{debug, info, warn};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Focusable parts of the form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Role,
    Domain,
    Task,
    Context,
    Tone,
    Complexity,
    Submit,
}

impl FormField {
    const ORDER: [FormField; 7] = [
        FormField::Role,
        FormField::Domain,
        FormField::Task,
        FormField::Context,
        FormField::Tone,
        FormField::Complexity,
        FormField::Submit,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

pub struct BuilderPage {
    id: PageId,
    title: String,
    model: &'static ModelDescriptor,
    context: PageContext,

    role: TextField,
    domain: TextField,
    task: TextField,
    context_field: TextField,
    tone: SelectField<Tone>,
    complexity: SelectField<Complexity>,
    focus: FormField,

    pending: Option<PendingGeneration>,
    generated_prompt: String,
    spinner_frame: usize,
    output_scroll: u16,
}

impl BuilderPage {
    pub fn new(model: &'static ModelDescriptor, context: PageContext) -> Self {
        let mut page = Self {
            id: "builder".to_string(),
            title: model.name.to_string(),
            model,
            context,
            role: TextField::new("Role / Persona")
                .required()
                .with_placeholder("e.g., Marketing Expert, Data Analyst, Creative Writer"),
            domain: TextField::new("Domain / Industry")
                .with_placeholder("e.g., Technology, Healthcare, Finance, Education"),
            task: TextField::new("Task Description")
                .required()
                .multiline()
                .with_placeholder("Describe what you want the AI to help you with..."),
            context_field: TextField::new("Additional Context")
                .multiline()
                .with_placeholder(
                    "Any specific requirements, constraints, or background information...",
                ),
            tone: SelectField::new("Tone", Tone::default()),
            complexity: SelectField::new("Response Detail Level", Complexity::default()),
            focus: FormField::Role,
            pending: None,
            generated_prompt: String::new(),
            spinner_frame: 0,
            output_scroll: 0,
        };
        page.set_focus(FormField::Role);
        page
    }

    /// Snapshot of the form as it stands
    pub fn form_input(&self) -> PromptFormInput {
        PromptFormInput {
            role: self.role.value().to_string(),
            domain: self.domain.value().to_string(),
            task: self.task.value().to_string(),
            context: self.context_field.value().to_string(),
            tone: self.tone.value(),
            complexity: self.complexity.value(),
        }
    }

    pub fn is_generating(&self) -> bool {
        self.pending.is_some()
    }

    pub fn generated_prompt(&self) -> &str {
        &self.generated_prompt
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    /// Whether the submit action is enabled
    pub fn can_submit(&self) -> bool {
        !self.is_generating() && self.form_input().is_submittable()
    }

    /// Start a generation; returns false when submitting is disabled
    pub fn submit(&mut self) -> bool {
        if self.is_generating() {
            debug!("Ignoring submit while a generation is running");
            return false;
        }

        let input = self.form_input();
        if let Err(e) = input.validate() {
            debug!("Submit rejected: {}", e);
            return false;
        }

        info!(
            "Generating prompt for {} (tone: {}, detail: {}, delay: {:?})",
            self.model.id,
            input.tone,
            input.complexity,
            self.context.generator.delay()
        );
        self.pending = Some(self.context.generator.start(input));
        self.spinner_frame = 0;
        true
    }

    /// Collect a finished generation, if any
    pub fn poll_generation(&mut self) {
        let Some(pending) = self.pending.as_mut() else {
            return;
        };

        match pending.poll() {
            Ok(Some(prompt)) => {
                debug!("Generated prompt of {} bytes", prompt.len());
                self.generated_prompt = prompt;
                self.output_scroll = 0;
                self.pending = None;
            }
            Ok(None) => {
                self.spinner_frame = (self.spinner_frame + 1) % SPINNER.len();
            }
            Err(e) => {
                warn!("Generation failed: {}", e);
                self.pending = None;
                self.context.send(Event::StatusMessage(e.to_string()));
            }
        }
    }

    pub fn copy_prompt(&self) {
        if self.generated_prompt.is_empty() {
            self.context
                .send(Event::StatusMessage("Generate a prompt first".to_string()));
            return;
        }
        self.context
            .send(Event::CopyPrompt(self.generated_prompt.clone()));
    }

    pub fn save_prompt(&self) {
        if self.generated_prompt.is_empty() {
            self.context
                .send(Event::StatusMessage("Generate a prompt first".to_string()));
            return;
        }
        self.context.send(Event::SavePrompt {
            model_name: self.model.name.to_string(),
            prompt: self.generated_prompt.clone(),
        });
    }

    pub fn set_focus(&mut self, field: FormField) {
        self.focus = field;
        self.role.set_focus(field == FormField::Role);
        self.domain.set_focus(field == FormField::Domain);
        self.task.set_focus(field == FormField::Task);
        self.context_field.set_focus(field == FormField::Context);
        self.tone.set_focus(field == FormField::Tone);
        self.complexity.set_focus(field == FormField::Complexity);
    }

    fn focused_text_field(&mut self) -> Option<&mut TextField> {
        match self.focus {
            FormField::Role => Some(&mut self.role),
            FormField::Domain => Some(&mut self.domain),
            FormField::Task => Some(&mut self.task),
            FormField::Context => Some(&mut self.context_field),
            _ => None,
        }
    }

    fn render_model_info(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        ModelCard::new(self.model)
            .show_capabilities(false)
            .render(frame, area, theme);
    }

    fn render_output(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style())
            .title(Span::styled(" Generated Prompt ", theme.title_style()))
            .title(
                ratatui::widgets::block::Title::from(Span::styled(
                    " Ctrl+Y copy · Ctrl+D save ",
                    theme.dim_style(),
                ))
                .alignment(Alignment::Right),
            );

        let paragraph = Paragraph::new(self.generated_prompt.as_str())
            .style(theme.text_style())
            .wrap(Wrap { trim: false })
            .scroll((self.output_scroll, 0))
            .block(block);
        frame.render_widget(paragraph, area);
    }

    fn render_submit(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let focused = self.focus == FormField::Submit;
        let (label, style) = if self.is_generating() {
            (
                format!("{} Generating Prompt...", SPINNER[self.spinner_frame]),
                theme.disabled_button_style(),
            )
        } else if self.can_submit() {
            ("✦ Generate Prompt".to_string(), theme.button_style(focused))
        } else {
            ("✦ Generate Prompt".to_string(), theme.disabled_button_style())
        };

        let border_style = if focused {
            theme.focused_border_style()
        } else {
            theme.border_style()
        };
        let button = Paragraph::new(Line::from(Span::styled(format!(" {} ", label), style)))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(border_style));
        frame.render_widget(button, area);
    }
}

#[async_trait]
impl Page for BuilderPage {
    fn id(&self) -> &PageId {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    async fn handle_key_event(&mut self, event: KeyEvent) -> Result<()> {
        if event.modifiers.contains(KeyModifiers::CONTROL) {
            match event.code {
                KeyCode::Char('s') => {
                    self.submit();
                }
                KeyCode::Char('y') => self.copy_prompt(),
                KeyCode::Char('d') => self.save_prompt(),
                KeyCode::Char('u') => {
                    if let Some(field) = self.focused_text_field() {
                        field.clear();
                    }
                }
                _ => {}
            }
            return Ok(());
        }

        match event.code {
            KeyCode::Esc => self.context.navigate(Route::Catalog),
            KeyCode::Tab => self.set_focus(self.focus.next()),
            KeyCode::BackTab => self.set_focus(self.focus.previous()),
            KeyCode::PageDown => self.output_scroll = self.output_scroll.saturating_add(5),
            KeyCode::PageUp => self.output_scroll = self.output_scroll.saturating_sub(5),
            KeyCode::Enter => match self.focus {
                FormField::Submit => {
                    self.submit();
                }
                FormField::Task => self.task.handle_key_event(event).await?,
                FormField::Context => self.context_field.handle_key_event(event).await?,
                other => self.set_focus(other.next()),
            },
            _ => match self.focus {
                FormField::Tone => self.tone.handle_key_event(event).await?,
                FormField::Complexity => self.complexity.handle_key_event(event).await?,
                FormField::Submit => {}
                _ => {
                    if let Some(field) = self.focused_text_field() {
                        field.handle_key_event(event).await?;
                    }
                }
            },
        }
        Ok(())
    }

    async fn handle_paste(&mut self, text: String) -> Result<()> {
        if let Some(field) = self.focused_text_field() {
            field.insert_str(&text);
        }
        Ok(())
    }

    async fn tick(&mut self) -> Result<()> {
        self.poll_generation();
        Ok(())
    }

    async fn on_exit(&mut self) -> Result<()> {
        if self.is_generating() {
            debug!("Leaving {} with a generation in flight", self.model.id);
        }
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(area);

        // Left: model info and output
        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(9), Constraint::Min(3)])
            .split(columns[0]);
        self.render_model_info(frame, left[0], theme);
        if !self.generated_prompt.is_empty() {
            self.render_output(frame, left[1], theme);
        }

        // Right: form
        let form = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // heading
                Constraint::Length(3), // role
                Constraint::Length(3), // domain
                Constraint::Length(5), // task
                Constraint::Length(4), // context
                Constraint::Length(3), // tone
                Constraint::Length(3), // complexity
                Constraint::Length(3), // submit
                Constraint::Min(0),
            ])
            .split(columns[1]);

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("✦ ", theme.accent_style(self.model.accent)),
                Span::styled("Prompt Builder", theme.title_style()),
            ])),
            form[0],
        );
        self.role.render(frame, form[1], theme);
        self.domain.render(frame, form[2], theme);
        self.task.render(frame, form[3], theme);
        self.context_field.render(frame, form[4], theme);
        self.tone.render(frame, form[5], theme);
        self.complexity.render(frame, form[6], theme);
        self.render_submit(frame, form[7], theme);
    }

    fn help_text(&self) -> Vec<(&str, &str)> {
        vec![
            ("Tab/S-Tab", "Next/previous field"),
            ("←/→", "Change tone or detail level"),
            ("Ctrl+S", "Generate prompt"),
            ("Ctrl+Y", "Copy prompt"),
            ("Ctrl+D", "Save prompt to file"),
            ("Ctrl+U", "Clear field"),
            ("PgUp/PgDn", "Scroll prompt"),
            ("Esc", "Back to models"),
        ]
    }
}
