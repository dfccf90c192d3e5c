//! Prompt form input and generation
//!
//! The form collected by the builder screen, the fixed template that turns it
//! into prompt text, the simulated generation delay and the copy/save actions.

mod errors;
mod export;
mod generator;
mod template;

pub use errors::*;
pub use export::*;
pub use generator::*;
pub use template::*;

#[cfg(test)]
pub(crate) use export::tests::MemoryClipboard;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tone requested for the generated prompt
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Tone {
    #[default]
    Professional,
    Casual,
    Friendly,
    Formal,
    Creative,
    Technical,
}

impl Tone {
    pub const ALL: [Tone; 6] = [
        Tone::Professional,
        Tone::Casual,
        Tone::Friendly,
        Tone::Formal,
        Tone::Creative,
        Tone::Technical,
    ];

    /// Value used on the command line and in serialized form
    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Casual => "casual",
            Tone::Friendly => "friendly",
            Tone::Formal => "formal",
            Tone::Creative => "creative",
            Tone::Technical => "technical",
        }
    }

    /// Label shown in the form
    pub fn label(self) -> &'static str {
        match self {
            Tone::Professional => "Professional",
            Tone::Casual => "Casual",
            Tone::Friendly => "Friendly",
            Tone::Formal => "Formal",
            Tone::Creative => "Creative",
            Tone::Technical => "Technical",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tone {
    type Err = PromptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tone::ALL
            .into_iter()
            .find(|tone| tone.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PromptError::UnknownTone(s.to_string()))
    }
}

/// Response detail level requested for the generated prompt
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Complexity {
    Brief,
    #[default]
    Detailed,
    Comprehensive,
    StepByStep,
}

impl Complexity {
    pub const ALL: [Complexity; 4] = [
        Complexity::Brief,
        Complexity::Detailed,
        Complexity::Comprehensive,
        Complexity::StepByStep,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Complexity::Brief => "brief",
            Complexity::Detailed => "detailed",
            Complexity::Comprehensive => "comprehensive",
            Complexity::StepByStep => "step-by-step",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Complexity::Brief => "Brief & Concise",
            Complexity::Detailed => "Detailed",
            Complexity::Comprehensive => "Comprehensive",
            Complexity::StepByStep => "Step-by-Step",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Complexity {
    type Err = PromptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Complexity::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PromptError::UnknownComplexity(s.to_string()))
    }
}

/// Everything the user fills in on the builder form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptFormInput {
    pub role: String,
    pub domain: String,
    pub task: String,
    pub context: String,
    pub tone: Tone,
    pub complexity: Complexity,
}

impl PromptFormInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    pub fn with_task(mut self, task: impl Into<String>) -> Self {
        self.task = task.into();
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }

    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    pub fn with_complexity(mut self, complexity: Complexity) -> Self {
        self.complexity = complexity;
        self
    }

    /// Whether the form may be submitted: role and task must not be blank
    pub fn is_submittable(&self) -> bool {
        self.validate().is_ok()
    }

    /// Check the required fields, naming the first one that is missing
    pub fn validate(&self) -> PromptResult<()> {
        if self.role.trim().is_empty() {
            return Err(PromptError::MissingField("role"));
        }
        if self.task.trim().is_empty() {
            return Err(PromptError::MissingField("task"));
        }
        Ok(())
    }
}
