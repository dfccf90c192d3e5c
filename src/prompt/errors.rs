//! Error types for prompt building and export

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Required field is empty: {0}")]
    MissingField(&'static str),

    #[error("Unknown tone: {0}")]
    UnknownTone(String),

    #[error("Unknown detail level: {0}")]
    UnknownComplexity(String),

    #[error("Nothing to export: no prompt has been generated yet")]
    NothingToExport,

    #[error("Clipboard unavailable: {0}")]
    Clipboard(String),

    #[error("Failed to save prompt to {path}: {source}")]
    Save {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Generation was cancelled before it finished")]
    GenerationCancelled,
}

pub type PromptResult<T> = Result<T, PromptError>;
