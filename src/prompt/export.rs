//! Copying and saving generated prompts

use super::{PromptError, PromptResult};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Destination for the "copy" action
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> PromptResult<()>;
}

/// The system clipboard, opened on first use
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SystemClipboard {
    fn handle(&mut self) -> PromptResult<&mut arboard::Clipboard> {
        if self.inner.is_none() {
            let clipboard =
                arboard::Clipboard::new().map_err(|e| PromptError::Clipboard(e.to_string()))?;
            self.inner = Some(clipboard);
        }

        self.inner
            .as_mut()
            .ok_or_else(|| PromptError::Clipboard("not initialized".to_string()))
    }

    /// Copy and keep serving the text until another application owns the
    /// clipboard. On X11 and Wayland the contents die with the process that
    /// set them, so a short-lived command must block here. Elsewhere this is
    /// a plain copy.
    pub fn set_text_and_wait(&mut self, text: &str) -> PromptResult<()> {
        #[cfg(target_os = "linux")]
        {
            use arboard::SetExtLinux;
            self.handle()?
                .set()
                .wait()
                .text(text.to_string())
                .map_err(|e| PromptError::Clipboard(e.to_string()))
        }

        #[cfg(not(target_os = "linux"))]
        {
            self.set_text(text)
        }
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> PromptResult<()> {
        self.handle()?
            .set_text(text.to_string())
            .map_err(|e| PromptError::Clipboard(e.to_string()))
    }
}

/// File name for a saved prompt: the model name lowercased, whitespace runs
/// replaced by a hyphen, with a `-prompt.txt` suffix.
pub fn download_file_name(model_name: &str) -> String {
    let mut slug = String::with_capacity(model_name.len());
    let mut in_whitespace = false;
    for c in model_name.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
        } else {
            slug.extend(c.to_lowercase());
            in_whitespace = false;
        }
    }
    format!("{}-prompt.txt", slug)
}

/// Carries out copy and save requests for generated prompts
pub struct PromptExporter {
    clipboard: Box<dyn ClipboardSink>,
    download_dir: PathBuf,
}

impl PromptExporter {
    pub fn new(clipboard: Box<dyn ClipboardSink>, download_dir: impl Into<PathBuf>) -> Self {
        Self {
            clipboard,
            download_dir: download_dir.into(),
        }
    }

    pub fn download_dir(&self) -> &Path {
        &self.download_dir
    }

    /// Write the prompt to the clipboard
    pub fn copy(&mut self, prompt: &str) -> PromptResult<()> {
        if prompt.is_empty() {
            return Err(PromptError::NothingToExport);
        }
        self.clipboard.set_text(prompt)?;
        debug!("Copied {} bytes to clipboard", prompt.len());
        Ok(())
    }

    /// Save the prompt as a plain-text file named after the model
    pub fn save(&self, model_name: &str, prompt: &str) -> PromptResult<PathBuf> {
        if prompt.is_empty() {
            return Err(PromptError::NothingToExport);
        }
        save_prompt(&self.download_dir, model_name, prompt)
    }
}

/// Write `prompt` into `dir`, replacing any earlier file for the same model
pub fn save_prompt(dir: &Path, model_name: &str, prompt: &str) -> PromptResult<PathBuf> {
    let path = dir.join(download_file_name(model_name));
    std::fs::create_dir_all(dir).map_err(|source| PromptError::Save {
        path: path.clone(),
        source,
    })?;
    std::fs::write(&path, prompt).map_err(|source| PromptError::Save {
        path: path.clone(),
        source,
    })?;
    info!("Saved prompt to {}", path.display());
    Ok(path)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    /// Clipboard double that records what was written
    #[derive(Clone, Default)]
    pub(crate) struct MemoryClipboard {
        pub contents: Arc<Mutex<Option<String>>>,
    }

    impl ClipboardSink for MemoryClipboard {
        fn set_text(&mut self, text: &str) -> PromptResult<()> {
            *self.contents.lock().unwrap() = Some(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_download_file_name() {
        assert_eq!(download_file_name("Llama 4 Maverick"), "llama-4-maverick-prompt.txt");
        assert_eq!(download_file_name("Shisa V2"), "shisa-v2-prompt.txt");
        assert_eq!(download_file_name("Nemotron 49B"), "nemotron-49b-prompt.txt");
        assert_eq!(download_file_name("Two  \t Spaces"), "two-spaces-prompt.txt");
    }

    #[test]
    fn test_save_writes_prompt() {
        let dir = TempDir::new().unwrap();
        let exporter = PromptExporter::new(Box::new(MemoryClipboard::default()), dir.path());

        let path = exporter.save("Shisa V2", "hello prompt").unwrap();
        assert_eq!(path, dir.path().join("shisa-v2-prompt.txt"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello prompt");

        // Saving again replaces the file
        exporter.save("Shisa V2", "second").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_save_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("prompts").join("out");
        let path = save_prompt(&nested, "Nemotron 49B", "text").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_copy_uses_clipboard() {
        let clipboard = MemoryClipboard::default();
        let contents = clipboard.contents.clone();
        let mut exporter = PromptExporter::new(Box::new(clipboard), ".");

        exporter.copy("copied text").unwrap();
        assert_eq!(contents.lock().unwrap().as_deref(), Some("copied text"));
    }

    #[test]
    fn test_empty_prompt_is_rejected() {
        let dir = TempDir::new().unwrap();
        let mut exporter = PromptExporter::new(Box::new(MemoryClipboard::default()), dir.path());
        assert!(matches!(exporter.copy(""), Err(PromptError::NothingToExport)));
        assert!(matches!(
            exporter.save("Shisa V2", ""),
            Err(PromptError::NothingToExport)
        ));
    }
}
