//! Simulated prompt generation
//!
//! Generation is local string templating; the delay only mimics a remote call
//! so the builder can show its in-progress state. Work runs on a spawned timer
//! task and hands its result back through a oneshot channel, which the UI loop
//! polls on every tick.

use super::{build_prompt, PromptError, PromptFormInput, PromptResult};
use std::time::Duration;
use tokio::sync::oneshot::{self, error::TryRecvError};
use tracing::debug;

/// Default simulated latency
pub const DEFAULT_GENERATION_DELAY: Duration = Duration::from_millis(2000);

/// Starts generations after a fixed delay
#[derive(Debug, Clone, Copy)]
pub struct PromptGenerator {
    delay: Duration,
}

impl PromptGenerator {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Spawn a generation for a snapshot of the form.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&self, input: PromptFormInput) -> PendingGeneration {
        let (tx, rx) = oneshot::channel();
        let delay = self.delay;

        tokio::spawn(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            let prompt = build_prompt(&input);
            // Receiver is gone when the builder was left mid-generation
            if tx.send(prompt).is_err() {
                debug!("Generation finished after its builder was closed");
            }
        });

        PendingGeneration { receiver: rx }
    }
}

/// A generation that has been started but not yet collected
#[derive(Debug)]
pub struct PendingGeneration {
    receiver: oneshot::Receiver<String>,
}

impl PendingGeneration {
    /// Non-blocking check; `Ok(None)` while the delay is still running
    pub fn poll(&mut self) -> PromptResult<Option<String>> {
        match self.receiver.try_recv() {
            Ok(prompt) => Ok(Some(prompt)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Closed) => Err(PromptError::GenerationCancelled),
        }
    }

    /// Wait for the result
    pub async fn wait(self) -> PromptResult<String> {
        self.receiver
            .await
            .map_err(|_| PromptError::GenerationCancelled)
    }
}
