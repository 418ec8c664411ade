//! Copy-to-clipboard behavior for rendered code blocks.
//!
//! The host owns the real clipboard; this module only decides what gets
//! copied and how long the button shows its confirmation.

use std::time::{Duration, Instant};

use crate::config::CodeConfig;
use crate::error::ClipboardError;

/// Implemented by the host UI around its system clipboard.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Display state of one code block's copy button.
#[derive(Debug, Clone, Default)]
pub struct CopyButton {
    copied_at: Option<Instant>,
}

impl CopyButton {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy `code` verbatim. On failure the button stays in its idle state
    /// and the error goes back to the host.
    pub fn press(
        &mut self,
        clipboard: &mut impl Clipboard,
        code: &str,
        now: Instant,
    ) -> Result<(), ClipboardError> {
        clipboard.set_text(code)?;
        tracing::debug!(bytes = code.len(), "copied code block");
        self.copied_at = Some(now);
        Ok(())
    }

    pub fn is_copied(&self, now: Instant, feedback: Duration) -> bool {
        self.copied_at
            .is_some_and(|at| now.saturating_duration_since(at) < feedback)
    }

    pub fn label<'a>(&self, now: Instant, config: &'a CodeConfig) -> &'a str {
        if self.is_copied(now, config.feedback()) {
            &config.copied_label
        } else {
            &config.copy_label
        }
    }
}
