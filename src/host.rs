//! Collaborator contracts owned by the host application.

use crate::error::Result;

/// Ephemeral user-visible messages. Fire and forget; the core never reads a
/// result back.
pub trait Notifier {
    fn info(&mut self, message: &str);
    fn error(&mut self, message: &str);
}

/// Notifier for hosts without a UI surface: routes messages to the log.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn info(&mut self, message: &str) {
        log::info!("{message}");
    }

    fn error(&mut self, message: &str) {
        log::error!("{message}");
    }
}

/// Inserts a textual embed reference at the caller's cursor once a new
/// drawing is saved. Fails with [`crate::EditorError::NoParent`] when there
/// is no valid insertion point.
pub trait EmbedSink {
    fn insert_embed(&mut self, file_name: &str) -> Result<()>;
}

/// Sink for contexts with nothing to insert into (e.g. re-editing an
/// existing embed from a preview).
#[derive(Debug, Default)]
pub struct NullSink;

impl EmbedSink for NullSink {
    fn insert_embed(&mut self, _file_name: &str) -> Result<()> {
        Ok(())
    }
}

/// The embed syntax the host's markdown pipeline recognizes.
pub fn embed_reference(file_name: &str) -> String {
    format!("![[{file_name}]]")
}
