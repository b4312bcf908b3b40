use crate::host::{EmbedSink, Notifier};
use crate::session::EditorSession;
use crate::store::FileStore;

/// Single-slot session manager: at most one editor session is active at a
/// time, process-wide. Passed by reference to whatever opens sessions rather
/// than living in a global.
#[derive(Default)]
pub struct SessionRegistry {
    active: Option<EditorSession>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn active(&self) -> Option<&EditorSession> {
        self.active.as_ref()
    }

    pub fn active_mut(&mut self) -> Option<&mut EditorSession> {
        self.active.as_mut()
    }

    /// Make `session` the active one. Any previously active session is saved
    /// and closed first, so exactly one session is active afterwards.
    pub fn activate(
        &mut self,
        session: EditorSession,
        store: &mut dyn FileStore,
        notifier: &mut dyn Notifier,
        sink: &mut dyn EmbedSink,
    ) {
        if let Some(mut previous) = self.active.take() {
            // The error is already surfaced via the notifier; the old session
            // still yields its slot.
            if let Err(e) = previous.request_close(store, notifier, sink) {
                log::warn!(
                    "could not save {} while switching sessions: {e}",
                    previous.path()
                );
            }
        }
        self.active = Some(session);
    }

    /// Clear the slot without closing the session. Used when a session
    /// reports that it closed itself.
    pub fn deactivate(&mut self) -> Option<EditorSession> {
        self.active.take()
    }

    /// Save and close the active session, if any. Called at plugin unload.
    pub fn force_close_active(
        &mut self,
        store: &mut dyn FileStore,
        notifier: &mut dyn Notifier,
        sink: &mut dyn EmbedSink,
    ) {
        if let Some(mut session) = self.active.take() {
            if let Err(e) = session.request_close(store, notifier, sink) {
                log::warn!("could not save {} at teardown: {e}", session.path());
            }
        }
    }
}
