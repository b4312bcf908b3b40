//! One document's edit lifecycle, end to end.

use chrono::{DateTime, Utc};
use kurbo::Point;

use crate::config::Settings;
use crate::document::Document;
use crate::error::Result;
use crate::host::{EmbedSink, Notifier};
use crate::naming;
use crate::store::FileStore;
use crate::svg;
use crate::toolbar::{ToolKind, Toolbar};

/// How the session was opened. Decides what happens on save-and-close:
/// a new drawing inserts its embed reference at the caller's cursor, an
/// existing embed just triggers the host's re-render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOrigin {
    /// A fresh drawing created at the cursor location.
    NewAtCursor,
    /// An existing embedded drawing opened for re-editing.
    ExistingEmbed,
}

/// Session-level keyboard contract, captured by the host while the session
/// is active (Ctrl/Cmd+S and Escape in the source bindings).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Save,
    Cancel,
}

/// An inline editor session: one document, one toolbar, one dirty flag.
///
/// All pointer and keyboard events are forwarded through the session so the
/// dirty flag tracks every committed mutation. The session is the only layer
/// that touches the file store; toolbar and document stay I/O-free.
pub struct EditorSession {
    path: String,
    origin: SessionOrigin,
    doc: Document,
    toolbar: Toolbar,
    dirty: bool,
    closed: bool,
}

impl EditorSession {
    /// Open an existing drawing for editing.
    ///
    /// Load and parse failures are surfaced once via the notifier and abort
    /// the session; nothing is mounted.
    pub fn open(
        path: &str,
        store: &mut dyn FileStore,
        notifier: &mut dyn Notifier,
        settings: &Settings,
    ) -> Result<Self> {
        let content = store.load(path).inspect_err(|e| {
            notifier.error(&format!("Failed to load drawing: {e}"));
        })?;
        let doc = svg::parse(&content).inspect_err(|e| {
            notifier.error(&format!("Cannot edit {path}: {e}"));
        })?;
        log::info!("opened drawing {path} ({} elements)", doc.len());
        let toolbar = Toolbar::new(&doc, settings);
        Ok(Self {
            path: path.to_owned(),
            origin: SessionOrigin::ExistingEmbed,
            doc,
            toolbar,
            dirty: false,
            closed: false,
        })
    }

    /// Create a blank drawing at a fresh timestamp-derived path under the
    /// configured folder. The session starts dirty: the file does not exist
    /// until the first save.
    pub fn create_blank(
        settings: &Settings,
        store: &mut dyn FileStore,
        notifier: &mut dyn Notifier,
        now: DateTime<Utc>,
    ) -> Result<Self> {
        store.ensure_container(&settings.default_folder).inspect_err(|e| {
            notifier.error(&format!("Cannot create drawing folder: {e}"));
        })?;
        let path = naming::drawing_path(&settings.default_folder, now);
        let doc = Document::new(settings.default_width, settings.default_height);
        log::info!("created blank drawing {path}");
        let toolbar = Toolbar::new(&doc, settings);
        Ok(Self {
            path,
            origin: SessionOrigin::NewAtCursor,
            doc,
            toolbar,
            dirty: true,
            closed: false,
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// File name portion of the path, as used in the embed reference.
    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    pub fn origin(&self) -> SessionOrigin {
        self.origin
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn toolbar(&self) -> &Toolbar {
        &self.toolbar
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    // Event forwarding. Each call drains the toolbar's change flag into the
    // session dirty bit.

    pub fn select_tool(&mut self, tool: ToolKind) {
        self.toolbar.select_tool(tool);
    }

    pub fn set_stroke_color(&mut self, color: impl Into<String>) {
        self.toolbar.set_stroke_color(color);
    }

    pub fn set_stroke_width(&mut self, width: f64) {
        self.toolbar.set_stroke_width(width);
    }

    pub fn set_fill_color(&mut self, color: impl Into<String>) {
        self.toolbar.set_fill_color(color);
    }

    pub fn pointer_down(&mut self, p: Point) {
        self.toolbar.pointer_down(&mut self.doc, p);
        self.sync_dirty();
    }

    pub fn pointer_move(&mut self, p: Point) {
        self.toolbar.pointer_move(&mut self.doc, p);
        self.sync_dirty();
    }

    pub fn pointer_up(&mut self) {
        self.toolbar.pointer_up(&mut self.doc);
        self.sync_dirty();
    }

    pub fn key_delete(&mut self) {
        self.toolbar.key_delete(&mut self.doc);
        self.sync_dirty();
    }

    pub fn undo(&mut self) {
        self.toolbar.undo(&mut self.doc);
        self.sync_dirty();
    }

    pub fn redo(&mut self) {
        self.toolbar.redo(&mut self.doc);
        self.sync_dirty();
    }

    fn sync_dirty(&mut self) {
        if self.toolbar.take_changed() {
            self.dirty = true;
        }
    }

    /// Serialize and write the document. An I/O failure is surfaced via the
    /// notifier and returned so callers can react; the session stays open.
    pub fn save(&mut self, store: &mut dyn FileStore, notifier: &mut dyn Notifier) -> Result<()> {
        let content = svg::serialize(&self.doc);
        store.save(&self.path, &content).inspect_err(|e| {
            notifier.error(&format!("Failed to save drawing: {e}"));
        })?;
        self.dirty = false;
        notifier.info("Drawing saved");
        Ok(())
    }

    /// Save, fire the save-callback (embed insertion for new drawings), then
    /// close. A failed save keeps the session open.
    pub fn request_close(
        &mut self,
        store: &mut dyn FileStore,
        notifier: &mut dyn Notifier,
        sink: &mut dyn EmbedSink,
    ) -> Result<()> {
        self.save(store, notifier)?;
        if self.origin == SessionOrigin::NewAtCursor {
            if let Err(e) = sink.insert_embed(self.file_name()) {
                // Surface once; the drawing is saved either way.
                notifier.error(&format!("Could not insert embed reference: {e}"));
            }
        }
        self.close();
        Ok(())
    }

    /// Close without saving. Discarding unsaved changes requires the host to
    /// pass explicit user confirmation; returns whether the session closed.
    pub fn request_cancel(&mut self, confirmed: bool) -> bool {
        if self.dirty && !confirmed {
            return false;
        }
        self.close();
        true
    }

    /// Apply the session-level keyboard contract. Returns whether the
    /// session closed.
    pub fn handle_shortcut(
        &mut self,
        shortcut: Shortcut,
        store: &mut dyn FileStore,
        notifier: &mut dyn Notifier,
        sink: &mut dyn EmbedSink,
        confirm_discard: bool,
    ) -> Result<bool> {
        match shortcut {
            Shortcut::Save => {
                self.request_close(store, notifier, sink)?;
                Ok(true)
            }
            Shortcut::Cancel => Ok(self.request_cancel(confirm_discard)),
        }
    }

    /// Tear down. Restoring the prior display (or removing the editor
    /// surface) is the host's side of this call.
    fn close(&mut self) {
        self.closed = true;
        log::debug!("closed drawing session for {}", self.path);
    }
}
