use crate::document::Document;

/// Default maximum number of snapshots kept in a [`History`].
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Bounded stack of whole-document snapshots with a cursor for undo/redo.
///
/// Snapshots are plain-data clones of the [`Document`], not serialized
/// markup, so restoring is a clone rather than a re-parse.
///
/// Invariants:
/// - the entry at the cursor always reflects the last applied mutation;
/// - entries past the cursor are "future" (redo) states and are discarded
///   whenever a new snapshot is pushed after an undo;
/// - when the bound is exceeded the oldest entry is evicted and the cursor
///   stays put, so the stack loses the oldest history, never the newest
///   state.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<Document>,
    cursor: usize,
    limit: usize,
}

impl History {
    /// A history seeded with the document's initial state.
    pub fn new(seed: Document) -> Self {
        Self::with_limit(seed, DEFAULT_HISTORY_LIMIT)
    }

    pub fn with_limit(seed: Document, limit: usize) -> Self {
        debug_assert!(limit >= 2, "a usable history needs room to undo");
        Self {
            entries: vec![seed],
            cursor: 0,
            limit,
        }
    }

    /// Record a snapshot after a committed mutation.
    ///
    /// Truncates any redo states past the cursor first. On overflow the
    /// oldest entry is evicted instead of advancing the cursor.
    pub fn push(&mut self, snapshot: Document) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(snapshot);
        if self.entries.len() > self.limit {
            self.entries.remove(0);
        } else {
            self.cursor += 1;
        }
    }

    /// Step the cursor back and return the snapshot to restore, or `None` at
    /// the oldest entry. Restoring never pushes.
    pub fn undo(&mut self) -> Option<&Document> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(&self.entries[self.cursor])
    }

    /// Step the cursor forward and return the snapshot to restore, or `None`
    /// at the newest entry.
    pub fn redo(&mut self) -> Option<&Document> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(&self.entries[self.cursor])
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The snapshot at the cursor: the last applied state.
    pub fn current(&self) -> &Document {
        &self.entries[self.cursor]
    }
}
