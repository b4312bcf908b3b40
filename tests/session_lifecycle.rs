use chrono::{TimeZone, Utc};
use inkline::config::Settings;
use inkline::error::{EditorError, Result};
use inkline::host::{EmbedSink, Notifier, embed_reference};
use inkline::registry::SessionRegistry;
use inkline::session::{EditorSession, SessionOrigin, Shortcut};
use inkline::store::{FileStore, FsStore, MemoryStore};
use inkline::toolbar::ToolKind;
use kurbo::Point;

#[derive(Default)]
struct RecordingNotifier {
    infos: Vec<String>,
    errors: Vec<String>,
}

impl Notifier for RecordingNotifier {
    fn info(&mut self, message: &str) {
        self.infos.push(message.to_owned());
    }

    fn error(&mut self, message: &str) {
        self.errors.push(message.to_owned());
    }
}

#[derive(Default)]
struct RecordingSink {
    inserted: Vec<String>,
}

impl EmbedSink for RecordingSink {
    fn insert_embed(&mut self, file_name: &str) -> Result<()> {
        self.inserted.push(embed_reference(file_name));
        Ok(())
    }
}

/// A store whose writes always fail, for exercising the save error path.
struct BrokenStore;

impl FileStore for BrokenStore {
    fn load(&self, path: &str) -> Result<String> {
        Err(EditorError::NotFound(path.to_owned()))
    }

    fn save(&mut self, _path: &str, _content: &str) -> Result<()> {
        Err(EditorError::Io(std::io::Error::other("disk full")))
    }

    fn ensure_container(&mut self, _folder: &str) -> Result<()> {
        Ok(())
    }
}

fn fixed_now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 26, 12, 0, 0).unwrap()
}

#[test]
fn blank_drawing_round_trips_through_the_store() {
    let settings = Settings::default();
    let mut store = MemoryStore::new();
    let mut notifier = RecordingNotifier::default();

    // New blank document, saved with zero mutations.
    let mut session =
        EditorSession::create_blank(&settings, &mut store, &mut notifier, fixed_now()).unwrap();
    assert_eq!(session.origin(), SessionOrigin::NewAtCursor);
    assert!(session.is_dirty(), "an unsaved new file starts dirty");
    session.save(&mut store, &mut notifier).unwrap();
    assert!(!session.is_dirty());

    let path = session.path().to_owned();
    assert!(path.starts_with("Drawings/drawing-"));
    assert_eq!(store.folders(), ["Drawings"]);

    // Reloading yields an empty document with the settings-derived size.
    let reopened = EditorSession::open(&path, &mut store, &mut notifier, &settings).unwrap();
    assert!(reopened.document().is_empty());
    assert_eq!(reopened.document().width(), 800.0);
    assert_eq!(reopened.document().height(), 600.0);
}

#[test]
fn edits_round_trip_through_the_store() {
    let settings = Settings::default();
    let mut store = MemoryStore::new();
    let mut notifier = RecordingNotifier::default();

    let mut session =
        EditorSession::create_blank(&settings, &mut store, &mut notifier, fixed_now()).unwrap();
    session.select_tool(ToolKind::Rect);
    session.pointer_down(Point::new(10.0, 10.0));
    session.pointer_move(Point::new(60.0, 40.0));
    session.pointer_up();
    let drawn = session.document().clone();
    session.save(&mut store, &mut notifier).unwrap();

    let path = session.path().to_owned();
    let reopened = EditorSession::open(&path, &mut store, &mut notifier, &settings).unwrap();
    assert!(reopened.document().same_content(&drawn));
    assert!(!reopened.is_dirty());
}

#[test]
fn pointer_events_mark_the_session_dirty() {
    let settings = Settings::default();
    let mut store = MemoryStore::new();
    let mut notifier = RecordingNotifier::default();

    let mut session =
        EditorSession::create_blank(&settings, &mut store, &mut notifier, fixed_now()).unwrap();
    session.save(&mut store, &mut notifier).unwrap();
    assert!(!session.is_dirty());

    // The drag itself does not commit; release does.
    session.pointer_down(Point::new(10.0, 10.0));
    session.pointer_move(Point::new(20.0, 20.0));
    assert!(!session.is_dirty());
    session.pointer_up();
    assert!(session.is_dirty());
}

#[test]
fn closing_a_new_drawing_inserts_its_embed_reference() {
    let settings = Settings::default();
    let mut store = MemoryStore::new();
    let mut notifier = RecordingNotifier::default();
    let mut sink = RecordingSink::default();

    let mut session =
        EditorSession::create_blank(&settings, &mut store, &mut notifier, fixed_now()).unwrap();
    let file_name = session.file_name().to_owned();
    session
        .request_close(&mut store, &mut notifier, &mut sink)
        .unwrap();

    assert!(session.is_closed());
    assert!(store.contains(session.path()));
    assert_eq!(sink.inserted, [format!("![[{file_name}]]")]);
}

#[test]
fn closing_an_existing_embed_does_not_insert_a_reference() {
    let settings = Settings::default();
    let mut store = MemoryStore::new();
    let mut notifier = RecordingNotifier::default();
    let mut sink = RecordingSink::default();

    let mut session =
        EditorSession::create_blank(&settings, &mut store, &mut notifier, fixed_now()).unwrap();
    session.save(&mut store, &mut notifier).unwrap();
    let path = session.path().to_owned();

    let mut reopened = EditorSession::open(&path, &mut store, &mut notifier, &settings).unwrap();
    reopened
        .request_close(&mut store, &mut notifier, &mut sink)
        .unwrap();
    assert!(sink.inserted.is_empty());
}

#[test]
fn cancel_with_unsaved_changes_requires_confirmation() {
    let settings = Settings::default();
    let mut store = MemoryStore::new();
    let mut notifier = RecordingNotifier::default();

    let mut session =
        EditorSession::create_blank(&settings, &mut store, &mut notifier, fixed_now()).unwrap();
    session.pointer_down(Point::new(10.0, 10.0));
    session.pointer_up();

    assert!(!session.request_cancel(false), "dirty cancel needs explicit confirmation");
    assert!(!session.is_closed());

    assert!(session.request_cancel(true));
    assert!(session.is_closed());
    // Nothing was written.
    assert!(!store.contains(session.path()));
}

#[test]
fn clean_cancel_closes_without_confirmation() {
    let settings = Settings::default();
    let mut store = MemoryStore::new();
    let mut notifier = RecordingNotifier::default();

    let mut session =
        EditorSession::create_blank(&settings, &mut store, &mut notifier, fixed_now()).unwrap();
    session.save(&mut store, &mut notifier).unwrap();
    assert!(session.request_cancel(false));
    assert!(session.is_closed());
}

#[test]
fn save_shortcut_saves_and_closes() {
    let settings = Settings::default();
    let mut store = MemoryStore::new();
    let mut notifier = RecordingNotifier::default();
    let mut sink = RecordingSink::default();

    let mut session =
        EditorSession::create_blank(&settings, &mut store, &mut notifier, fixed_now()).unwrap();
    let closed = session
        .handle_shortcut(Shortcut::Save, &mut store, &mut notifier, &mut sink, false)
        .unwrap();
    assert!(closed);
    assert!(store.contains(session.path()));
}

#[test]
fn escape_shortcut_respects_the_dirty_guard() {
    let settings = Settings::default();
    let mut store = MemoryStore::new();
    let mut notifier = RecordingNotifier::default();
    let mut sink = RecordingSink::default();

    let mut session =
        EditorSession::create_blank(&settings, &mut store, &mut notifier, fixed_now()).unwrap();
    let closed = session
        .handle_shortcut(Shortcut::Cancel, &mut store, &mut notifier, &mut sink, false)
        .unwrap();
    assert!(!closed);
    assert!(!session.is_closed());
}

#[test]
fn opening_a_missing_drawing_is_surfaced_once() {
    let settings = Settings::default();
    let mut store = MemoryStore::new();
    let mut notifier = RecordingNotifier::default();

    let result = EditorSession::open("Drawings/nope.svg", &mut store, &mut notifier, &settings);
    assert!(matches!(result, Err(EditorError::NotFound(_))));
    assert_eq!(notifier.errors.len(), 1);
}

#[test]
fn opening_invalid_content_is_surfaced_once() {
    let settings = Settings::default();
    let mut store = MemoryStore::new();
    let mut notifier = RecordingNotifier::default();
    store.save("Drawings/bad.svg", "this is not a drawing").unwrap();

    let result = EditorSession::open("Drawings/bad.svg", &mut store, &mut notifier, &settings);
    assert!(matches!(result, Err(EditorError::InvalidFormat(_))));
    assert_eq!(notifier.errors.len(), 1);
}

#[test]
fn failed_save_keeps_the_session_open_and_dirty() {
    let settings = Settings::default();
    let mut memory = MemoryStore::new();
    let mut broken = BrokenStore;
    let mut notifier = RecordingNotifier::default();
    let mut sink = RecordingSink::default();

    let mut session =
        EditorSession::create_blank(&settings, &mut memory, &mut notifier, fixed_now()).unwrap();
    let result = session.request_close(&mut broken, &mut notifier, &mut sink);

    assert!(matches!(result, Err(EditorError::Io(_))));
    assert!(!session.is_closed());
    assert!(session.is_dirty());
    assert_eq!(notifier.errors.len(), 1);
    assert!(sink.inserted.is_empty());
}

#[test]
fn registry_keeps_exactly_one_session_active() {
    let settings = Settings::default();
    let mut store = MemoryStore::new();
    let mut notifier = RecordingNotifier::default();
    let mut sink = RecordingSink::default();
    let mut registry = SessionRegistry::new();

    let first =
        EditorSession::create_blank(&settings, &mut store, &mut notifier, fixed_now()).unwrap();
    let first_path = first.path().to_owned();
    registry.activate(first, &mut store, &mut notifier, &mut sink);
    assert!(registry.has_active());

    let second = EditorSession::create_blank(
        &settings,
        &mut store,
        &mut notifier,
        fixed_now() + chrono::Duration::seconds(1),
    )
    .unwrap();
    let second_path = second.path().to_owned();
    registry.activate(second, &mut store, &mut notifier, &mut sink);

    // Exactly one active session, and the prior one was saved first.
    assert_eq!(registry.active().unwrap().path(), second_path);
    assert!(store.contains(&first_path));
}

#[test]
fn deactivate_clears_the_slot_without_closing() {
    let settings = Settings::default();
    let mut store = MemoryStore::new();
    let mut notifier = RecordingNotifier::default();
    let mut sink = RecordingSink::default();
    let mut registry = SessionRegistry::new();

    let session =
        EditorSession::create_blank(&settings, &mut store, &mut notifier, fixed_now()).unwrap();
    registry.activate(session, &mut store, &mut notifier, &mut sink);

    let released = registry.deactivate().unwrap();
    assert!(!registry.has_active());
    assert!(!released.is_closed());
}

#[test]
fn force_close_saves_at_teardown() {
    let settings = Settings::default();
    let mut store = MemoryStore::new();
    let mut notifier = RecordingNotifier::default();
    let mut sink = RecordingSink::default();
    let mut registry = SessionRegistry::new();

    let session =
        EditorSession::create_blank(&settings, &mut store, &mut notifier, fixed_now()).unwrap();
    let path = session.path().to_owned();
    registry.activate(session, &mut store, &mut notifier, &mut sink);

    registry.force_close_active(&mut store, &mut notifier, &mut sink);
    assert!(!registry.has_active());
    assert!(store.contains(&path));

    // Idempotent with nothing active.
    registry.force_close_active(&mut store, &mut notifier, &mut sink);
}

#[test]
fn fs_store_round_trips_through_a_real_directory() {
    let settings = Settings::default();
    let dir = tempfile::tempdir().unwrap();
    let mut store = FsStore::new(dir.path());
    let mut notifier = RecordingNotifier::default();

    let mut session =
        EditorSession::create_blank(&settings, &mut store, &mut notifier, fixed_now()).unwrap();
    session.pointer_down(Point::new(5.0, 5.0));
    session.pointer_up();
    session.save(&mut store, &mut notifier).unwrap();
    let drawn = session.document().clone();
    let path = session.path().to_owned();

    assert!(dir.path().join(&path).exists());
    let reopened = EditorSession::open(&path, &mut store, &mut notifier, &settings).unwrap();
    assert!(reopened.document().same_content(&drawn));

    let missing = store.load("Drawings/missing.svg");
    assert!(matches!(missing, Err(EditorError::NotFound(_))));
}
