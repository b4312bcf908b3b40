#![warn(clippy::all, rust_2018_idioms)]

pub mod config;
pub mod document;
pub mod element;
pub mod error;
pub mod history;
pub mod host;
pub mod naming;
pub mod registry;
pub mod session;
pub mod store;
pub mod svg;
pub mod toolbar;

pub use config::Settings;
pub use document::Document;
pub use element::{Element, Style};
pub use error::{EditorError, Result};
pub use history::{DEFAULT_HISTORY_LIMIT, History};
pub use host::{EmbedSink, LogNotifier, Notifier, NullSink};
pub use registry::SessionRegistry;
pub use session::{EditorSession, SessionOrigin, Shortcut};
pub use store::{FileStore, FsStore, MemoryStore};
pub use toolbar::{ToolKind, Toolbar};
