use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::{EditorError, Result};

/// The host's file storage, abstracted so sessions can be driven against the
/// real filesystem, the host's vault layer, or an in-memory store in tests.
pub trait FileStore {
    /// Read a stored drawing. Fails with [`EditorError::NotFound`] when the
    /// path does not exist, [`EditorError::Io`] otherwise.
    fn load(&self, path: &str) -> Result<String>;

    /// Write a drawing, replacing any previous content.
    fn save(&mut self, path: &str, content: &str) -> Result<()>;

    /// Make sure the containing folder exists before a first save.
    fn ensure_container(&mut self, folder: &str) -> Result<()>;
}

/// Filesystem-backed store rooted at a vault directory.
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }
}

impl FileStore for FsStore {
    fn load(&self, path: &str) -> Result<String> {
        log::debug!("loading drawing from {path}");
        std::fs::read_to_string(self.resolve(path)).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                EditorError::NotFound(path.to_owned())
            } else {
                EditorError::Io(e)
            }
        })
    }

    fn save(&mut self, path: &str, content: &str) -> Result<()> {
        log::info!("saving drawing to {path} ({} bytes)", content.len());
        std::fs::write(self.resolve(path), content)?;
        Ok(())
    }

    fn ensure_container(&mut self, folder: &str) -> Result<()> {
        if folder.is_empty() {
            return Ok(());
        }
        std::fs::create_dir_all(self.resolve(folder))?;
        Ok(())
    }
}

/// In-memory store for tests and for hosts that own their file layer.
#[derive(Debug, Default)]
pub struct MemoryStore {
    files: HashMap<String, String>,
    folders: Vec<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    pub fn content(&self, path: &str) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    pub fn folders(&self) -> &[String] {
        &self.folders
    }
}

impl FileStore for MemoryStore {
    fn load(&self, path: &str) -> Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| EditorError::NotFound(path.to_owned()))
    }

    fn save(&mut self, path: &str, content: &str) -> Result<()> {
        self.files.insert(path.to_owned(), content.to_owned());
        Ok(())
    }

    fn ensure_container(&mut self, folder: &str) -> Result<()> {
        if !folder.is_empty() && !self.folders.iter().any(|f| f == folder) {
            self.folders.push(folder.to_owned());
        }
        Ok(())
    }
}
