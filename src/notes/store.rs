//! NoteStore — file-per-note persistence under a single root directory.
//!
//! Stateless beyond the root path; no in-process locking. `create` relies
//! on exclusive file creation, so the existence check and the write are one
//! atomic step. `update` and `delete` are check-then-act: a concurrent
//! delete can turn a successful existence check into `NotFound` or `Io`.
//! That window is inherent to the no-locking model and is left open.

use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::file_ops;

/// A note as returned by [`NoteStore::list`] and the listing endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub name: String,
    pub text: String,
}

/// Errors a note operation can produce.
#[derive(Debug)]
pub enum NoteError {
    /// No file with this name under the root.
    NotFound(String),
    /// `create` targeted a name that already has a backing file.
    AlreadyExists(String),
    /// The name is empty, hidden, or would escape the root directory.
    InvalidName(String),
    /// Any other storage failure.
    Io(io::Error),
}

impl fmt::Display for NoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoteError::NotFound(name) => write!(f, "note not found: {}", name),
            NoteError::AlreadyExists(name) => write!(f, "note already exists: {}", name),
            NoteError::InvalidName(name) => write!(f, "invalid note name: {:?}", name),
            NoteError::Io(e) => write!(f, "storage error: {}", e),
        }
    }
}

impl std::error::Error for NoteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NoteError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for NoteError {
    fn from(e: io::Error) -> Self {
        NoteError::Io(e)
    }
}

/// Sole authority for note persistence.
pub struct NoteStore {
    root: PathBuf,
}

impl NoteStore {
    /// Create a store over `root`, creating the directory if missing.
    pub fn new(root: PathBuf) -> io::Result<Self> {
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// The root directory all notes live under.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn note_path(&self, name: &str) -> Result<PathBuf, NoteError> {
        file_ops::validate_name(name)?;
        Ok(self.root.join(name))
    }

    /// Create a new note. Fails with `AlreadyExists` if a note with this
    /// name is already present; the check and the write are atomic via
    /// exclusive create.
    pub fn create(&self, name: &str, content: &str) -> Result<(), NoteError> {
        let path = self.note_path(name)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| match e.kind() {
                io::ErrorKind::AlreadyExists => NoteError::AlreadyExists(name.to_string()),
                _ => NoteError::Io(e),
            })?;

        file.write_all(content.as_bytes())?;
        Ok(())
    }

    /// Read a note's full content.
    pub fn read(&self, name: &str) -> Result<String, NoteError> {
        let path = self.note_path(name)?;

        fs::read_to_string(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => NoteError::NotFound(name.to_string()),
            _ => NoteError::Io(e),
        })
    }

    /// Replace a note's content wholesale. Never creates: fails with
    /// `NotFound` if the note is absent.
    pub fn update(&self, name: &str, content: &str) -> Result<(), NoteError> {
        let path = self.note_path(name)?;

        if !path.is_file() {
            return Err(NoteError::NotFound(name.to_string()));
        }

        fs::write(&path, content)?;
        Ok(())
    }

    /// Remove a note. Fails with `NotFound` if it does not exist.
    pub fn delete(&self, name: &str) -> Result<(), NoteError> {
        let path = self.note_path(name)?;

        fs::remove_file(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => NoteError::NotFound(name.to_string()),
            _ => NoteError::Io(e),
        })
    }

    /// List every note with its content, sorted by name.
    ///
    /// A file that disappears between enumeration and read is skipped;
    /// any other per-file read failure aborts the whole call.
    pub fn list(&self) -> Result<Vec<Note>, NoteError> {
        let files = file_ops::list_note_files(&self.root)?;

        let mut notes = Vec::with_capacity(files.len());
        for path in files {
            let name = match path.file_name().and_then(|n| n.to_str()) {
                Some(n) => n.to_string(),
                None => continue,
            };
            let text = match fs::read_to_string(&path) {
                Ok(t) => t,
                Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
                Err(e) => return Err(NoteError::Io(e)),
            };
            notes.push(Note { name, text });
        }

        notes.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(notes)
    }

    /// Number of notes currently on disk.
    pub fn count(&self) -> Result<usize, NoteError> {
        Ok(file_ops::list_note_files(&self.root)?.len())
    }
}
