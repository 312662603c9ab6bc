//! File operations for the notes system.
//!
//! Name validation and root-directory enumeration. Content I/O lives in the
//! store; these helpers never read or write note bodies.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::store::NoteError;

/// Check that a client-supplied note name is safe to use as a single
/// filename directly under the root directory.
///
/// Rejects empty names, `.`/`..`, anything containing a path separator,
/// and leading-dot names. Hidden files are reserved for the service itself
/// and are never listed, so a note with such a name could not be observed
/// through the API.
pub fn validate_name(name: &str) -> Result<(), NoteError> {
    if name.is_empty() || name == "." || name == ".." {
        return Err(NoteError::InvalidName(name.to_string()));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(NoteError::InvalidName(name.to_string()));
    }
    if name.starts_with('.') {
        return Err(NoteError::InvalidName(name.to_string()));
    }
    Ok(())
}

/// List note files directly under the root (non-recursive).
///
/// Skips subdirectories and hidden files. Order is whatever the directory
/// enumeration yields; callers that need determinism sort.
pub fn list_note_files(root: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(root)? {
        let entry = entry?;
        if entry
            .file_name()
            .to_string_lossy()
            .starts_with('.')
        {
            continue;
        }
        let path = entry.path();
        if path.is_dir() {
            continue;
        }
        files.push(path);
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_validate_name_accepts_plain_names() {
        assert!(validate_name("groceries").is_ok());
        assert!(validate_name("meeting-2024.txt").is_ok());
        assert!(validate_name("a").is_ok());
    }

    #[test]
    fn test_validate_name_rejects_empty_and_dots() {
        assert!(validate_name("").is_err());
        assert!(validate_name(".").is_err());
        assert!(validate_name("..").is_err());
    }

    #[test]
    fn test_validate_name_rejects_separators() {
        assert!(validate_name("../escape").is_err());
        assert!(validate_name("a/b").is_err());
        assert!(validate_name("a\\b").is_err());
        assert!(validate_name("/etc/passwd").is_err());
    }

    #[test]
    fn test_validate_name_rejects_hidden() {
        assert!(validate_name(".hidden").is_err());
        assert!(validate_name(".notes.db").is_err());
    }

    #[test]
    fn test_list_note_files_skips_dirs_and_hidden() {
        let dir = tempdir().unwrap();
        let root = dir.path();

        fs::write(root.join("visible"), "content").unwrap();
        fs::write(root.join(".hidden"), "secret").unwrap();
        fs::create_dir(root.join("subdir")).unwrap();

        let files = list_note_files(root).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].file_name().unwrap(), "visible");
    }

    #[test]
    fn test_list_note_files_empty_root() {
        let dir = tempdir().unwrap();
        let files = list_note_files(dir.path()).unwrap();
        assert!(files.is_empty());
    }
}
