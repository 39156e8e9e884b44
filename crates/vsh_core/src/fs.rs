use std::collections::HashMap;

use thiserror::Error;

/// An error raised by a [`FileSystem`] operation.
///
/// The executor normalizes these into a failed command result; they never
/// escape its boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FsError {
    /// The named path does not exist.
    #[error("no such file or directory")]
    NotFound,

    /// The path exists but cannot be accessed.
    #[error("permission denied")]
    PermissionDenied,

    /// Any other failure reported by the storage backend.
    #[error("{0}")]
    Other(String),
}

/// The storage capability consumed for redirects and file builtins.
///
/// The actual storage layer backing files and directories is an external
/// collaborator; this trait is the narrow interface the shell consumes.
pub trait FileSystem: Send {
    /// Returns the contents of the file at `path`.
    fn read(&self, path: &str) -> Result<String, FsError>;

    /// Replaces the contents of the file at `path`, creating it if needed.
    fn write(&mut self, path: &str, contents: &str) -> Result<(), FsError>;

    /// Appends to the file at `path`, creating it if needed.
    fn append(&mut self, path: &str, contents: &str) -> Result<(), FsError>;

    /// Returns `true` if a file exists at `path`.
    fn exists(&self, path: &str) -> bool;
}

/// In-memory reference implementation of [`FileSystem`].
///
/// Paths are plain string keys without hierarchy semantics.
#[derive(Debug, Clone, Default)]
pub struct MemFileSystem {
    files: HashMap<String, String>,
}

impl MemFileSystem {
    /// Constructs a new empty file system.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a file, replacing any previous contents.
    pub fn insert(&mut self, path: impl Into<String>, contents: impl Into<String>) {
        self.files.insert(path.into(), contents.into());
    }
}

impl FileSystem for MemFileSystem {
    fn read(&self, path: &str) -> Result<String, FsError> {
        self.files.get(path).cloned().ok_or(FsError::NotFound)
    }

    fn write(&mut self, path: &str, contents: &str) -> Result<(), FsError> {
        self.files.insert(path.to_owned(), contents.to_owned());
        Ok(())
    }

    fn append(&mut self, path: &str, contents: &str) -> Result<(), FsError> {
        self.files.entry(path.to_owned()).or_default().push_str(contents);
        Ok(())
    }

    fn exists(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_missing_file() {
        let fs = MemFileSystem::new();
        assert_eq!(fs.read("/missing"), Err(FsError::NotFound));
        assert!(!fs.exists("/missing"));
    }

    #[test]
    fn write_replaces_contents() {
        let mut fs = MemFileSystem::new();
        fs.write("/f", "first").unwrap();
        fs.write("/f", "second").unwrap();
        assert_eq!(fs.read("/f"), Ok("second".into()));
        assert!(fs.exists("/f"));
    }

    #[test]
    fn append_concatenates_in_order() {
        let mut fs = MemFileSystem::new();
        fs.append("/f", "first\n").unwrap();
        fs.append("/f", "second\n").unwrap();
        assert_eq!(fs.read("/f"), Ok("first\nsecond\n".into()));
    }
}
