//! Filesystem Abstraction
//!
//! Seam between option-driven components and the filesystem. The options
//! builder defaults to the in-memory implementation so unit tests never touch
//! the disk; `set_workdir_to_real_temp_dir` swaps in the real one.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Filesystem operations used by option-driven components
pub trait FileSystem: Send + Sync {
    /// Read a file's full contents
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Write a file, replacing any existing contents
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    /// Check whether a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all missing parents
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Remove a directory tree
    fn remove_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Short name identifying the implementation ("memory" or "os")
    fn name(&self) -> &'static str;
}

/// Filesystem backed by the operating system
#[derive(Debug, Default)]
pub struct RealFileSystem;

impl RealFileSystem {
    pub const fn new() -> Self {
        Self
    }
}

impl FileSystem for RealFileSystem {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        std::fs::write(path, contents)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::remove_dir_all(path)
    }

    fn name(&self) -> &'static str {
        "os"
    }
}

/// In-memory filesystem for tests
///
/// Directories are implicit: writing `/a/b/c` makes `/a` and `/a/b` exist.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFileSystem {
    files: Arc<Mutex<HashMap<PathBuf, Vec<u8>>>>,
}

impl InMemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> io::Result<std::sync::MutexGuard<'_, HashMap<PathBuf, Vec<u8>>>> {
        self.files
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("lock poisoned: {e}")))
    }
}

impl FileSystem for InMemoryFileSystem {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.lock()?
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, path.display().to_string()))
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        self.lock()?.insert(path.to_path_buf(), contents.to_vec());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let Ok(files) = self.files.lock() else {
            return false;
        };
        files.contains_key(path) || files.keys().any(|k| k.starts_with(path))
    }

    fn create_dir_all(&self, _path: &Path) -> io::Result<()> {
        // Directories are implicit in the map keys.
        Ok(())
    }

    fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        self.lock()?.retain(|k, _| !k.starts_with(path));
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
