//! File-based locking for single-writer safety.
//!
//! Cross-platform (fs2) advisory locks:
//! - Exclusive: single writer process per snapshot file.
//! - Shared: read-only handles that must not race a writer's rewrite.
//!
//! Lock file path: <book>.lock (sibling of the snapshot file).
//! Lock is released on Drop.

use anyhow::{Context, Result};
use fs2::FileExt;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use crate::consts::LOCK_SUFFIX;

#[derive(Debug, Clone, Copy)]
pub enum LockMode {
    Shared,
    Exclusive,
}

pub struct LockGuard {
    file: std::fs::File,
    path: PathBuf,
    mode: LockMode,
}

impl LockGuard {
    fn new(file: std::fs::File, path: PathBuf, mode: LockMode) -> Self {
        Self { file, path, mode }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn mode(&self) -> LockMode {
        self.mode
    }
}

impl Drop for LockGuard {
    fn drop(&mut self) {
        // fs2 unlock errors on drop are ignored deliberately.
        let _ = self.file.unlock();
    }
}

pub fn lock_file_path(book_path: &Path) -> PathBuf {
    let mut name = book_path.as_os_str().to_os_string();
    name.push(".");
    name.push(LOCK_SUFFIX);
    PathBuf::from(name)
}

fn open_lock_file(book_path: &Path) -> Result<std::fs::File> {
    let path = lock_file_path(book_path);
    let f = OpenOptions::new()
        .create(true)
        .read(true)
        .write(true)
        .open(&path)
        .with_context(|| format!("open lock file {}", path.display()))?;
    Ok(f)
}

/// Acquire a lock in the requested mode. Blocks until acquired.
pub fn acquire_lock(book_path: &Path, mode: LockMode) -> Result<LockGuard> {
    let file = open_lock_file(book_path)?;
    match mode {
        LockMode::Shared => file
            .lock_shared()
            .with_context(|| format!("lock_shared {}", lock_file_path(book_path).display()))?,
        LockMode::Exclusive => file
            .lock_exclusive()
            .with_context(|| format!("lock_exclusive {}", lock_file_path(book_path).display()))?,
    }
    Ok(LockGuard::new(file, lock_file_path(book_path), mode))
}

/// Try to acquire a lock in the requested mode. Returns Err if already locked.
pub fn try_acquire_lock(book_path: &Path, mode: LockMode) -> Result<LockGuard> {
    let file = open_lock_file(book_path)?;
    match mode {
        LockMode::Shared => file
            .try_lock_shared()
            .with_context(|| format!("try_lock_shared {}", lock_file_path(book_path).display()))?,
        LockMode::Exclusive => file
            .try_lock_exclusive()
            .with_context(|| format!("try_lock_exclusive {}", lock_file_path(book_path).display()))?,
    }
    Ok(LockGuard::new(file, lock_file_path(book_path), mode))
}
