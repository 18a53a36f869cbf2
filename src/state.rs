//! Well-known file names and crash-safe writes.
//!
//! Writes go to a sibling temp file which is renamed over the target while
//! holding an exclusive lock, so readers never see a half-written workspace.

use std::fs::{self, File, TryLockError};
use std::io;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

use crate::Result;

pub const WORKSPACE_FILENAME: &str = "geomech.json";
pub const CONFIG_FILENAME: &str = ".geomech-guard.toml";

/// Default lock timeout in milliseconds.
pub const DEFAULT_LOCK_TIMEOUT_MS: u64 = 5000;

const LOCK_POLL_INTERVAL_MS: u64 = 50;

/// Result of a save that may be skipped when another writer holds the lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    Skipped,
}

/// Ensure the parent directory exists for a given path.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

#[derive(Debug)]
pub enum LockError {
    Timeout,
    Io(io::Error),
}

impl From<io::Error> for LockError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl std::fmt::Display for LockError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Timeout => write!(f, "lock acquisition timed out"),
            Self::Io(e) => write!(f, "lock I/O error: {e}"),
        }
    }
}

impl std::error::Error for LockError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Timeout => None,
            Self::Io(e) => Some(e),
        }
    }
}

fn poll_lock(
    timeout_ms: u64,
    mut attempt: impl FnMut() -> std::result::Result<(), TryLockError>,
) -> std::result::Result<(), LockError> {
    let start = Instant::now();
    let timeout = Duration::from_millis(timeout_ms);
    let poll_interval = Duration::from_millis(LOCK_POLL_INTERVAL_MS);

    loop {
        match attempt() {
            Ok(()) => return Ok(()),
            Err(TryLockError::WouldBlock) => {
                if start.elapsed() >= timeout {
                    return Err(LockError::Timeout);
                }
                thread::sleep(poll_interval);
            }
            Err(TryLockError::Error(e)) => return Err(LockError::Io(e)),
        }
    }
}

/// Try to acquire an exclusive (write) lock on the file with timeout.
///
/// # Errors
/// - `LockError::Timeout` if lock cannot be acquired within `timeout_ms`
/// - `LockError::Io` for other I/O errors
pub fn try_lock_exclusive_with_timeout(
    file: &File,
    timeout_ms: u64,
) -> std::result::Result<(), LockError> {
    poll_lock(timeout_ms, || file.try_lock())
}

/// Try to acquire a shared (read) lock on the file with timeout.
///
/// # Errors
/// - `LockError::Timeout` if lock cannot be acquired within `timeout_ms`
/// - `LockError::Io` for other I/O errors
pub fn try_lock_shared_with_timeout(
    file: &File,
    timeout_ms: u64,
) -> std::result::Result<(), LockError> {
    poll_lock(timeout_ms, || file.try_lock_shared())
}

/// Unlock failures are ignored; the lock is released on close anyway.
pub fn unlock_file(file: &File) {
    let _ = file.unlock();
}

/// Shared lock held for the duration of a read. Reading proceeds unlocked on timeout.
pub struct SharedLockGuard<'a> {
    file: Option<&'a File>,
}

impl<'a> SharedLockGuard<'a> {
    #[must_use]
    pub fn try_acquire(file: &'a File, timeout_ms: u64, label: &str, path: &Path) -> Self {
        match try_lock_shared_with_timeout(file, timeout_ms) {
            Ok(()) => Self { file: Some(file) },
            Err(e) => {
                tracing::warn!(path = %path.display(), "could not lock {label} for reading: {e}");
                Self { file: None }
            }
        }
    }

    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.file.is_some()
    }
}

impl Drop for SharedLockGuard<'_> {
    fn drop(&mut self) {
        if let Some(file) = self.file {
            unlock_file(file);
        }
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map_or_else(|| "state".into(), |n| n.to_string_lossy().into_owned());
    path.with_file_name(format!(".{name}.{}.tmp", std::process::id()))
}

/// Write `content` to `path` via temp file and rename.
///
/// # Errors
/// Returns an error if the file cannot be written. A lock timeout is not an
/// error; it yields [`SaveOutcome::Skipped`] and leaves the original untouched.
pub fn atomic_write_with_lock(path: &Path, content: &[u8], label: &str) -> Result<SaveOutcome> {
    atomic_write_with_lock_timeout(path, content, label, DEFAULT_LOCK_TIMEOUT_MS)
}

/// [`atomic_write_with_lock`] with an explicit lock timeout.
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn atomic_write_with_lock_timeout(
    path: &Path,
    content: &[u8],
    label: &str,
    timeout_ms: u64,
) -> Result<SaveOutcome> {
    ensure_parent_dir(path)?;
    let tmp = temp_path(path);
    fs::write(&tmp, content)?;

    let existing = match File::open(path) {
        Ok(file) => Some(file),
        Err(e) if e.kind() == io::ErrorKind::NotFound => None,
        Err(e) => {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
    };

    if let Some(file) = &existing {
        match try_lock_exclusive_with_timeout(file, timeout_ms) {
            Ok(()) => {}
            Err(LockError::Timeout) => {
                let _ = fs::remove_file(&tmp);
                tracing::warn!(path = %path.display(), "{label} is locked, save skipped");
                return Ok(SaveOutcome::Skipped);
            }
            Err(LockError::Io(e)) => {
                let _ = fs::remove_file(&tmp);
                return Err(e.into());
            }
        }
    }

    let renamed = fs::rename(&tmp, path);
    if let Some(file) = &existing {
        unlock_file(file);
    }
    if let Err(e) = renamed {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }
    tracing::debug!(path = %path.display(), bytes = content.len(), "{label} saved");
    Ok(SaveOutcome::Saved)
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
