use std::path::Path;
use tempfile::TempDir;

use super::*;

// =============================================================================
// Path Resolution Tests
// =============================================================================

#[test]
fn ensure_parent_dir_creates_nested_directory() {
    let temp_dir = TempDir::new().unwrap();
    let nested_path = temp_dir.path().join("a").join("b").join("geomech.json");

    ensure_parent_dir(&nested_path).unwrap();

    assert!(nested_path.parent().unwrap().exists());
}

#[test]
fn ensure_parent_dir_handles_bare_file_name() {
    assert!(ensure_parent_dir(Path::new("geomech.json")).is_ok());
}

// =============================================================================
// File Locking Tests
// =============================================================================

#[test]
fn lock_error_display() {
    assert_eq!(format!("{}", LockError::Timeout), "lock acquisition timed out");
    let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
    assert!(format!("{}", LockError::Io(io_err)).contains("lock I/O error"));
}

#[test]
fn lock_error_source() {
    assert!(std::error::Error::source(&LockError::Timeout).is_none());
    let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
    assert!(std::error::Error::source(&LockError::from(io_err)).is_some());
}

#[test]
fn exclusive_lock_times_out_when_held() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("geomech.json");

    let file1 = fs::File::create(&file_path).unwrap();
    file1.lock().unwrap();

    let file2 = fs::File::open(&file_path).unwrap();
    let result = try_lock_exclusive_with_timeout(&file2, 100);

    assert!(matches!(result, Err(LockError::Timeout)));

    file1.unlock().unwrap();
}

#[test]
fn multiple_shared_locks_allowed() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("geomech.json");
    let file1 = fs::File::create(&file_path).unwrap();
    let file2 = fs::File::open(&file_path).unwrap();

    assert!(try_lock_shared_with_timeout(&file1, 100).is_ok());
    assert!(try_lock_shared_with_timeout(&file2, 100).is_ok());

    unlock_file(&file1);
    unlock_file(&file2);
}

#[test]
fn shared_lock_guard_reports_not_locked_on_timeout() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("geomech.json");

    let file1 = fs::File::create(&file_path).unwrap();
    file1.lock().unwrap();

    let file2 = fs::File::open(&file_path).unwrap();
    let guard = SharedLockGuard::try_acquire(&file2, 100, "workspace", &file_path);
    assert!(!guard.is_locked());

    file1.unlock().unwrap();
}

#[test]
fn shared_lock_guard_unlocks_on_drop() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("geomech.json");
    let file = fs::File::create(&file_path).unwrap();

    {
        let guard = SharedLockGuard::try_acquire(&file, 100, "workspace", &file_path);
        assert!(guard.is_locked());
    }

    let file2 = fs::File::open(&file_path).unwrap();
    assert!(try_lock_exclusive_with_timeout(&file2, 100).is_ok());
    file2.unlock().unwrap();
}

// =============================================================================
// Atomic Write Tests
// =============================================================================

#[test]
fn atomic_write_creates_file_and_parents() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("a").join("geomech.json");

    let result = atomic_write_with_lock(&file_path, b"{}", "workspace").unwrap();
    assert_eq!(result, SaveOutcome::Saved);
    assert_eq!(fs::read(&file_path).unwrap(), b"{}");
}

#[test]
fn atomic_write_overwrites_existing_file() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("geomech.json");
    fs::write(&file_path, "old content").unwrap();

    let result = atomic_write_with_lock(&file_path, b"new content", "workspace").unwrap();
    assert_eq!(result, SaveOutcome::Saved);
    assert_eq!(fs::read(&file_path).unwrap(), b"new content");
}

#[test]
fn atomic_write_cleans_up_temp_files() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("geomech.json");

    atomic_write_with_lock(&file_path, b"{}", "workspace").unwrap();

    let entries: Vec<_> = fs::read_dir(temp_dir.path())
        .unwrap()
        .filter_map(std::result::Result::ok)
        .collect();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].file_name(), "geomech.json");
}

#[test]
fn atomic_write_returns_skipped_on_lock_timeout() {
    use std::sync::mpsc;
    use std::thread;

    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("geomech.json");
    fs::write(&file_path, "original").unwrap();

    let lock_holder = fs::OpenOptions::new().write(true).open(&file_path).unwrap();
    lock_holder.lock().unwrap();

    let file_path_clone = file_path.clone();
    let (tx, rx) = mpsc::channel();
    let handle = thread::spawn(move || {
        let result =
            atomic_write_with_lock_timeout(&file_path_clone, b"new content", "workspace", 100);
        tx.send(result).unwrap();
    });

    let result = rx.recv().unwrap();
    handle.join().unwrap();
    assert_eq!(result.unwrap(), SaveOutcome::Skipped);

    lock_holder.unlock().unwrap();
    drop(lock_holder);

    assert_eq!(fs::read_to_string(&file_path).unwrap(), "original");
}
