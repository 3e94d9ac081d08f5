//! Shared fixtures for tests that touch process-wide state
//!
//! Environment variables and the working directory are global to the test
//! binary, so every test changing either must hold [`ENV_LOCK`].

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use once_cell::sync::Lazy;
use tempfile::TempDir;

pub(crate) static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

const ALL_VARS: [&str; 10] = [
    "LEAVEBRIDGE_CALENDAR_PROVIDER",
    "LEAVEBRIDGE_EXCHANGE_EMAIL",
    "LEAVEBRIDGE_EXCHANGE_PASSWORD",
    "LEAVEBRIDGE_EXCHANGE_CALENDAR",
    "LEAVEBRIDGE_EXCHANGE_TIMEZONE",
    "LEAVEBRIDGE_EXCHANGE_SEND_INVITATION",
    "LEAVEBRIDGE_GOOGLE_CLIENT_ID",
    "LEAVEBRIDGE_GOOGLE_CLIENT_SECRET",
    "LEAVEBRIDGE_GOOGLE_CALENDAR_ID",
    "LEAVEBRIDGE_GOOGLE_REFRESH_TOKEN",
];

pub(crate) fn clear_env() {
    for key in ALL_VARS {
        std::env::remove_var(key);
    }
}

/// Temp dir with a working directory three levels deep, so that probing
/// `..` and `../..` stays inside the temp dir.
pub(crate) fn scratch_dir() -> (TempDir, PathBuf) {
    let root = tempfile::tempdir().expect("create temp dir");
    let cwd = root.path().join("a").join("b").join("c");
    std::fs::create_dir_all(&cwd).expect("create nested dirs");
    (root, cwd)
}

pub(crate) fn write_file(dir: &Path, name: &str, contents: &str) {
    std::fs::write(dir.join(name), contents).expect("write settings file");
}

/// Switches the working directory and restores the previous one on drop
pub(crate) struct CwdGuard {
    previous: PathBuf,
}

impl CwdGuard {
    pub(crate) fn enter(dir: &Path) -> Self {
        let previous = std::env::current_dir().expect("current dir");
        std::env::set_current_dir(dir).expect("enter scratch dir");
        Self { previous }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.previous);
    }
}
