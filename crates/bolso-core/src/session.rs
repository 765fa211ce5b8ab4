//! Persisted session flag.
//!
//! The only client-side session state is one flag file under the bolso home:
//! it contains `"1"` while signed in and is absent otherwise. No token,
//! expiry or identity is cached. Writes happen only on login, registration,
//! logout, or a failed re-validation probe, all driven by the single UI
//! event loop, so no locking is needed.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::config;

/// File name of the flag under the bolso home directory.
pub const SESSION_FILE: &str = "session";

const SIGNED_IN_VALUE: &str = "1";

#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Store rooted at an explicit home directory (tests use this).
    pub fn new(home: &Path) -> Self {
        Self {
            path: home.join(SESSION_FILE),
        }
    }

    /// Store rooted at the resolved ${BOLSO_HOME}.
    pub fn open_default() -> Self {
        Self::new(&config::paths::bolso_home())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Last persisted signed-in flag. Absent or unreadable means signed out.
    pub fn get(&self) -> bool {
        match fs::read_to_string(&self.path) {
            Ok(value) => value.trim() == SIGNED_IN_VALUE,
            Err(_) => false,
        }
    }

    /// Persists the signed-in flag. I/O failures degrade to a warning.
    pub fn set_signed_in(&self) {
        if let Some(parent) = self.path.parent()
            && let Err(err) = fs::create_dir_all(parent)
        {
            tracing::warn!("could not create session dir: {err}");
            return;
        }
        if let Err(err) = fs::write(&self.path, SIGNED_IN_VALUE) {
            tracing::warn!("could not persist session flag: {err}");
        }
    }

    /// Removes the flag. Missing file is not an error.
    pub fn clear(&self) {
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(err) if err.kind() == ErrorKind::NotFound => {}
            Err(err) => tracing::warn!("could not clear session flag: {err}"),
        }
    }
}
