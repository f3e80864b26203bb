//! RAII lock guard implementation.

use super::handle::Lockfile;
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// RAII guard for a held lock.
///
/// When dropped, the lock token is automatically deleted. If deletion fails,
/// a warning is printed but no panic occurs.
///
/// The drop-time deletion is the same unchecked removal as
/// [`Lockfile::unlock`]: it carries no holder identity, so a guard kept
/// alive past the point where someone else cleared and re-acquired the
/// token would delete that other holder's token.
#[derive(Debug)]
pub struct LockGuard {
    /// Path to the lock token.
    path: PathBuf,

    /// Whether the lock has been released manually.
    released: bool,
}

impl LockGuard {
    /// Create a new lock guard for the given path.
    pub(super) fn new(path: PathBuf) -> Self {
        Self {
            path,
            released: false,
        }
    }

    /// Get the path to the lock token.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Manually release the lock.
    ///
    /// This is useful when you want to release the lock before the guard
    /// goes out of scope, and want to handle errors explicitly.
    pub fn release(mut self) -> Result<()> {
        use crate::error::LockfileError;

        self.released = true;
        fs::remove_file(&self.path).map_err(|source| LockfileError::Release {
            path: self.path.clone(),
            source,
        })
    }
}

impl Drop for LockGuard {
    fn drop(&mut self) {
        if !self.released
            && let Err(e) = fs::remove_file(&self.path)
        {
            eprintln!(
                "Warning: failed to release lock '{}': {}",
                self.path.display(),
                e
            );
        }
    }
}

impl Lockfile {
    /// Acquire the lock and wrap it in a guard that releases on drop.
    ///
    /// Equivalent to [`lock`](Self::lock) followed by automatic
    /// [`unlock`](Self::unlock) when the guard is dropped.
    pub fn lock_guard(&self) -> Result<LockGuard> {
        self.lock()?;
        Ok(LockGuard::new(self.lock_path()))
    }

    /// Bounded-wait acquire returning a guard that releases on drop.
    ///
    /// Same waiting contract as [`lock_wait`](Self::lock_wait).
    pub fn lock_wait_guard(&self, timeout: Duration) -> Result<LockGuard> {
        self.lock_wait(timeout)?;
        Ok(LockGuard::new(self.lock_path()))
    }
}
