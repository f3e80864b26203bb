//! Lock acquisition, release, and bounded-wait operations.

use super::handle::Lockfile;
use crate::error::{LockfileError, Result};
use std::fs::{self, OpenOptions};
use std::thread;
use std::time::{Duration, Instant};

/// Minimum timeout accepted by [`Lockfile::lock_wait`].
pub const MIN_WAIT_TIMEOUT: Duration = Duration::from_millis(100);

/// Interval slept between acquisition attempts in [`Lockfile::lock_wait`].
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

impl Lockfile {
    /// Acquire the lock by creating the token with create_new semantics.
    ///
    /// The create is a single atomic exclusive operation, never a
    /// check-then-create pair, so two racing callers cannot both succeed.
    /// The file handle is closed immediately after creation: the token's
    /// existence, not an open descriptor, is the lock. The token therefore
    /// persists across process exit until explicitly released - a crashed
    /// holder leaves a stale token that must be cleared externally.
    ///
    /// # Errors
    ///
    /// [`LockfileError::Acquire`] when the token already exists or the
    /// create fails for any other filesystem reason. On failure no lock
    /// state has changed and nothing was created;
    /// [`is_contention`](LockfileError::is_contention) distinguishes a held
    /// lock from other causes.
    pub fn lock(&self) -> Result<()> {
        let lock_path = self.lock_path();

        let mut options = OpenOptions::new();
        options.write(true).create_new(true);

        // The token is coordination, not access control: 0666 (subject to
        // umask) so any cooperating process can remove it.
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o666);
        }

        let file = options
            .open(&lock_path)
            .map_err(|source| LockfileError::Acquire {
                path: lock_path,
                source,
            })?;

        // The descriptor is not the lock; only the directory entry is.
        drop(file);
        Ok(())
    }

    /// Release the lock by deleting the token.
    ///
    /// No ownership check is performed - the token carries no holder
    /// identity, so this deletes whatever token exists at the path,
    /// including one created by another process, and fails if none exists.
    /// Callers are responsible for only releasing locks they hold.
    ///
    /// # Errors
    ///
    /// [`LockfileError::Release`] wrapping the deletion error (token absent,
    /// permission denied, ...).
    pub fn unlock(&self) -> Result<()> {
        let lock_path = self.lock_path();
        fs::remove_file(&lock_path).map_err(|source| LockfileError::Release {
            path: lock_path,
            source,
        })
    }

    /// Acquire the lock, retrying until `timeout` has elapsed.
    ///
    /// Attempts [`lock`](Self::lock), and on failure sleeps [`POLL_INTERVAL`]
    /// and retries until the deadline passes; at least one attempt is always
    /// made. Success returns immediately. When several waiters poll the same
    /// token, whoever's exclusive create the OS lands first wins - there is
    /// no FIFO ordering or priority.
    ///
    /// This is not a realtime primitive: on failure the call returns no
    /// earlier than `timeout` after it began, and may run over by up to one
    /// poll interval plus the final attempt.
    ///
    /// # Errors
    ///
    /// [`LockfileError::InvalidTimeout`] for timeouts below
    /// [`MIN_WAIT_TIMEOUT`], rejected before any filesystem access.
    /// Otherwise the last [`lock`](Self::lock) error observed once the
    /// deadline has passed - a held token and, say, a permission denial are
    /// retried (and reported) identically.
    pub fn lock_wait(&self, timeout: Duration) -> Result<()> {
        if timeout < MIN_WAIT_TIMEOUT {
            return Err(LockfileError::InvalidTimeout(timeout));
        }

        let deadline = Instant::now() + timeout;
        loop {
            match self.lock() {
                Ok(()) => return Ok(()),
                Err(err) => {
                    if Instant::now() >= deadline {
                        return Err(err);
                    }
                    thread::sleep(POLL_INTERVAL);
                }
            }
        }
    }
}
