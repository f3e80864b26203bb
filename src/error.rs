//! Error types for the lockfile crate.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use std::io;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Main error type for lockfile operations.
///
/// Acquisition and release failures carry the token path and the underlying
/// `io::Error` as their source, so callers can inspect the OS-level cause.
#[derive(Error, Debug)]
pub enum LockfileError {
    /// Handle construction failed because the parent directory of the given
    /// path does not exist or cannot be statted.
    #[error("invalid path/filename given ({0})")]
    InvalidPath(String),

    /// `lock_wait` was called with a timeout below the supported floor.
    #[error("invalid timeout ({0:?}); timeouts below 100ms are not supported")]
    InvalidTimeout(Duration),

    /// Exclusive creation of the lock token failed. Most commonly the token
    /// already exists (the lock is held); any other filesystem error lands
    /// here too.
    #[error("failed to acquire lock '{}': {source}", .path.display())]
    Acquire {
        /// Path of the lock token.
        path: PathBuf,
        /// Underlying filesystem error.
        source: io::Error,
    },

    /// Deletion of the lock token failed.
    #[error("failed to release lock '{}': {source}", .path.display())]
    Release {
        /// Path of the lock token.
        path: PathBuf,
        /// Underlying filesystem error.
        source: io::Error,
    },
}

impl LockfileError {
    /// Returns true when an acquisition failure means the token already
    /// exists, i.e. the lock is currently held by someone, as opposed to
    /// some other filesystem error such as a permission denial.
    pub fn is_contention(&self) -> bool {
        matches!(
            self,
            LockfileError::Acquire { source, .. }
                if source.kind() == io::ErrorKind::AlreadyExists
        )
    }
}

/// Result type alias for lockfile operations.
pub type Result<T> = std::result::Result<T, LockfileError>;
