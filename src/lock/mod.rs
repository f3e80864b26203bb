//! Locking subsystem: the [`Lockfile`] handle and its token protocol.
//!
//! # Lock Tokens
//!
//! A lock is realized as a zero-byte file (the token) at
//! `{directory}/{lock name}`. Tokens are created using **create_new**
//! semantics (exclusive create) to ensure that only one process can acquire
//! a given lock at a time; the token's existence on disk is the entire lock
//! state. A token is never read or written, only created and deleted.
//!
//! # Handles
//!
//! A [`Lockfile`] handle binds a directory and a lock file name. It is
//! immutable after construction and caches no lock state; every operation
//! goes to the filesystem.
//!
//! # Waiting
//!
//! [`Lockfile::lock_wait`] retries acquisition on a fixed 100ms poll
//! interval until a deadline. There is no FIFO ordering among waiters: the
//! OS decides which exclusive create wins.
//!
//! # RAII Guards
//!
//! [`Lockfile::lock_guard`] and [`Lockfile::lock_wait_guard`] wrap a held
//! lock in a [`LockGuard`] that deletes the token when dropped. If deletion
//! fails during drop, a warning is printed but the program does not crash.

mod guard;
mod handle;
mod operations;


// Re-export public API
pub use guard::LockGuard;
pub use handle::{DEFAULT_LOCK_FILE_NAME, Lockfile};
pub use operations::{MIN_WAIT_TIMEOUT, POLL_INTERVAL};
