//! Pluggable storage backends for persisting save files.
//!
//! The crate ships with [`FsStorage`], which writes one file per key under a
//! base directory with atomic replace semantics.
//!
//! Implement the [`Storage`] trait to add your own backend.

mod fs;

pub use fs::FsStorage;

use crate::error::Result;

use std::future::Future;

/// Trait for storage backends that hold save envelopes keyed by file name.
///
/// Implementations must be `Send + Sync + 'static` so they can be shared as
/// Rocket managed state across request handlers.
///
/// # Implementing a custom backend
///
/// ```rust,no_run
/// use game_saver::{Storage, Result};
///
/// struct NullStorage;
///
/// impl Storage for NullStorage {
///     async fn put(&self, _key: &str, _content: &[u8]) -> Result<()> {
///         Ok(())
///     }
///
///     async fn get(&self, _key: &str) -> Result<Option<Vec<u8>>> {
///         Ok(None)
///     }
/// }
/// ```
pub trait Storage: Send + Sync + 'static {
    /// Persist `content` under `key`, fully replacing any previous value.
    ///
    /// A reader must never observe a partially written value.
    fn put(&self, key: &str, content: &[u8]) -> impl Future<Output = Result<()>> + Send;

    /// Read the value stored under `key`, or `None` if nothing is stored.
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<Vec<u8>>>> + Send;
}
