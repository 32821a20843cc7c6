//! Error types for the cache.
//!
//! - [`CacheError`]: returned by fallible constructors and by the allocating
//!   path of [`LruCache::put`](crate::LruCache::put).
//! - [`InvariantError`]: returned by `check_invariants` when the recency list
//!   and the key index disagree.
//!
//! A lookup miss is not an error; [`LruCache::get`](crate::LruCache::get)
//! returns `None` for that.
//!
//! # Example
//!
//! ```
//! use slab_lru::{CacheError, LruCache};
//!
//! let err = LruCache::<u32, u32>::new(0).unwrap_err();
//! assert_eq!(err, CacheError::InvalidCapacity { requested: 0 });
//! ```

extern crate alloc;

use alloc::string::String;
use core::fmt;

/// Errors reported by cache construction and insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheError {
    /// The requested capacity was zero or negative.
    ///
    /// Raised only at construction. Retrying with the same argument fails
    /// the same way.
    InvalidCapacity {
        /// The capacity that was asked for.
        requested: i64,
    },
    /// The allocator could not provide room for a new entry.
    ///
    /// Raised only when `put` inserts a key that is not yet cached, almost
    /// always while the cache still has spare capacity. The cache is left
    /// exactly as it was before the call.
    OutOfMemory,
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheError::InvalidCapacity { requested } => write!(
                f,
                "cache capacity has to be a positive value, got {}",
                requested
            ),
            CacheError::OutOfMemory => f.write_str("out of memory while inserting a cache entry"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CacheError {}

/// Error returned when the recency list and the key index fall out of sync.
///
/// Carries a human-readable description of the broken invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvariantError {}
