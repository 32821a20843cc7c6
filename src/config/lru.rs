//! Configuration for the Least Recently Used (LRU) cache.
//!
//! The only tunable is `capacity`, the maximum number of entries. It is
//! fixed when the cache is built and never changes afterwards.
//!
//! # Examples
//!
//! ```
//! use slab_lru::config::LruCacheConfig;
//! use slab_lru::LruCache;
//! use core::num::NonZeroUsize;
//!
//! // Build the struct directly when the capacity is already known to be non-zero
//! let config = LruCacheConfig {
//!     capacity: NonZeroUsize::new(1000).unwrap(),
//! };
//! let cache: LruCache<String, i32> = LruCache::init(config, None);
//! assert_eq!(cache.cap().get(), 1000);
//!
//! // Validate untrusted input, including signed values
//! assert!(LruCacheConfig::try_from(-1i64).is_err());
//! let config = LruCacheConfig::try_from(2i64).unwrap();
//! assert_eq!(config.capacity.get(), 2);
//! ```

use crate::error::CacheError;
use core::fmt;
use core::num::NonZeroUsize;

/// Configuration for an LRU (Least Recently Used) cache.
///
/// # Fields
///
/// - `capacity`: Maximum number of entries the cache can hold.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LruCacheConfig {
    /// Maximum number of key-value pairs the cache can hold.
    pub capacity: NonZeroUsize,
}

impl LruCacheConfig {
    /// Validates `capacity` and builds a config from it.
    ///
    /// Returns [`CacheError::InvalidCapacity`] when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, CacheError> {
        NonZeroUsize::new(capacity)
            .map(|capacity| LruCacheConfig { capacity })
            .ok_or(CacheError::InvalidCapacity { requested: 0 })
    }
}

impl TryFrom<i64> for LruCacheConfig {
    type Error = CacheError;

    /// Rejects zero and negative capacities.
    fn try_from(capacity: i64) -> Result<Self, Self::Error> {
        let invalid = CacheError::InvalidCapacity {
            requested: capacity,
        };
        let capacity = usize::try_from(capacity).map_err(|_| invalid)?;
        NonZeroUsize::new(capacity)
            .map(|capacity| LruCacheConfig { capacity })
            .ok_or(invalid)
    }
}

impl From<NonZeroUsize> for LruCacheConfig {
    fn from(capacity: NonZeroUsize) -> Self {
        LruCacheConfig { capacity }
    }
}

impl fmt::Debug for LruCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCacheConfig")
            .field("capacity", &self.capacity)
            .finish()
    }
}
