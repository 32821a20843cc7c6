//! Cache Configuration Module
//!
//! Configuration structs have public fields for simple instantiation, plus
//! validating constructors for input that is not yet known to be valid.
//!
//! | Config | Cache | Description |
//! |--------|-------|-------------|
//! | `LruCacheConfig` | [`LruCache`](crate::LruCache) | Least Recently Used |
//!
//! # Examples
//!
//! ```
//! use slab_lru::config::LruCacheConfig;
//! use slab_lru::LruCache;
//!
//! let config = LruCacheConfig::new(1000).unwrap();
//! let cache: LruCache<String, i32> = LruCache::init(config, None);
//! assert!(cache.is_empty());
//! ```

pub mod lru;

pub use lru::LruCacheConfig;
