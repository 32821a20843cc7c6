#![doc = include_str!("../README.md")]
//!
//! ---
//!
//! # Code Reference
//!
//! ## How It Fits Together
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         LruCache                             │
//! │                                                              │
//! │   HashMap<K, EntryHandle>          List<K, V> (slot arena)   │
//! │   ┌─────────┬────────┐                                       │
//! │   │ key  1  │   2 ───┼──────▶  head ─► [2] ◄─► [0] ◄─► [1]   │
//! │   │ key  3  │   0 ───┼──────▶           MRU           LRU    │
//! │   │ key  7  │   1 ───┼──────▶                        ◄─ tail │
//! │   └─────────┴────────┘                                       │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The map answers "where is this key", the list answers "who is oldest".
//! A hit relinks one entry to the front; a miss on a full cache recycles the
//! tail slot for the new key.
//!
//! ## Quick Reference
//!
//! | Operation | Cost | Notes |
//! |-----------|------|-------|
//! | [`LruCache::new`] | O(1) | Fails with [`CacheError::InvalidCapacity`] for zero |
//! | [`LruCache::get`] | O(1) | Counts as a use; `None` on miss |
//! | [`LruCache::put`] | O(1) amortized | Counts as a use; may fail with [`CacheError::OutOfMemory`] |
//! | [`LruCache::peek`] | O(1) | Does not count as a use |
//! | [`LruCache::clear`] | O(n) | Drops every entry |
//!
//! ## Building From Configuration
//!
//! ```rust
//! use slab_lru::LruCache;
//! use slab_lru::config::LruCacheConfig;
//! use core::num::NonZeroUsize;
//!
//! let config = LruCacheConfig {
//!     capacity: NonZeroUsize::new(2).unwrap(),
//! };
//! let mut cache = LruCache::init(config, None);
//! cache.put("a", 1).unwrap();
//! cache.put("b", 2).unwrap();
//! cache.get(&"a");              // "a" becomes most recently used
//! cache.put("c", 3).unwrap();   // "b" evicted (least recently used)
//! assert!(cache.get(&"b").is_none());
//! ```
//!
//! ## Metrics
//!
//! ```rust
//! use slab_lru::LruCache;
//! use slab_lru::metrics::CacheMetrics;
//!
//! let mut cache = LruCache::new(8).unwrap();
//! cache.put(1, 1).unwrap();
//! cache.get(&1);
//! cache.get(&2);
//! let metrics = cache.metrics();
//! assert_eq!(metrics["cache_hits"], 1.0);
//! assert_eq!(metrics["cache_misses"], 1.0);
//! ```
//!
//! ## Sharing Across Threads
//!
//! `get` reorders entries, so it needs `&mut self`. Put the whole cache behind
//! a lock and hold the lock for the full call:
//!
//! ```rust
//! use slab_lru::LruCache;
//! use std::sync::{Arc, Mutex};
//!
//! let cache = Arc::new(Mutex::new(LruCache::new(100).unwrap()));
//! let worker = Arc::clone(&cache);
//! std::thread::spawn(move || {
//!     worker.lock().unwrap().put("key".to_string(), 42).unwrap();
//! })
//! .join()
//! .unwrap();
//! assert_eq!(cache.lock().unwrap().get("key"), Some(&42));
//! ```
//!
//! ## Modules
//!
//! - [`lru`]: Least Recently Used cache implementation
//! - [`config`]: Configuration structures
//! - [`error`]: Error types
//! - [`metrics`]: Metrics collection for cache performance monitoring

#![no_std]

#[cfg(any(test, feature = "std", not(feature = "hashbrown")))]
extern crate std;

/// Recency-ordered list backing the cache.
///
/// Internal infrastructure; entries are addressed by arena index handles
/// that only the owning cache hands around.
pub(crate) mod list;

/// Error types.
pub mod error;

/// Cache configuration structures.
pub mod config;

/// Least Recently Used (LRU) cache implementation.
///
/// Provides a fixed-size cache that evicts the least recently used items when
/// the capacity is reached.
pub mod lru;

/// Cache metrics system.
///
/// Counters for hits, misses, insertions and evictions, reported through a
/// common trait.
pub mod metrics;

pub use error::{CacheError, InvariantError};
pub use lru::LruCache;
