//! Least Recently Used (LRU) Cache Implementation
//!
//! A fixed-capacity key-value store that evicts the least recently used entry
//! when a new key arrives and the cache is full.
//!
//! # Algorithm
//!
//! Two structures cooperate:
//!
//! - a recency [`List`] that owns every entry, ordered from most recently
//!   used (front) to least recently used (back)
//! - a hash map from key to the entry's handle inside the list
//!
//! Every operation looks the key up in the map first and then relinks the
//! list through the handle it found. Both structures are updated within the
//! same call, so between calls every map key names exactly one live entry
//! carrying that key, and `map.len() == list.len() <= capacity`.
//!
//! When the cache is full, the back entry is not freed. Its key is dropped
//! from the map, its slot is overwritten with the new key and value, and it
//! is moved to the front. After the cache first fills up, `put` no longer
//! allocates entries.
//!
//! # Performance Characteristics
//!
//! - **Time Complexity**:
//!   - Get: O(1)
//!   - Put: O(1) amortized
//!   - Clear: O(n)
//!
//! - **Space Complexity**:
//!   - O(n) where n is the capacity of the cache
//!   - Nothing is allocated until the first `put`
//!
//! # Thread Safety
//!
//! This implementation is not thread-safe. `get` reorders the recency list
//! and therefore takes `&mut self`; to share a cache across threads, wrap the
//! whole cache in a lock such as `Mutex` so each call runs as one critical
//! section.

extern crate alloc;

use crate::config::LruCacheConfig;
use crate::error::{CacheError, InvariantError};
use crate::list::{self, EntryHandle, List};
use crate::metrics::{CacheMetrics, LruCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::String;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::iter::FusedIterator;
use core::num::NonZeroUsize;
use tracing::{debug, trace};

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;
#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

/// An implementation of a Least Recently Used (LRU) cache.
///
/// The cache has a fixed capacity and supports O(1) lookups, insertions and
/// updates. When the cache is full, inserting a new key evicts the least
/// recently used entry. Both `get` and `put` on a present key count as a use.
///
/// # Examples
///
/// ```
/// use slab_lru::LruCache;
///
/// let mut cache = LruCache::new(2).unwrap();
///
/// cache.put("apple", 1).unwrap();
/// cache.put("banana", 2).unwrap();
///
/// // Accessing items updates their recency
/// assert_eq!(cache.get(&"apple"), Some(&1));
///
/// // Adding beyond capacity evicts the least recently used item
/// cache.put("cherry", 3).unwrap();
/// assert_eq!(cache.get(&"banana"), None);
/// assert_eq!(cache.get(&"apple"), Some(&1));
/// assert_eq!(cache.get(&"cherry"), Some(&3));
/// assert_eq!(cache.to_string(), "{cherry=3, apple=1}");
/// ```
pub struct LruCache<K, V, S = DefaultHashBuilder> {
    config: LruCacheConfig,
    list: List<K, V>,
    map: HashMap<K, EntryHandle, S>,
    metrics: LruCacheMetrics,
}

impl<K: Hash + Eq, V> LruCache<K, V, DefaultHashBuilder> {
    /// Creates a new LRU cache holding at most `capacity` entries.
    ///
    /// Returns [`CacheError::InvalidCapacity`] when `capacity` is zero. No
    /// memory is reserved up front.
    ///
    /// # Examples
    ///
    /// ```
    /// use slab_lru::{CacheError, LruCache};
    ///
    /// let cache: LruCache<u64, String> = LruCache::new(16).unwrap();
    /// assert_eq!(cache.cap().get(), 16);
    ///
    /// let err = LruCache::<u64, String>::new(0).unwrap_err();
    /// assert_eq!(err, CacheError::InvalidCapacity { requested: 0 });
    /// ```
    pub fn new(capacity: usize) -> Result<Self, CacheError> {
        let config = LruCacheConfig::new(capacity).map_err(|err| {
            debug!(capacity, "rejected cache capacity");
            err
        })?;
        Ok(Self::init(config, None))
    }

    /// Creates a new LRU cache from a validated configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration carrying the capacity
    /// * `hasher` - Optional hash builder; `None` uses `DefaultHashBuilder`
    pub fn init(config: LruCacheConfig, hasher: Option<DefaultHashBuilder>) -> Self {
        Self::with_hasher(config, hasher.unwrap_or_default())
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> LruCache<K, V, S> {
    /// Creates a new LRU cache with the given configuration and hash builder.
    pub fn with_hasher(config: LruCacheConfig, hash_builder: S) -> Self {
        LruCache {
            config,
            list: List::new(config.capacity),
            map: HashMap::with_hasher(hash_builder),
            metrics: LruCacheMetrics::new(config.capacity.get() as u64),
        }
    }

    /// Maximum number of entries the cache holds.
    #[inline]
    pub fn cap(&self) -> NonZeroUsize {
        self.config.capacity
    }

    /// Number of entries currently held. Never exceeds [`cap`](Self::cap).
    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if the cache holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Looks up `key` and marks it as the most recently used entry.
    ///
    /// Returns `None` when the key is not cached. A miss is not an error and
    /// leaves the recency order untouched.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let handle = self.lookup(key)?;
        Some(self.list.value(handle))
    }

    /// Like [`get`](Self::get), but hands out a mutable reference.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let handle = self.lookup(key)?;
        Some(self.list.value_mut(handle))
    }

    /// Returns the value for `key` without touching recency or metrics.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.get(key).map(|&handle| self.list.value(handle))
    }

    /// Returns `true` if `key` is cached. Does not count as a use.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.contains_key(key)
    }

    fn lookup<Q>(&mut self, key: &Q) -> Option<EntryHandle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        match self.map.get(key).copied() {
            Some(handle) => {
                self.promote(handle);
                self.metrics.core.record_hit();
                Some(handle)
            }
            None => {
                self.metrics.core.record_miss();
                None
            }
        }
    }

    fn promote(&mut self, handle: EntryHandle) {
        if self.list.front() == Some(handle) {
            self.metrics.record_front_hit();
        } else {
            self.list.move_to_front(handle);
        }
    }

    /// Iterates `(key, value)` pairs from most to least recently used.
    ///
    /// Iteration does not count as a use.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.list.iter(),
        }
    }

    /// Metrics collected by this cache.
    #[inline]
    pub fn lru_metrics(&self) -> &LruCacheMetrics {
        &self.metrics
    }

    /// Checks that the recency list is well formed and that the key index
    /// and the list hold exactly the same entries.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.list.check_invariants()?;

        if self.map.len() != self.list.len() {
            return Err(InvariantError::new(format!(
                "index holds {} keys but the list holds {} entries",
                self.map.len(),
                self.list.len()
            )));
        }

        // equal sizes plus every key pointing at an entry with that same key
        // rules out two keys sharing one entry
        for (key, &handle) in self.map.iter() {
            match self.list.try_key(handle) {
                Some(stored) if stored == key => {}
                Some(_) => {
                    return Err(InvariantError::new(format!(
                        "index entry points at {:?}, which holds a different key",
                        handle
                    )))
                }
                None => {
                    return Err(InvariantError::new(format!(
                        "index entry points at missing slot {:?}",
                        handle
                    )))
                }
            }
        }

        Ok(())
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> LruCache<K, V, S> {
    /// Inserts or updates `key`, making it the most recently used entry.
    ///
    /// - If `key` is present its value is overwritten in place.
    /// - If the cache is full, the least recently used entry is evicted and
    ///   its slot is reused for `key`.
    /// - Otherwise a new entry is allocated.
    ///
    /// Returns [`CacheError::OutOfMemory`] if a new entry cannot be
    /// allocated. The cache is then unchanged and the call may be retried.
    ///
    /// Once the cache is full no entries are allocated, but the key index
    /// may still rehash now and then to clear out removed keys, so an
    /// evicting `put` can occasionally allocate and, in principle, fail.
    pub fn put(&mut self, key: K, value: V) -> Result<(), CacheError> {
        if let Some(handle) = self.map.get(&key).copied() {
            *self.list.value_mut(handle) = value;
            self.promote(handle);
            self.metrics.core.record_update();
            return Ok(());
        }

        // cloned up front so a panicking clone leaves both structures alone
        let list_key = key.clone();

        // make sure the final index insert cannot fail once the list changed
        self.map
            .try_reserve(1)
            .map_err(|_| CacheError::OutOfMemory)?;

        let handle = match self.list.back() {
            Some(victim) if self.list.is_full() => {
                self.map.remove(self.list.key(victim));
                let _evicted = self.list.replace(victim, list_key, value);
                self.list.move_to_front(victim);
                self.metrics.core.record_eviction();
                trace!(len = self.list.len(), "reused least recently used slot");
                victim
            }
            _ => {
                let handle = self.list.add_to_front(list_key, value)?;
                self.metrics.core.record_insertion();
                handle
            }
        };

        self.map.insert(key, handle);
        Ok(())
    }

    /// Drops every entry. Calling it on an empty cache is harmless.
    pub fn clear(&mut self) {
        let dropped = self.list.len();
        self.map.clear();
        self.map.shrink_to_fit();
        self.list.clear();
        self.metrics.core.record_clear();
        debug!(dropped, "cleared cache");
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> CacheMetrics for LruCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.metrics.metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        self.metrics.algorithm_name()
    }
}

/// Renders entries from most to least recently used, e.g. `{1=1, 3=3}`.
///
/// The format is meant for diagnostics and may change.
impl<K: fmt::Display, V: fmt::Display, S> fmt::Display for LruCache<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.list.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", key, value)?;
        }
        f.write_str("}")
    }
}

impl<K, V, S> fmt::Debug for LruCache<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("capacity", &self.config.capacity)
            .field("len", &self.list.len())
            .finish()
    }
}

impl<'a, K, V, S> IntoIterator for &'a LruCache<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over cache entries from most to least recently used.
///
/// Created by [`LruCache::iter`].
pub struct Iter<'a, K, V> {
    inner: list::Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter").field("inner", &self.inner).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::{String, ToString};
    use alloc::vec;
    use alloc::vec::Vec;

    fn keys<K: Clone, V, S>(cache: &LruCache<K, V, S>) -> Vec<K>
    where
        K: Hash + Eq,
        S: BuildHasher,
    {
        cache.iter().map(|(k, _)| k.clone()).collect()
    }

    #[test]
    fn test_lru_get_put() {
        let mut cache = LruCache::new(2).unwrap();
        cache.put("apple", 1).unwrap();
        cache.put("banana", 2).unwrap();
        assert_eq!(cache.get(&"apple"), Some(&1));
        assert_eq!(cache.get(&"banana"), Some(&2));
        assert_eq!(cache.get(&"cherry"), None);
        cache.put("apple", 3).unwrap();
        assert_eq!(cache.get(&"apple"), Some(&3));
        cache.put("cherry", 4).unwrap();
        assert_eq!(cache.get(&"banana"), None);
        assert_eq!(cache.get(&"apple"), Some(&3));
        assert_eq!(cache.get(&"cherry"), Some(&4));
        cache.check_invariants().unwrap();
    }

    #[test]
    fn test_lru_rejects_zero_capacity() {
        let err = LruCache::<u32, u32>::new(0).unwrap_err();
        assert_eq!(err, CacheError::InvalidCapacity { requested: 0 });
    }

    #[test]
    fn test_lru_scenario_renders_mru_first() {
        let mut cache = LruCache::new(2).unwrap();
        cache.put(1, 1).unwrap();
        assert_eq!(cache.to_string(), "{1=1}");
        cache.put(2, 2).unwrap();
        assert_eq!(cache.to_string(), "{2=2, 1=1}");
        assert_eq!(cache.get(&1), Some(&1));
        assert_eq!(cache.to_string(), "{1=1, 2=2}");
        cache.put(3, 3).unwrap();
        assert_eq!(cache.to_string(), "{3=3, 1=1}");
        assert_eq!(cache.get(&2), None);
        cache.put(4, 4).unwrap();
        assert_eq!(cache.to_string(), "{4=4, 3=3}");
        assert_eq!(cache.get(&1), None);
        assert_eq!(cache.get(&3), Some(&3));
        assert_eq!(cache.get(&4), Some(&4));
        cache.check_invariants().unwrap();
    }

    #[test]
    fn test_lru_empty_render() {
        let cache: LruCache<u32, u32> = LruCache::new(3).unwrap();
        assert_eq!(cache.to_string(), "{}");
    }

    #[test]
    fn test_lru_get_mut() {
        let mut cache = LruCache::new(2).unwrap();
        cache.put("apple", 1).unwrap();
        cache.put("banana", 2).unwrap();
        if let Some(v) = cache.get_mut(&"apple") {
            *v = 3;
        }
        assert_eq!(cache.get(&"apple"), Some(&3));
        cache.put("cherry", 4).unwrap();
        assert_eq!(cache.get(&"banana"), None);
        assert_eq!(cache.get(&"apple"), Some(&3));
        assert_eq!(cache.get(&"cherry"), Some(&4));
    }

    #[test]
    fn test_lru_peek_and_contains_do_not_promote() {
        let mut cache = LruCache::new(2).unwrap();
        cache.put(1, "one").unwrap();
        cache.put(2, "two").unwrap();

        assert_eq!(cache.peek(&1), Some(&"one"));
        assert!(cache.contains(&1));
        assert_eq!(keys(&cache), vec![2, 1]);

        cache.put(3, "three").unwrap();
        assert!(!cache.contains(&1));
        assert_eq!(cache.peek(&1), None);
    }

    #[test]
    fn test_lru_update_in_place_keeps_len() {
        let mut cache = LruCache::new(3).unwrap();
        cache.put(1, 10).unwrap();
        cache.put(2, 20).unwrap();
        cache.put(1, 11).unwrap();
        assert_eq!(cache.len(), 2);
        assert_eq!(keys(&cache), vec![1, 2]);
        assert_eq!(cache.peek(&1), Some(&11));
        cache.check_invariants().unwrap();
    }

    #[test]
    fn test_lru_clear() {
        let mut cache = LruCache::new(2).unwrap();
        cache.put("apple", 1).unwrap();
        cache.put("banana", 2).unwrap();
        assert_eq!(cache.len(), 2);
        cache.clear();
        assert_eq!(cache.len(), 0);
        assert!(cache.is_empty());
        assert_eq!(cache.get(&"apple"), None);
        cache.clear();
        assert!(cache.is_empty());
        cache.put("cherry", 3).unwrap();
        assert_eq!(cache.get(&"cherry"), Some(&3));
        cache.check_invariants().unwrap();
    }

    #[test]
    fn test_lru_capacity_limits() {
        let mut cache = LruCache::new(2).unwrap();
        cache.put("apple", 1).unwrap();
        cache.put("banana", 2).unwrap();
        cache.put("cherry", 3).unwrap();
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(&"apple"), None);
        assert_eq!(cache.get(&"banana"), Some(&2));
        assert_eq!(cache.get(&"cherry"), Some(&3));
    }

    #[test]
    fn test_lru_capacity_one() {
        let mut cache = LruCache::new(1).unwrap();
        cache.put(1, 1).unwrap();
        assert_eq!(cache.get(&1), Some(&1));
        cache.put(2, 2).unwrap();
        assert_eq!(cache.get(&1), None);
        assert_eq!(cache.get(&2), Some(&2));
        cache.put(2, 3).unwrap();
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.to_string(), "{2=3}");
        cache.check_invariants().unwrap();
    }

    #[test]
    fn test_lru_string_keys() {
        let mut cache = LruCache::new(2).unwrap();
        let key1 = String::from("apple");
        let key2 = String::from("banana");
        cache.put(key1.clone(), 1).unwrap();
        cache.put(key2.clone(), 2).unwrap();
        assert_eq!(cache.get(&key1), Some(&1));
        assert_eq!(cache.get(&key2), Some(&2));
        assert_eq!(cache.get("apple"), Some(&1));
        assert_eq!(cache.get("banana"), Some(&2));
        drop(cache);
    }

    #[derive(Debug, Clone, Eq, PartialEq)]
    struct ComplexValue {
        val: i32,
        description: String,
    }

    #[test]
    fn test_lru_complex_values() {
        let mut cache = LruCache::new(2).unwrap();
        let key1 = String::from("apple");
        let key2 = String::from("banana");
        let fruit1 = ComplexValue {
            val: 1,
            description: String::from("First fruit"),
        };
        let fruit2 = ComplexValue {
            val: 2,
            description: String::from("Second fruit"),
        };
        let fruit3 = ComplexValue {
            val: 3,
            description: String::from("Third fruit"),
        };
        cache.put(key1.clone(), fruit1.clone()).unwrap();
        cache.put(key2.clone(), fruit2.clone()).unwrap();
        assert_eq!(cache.get(&key1).unwrap().val, fruit1.val);
        assert_eq!(cache.get(&key2).unwrap().val, fruit2.val);
        cache.put(String::from("cherry"), fruit3.clone()).unwrap();
        assert_eq!(cache.get(&key1), None);
        assert_eq!(cache.get("cherry"), Some(&fruit3));
        assert_eq!(cache.peek(&key2).unwrap().description, "Second fruit");
    }

    #[test]
    fn test_lru_metrics() {
        let mut cache = LruCache::new(2).unwrap();
        let metrics = cache.metrics();
        assert_eq!(metrics.get("requests").unwrap(), &0.0);
        assert_eq!(metrics.get("cache_hits").unwrap(), &0.0);
        assert_eq!(metrics.get("cache_misses").unwrap(), &0.0);
        cache.put("apple", 1).unwrap();
        cache.put("banana", 2).unwrap();
        cache.get(&"apple");
        cache.get(&"banana");
        let metrics = cache.metrics();
        assert_eq!(metrics.get("cache_hits").unwrap(), &2.0);
        cache.get(&"durian");
        let metrics = cache.metrics();
        assert_eq!(metrics.get("cache_misses").unwrap(), &1.0);
        assert_eq!(metrics.get("requests").unwrap(), &3.0);
        cache.put("banana", 5).unwrap();
        cache.put("cherry", 3).unwrap();
        let metrics = cache.metrics();
        assert_eq!(metrics.get("evictions").unwrap(), &1.0);
        assert_eq!(metrics.get("insertions").unwrap(), &3.0);
        assert_eq!(metrics.get("updates").unwrap(), &1.0);
        assert_eq!(metrics.get("front_hits").unwrap(), &1.0);
        assert_eq!(metrics.get("len").unwrap(), &2.0);
        assert_eq!(metrics.get("utilization").unwrap(), &1.0);
        assert_eq!(cache.algorithm_name(), "LRU");

        cache.clear();
        assert_eq!(cache.lru_metrics().core.clears, 1);
        assert_eq!(cache.lru_metrics().core.entries, 0);
    }

    #[test]
    fn test_lru_iter_and_into_iter() {
        let mut cache = LruCache::new(3).unwrap();
        cache.put(1, 'a').unwrap();
        cache.put(2, 'b').unwrap();
        cache.put(3, 'c').unwrap();
        cache.get(&1);

        let iter = cache.iter();
        assert_eq!(iter.len(), 3);
        let pairs: Vec<(i32, char)> = (&cache).into_iter().map(|(k, v)| (*k, *v)).collect();
        assert_eq!(pairs, vec![(1, 'a'), (3, 'c'), (2, 'b')]);
    }

    #[test]
    fn test_lru_evicted_slot_is_reused() {
        let mut cache = LruCache::new(2).unwrap();
        cache.put(1, 1).unwrap();
        cache.put(2, 2).unwrap();
        let victim = cache.list.back().unwrap();

        cache.put(3, 3).unwrap();
        assert_eq!(cache.list.front(), Some(victim));
        assert_eq!(cache.map.get(&3), Some(&victim));
        assert_eq!(cache.list.len(), 2);
        cache.check_invariants().unwrap();
    }

    #[test]
    fn test_lru_check_invariants_detects_stale_index() {
        let mut cache = LruCache::new(2).unwrap();
        cache.put(1, 1).unwrap();
        cache.put(2, 2).unwrap();

        let handle = *cache.map.get(&1).unwrap();
        cache.map.insert(2, handle);
        assert!(cache.check_invariants().is_err());
    }

    #[test]
    fn test_lru_custom_hasher() {
        let config = LruCacheConfig::new(2).unwrap();
        let mut cache: LruCache<u8, u8> = LruCache::init(config, Some(DefaultHashBuilder::default()));
        cache.put(1, 1).unwrap();
        assert_eq!(cache.get(&1), Some(&1));
    }

    #[test]
    fn test_lru_debug_output() {
        let mut cache = LruCache::new(4).unwrap();
        cache.put(1, 1).unwrap();
        let debug = format!("{:?}", cache);
        assert!(debug.contains("capacity: 4"));
        assert!(debug.contains("len: 1"));
    }

    /// Key whose `clone` panics when `explode` is set.
    #[derive(Debug)]
    struct ExplodingKey {
        id: u32,
        explode: bool,
    }

    impl Clone for ExplodingKey {
        fn clone(&self) -> Self {
            if self.explode {
                panic!("clone of key {} failed", self.id);
            }
            ExplodingKey {
                id: self.id,
                explode: false,
            }
        }
    }

    impl PartialEq for ExplodingKey {
        fn eq(&self, other: &Self) -> bool {
            self.id == other.id
        }
    }

    impl Eq for ExplodingKey {}

    impl Hash for ExplodingKey {
        fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
            self.id.hash(state);
        }
    }

    fn key(id: u32) -> ExplodingKey {
        ExplodingKey { id, explode: false }
    }

    #[test]
    fn test_lru_panicking_key_clone_leaves_cache_intact() {
        use std::panic::{catch_unwind, AssertUnwindSafe};

        let mut cache = LruCache::new(2).unwrap();
        cache.put(key(1), 1).unwrap();
        cache.put(key(2), 2).unwrap();

        // evicting put
        let bad = ExplodingKey { id: 3, explode: true };
        let result = catch_unwind(AssertUnwindSafe(|| cache.put(bad, 3)));
        assert!(result.is_err());

        assert_eq!(cache.len(), 2);
        assert!(cache.contains(&key(1)));
        assert!(cache.contains(&key(2)));
        assert!(!cache.contains(&key(3)));
        cache.check_invariants().unwrap();
        let ids: Vec<u32> = cache.iter().map(|(k, _)| k.id).collect();
        assert_eq!(ids, vec![2, 1]);

        // non-evicting put into spare capacity
        cache.clear();
        cache.put(key(1), 1).unwrap();
        let bad = ExplodingKey { id: 4, explode: true };
        let result = catch_unwind(AssertUnwindSafe(|| cache.put(bad, 4)));
        assert!(result.is_err());
        assert_eq!(cache.len(), 1);
        cache.check_invariants().unwrap();

        // the cache keeps working afterwards
        cache.put(key(5), 5).unwrap();
        cache.put(key(6), 6).unwrap();
        assert_eq!(cache.peek(&key(5)), Some(&5));
        assert!(!cache.contains(&key(1)));
        cache.check_invariants().unwrap();
    }
}
