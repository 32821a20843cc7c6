#![no_std]
extern crate alloc;
extern crate slab_lru;

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::num::NonZeroUsize;
use slab_lru::config::LruCacheConfig;
use slab_lru::metrics::CacheMetrics;
use slab_lru::{CacheError, LruCache};

fn make_lru<K: core::hash::Hash + Eq + Clone, V>(cap: usize) -> LruCache<K, V> {
    let config = LruCacheConfig {
        capacity: NonZeroUsize::new(cap).unwrap(),
    };
    LruCache::init(config, None)
}

#[test]
fn test_lru_in_no_std() {
    let mut cache = make_lru(2);

    // Using String as it requires the alloc crate
    let key1 = String::from("key1");
    let key2 = String::from("key2");
    let key3 = String::from("key3");

    cache.put(key1.clone(), 1).unwrap();
    cache.put(key2.clone(), 2).unwrap();

    assert_eq!(*cache.get(&key1).unwrap(), 1);
    assert_eq!(*cache.get(&key2).unwrap(), 2);

    // This should evict key1
    cache.put(key3.clone(), 3).unwrap();

    assert!(cache.get(&key1).is_none());
    assert_eq!(*cache.get(&key2).unwrap(), 2);
    assert_eq!(*cache.get(&key3).unwrap(), 3);
}

#[test]
fn test_lru_borrowed_lookup_in_no_std() {
    let mut cache = make_lru(4);
    let keys: Vec<String> = (0..4).map(|i| format!("key{i}")).collect();
    for (i, key) in keys.iter().enumerate() {
        cache.put(key.clone(), i).unwrap();
    }
    assert_eq!(cache.get("key0"), Some(&0));
    assert_eq!(cache.peek("key3"), Some(&3));
    assert!(cache.contains("key2"));
    assert!(!cache.contains("key9"));
}

#[test]
fn test_lru_render_in_no_std() {
    let mut cache = make_lru(3);
    cache.put(1u8, 'a').unwrap();
    cache.put(2u8, 'b').unwrap();
    assert_eq!(cache.to_string(), "{2=b, 1=a}");
}

#[test]
fn test_errors_in_no_std() {
    let err = LruCache::<u8, u8>::new(0).unwrap_err();
    assert_eq!(err, CacheError::InvalidCapacity { requested: 0 });
    assert!(err.to_string().contains("positive"));
}

#[test]
fn test_metrics_in_no_std() {
    let mut cache = make_lru(1);
    cache.put(1u8, 1u8).unwrap();
    cache.put(2u8, 2u8).unwrap();
    let metrics = cache.metrics();
    assert_eq!(metrics.get("evictions"), Some(&1.0));
}
