//! Recency-ordered doubly linked list stored in a slot arena.
//!
//! Entries live in a `Vec` and link to each other by [`EntryHandle`] index
//! rather than by pointer. The front of the list is the most recently used
//! entry and the back is the least recently used one.
//!
//! ```text
//!   slots: Vec<Entry<K, V>>
//!   ┌────────┬──────────────────────────────────────────┐
//!   │ handle │ Entry { key, value, prev, next }         │
//!   ├────────┼──────────────────────────────────────────┤
//!   │ 0      │ { 1, "a", prev: Some(2), next: None }    │
//!   │ 1      │ { 2, "b", prev: None,    next: Some(2) } │
//!   │ 2      │ { 3, "c", prev: Some(1), next: Some(0) } │
//!   └────────┴──────────────────────────────────────────┘
//!
//!   head ─► [1] ◄──► [2] ◄──► [0] ◄── tail
//! ```
//!
//! Slots are never freed one at a time. Once the list is full the owning
//! cache recycles the back entry with [`List::replace`] followed by
//! [`List::move_to_front`], so the arena stops growing at capacity.

extern crate alloc;

use crate::error::{CacheError, InvariantError};
use alloc::format;
use alloc::vec::Vec;
use core::fmt;
use core::iter::FusedIterator;
use core::mem;
use core::num::NonZeroUsize;

/// Smallest number of slots reserved when the arena first grows.
const MIN_GROWTH: usize = 4;

/// Stable index of an entry inside a [`List`].
///
/// A handle stays valid until the list is cleared. Recycling an entry with
/// [`List::replace`] keeps its handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct EntryHandle(usize);

/// A node in the list.
struct Entry<K, V> {
    key: K,
    value: V,
    prev: Option<EntryHandle>,
    next: Option<EntryHandle>,
}

/// A doubly linked list ordered from most to least recently used.
///
/// The list owns every entry. Callers hold [`EntryHandle`]s, which are plain
/// indices and never borrow the list.
pub(crate) struct List<K, V> {
    /// Maximum number of entries the arena grows to.
    cap: NonZeroUsize,
    slots: Vec<Entry<K, V>>,
    head: Option<EntryHandle>,
    tail: Option<EntryHandle>,
}

impl<K, V> List<K, V> {
    /// Creates an empty list that will hold at most `cap` entries.
    ///
    /// Nothing is allocated until the first insertion.
    pub(crate) fn new(cap: NonZeroUsize) -> Self {
        List {
            cap,
            slots: Vec::new(),
            head: None,
            tail: None,
        }
    }

    /// Returns the current number of entries.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if the list contains no entries.
    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns true if the list holds `cap` entries.
    #[inline]
    pub(crate) fn is_full(&self) -> bool {
        self.slots.len() >= self.cap.get()
    }

    /// Handle of the most recently used entry.
    #[inline]
    pub(crate) fn front(&self) -> Option<EntryHandle> {
        self.head
    }

    /// Handle of the least recently used entry.
    #[inline]
    pub(crate) fn back(&self) -> Option<EntryHandle> {
        self.tail
    }

    /// Allocates a new entry and links it in as the front of the list.
    ///
    /// Room for the slot is reserved before any link changes, so when the
    /// allocator refuses the list is left exactly as it was and
    /// [`CacheError::OutOfMemory`] is returned.
    pub(crate) fn add_to_front(&mut self, key: K, value: V) -> Result<EntryHandle, CacheError> {
        self.reserve_slot()?;

        let handle = EntryHandle(self.slots.len());
        self.slots.push(Entry {
            key,
            value,
            prev: None,
            next: self.head,
        });

        match self.head {
            Some(old_head) => self.slots[old_head.0].prev = Some(handle),
            // first entry is both ends
            None => self.tail = Some(handle),
        }
        self.head = Some(handle);

        Ok(handle)
    }

    /// Grows the arena geometrically, never past `cap` slots.
    fn reserve_slot(&mut self) -> Result<(), CacheError> {
        let len = self.slots.len();
        if len < self.slots.capacity() {
            return Ok(());
        }
        let additional = len
            .max(MIN_GROWTH)
            .min(self.cap.get().saturating_sub(len))
            .max(1);
        self.slots
            .try_reserve_exact(additional)
            .map_err(|_| CacheError::OutOfMemory)
    }

    /// Relinks the entry behind `handle` as the front of the list.
    ///
    /// Does not allocate and cannot fail. Moving the current front, including
    /// the sole entry of a one-element list, is a no-op.
    pub(crate) fn move_to_front(&mut self, handle: EntryHandle) {
        if self.head == Some(handle) {
            return;
        }

        let (prev, next) = {
            let entry = &self.slots[handle.0];
            (entry.prev, entry.next)
        };

        if self.tail == Some(handle) {
            // not the head, so a predecessor exists and becomes the new tail
            self.tail = prev;
            if let Some(prev) = prev {
                self.slots[prev.0].next = None;
            }
        } else {
            if let Some(prev) = prev {
                self.slots[prev.0].next = next;
            }
            if let Some(next) = next {
                self.slots[next.0].prev = prev;
            }
        }

        let old_head = self.head;
        {
            let entry = &mut self.slots[handle.0];
            entry.prev = None;
            entry.next = old_head;
        }
        if let Some(old_head) = old_head {
            self.slots[old_head.0].prev = Some(handle);
        }
        self.head = Some(handle);
    }

    /// Overwrites the key and value of a live entry in place.
    ///
    /// Returns the previous key and value. Position in the list is not
    /// changed; callers recycling the back entry follow up with
    /// [`List::move_to_front`].
    pub(crate) fn replace(&mut self, handle: EntryHandle, key: K, value: V) -> (K, V) {
        let entry = &mut self.slots[handle.0];
        let old_key = mem::replace(&mut entry.key, key);
        let old_value = mem::replace(&mut entry.value, value);
        (old_key, old_value)
    }

    /// Key stored at `handle`.
    #[inline]
    pub(crate) fn key(&self, handle: EntryHandle) -> &K {
        &self.slots[handle.0].key
    }

    /// Key stored at `handle`, or `None` if the handle is out of range.
    #[inline]
    pub(crate) fn try_key(&self, handle: EntryHandle) -> Option<&K> {
        self.slots.get(handle.0).map(|entry| &entry.key)
    }

    /// Value stored at `handle`.
    #[inline]
    pub(crate) fn value(&self, handle: EntryHandle) -> &V {
        &self.slots[handle.0].value
    }

    /// Mutable value stored at `handle`.
    #[inline]
    pub(crate) fn value_mut(&mut self, handle: EntryHandle) -> &mut V {
        &mut self.slots[handle.0].value
    }

    /// Iterates entries from most to least recently used.
    pub(crate) fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            list: self,
            next: self.head,
            remaining: self.len(),
        }
    }

    /// Drops every entry and releases the arena.
    pub(crate) fn clear(&mut self) {
        self.slots = Vec::new();
        self.head = None;
        self.tail = None;
    }

    /// Walks the list in both directions and checks the link structure.
    pub(crate) fn check_invariants(&self) -> Result<(), InvariantError> {
        let len = self.len();

        if self.head.is_none() != self.tail.is_none() {
            return Err(InvariantError::new("head and tail disagree on emptiness"));
        }
        if self.head.is_none() != (len == 0) {
            return Err(InvariantError::new(format!(
                "head is {:?} but the arena holds {} entries",
                self.head, len
            )));
        }
        if len > self.cap.get() {
            return Err(InvariantError::new(format!(
                "list holds {} entries, capacity is {}",
                len, self.cap
            )));
        }

        let mut steps = 0;
        let mut prev = None;
        let mut current = self.head;
        while let Some(handle) = current {
            let entry = self
                .slots
                .get(handle.0)
                .ok_or_else(|| InvariantError::new(format!("dangling handle {:?}", handle)))?;
            if entry.prev != prev {
                return Err(InvariantError::new(format!(
                    "entry {:?} has prev {:?}, expected {:?}",
                    handle, entry.prev, prev
                )));
            }
            steps += 1;
            if steps > len {
                return Err(InvariantError::new("forward walk is longer than the list"));
            }
            prev = current;
            current = entry.next;
        }
        if steps != len || prev != self.tail {
            return Err(InvariantError::new(format!(
                "forward walk took {} steps and ended at {:?}, expected {} steps ending at {:?}",
                steps, prev, len, self.tail
            )));
        }

        let mut steps = 0;
        let mut current = self.tail;
        while let Some(handle) = current {
            steps += 1;
            if steps > len {
                return Err(InvariantError::new("backward walk is longer than the list"));
            }
            current = self
                .slots
                .get(handle.0)
                .ok_or_else(|| InvariantError::new(format!("dangling handle {:?}", handle)))?
                .prev;
        }
        if steps != len {
            return Err(InvariantError::new(format!(
                "backward walk took {} steps, expected {}",
                steps, len
            )));
        }

        Ok(())
    }
}

impl<K, V> fmt::Debug for List<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("List")
            .field("capacity", &self.cap)
            .field("length", &self.len())
            .field("head", &self.head)
            .field("tail", &self.tail)
            .finish()
    }
}

/// Front-to-back iterator over a [`List`].
pub(crate) struct Iter<'a, K, V> {
    list: &'a List<K, V>,
    next: Option<EntryHandle>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let handle = self.next?;
        let entry = &self.list.slots[handle.0];
        self.next = entry.next;
        self.remaining -= 1;
        Some((&entry.key, &entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("remaining", &self.remaining)
            .finish()
    }
}
