//! Hash map with separate chaining and automatic growth.
//!
//! This module provides [`ChainedHashMap`], the index the pattern lexicon is
//! built on.
//!
//! # Overview
//!
//! `ChainedHashMap` stores key-value pairs in a bucket array. The bucket
//! index is a rolling hash over the key's textual form (see
//! [`fold_text`](crate::index::fold_text)); keys that land in the same
//! bucket are chained in a singly linked list of exclusively owned nodes.
//! When an insertion would push the load factor to 3/4, the bucket array
//! doubles and every node is rehashed into the new array before the new key
//! is placed, so the load factor stays strictly below 3/4 after every
//! insert.
//!
//! - O(1) average insert, remove, get and `contains_key`
//! - O(1) len, capacity, `load_factor` and `is_empty`
//! - O(N) iteration in bucket-then-chain order
//!
//! # Time Complexity
//!
//! | Operation      | Complexity   |
//! |----------------|--------------|
//! | `new`          | O(capacity)  |
//! | `insert`       | O(1) average |
//! | `remove`       | O(1) average |
//! | `get`          | O(1) average |
//! | `contains_key` | O(1) average |
//! | `len`          | O(1)         |
//! | `capacity`     | O(1)         |
//! | `load_factor`  | O(1)         |
//! | `iter`         | O(N)         |
//!
//! # Examples
//!
//! ```rust
//! use sarf::index::ChainedHashMap;
//!
//! let mut map = ChainedHashMap::new();
//! assert_eq!(map.insert("فاعل".to_string(), 1), None);
//! assert_eq!(map.insert("مفعول".to_string(), 2), None);
//!
//! // Replacing a value returns the displaced one and never changes the size
//! assert_eq!(map.insert("فاعل".to_string(), 10), Some(1));
//! assert_eq!(map.len(), 2);
//!
//! // Borrowed lookups need no owned probe
//! assert_eq!(map.get("مفعول"), Some(&2));
//! assert_eq!(map.remove("مفعول"), Some(2));
//! ```
//!
//! # Internal Structure
//!
//! The map uses:
//! - A bucket array (`Vec<Option<Box<ChainNode>>>`) of chain heads
//! - Exclusively owned chain nodes, each linking to the next in its bucket
//! - The rolling text hash for bucket placement, recomputed against the new
//!   capacity on every growth (bucket indices depend on the capacity, so
//!   growing requires a full rehash)

use std::borrow::Borrow;
use std::fmt;
use std::iter::FromIterator;
use std::mem;

use static_assertions::const_assert;

use crate::index::hash::fold_text;

// =============================================================================
// Constants
// =============================================================================

/// Number of buckets a map created with [`ChainedHashMap::new`] starts with.
const DEFAULT_CAPACITY: usize = 16;

/// Load-factor bound as a fraction: the map grows when placing a new key
/// would reach `GROWTH_NUMERATOR / GROWTH_DENOMINATOR`.
const GROWTH_NUMERATOR: usize = 3;

/// See [`GROWTH_NUMERATOR`].
const GROWTH_DENOMINATOR: usize = 4;

const_assert!(DEFAULT_CAPACITY > 0);

// The bound must be a proper fraction, or growth would trigger only at (or
// past) a completely full table.
const_assert!(GROWTH_NUMERATOR < GROWTH_DENOMINATOR);

// =============================================================================
// Node Definition
// =============================================================================

/// An owned link to the rest of a bucket's chain.
type Link<K, V> = Option<Box<ChainNode<K, V>>>;

/// Internal node structure for a bucket chain.
struct ChainNode<K, V> {
    key: K,
    value: V,
    next: Link<K, V>,
}

/// Helper function allocating a bucket array of empty chains.
fn empty_buckets<K, V>(capacity: usize) -> Vec<Link<K, V>> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}

// =============================================================================
// ChainedHashMap Definition
// =============================================================================

/// A key-value map backed by separate chaining over a growable bucket array.
///
/// Keys must implement `Display` (the bucket index is a rolling hash over
/// the key's textual form) and `Eq`. Two keys that render the same text
/// always land in the same bucket; equality alone decides whether they are
/// the same entry.
///
/// Lookups accept any borrowed form of the key type, provided it renders
/// the same text and compares equal the same way: a map keyed by `String`
/// answers `get("فاعل")` without an owned probe.
///
/// # Examples
///
/// ```rust
/// use sarf::index::ChainedHashMap;
///
/// let mut patterns = ChainedHashMap::new();
/// patterns.insert("فاعل".to_string(), "اسم الفاعل");
///
/// assert_eq!(patterns.get("فاعل"), Some(&"اسم الفاعل"));
/// assert_eq!(patterns.capacity(), 16);
/// assert!(patterns.load_factor() < 0.75);
/// ```
pub struct ChainedHashMap<K, V> {
    /// Bucket array of chain heads; its length is the capacity
    buckets: Vec<Link<K, V>>,
    /// Number of stored entries
    length: usize,
}

impl<K, V> ChainedHashMap<K, V> {
    /// Creates a new empty map with the default capacity of 16 buckets.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sarf::index::ChainedHashMap;
    ///
    /// let map: ChainedHashMap<String, i32> = ChainedHashMap::new();
    /// assert!(map.is_empty());
    /// assert_eq!(map.capacity(), 16);
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a new empty map with the given number of buckets.
    ///
    /// # Panics
    ///
    /// Panics when `capacity` is 0; the map always has at least one bucket.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sarf::index::ChainedHashMap;
    ///
    /// let map: ChainedHashMap<String, i32> = ChainedHashMap::with_capacity(4);
    /// assert_eq!(map.capacity(), 4);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be non-zero");
        Self {
            buckets: empty_buckets(capacity),
            length: 0,
        }
    }

    /// Returns the number of stored entries.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sarf::index::ChainedHashMap;
    ///
    /// let mut map = ChainedHashMap::new();
    /// map.insert("فاعل".to_string(), 1);
    /// map.insert("مفعول".to_string(), 2);
    /// assert_eq!(map.len(), 2);
    /// ```
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the map contains no entries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sarf::index::ChainedHashMap;
    ///
    /// let empty: ChainedHashMap<String, i32> = ChainedHashMap::new();
    /// assert!(empty.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the current number of buckets.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sarf::index::ChainedHashMap;
    ///
    /// let map: ChainedHashMap<String, i32> = ChainedHashMap::new();
    /// assert_eq!(map.capacity(), 16);
    /// ```
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the ratio of entries to buckets.
    ///
    /// Growth keeps this strictly below 0.75 after every insert.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sarf::index::ChainedHashMap;
    ///
    /// let mut map = ChainedHashMap::new();
    /// assert_eq!(map.load_factor(), 0.0);
    ///
    /// map.insert("فاعل".to_string(), 1);
    /// assert_eq!(map.load_factor(), 1.0 / 16.0);
    /// ```
    #[inline]
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        self.length as f64 / self.buckets.len() as f64
    }

    /// Removes every entry, keeping the current bucket array.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sarf::index::ChainedHashMap;
    ///
    /// let mut map = ChainedHashMap::new();
    /// map.insert("فاعل".to_string(), 1);
    /// map.clear();
    /// assert!(map.is_empty());
    /// assert_eq!(map.capacity(), 16);
    /// ```
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            *bucket = None;
        }
        self.length = 0;
    }

    /// Returns an iterator over the entries in bucket-then-chain order.
    ///
    /// The order is unspecified but stable for a given map state; any
    /// mutation may reorder it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sarf::index::ChainedHashMap;
    ///
    /// let mut map = ChainedHashMap::new();
    /// map.insert("فاعل".to_string(), 1);
    /// map.insert("مفعول".to_string(), 2);
    ///
    /// let total: i32 = map.iter().map(|(_, value)| value).sum();
    /// assert_eq!(total, 3);
    /// ```
    #[must_use]
    pub fn iter(&self) -> ChainedHashMapIterator<'_, K, V> {
        let mut entries = Vec::with_capacity(self.length);
        for bucket in &self.buckets {
            let mut current = bucket.as_deref();
            while let Some(node) = current {
                entries.push((&node.key, &node.value));
                current = node.next.as_deref();
            }
        }
        ChainedHashMapIterator {
            entries,
            current_index: 0,
        }
    }

    /// Returns an iterator over the keys, in [`iter`](Self::iter) order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sarf::index::ChainedHashMap;
    ///
    /// let mut map = ChainedHashMap::new();
    /// map.insert("فاعل".to_string(), 1);
    ///
    /// let keys: Vec<&String> = map.keys().collect();
    /// assert_eq!(keys, vec!["فاعل"]);
    /// ```
    #[must_use]
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Returns an iterator over the values, in [`iter`](Self::iter) order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sarf::index::ChainedHashMap;
    ///
    /// let mut map = ChainedHashMap::new();
    /// map.insert("فاعل".to_string(), 2);
    /// map.insert("مفعول".to_string(), 3);
    ///
    /// let product: i32 = map.values().product();
    /// assert_eq!(product, 6);
    /// ```
    #[must_use]
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }
}

impl<K: fmt::Display + Eq, V> ChainedHashMap<K, V> {
    /// Inserts a key-value pair into the map.
    ///
    /// A key already present has its value replaced in place and the
    /// displaced value is returned; the size does not change and the map
    /// never grows. A new key is prepended to its bucket's chain and `None`
    /// is returned; if placing it would push the load factor to 3/4, the
    /// bucket array doubles and every entry is rehashed first.
    ///
    /// # Complexity
    ///
    /// O(1) average; O(N) when the insert triggers growth.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sarf::index::ChainedHashMap;
    ///
    /// let mut map = ChainedHashMap::new();
    /// assert_eq!(map.insert("فاعل".to_string(), 1), None);
    /// assert_eq!(map.insert("فاعل".to_string(), 2), Some(1));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let index = fold_text(&key, self.buckets.len());

        // An existing key is replaced in place: no new node, no growth.
        let mut current = self.buckets[index].as_deref_mut();
        while let Some(node) = current {
            if node.key == key {
                return Some(mem::replace(&mut node.value, value));
            }
            current = node.next.as_deref_mut();
        }

        // New key: grow first when placing it would reach the bound, then
        // recompute the bucket against the new capacity.
        let index = if self.growth_required() {
            self.grow();
            fold_text(&key, self.buckets.len())
        } else {
            index
        };

        let next = self.buckets[index].take();
        self.buckets[index] = Some(Box::new(ChainNode { key, value, next }));
        self.length += 1;
        None
    }

    /// Returns `true` when placing one more entry would reach the
    /// load-factor bound.
    fn growth_required(&self) -> bool {
        GROWTH_DENOMINATOR * (self.length + 1) >= GROWTH_NUMERATOR * self.buckets.len()
    }

    /// Doubles the bucket array and rehashes every entry into it.
    ///
    /// Bucket indices are a function of the capacity, so every node must be
    /// re-placed; the nodes themselves are relinked, not reallocated.
    fn grow(&mut self) {
        let new_capacity = self.buckets.len() * 2;
        let old_buckets = mem::replace(&mut self.buckets, empty_buckets(new_capacity));

        for mut chain in old_buckets {
            while let Some(mut node) = chain {
                chain = node.next.take();
                let index = fold_text(&node.key, new_capacity);
                node.next = self.buckets[index].take();
                self.buckets[index] = Some(node);
            }
        }

        log::trace!(
            "chained hash map grew to {new_capacity} buckets ({} entries rehashed)",
            self.length
        );
    }

    /// Returns a reference to the value stored under the key.
    ///
    /// The probe may be any borrowed form of the key type, but it must
    /// render the same text through `Display` and compare equal the same
    /// way as the owned key.
    ///
    /// # Complexity
    ///
    /// O(1) average
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sarf::index::ChainedHashMap;
    ///
    /// let mut map = ChainedHashMap::new();
    /// map.insert("فاعل".to_string(), 1);
    ///
    /// // Can use &str to look up String keys
    /// assert_eq!(map.get("فاعل"), Some(&1));
    /// assert_eq!(map.get("مفعول"), None);
    /// ```
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: fmt::Display + Eq + ?Sized,
    {
        let index = fold_text(key, self.buckets.len());
        let mut current = self.buckets[index].as_deref();
        while let Some(node) = current {
            if node.key.borrow() == key {
                return Some(&node.value);
            }
            current = node.next.as_deref();
        }
        None
    }

    /// Returns a mutable reference to the value stored under the key.
    ///
    /// # Complexity
    ///
    /// O(1) average
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sarf::index::ChainedHashMap;
    ///
    /// let mut map = ChainedHashMap::new();
    /// map.insert("فاعل".to_string(), 1);
    ///
    /// if let Some(value) = map.get_mut("فاعل") {
    ///     *value += 10;
    /// }
    /// assert_eq!(map.get("فاعل"), Some(&11));
    /// ```
    #[must_use]
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: fmt::Display + Eq + ?Sized,
    {
        let index = fold_text(key, self.buckets.len());
        let mut current = self.buckets[index].as_deref_mut();
        while let Some(node) = current {
            if node.key.borrow() == key {
                return Some(&mut node.value);
            }
            current = node.next.as_deref_mut();
        }
        None
    }

    /// Returns `true` if the map contains an entry for the key.
    ///
    /// # Complexity
    ///
    /// O(1) average
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sarf::index::ChainedHashMap;
    ///
    /// let mut map = ChainedHashMap::new();
    /// map.insert("فاعل".to_string(), 1);
    ///
    /// assert!(map.contains_key("فاعل"));
    /// assert!(!map.contains_key("مفعول"));
    /// ```
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: fmt::Display + Eq + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Removes the entry stored under the key, returning its value.
    ///
    /// Removing an absent key is a no-op returning `None`.
    ///
    /// # Complexity
    ///
    /// O(1) average
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sarf::index::ChainedHashMap;
    ///
    /// let mut map = ChainedHashMap::new();
    /// map.insert("فاعل".to_string(), 1);
    ///
    /// assert_eq!(map.remove("فاعل"), Some(1));
    /// assert_eq!(map.remove("فاعل"), None);
    /// assert!(map.is_empty());
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: fmt::Display + Eq + ?Sized,
    {
        let index = fold_text(key, self.buckets.len());
        let (new_chain, removed) = Self::remove_from_chain(self.buckets[index].take(), key);
        self.buckets[index] = new_chain;
        if removed.is_some() {
            self.length -= 1;
        }
        removed
    }

    /// Recursive helper for remove.
    /// Returns (`new_chain`, `removed_value`); the matching node's successor
    /// takes its place in the chain.
    fn remove_from_chain<Q>(link: Link<K, V>, key: &Q) -> (Link<K, V>, Option<V>)
    where
        K: Borrow<Q>,
        Q: fmt::Display + Eq + ?Sized,
    {
        match link {
            None => (None, None),
            Some(mut node) => {
                if node.key.borrow() == key {
                    let inner = *node;
                    (inner.next, Some(inner.value))
                } else {
                    let (rest, removed) = Self::remove_from_chain(node.next.take(), key);
                    node.next = rest;
                    (Some(node), removed)
                }
            }
        }
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over the entries of a [`ChainedHashMap`] in bucket-then-chain
/// order.
pub struct ChainedHashMapIterator<'a, K, V> {
    entries: Vec<(&'a K, &'a V)>,
    current_index: usize,
}

impl<'a, K, V> Iterator for ChainedHashMapIterator<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_index >= self.entries.len() {
            None
        } else {
            let entry = self.entries[self.current_index];
            self.current_index += 1;
            Some(entry)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.entries.len().saturating_sub(self.current_index);
        (remaining, Some(remaining))
    }
}

impl<K, V> ExactSizeIterator for ChainedHashMapIterator<'_, K, V> {
    fn len(&self) -> usize {
        self.entries.len().saturating_sub(self.current_index)
    }
}

/// An iterator over the keys of a [`ChainedHashMap`].
pub struct Keys<'a, K, V> {
    inner: ChainedHashMapIterator<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

/// An iterator over the values of a [`ChainedHashMap`].
pub struct Values<'a, K, V> {
    inner: ChainedHashMapIterator<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

/// An owning iterator over the entries of a [`ChainedHashMap`].
pub struct ChainedHashMapIntoIterator<K, V> {
    entries: std::vec::IntoIter<(K, V)>,
}

impl<K, V> Iterator for ChainedHashMapIntoIterator<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<K, V> ExactSizeIterator for ChainedHashMapIntoIterator<K, V> {
    fn len(&self) -> usize {
        self.entries.len()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V> Default for ChainedHashMap<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Display + Eq, V> FromIterator<(K, V)> for ChainedHashMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: fmt::Display + Eq, V> Extend<(K, V)> for ChainedHashMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V> IntoIterator for ChainedHashMap<K, V> {
    type Item = (K, V);
    type IntoIter = ChainedHashMapIntoIterator<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        let mut entries = Vec::with_capacity(self.length);
        for mut chain in self.buckets {
            while let Some(node) = chain {
                let inner = *node;
                entries.push((inner.key, inner.value));
                chain = inner.next;
            }
        }
        ChainedHashMapIntoIterator {
            entries: entries.into_iter(),
        }
    }
}

impl<'a, K, V> IntoIterator for &'a ChainedHashMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = ChainedHashMapIterator<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: fmt::Display + Eq, V: PartialEq> PartialEq for ChainedHashMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        if self.length != other.length {
            return false;
        }
        self.iter()
            .all(|(key, value)| other.get(key) == Some(value))
    }
}

impl<K: fmt::Display + Eq, V: Eq> Eq for ChainedHashMap<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for ChainedHashMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

// =============================================================================
// Tests
// =============================================================================
