//! Ordered set based on a self-balancing (AVL) binary search tree.
//!
//! This module provides [`AvlTree`], the ordered index the root lexicon is
//! built on.
//!
//! # Overview
//!
//! `AvlTree` stores unique values in a binary search tree that rebalances
//! itself after every mutation. Each node caches the height of its subtree;
//! whenever the difference between a node's child heights leaves `-1..=1`,
//! a single or double rotation restores it. The tree owns its nodes
//! exclusively (`Box`), so mutations rewire links in place instead of
//! copying paths.
//!
//! - O(log N) insert, remove, get and contains
//! - O(1) len, height and `is_empty`
//! - O(N) ordered iteration
//!
//! # Time Complexity
//!
//! | Operation  | Complexity |
//! |------------|------------|
//! | `new`      | O(1)       |
//! | `insert`   | O(log N)   |
//! | `remove`   | O(log N)   |
//! | `get`      | O(log N)   |
//! | `contains` | O(log N)   |
//! | `min`/`max`| O(log N)   |
//! | `len`      | O(1)       |
//! | `height`   | O(1)       |
//! | `iter`     | O(N)       |
//!
//! # Examples
//!
//! ```rust
//! use sarf::index::AvlTree;
//!
//! let mut tree = AvlTree::new();
//! assert!(tree.insert(3));
//! assert!(tree.insert(1));
//! assert!(tree.insert(2));
//!
//! // Duplicates are rejected without touching the tree
//! assert!(!tree.insert(2));
//! assert_eq!(tree.len(), 3);
//!
//! // Iteration is always in ascending order
//! let sorted: Vec<&i32> = tree.iter().collect();
//! assert_eq!(sorted, vec![&1, &2, &3]);
//! ```
//!
//! # Internal Structure
//!
//! The tree uses:
//! - Exclusively owned nodes (`Option<Box<Node>>` links)
//! - A cached subtree height per node (leaf height is 1)
//! - Recursive mutation helpers that hand back the new subtree root, so a
//!   rotation at any depth is a plain return value

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

// =============================================================================
// Node Definition
// =============================================================================

/// An owned link to a subtree.
type Link<T> = Option<Box<Node<T>>>;

/// Internal node structure for the AVL tree.
struct Node<T> {
    value: T,
    /// Height of the subtree rooted here; a leaf has height 1.
    height: usize,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    /// Creates a new leaf node.
    const fn new(value: T) -> Self {
        Self {
            value,
            height: 1,
            left: None,
            right: None,
        }
    }

    /// Recomputes the cached height from the children's cached heights.
    fn update_height(&mut self) {
        self.height = 1 + link_height(&self.left).max(link_height(&self.right));
    }

    /// Height of the left subtree minus the height of the right subtree.
    fn balance_factor(&self) -> isize {
        let left = link_height(&self.left) as isize;
        let right = link_height(&self.right) as isize;
        left - right
    }
}

/// Helper function returning the cached height of an optional subtree.
fn link_height<T>(link: &Link<T>) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

// =============================================================================
// AvlTree Definition
// =============================================================================

/// An ordered set of unique values backed by an AVL tree.
///
/// Values must implement `Ord`. The set keeps them in ascending order and
/// guarantees that every node's child subtrees differ in height by at most
/// one, so lookups and mutations stay logarithmic even under adversarial
/// (for example, sorted) insertion orders.
///
/// Lookups accept any borrowed form of the value type: a tree of `String`
/// answers `get("كتب")` without an owned probe.
///
/// # Examples
///
/// ```rust
/// use sarf::index::AvlTree;
///
/// let mut roots = AvlTree::new();
/// roots.insert("كتب".to_string());
/// roots.insert("درس".to_string());
/// roots.insert("علم".to_string());
///
/// assert_eq!(roots.get("كتب"), Some(&"كتب".to_string()));
/// assert!(roots.height() <= 2);
/// ```
pub struct AvlTree<T> {
    /// Root node of the tree
    root: Link<T>,
    /// Number of stored values
    length: usize,
}

impl<T> AvlTree<T> {
    /// Creates a new empty tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sarf::index::AvlTree;
    ///
    /// let tree: AvlTree<i32> = AvlTree::new();
    /// assert!(tree.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            root: None,
            length: 0,
        }
    }

    /// Returns the number of stored values.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sarf::index::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// tree.insert(2);
    /// assert_eq!(tree.len(), 2);
    /// ```
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the tree contains no values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sarf::index::AvlTree;
    ///
    /// let empty: AvlTree<i32> = AvlTree::new();
    /// assert!(empty.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the height of the tree.
    ///
    /// The empty tree has height 0 and a single node has height 1. Balancing
    /// keeps the height within a constant factor of `log2(len)`.
    ///
    /// # Complexity
    ///
    /// O(1), read from the root's cached height.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sarf::index::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// assert_eq!(tree.height(), 0);
    ///
    /// tree.insert(1);
    /// assert_eq!(tree.height(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        link_height(&self.root)
    }

    /// Removes every value, keeping the allocation-free empty state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sarf::index::AvlTree;
    ///
    /// let mut tree: AvlTree<i32> = (1..=10).collect();
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.height(), 0);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.root = None;
        self.length = 0;
    }

    /// Returns a reference to the smallest value.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sarf::index::AvlTree;
    ///
    /// let tree: AvlTree<i32> = [3, 1, 5].into_iter().collect();
    /// assert_eq!(tree.min(), Some(&1));
    /// ```
    #[must_use]
    pub fn min(&self) -> Option<&T> {
        let mut current = self.root.as_deref()?;
        while let Some(left) = current.left.as_deref() {
            current = left;
        }
        Some(&current.value)
    }

    /// Returns a reference to the largest value.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sarf::index::AvlTree;
    ///
    /// let tree: AvlTree<i32> = [3, 1, 5].into_iter().collect();
    /// assert_eq!(tree.max(), Some(&5));
    /// ```
    #[must_use]
    pub fn max(&self) -> Option<&T> {
        let mut current = self.root.as_deref()?;
        while let Some(right) = current.right.as_deref() {
            current = right;
        }
        Some(&current.value)
    }

    /// Returns an iterator over the values in ascending order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sarf::index::AvlTree;
    ///
    /// let tree: AvlTree<i32> = [3, 1, 2].into_iter().collect();
    /// let sorted: Vec<&i32> = tree.iter().collect();
    /// assert_eq!(sorted, vec![&1, &2, &3]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> AvlTreeIterator<'_, T> {
        let mut values = Vec::with_capacity(self.length);
        Self::collect_values_in_order(self.root.as_deref(), &mut values);
        AvlTreeIterator {
            values,
            current_index: 0,
        }
    }

    /// Collects all values in ascending order into a `Vec` of references.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sarf::index::AvlTree;
    ///
    /// let tree: AvlTree<i32> = [2, 3, 1].into_iter().collect();
    /// assert_eq!(tree.to_vec(), vec![&1, &2, &3]);
    /// ```
    #[must_use]
    pub fn to_vec(&self) -> Vec<&T> {
        self.iter().collect()
    }

    /// Collects all values in sorted order (in-order traversal).
    fn collect_values_in_order<'a>(node: Option<&'a Node<T>>, values: &mut Vec<&'a T>) {
        if let Some(node_ref) = node {
            Self::collect_values_in_order(node_ref.left.as_deref(), values);
            values.push(&node_ref.value);
            Self::collect_values_in_order(node_ref.right.as_deref(), values);
        }
    }

    /// Moves all values out in ascending order.
    fn collect_values_into(node: Link<T>, values: &mut Vec<T>) {
        if let Some(node_ref) = node {
            let inner = *node_ref;
            Self::collect_values_into(inner.left, values);
            values.push(inner.value);
            Self::collect_values_into(inner.right, values);
        }
    }

    // =========================================================================
    // Rebalancing
    // =========================================================================

    /// Restores the height cache and the AVL balance of a subtree root
    /// whose children are already valid AVL trees.
    fn rebalance(mut node: Box<Node<T>>) -> Box<Node<T>> {
        node.update_height();
        let balance = node.balance_factor();

        if balance > 1 {
            // Left-heavy. An inner-leaning left child needs a preliminary
            // left rotation (left-right case); otherwise one right rotation
            // is enough.
            if node
                .left
                .as_ref()
                .is_some_and(|left| left.balance_factor() < 0)
                && let Some(left) = node.left.take()
            {
                node.left = Some(Self::rotate_left(left));
            }
            return Self::rotate_right(node);
        }

        if balance < -1 {
            // Right-heavy, mirrored: right-left case first, then one left
            // rotation.
            if node
                .right
                .as_ref()
                .is_some_and(|right| right.balance_factor() > 0)
                && let Some(right) = node.right.take()
            {
                node.right = Some(Self::rotate_right(right));
            }
            return Self::rotate_left(node);
        }

        node
    }

    /// Rotates the subtree to the left around the given node.
    fn rotate_left(mut node: Box<Node<T>>) -> Box<Node<T>> {
        if let Some(mut pivot) = node.right.take() {
            node.right = pivot.left.take();
            node.update_height();
            pivot.left = Some(node);
            pivot.update_height();
            pivot
        } else {
            node
        }
    }

    /// Rotates the subtree to the right around the given node.
    fn rotate_right(mut node: Box<Node<T>>) -> Box<Node<T>> {
        if let Some(mut pivot) = node.left.take() {
            node.left = pivot.right.take();
            node.update_height();
            pivot.right = Some(node);
            pivot.update_height();
            pivot
        } else {
            node
        }
    }

    /// Removes the minimum value of a subtree, returning the remaining
    /// (rebalanced) subtree and the detached value.
    fn detach_min(mut node: Box<Node<T>>) -> (Link<T>, T) {
        match node.left.take() {
            None => {
                let inner = *node;
                (inner.right, inner.value)
            }
            Some(left) => {
                let (new_left, min_value) = Self::detach_min(left);
                node.left = new_left;
                (Some(Self::rebalance(node)), min_value)
            }
        }
    }
}

impl<T: Ord> AvlTree<T> {
    /// Adds a value to the tree.
    ///
    /// Returns `true` when the value was added. A value already present (by
    /// `Ord` equality) leaves the tree untouched and returns `false`; the
    /// stored value is kept and the argument is dropped.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sarf::index::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// assert!(tree.insert(7));
    /// assert!(!tree.insert(7));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let (new_root, added) = Self::insert_into_node(self.root.take(), value);
        self.root = new_root;
        if added {
            self.length += 1;
        }
        added
    }

    /// Recursive helper for insert.
    /// Returns (`new_subtree`, `was_added`) where `was_added` is true if the
    /// value was not already present.
    fn insert_into_node(node: Link<T>, value: T) -> (Link<T>, bool) {
        match node {
            None => (Some(Box::new(Node::new(value))), true),
            Some(mut node_ref) => match value.cmp(&node_ref.value) {
                Ordering::Less => {
                    let (new_left, added) = Self::insert_into_node(node_ref.left.take(), value);
                    node_ref.left = new_left;
                    (Some(Self::rebalance(node_ref)), added)
                }
                Ordering::Greater => {
                    let (new_right, added) = Self::insert_into_node(node_ref.right.take(), value);
                    node_ref.right = new_right;
                    (Some(Self::rebalance(node_ref)), added)
                }
                Ordering::Equal => (Some(node_ref), false),
            },
        }
    }

    /// Returns a reference to the stored value equal to the probe.
    ///
    /// The probe may be any borrowed form of the value type, but the
    /// ordering on the borrowed form must match the ordering on the value
    /// type.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sarf::index::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert("كتب".to_string());
    ///
    /// // Can use &str to look up String values
    /// assert_eq!(tree.get("كتب"), Some(&"كتب".to_string()));
    /// assert_eq!(tree.get("قرأ"), None);
    /// ```
    #[must_use]
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        Self::get_from_node(self.root.as_deref(), value)
    }

    /// Recursive helper for get.
    fn get_from_node<'a, Q>(node: Option<&'a Node<T>>, value: &Q) -> Option<&'a T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        node.and_then(|node_ref| match value.cmp(node_ref.value.borrow()) {
            Ordering::Less => Self::get_from_node(node_ref.left.as_deref(), value),
            Ordering::Greater => Self::get_from_node(node_ref.right.as_deref(), value),
            Ordering::Equal => Some(&node_ref.value),
        })
    }

    /// Returns `true` if the tree contains a value equal to the probe.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sarf::index::AvlTree;
    ///
    /// let tree: AvlTree<i32> = [1, 2, 3].into_iter().collect();
    /// assert!(tree.contains(&2));
    /// assert!(!tree.contains(&9));
    /// ```
    #[must_use]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(value).is_some()
    }

    /// Removes the value equal to the probe.
    ///
    /// Returns `true` when a value was removed; removing an absent value is
    /// a no-op returning `false`. A node with two children is replaced by
    /// its in-order successor, the minimum of its right subtree.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sarf::index::AvlTree;
    ///
    /// let mut tree: AvlTree<i32> = [1, 2, 3].into_iter().collect();
    /// assert!(tree.remove(&2));
    /// assert!(!tree.remove(&2));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let (new_root, removed) = Self::remove_from_node(self.root.take(), value);
        self.root = new_root;
        if removed {
            self.length -= 1;
        }
        removed
    }

    /// Recursive helper for remove.
    fn remove_from_node<Q>(node: Link<T>, value: &Q) -> (Link<T>, bool)
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let Some(mut node_ref) = node else {
            return (None, false);
        };

        match value.cmp(node_ref.value.borrow()) {
            Ordering::Less => {
                let (new_left, removed) = Self::remove_from_node(node_ref.left.take(), value);
                node_ref.left = new_left;
                (Some(Self::rebalance(node_ref)), removed)
            }
            Ordering::Greater => {
                let (new_right, removed) = Self::remove_from_node(node_ref.right.take(), value);
                node_ref.right = new_right;
                (Some(Self::rebalance(node_ref)), removed)
            }
            Ordering::Equal => match (node_ref.left.take(), node_ref.right.take()) {
                (None, None) => (None, true),
                (Some(child), None) | (None, Some(child)) => (Some(child), true),
                (Some(left), Some(right)) => {
                    // Replace with the in-order successor, the minimum of the
                    // right subtree; the node's allocation is reused.
                    let (new_right, successor) = Self::detach_min(right);
                    node_ref.value = successor;
                    node_ref.left = Some(left);
                    node_ref.right = new_right;
                    (Some(Self::rebalance(node_ref)), true)
                }
            },
        }
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over the values of an [`AvlTree`] in ascending order.
pub struct AvlTreeIterator<'a, T> {
    values: Vec<&'a T>,
    current_index: usize,
}

impl<'a, T> Iterator for AvlTreeIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_index >= self.values.len() {
            None
        } else {
            let value = self.values[self.current_index];
            self.current_index += 1;
            Some(value)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.values.len().saturating_sub(self.current_index);
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for AvlTreeIterator<'_, T> {
    fn len(&self) -> usize {
        self.values.len().saturating_sub(self.current_index)
    }
}

/// An owning iterator over the values of an [`AvlTree`] in ascending order.
pub struct AvlTreeIntoIterator<T> {
    values: std::vec::IntoIter<T>,
}

impl<T> Iterator for AvlTreeIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.values.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.values.size_hint()
    }
}

impl<T> ExactSizeIterator for AvlTreeIntoIterator<T> {
    fn len(&self) -> usize {
        self.values.len()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for AvlTree<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for AvlTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for AvlTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> IntoIterator for AvlTree<T> {
    type Item = T;
    type IntoIter = AvlTreeIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        let mut values = Vec::with_capacity(self.length);
        Self::collect_values_into(self.root, &mut values);
        AvlTreeIntoIterator {
            values: values.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a AvlTree<T> {
    type Item = &'a T;
    type IntoIter = AvlTreeIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for AvlTree<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for AvlTree<T> {}

impl<T: fmt::Debug> fmt::Debug for AvlTree<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for AvlTree<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for value in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{value}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Tests
// =============================================================================
