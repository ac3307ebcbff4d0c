//! The ordered root lexicon.

use crate::index::{AvlTree, AvlTreeIterator};
use crate::morphology::Root;

// =============================================================================
// RootStore Definition
// =============================================================================

/// Triliteral roots kept in the AVL-balanced ordered index.
///
/// Lookups take plain text; probing with text that is not a stored root
/// simply misses. Listings come out in ascending letter order.
///
/// # Examples
///
/// ```rust
/// use sarf::lexicon::RootStore;
/// use sarf::morphology::Root;
///
/// let mut store = RootStore::new();
/// store.insert(Root::new("كتب").unwrap());
/// store.insert(Root::new("درس").unwrap());
///
/// assert_eq!(store.len(), 2);
/// assert!(store.contains("كتب"));
/// assert!(store.find("xyz").is_none());
///
/// let letters: Vec<&str> = store.all().iter().map(|root| root.letters()).collect();
/// assert_eq!(letters, vec!["درس", "كتب"]);
/// ```
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RootStore {
    tree: AvlTree<Root>,
}

impl RootStore {
    /// Creates an empty store.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tree: AvlTree::new(),
        }
    }

    /// Adds a root, returning `false` when it was already stored.
    pub fn insert(&mut self, root: Root) -> bool {
        self.tree.insert(root)
    }

    /// Looks a root up by its letters.
    #[must_use]
    pub fn find(&self, letters: &str) -> Option<&Root> {
        self.tree.get(letters)
    }

    /// Returns `true` when a root with these letters is stored.
    #[must_use]
    pub fn contains(&self, letters: &str) -> bool {
        self.tree.contains(letters)
    }

    /// Removes a root by its letters, returning whether it was present.
    pub fn remove(&mut self, letters: &str) -> bool {
        self.tree.remove(letters)
    }

    /// Returns every stored root in ascending letter order.
    #[must_use]
    pub fn all(&self) -> Vec<&Root> {
        self.tree.to_vec()
    }

    /// Returns an iterator over the roots in ascending letter order.
    pub fn iter(&self) -> AvlTreeIterator<'_, Root> {
        self.tree.iter()
    }

    /// Returns the number of stored roots.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` when no roots are stored.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Returns the height of the underlying tree (0 when empty).
    #[must_use]
    pub fn height(&self) -> usize {
        self.tree.height()
    }

    /// Removes every root.
    pub fn clear(&mut self) {
        self.tree.clear();
    }
}

impl<'a> IntoIterator for &'a RootStore {
    type Item = &'a Root;
    type IntoIter = AvlTreeIterator<'a, Root>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<Root> for RootStore {
    fn extend<I: IntoIterator<Item = Root>>(&mut self, iter: I) {
        for root in iter {
            self.insert(root);
        }
    }
}

impl FromIterator<Root> for RootStore {
    fn from_iter<I: IntoIterator<Item = Root>>(iter: I) -> Self {
        let mut store = Self::new();
        store.extend(iter);
        store
    }
}

// =============================================================================
// Tests
// =============================================================================
