//! The pattern lexicon, keyed by pattern id.

use crate::index::{ChainedHashMap, Values};
use crate::morphology::Pattern;

/// The eight classical patterns an empty store is seeded with:
/// `(id, structure, description, category)`.
const DEFAULT_PATTERNS: [(&str, &str, &str, &str); 8] = [
    ("فاعل", "فاعل", "اسم الفاعل", "اسم"),
    ("مفعول", "مفعول", "اسم المفعول", "اسم"),
    ("افتعل", "افتعل", "فعل مزيد", "فعل"),
    ("تفعيل", "تفعيل", "مصدر", "مصدر"),
    ("استفعال", "استفعال", "مصدر الاستفعال", "مصدر"),
    ("فعّال", "فعّال", "صيغة مبالغة", "اسم"),
    ("مفعل", "مفعل", "اسم المكان", "اسم"),
    ("فعيل", "فعيل", "صفة مشبهة", "صفة"),
];

// =============================================================================
// PatternStore Definition
// =============================================================================

/// Derivation patterns kept in the chaining hash map, keyed by id.
///
/// # Examples
///
/// ```rust
/// use sarf::lexicon::PatternStore;
/// use sarf::morphology::Pattern;
///
/// let mut store = PatternStore::new();
/// assert_eq!(store.seed_defaults(), 8);
///
/// let pattern = store.find("فاعل").unwrap();
/// assert_eq!(pattern.description(), "اسم الفاعل");
///
/// store.insert(Pattern::new("فعول", "فعول").with_category("صفة"));
/// assert_eq!(store.len(), 9);
/// ```
#[derive(Debug, Default)]
pub struct PatternStore {
    table: ChainedHashMap<String, Pattern>,
}

impl PatternStore {
    /// Creates an empty store with the map's default capacity.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: ChainedHashMap::new(),
        }
    }

    /// Adds a pattern under its id, returning the displaced pattern when
    /// the id was already taken.
    pub fn insert(&mut self, pattern: Pattern) -> Option<Pattern> {
        self.table.insert(pattern.id().to_string(), pattern)
    }

    /// Looks a pattern up by id.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Pattern> {
        self.table.get(id)
    }

    /// Returns `true` when a pattern with this id is stored.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.table.contains_key(id)
    }

    /// Removes a pattern by id, returning it when present.
    pub fn remove(&mut self, id: &str) -> Option<Pattern> {
        self.table.remove(id)
    }

    /// Returns every stored pattern, in the map's bucket order.
    #[must_use]
    pub fn all(&self) -> Vec<&Pattern> {
        self.table.values().collect()
    }

    /// Returns the patterns whose category matches.
    #[must_use]
    pub fn by_category(&self, category: &str) -> Vec<&Pattern> {
        self.table
            .values()
            .filter(|pattern| pattern.category() == category)
            .collect()
    }

    /// Returns an iterator over the stored patterns.
    pub fn iter(&self) -> Values<'_, String, Pattern> {
        self.table.values()
    }

    /// Modifies a stored pattern in place; `None` arguments keep the
    /// current value. Returns `false` when the id is not stored.
    pub fn update(
        &mut self,
        id: &str,
        structure: Option<&str>,
        description: Option<&str>,
        category: Option<&str>,
    ) -> bool {
        let Some(pattern) = self.table.get_mut(id) else {
            return false;
        };
        if let Some(structure) = structure {
            pattern.set_structure(structure);
        }
        if let Some(description) = description {
            pattern.set_description(description);
        }
        if let Some(category) = category {
            pattern.set_category(category);
        }
        true
    }

    /// Seeds the eight classical default patterns, skipping ids already
    /// stored. Returns how many were added.
    pub fn seed_defaults(&mut self) -> usize {
        let mut added = 0;
        for (id, structure, description, category) in DEFAULT_PATTERNS {
            if self.contains(id) {
                continue;
            }
            self.insert(
                Pattern::new(id, structure)
                    .with_description(description)
                    .with_category(category),
            );
            added += 1;
        }
        added
    }

    /// Returns the number of stored patterns.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` when no patterns are stored.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns the bucket count of the underlying map.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Returns the underlying map's entries-to-buckets ratio.
    #[must_use]
    pub fn load_factor(&self) -> f64 {
        self.table.load_factor()
    }

    /// Removes every pattern, keeping the current capacity.
    pub fn clear(&mut self) {
        self.table.clear();
    }
}

impl<'a> IntoIterator for &'a PatternStore {
    type Item = &'a Pattern;
    type IntoIter = Values<'a, String, Pattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<Pattern> for PatternStore {
    fn extend<I: IntoIterator<Item = Pattern>>(&mut self, iter: I) {
        for pattern in iter {
            self.insert(pattern);
        }
    }
}

impl FromIterator<Pattern> for PatternStore {
    fn from_iter<I: IntoIterator<Item = Pattern>>(iter: I) -> Self {
        let mut store = Self::new();
        store.extend(iter);
        store
    }
}

// =============================================================================
// Tests
// =============================================================================
