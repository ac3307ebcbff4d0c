//! Snapshot of the dictionary's state for display.

use std::fmt;

use crate::engine::Generator;
use crate::lexicon::{PatternStore, RootStore};

// =============================================================================
// Statistics Definition
// =============================================================================

/// Counters and container health gathered in one pass.
///
/// # Examples
///
/// ```rust
/// use sarf::engine::{Generator, Statistics};
/// use sarf::lexicon::{PatternStore, RootStore};
/// use sarf::morphology::Root;
///
/// let mut roots = RootStore::new();
/// roots.insert(Root::new("كتب").unwrap());
/// let mut patterns = PatternStore::new();
/// patterns.seed_defaults();
///
/// let stats = Statistics::gather(&roots, &patterns, &Generator::new());
/// assert_eq!(stats.root_count, 1);
/// assert_eq!(stats.pattern_count, 8);
/// assert_eq!(stats.map_capacity, 16);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    /// Stored roots.
    pub root_count: usize,
    /// Height of the root index.
    pub tree_height: usize,
    /// Stored patterns.
    pub pattern_count: usize,
    /// Buckets in the pattern map.
    pub map_capacity: usize,
    /// Entries-to-buckets ratio of the pattern map.
    pub map_load_factor: f64,
    /// Distinct words recorded in the derivation ledger.
    pub generated_words: usize,
}

impl Statistics {
    /// Snapshots the stores and the generator's ledger.
    #[must_use]
    pub fn gather(roots: &RootStore, patterns: &PatternStore, generator: &Generator) -> Self {
        Self {
            root_count: roots.len(),
            tree_height: roots.height(),
            pattern_count: patterns.len(),
            map_capacity: patterns.capacity(),
            map_load_factor: patterns.load_factor(),
            generated_words: generator.total_generated(),
        }
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(formatter, "عدد الجذور (roots): {}", self.root_count)?;
        writeln!(formatter, "ارتفاع الشجرة (tree height): {}", self.tree_height)?;
        writeln!(formatter, "عدد الأوزان (patterns): {}", self.pattern_count)?;
        writeln!(formatter, "سعة الجدول (buckets): {}", self.map_capacity)?;
        writeln!(
            formatter,
            "معامل الامتلاء (load factor): {:.2}",
            self.map_load_factor
        )?;
        write!(
            formatter,
            "الكلمات المولدة (generated words): {}",
            self.generated_words
        )
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morphology::Root;
    use rstest::rstest;

    #[rstest]
    fn gather_snapshots_every_counter() {
        let mut roots = RootStore::new();
        for letters in ["كتب", "درس", "علم"] {
            roots.insert(Root::new(letters).unwrap());
        }
        let mut patterns = PatternStore::new();
        patterns.seed_defaults();
        let mut generator = Generator::new();
        let root = roots.find("كتب").unwrap();
        let pattern = patterns.find("فاعل").unwrap();
        generator.generate(root, pattern);

        let stats = Statistics::gather(&roots, &patterns, &generator);
        assert_eq!(stats.root_count, 3);
        assert_eq!(stats.tree_height, 2);
        assert_eq!(stats.pattern_count, 8);
        assert_eq!(stats.map_capacity, 16);
        assert_eq!(stats.map_load_factor, 0.5);
        assert_eq!(stats.generated_words, 1);
    }

    #[rstest]
    fn display_renders_one_labelled_line_per_counter() {
        let stats = Statistics {
            root_count: 5,
            tree_height: 3,
            pattern_count: 8,
            map_capacity: 16,
            map_load_factor: 0.5,
            generated_words: 12,
        };
        let rendered = stats.to_string();
        assert_eq!(rendered.lines().count(), 6);
        assert!(rendered.contains("عدد الجذور (roots): 5"));
        assert!(rendered.contains("معامل الامتلاء (load factor): 0.50"));
        assert!(rendered.ends_with("الكلمات المولدة (generated words): 12"));
    }
}
