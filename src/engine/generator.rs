//! Word generation and the derivation ledger.

use crate::index::ChainedHashMap;
use crate::morphology::{Derivations, DerivedWord, Pattern, Root};

// =============================================================================
// Generator Definition
// =============================================================================

/// Derives surface words and remembers every derivation.
///
/// The ledger is a chaining hash map from root letters to that root's
/// [`Derivations`]. Roots themselves are immutable values inside the
/// ordered index, so the generation history lives here instead of on the
/// root.
///
/// # Examples
///
/// ```rust
/// use sarf::engine::Generator;
/// use sarf::morphology::{Pattern, Root};
///
/// let root = Root::new("كتب").unwrap();
/// let pattern = Pattern::new("فاعل", "فاعل");
///
/// let mut generator = Generator::new();
/// let first = generator.generate(&root, &pattern);
/// assert_eq!(first.word(), "كاتب");
/// assert_eq!(first.frequency(), 0);
///
/// // Regenerating the same word bumps its frequency in the ledger.
/// let again = generator.generate(&root, &pattern);
/// assert_eq!(again.frequency(), 1);
/// assert_eq!(generator.total_generated(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Generator {
    ledger: ChainedHashMap<String, Derivations>,
}

impl Generator {
    /// Creates a generator with an empty ledger.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies the pattern to the root and records the result in the
    /// root's ledger.
    ///
    /// The returned word reflects the ledger entry: the first generation
    /// carries frequency 0, regenerating an equal word bumps it.
    pub fn generate(&mut self, root: &Root, pattern: &Pattern) -> DerivedWord {
        let word = DerivedWord::new(pattern.apply_to_root(root), root.letters(), pattern.id());

        if let Some(derivations) = self.ledger.get_mut(root.letters()) {
            derivations.record(word).clone()
        } else {
            let mut derivations = Derivations::new();
            let recorded = derivations.record(word).clone();
            self.ledger.insert(root.letters().to_string(), derivations);
            recorded
        }
    }

    /// Derives one word per pattern, recording each.
    pub fn generate_all(&mut self, root: &Root, patterns: &[&Pattern]) -> Vec<DerivedWord> {
        patterns
            .iter()
            .map(|pattern| self.generate(root, pattern))
            .collect()
    }

    /// Returns the words recorded for a root, oldest first; empty when the
    /// root has no derivations.
    #[must_use]
    pub fn derivations(&self, root_letters: &str) -> &[DerivedWord] {
        self.ledger
            .get(root_letters)
            .map_or(&[], Derivations::words)
    }

    /// Returns the number of distinct words recorded across all roots.
    #[must_use]
    pub fn total_generated(&self) -> usize {
        self.ledger.values().map(Derivations::len).sum()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn kataba() -> Root {
        Root::new("كتب").unwrap()
    }

    fn active() -> Pattern {
        Pattern::new("فاعل", "فاعل")
    }

    fn passive() -> Pattern {
        Pattern::new("مفعول", "مفعول")
    }

    #[rstest]
    fn generate_applies_the_pattern() {
        let mut generator = Generator::new();
        let word = generator.generate(&kataba(), &active());
        assert_eq!(word.word(), "كاتب");
        assert_eq!(word.root_letters(), "كتب");
        assert_eq!(word.pattern_id(), "فاعل");
        assert_eq!(word.frequency(), 0);
    }

    #[rstest]
    fn generate_records_into_the_ledger() {
        let mut generator = Generator::new();
        generator.generate(&kataba(), &active());
        generator.generate(&kataba(), &passive());

        let recorded = generator.derivations("كتب");
        let words: Vec<&str> = recorded.iter().map(DerivedWord::word).collect();
        assert_eq!(words, vec!["كاتب", "مكتوب"]);
        assert_eq!(generator.total_generated(), 2);
    }

    #[rstest]
    fn regenerating_bumps_frequency_without_duplicating() {
        let mut generator = Generator::new();
        generator.generate(&kataba(), &active());
        generator.generate(&kataba(), &active());
        let third = generator.generate(&kataba(), &active());

        assert_eq!(third.frequency(), 2);
        assert_eq!(generator.derivations("كتب").len(), 1);
        assert_eq!(generator.total_generated(), 1);
    }

    #[rstest]
    fn generate_all_derives_one_word_per_pattern() {
        let mut generator = Generator::new();
        let patterns = [active(), passive()];
        let borrowed: Vec<&Pattern> = patterns.iter().collect();

        let words = generator.generate_all(&kataba(), &borrowed);
        let surfaces: Vec<&str> = words.iter().map(DerivedWord::word).collect();
        assert_eq!(surfaces, vec!["كاتب", "مكتوب"]);
        assert_eq!(generator.total_generated(), 2);
    }

    #[rstest]
    fn ledgers_are_separate_per_root() {
        let mut generator = Generator::new();
        generator.generate(&kataba(), &active());
        generator.generate(&Root::new("درس").unwrap(), &active());

        assert_eq!(generator.derivations("كتب").len(), 1);
        assert_eq!(generator.derivations("درس").len(), 1);
        assert_eq!(generator.total_generated(), 2);
    }

    #[rstest]
    fn derivations_of_an_unknown_root_are_empty() {
        let generator = Generator::new();
        assert!(generator.derivations("قرأ").is_empty());
        assert_eq!(generator.total_generated(), 0);
    }
}
