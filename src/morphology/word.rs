//! Derived words and the per-root derivation ledger.

use std::fmt;

use smallvec::SmallVec;

// Eight default patterns; a fully derived root stays inline.
const LEDGER_INLINE_CAPACITY: usize = 8;

// =============================================================================
// DerivedWord Definition
// =============================================================================

/// A surface word produced by applying a pattern to a root.
///
/// The frequency starts at 0 and counts how many times the same word has
/// been regenerated since. Equality is by the surface word alone.
///
/// # Examples
///
/// ```rust
/// use sarf::morphology::DerivedWord;
///
/// let word = DerivedWord::new("كاتب", "كتب", "فاعل");
/// assert_eq!(word.word(), "كاتب");
/// assert_eq!(word.root_letters(), "كتب");
/// assert_eq!(word.pattern_id(), "فاعل");
/// assert_eq!(word.frequency(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct DerivedWord {
    word: String,
    root_letters: String,
    pattern_id: String,
    frequency: u32,
}

impl DerivedWord {
    /// Creates a derived word with frequency 0.
    pub fn new(
        word: impl Into<String>,
        root_letters: impl Into<String>,
        pattern_id: impl Into<String>,
    ) -> Self {
        Self {
            word: word.into(),
            root_letters: root_letters.into(),
            pattern_id: pattern_id.into(),
            frequency: 0,
        }
    }

    /// Returns the surface word.
    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Returns the letters of the root the word derives from.
    #[inline]
    #[must_use]
    pub fn root_letters(&self) -> &str {
        &self.root_letters
    }

    /// Returns the id of the pattern that produced the word.
    #[inline]
    #[must_use]
    pub fn pattern_id(&self) -> &str {
        &self.pattern_id
    }

    /// Returns how many times the word has been regenerated.
    #[inline]
    #[must_use]
    pub const fn frequency(&self) -> u32 {
        self.frequency
    }

    /// Counts one more generation of this word.
    pub const fn increment_frequency(&mut self) {
        self.frequency += 1;
    }
}

impl PartialEq for DerivedWord {
    fn eq(&self, other: &Self) -> bool {
        self.word == other.word
    }
}

impl Eq for DerivedWord {}

impl fmt::Display for DerivedWord {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.word)
    }
}

// =============================================================================
// Derivations Definition
// =============================================================================

/// The ledger of words derived from one root, in first-generation order.
///
/// Recording a word equal to one already present bumps that entry's
/// frequency instead of appending a duplicate.
///
/// # Examples
///
/// ```rust
/// use sarf::morphology::{Derivations, DerivedWord};
///
/// let mut ledger = Derivations::new();
/// ledger.record(DerivedWord::new("كاتب", "كتب", "فاعل"));
/// let recorded = ledger.record(DerivedWord::new("كاتب", "كتب", "فاعل"));
///
/// assert_eq!(recorded.frequency(), 1);
/// assert_eq!(ledger.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Derivations {
    words: SmallVec<[DerivedWord; LEDGER_INLINE_CAPACITY]>,
}

impl Derivations {
    /// Creates an empty ledger.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a generated word, returning the ledger entry it landed in.
    ///
    /// An equal word already in the ledger has its frequency bumped; a new
    /// word is appended with its frequency untouched.
    pub fn record(&mut self, word: DerivedWord) -> &DerivedWord {
        if let Some(position) = self.words.iter().position(|existing| *existing == word) {
            self.words[position].increment_frequency();
            &self.words[position]
        } else {
            self.words.push(word);
            &self.words[self.words.len() - 1]
        }
    }

    /// Returns the recorded words as a slice.
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[DerivedWord] {
        &self.words
    }

    /// Returns the number of distinct recorded words.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns an iterator over the recorded words.
    pub fn iter(&self) -> std::slice::Iter<'_, DerivedWord> {
        self.words.iter()
    }
}

impl<'a> IntoIterator for &'a Derivations {
    type Item = &'a DerivedWord;
    type IntoIter = std::slice::Iter<'a, DerivedWord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn active_participle() -> DerivedWord {
        DerivedWord::new("كاتب", "كتب", "فاعل")
    }

    #[rstest]
    fn new_word_starts_at_frequency_zero() {
        let word = active_participle();
        assert_eq!(word.frequency(), 0);
        assert_eq!(word.to_string(), "كاتب");
    }

    #[rstest]
    fn equality_is_by_surface_word() {
        let from_generation = active_participle();
        let from_elsewhere = DerivedWord::new("كاتب", "درس", "مفعول");
        assert_eq!(from_generation, from_elsewhere);
        assert_ne!(from_generation, DerivedWord::new("مكتوب", "كتب", "مفعول"));
    }

    #[rstest]
    fn record_appends_distinct_words_in_order() {
        let mut ledger = Derivations::new();
        ledger.record(active_participle());
        ledger.record(DerivedWord::new("مكتوب", "كتب", "مفعول"));

        assert_eq!(ledger.len(), 2);
        let words: Vec<&str> = ledger.iter().map(DerivedWord::word).collect();
        assert_eq!(words, vec!["كاتب", "مكتوب"]);
    }

    #[rstest]
    fn record_bumps_frequency_of_equal_words() {
        let mut ledger = Derivations::new();
        ledger.record(active_participle());
        ledger.record(active_participle());
        let third = ledger.record(active_participle()).clone();

        assert_eq!(ledger.len(), 1);
        assert_eq!(third.frequency(), 2);
        assert_eq!(ledger.words()[0].frequency(), 2);
    }

    #[rstest]
    fn empty_ledger_reports_empty() {
        let ledger = Derivations::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.len(), 0);
        assert!(ledger.words().is_empty());
    }

    #[rstest]
    fn ledger_iterates_by_reference() {
        let mut ledger = Derivations::new();
        ledger.record(active_participle());
        let mut seen = 0;
        for word in &ledger {
            assert_eq!(word.word(), "كاتب");
            seen += 1;
        }
        assert_eq!(seen, 1);
    }
}
