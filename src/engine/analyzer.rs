//! Decomposition and validation of surface words.

use crate::lexicon::{PatternStore, RootStore};
use crate::morphology::{is_arabic_letter, Pattern, Root, ValidationResult};

/// Returns `true` when the text would pass [`Root::new`]'s checks, without
/// constructing a root: trimmed, exactly three characters, all inside the
/// Arabic block.
///
/// # Examples
///
/// ```rust
/// use sarf::engine::is_valid_root_format;
///
/// assert!(is_valid_root_format(" كتب "));
/// assert!(!is_valid_root_format("كتابة"));
/// assert!(!is_valid_root_format("abc"));
/// ```
#[must_use]
pub fn is_valid_root_format(text: &str) -> bool {
    let trimmed = text.trim();
    trimmed.chars().count() == 3 && trimmed.chars().all(is_arabic_letter)
}

// =============================================================================
// Decomposition
// =============================================================================

/// A word broken into the root and pattern that produce it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decomposition {
    root_letters: String,
    pattern_id: String,
    word: String,
}

impl Decomposition {
    /// Returns the letters of the root.
    #[must_use]
    pub fn root_letters(&self) -> &str {
        &self.root_letters
    }

    /// Returns the id of the pattern.
    #[must_use]
    pub fn pattern_id(&self) -> &str {
        &self.pattern_id
    }

    /// Returns the decomposed word itself.
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }
}

// =============================================================================
// Analyzer Definition
// =============================================================================

/// A borrowing view over the two lexicons answering inverse-morphology
/// questions.
///
/// The analyzer never mutates anything; it scans the stored roots and
/// patterns. There is no inverse of pattern application, so decomposition
/// is a brute-force scan and the first match wins (roots in ascending
/// order, patterns in bucket order).
///
/// # Examples
///
/// ```rust
/// use sarf::engine::Analyzer;
/// use sarf::lexicon::{PatternStore, RootStore};
/// use sarf::morphology::Root;
///
/// let mut roots = RootStore::new();
/// roots.insert(Root::new("كتب").unwrap());
/// let mut patterns = PatternStore::new();
/// patterns.seed_defaults();
///
/// let analyzer = Analyzer::new(&roots, &patterns);
/// let result = analyzer.validate_word("كاتب", "كتب");
/// assert!(result.is_valid());
/// assert_eq!(result.pattern_id(), Some("فاعل"));
/// ```
pub struct Analyzer<'a> {
    roots: &'a RootStore,
    patterns: &'a PatternStore,
}

impl<'a> Analyzer<'a> {
    /// Creates an analyzer over the given lexicons.
    #[must_use]
    pub const fn new(roots: &'a RootStore, patterns: &'a PatternStore) -> Self {
        Self { roots, patterns }
    }

    /// Finds a stored pattern that maps the given root to the word.
    #[must_use]
    pub fn find_matching_pattern(&self, word: &str, root: &Root) -> Option<&'a Pattern> {
        self.patterns
            .iter()
            .find(|pattern| pattern.apply_to_root(root) == word)
    }

    /// Finds the first stored root × pattern pair that produces the word.
    #[must_use]
    pub fn decompose(&self, word: &str) -> Option<Decomposition> {
        for root in self.roots.iter() {
            if let Some(pattern) = self.find_matching_pattern(word, root) {
                return Some(Decomposition {
                    root_letters: root.letters().to_string(),
                    pattern_id: pattern.id().to_string(),
                    word: word.to_string(),
                });
            }
        }
        None
    }

    /// Checks whether the word derives from the given root.
    ///
    /// The explanation walks through the checks in order: the root text
    /// must be well-formed, the root must be stored, at least one pattern
    /// must be loaded, and one of them must map the root to the word.
    #[must_use]
    pub fn validate_word(&self, word: &str, root_text: &str) -> ValidationResult {
        if !is_valid_root_format(root_text) {
            return ValidationResult::failure(
                "صيغة الجذر غير صحيحة: يجب أن يتكون من 3 أحرف عربية",
            );
        }

        let letters = root_text.trim();
        let Some(root) = self.roots.find(letters) else {
            return ValidationResult::failure(format!("الجذر غير موجود في القاموس: {letters}"));
        };

        if self.patterns.is_empty() {
            return ValidationResult::failure("لا توجد أوزان محملة في النظام");
        }

        self.find_matching_pattern(word, root).map_or_else(
            || {
                ValidationResult::failure(format!(
                    "الكلمة لا تطابق أي وزن معروف للجذر {letters}"
                ))
            },
            |pattern| {
                ValidationResult::success(
                    letters,
                    pattern.id(),
                    format!(
                        "الكلمة {word} مشتقة من الجذر {letters} على وزن {}",
                        pattern.id()
                    ),
                )
            },
        )
    }

    /// Identifies which stored root and pattern a word derives from.
    #[must_use]
    pub fn identify_word(&self, word: &str) -> ValidationResult {
        self.decompose(word).map_or_else(
            || ValidationResult::failure(format!("تعذر التعرف على الكلمة: {word}")),
            |decomposition| {
                ValidationResult::success(
                    decomposition.root_letters(),
                    decomposition.pattern_id(),
                    format!(
                        "تم التعرف على الكلمة: الجذر {}، الوزن {}",
                        decomposition.root_letters(),
                        decomposition.pattern_id()
                    ),
                )
            },
        )
    }
}

// =============================================================================
// Tests
// =============================================================================
