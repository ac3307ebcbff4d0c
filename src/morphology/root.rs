//! Triliteral roots, the lexical core of Arabic morphology.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::morphology::error::{InvalidRootReason, MorphologyError};

/// Returns `true` when the character lies in the Arabic Unicode block
/// (U+0600..=U+06FF).
///
/// # Examples
///
/// ```rust
/// use sarf::morphology::is_arabic_letter;
///
/// assert!(is_arabic_letter('ك'));
/// assert!(!is_arabic_letter('k'));
/// ```
#[inline]
#[must_use]
pub const fn is_arabic_letter(character: char) -> bool {
    matches!(character, '\u{0600}'..='\u{06FF}')
}

// =============================================================================
// Root Definition
// =============================================================================

/// A validated triliteral root: exactly three Arabic radical letters.
///
/// Roots compare, hash and order by their letters, and borrow as `&str`, so
/// an ordered index of roots answers lookups against plain text without an
/// owned probe.
///
/// # Examples
///
/// ```rust
/// use sarf::morphology::Root;
///
/// let root = Root::new("كتب").unwrap();
/// assert_eq!(root.letters(), "كتب");
/// assert_eq!(root.first(), 'ك');
/// assert_eq!(root.second(), 'ت');
/// assert_eq!(root.third(), 'ب');
///
/// assert!(Root::new("كت").is_err());
/// assert!(Root::new("abc").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Root {
    /// The three radicals as text; always exactly three characters.
    letters: String,
    /// The same three radicals, split out for O(1) access.
    radicals: [char; 3],
}

impl Root {
    /// Parses a triliteral root from text.
    ///
    /// Surrounding whitespace is trimmed. The remaining text must consist
    /// of exactly three characters, each inside the Arabic Unicode block.
    ///
    /// # Errors
    ///
    /// Returns [`MorphologyError::InvalidRoot`] when the text is empty, has
    /// a character count other than three, or contains a character outside
    /// the Arabic block.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sarf::morphology::Root;
    ///
    /// assert!(Root::new("  درس  ").is_ok());
    /// assert!(Root::new("").is_err());
    /// assert!(Root::new("كتابة").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, MorphologyError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(MorphologyError::InvalidRoot {
                text: text.to_string(),
                reason: InvalidRootReason::Empty,
            });
        }

        let characters: Vec<char> = trimmed.chars().collect();
        if characters.len() != 3 {
            return Err(MorphologyError::InvalidRoot {
                text: text.to_string(),
                reason: InvalidRootReason::WrongLength(characters.len()),
            });
        }

        if let Some(&offender) = characters
            .iter()
            .find(|character| !is_arabic_letter(**character))
        {
            return Err(MorphologyError::InvalidRoot {
                text: text.to_string(),
                reason: InvalidRootReason::NonArabicLetter(offender),
            });
        }

        Ok(Self {
            letters: trimmed.to_string(),
            radicals: [characters[0], characters[1], characters[2]],
        })
    }

    /// Returns the three radicals as text.
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &str {
        &self.letters
    }

    /// Returns the first radical (substituted for ف in a pattern).
    #[inline]
    #[must_use]
    pub const fn first(&self) -> char {
        self.radicals[0]
    }

    /// Returns the second radical (substituted for ع in a pattern).
    #[inline]
    #[must_use]
    pub const fn second(&self) -> char {
        self.radicals[1]
    }

    /// Returns the third radical (substituted for ل in a pattern).
    #[inline]
    #[must_use]
    pub const fn third(&self) -> char {
        self.radicals[2]
    }

    /// Returns the radicals as an array.
    #[inline]
    #[must_use]
    pub const fn radicals(&self) -> [char; 3] {
        self.radicals
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

// Equality, ordering and hashing all go through the letters so they stay
// consistent with the `Borrow<str>` impl.

impl PartialEq for Root {
    fn eq(&self, other: &Self) -> bool {
        self.letters == other.letters
    }
}

impl Eq for Root {}

impl PartialOrd for Root {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Root {
    fn cmp(&self, other: &Self) -> Ordering {
        self.letters.cmp(&other.letters)
    }
}

impl Hash for Root {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.letters.hash(state);
    }
}

impl Borrow<str> for Root {
    fn borrow(&self) -> &str {
        &self.letters
    }
}

impl fmt::Display for Root {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.letters)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("كتب", ['ك', 'ت', 'ب'])]
    #[case("درس", ['د', 'ر', 'س'])]
    #[case("علم", ['ع', 'ل', 'م'])]
    fn new_accepts_triliteral_arabic_text(#[case] text: &str, #[case] radicals: [char; 3]) {
        let root = Root::new(text).unwrap();
        assert_eq!(root.letters(), text);
        assert_eq!(root.radicals(), radicals);
        assert_eq!(root.first(), radicals[0]);
        assert_eq!(root.second(), radicals[1]);
        assert_eq!(root.third(), radicals[2]);
    }

    #[rstest]
    fn new_trims_surrounding_whitespace() {
        let root = Root::new("  كتب\t").unwrap();
        assert_eq!(root.letters(), "كتب");
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn new_rejects_empty_text(#[case] text: &str) {
        let error = Root::new(text).unwrap_err();
        assert_eq!(
            error,
            MorphologyError::InvalidRoot {
                text: text.to_string(),
                reason: InvalidRootReason::Empty,
            }
        );
    }

    #[rstest]
    #[case("كت", 2)]
    #[case("كتبت", 4)]
    #[case("كتابة", 5)]
    fn new_rejects_wrong_character_counts(#[case] text: &str, #[case] count: usize) {
        let error = Root::new(text).unwrap_err();
        assert_eq!(
            error,
            MorphologyError::InvalidRoot {
                text: text.to_string(),
                reason: InvalidRootReason::WrongLength(count),
            }
        );
    }

    #[rstest]
    #[case("abc", 'a')]
    #[case("كtب", 't')]
    #[case("ك1ب", '1')]
    fn new_rejects_characters_outside_the_arabic_block(
        #[case] text: &str,
        #[case] offender: char,
    ) {
        let error = Root::new(text).unwrap_err();
        assert_eq!(
            error,
            MorphologyError::InvalidRoot {
                text: text.to_string(),
                reason: InvalidRootReason::NonArabicLetter(offender),
            }
        );
    }

    #[rstest]
    fn roots_order_by_their_letters() {
        let mut roots = vec![
            Root::new("كتب").unwrap(),
            Root::new("درس").unwrap(),
            Root::new("علم").unwrap(),
        ];
        roots.sort();
        let letters: Vec<&str> = roots.iter().map(Root::letters).collect();
        assert_eq!(letters, vec!["درس", "علم", "كتب"]);
    }

    #[rstest]
    fn borrowed_form_agrees_with_equality_and_order() {
        let root = Root::new("كتب").unwrap();
        let borrowed: &str = root.borrow();
        assert_eq!(borrowed, "كتب");
        assert_eq!(root, Root::new("كتب").unwrap());
        assert_ne!(root, Root::new("درس").unwrap());
    }

    #[rstest]
    fn display_prints_the_letters() {
        let root = Root::new("درس").unwrap();
        assert_eq!(root.to_string(), "درس");
    }

    #[rstest]
    fn arabic_block_boundaries() {
        assert!(is_arabic_letter('\u{0600}'));
        assert!(is_arabic_letter('\u{06FF}'));
        assert!(!is_arabic_letter('\u{05FF}'));
        assert!(!is_arabic_letter('\u{0700}'));
    }
}
