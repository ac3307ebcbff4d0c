//! Outcome of checking a word against the dictionary.

use std::fmt;

// =============================================================================
// ValidationResult Definition
// =============================================================================

/// The outcome of validating or identifying a word.
///
/// A successful result names the root and pattern the word decomposes into;
/// a failure carries only the explanation. Explanations are the Arabic
/// sentences shown to the user.
///
/// # Examples
///
/// ```rust
/// use sarf::morphology::ValidationResult;
///
/// let success = ValidationResult::success("كتب", "فاعل", "الكلمة مشتقة");
/// assert!(success.is_valid());
/// assert_eq!(success.root_letters(), Some("كتب"));
/// assert_eq!(success.to_string(), "✓ الكلمة مشتقة");
///
/// let failure = ValidationResult::failure("الجذر غير موجود");
/// assert!(!failure.is_valid());
/// assert_eq!(failure.pattern_id(), None);
/// assert_eq!(failure.to_string(), "✗ الجذر غير موجود");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    valid: bool,
    root_letters: Option<String>,
    pattern_id: Option<String>,
    explanation: String,
}

impl ValidationResult {
    /// Creates a successful result naming the root and pattern.
    pub fn success(
        root_letters: impl Into<String>,
        pattern_id: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            valid: true,
            root_letters: Some(root_letters.into()),
            pattern_id: Some(pattern_id.into()),
            explanation: explanation.into(),
        }
    }

    /// Creates a failed result carrying only the explanation.
    pub fn failure(explanation: impl Into<String>) -> Self {
        Self {
            valid: false,
            root_letters: None,
            pattern_id: None,
            explanation: explanation.into(),
        }
    }

    /// Returns `true` when the word checked out.
    #[inline]
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// Returns the root letters on success.
    #[must_use]
    pub fn root_letters(&self) -> Option<&str> {
        self.root_letters.as_deref()
    }

    /// Returns the matching pattern id on success.
    #[must_use]
    pub fn pattern_id(&self) -> Option<&str> {
        self.pattern_id.as_deref()
    }

    /// Returns the explanation shown to the user.
    #[inline]
    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.valid { '✓' } else { '✗' };
        write!(formatter, "{mark} {}", self.explanation)
    }
}

// =============================================================================
// Tests
// =============================================================================
