//! Derivation patterns (أوزان) and placeholder substitution.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::morphology::root::Root;

// =============================================================================
// Pattern Definition
// =============================================================================

/// A derivation template whose placeholders map to a root's radicals.
///
/// The structure text is copied character by character; the placeholders
/// [ف](Self::FA), [ع](Self::AIN) and [ل](Self::LAM) are replaced by the
/// root's first, second and third radical, every other character passes
/// through verbatim. Substitution is 1:1, so the derived word has exactly
/// as many characters as the structure.
///
/// Patterns are identified by their `id`: equality and hashing ignore the
/// other fields.
///
/// # Examples
///
/// ```rust
/// use sarf::morphology::{Pattern, Root};
///
/// let root = Root::new("كتب").unwrap();
///
/// let active = Pattern::new("فاعل", "فاعل");
/// assert_eq!(active.apply_to_root(&root), "كاتب");
///
/// let passive = Pattern::new("مفعول", "مفعول");
/// assert_eq!(passive.apply_to_root(&root), "مكتوب");
/// ```
#[derive(Debug, Clone)]
pub struct Pattern {
    id: String,
    structure: String,
    description: String,
    category: String,
}

impl Pattern {
    /// Placeholder for the first radical.
    pub const FA: char = 'ف';

    /// Placeholder for the second radical.
    pub const AIN: char = 'ع';

    /// Placeholder for the third radical.
    pub const LAM: char = 'ل';

    /// Category assigned when none is given.
    pub const DEFAULT_CATEGORY: &'static str = "general";

    /// Creates a pattern with an empty description and the default
    /// category.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sarf::morphology::Pattern;
    ///
    /// let pattern = Pattern::new("فاعل", "فاعل");
    /// assert_eq!(pattern.id(), "فاعل");
    /// assert_eq!(pattern.description(), "");
    /// assert_eq!(pattern.category(), "general");
    /// ```
    pub fn new(id: impl Into<String>, structure: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            structure: structure.into(),
            description: String::new(),
            category: Self::DEFAULT_CATEGORY.to_string(),
        }
    }

    /// Replaces the description, builder style.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sarf::morphology::Pattern;
    ///
    /// let pattern = Pattern::new("فاعل", "فاعل").with_description("اسم الفاعل");
    /// assert_eq!(pattern.description(), "اسم الفاعل");
    /// ```
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Replaces the category, builder style.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sarf::morphology::Pattern;
    ///
    /// let pattern = Pattern::new("فاعل", "فاعل").with_category("اسم");
    /// assert_eq!(pattern.category(), "اسم");
    /// ```
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Returns the identifier, conventionally the pattern's own name
    /// (e.g. «فاعل»).
    #[inline]
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the template text the placeholders live in.
    #[inline]
    #[must_use]
    pub fn structure(&self) -> &str {
        &self.structure
    }

    /// Returns the human-readable description.
    #[inline]
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the grammatical category.
    #[inline]
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Overwrites the template text.
    pub fn set_structure(&mut self, structure: impl Into<String>) {
        self.structure = structure.into();
    }

    /// Overwrites the description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Overwrites the category.
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    /// Derives a surface word by substituting the root's radicals into the
    /// structure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sarf::morphology::{Pattern, Root};
    ///
    /// let root = Root::new("درس").unwrap();
    /// let pattern = Pattern::new("مفعول", "مفعول");
    /// assert_eq!(pattern.apply_to_root(&root), "مدروس");
    /// ```
    #[must_use]
    pub fn apply_to_root(&self, root: &Root) -> String {
        let mut word = String::with_capacity(self.structure.len());
        for character in self.structure.chars() {
            word.push(match character {
                Self::FA => root.first(),
                Self::AIN => root.second(),
                Self::LAM => root.third(),
                other => other,
            });
        }
        word
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Pattern {}

impl Hash for Pattern {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{} ({})", self.id, self.category)
    }
}

// =============================================================================
// Tests
// =============================================================================
