//! Errors produced while constructing morphological value objects.

use std::fmt;

// =============================================================================
// InvalidRootReason
// =============================================================================

/// Why a piece of text was rejected as a triliteral root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidRootReason {
    /// The text was empty after trimming.
    Empty,
    /// The text did not contain exactly three characters; carries the
    /// actual character count.
    WrongLength(usize),
    /// A character fell outside the Arabic Unicode block (U+0600..=U+06FF);
    /// carries the first offending character.
    NonArabicLetter(char),
}

impl fmt::Display for InvalidRootReason {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => {
                write!(formatter, "the text is empty")
            }
            Self::WrongLength(count) => {
                write!(
                    formatter,
                    "the text has {count} characters, a triliteral root has exactly 3"
                )
            }
            Self::NonArabicLetter(character) => {
                write!(
                    formatter,
                    "'{character}' is not a letter in the Arabic Unicode block"
                )
            }
        }
    }
}

// =============================================================================
// MorphologyError
// =============================================================================

/// An error raised by a morphological value object constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MorphologyError {
    /// The supplied text cannot form a triliteral root.
    InvalidRoot {
        /// The rejected text, as supplied (untrimmed).
        text: String,
        /// What made the text invalid.
        reason: InvalidRootReason,
    },
}

impl fmt::Display for MorphologyError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRoot { text, reason } => {
                write!(formatter, "invalid root «{text}»: {reason}")
            }
        }
    }
}

impl std::error::Error for MorphologyError {}

// =============================================================================
// Tests
// =============================================================================
