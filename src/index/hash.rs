//! Rolling hash over a key's textual form.
//!
//! This module provides [`fold_text`], the bucket-index function used by
//! [`ChainedHashMap`](crate::index::ChainedHashMap). The hash folds the
//! key's `Display` output one character at a time with a multiply-and-add
//! step, reducing modulo the table capacity at every step:
//!
//! ```text
//! state = 0
//! for each character c:
//!     state = (state * 31 + c) % capacity
//! ```
//!
//! Because the state is reduced at every step it never leaves
//! `0..capacity`, so the returned value is directly usable as a bucket
//! index. Empty text folds to 0.
//!
//! Character codes are Unicode scalar values. The folding happens through
//! a [`fmt::Write`] adapter ([`TextFold`]), so hashing a key allocates
//! nothing regardless of how its `Display` implementation is written.
//!
//! # Examples
//!
//! ```rust
//! use sarf::index::fold_text;
//!
//! // Deterministic and always in range
//! let index = fold_text("فاعل", 16);
//! assert!(index < 16);
//! assert_eq!(index, fold_text("فاعل", 16));
//!
//! // Any Display type hashes through its textual form
//! assert_eq!(fold_text(&42, 101), fold_text("42", 101));
//! ```

use std::fmt::{self, Write};

use static_assertions::const_assert;

// =============================================================================
// Constants
// =============================================================================

/// Multiplier for the rolling hash step.
const HASH_PRIME: u64 = 31;

// A multiplier of 0 or 1 would collapse the fold to the last or the sum of
// the character codes.
const_assert!(HASH_PRIME > 1);

// =============================================================================
// TextFold
// =============================================================================

/// A [`fmt::Write`] sink that folds written characters into a rolling hash.
///
/// Every character written through this adapter advances the hash state by
/// one multiply-and-add step, reduced modulo the table capacity. Writing the
/// same text always produces the same state.
///
/// # Examples
///
/// ```rust
/// use std::fmt::Write;
/// use sarf::index::TextFold;
///
/// let mut fold = TextFold::new(101);
/// write!(fold, "{}", "كتب").unwrap();
/// assert!(fold.finish() < 101);
/// ```
#[derive(Debug, Clone)]
pub struct TextFold {
    state: u64,
    modulus: u64,
}

impl TextFold {
    /// Creates a fold that reduces modulo `modulus` at every step.
    ///
    /// # Panics
    ///
    /// Panics when `modulus` is 0; a hash table never has zero buckets.
    #[inline]
    #[must_use]
    pub fn new(modulus: usize) -> Self {
        assert!(modulus > 0, "hash modulus must be non-zero");
        Self {
            state: 0,
            modulus: modulus as u64,
        }
    }

    /// Advances the state by one character.
    #[inline]
    fn push(&mut self, character: char) {
        let folded = u128::from(self.state) * u128::from(HASH_PRIME)
            + u128::from(u32::from(character));
        // The remainder is below the modulus, which itself fits in u64.
        self.state = (folded % u128::from(self.modulus)) as u64;
    }

    /// Consumes the fold and returns the final state, always `< modulus`.
    #[inline]
    #[must_use]
    pub fn finish(self) -> usize {
        self.state as usize
    }
}

impl Write for TextFold {
    #[inline]
    fn write_str(&mut self, text: &str) -> fmt::Result {
        for character in text.chars() {
            self.push(character);
        }
        Ok(())
    }

    #[inline]
    fn write_char(&mut self, character: char) -> fmt::Result {
        self.push(character);
        Ok(())
    }
}

// =============================================================================
// fold_text
// =============================================================================

/// Folds a value's `Display` output into a bucket index below `modulus`.
///
/// Empty text folds to 0. The same text always folds to the same index for
/// a given modulus.
///
/// # Panics
///
/// Panics when `modulus` is 0.
///
/// # Examples
///
/// ```rust
/// use sarf::index::fold_text;
///
/// assert_eq!(fold_text("", 16), 0);
/// assert!(fold_text("مفعول", 16) < 16);
/// ```
#[must_use]
pub fn fold_text<T>(text: &T, modulus: usize) -> usize
where
    T: fmt::Display + ?Sized,
{
    let mut fold = TextFold::new(modulus);
    // TextFold::write_str never reports an error, so this write cannot fail.
    let _ = write!(fold, "{text}");
    fold.finish()
}

// =============================================================================
// Tests
// =============================================================================
