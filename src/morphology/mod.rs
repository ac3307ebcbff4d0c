//! Morphological value objects: roots, patterns, derived words.
//!
//! Arabic derivational morphology builds words by interleaving the three
//! radical letters of a root (e.g. «كتب») into a pattern (وزن) whose
//! placeholders ف, ع and ل stand for the first, second and third radical.
//! This module provides the value objects of that process:
//!
//! - [`Root`] - a validated triliteral root
//! - [`Pattern`] - a derivation template with placeholder substitution
//! - [`DerivedWord`] and [`Derivations`] - generated words and the per-root
//!   ledger they accumulate in
//! - [`ValidationResult`] - the outcome of checking a word against the
//!   dictionary
//! - [`MorphologyError`] - why a piece of text was rejected
//!
//! # Examples
//!
//! ```rust
//! use sarf::morphology::{Pattern, Root};
//!
//! let root = Root::new("كتب").unwrap();
//! let pattern = Pattern::new("فاعل", "فاعل");
//!
//! assert_eq!(pattern.apply_to_root(&root), "كاتب");
//! ```

mod error;
mod pattern;
mod root;
mod validation;
mod word;

pub use error::{InvalidRootReason, MorphologyError};
pub use pattern::Pattern;
pub use root::{is_arabic_letter, Root};
pub use validation::ValidationResult;
pub use word::{DerivedWord, Derivations};
