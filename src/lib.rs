//! # sarf
//!
//! An Arabic morphological dictionary built on two hand-rolled containers:
//! a self-balancing ordered index for triliteral roots and a
//! separate-chaining hash map for derivation patterns.
//!
//! ## Overview
//!
//! Arabic derivational morphology combines a root of three radical letters
//! (e.g. «كتب», *to write*) with a pattern (وزن) such as «فاعل» to produce a
//! surface word («كاتب», *writer*). This crate provides:
//!
//! - **Containers**: [`AvlTree`], an AVL-balanced ordered set, and
//!   [`ChainedHashMap`], a bucket-and-chain hash table whose bucket index is
//!   a rolling hash over the key's textual form
//! - **Morphology**: [`Root`], [`Pattern`], [`DerivedWord`] value objects and
//!   pattern application
//! - **Lexicon**: stores over the containers plus plain-text file loading
//! - **Engine**: word generation with a derivation ledger, decomposition,
//!   and validation
//!
//! ## Example
//!
//! ```rust
//! use sarf::prelude::*;
//!
//! let mut roots = RootStore::new();
//! roots.insert(Root::new("كتب").unwrap());
//!
//! let mut patterns = PatternStore::new();
//! patterns.seed_defaults();
//!
//! let active = patterns.find("فاعل").unwrap();
//! let root = roots.find("كتب").unwrap();
//! assert_eq!(active.apply_to_root(root), "كاتب");
//! ```
//!
//! [`AvlTree`]: index::AvlTree
//! [`ChainedHashMap`]: index::ChainedHashMap
//! [`Root`]: morphology::Root
//! [`Pattern`]: morphology::Pattern
//! [`DerivedWord`]: morphology::DerivedWord

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types.
///
/// # Usage
///
/// ```rust
/// use sarf::prelude::*;
/// ```
pub mod prelude {
    pub use crate::engine::{Analyzer, Generator};
    pub use crate::index::{AvlTree, ChainedHashMap};
    pub use crate::lexicon::{PatternStore, RootStore};
    pub use crate::morphology::{DerivedWord, Pattern, Root, ValidationResult};
}

#[cfg(feature = "cli")]
pub mod cli;
pub mod engine;
pub mod index;
pub mod lexicon;
pub mod morphology;

#[cfg(test)]
mod tests {
    #[test]
    fn library_compiles() {
        // Basic smoke test to ensure the library compiles
        assert!(true);
    }
}
