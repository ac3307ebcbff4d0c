//! Lexicon stores and plain-text file loading.
//!
//! The dictionary keeps its two lexicons in the hand-rolled containers:
//!
//! - [`RootStore`] - triliteral roots in the AVL-balanced ordered index,
//!   so listings come out in ascending letter order
//! - [`PatternStore`] - derivation patterns in the chaining hash map,
//!   keyed by pattern id
//! - [`load_roots`] / [`load_patterns`] - UTF-8 line formats from plain
//!   text files, reporting what was loaded and what was skipped
//!
//! # Examples
//!
//! ```rust
//! use sarf::lexicon::{PatternStore, RootStore};
//! use sarf::morphology::Root;
//!
//! let mut roots = RootStore::new();
//! roots.insert(Root::new("كتب").unwrap());
//! assert!(roots.contains("كتب"));
//!
//! let mut patterns = PatternStore::new();
//! assert_eq!(patterns.seed_defaults(), 8);
//! assert!(patterns.find("فاعل").is_some());
//! ```

mod error;
mod loader;
mod patterns;
mod roots;

pub use error::LexiconError;
pub use loader::{load_patterns, load_roots, LoadReport};
pub use patterns::PatternStore;
pub use roots::RootStore;
