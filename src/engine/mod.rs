//! Word generation, decomposition and validation.
//!
//! - [`Generator`] derives surface words and keeps the per-root derivation
//!   ledger in the chaining hash map
//! - [`Analyzer`] answers the inverse questions: does this word derive from
//!   that root, and which root/pattern pair produces it at all
//! - [`Statistics`] snapshots the dictionary for display
//!
//! # Examples
//!
//! ```rust
//! use sarf::engine::{Analyzer, Generator};
//! use sarf::lexicon::{PatternStore, RootStore};
//! use sarf::morphology::Root;
//!
//! let mut roots = RootStore::new();
//! roots.insert(Root::new("كتب").unwrap());
//! let mut patterns = PatternStore::new();
//! patterns.seed_defaults();
//!
//! let mut generator = Generator::new();
//! let root = roots.find("كتب").unwrap();
//! let pattern = patterns.find("فاعل").unwrap();
//! assert_eq!(generator.generate(root, pattern).word(), "كاتب");
//!
//! let analyzer = Analyzer::new(&roots, &patterns);
//! let identified = analyzer.identify_word("كاتب");
//! assert!(identified.is_valid());
//! assert_eq!(identified.root_letters(), Some("كتب"));
//! ```

mod analyzer;
mod generator;
mod stats;

pub use analyzer::{is_valid_root_format, Analyzer, Decomposition};
pub use generator::Generator;
pub use stats::Statistics;
