//! Hand-rolled index containers.
//!
//! This module provides the two containers the dictionary is built on:
//!
//! - [`AvlTree`]: an ordered set backed by a self-balancing (AVL) binary
//!   search tree with exclusive-ownership nodes
//! - [`ChainedHashMap`]: a hash map backed by a bucket array of singly
//!   linked chains, whose bucket index is a rolling hash over the key's
//!   textual form
//!
//! Both containers keep their element count in a field, so `len` is O(1),
//! and both support lookups through borrowed key forms (`Borrow<Q>`), so a
//! tree of owned values answers queries against `&str` probes.
//!
//! # Examples
//!
//! ## `AvlTree`
//!
//! ```rust
//! use sarf::index::AvlTree;
//!
//! let mut tree = AvlTree::new();
//! tree.insert("كتب".to_string());
//! tree.insert("درس".to_string());
//! tree.insert("علم".to_string());
//!
//! // Values come back in code-point order, regardless of insertion order
//! let sorted: Vec<&str> = tree.iter().map(String::as_str).collect();
//! assert_eq!(sorted, ["درس", "علم", "كتب"]);
//!
//! // Borrowed lookups need no owned probe
//! assert!(tree.contains("كتب"));
//! assert!(tree.height() <= 2);
//! ```
//!
//! ## `ChainedHashMap`
//!
//! ```rust
//! use sarf::index::ChainedHashMap;
//!
//! let mut map = ChainedHashMap::new();
//! map.insert("فاعل".to_string(), 1);
//! map.insert("مفعول".to_string(), 2);
//!
//! assert_eq!(map.get("فاعل"), Some(&1));
//! assert_eq!(map.capacity(), 16);
//!
//! // Replacing a value returns the displaced one and never grows the table
//! assert_eq!(map.insert("فاعل".to_string(), 10), Some(1));
//! assert_eq!(map.len(), 2);
//! ```

mod avl;
mod chain_map;
mod hash;

pub use avl::AvlTree;
pub use avl::AvlTreeIntoIterator;
pub use avl::AvlTreeIterator;
pub use chain_map::ChainedHashMap;
pub use chain_map::ChainedHashMapIntoIterator;
pub use chain_map::ChainedHashMapIterator;
pub use chain_map::Keys;
pub use chain_map::Values;
pub use hash::TextFold;
pub use hash::fold_text;
