//! # TST-Dict: Ternary Search Tree Dictionary
//!
//! An in-memory autocomplete dictionary built on a ternary search tree, with
//! per-word payload entries and paired reverse lookup.
//!
//! ## Operations
//!
//! 1. **Insert** - add one (unique id, description) entry for a word
//! 2. **Search** - prefix autocomplete in lexicographic order, capped
//! 3. **Delete** - retract one entry; the tree compacts itself structurally
//! 4. **Pair lookup** - merge hits from a second, reverse-keyed dictionary
//!
//! ## Example Usage
//!
//! ```
//! use tst_dict::TernaryDict;
//!
//! let mut dict = TernaryDict::new();
//! dict.insert("cat", "n1", "small domestic feline")?;
//! dict.insert("car", "n2", "road vehicle")?;
//! dict.insert("carp", "n3", "freshwater fish")?;
//!
//! // completions of "ca", lexicographic: car, carp, cat
//! let hits = dict.search("ca");
//! assert_eq!(hits.len(), 3);
//! assert_eq!(hits[0].word, "car");
//!
//! // retracting the only entry of "car" removes the word
//! dict.delete_word("car", "n2")?;
//! assert!(!dict.contains("car"));
//! assert!(dict.contains("carp"));
//! # Ok::<(), tst_dict::DictionaryError>(())
//! ```
//!
//! ## Architecture
//!
//! - **Node** - one character, three exclusively-owned child links, payloads
//! - **TernaryDict** - insertion, autocomplete traversal, deletion/compaction
//! - **Pair Merge** - cross-dictionary reverse lookup layered on search
//!
//! Single-threaded by design; wrap in external synchronization to share.

mod node;
mod pair;
#[cfg(test)]
mod proptests;
pub mod tree;
pub mod types;

// Re-export main types for convenience
pub use tree::{TernaryDict, MAX_DELETE_DEPTH};
pub use types::{DictionaryError, SearchResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
