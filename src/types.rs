// TST-Dict Type Definitions
// Result records and error types for dictionary operations

use thiserror::Error;

/// A single autocomplete hit: one stored word together with one of its
/// payload entries.
///
/// A word that carries several payload entries produces one `SearchResult`
/// per entry, in payload insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The matched word (the full key, prefix included)
    pub word: String,

    /// Unique id of the payload entry
    pub unique_id: String,

    /// Description attached to the payload entry
    pub description: String,
}

impl SearchResult {
    /// Create a new search result
    pub fn new(word: &str, unique_id: &str, description: &str) -> Self {
        Self {
            word: word.to_string(),
            unique_id: unique_id.to_string(),
            description: description.to_string(),
        }
    }

    /// Swap the `word` and `description` fields, keeping the id.
    ///
    /// Pair-dictionary hits are reported through this swap: the pair tree is
    /// keyed the opposite way around, so its stored description is the word
    /// the caller actually asked about.
    pub fn swapped(self) -> Self {
        Self {
            word: self.description,
            unique_id: self.unique_id,
            description: self.word,
        }
    }
}

/// Dictionary operation errors
#[derive(Debug, Clone, Error)]
pub enum DictionaryError {
    #[error("empty word: dictionary keys must contain at least one character")]
    EmptyWord,

    #[error("delete path exceeded the maximum supported depth of {limit}")]
    DepthLimitExceeded { limit: usize },
}
