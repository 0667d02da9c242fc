// TST-Dict Tree
// The ternary search tree itself: insertion, autocomplete traversal,
// deletion with structural compaction, and pair-dictionary wiring

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use rustc_hash::FxHashMap;

use crate::node::{Node, Payload};
use crate::pair::merge_pair_results;
use crate::types::{DictionaryError, SearchResult};

/// Maximum number of nodes a single `delete_word` call may visit along its
/// path. The guard converts stack exhaustion on pathological inputs (very
/// long words, degenerate sibling chains) into a catchable error; the check
/// fires during descent, before any node has been touched, so the tree is
/// left exactly as it was.
pub const MAX_DELETE_DEPTH: usize = 2048;

/// An in-memory ternary search tree dictionary.
///
/// Stores variable-length character keys ("words"); each word carries one or
/// more payload entries of (unique id, description). Supports exact lookup,
/// prefix autocomplete with a result cap, per-entry deletion with structural
/// compaction, and federation with a paired reverse-lookup dictionary.
///
/// Sibling characters are ordered by raw scalar value; no collation or
/// normalization is applied. Single-threaded: share behind external
/// synchronization if needed.
///
/// # Example
/// ```
/// use tst_dict::TernaryDict;
///
/// let mut dict = TernaryDict::new();
/// dict.insert("car", "n1", "road vehicle")?;
/// dict.insert("cat", "n2", "small domestic feline")?;
///
/// let hits = dict.search("ca");
/// assert_eq!(hits[0].word, "car");
/// assert_eq!(hits[1].word, "cat");
/// # Ok::<(), tst_dict::DictionaryError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TernaryDict {
    root: Option<Box<Node>>,
    pair: Option<Weak<RefCell<TernaryDict>>>,
}

impl TernaryDict {
    /// Default cap on the number of autocomplete results.
    pub const DEFAULT_AUTOCOMPLETE_LIMIT: usize = 20;

    /// Create an empty dictionary with no pair dictionary.
    pub fn new() -> Self {
        Self {
            root: None,
            pair: None,
        }
    }

    /// Insert one payload entry for `word`.
    ///
    /// Walks character by character from the root, creating exactly the
    /// missing suffix of nodes, then marks the final node terminal and
    /// appends the (unique id, description) entry. Inserting the same id
    /// twice stores two entries; nothing is deduplicated here.
    ///
    /// # Errors
    /// `DictionaryError::EmptyWord` if `word` has no characters.
    pub fn insert(
        &mut self,
        word: &str,
        unique_id: &str,
        description: &str,
    ) -> Result<(), DictionaryError> {
        let chars: Vec<char> = word.chars().collect();
        if chars.is_empty() {
            return Err(DictionaryError::EmptyWord);
        }

        let mut link = &mut self.root;
        let mut index = 0;
        loop {
            let node = link.get_or_insert_with(|| Box::new(Node::new(chars[index])));
            let ch = chars[index];
            if ch < node.character {
                link = &mut node.smaller;
            } else if ch > node.character {
                link = &mut node.larger;
            } else {
                index += 1;
                if index == chars.len() {
                    node.terminal = true;
                    node.payloads.push(Payload::new(unique_id, description));
                    return Ok(());
                }
                link = &mut node.equal;
            }
        }
    }

    /// Exact membership test: `true` iff `word` is currently stored as a
    /// complete word (not merely as a prefix of other words).
    pub fn contains(&self, word: &str) -> bool {
        let chars: Vec<char> = word.chars().collect();
        self.find_node(&chars).is_some_and(|node| node.terminal)
    }

    /// Autocomplete search with the default result cap.
    ///
    /// See [`TernaryDict::search_limit`].
    pub fn search(&self, word: &str) -> Vec<SearchResult> {
        self.search_limit(word, Self::DEFAULT_AUTOCOMPLETE_LIMIT)
    }

    /// Autocomplete search: every stored completion of `word`, in
    /// lexicographic order, capped at roughly `limit` records.
    ///
    /// `word` itself comes first when it is a stored word. The cap is soft:
    /// it is checked on subtree entry, so a node that has been entered emits
    /// all of its payload entries even if the cap was reached inside its
    /// smaller sibling subtree. An unknown prefix produces an empty result,
    /// never an error; so does an empty `word`.
    ///
    /// When a pair dictionary is set, its hits for the same query are merged
    /// in with word and description swapped, ahead of the primary hits.
    pub fn search_limit(&self, word: &str, limit: usize) -> Vec<SearchResult> {
        let chars: Vec<char> = word.chars().collect();
        let mut results = Vec::new();

        if let Some(node) = self.find_node(&chars) {
            // the search phrase itself, ahead of its completions
            if node.terminal {
                node.append_results(word, &mut results);
            }
            traverse_subtree(node.equal.as_deref(), word, limit, &mut results);
        }

        if let Some(pair) = self.pair.as_ref().and_then(Weak::upgrade) {
            merge_pair_results(&pair.borrow(), word, limit, &mut results);
        }

        results
    }

    /// List every stored word with the default result cap.
    ///
    /// See [`TernaryDict::list_entire_dictionary_limit`].
    pub fn list_entire_dictionary(&self) -> Vec<SearchResult> {
        self.list_entire_dictionary_limit(Self::DEFAULT_AUTOCOMPLETE_LIMIT)
    }

    /// List every stored word in lexicographic order, capped at `limit`.
    ///
    /// This is a full traversal with no shortcut and will be expensive on
    /// large dictionaries. The pair dictionary is never consulted here.
    pub fn list_entire_dictionary_limit(&self, limit: usize) -> Vec<SearchResult> {
        let mut results = Vec::new();
        traverse_subtree(self.root.as_deref(), "", limit, &mut results);
        results
    }

    /// Remove the payload entry `unique_id` from `word`, compacting the tree
    /// structurally where the removal leaves nodes with nothing to do.
    ///
    /// No-op when the word's path does not exist, and a silent no-op at the
    /// terminal node when the id is not attached there. A word whose node
    /// still serves other words keeps the node but loses its terminal
    /// marking once the id is removed, even if other entries remain attached
    /// (preserved legacy behavior).
    ///
    /// # Errors
    /// `DictionaryError::EmptyWord` for an empty `word`;
    /// `DictionaryError::DepthLimitExceeded` when the path would require
    /// visiting more than [`MAX_DELETE_DEPTH`] nodes, in which case the tree
    /// is untouched.
    pub fn delete_word(&mut self, word: &str, unique_id: &str) -> Result<(), DictionaryError> {
        let chars: Vec<char> = word.chars().collect();
        if chars.is_empty() {
            return Err(DictionaryError::EmptyWord);
        }
        if self.find_node(&chars).is_none() {
            return Ok(());
        }
        remove_rec(&mut self.root, &chars, unique_id, 0)?;
        Ok(())
    }

    /// Register a pair dictionary for reverse lookups.
    ///
    /// Only a non-owning reference is stored: the pair is never mutated or
    /// freed from here, and if the caller drops it the merge step is simply
    /// skipped. Pairing must not form a cycle (a dictionary reachable as its
    /// own pair would recurse without bound on search).
    pub fn set_pair_dictionary(&mut self, pair: &Rc<RefCell<TernaryDict>>) {
        self.pair = Some(Rc::downgrade(pair));
    }

    /// Discard every stored word and detach the pair dictionary reference.
    ///
    /// Teardown is iterative (an explicit worklist, children detached before
    /// the parent is dropped), so arbitrarily deep trees cannot exhaust the
    /// stack. The pair dictionary itself is left alone; it is not owned.
    pub fn clear(&mut self) {
        let mut pending = Vec::new();
        pending.extend(self.root.take());
        while let Some(mut node) = pending.pop() {
            pending.extend(node.smaller.take());
            pending.extend(node.equal.take());
            pending.extend(node.larger.take());
        }
        self.pair = None;
    }

    /// `true` when no words are stored.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of stored words and number of distinct word lengths.
    pub fn stats(&self) -> (usize, usize) {
        let counts = self.words_count_by_length();
        (counts.values().sum(), counts.len())
    }

    /// Count of stored words grouped by word length.
    pub fn words_count_by_length(&self) -> FxHashMap<usize, usize> {
        let mut counts = FxHashMap::default();
        let mut stack: Vec<(&Node, usize)> = Vec::new();
        if let Some(root) = self.root.as_deref() {
            stack.push((root, 0));
        }
        while let Some((node, depth)) = stack.pop() {
            if node.terminal {
                *counts.entry(depth + 1).or_insert(0) += 1;
            }
            if let Some(smaller) = node.smaller.as_deref() {
                stack.push((smaller, depth));
            }
            if let Some(equal) = node.equal.as_deref() {
                stack.push((equal, depth + 1));
            }
            if let Some(larger) = node.larger.as_deref() {
                stack.push((larger, depth));
            }
        }
        counts
    }

    /// Total number of stored words.
    pub fn word_count(&self) -> usize {
        self.words_count_by_length().values().sum()
    }

    /// Total number of payload entries attached to stored words.
    pub fn entry_count(&self) -> usize {
        let mut total = 0;
        let mut stack = Vec::new();
        stack.extend(self.root.as_deref());
        while let Some(node) = stack.pop() {
            if node.terminal {
                total += node.payloads.len();
            }
            stack.extend(node.smaller.as_deref());
            stack.extend(node.equal.as_deref());
            stack.extend(node.larger.as_deref());
        }
        total
    }

    /// Walk the path spelled by `word`; returns the node at its end, or
    /// `None` if any step falls off a missing child.
    fn find_node(&self, word: &[char]) -> Option<&Node> {
        if word.is_empty() {
            return None;
        }
        let mut node = self.root.as_deref()?;
        let mut index = 0;
        loop {
            let ch = word[index];
            if ch < node.character {
                node = node.smaller.as_deref()?;
            } else if ch > node.character {
                node = node.larger.as_deref()?;
            } else {
                index += 1;
                if index == word.len() {
                    return Some(node);
                }
                node = node.equal.as_deref()?;
            }
        }
    }
}

impl Default for TernaryDict {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TernaryDict {
    fn drop(&mut self) {
        // same iterative teardown as clear(); the derived recursive drop
        // would overflow the stack on very deep trees
        self.clear();
    }
}

enum Step<'a> {
    Enter(&'a Node),
    Emit(&'a Node),
    Ascend,
}

/// In-order walk of the subtree under `start`, appending completions of
/// `prefix` to `results`.
///
/// Per node: smaller siblings first, then the node itself (its character
/// appended to the accumulated word, payloads emitted if terminal), then the
/// `equal` subtree one character deeper, then larger siblings with the word
/// reverted. The `limit` check happens on entry to each subtree; `Emit` and
/// `Ascend` always run so the accumulated word stays consistent.
fn traverse_subtree<'a>(
    start: Option<&'a Node>,
    prefix: &str,
    limit: usize,
    results: &mut Vec<SearchResult>,
) {
    let mut word = String::from(prefix);
    let mut stack: Vec<Step<'a>> = Vec::new();
    stack.extend(start.map(Step::Enter));

    while let Some(step) = stack.pop() {
        match step {
            Step::Enter(node) => {
                if results.len() >= limit {
                    continue;
                }
                // pushed in reverse of execution order
                if let Some(larger) = node.larger.as_deref() {
                    stack.push(Step::Enter(larger));
                }
                stack.push(Step::Ascend);
                if let Some(equal) = node.equal.as_deref() {
                    stack.push(Step::Enter(equal));
                }
                stack.push(Step::Emit(node));
                if let Some(smaller) = node.smaller.as_deref() {
                    stack.push(Step::Enter(smaller));
                }
            }
            Step::Emit(node) => {
                word.push(node.character);
                if node.terminal {
                    node.append_results(&word, results);
                }
            }
            Step::Ascend => {
                word.pop();
            }
        }
    }
}

/// Recursive deletion along the word's path.
///
/// Returns `Ok(true)` when this link's node was deleted and the parent must
/// decide whether the removal cascades further up. Structural mutation only
/// happens on the way back up; the depth guard fires on the way down, so an
/// `Err` always leaves the tree untouched.
fn remove_rec(
    link: &mut Option<Box<Node>>,
    word: &[char],
    unique_id: &str,
    depth: usize,
) -> Result<bool, DictionaryError> {
    if depth >= MAX_DELETE_DEPTH {
        return Err(DictionaryError::DepthLimitExceeded {
            limit: MAX_DELETE_DEPTH,
        });
    }
    let Some(node) = link.as_deref_mut() else {
        return Ok(false);
    };

    let ch = word[0];
    if ch < node.character {
        let propagated = remove_rec(&mut node.smaller, word, unique_id, depth + 1)?;
        if propagated && !node.terminal && node.is_free() {
            *link = None;
            return Ok(true);
        }
        return Ok(false);
    }
    if ch > node.character {
        let propagated = remove_rec(&mut node.larger, word, unique_id, depth + 1)?;
        if propagated && !node.terminal && node.is_free() {
            *link = None;
            return Ok(true);
        }
        return Ok(false);
    }

    if word.len() == 1 {
        // end of the word being deleted
        node.remove_payload(unique_id);
        if node.is_free() {
            if node.payloads.is_empty() {
                *link = None;
                return Ok(true);
            }
            // other ids still end here
            return Ok(false);
        }
        // the node still serves other words as a path or branch point; only
        // this word's markedness goes away
        node.terminal = false;
        return Ok(false);
    }

    let propagated = remove_rec(&mut node.equal, &word[1..], unique_id, depth + 1)?;
    if propagated {
        if node.terminal {
            // a shorter word still ends here
            return Ok(false);
        }
        if node.is_free() {
            *link = None;
            return Ok(true);
        }
        // joint: the character position survives, rebuilt around the
        // in-order predecessor from its sibling chain
        if let Some(joint) = link.take() {
            *link = splice_joint(joint);
        }
    }
    Ok(false)
}

/// Replace a joint whose `equal` child has just been removed.
///
/// Takes ownership of the joint and returns the subtree that stands in its
/// place: with no smaller subtree the larger subtree moves up as-is;
/// otherwise the right-most node of the smaller subtree (the in-order
/// predecessor) is promoted, inheriting the joint's sibling subtrees. The
/// promoted node keeps its own `equal` subtree.
fn splice_joint(mut node: Box<Node>) -> Option<Box<Node>> {
    let larger = node.larger.take();
    match node.smaller.take() {
        None => larger,
        Some(mut smaller) => {
            let mut promoted = match detach_rightmost(&mut smaller) {
                // the smaller child is itself the right-most: promote it
                // directly, keeping its own smaller subtree
                None => smaller,
                Some(mut rightmost) => {
                    rightmost.smaller = Some(smaller);
                    rightmost
                }
            };
            promoted.larger = larger;
            Some(promoted)
        }
    }
}

/// Detach the right-most descendant reachable through `larger` links.
///
/// Returns `None` when `node` has no `larger` child (it is the right-most
/// itself). The detached node's `smaller` subtree takes its old place; its
/// `equal` subtree stays with it.
fn detach_rightmost(node: &mut Box<Node>) -> Option<Box<Node>> {
    let mut cursor = node;
    while cursor
        .larger
        .as_ref()
        .is_some_and(|child| child.larger.is_some())
    {
        cursor = cursor.larger.as_mut().unwrap();
    }
    let mut rightmost = cursor.larger.take()?;
    cursor.larger = rightmost.smaller.take();
    Some(rightmost)
}
