// TST-Dict Pair Merge
// Folds pair-dictionary hits into a primary result list

use crate::tree::TernaryDict;
use crate::types::SearchResult;

/// Re-issue `word` against the pair dictionary and fold its hits into
/// `primary`.
///
/// The pair tree is keyed the opposite way around, so each hit is reported
/// with word and description swapped. Hits already present in `primary`
/// (full-record equality) are dropped; the rest are inserted at the front,
/// so pair-dictionary matches rank ahead of primary matches.
pub(crate) fn merge_pair_results(
    pair: &TernaryDict,
    word: &str,
    limit: usize,
    primary: &mut Vec<SearchResult>,
) {
    for hit in pair.search_limit(word, limit) {
        let swapped = hit.swapped();
        if !primary.contains(&swapped) {
            primary.insert(0, swapped);
        }
    }
}
