// Model-based property tests for TernaryDict

use proptest::prelude::*;
use std::collections::BTreeSet;

use crate::TernaryDict;

fn entry_strategy() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(("[a-e]{1,6}", "[0-9]{1,2}"), 1..40)
}

fn word_set_strategy() -> impl Strategy<Value = BTreeSet<String>> {
    prop::collection::btree_set("[a-e]{1,6}", 1..40)
}

proptest! {
    #[test]
    fn inserted_entries_are_searchable(entries in entry_strategy()) {
        let mut dict = TernaryDict::new();
        for (index, (word, id)) in entries.iter().enumerate() {
            let unique_id = format!("{id}-{index}");
            dict.insert(word, &unique_id, "entry").unwrap();
        }

        for (index, (word, id)) in entries.iter().enumerate() {
            let unique_id = format!("{id}-{index}");
            let hits = dict.search_limit(word, usize::MAX);
            prop_assert!(
                hits.iter().any(|hit| hit.word == *word && hit.unique_id == unique_id),
                "inserted entry ({}, {}) not found",
                word,
                unique_id
            );
        }
    }

    #[test]
    fn listing_is_lexicographic(words in word_set_strategy()) {
        let mut dict = TernaryDict::new();
        for (index, word) in words.iter().enumerate() {
            dict.insert(word, &format!("u{index}"), "entry").unwrap();
        }

        let listed: Vec<String> = dict
            .list_entire_dictionary_limit(usize::MAX)
            .into_iter()
            .map(|hit| hit.word)
            .collect();
        let expected: Vec<String> = words.iter().cloned().collect();
        prop_assert_eq!(listed, expected);
    }

    #[test]
    fn completions_extend_the_query(words in word_set_strategy()) {
        let mut dict = TernaryDict::new();
        for (index, word) in words.iter().enumerate() {
            dict.insert(word, &format!("u{index}"), "entry").unwrap();
        }

        for word in &words {
            let prefix: String = word.chars().take(1).collect();
            for hit in dict.search_limit(&prefix, usize::MAX) {
                prop_assert!(hit.word.starts_with(&prefix));
            }
        }
    }

    #[test]
    fn deleting_every_entry_empties_the_tree(entries in entry_strategy()) {
        let mut dict = TernaryDict::new();
        let mut inserted = Vec::new();
        for (index, (word, id)) in entries.iter().enumerate() {
            let unique_id = format!("{id}-{index}");
            dict.insert(word, &unique_id, "entry").unwrap();
            inserted.push((word.clone(), unique_id));
        }

        for (word, unique_id) in inserted.iter().rev() {
            dict.delete_word(word, unique_id).unwrap();
        }

        prop_assert!(dict.is_empty());
        prop_assert!(dict.list_entire_dictionary_limit(usize::MAX).is_empty());
    }
}
