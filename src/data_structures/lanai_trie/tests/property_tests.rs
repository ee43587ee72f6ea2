// Copyright (c) 2025 Lanai Complete Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Property-based tests for the Lanai Trie.

use proptest::prelude::*;
use std::collections::HashSet;

use crate::data_structures::lanai_trie::{LanaiTrie, NodeId};
use crate::tests::{vocabulary_strategy, word_strategy};

fn build(words: &[String]) -> LanaiTrie {
    let mut trie = LanaiTrie::new();
    let summary = trie.insert_words(words);
    assert!(summary.is_clean());
    trie
}

/// Every character-boundary prefix of `word`, from one character to the whole word.
fn prefixes(word: &str) -> impl Iterator<Item = &str> {
    word.char_indices()
        .skip(1)
        .map(|(i, _)| &word[..i])
        .chain(std::iter::once(word))
}

proptest! {
    // Property: every inserted word is completed by each of its prefixes
    #[test]
    fn prop_every_prefix_completes_word(words in vocabulary_strategy(20)) {
        let trie = build(&words);

        for word in &words {
            for prefix in prefixes(word) {
                let completions = trie.find_words(prefix);
                prop_assert!(
                    completions.contains(word),
                    "prefix {:?} did not complete {:?}: {:?}", prefix, word, completions
                );
            }
        }
    }

    // Property: inserting the vocabulary twice changes neither results nor shape
    #[test]
    fn prop_insertion_is_idempotent(words in vocabulary_strategy(20), probe in word_strategy()) {
        let once = build(&words);
        let mut twice = build(&words);
        let summary = twice.insert_words(&words);

        prop_assert_eq!(summary.inserted, 0);
        prop_assert_eq!(once.count_nodes(), twice.count_nodes());
        prop_assert_eq!(once.find_words(""), twice.find_words(""));
        prop_assert_eq!(once.find_words(&probe), twice.find_words(&probe));
    }

    // Property: a shorter prefix yields a superset of a longer one's completions
    #[test]
    fn prop_prefix_monotonicity(words in vocabulary_strategy(20)) {
        let trie = build(&words);

        for word in &words {
            let mut previous: Option<HashSet<String>> = None;
            for prefix in prefixes(word) {
                let current: HashSet<String> = trie.find_words(prefix).into_iter().collect();
                if let Some(shorter) = &previous {
                    prop_assert!(current.is_subset(shorter));
                }
                previous = Some(current);
            }
        }
    }

    // Property: the empty prefix yields exactly the distinct inserted words
    #[test]
    fn prop_empty_prefix_is_complete(words in vocabulary_strategy(20)) {
        let trie = build(&words);

        let completions = trie.find_words("");
        let distinct: HashSet<&String> = words.iter().collect();
        let returned: HashSet<&String> = completions.iter().collect();

        prop_assert_eq!(completions.len(), distinct.len());
        prop_assert_eq!(trie.word_count(), distinct.len());
        prop_assert_eq!(returned, distinct);
    }

    // Property: a prefix outside the alphabet of the vocabulary yields nothing
    #[test]
    fn prop_unknown_prefix_is_empty(words in vocabulary_strategy(20), tail in "[a-z]{0,4}") {
        let trie = build(&words);
        let prefix = format!("#{tail}");

        prop_assert!(trie.find_node(&prefix).is_none());
        prop_assert!(trie.find_words(&prefix).is_empty());
    }

    // Property: node count grows by exactly the number of new path characters
    #[test]
    fn prop_node_count_growth(words in vocabulary_strategy(20)) {
        let mut trie = LanaiTrie::new();
        prop_assert_eq!(trie.count_nodes(), 1);

        for word in &words {
            let shared = prefixes(word)
                .take_while(|prefix| trie.find_node(prefix).is_some())
                .count();
            let missing = word.chars().count() - shared;
            let before = trie.count_nodes();

            trie.insert_word(word).unwrap();

            prop_assert_eq!(trie.count_nodes(), before + missing);
            prop_assert!(trie.count_nodes() <= before + word.chars().count());
        }

        prop_assert_eq!(trie.count_nodes_from(NodeId::ROOT).unwrap(), trie.count_nodes());
    }

    // Property: reconstructing a resolved node returns the prefix that found it
    #[test]
    fn prop_reconstruct_inverts_find(words in vocabulary_strategy(20)) {
        let trie = build(&words);

        for word in &words {
            for prefix in prefixes(word) {
                let node = trie.find_node(prefix).unwrap();
                prop_assert_eq!(trie.reconstruct_word(node).unwrap(), prefix);
            }
        }
    }
}
