// Copyright (c) 2025 Lexitrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Integration tests for the word trie, the suggestion engine and the
//! dictionary loader, driven through the public library API only.

use std::io::Cursor;

use lexitrie_lib::data_structures::{
    NodeId, OrderedTree, SuggestionEngine, TreeError, WordTrie, WordTrieConfig, WordTrieError,
};
use lexitrie_lib::dictionary::{self, LoadOptions};

fn sample_trie() -> WordTrie {
    let mut trie = WordTrie::new();
    for word in ["helloworld", "hello", "hey", "world"] {
        trie.add(word).unwrap();
    }
    trie
}

#[test]
fn test_membership() {
    let trie = sample_trie();

    assert!(trie.contains("hello"));
    assert!(trie.contains("helloworld"));
    assert!(trie.contains("world"));
    assert!(!trie.contains("hell"));
    assert!(!trie.contains("worlds"));
    assert!(!trie.contains(""));
}

#[test]
fn test_prefix_listing_with_garbage_tail() {
    let trie = sample_trie();

    assert_eq!(
        trie.words_with_prefix("hell0122").unwrap(),
        vec!["hello", "helloworld"]
    );
    assert_eq!(trie.words_with_prefix("he").unwrap(), vec!["hello", "helloworld", "hey"]);
}

#[test]
fn test_prefix_listing_without_any_match_returns_everything() {
    let trie = sample_trie();

    assert_eq!(trie.words_with_prefix("zzz").unwrap(), trie.words());
}

#[test]
fn test_suggestions() {
    let trie = sample_trie();
    let engine = SuggestionEngine::new(&trie);

    assert_eq!(engine.suggest("helloz").unwrap(), vec!["hello", "helloworld"]);
    assert_eq!(engine.suggest("hex").unwrap(), vec!["hello", "helloworld", "hey"]);
    assert!(engine.suggest("xyz").unwrap().is_empty());
    assert!(matches!(
        engine.suggest(""),
        Err(WordTrieError::EmptyArgument { parameter: "input" })
    ));
}

#[test]
fn test_suggestions_on_empty_trie() {
    let trie = WordTrie::new();

    assert!(trie.suggest("anything").unwrap().is_empty());
    assert!(!trie.contains("anything"));
    assert!(trie.words().is_empty());
}

#[test]
fn test_clear_resets_everything() {
    let mut trie = sample_trie();
    trie.clear();

    assert!(trie.is_empty());
    assert!(!trie.contains("hello"));
    assert_eq!(trie.height(), 0);
    assert_eq!(trie.node_count(), 1);
}

#[test]
fn test_case_insensitive_dictionary() {
    let mut trie = WordTrie::with_config(WordTrieConfig::new().with_case_sensitive(false));
    let report = dictionary::load_reader(
        &mut trie,
        Cursor::new("Apple\napple\nBanana\n"),
        &LoadOptions::new(),
    )
    .unwrap();

    assert_eq!(report.added, 2);
    assert_eq!(report.duplicates, 1);
    assert!(trie.contains("APPLE"));
    assert_eq!(trie.suggest("bananas").unwrap(), vec!["banana"]);
}

#[test]
fn test_generic_tree_public_api() {
    let mut tree: OrderedTree<&str> = OrderedTree::new("root");
    let fruit = tree.add_child(NodeId::ROOT, "fruit").unwrap();
    tree.add_child(fruit, "apple").unwrap();
    tree.add_child(fruit, "pear").unwrap();

    assert_eq!(tree.height(), 2);
    assert_eq!(tree.node_count(), 4);
    assert_eq!(tree.leaf_keys(), vec!["apple", "pear"]);
    assert_eq!(
        tree.add_child(fruit, "apple"),
        Err(TreeError::DuplicateChild {
            key: "\"apple\"".to_string()
        })
    );

    let pear = tree.root().child(&"fruit").and_then(|n| n.child(&"pear")).unwrap();
    assert_eq!(pear.parent().map(|p| p.id()), Some(fruit));
    assert_eq!(pear.path(), vec![&"fruit", &"pear"]);
}
