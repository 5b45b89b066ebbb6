use wordhunt_bot::{Error, Letter, Trie};

fn get_test_words() -> Vec<String> {
    vec![
        "bass".to_string(),
        "bats".to_string(),
        "bess".to_string(),
        "be".to_string(),
    ]
}

#[test]
fn test_inserted_words_are_terminal() {
    let words = get_test_words();
    let trie = Trie::from_words(&words).unwrap();

    for word in &words {
        assert!(trie.contains(word), "missing {}", word);
    }
    assert_eq!(trie.len(), words.len());
}

#[test]
fn test_prefixes_are_not_words() {
    let trie = Trie::from_words(get_test_words()).unwrap();

    assert!(trie.is_prefix("ba"));
    assert!(!trie.contains("ba"));
    assert!(!trie.contains("bat"));
    assert!(trie.contains("be"));
}

#[test]
fn test_lookup_fails_at_first_diverging_letter() {
    let trie = Trie::from_words(get_test_words()).unwrap();

    let b = trie.root().child(Letter::from_char('b').unwrap()).unwrap();
    assert!(b.child(Letter::from_char('x').unwrap()).is_none());
    assert!(trie.walk("bx").is_none());
    assert!(trie.walk("bxs").is_none());
    assert!(trie.root().child(Letter::from_char('z').unwrap()).is_none());
}

#[test]
fn test_empty_string_marks_root() {
    let mut trie = Trie::new();
    assert!(!trie.root().is_terminal());

    trie.insert("").unwrap();
    assert!(trie.root().is_terminal());
    assert!(trie.contains(""));
    assert_eq!(trie.node_count(), 0);
}

#[test]
fn test_insert_creates_at_most_word_length_nodes() {
    let mut trie = Trie::from_words(["card"]).unwrap();
    let before = trie.node_count();

    trie.insert("cart").unwrap();
    assert_eq!(trie.node_count() - before, 1);

    trie.insert("zebra").unwrap();
    assert_eq!(trie.node_count() - before, 6);
}

#[test]
fn test_invalid_word_rejected() {
    let mut trie = Trie::new();
    assert!(matches!(trie.insert("don't"), Err(Error::InvalidWord(_))));
    assert!(matches!(trie.insert("café"), Err(Error::InvalidWord(_))));
    assert!(trie.is_empty());
}

#[test]
fn test_lookup_is_case_sensitive_like_insert() {
    let mut trie = Trie::new();
    assert!(trie.insert("Cat").is_err());
    trie.insert("cat").unwrap();

    assert!(trie.contains("cat"));
    assert!(!trie.contains("CAT"));
    assert!(!trie.contains("Cat"));
    assert!(!trie.is_prefix("C"));
    assert!(trie.walk("ca!").is_none());
}

#[test]
fn test_leaf_has_no_children() {
    let trie = Trie::from_words(get_test_words()).unwrap();

    let leaf = trie.walk("bass").unwrap();
    assert!(leaf.is_terminal());
    assert!(!leaf.has_children());
    assert!(trie.walk("be").unwrap().has_children());
}
