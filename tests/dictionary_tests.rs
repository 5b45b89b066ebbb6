use wordhunt_bot::dictionary::{parse_word_list, trie_from_text};
use wordhunt_bot::{default_trie, load_dictionary, load_trie, Error};

#[test]
fn test_parse_skips_blank_and_malformed_lines() {
    let words = parse_word_list("cat\n\n  dog  \nDon't\n\t\nbird\n");
    assert_eq!(words, vec!["cat", "dog", "bird"]);
}

#[test]
fn test_empty_text_is_an_error() {
    assert!(matches!(trie_from_text("\n \n"), Err(Error::EmptyDictionary)));
}

#[test]
fn test_missing_file_is_an_error() {
    let err = load_trie("/definitely/not/a/word/list.txt").unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn test_load_from_file() {
    let path = std::env::temp_dir().join(format!("wordhunt-bot-{}.txt", std::process::id()));
    std::fs::write(&path, "tea\neat\n\nate\n").unwrap();

    let trie = load_trie(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(trie.len(), 3);
    assert!(trie.contains("eat"));
}

#[test]
fn test_bundled_dictionary() {
    let words = load_dictionary();
    assert!(!words.is_empty());
    assert!(words.iter().all(|w| w.bytes().all(|b| b.is_ascii_lowercase())));

    let trie = default_trie().unwrap();
    assert!(trie.contains("cat"));
    assert!(trie.contains("cats"));
    assert!(!trie.contains("qzx"));
}
