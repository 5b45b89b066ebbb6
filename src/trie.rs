//! Prefix tree over the dictionary.
//!
//! The trie is built once and then only read. Each node holds a fixed
//! 26-slot child array indexed by letter rank, so descending one letter is a
//! single array index. The search walks the trie in lock-step with the grid
//! and abandons a branch as soon as the next letter has no child.

use crate::error::{Error, Result};
use crate::grid::{Letter, ALPHABET_SIZE};

/// A node in the trie. `terminal` is set when the letters from the root to
/// this node spell a dictionary word.
#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    children: [Option<Box<TrieNode>>; ALPHABET_SIZE],
    terminal: bool,
}

impl TrieNode {
    /// The child reached by `letter`, if any word continues that way.
    #[inline]
    pub fn child(&self, letter: Letter) -> Option<&TrieNode> {
        self.children[letter.index()].as_deref()
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    pub fn has_children(&self) -> bool {
        self.children.iter().any(Option::is_some)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Trie {
    root: TrieNode,
    words: usize,
    nodes: usize,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a trie from a word list. Fails on the first word that is not
    /// made of `a-z` letters.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        for word in words {
            trie.insert(word.as_ref())?;
        }
        Ok(trie)
    }

    /// Add `word` to the language, creating at most `word.len()` nodes.
    ///
    /// The empty string marks the root terminal; the search never reports a
    /// zero-length path, so this has no effect on results.
    pub fn insert(&mut self, word: &str) -> Result<()> {
        if !word.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(Error::InvalidWord(word.to_string()));
        }

        let mut node = &mut self.root;
        for letter in word.chars().filter_map(Letter::from_char) {
            let slot = &mut node.children[letter.index()];
            if slot.is_none() {
                self.nodes += 1;
            }
            node = slot.get_or_insert_with(Box::default);
        }
        if !node.terminal {
            node.terminal = true;
            self.words += 1;
        }
        Ok(())
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Follow `prefix` from the root. Returns `None` at the first letter with
    /// no child, or at any character outside `a-z`, which `insert` would
    /// also have rejected.
    pub fn walk(&self, prefix: &str) -> Option<&TrieNode> {
        prefix.chars().try_fold(&self.root, |node, c| {
            if !c.is_ascii_lowercase() {
                return None;
            }
            node.child(Letter::from_char(c)?)
        })
    }

    pub fn contains(&self, word: &str) -> bool {
        self.walk(word).is_some_and(TrieNode::is_terminal)
    }

    pub fn is_prefix(&self, prefix: &str) -> bool {
        self.walk(prefix).is_some()
    }

    /// Number of distinct words inserted.
    pub fn len(&self) -> usize {
        self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Number of nodes below the root.
    pub fn node_count(&self) -> usize {
        self.nodes
    }
}
