use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

/// Reserved symbol carried by the root node. Never produced by any input word.
const ROOT_SYMBOL: char = '\0';

/// Name used for the root when the trie is rendered as a hierarchy.
const ROOT_NAME: &str = "__root__";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TrieError {
    #[error("{} is not a word, nothing deleted", .0)]
    WordNotFound(String),
}

/// A node in the trie.
#[derive(Debug, Clone)]
pub struct TrieNode {
    // The symbol this node represents on the edge from its parent.
    symbol: char,
    // Whether the path from the root to this node spells a stored word.
    is_terminal: bool,
    // The children of this node, keyed by symbol. BTreeMap keeps iteration
    // lexicographic so suggestions come out in a stable order.
    children: BTreeMap<char, TrieNode>,
}

impl TrieNode {
    fn new(symbol: char) -> Self {
        TrieNode {
            symbol,
            is_terminal: false,
            children: BTreeMap::new(),
        }
    }

    /// The symbol this node was created for (the root carries a NUL sentinel).
    pub fn symbol(&self) -> char {
        self.symbol
    }

    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    /// Sets the terminal flag and returns the value it now holds.
    pub fn set_terminal(&mut self, terminal: bool) -> bool {
        self.is_terminal = terminal;
        self.is_terminal
    }

    pub fn children(&self) -> &BTreeMap<char, TrieNode> {
        &self.children
    }

    /// Renders this node and its descendants as an ordered array-of-subtrees
    /// form, for serialization or visualization.
    pub fn to_hierarchy(&self) -> Hierarchy {
        Hierarchy {
            name: self.symbol.to_string(),
            children: self.children.values().map(TrieNode::to_hierarchy).collect(),
        }
    }
}

/// Ordered subtree rendering of a node: its display name and its children,
/// recursively, in child-iteration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hierarchy {
    pub name: String,
    pub children: Vec<Hierarchy>,
}

/// A prefix tree over a vocabulary of words.
///
/// Words sharing a prefix share the path spelling that prefix. Every query is
/// total; only [`Trie::delete`] can fail, when asked to remove a word that was
/// never stored.
#[derive(Debug, Clone)]
pub struct Trie {
    root: TrieNode,
    // Number of insert calls ever made, NOT the number of distinct words
    // currently stored. Duplicates and later-deleted words still count.
    word_count: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Trie {
            root: TrieNode::new(ROOT_SYMBOL),
            word_count: 0,
        }
    }
}

impl Trie {
    /// Creates a new, empty trie.
    pub fn new() -> Self {
        Trie::default()
    }

    /// Inserts a word, creating whatever nodes its path is missing.
    ///
    /// Surrounding whitespace is trimmed; internal whitespace is stored as
    /// ordinary symbols. The insert counter is bumped once per call even when
    /// the word is already present.
    pub fn insert(&mut self, word: &str) {
        let word = word.trim();

        self.word_count += 1;

        if word.is_empty() {
            return;
        }

        let mut node = &mut self.root;
        for c in word.chars() {
            node = node
                .children
                .entry(c)
                .or_insert_with(|| TrieNode::new(c));
        }
        node.set_terminal(true);
    }

    /// Total number of [`Trie::insert`] calls since creation.
    pub fn count(&self) -> usize {
        self.word_count
    }

    /// Returns every stored word beginning with `query`, in lexicographic
    /// order. When the query itself is a stored word it is emitted first,
    /// before any longer completion.
    ///
    /// An empty (trimmed) query matches everything; an unmatched query
    /// returns an empty vec rather than an error.
    pub fn suggest(&self, query: &str) -> Vec<String> {
        let query = query.trim();

        let mut node = &self.root;
        for c in query.chars() {
            match node.children.get(&c) {
                Some(child) => node = child,
                None => return Vec::new(),
            }
        }

        let mut suggestions = Vec::new();
        if node.is_terminal {
            suggestions.push(query.to_string());
        }
        Self::collect_words(node, query, &mut suggestions);
        suggestions
    }

    /// Depth-first walk over `node`'s descendants, appending the accumulated
    /// path for every terminal node found.
    fn collect_words(node: &TrieNode, prefix: &str, suggestions: &mut Vec<String>) {
        for (c, child) in &node.children {
            let word = format!("{}{}", prefix, c);
            if child.is_terminal {
                suggestions.push(word.clone());
            }
            Self::collect_words(child, &word, suggestions);
        }
    }

    /// Inserts every word of `words`, in sequence order.
    pub fn populate<I>(&mut self, words: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for word in words {
            self.insert(word.as_ref());
        }
    }

    /// Removes a word, pruning any branch left with nothing to spell.
    ///
    /// The word is matched exactly as stored — no trimming, unlike `insert`
    /// and `suggest`. Fails with [`TrieError::WordNotFound`] when the path
    /// does not exist or does not end on a terminal node, in which case the
    /// trie is left untouched.
    pub fn delete(&mut self, word: &str) -> Result<(), TrieError> {
        // Read-only walk first so a failed delete mutates nothing.
        let mut node = &self.root;
        for c in word.chars() {
            node = node
                .children
                .get(&c)
                .ok_or_else(|| TrieError::WordNotFound(word.to_string()))?;
        }
        if !node.is_terminal {
            return Err(TrieError::WordNotFound(word.to_string()));
        }

        let symbols: Vec<char> = word.chars().collect();
        Self::remove_word(&mut self.root, &symbols);
        Ok(())
    }

    /// Clears the terminal flag at the end of `rest` and prunes upward on the
    /// way back out. Returns whether `node` itself should be detached by its
    /// parent: only when it is a non-terminal leaf. A node that is still
    /// terminal ends a shorter word and must survive, which also shields
    /// every ancestor above it.
    fn remove_word(node: &mut TrieNode, rest: &[char]) -> bool {
        if let Some((c, rest)) = rest.split_first() {
            if let Some(child) = node.children.get_mut(c) {
                if Self::remove_word(child, rest) {
                    node.children.remove(c);
                }
            }
        } else {
            node.set_terminal(false);
        }
        !node.is_terminal && node.children.is_empty()
    }

    /// The root node, for inspection. Its symbol is a reserved sentinel.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Renders the whole trie as an ordered hierarchy, with the root named
    /// `__root__`.
    pub fn to_hierarchy(&self) -> Hierarchy {
        Hierarchy {
            name: ROOT_NAME.to_string(),
            children: self
                .root
                .children
                .values()
                .map(TrieNode::to_hierarchy)
                .collect(),
        }
    }
}
