pub mod dictionary;
pub mod trie;

pub use dictionary::{DictionaryError, FileWordSource, WordSource};
pub use trie::{Hierarchy, Trie, TrieError, TrieNode};
