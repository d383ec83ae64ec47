// --- File: src/core/trie.rs
use std::collections::HashMap;

#[derive(Clone, Debug)]
struct TrieNode {
    children: HashMap<u8, usize>,
    letter: Option<char>,
}

impl TrieNode {
    fn new() -> Self {
        Self { children: HashMap::new(), letter: None }
    }
}

/// A byte trie over Latin key sequences, each terminal carrying its Cyrillic letter.
/// Lookup walks at most as many bytes as the longest key, so the tokenizer
/// never retries shorter keys one by one.
#[derive(Clone, Debug)]
pub struct LatinTrie {
    nodes: Vec<TrieNode>,
}

impl LatinTrie {
    pub fn new() -> Self {
        Self { nodes: vec![TrieNode::new()] }
    }

    /// O(k) complexity where k is key length.
    pub fn insert(&mut self, key: &str, letter: char) {
        let mut node_idx = 0;
        for &byte in key.as_bytes() {
            let next_idx = if let Some(&id) = self.nodes[node_idx].children.get(&byte) {
                id
            } else {
                let new_node_id = self.nodes.len();
                self.nodes.push(TrieNode::new());
                self.nodes[node_idx].children.insert(byte, new_node_id);
                new_node_id
            };
            node_idx = next_idx;
        }
        self.nodes[node_idx].letter = Some(letter);
    }

    /// Finds the longest key that `text` starts with.
    /// Returns the mapped letter and the key's length in bytes.
    pub fn longest_match(&self, text: &str) -> Option<(char, usize)> {
        let mut node_idx = 0;
        let mut best = None;
        for (depth, byte) in text.bytes().enumerate() {
            match self.nodes[node_idx].children.get(&byte) {
                Some(&next_idx) => node_idx = next_idx,
                None => break,
            }
            if let Some(letter) = self.nodes[node_idx].letter {
                best = Some((letter, depth + 1));
            }
        }
        best
    }
}

impl Default for LatinTrie {
    fn default() -> Self {
        Self::new()
    }
}
