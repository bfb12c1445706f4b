//! Dictionary word set
//!
//! A prefix tree stored as an arena of nodes. Each node maps a character to the
//! index of its child, so every prefix resolves to exactly one node.

use rustc_hash::FxHashMap;

/// Index of a node inside the arena
type NodeId = usize;

const ROOT: NodeId = 0;

#[derive(Debug, Clone, Default)]
struct Node {
    children: FxHashMap<char, NodeId>,
    is_word: bool,
}

/// A set of dictionary words backed by a trie
///
/// Words are stored verbatim: no case folding or trimming is applied.
#[derive(Debug, Clone)]
pub struct WordSet {
    nodes: Vec<Node>,
    word_count: usize,
}

impl WordSet {
    /// Create an empty word set
    ///
    /// # Examples
    /// ```
    /// use anagram_solver::core::WordSet;
    ///
    /// let mut words = WordSet::new();
    /// words.insert("apple");
    ///
    /// assert!(words.search("apple"));
    /// assert!(!words.search("appl"));
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
            word_count: 0,
        }
    }

    /// Insert a word, creating one node per new character on its path
    ///
    /// Returns `true` if the word was not already present.
    pub fn insert(&mut self, word: &str) -> bool {
        let mut node = ROOT;
        for ch in word.chars() {
            node = match self.nodes[node].children.get(&ch) {
                Some(&child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(Node::default());
                    self.nodes[node].children.insert(ch, child);
                    child
                }
            };
        }

        let terminal = &mut self.nodes[node];
        if terminal.is_word {
            false
        } else {
            terminal.is_word = true;
            self.word_count += 1;
            true
        }
    }

    /// Check whether `word` was inserted as a complete word
    #[must_use]
    pub fn search(&self, word: &str) -> bool {
        self.find(word).is_some_and(|node| self.nodes[node].is_word)
    }

    /// Check whether any inserted word starts with `prefix`
    #[must_use]
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        // Nodes only exist on the path of some inserted word, except the root
        !self.is_empty() && self.find(prefix).is_some()
    }

    /// Number of distinct words in the set
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.word_count
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Number of trie nodes, including the root
    #[inline]
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Walk the path spelled by `prefix`
    fn find(&self, prefix: &str) -> Option<NodeId> {
        prefix.chars().try_fold(ROOT, |node, ch| {
            self.nodes[node].children.get(&ch).copied()
        })
    }
}

impl Default for WordSet {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: AsRef<str>> Extend<S> for WordSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruit_set() -> WordSet {
        ["apple", "banana", "carrot"].into_iter().collect()
    }

    #[test]
    fn search_finds_inserted_words() {
        let words = fruit_set();
        assert!(words.search("apple"));
        assert!(words.search("banana"));
        assert!(words.search("carrot"));
    }

    #[test]
    fn search_rejects_missing_words() {
        let words = fruit_set();
        assert!(!words.search("grape"));
        assert!(!words.search("apples"));
        assert!(!words.search("car"));
    }

    #[test]
    fn search_rejects_partial_words() {
        let words = fruit_set();
        assert!(!words.search("app"));
        assert!(!words.search("ban"));
        assert!(!words.search("appl"));
    }

    #[test]
    fn empty_set_finds_nothing() {
        let words = WordSet::new();
        assert!(words.is_empty());
        assert!(!words.search("apple"));
        assert!(!words.search("banana"));
        assert!(!words.search(""));
        assert_eq!(words.node_count(), 1);
    }

    #[test]
    fn insert_is_idempotent() {
        let mut words = fruit_set();
        let nodes_before = words.node_count();

        assert!(!words.insert("apple"));

        assert_eq!(words.len(), 3);
        assert_eq!(words.node_count(), nodes_before);
        assert!(words.search("apple"));
        assert!(!words.search("app"));
    }

    #[test]
    fn shared_prefixes_share_nodes() {
        let mut words = WordSet::new();
        words.insert("car");
        let after_car = words.node_count();
        words.insert("cart");

        // Only the trailing 't' is new
        assert_eq!(words.node_count(), after_car + 1);
        assert!(words.search("car"));
        assert!(words.search("cart"));
        assert!(!words.search("ca"));
    }

    #[test]
    fn prefix_becomes_word_when_inserted() {
        let mut words = fruit_set();
        assert!(!words.search("app"));
        assert!(words.insert("app"));
        assert!(words.search("app"));
        assert!(words.search("apple"));
    }

    #[test]
    fn empty_word_only_when_inserted() {
        let mut words = fruit_set();
        assert!(!words.search(""));
        words.insert("");
        assert!(words.search(""));
        assert_eq!(words.len(), 4);
    }

    #[test]
    fn case_is_preserved() {
        let words: WordSet = ["Apple"].into_iter().collect();
        assert!(words.search("Apple"));
        assert!(!words.search("apple"));
    }

    #[test]
    fn non_ascii_characters() {
        let words: WordSet = ["café", "naïve"].into_iter().collect();
        assert!(words.search("café"));
        assert!(words.search("naïve"));
        assert!(!words.search("cafe"));
        // One node per character, not per byte
        assert_eq!(words.node_count(), 1 + 4 + 5);
    }

    #[test]
    fn contains_prefix_walks_paths() {
        let words = fruit_set();
        assert!(words.contains_prefix(""));
        assert!(words.contains_prefix("ban"));
        assert!(words.contains_prefix("carrot"));
        assert!(!words.contains_prefix("carrots"));
        assert!(!words.contains_prefix("z"));
    }

    #[test]
    fn contains_prefix_on_empty_set() {
        let mut words = WordSet::new();
        assert!(!words.contains_prefix(""));

        words.insert("");
        assert!(words.contains_prefix(""));
        assert!(!words.contains_prefix("a"));
    }
}
