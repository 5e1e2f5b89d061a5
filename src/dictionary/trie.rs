//! Compressed prefix tree (radix trie) used for dictionary membership checks.
//!
//! Words are first inserted as single-character edges, then every chain of
//! non-terminal single-child nodes is folded into one multi-character edge.
//! Children are keyed by the first character of their label, so a lookup picks
//! at most one candidate edge per step.

use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TrieNode {
    label: String,
    children: BTreeMap<char, TrieNode>,
    terminal: bool,
}

impl TrieNode {
    fn edge(letter: char) -> Self {
        Self {
            label: letter.to_string(),
            children: BTreeMap::new(),
            terminal: false,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    pub fn children(&self) -> impl Iterator<Item = &TrieNode> {
        self.children.values()
    }

    /// Folds single-child, non-terminal descendants into their parent edge.
    /// Runs bottom-up, so a second pass finds nothing left to merge.
    fn compress(&mut self) {
        for child in self.children.values_mut() {
            child.compress();
            while child.children.len() == 1 && !child.terminal {
                let Some((_, next)) = child.children.pop_first() else {
                    break;
                };
                child.label.push_str(&next.label);
                child.children = next.children;
                child.terminal = next.terminal;
            }
        }
    }

    fn count(&self) -> usize {
        1 + self.children.values().map(TrieNode::count).sum::<usize>()
    }

    fn count_terminals(&self) -> usize {
        usize::from(self.terminal)
            + self
                .children
                .values()
                .map(TrieNode::count_terminals)
                .sum::<usize>()
    }

    fn check_compressed(&self, is_root: bool) -> bool {
        if !is_root && (self.label.is_empty() || (self.children.len() == 1 && !self.terminal)) {
            return false;
        }
        self.children.iter().all(|(key, child)| {
            child.label.chars().next() == Some(*key) && child.check_compressed(false)
        })
    }
}

/// Immutable radix trie over an upper-cased word list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RadixTrie {
    root: TrieNode,
}

impl RadixTrie {
    /// Builds and compresses a trie from `words`. Entries are trimmed and
    /// upper-cased; blank entries are skipped.
    pub fn build<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut root = TrieNode::default();

        for word in words {
            let word = word.as_ref().trim();
            if word.is_empty() {
                continue;
            }

            let mut node = &mut root;
            for letter in word.to_uppercase().chars() {
                node = node
                    .children
                    .entry(letter)
                    .or_insert_with(|| TrieNode::edge(letter));
            }
            node.terminal = true;
        }

        root.compress();
        Self { root }
    }

    /// Case-insensitive membership test. The empty string is never a word.
    pub fn has_word(&self, query: &str) -> bool {
        if query.is_empty() {
            return false;
        }
        self.contains_upper(&query.to_uppercase())
    }

    /// Same as [`has_word`](Self::has_word) for a query that is already
    /// upper-cased.
    pub(crate) fn contains_upper(&self, query: &str) -> bool {
        if query.is_empty() {
            return false;
        }

        let mut node = &self.root;
        let mut rest = query;

        while let Some(first) = rest.chars().next() {
            let Some(child) = node.children.get(&first) else {
                return false;
            };
            // An edge longer than what is left means the query ends mid-edge.
            if !rest.starts_with(child.label.as_str()) {
                return false;
            }
            rest = &rest[child.label.len()..];
            node = child;
        }

        node.terminal
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.root.count()
    }

    /// Number of distinct words stored.
    pub fn word_count(&self) -> usize {
        self.root.count_terminals()
    }

    /// Whether the radix invariant holds for every node.
    pub fn is_compressed(&self) -> bool {
        self.root.check_compressed(true)
    }

    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }
}
