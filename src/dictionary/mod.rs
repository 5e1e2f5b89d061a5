pub mod trie;
pub mod word_list;

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use serde::{Deserialize, Serialize};

pub use trie::RadixTrie;

/// Outcome of checking a batch of words against the dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WordValidation {
    pub valid: Vec<String>,
    pub invalid: Vec<String>,
    pub all_valid: bool,
}

/// Word dictionary: an immutable radix trie plus a memo of every query seen.
///
/// The cache is never evicted; the word universe is fixed and the number of
/// distinct queries in a session stays small.
#[derive(Debug, Default)]
pub struct Dictionary {
    trie: RadixTrie,
    cache: Mutex<HashMap<String, bool>>,
}

impl Dictionary {
    pub fn new(trie: RadixTrie) -> Self {
        Self {
            trie,
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let trie = RadixTrie::build(words);
        log::info!(
            "Dictionary built: {} words, {} nodes",
            trie.word_count(),
            trie.node_count()
        );
        Self::new(trie)
    }

    pub fn trie(&self) -> &RadixTrie {
        &self.trie
    }

    pub fn has_word(&self, word: &str) -> bool {
        let upper = word.to_uppercase();
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(&hit) = cache.get(&upper) {
            return hit;
        }

        let found = self.trie.contains_upper(&upper);
        log::debug!("Dictionary lookup {upper:?} -> {found}");
        cache.insert(upper, found);
        found
    }

    pub fn validate_words<I, S>(&self, words: I) -> WordValidation
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut result = WordValidation::default();
        for word in words {
            let word = word.as_ref();
            if self.has_word(word) {
                result.valid.push(word.to_string());
            } else {
                result.invalid.push(word.to_string());
            }
        }
        result.all_valid = result.invalid.is_empty();
        result
    }

    /// Number of memoized queries.
    pub fn cached_queries(&self) -> usize {
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
