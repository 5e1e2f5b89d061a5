//! Game constants and tunables.

use serde::{Deserialize, Serialize};

/// Width and height of the board.
pub const BOARD_SIZE: usize = 15;

/// Tiles a player holds between turns.
pub const RACK_SIZE: usize = 7;

/// Environment variable naming the default word list file.
pub const WORD_LIST_ENV: &str = "WORD_LIST_SRC";

/// Shortest word kept from a raw list.
pub const MIN_WORD_LEN: usize = 2;

/// Which words from a raw list are kept for play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordListConfig {
    pub min_len: usize,
    pub max_len: usize,
}

impl Default for WordListConfig {
    fn default() -> Self {
        Self {
            min_len: MIN_WORD_LEN,
            max_len: BOARD_SIZE,
        }
    }
}
