//! # Word Link Game Library
//!
//! Core of a tile-based word game on a 15×15 board.
//!
//! ## Features
//!
//! - **Dictionary**: compressed radix trie with a memoizing lookup cache
//! - **Board Engine**: tile placement, placement rules, word extraction
//! - **Scoring**: letter and word multipliers from the standard bonus layout
//! - **Letter Pool**: weighted tile bag with draws and exchanges
//! - **Game Session**: rack, player score and snapshot persistence
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use word_link::{BonusLayout, Dictionary, GameSession};
//!
//! let dictionary = Arc::new(Dictionary::from_words(["ox", "box"]));
//! let session = GameSession::new(dictionary, Arc::new(BonusLayout::standard()));
//! assert_eq!(session.rack().len(), 7);
//! ```

// ============================================================================
// PUBLIC API MODULES
// ============================================================================

/// Game constants and word list settings
pub mod config;

/// Persistence through a key-value store
pub mod data;

/// Radix trie, lookup cache and word lists
pub mod dictionary;

/// Board, tiles, letter pool and game session
pub mod game;

/// Logger setup for binaries
pub mod logging;

/// Word and move scoring
pub mod scoring;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

pub use data::{JsonFileStore, KeyValueStore, MemoryStore, StoreError};
pub use dictionary::{Dictionary, RadixTrie, WordValidation};
pub use game::board::{Board, BoardError, BoardSnapshot};
pub use game::letter_pool::{LetterPool, PoolError};
pub use game::placement::PlacementViolation;
pub use game::session::{GameSession, TurnError, TurnOutcome};
pub use game::tile::{LetterTile, PlacedLetter};
pub use game::tile_bonus::{BonusLayout, TileBonus};
pub use game::word::Word;

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Main error type for the Word Link library
#[derive(Debug, thiserror::Error)]
pub enum WordLinkError {
    #[error("Board error: {0}")]
    Board(#[from] BoardError),

    #[error("Turn error: {0}")]
    Turn(#[from] TurnError),

    #[error("Pool error: {0}")]
    Pool(#[from] PoolError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, WordLinkError>;

// ============================================================================
// LIBRARY VERSION INFO
// ============================================================================

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
