//! One player's game: board, pool, rack and score, plus the checks a move goes
//! through before it is played.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::data::store::{load_json, save_json, KeyValueStore};
use crate::dictionary::Dictionary;
use crate::game::board::{Board, BoardError, BoardSnapshot};
use crate::game::create_letter_pool::create_letter_pool;
use crate::game::letter_pool::{LetterPool, PoolError, PoolSnapshot};
use crate::game::placement::PlacementViolation;
use crate::game::player::Player;
use crate::game::rack::Rack;
use crate::game::tile::LetterTile;
use crate::game::tile_bonus::BonusLayout;

pub const KEY_BOARD: &str = "board";
pub const KEY_POOL: &str = "letterPool";
pub const KEY_RACK: &str = "rack";
pub const KEY_PLAYER: &str = "playerOne";
pub const KEY_GAME_STARTED: &str = "gameStarted";
pub const KEY_SESSION: &str = "session";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TurnError {
    #[error("no letters placed")]
    NoLettersPlaced,

    #[error("invalid placement: {0}")]
    Placement(#[from] PlacementViolation),

    #[error("{0} is not a valid word")]
    InvalidWord(String),

    #[error("invalid words: {}", .0.join(", "))]
    InvalidWords(Vec<String>),

    #[error("tile {0} is not on the rack")]
    UnknownTile(u32),

    #[error("letters are still on the board")]
    MoveInProgress,

    #[error(transparent)]
    Board(#[from] BoardError),

    #[error(transparent)]
    Pool(#[from] PoolError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredWord {
    pub text: String,
    pub score: u32,
}

/// Result of a move that was played.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    pub word: String,
    pub score: u32,
    pub words: Vec<ScoredWord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct SessionMeta {
    id: Uuid,
    saved_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    id: Uuid,
    board: Board,
    pool: LetterPool,
    rack: Rack,
    player: Player,
}

impl GameSession {
    pub fn new(dictionary: Arc<Dictionary>, layout: Arc<BonusLayout>) -> Self {
        Self::with_pool(dictionary, layout, create_letter_pool())
    }

    pub fn with_pool(dictionary: Arc<Dictionary>, layout: Arc<BonusLayout>, mut pool: LetterPool) -> Self {
        let mut rack = Rack::new();
        rack.refill(&mut pool);

        let session = Self {
            id: Uuid::new_v4(),
            board: Board::new(dictionary, layout),
            pool,
            rack,
            player: Player::default(),
        };
        log::info!("Started game session {}", session.id);
        session
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn pool(&self) -> &LetterPool {
        &self.pool
    }

    pub fn rack(&self) -> &Rack {
        &self.rack
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Moves a tile from the rack onto the board. The rack is untouched when
    /// the placement fails.
    pub fn place_from_rack(&mut self, tile_id: u32, row: usize, col: usize) -> Result<(), TurnError> {
        let tile = *self
            .rack
            .tiles()
            .iter()
            .find(|t| t.id == tile_id)
            .ok_or(TurnError::UnknownTile(tile_id))?;

        self.board.place_letter(tile, row, col)?;
        self.rack.take(tile_id);
        Ok(())
    }

    /// Returns a live tile from the board to the rack.
    pub fn take_back(&mut self, row: usize, col: usize) -> Result<Option<LetterTile>, TurnError> {
        let tile = self.board.remove_letter(row, col)?;
        if let Some(tile) = tile {
            self.rack.put_back(tile);
        }
        Ok(tile)
    }

    pub fn assign_wildcard(&mut self, row: usize, col: usize, glyph: char) -> Result<(), TurnError> {
        Ok(self.board.assign_wildcard(row, col, glyph)?)
    }

    pub fn reset_move(&mut self) {
        for tile in self.board.reset_move() {
            self.rack.put_back(tile);
        }
    }

    /// Plays the live letters: checks placement and every word on the board,
    /// then scores, commits and refills the rack.
    pub fn finish_move(&mut self) -> Result<TurnOutcome, TurnError> {
        if !self.board.has_placed_any_letters() {
            return Err(TurnError::NoLettersPlaced);
        }
        self.board.check_placement()?;

        let word = self.board.placed_word().unwrap_or_default();
        if !self.board.is_valid_word() {
            return Err(TurnError::InvalidWord(word));
        }

        let validation = self.board.validate_all_words();
        if !validation.all_valid {
            return Err(TurnError::InvalidWords(validation.invalid));
        }

        let words: Vec<ScoredWord> = self
            .board
            .all_words()
            .iter()
            .filter(|w| w.include_in_scoring())
            .map(|w| ScoredWord {
                text: w.text(),
                score: w.score(),
            })
            .collect();
        let score = words.iter().map(|w| w.score).sum();

        self.player.record_move(word.clone(), score);
        self.board.finalize_move();
        self.rack.refill(&mut self.pool);

        log::info!("Played {word} for {score} points (total {})", self.player.score);
        Ok(TurnOutcome { word, score, words })
    }

    /// Swaps rack tiles for fresh ones from the pool. Not allowed while a
    /// move is in progress.
    pub fn exchange(&mut self, tile_ids: &[u32]) -> Result<(), TurnError> {
        if self.board.has_placed_any_letters() {
            return Err(TurnError::MoveInProgress);
        }
        if let Some(&missing) = tile_ids.iter().find(|&&id| !self.rack.contains(id)) {
            return Err(TurnError::UnknownTile(missing));
        }

        let tiles: Vec<LetterTile> = tile_ids.iter().filter_map(|&id| self.rack.take(id)).collect();
        match self.pool.switch_letters(tiles.clone()) {
            Ok(fresh) => {
                for tile in fresh {
                    self.rack.put_back(tile);
                }
                log::debug!("Exchanged {} tiles", tiles.len());
                Ok(())
            }
            Err(e) => {
                for tile in tiles {
                    self.rack.put_back(tile);
                }
                Err(e.into())
            }
        }
    }

    /// Starts over with an empty board, a full pool and a new rack.
    pub fn restart(&mut self) {
        let dictionary = self.board.shared_dictionary();
        let layout = self.board.shared_layout();
        *self = Self::new(dictionary, layout);
    }

    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> crate::Result<()> {
        save_json(store, KEY_BOARD, &self.board.snapshot())?;
        save_json(store, KEY_POOL, &self.pool.snapshot())?;
        save_json(store, KEY_RACK, &self.rack)?;
        save_json(store, KEY_PLAYER, &self.player)?;
        save_json(
            store,
            KEY_SESSION,
            &SessionMeta {
                id: self.id,
                saved_at: Utc::now(),
            },
        )?;
        save_json(store, KEY_GAME_STARTED, &true)?;
        log::info!("Saved game session {}", self.id);
        Ok(())
    }

    /// Rebuilds a saved session. `None` when no game was saved.
    pub fn load<S: KeyValueStore + ?Sized>(
        store: &S,
        dictionary: Arc<Dictionary>,
        layout: Arc<BonusLayout>,
    ) -> crate::Result<Option<Self>> {
        let started: Option<bool> = load_json(store, KEY_GAME_STARTED)?;
        if started != Some(true) {
            return Ok(None);
        }

        let mut board = Board::new(dictionary, layout);
        let board_snapshot: BoardSnapshot = load_json(store, KEY_BOARD)?.unwrap_or_default();
        board.restore(board_snapshot)?;

        let mut pool = create_letter_pool();
        if let Some(snapshot) = load_json::<_, PoolSnapshot>(store, KEY_POOL)? {
            pool.restore(snapshot);
        }

        let rack: Rack = load_json(store, KEY_RACK)?.unwrap_or_default();
        let player: Player = load_json(store, KEY_PLAYER)?.unwrap_or_default();
        let id = load_json::<_, SessionMeta>(store, KEY_SESSION)?
            .map_or_else(Uuid::new_v4, |meta| meta.id);

        log::info!("Loaded game session {id}");
        Ok(Some(Self {
            id,
            board,
            pool,
            rack,
            player,
        }))
    }
}
