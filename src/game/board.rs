use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::BOARD_SIZE;
use crate::dictionary::{Dictionary, WordValidation};
use crate::game::placement::{check_placement, PlacementViolation};
use crate::game::tile::{LetterTile, PlacedLetter, WILDCARD_GLYPH};
use crate::game::tile_bonus::BonusLayout;
use crate::game::word::{Axis, Word};
use crate::scoring::scoring::move_score;

pub type Grid = [[Option<PlacedLetter>; BOARD_SIZE]; BOARD_SIZE];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("cell ({row}, {col}) is outside the board")]
    OutOfBounds { row: usize, col: usize },
    #[error("cell ({row}, {col}) is already occupied")]
    OccupiedCell { row: usize, col: usize },
    #[error("cell ({row}, {col}) holds a letter from an earlier turn")]
    CommittedLetter { row: usize, col: usize },
    #[error("cell ({row}, {col}) is empty")]
    EmptyCell { row: usize, col: usize },
    #[error("tile at ({row}, {col}) is not a wildcard")]
    NotAWildcard { row: usize, col: usize },
    #[error("snapshot places two letters on ({row}, {col})")]
    DuplicateCell { row: usize, col: usize },
}

/// Placed letters of a board in placement order, as persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub letters: Vec<PlacedLetter>,
}

/// The 15×15 grid and the state of the current turn.
///
/// Letters placed this turn are live until [`Board::finalize_move`] commits
/// them. Committed letters never leave the board.
#[derive(Debug, Clone)]
pub struct Board {
    cells: Grid,
    order: Vec<(usize, usize)>,
    dictionary: Arc<Dictionary>,
    layout: Arc<BonusLayout>,
}

impl Board {
    pub fn new(dictionary: Arc<Dictionary>, layout: Arc<BonusLayout>) -> Self {
        Self {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
            order: Vec::new(),
            dictionary,
            layout,
        }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn layout(&self) -> &BonusLayout {
        &self.layout
    }

    pub(crate) fn shared_dictionary(&self) -> Arc<Dictionary> {
        Arc::clone(&self.dictionary)
    }

    pub(crate) fn shared_layout(&self) -> Arc<BonusLayout> {
        Arc::clone(&self.layout)
    }

    pub fn board_state(&self) -> &Grid {
        &self.cells
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&PlacedLetter> {
        self.cells.get(row)?.get(col)?.as_ref()
    }

    pub fn cell_is_occupied(&self, row: usize, col: usize) -> bool {
        self.cell(row, col).is_some()
    }

    /// In-bounds orthogonal neighbours of a cell.
    pub fn neighbours(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
        [(-1, 0), (1, 0), (0, -1), (0, 1)]
            .into_iter()
            .filter_map(move |(dr, dc)| offset(row, col, dr, dc))
    }

    /// Every letter on the board, in placement order.
    pub fn placed_letters(&self) -> Vec<PlacedLetter> {
        self.order
            .iter()
            .filter_map(|&(row, col)| self.cells[row][col])
            .collect()
    }

    pub fn live_letters(&self) -> Vec<PlacedLetter> {
        self.placed_letters().into_iter().filter(|l| l.live).collect()
    }

    pub fn has_placed_any_letters(&self) -> bool {
        self.order.iter().any(|&(row, col)| self.cells[row][col].is_some_and(|l| l.live))
    }

    pub fn is_first_move(&self) -> bool {
        !self.order.iter().any(|&(row, col)| self.cells[row][col].is_some_and(|l| !l.live))
    }

    pub fn place_letter(&mut self, tile: LetterTile, row: usize, col: usize) -> Result<(), BoardError> {
        check_bounds(row, col)?;
        if self.cells[row][col].is_some() {
            return Err(BoardError::OccupiedCell { row, col });
        }

        self.cells[row][col] = Some(PlacedLetter {
            tile,
            row,
            col,
            live: true,
        });
        self.order.push((row, col));
        log::debug!("Placed {:?} at ({row}, {col})", tile.glyph);
        Ok(())
    }

    /// Takes a live letter back off the board. An empty cell is a no-op;
    /// committed letters are refused. A wildcard comes back blank.
    pub fn remove_letter(&mut self, row: usize, col: usize) -> Result<Option<LetterTile>, BoardError> {
        check_bounds(row, col)?;
        let Some(placed) = self.cells[row][col] else {
            return Ok(None);
        };
        if !placed.live {
            log::warn!("Refused to remove committed letter at ({row}, {col})");
            return Err(BoardError::CommittedLetter { row, col });
        }

        self.cells[row][col] = None;
        self.order.retain(|&pos| pos != (row, col));

        let mut tile = placed.tile;
        if tile.wildcard {
            tile.glyph = WILDCARD_GLYPH;
        }
        Ok(Some(tile))
    }

    /// Removes every live letter and hands the tiles back.
    pub fn reset_move(&mut self) -> Vec<LetterTile> {
        let live: Vec<(usize, usize)> = self.live_letters().iter().map(|l| (l.row, l.col)).collect();
        live.into_iter()
            .filter_map(|(row, col)| self.remove_letter(row, col).ok().flatten())
            .collect()
    }

    /// Gives a live wildcard the letter it stands for. Its value stays 0.
    pub fn assign_wildcard(&mut self, row: usize, col: usize, glyph: char) -> Result<(), BoardError> {
        check_bounds(row, col)?;
        let placed = self.cells[row][col]
            .as_mut()
            .ok_or(BoardError::EmptyCell { row, col })?;
        if !placed.live {
            return Err(BoardError::CommittedLetter { row, col });
        }
        if !placed.tile.wildcard {
            return Err(BoardError::NotAWildcard { row, col });
        }
        placed.tile.glyph = glyph.to_uppercase().next().unwrap_or(glyph);
        Ok(())
    }

    pub fn check_placement(&self) -> Result<(), PlacementViolation> {
        check_placement(self)
    }

    pub fn is_valid_placement(&self) -> bool {
        self.check_placement().is_ok()
    }

    /// Commits every live letter. Calling it with nothing live changes nothing.
    pub fn finalize_move(&mut self) {
        let mut committed = 0;
        for cell in self.cells.iter_mut().flatten().flatten() {
            if cell.live {
                cell.live = false;
                committed += 1;
            }
        }
        if committed > 0 {
            log::info!("Finalized move with {committed} letters");
        }
    }

    /// The run through this turn's letters, as a string.
    pub fn placed_word(&self) -> Option<String> {
        self.placed_run()
            .map(|letters| letters.iter().map(PlacedLetter::glyph).collect())
    }

    /// The run through this turn's letters as a scorable word, when it has at
    /// least two letters.
    pub fn placed_word_run(&self) -> Option<Word> {
        let letters = self.placed_run()?;
        if letters.len() < 2 {
            return None;
        }
        let axis = if letters[0].row == letters[1].row {
            Axis::Horizontal
        } else {
            Axis::Vertical
        };
        Some(Word::from_placed(axis, &letters, &self.layout))
    }

    fn placed_run(&self) -> Option<Vec<PlacedLetter>> {
        let live = self.live_letters();
        let first = *live.first()?;

        let axis = if live.len() == 1 {
            let has_neighbour = |dr, dc| {
                offset(first.row, first.col, dr, dc).is_some_and(|(r, c)| self.cell_is_occupied(r, c))
            };
            if has_neighbour(-1, 0) || has_neighbour(1, 0) {
                Axis::Vertical
            } else if has_neighbour(0, -1) || has_neighbour(0, 1) {
                Axis::Horizontal
            } else {
                return Some(vec![first]);
            }
        } else if live.iter().all(|l| l.row == first.row) {
            Axis::Horizontal
        } else {
            Axis::Vertical
        };

        let anchor = live
            .iter()
            .map(|l| (l.row, l.col))
            .min()
            .unwrap_or((first.row, first.col));
        Some(self.run_through(anchor, axis))
    }

    /// Maximal occupied run along `axis` that contains `anchor`.
    fn run_through(&self, anchor: (usize, usize), axis: Axis) -> Vec<PlacedLetter> {
        let (dr, dc) = axis.step();
        let mut start = anchor;
        while let Some(prev) = offset(start.0, start.1, -dr, -dc).filter(|&(r, c)| self.cell_is_occupied(r, c)) {
            start = prev;
        }

        let mut letters = Vec::new();
        let mut pos = Some(start);
        while let Some(letter) = pos.and_then(|(r, c)| self.cell(r, c)) {
            letters.push(*letter);
            pos = offset(letter.row, letter.col, dr, dc);
        }
        letters
    }

    /// Every run of two or more letters: rows left to right, then columns top
    /// to bottom.
    pub fn all_words(&self) -> Vec<Word> {
        let mut words = Vec::new();
        for row in 0..BOARD_SIZE {
            self.collect_runs((0..BOARD_SIZE).map(|col| (row, col)), Axis::Horizontal, &mut words);
        }
        for col in 0..BOARD_SIZE {
            self.collect_runs((0..BOARD_SIZE).map(|row| (row, col)), Axis::Vertical, &mut words);
        }
        words
    }

    fn collect_runs<I>(&self, line: I, axis: Axis, words: &mut Vec<Word>)
    where
        I: Iterator<Item = (usize, usize)>,
    {
        let mut run: Vec<PlacedLetter> = Vec::new();
        for (row, col) in line {
            match self.cells[row][col] {
                Some(letter) => run.push(letter),
                None => {
                    if run.len() >= 2 {
                        words.push(Word::from_placed(axis, &run, &self.layout));
                    }
                    run.clear();
                }
            }
        }
        if run.len() >= 2 {
            words.push(Word::from_placed(axis, &run, &self.layout));
        }
    }

    /// Score of the current move: every word with at least one live letter.
    pub fn move_score(&self) -> u32 {
        move_score(&self.all_words())
    }

    pub fn is_valid_word(&self) -> bool {
        self.placed_word()
            .is_some_and(|word| self.dictionary.has_word(&word))
    }

    pub fn validate_all_words(&self) -> WordValidation {
        self.dictionary
            .validate_words(self.all_words().iter().map(Word::text))
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            letters: self.placed_letters(),
        }
    }

    /// Replaces the board contents with `snapshot`. On error the board is left
    /// as it was.
    pub fn restore(&mut self, snapshot: BoardSnapshot) -> Result<(), BoardError> {
        let mut cells: Grid = [[None; BOARD_SIZE]; BOARD_SIZE];
        let mut order = Vec::with_capacity(snapshot.letters.len());

        for letter in snapshot.letters {
            let (row, col) = (letter.row, letter.col);
            check_bounds(row, col)?;
            if cells[row][col].is_some() {
                return Err(BoardError::DuplicateCell { row, col });
            }
            cells[row][col] = Some(letter);
            order.push((row, col));
        }

        self.cells = cells;
        self.order = order;
        Ok(())
    }
}

fn check_bounds(row: usize, col: usize) -> Result<(), BoardError> {
    if row < BOARD_SIZE && col < BOARD_SIZE {
        Ok(())
    } else {
        Err(BoardError::OutOfBounds { row, col })
    }
}

fn offset(row: usize, col: usize, dr: isize, dc: isize) -> Option<(usize, usize)> {
    let row = row.checked_add_signed(dr)?;
    let col = col.checked_add_signed(dc)?;
    (row < BOARD_SIZE && col < BOARD_SIZE).then_some((row, col))
}
