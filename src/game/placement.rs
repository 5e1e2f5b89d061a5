//! Rules a turn's live letters must satisfy before the move can be played.

use crate::game::board::Board;
use crate::game::tile::PlacedLetter;
use crate::game::tile_bonus::CENTER;

/// First rule a set of live letters breaks, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum PlacementViolation {
    #[error("no letters placed")]
    NoLettersPlaced,
    #[error("the first move must cover the center cell")]
    InvalidFirstMove,
    #[error("letters must share a row or a column")]
    NonCollinear,
    #[error("letters must form one unbroken line")]
    GapInSequence,
    #[error("letters must touch a word already on the board")]
    NotAdjacentToExisting,
}

pub fn check_placement(board: &Board) -> Result<(), PlacementViolation> {
    let live = board.live_letters();
    let Some(first) = live.first() else {
        return Err(PlacementViolation::NoLettersPlaced);
    };

    let first_move = board.is_first_move();
    if first_move && !board.cell_is_occupied(CENTER.0, CENTER.1) {
        return Err(PlacementViolation::InvalidFirstMove);
    }

    let same_row = live.iter().all(|l| l.row == first.row);
    let same_col = live.iter().all(|l| l.col == first.col);
    if !same_row && !same_col {
        return Err(PlacementViolation::NonCollinear);
    }

    if !is_contiguous(board, &live, same_row) {
        return Err(PlacementViolation::GapInSequence);
    }

    if !first_move && !live.iter().any(|l| touches_committed(board, l)) {
        return Err(PlacementViolation::NotAdjacentToExisting);
    }

    Ok(())
}

/// Every cell between the outermost live letters is filled, by a live or a
/// committed letter.
fn is_contiguous(board: &Board, live: &[PlacedLetter], horizontal: bool) -> bool {
    let along = |l: &PlacedLetter| if horizontal { l.col } else { l.row };
    let (Some(min), Some(max)) = (live.iter().map(along).min(), live.iter().map(along).max()) else {
        return true;
    };
    let fixed = if horizontal { live[0].row } else { live[0].col };

    (min..=max).all(|i| {
        if horizontal {
            board.cell_is_occupied(fixed, i)
        } else {
            board.cell_is_occupied(i, fixed)
        }
    })
}

fn touches_committed(board: &Board, letter: &PlacedLetter) -> bool {
    board
        .neighbours(letter.row, letter.col)
        .any(|(row, col)| board.cell(row, col).is_some_and(|n| !n.live))
}
