use serde::{Deserialize, Serialize};

use crate::config::BOARD_SIZE;

/// Cell that the first move of a game has to cover.
pub const CENTER: (usize, usize) = (7, 7);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TileBonus {
    #[default]
    Plain,
    DoubleLetter,
    TripleLetter,
    DoubleWord,
    TripleWord,
}

impl TileBonus {
    pub fn letter_multiplier(self) -> u32 {
        match self {
            TileBonus::DoubleLetter => 2,
            TileBonus::TripleLetter => 3,
            _ => 1,
        }
    }

    pub fn word_multiplier(self) -> u32 {
        match self {
            TileBonus::DoubleWord => 2,
            TileBonus::TripleWord => 3,
            _ => 1,
        }
    }
}

use TileBonus::{DoubleLetter as DL, DoubleWord as DW, TripleLetter as TL, TripleWord as TW};

/// Special cells as (row, col, bonus). Everything else is plain.
#[rustfmt::skip]
const SPECIAL_CELLS: &[(usize, usize, TileBonus)] = &[
    (0, 0, TW), (0, 3, DL), (0, 7, TW), (0, 11, DL), (0, 14, TW),
    (1, 1, DW), (1, 5, TL), (1, 9, TL), (1, 13, DW),
    (2, 2, DW), (2, 6, DL), (2, 8, DL), (2, 12, DW),
    (3, 0, DL), (3, 3, DW), (3, 7, DL), (3, 11, DW), (3, 14, DL),
    (4, 4, DW), (4, 10, DW),
    (5, 1, TL), (5, 5, TL), (5, 9, TL), (5, 13, TL),
    (6, 2, DL), (6, 6, DL), (6, 8, DL), (6, 12, DL),
    (7, 0, TW), (7, 3, DL), (7, 11, DL), (7, 14, TW),
    (8, 2, DL), (8, 6, DL), (8, 8, DL), (8, 12, DL),
    (9, 1, TL), (9, 5, TL), (9, 9, TL), (9, 13, TL),
    (10, 4, DW), (10, 10, DW),
    (11, 0, DL), (11, 3, DW), (11, 7, DL), (11, 11, DW), (11, 14, DL),
    (12, 2, DW), (12, 6, DL), (12, 8, DL), (12, 12, DW),
    (13, 1, DW), (13, 5, TL), (13, 9, TL), (13, 13, DW),
    (14, 0, TW), (14, 3, DL), (14, 7, TW), (14, 11, DL), (14, 14, TW),
];

/// Coordinate → bonus lookup for the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BonusLayout {
    cells: [[TileBonus; BOARD_SIZE]; BOARD_SIZE],
}

impl BonusLayout {
    pub fn standard() -> Self {
        let mut cells = [[TileBonus::Plain; BOARD_SIZE]; BOARD_SIZE];
        for &(row, col, bonus) in SPECIAL_CELLS {
            cells[row][col] = bonus;
        }
        Self { cells }
    }

    /// Layout without any bonus cells.
    pub fn plain() -> Self {
        Self {
            cells: [[TileBonus::Plain; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Out-of-range coordinates are plain.
    pub fn bonus_at(&self, row: usize, col: usize) -> TileBonus {
        self.cells
            .get(row)
            .and_then(|cells| cells.get(col))
            .copied()
            .unwrap_or_default()
    }
}

impl Default for BonusLayout {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multipliers() {
        assert_eq!(TileBonus::Plain.letter_multiplier(), 1);
        assert_eq!(TileBonus::DoubleLetter.letter_multiplier(), 2);
        assert_eq!(TileBonus::TripleLetter.letter_multiplier(), 3);
        assert_eq!(TileBonus::DoubleWord.letter_multiplier(), 1);
        assert_eq!(TileBonus::TripleWord.letter_multiplier(), 1);

        assert_eq!(TileBonus::Plain.word_multiplier(), 1);
        assert_eq!(TileBonus::DoubleLetter.word_multiplier(), 1);
        assert_eq!(TileBonus::TripleLetter.word_multiplier(), 1);
        assert_eq!(TileBonus::DoubleWord.word_multiplier(), 2);
        assert_eq!(TileBonus::TripleWord.word_multiplier(), 3);
    }

    #[test]
    fn test_standard_layout_cells() {
        let layout = BonusLayout::standard();

        assert_eq!(layout.bonus_at(0, 0), TileBonus::TripleWord);
        assert_eq!(layout.bonus_at(1, 1), TileBonus::DoubleWord);
        assert_eq!(layout.bonus_at(0, 3), TileBonus::DoubleLetter);
        assert_eq!(layout.bonus_at(1, 5), TileBonus::TripleLetter);
        assert_eq!(layout.bonus_at(0, 1), TileBonus::Plain);
        assert_eq!(layout.bonus_at(CENTER.0, CENTER.1), TileBonus::Plain);
        assert_eq!(layout.bonus_at(15, 0), TileBonus::Plain);
    }

    #[test]
    fn test_standard_layout_is_symmetric() {
        let layout = BonusLayout::standard();
        let last = BOARD_SIZE - 1;

        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let bonus = layout.bonus_at(row, col);
                assert_eq!(bonus, layout.bonus_at(col, row), "transpose at ({row},{col})");
                assert_eq!(bonus, layout.bonus_at(last - row, col), "vertical at ({row},{col})");
                assert_eq!(bonus, layout.bonus_at(row, last - col), "horizontal at ({row},{col})");
            }
        }
    }

    #[test]
    fn test_special_cell_count() {
        let layout = BonusLayout::standard();
        let special = (0..BOARD_SIZE)
            .flat_map(|row| (0..BOARD_SIZE).map(move |col| (row, col)))
            .filter(|&(row, col)| layout.bonus_at(row, col) != TileBonus::Plain)
            .count();

        assert_eq!(special, SPECIAL_CELLS.len());
    }
}
