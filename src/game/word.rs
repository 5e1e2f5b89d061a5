use serde::{Deserialize, Serialize};

use crate::game::tile::PlacedLetter;
use crate::game::tile_bonus::{BonusLayout, TileBonus};
use crate::scoring::scoring::word_score;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Row and column step taken when moving forward along the axis.
    pub fn step(self) -> (isize, isize) {
        match self {
            Axis::Horizontal => (0, 1),
            Axis::Vertical => (1, 0),
        }
    }
}

/// One cell of a word, with everything scoring needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordLetter {
    pub glyph: char,
    pub points: u32,
    pub live: bool,
    pub bonus: TileBonus,
    pub row: usize,
    pub col: usize,
}

/// A contiguous run of at least two letters along one axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    axis: Axis,
    letters: Vec<WordLetter>,
}

impl Word {
    /// `letters` must be in board order along `axis`.
    pub fn from_placed(axis: Axis, letters: &[PlacedLetter], layout: &BonusLayout) -> Self {
        let letters = letters
            .iter()
            .map(|placed| WordLetter {
                glyph: placed.glyph(),
                points: placed.tile.points(),
                live: placed.live,
                bonus: layout.bonus_at(placed.row, placed.col),
                row: placed.row,
                col: placed.col,
            })
            .collect();
        Self { axis, letters }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn letters(&self) -> &[WordLetter] {
        &self.letters
    }

    /// (row, col) of the first letter.
    pub fn start(&self) -> Option<(usize, usize)> {
        self.letters.first().map(|l| (l.row, l.col))
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn text(&self) -> String {
        self.letters.iter().map(|l| l.glyph).collect()
    }

    /// Words made only of letters from earlier turns are not scored again.
    pub fn include_in_scoring(&self) -> bool {
        self.letters.iter().any(|l| l.live)
    }

    pub fn score(&self) -> u32 {
        word_score(self)
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::tile::LetterTile;

    fn placed(glyph: char, value: u32, row: usize, col: usize, live: bool) -> PlacedLetter {
        PlacedLetter {
            tile: LetterTile::new(u32::from(glyph), glyph, value),
            row,
            col,
            live,
        }
    }

    #[test]
    fn test_text_and_start() {
        let layout = BonusLayout::standard();
        let word = Word::from_placed(
            Axis::Horizontal,
            &[placed('B', 4, 7, 6, true), placed('O', 2, 7, 7, true), placed('K', 3, 7, 8, true)],
            &layout,
        );

        assert_eq!(word.text(), "BOK");
        assert_eq!(word.to_string(), "BOK");
        assert_eq!(word.start(), Some((7, 6)));
        assert_eq!(word.len(), 3);
        assert_eq!(word.letters()[0].bonus, TileBonus::Plain);
    }

    #[test]
    fn test_include_in_scoring_needs_a_live_letter() {
        let layout = BonusLayout::standard();
        let old = Word::from_placed(
            Axis::Vertical,
            &[placed('O', 2, 0, 1, false), placed('X', 10, 1, 1, false)],
            &layout,
        );
        let new = Word::from_placed(
            Axis::Vertical,
            &[placed('O', 2, 0, 1, false), placed('X', 10, 1, 1, true)],
            &layout,
        );

        assert!(!old.include_in_scoring());
        assert!(new.include_in_scoring());
    }
}
