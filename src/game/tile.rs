use serde::{Deserialize, Serialize};

/// Glyph carried by a wildcard until the player assigns it a letter.
pub const WILDCARD_GLYPH: char = '*';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LetterTile {
    pub id: u32,
    pub glyph: char,
    pub value: u32,
    pub wildcard: bool,
}

impl LetterTile {
    pub fn new(id: u32, glyph: char, value: u32) -> Self {
        Self {
            id,
            glyph,
            value,
            wildcard: false,
        }
    }

    pub fn new_wildcard(id: u32) -> Self {
        Self {
            id,
            glyph: WILDCARD_GLYPH,
            value: 0,
            wildcard: true,
        }
    }

    /// Points the tile is worth on the board. Wildcards are always worth 0,
    /// whatever glyph they were given.
    pub fn points(&self) -> u32 {
        if self.wildcard {
            0
        } else {
            self.value
        }
    }
}

/// A tile bound to a board cell. `live` is true until the move is finalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedLetter {
    #[serde(flatten)]
    pub tile: LetterTile,
    pub row: usize,
    pub col: usize,
    pub live: bool,
}

impl PlacedLetter {
    pub fn glyph(&self) -> char {
        self.tile.glyph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wildcard_is_worth_nothing() {
        let mut tile = LetterTile::new_wildcard(3);
        tile.glyph = 'X';
        tile.value = 10;

        assert_eq!(tile.points(), 0);
        assert_eq!(LetterTile::new(4, 'X', 10).points(), 10);
    }

    #[test]
    fn test_placed_letter_serializes_flat() {
        let placed = PlacedLetter {
            tile: LetterTile::new(1, 'O', 2),
            row: 0,
            col: 1,
            live: true,
        };
        let json = serde_json::to_value(placed).unwrap();

        assert_eq!(json["glyph"], "O");
        assert_eq!(json["value"], 2);
        assert_eq!(json["row"], 0);
        assert_eq!(json["live"], true);
    }
}
