use crate::game::letter_pool::LetterPool;
use crate::game::tile::{LetterTile, WILDCARD_GLYPH};

/// Glyph, point value and number of copies of one kind of tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterKind {
    pub glyph: char,
    pub value: u32,
    pub count: usize,
    pub wildcard: bool,
}

const fn letter(glyph: char, value: u32, count: usize) -> LetterKind {
    LetterKind {
        glyph,
        value,
        count,
        wildcard: false,
    }
}

/// Swedish tile distribution, 114 tiles in total.
pub const STANDARD_LETTERS: &[LetterKind] = &[
    letter('D', 1, 7),
    letter('O', 2, 5),
    letter('R', 1, 9),
    letter('Ä', 4, 2),
    letter('S', 1, 8),
    letter('Å', 4, 2),
    letter('E', 1, 8),
    letter('T', 1, 7),
    LetterKind {
        glyph: WILDCARD_GLYPH,
        value: 0,
        count: 2,
        wildcard: true,
    },
    letter('L', 1, 7),
    letter('A', 1, 9),
    letter('F', 4, 2),
    letter('Ö', 4, 2),
    letter('I', 1, 6),
    letter('N', 1, 7),
    letter('Y', 8, 2),
    letter('H', 3, 3),
    letter('M', 3, 3),
    letter('G', 2, 4),
    letter('B', 4, 2),
    letter('K', 3, 3),
    letter('C', 8, 2),
    letter('X', 10, 1),
    letter('P', 3, 3),
    letter('V', 4, 2),
    letter('Z', 10, 1),
    letter('J', 8, 1),
    letter('U', 3, 3),
    letter('Q', 10, 1),
];

pub fn create_letter_pool() -> LetterPool {
    create_letter_pool_from(STANDARD_LETTERS)
}

/// Expands `kinds` into individual tiles with ids 0, 1, 2, ...
pub fn create_letter_pool_from(kinds: &'static [LetterKind]) -> LetterPool {
    let mut next_id = 0;
    let mut tiles = Vec::with_capacity(kinds.iter().map(|k| k.count).sum());

    for kind in kinds {
        for _ in 0..kind.count {
            tiles.push(new_tile(next_id, kind));
            next_id += 1;
        }
    }

    LetterPool::new(tiles, kinds)
}

pub(crate) fn new_tile(id: u32, kind: &LetterKind) -> LetterTile {
    if kind.wildcard {
        LetterTile::new_wildcard(id)
    } else {
        LetterTile::new(id, kind.glyph, kind.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_create_letter_pool() {
        let pool = create_letter_pool();

        assert_eq!(
            pool.remaining(),
            114,
            "The pool should contain exactly 114 tiles, but found {}.",
            pool.remaining()
        );

        let composition = pool.composition();
        assert_eq!(composition.get(&'R'), Some(&9));
        assert_eq!(composition.get(&'X'), Some(&1));
        assert_eq!(composition.get(&WILDCARD_GLYPH), Some(&2));
    }

    #[test]
    fn test_tile_ids_are_unique() {
        let pool = create_letter_pool();
        let ids: HashSet<u32> = pool.tiles().iter().map(|t| t.id).collect();

        assert_eq!(ids.len(), pool.remaining());
    }

    #[test]
    fn test_wildcards_carry_no_value() {
        let pool = create_letter_pool();
        let wildcards: Vec<&LetterTile> = pool.tiles().iter().filter(|t| t.wildcard).collect();

        assert_eq!(wildcards.len(), 2);
        assert!(wildcards.iter().all(|t| t.value == 0 && t.glyph == WILDCARD_GLYPH));
    }
}
