use std::collections::BTreeMap;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::game::create_letter_pool::LetterKind;
use crate::game::tile::{LetterTile, WILDCARD_GLYPH};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    #[error("cannot exchange {requested} tiles, only {available} left in the pool")]
    NotEnoughTiles { requested: usize, available: usize },
}

/// Remaining tiles of a pool, as persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PoolSnapshot {
    pub tiles: Vec<LetterTile>,
}

/// Bag of tiles not yet handed out to a player.
#[derive(Debug, Clone, PartialEq)]
pub struct LetterPool {
    tiles: Vec<LetterTile>,
    kinds: &'static [LetterKind],
}

impl LetterPool {
    pub fn new(tiles: Vec<LetterTile>, kinds: &'static [LetterKind]) -> Self {
        Self { tiles, kinds }
    }

    pub fn tiles(&self) -> &[LetterTile] {
        &self.tiles
    }

    pub fn remaining(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Remaining count per glyph.
    pub fn composition(&self) -> BTreeMap<char, usize> {
        let mut counts = BTreeMap::new();
        for tile in &self.tiles {
            *counts.entry(tile.glyph).or_insert(0) += 1;
        }
        counts
    }

    pub fn draw_letters(&mut self, count: usize) -> Vec<LetterTile> {
        self.draw_letters_with(count, &mut rand::rng())
    }

    /// Removes up to `count` tiles uniformly at random. Returns fewer when the
    /// pool runs dry.
    pub fn draw_letters_with<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) -> Vec<LetterTile> {
        let count = count.min(self.tiles.len());
        let drawn: Vec<LetterTile> = (0..count)
            .map(|_| {
                let index = rng.random_range(0..self.tiles.len());
                self.tiles.swap_remove(index)
            })
            .collect();
        log::debug!("Drew {} tiles, {} left", drawn.len(), self.tiles.len());
        drawn
    }

    pub fn switch_letters(&mut self, letters: Vec<LetterTile>) -> Result<Vec<LetterTile>, PoolError> {
        self.switch_letters_with(letters, &mut rand::rng())
    }

    /// Exchanges `letters` for the same number of fresh tiles. Replacements are
    /// drawn before the exchanged tiles go back into the pool.
    pub fn switch_letters_with<R: Rng + ?Sized>(
        &mut self,
        letters: Vec<LetterTile>,
        rng: &mut R,
    ) -> Result<Vec<LetterTile>, PoolError> {
        if letters.len() > self.tiles.len() {
            return Err(PoolError::NotEnoughTiles {
                requested: letters.len(),
                available: self.tiles.len(),
            });
        }

        let replacements = self.draw_letters_with(letters.len(), rng);
        self.return_letters(letters);
        Ok(replacements)
    }

    /// Puts tiles back into the pool. Wildcards go back blank.
    pub fn return_letters<I: IntoIterator<Item = LetterTile>>(&mut self, letters: I) {
        self.tiles.extend(letters.into_iter().map(|mut tile| {
            if tile.wildcard {
                tile.glyph = WILDCARD_GLYPH;
                tile.value = 0;
            }
            tile
        }));
    }

    /// Configured point value of `glyph`; 0 for wildcards and unknown glyphs.
    pub fn value_of_letter(&self, glyph: char) -> u32 {
        let glyph = glyph.to_uppercase().next().unwrap_or(glyph);
        self.kinds
            .iter()
            .find(|kind| !kind.wildcard && kind.glyph == glyph)
            .map_or(0, |kind| kind.value)
    }

    pub fn snapshot(&self) -> PoolSnapshot {
        PoolSnapshot {
            tiles: self.tiles.clone(),
        }
    }

    pub fn restore(&mut self, snapshot: PoolSnapshot) {
        self.tiles = snapshot.tiles;
    }
}

impl Default for LetterPool {
    fn default() -> Self {
        crate::game::create_letter_pool::create_letter_pool()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::create_letter_pool::{create_letter_pool, STANDARD_LETTERS};
    use assert_matches::assert_matches;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_draw_removes_tiles() {
        let mut pool = create_letter_pool();
        let mut rng = StdRng::seed_from_u64(7);

        let drawn = pool.draw_letters_with(7, &mut rng);

        assert_eq!(drawn.len(), 7);
        assert_eq!(pool.remaining(), 107);
        for tile in &drawn {
            assert!(!pool.tiles().contains(tile), "{tile:?} should have left the pool");
        }
    }

    #[test]
    fn test_draw_more_than_available() {
        let mut pool = create_letter_pool();
        let drawn = pool.draw_letters(150);

        assert_eq!(drawn.len(), 114);
        assert!(pool.is_empty());
        assert!(pool.draw_letters(3).is_empty());
    }

    #[test]
    fn test_switch_returns_exchanged_tiles_to_pool() {
        let mut pool = create_letter_pool();
        let mut rng = StdRng::seed_from_u64(11);
        let hand = pool.draw_letters_with(3, &mut rng);
        let hand_ids: HashSet<u32> = hand.iter().map(|t| t.id).collect();

        let fresh = pool.switch_letters_with(hand.clone(), &mut rng).unwrap();

        assert_eq!(fresh.len(), 3);
        assert_eq!(pool.remaining(), 111);
        assert!(fresh.iter().all(|t| !hand_ids.contains(&t.id)));
        for tile in &hand {
            assert!(pool.tiles().contains(tile));
        }
    }

    #[test]
    fn test_switch_needs_enough_tiles() {
        let mut pool = create_letter_pool();
        let hand = pool.draw_letters(112);

        let result = pool.switch_letters(hand[..3].to_vec());

        assert_matches!(
            result,
            Err(PoolError::NotEnoughTiles { requested: 3, available: 2 })
        );
        assert_eq!(pool.remaining(), 2);
    }

    #[test]
    fn test_returned_wildcard_is_blank_again() {
        let mut pool = LetterPool::new(Vec::new(), STANDARD_LETTERS);
        let mut wildcard = LetterTile::new_wildcard(99);
        wildcard.glyph = 'Q';

        pool.return_letters([wildcard]);

        assert_eq!(pool.tiles()[0].glyph, WILDCARD_GLYPH);
    }

    #[test]
    fn test_value_of_letter() {
        let mut pool = create_letter_pool();
        pool.draw_letters(114);

        assert_eq!(pool.value_of_letter('X'), 10);
        assert_eq!(pool.value_of_letter('o'), 2);
        assert_eq!(pool.value_of_letter('Å'), 4);
        assert_eq!(pool.value_of_letter(WILDCARD_GLYPH), 0);
        assert_eq!(pool.value_of_letter('W'), 0);
    }

    #[test]
    fn test_snapshot_restore() {
        let mut pool = create_letter_pool();
        pool.draw_letters(40);
        let snapshot = pool.snapshot();

        let mut restored = create_letter_pool();
        restored.restore(snapshot);

        assert_eq!(restored, pool);
    }
}
