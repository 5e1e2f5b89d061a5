use serde::{Deserialize, Serialize};

use crate::config::RACK_SIZE;
use crate::game::letter_pool::LetterPool;
use crate::game::tile::LetterTile;

/// Tiles in a player's hand.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rack {
    tiles: Vec<LetterTile>,
}

impl Rack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tiles(&self) -> &[LetterTile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn contains(&self, tile_id: u32) -> bool {
        self.tiles.iter().any(|t| t.id == tile_id)
    }

    pub fn take(&mut self, tile_id: u32) -> Option<LetterTile> {
        let index = self.tiles.iter().position(|t| t.id == tile_id)?;
        Some(self.tiles.remove(index))
    }

    pub fn put_back(&mut self, tile: LetterTile) {
        self.tiles.push(tile);
    }

    /// Draws from `pool` until the rack is full or the pool is empty.
    /// Returns how many tiles were drawn.
    pub fn refill(&mut self, pool: &mut LetterPool) -> usize {
        let missing = RACK_SIZE.saturating_sub(self.tiles.len());
        let drawn = pool.draw_letters(missing);
        let count = drawn.len();
        self.tiles.extend(drawn);
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::create_letter_pool::create_letter_pool;

    #[test]
    fn test_refill_tops_up_to_rack_size() {
        let mut pool = create_letter_pool();
        let mut rack = Rack::new();

        assert_eq!(rack.refill(&mut pool), RACK_SIZE);
        assert_eq!(rack.len(), RACK_SIZE);
        assert_eq!(rack.refill(&mut pool), 0);

        let id = rack.tiles()[0].id;
        let tile = rack.take(id).unwrap();
        assert!(!rack.contains(id));
        assert_eq!(rack.refill(&mut pool), 1);

        rack.put_back(tile);
        assert_eq!(rack.len(), RACK_SIZE + 1);
    }

    #[test]
    fn test_take_unknown_tile() {
        let mut rack = Rack::new();
        assert!(rack.take(42).is_none());
    }
}
