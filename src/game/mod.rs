pub mod board;
pub mod create_letter_pool;
pub mod letter_pool;
pub mod placement;
pub mod player;
pub mod rack;
pub mod session;
pub mod tile;
pub mod tile_bonus;
pub mod word;
