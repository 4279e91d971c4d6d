//! Labyrinth model: tiles, the grid with its held tiles, per-turn game state
//! and the push transform. Every transition returns a new value.

mod grid;
mod player;
mod position;
mod state;
mod tile;

pub use grid::Grid;
pub use player::Player;
pub use position::{Direction, Position};
pub use state::{GameState, Item, ItemLocation, PlayerInfo, Quest, TurnType};
pub use tile::Tile;

#[cfg(test)]
pub(crate) use grid::tests::sample_grid;
#[cfg(test)]
pub(crate) use state::tests::sample_state;
