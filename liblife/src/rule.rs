//! The standard B3/S23 transition.

use crate::board::TileState;

/// Live neighbor count that brings a dead tile to life.
pub const BIRTH: usize = 3;

/// Live neighbor counts that keep a live tile alive.
pub const SURVIVE: [usize; 2] = [2, 3];

/// Next state of a tile given its current state and live neighbor count.
pub fn next_state(tile: TileState, alive_neighbors: usize) -> TileState {
    let alive = match tile {
        TileState::Alive => SURVIVE.contains(&alive_neighbors),
        TileState::Dead => alive_neighbors == BIRTH,
    };

    if alive {
        TileState::Alive
    } else {
        TileState::Dead
    }
}
