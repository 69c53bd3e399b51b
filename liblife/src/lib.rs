use std::convert::Infallible;

use board::{GameBoard, TileState};
use log::trace;
use pos::Position;
use rayon::prelude::*;

pub mod board;
pub mod history;
pub mod pattern;
pub mod pos;
pub mod rule;

/// Computes the generation after `board` without touching it.
///
/// Every tile is decided from the frozen input, so the order tiles are visited in doesn't matter.
pub fn step(board: &GameBoard) -> GameBoard {
    let next_tiles = board
        .enumerate_tiles()
        .map(|(tile_pos, tile)| rule::next_state(*tile, board.alive_neighbor_count(tile_pos)))
        .collect();

    GameBoard::with_tiles(board.size(), next_tiles)
}

/// Same as [`step`], with rows spread over the rayon thread pool.
pub fn step_par(board: &GameBoard) -> GameBoard {
    let size = board.size();
    let mut next_tiles = vec![TileState::Dead; size * size];

    next_tiles
        .par_chunks_mut(size)
        .enumerate()
        .for_each(|(row, next_row)| {
            for (col, next_tile) in next_row.iter_mut().enumerate() {
                let tile_pos = Position { row, col };
                let tile = board.tile(tile_pos).copied().unwrap_or_default();

                *next_tile = rule::next_state(tile, board.alive_neighbor_count(tile_pos));
            }
        });

    GameBoard::with_tiles(size, next_tiles)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub board: GameBoard,

    /// Generations simulated since the game was created, the seeded board being generation zero.
    pub generation: usize,

    /// Whether to step with [`step_par`] instead of [`step`].
    pub parallel: bool,
}

impl Game {
    pub fn new(board: GameBoard) -> Self {
        Self {
            board,
            generation: 0,
            parallel: false,
        }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn tick(&mut self) {
        self.board = if self.parallel {
            step_par(&self.board)
        } else {
            step(&self.board)
        };

        self.generation += 1;
        trace!("Generation {} computed", self.generation);
    }

    /// Hands the current board and then each of the next `steps` generations to `on_generation`.
    ///
    /// Stops at the first error the callback returns, leaving the game at that generation.
    pub fn try_run<F, E>(&mut self, steps: usize, mut on_generation: F) -> Result<&GameBoard, E>
    where
        F: FnMut(usize, &GameBoard) -> Result<(), E>,
    {
        on_generation(self.generation, &self.board)?;

        for _ in 0..steps {
            self.tick();
            on_generation(self.generation, &self.board)?;
        }

        Ok(&self.board)
    }

    pub fn run<F>(&mut self, steps: usize, mut on_generation: F) -> &GameBoard
    where
        F: FnMut(usize, &GameBoard),
    {
        let result = self.try_run(steps, |generation, board| {
            on_generation(generation, board);
            Ok::<(), Infallible>(())
        });

        match result {
            Ok(board) => board,
            Err(never) => match never {},
        }
    }

    /// Every board from the current one through `steps` generations later, `steps + 1` in total.
    pub fn collect_generations(&mut self, steps: usize) -> Vec<GameBoard> {
        let mut generations = Vec::with_capacity(steps + 1);
        self.run(steps, |_, board| generations.push(board.clone()));
        generations
    }

    pub fn count_cells(&self, state: TileState) -> usize {
        self.board.count_cells(state)
    }
}
