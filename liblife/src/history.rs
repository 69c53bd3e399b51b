use std::collections::VecDeque;

use crate::board::GameBoard;

/// Keeps the most recent generations, evicting the oldest once `capacity` is reached.
#[derive(Debug, Clone)]
pub struct GenerationHistory {
    boards: VecDeque<(usize, GameBoard)>,
    capacity: usize,
}

impl GenerationHistory {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);

        Self {
            boards: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, generation: usize, board: GameBoard) {
        if self.boards.len() == self.capacity {
            self.boards.pop_front();
        }

        self.boards.push_back((generation, board));
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.boards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    pub fn latest(&self) -> Option<(usize, &GameBoard)> {
        self.boards
            .back()
            .map(|(generation, board)| (*generation, board))
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &GameBoard)> {
        self.boards
            .iter()
            .map(|(generation, board)| (*generation, board))
    }
}

/// Picks which generations of a run get handed to renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sampler {
    pub interval: usize,
    pub last_generation: usize,
}

impl Sampler {
    pub fn new(interval: usize, last_generation: usize) -> Self {
        Self {
            interval: interval.max(1),
            last_generation,
        }
    }

    /// The first and last generations are always sampled, plus every `interval`th one.
    pub fn should_sample(&self, generation: usize) -> bool {
        generation % self.interval == 0 || self.is_final(generation)
    }

    pub fn is_final(&self, generation: usize) -> bool {
        generation == self.last_generation
    }
}
