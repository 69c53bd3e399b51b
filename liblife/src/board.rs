use std::fmt;

use itertools::Itertools;
use log::debug;

use super::{pattern::Pattern, pos::Position};

/// Boards smaller than this are upsized to it, so the built-in pattern always fits.
pub const MIN_BOARD_SIZE: usize = 20;

/// A square, bounded board of tiles stored row-major.
///
/// Nothing wraps around the edges: positions outside the board have no tile.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameBoard {
    size: usize,
    tiles: Vec<TileState>,
}

impl GameBoard {
    /// Creates an all-dead board of `max(size, MIN_BOARD_SIZE)` tiles per side.
    ///
    /// # Panics
    ///
    /// Panics if `size * size` tiles can't be counted in a `usize`.
    pub fn new(size: usize) -> Self {
        let size = size.max(MIN_BOARD_SIZE);
        let tile_count = size
            .checked_mul(size)
            .unwrap_or_else(|| panic!("Board size {size} is too large"));

        Self::with_tiles(size, vec![TileState::default(); tile_count])
    }

    /// Creates a board with the given positions alive, ignoring any that fall outside it.
    pub fn with_alive<I, P>(size: usize, positions: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Position>,
    {
        let mut board = Self::new(size);

        for pos in positions {
            if let Some(tile) = board.tile_mut(pos) {
                *tile = TileState::Alive;
            }
        }

        board
    }

    pub(crate) fn with_tiles(size: usize, tiles: Vec<TileState>) -> Self {
        debug_assert_eq!(tiles.len(), size * size);
        Self { size, tiles }
    }

    /// Tiles per side.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn tiles(&self) -> &[TileState] {
        &self.tiles
    }

    pub fn tile<P>(&self, pos: P) -> Option<&TileState>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.tiles.get(index)
    }

    pub fn tile_mut<P>(&mut self, pos: P) -> Option<&mut TileState>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.tiles.get_mut(index)
    }

    pub fn is_alive<P>(&self, pos: P) -> bool
    where
        P: Into<Position>,
    {
        self.tile(pos) == Some(&TileState::Alive)
    }

    pub fn enumerate_tiles(&self) -> impl Iterator<Item = (Position, &TileState)> {
        self.tiles
            .iter()
            .enumerate()
            .map(|(index, tile)| (self.index_to_pos(index), tile))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[TileState]> {
        self.tiles.chunks_exact(self.size)
    }

    pub fn count_cells(&self, state: TileState) -> usize {
        self.tiles.iter().filter(|tile| **tile == state).count()
    }

    /// Neighbor positions of `pos` that lie on the board.
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        pos.neighbors()
            .filter(|neighbor| neighbor.row < self.size && neighbor.col < self.size)
    }

    pub fn alive_neighbor_count(&self, pos: Position) -> usize {
        self.neighbors(pos)
            .filter(|neighbor| self.is_alive(*neighbor))
            .count()
    }

    pub fn fits(&self, pattern: &Pattern) -> bool {
        pattern.height() <= self.size && pattern.width() <= self.size
    }

    /// Top-left tile that centers `pattern` on this board.
    pub fn pattern_anchor(&self, pattern: &Pattern) -> Position {
        let center = self.size / 2;

        Position {
            row: center.saturating_sub(pattern.height() / 2),
            col: center.saturating_sub(pattern.width() / 2),
        }
    }

    /// Writes `pattern` (dead markers included) centered on the board.
    ///
    /// # Panics
    ///
    /// If the pattern is larger than the board, see [`GameBoard::fits`].
    pub fn seed_pattern(&mut self, pattern: &Pattern) {
        assert!(
            self.fits(pattern),
            "Pattern {:?} ({}x{}) doesn't fit on a {}x{} board",
            pattern.name(),
            pattern.height(),
            pattern.width(),
            self.size,
            self.size,
        );

        let anchor = self.pattern_anchor(pattern);

        for (row, col) in (0..pattern.height()).cartesian_product(0..pattern.width()) {
            let pos = Position {
                row: anchor.row + row,
                col: anchor.col + col,
            };

            if let (Some(tile), Some(state)) = (self.tile_mut(pos), pattern.cell(row, col)) {
                *tile = state;
            }
        }

        debug!(
            "Seeded {:?} at {anchor:?}, {} tiles alive",
            pattern.name(),
            self.count_cells(TileState::Alive)
        );
    }

    pub fn seeded(mut self, pattern: &Pattern) -> Self {
        self.seed_pattern(pattern);
        self
    }

    fn pos_to_index<P>(&self, pos: P) -> Option<usize>
    where
        P: Into<Position>,
    {
        let Position { row, col } = pos.into();

        if row >= self.size || col >= self.size {
            return None;
        }

        Some(col + row * self.size)
    }

    fn index_to_pos(&self, index: usize) -> Position {
        Position {
            row: index / self.size,
            col: index % self.size,
        }
    }
}

impl fmt::Display for GameBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: String = row.iter().map(|tile| tile.marker()).collect();
            writeln!(f, "{line}")?;
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileState {
    Alive,

    #[default]
    Dead,
}

impl TileState {
    /// `X` for alive, `.` for dead, the same markers patterns are written in.
    pub fn marker(self) -> char {
        match self {
            TileState::Alive => 'X',
            TileState::Dead => '.',
        }
    }
}
