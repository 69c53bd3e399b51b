/// A tile coordinate on a board, 0-indexed from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

/// Relative `[row, col]` offsets of the eight tiles surrounding a tile.
pub static NEIGHBOR_OFFSETS: [[isize; 2]; 8] = [
    [-1, -1],
    [-1, 0],
    [-1, 1],
    [0, -1],
    [0, 1],
    [1, -1],
    [1, 0],
    [1, 1],
];

impl Position {
    /// Positions around this one that don't fall below zero on either axis.
    ///
    /// Upper bounds depend on the board, so callers still have to check those.
    pub fn neighbors(self) -> impl Iterator<Item = Position> {
        NEIGHBOR_OFFSETS.iter().filter_map(move |[row_offset, col_offset]| {
            Some(Position {
                row: self.row.checked_add_signed(*row_offset)?,
                col: self.col.checked_add_signed(*col_offset)?,
            })
        })
    }
}

impl From<[usize; 2]> for Position {
    fn from(value: [usize; 2]) -> Self {
        Self {
            row: value[0],
            col: value[1],
        }
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}
