use colored::Colorize;
use itertools::Itertools;
use liblife::board::{GameBoard, TileState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub alive: char,
    pub dead: char,
}

impl Glyphs {
    pub const BLOCKS: Glyphs = Glyphs {
        alive: '█',
        dead: '·',
    };

    pub const PLAIN: Glyphs = Glyphs {
        alive: 'X',
        dead: '.',
    };
}

pub fn render_board(board: &GameBoard, glyphs: Glyphs) -> String {
    board
        .rows()
        .map(|row| {
            row.iter()
                .map(|tile| match tile {
                    TileState::Alive => glyphs.alive,
                    TileState::Dead => glyphs.dead,
                })
                .collect::<String>()
        })
        .join("\n")
}

pub fn render_header(generation: usize, board: &GameBoard) -> String {
    format!(
        "{} {generation:6} | {} {}",
        "generation".bold(),
        "alive".bold(),
        board.count_cells(TileState::Alive).to_string().bright_green(),
    )
}
