//! Consumers of simulated boards: terminal text and grayscale PNG images.

use std::path::{Path, PathBuf};

use liblife::board::GameBoard;

pub mod export;
pub mod raster;
pub mod text;

use raster::Raster;

pub fn frame_path(output_dir: &Path, generation: usize) -> PathBuf {
    output_dir.join(format!("frame_{generation:06}.png"))
}

pub fn save_board_png(board: &GameBoard, cell_pixels: u32, path: &Path) -> anyhow::Result<()> {
    export::save_png(&Raster::from_board(board, cell_pixels)?, path)
}
