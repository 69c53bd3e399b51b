use anyhow::Context;
use liblife::board::{GameBoard, TileState};

/// Alive tiles are drawn black on white, like a binary colormap.
pub const ALIVE_SHADE: u8 = 0;
pub const DEAD_SHADE: u8 = 255;

/// An 8-bit grayscale image, one byte per pixel, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    pub width: u32,
    pub height: u32,
    pub buffer: Vec<u8>,
}

impl Raster {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            buffer: vec![DEAD_SHADE; width as usize * height as usize],
        }
    }

    /// Draws every tile of `board` as a `cell_pixels` wide square.
    ///
    /// Fails when the image side or its pixel count doesn't fit the raster.
    pub fn from_board(board: &GameBoard, cell_pixels: u32) -> anyhow::Result<Self> {
        let cell_pixels = cell_pixels.max(1);
        let side = u32::try_from(board.size())
            .ok()
            .and_then(|size| size.checked_mul(cell_pixels))
            .with_context(|| {
                format!(
                    "A {0}x{0} board at {cell_pixels} pixels per tile is too large for an image",
                    board.size()
                )
            })?;

        (side as usize)
            .checked_mul(side as usize)
            .with_context(|| format!("A {side}x{side} image has too many pixels"))?;

        let mut raster = Self::new(side, side);

        for (tile_pos, tile) in board.enumerate_tiles() {
            if *tile == TileState::Alive {
                raster.draw_square(
                    tile_pos.col as u32 * cell_pixels,
                    tile_pos.row as u32 * cell_pixels,
                    cell_pixels,
                    cell_pixels,
                    ALIVE_SHADE,
                );
            }
        }

        Ok(raster)
    }

    pub fn pixel_mut(&mut self, x: u32, y: u32) -> Option<&mut u8> {
        if x >= self.width || y >= self.height {
            return None;
        }

        self.buffer
            .get_mut(x as usize + y as usize * self.width as usize)
    }

    pub fn draw_square(&mut self, x: u32, y: u32, width: u32, height: u32, shade: u8) {
        for y in y..y + height {
            for x in x..x + width {
                if let Some(pixel) = self.pixel_mut(x, y) {
                    *pixel = shade;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(raster: &Raster, x: u32, y: u32) -> Option<u8> {
        if x >= raster.width || y >= raster.height {
            return None;
        }

        raster.buffer.get(x as usize + y as usize * raster.width as usize).copied()
    }

    #[test]
    fn tiles_map_to_squares() {
        let board = GameBoard::with_alive(20, [[0, 1]]);
        let raster = Raster::from_board(&board, 3).unwrap();

        assert_eq!((raster.width, raster.height), (60, 60));
        assert_eq!(pixel(&raster, 3, 0), Some(ALIVE_SHADE));
        assert_eq!(pixel(&raster, 5, 2), Some(ALIVE_SHADE));
        assert_eq!(pixel(&raster, 2, 0), Some(DEAD_SHADE));
        assert_eq!(pixel(&raster, 3, 3), Some(DEAD_SHADE));
        assert_eq!(pixel(&raster, 60, 0), None);
    }

    #[test]
    fn oversized_images_are_rejected() {
        let error = Raster::from_board(&GameBoard::new(100), 50_000_000).unwrap_err();
        assert!(error.to_string().contains("too large"));

        assert!(Raster::from_board(&GameBoard::new(20), u32::MAX).is_err());
    }

    #[test]
    fn zero_cell_pixels_draws_one_pixel_per_tile() {
        let raster = Raster::from_board(&GameBoard::new(20), 0).unwrap();
        assert_eq!((raster.width, raster.height), (20, 20));
    }

    #[test]
    fn squares_are_clipped_at_the_edge() {
        let mut raster = Raster::new(4, 4);
        raster.draw_square(2, 2, 10, 10, ALIVE_SHADE);

        assert_eq!(raster.buffer.iter().filter(|shade| **shade == ALIVE_SHADE).count(), 4);
    }
}
