use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, ensure};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Largest accepted `cell_pixels`, keeps exported images of big boards addressable.
pub const MAX_CELL_PIXELS: u32 = 64;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RunConfig {
    /// Requested tiles per side, boards smaller than 20 are upsized.
    pub board_size: usize,

    /// Every this many generations the board is rendered, on top of the first and the last one.
    pub sample_interval: usize,

    /// How many of the most recent generations to keep around in memory.
    pub history_capacity: usize,

    pub render: RenderMode,

    /// Print boards with `X` and `.` instead of block characters.
    pub plain_text: bool,

    /// Minimum time between two boards printed to the terminal.
    pub frame_delay_ms: u64,

    /// Side length of a single tile in exported images.
    pub cell_pixels: u32,

    /// Whether to write every sampled generation as an image, not only the final one.
    pub export_frames: bool,

    pub output_dir: PathBuf,

    /// Plaintext pattern to seed with instead of the built-in hammerhead.
    pub pattern_path: Option<PathBuf>,

    pub parallel: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            board_size: 100,
            sample_interval: 10,
            history_capacity: 32,
            render: RenderMode::Both,
            plain_text: false,
            frame_delay_ms: 50,
            cell_pixels: 4,
            export_frames: false,
            output_dir: PathBuf::from("output"),
            pattern_path: None,
            parallel: false,
        }
    }
}

impl RunConfig {
    pub fn load<P>(path: P) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        let config_serialized = fs::read(path).context("Couldn't read config")?;
        Self::from_json(&config_serialized)
    }

    pub fn from_json(config_serialized: &[u8]) -> anyhow::Result<Self> {
        let config: Self =
            serde_json::from_slice(config_serialized).context("Couldn't deserialize config")?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            (1..=MAX_CELL_PIXELS).contains(&self.cell_pixels),
            "cell_pixels has to be between 1 and {MAX_CELL_PIXELS}, got {}",
            self.cell_pixels
        );
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, EnumString, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RenderMode {
    /// Print sampled boards to the terminal.
    Text,
    /// Only write images.
    Png,
    Both,
    None,
}

impl RenderMode {
    pub fn text(self) -> bool {
        matches!(self, RenderMode::Text | RenderMode::Both)
    }

    pub fn png(self) -> bool {
        matches!(self, RenderMode::Png | RenderMode::Both)
    }
}
