use std::borrow::Cow;

use anyhow::{Context, bail};

use crate::{board::TileState, pos::Position};

/// An immutable rectangle of tile states, written as rows of `X` (alive) and `.` (dead).
///
/// `O` is accepted as an alive marker as well, so plaintext `.cells` files load as-is.
/// Rows shorter than the widest row are padded with dead tiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern<'a> {
    name: Cow<'a, str>,
    rows: Cow<'a, [&'a str]>,
}

/// The built-in seed, a hammerhead spaceship flanked by its exhaust.
pub static HAMMERHEAD: Pattern<'static> = Pattern {
    name: Cow::Borrowed("hammerhead"),
    rows: Cow::Borrowed(&[
        "................X..",
        ".XX...........X...X",
        "XX.XXX.......X.....",
        ".XXXXX.......X....X",
        "..XXXXX.....X.XXXX.",
        "......XXX.X.XX.....",
        "......XXX....X.....",
        "......XXX.XXX......",
        "..........XX.......",
        "..........XX.......",
        "......XXX.XXX......",
        "......XXX....X.....",
        "......XXX.X.XX.....",
        "..XXXXX.....X.XXXX.",
        ".XXXXX.......X....X",
        "XX.XXX.......X.....",
        ".XX...........X...X",
        "................X..",
    ]),
};

pub fn default_pattern() -> &'static Pattern<'static> {
    &HAMMERHEAD
}

impl<'a> Pattern<'a> {
    pub fn new<N, R>(name: N, rows: R) -> anyhow::Result<Self>
    where
        N: Into<Cow<'a, str>>,
        R: Into<Cow<'a, [&'a str]>>,
    {
        let pattern = Self {
            name: name.into(),
            rows: rows.into(),
        };

        if pattern.rows.is_empty() {
            bail!("Pattern {:?} has no rows", pattern.name);
        }

        if pattern.width() == 0 {
            bail!("Pattern {:?} has only empty rows", pattern.name);
        }

        for (row_index, row) in pattern.rows.iter().enumerate() {
            if let Some(bad_char) = row.chars().find(|c| !matches!(c, 'X' | 'O' | '.')) {
                bail!(
                    "Pattern {:?} has an unexpected {bad_char:?} on row {row_index}",
                    pattern.name
                );
            }
        }

        Ok(pattern)
    }

    /// Reads plaintext pattern rows, skipping blank lines and `!` comment lines.
    pub fn parse<N>(name: N, text: &'a str) -> anyhow::Result<Self>
    where
        N: Into<Cow<'a, str>>,
    {
        let rows: Vec<&'a str> = text
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty() && !line.starts_with('!'))
            .collect();

        let name = name.into();
        Self::new(name.clone(), rows).with_context(|| format!("Couldn't parse pattern {name:?}"))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Width of the widest row.
    pub fn width(&self) -> usize {
        self.rows.iter().map(|row| row.len()).max().unwrap_or(0)
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<TileState> {
        if col >= self.width() {
            return None;
        }

        let marker = self.rows.get(row)?.as_bytes().get(col);

        Some(match marker {
            Some(b'X' | b'O') => TileState::Alive,
            _ => TileState::Dead,
        })
    }

    /// Offsets of alive cells relative to the pattern's top-left corner.
    pub fn alive_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, line)| {
            line.bytes()
                .enumerate()
                .filter(|(_, marker)| matches!(marker, b'X' | b'O'))
                .map(move |(col, _)| Position { row, col })
        })
    }
}
