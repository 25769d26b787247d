use super::teleport::TeleportMap;
use crate::error::{Result, RunnerError};
use crate::types::{Position, Tile};
use std::path::Path;

/// Immutable, padded tile grid shared by every simulator in a run.
///
/// Loading pads all rows to the longest input row, appends a GOAL column on
/// the right edge and a full DEATH row underneath (with its own GOAL cell).
/// Every reachable cell is therefore inside the grid, and every run ends on
/// either a GOAL or a DEATH tile.
#[derive(Debug, Clone)]
pub struct Course {
    rows: Vec<Vec<Tile>>,
    width: usize,
    height: usize,
    teleports: TeleportMap,
}

impl Course {
    pub fn load<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let raw: Vec<Vec<Tile>> = lines
            .into_iter()
            .map(|line| line.as_ref().chars().map(Tile::from_symbol).collect())
            .collect();

        if raw.is_empty() {
            return Err(RunnerError::MalformedLevel("level has no rows".to_string()));
        }

        let inner_width = raw.iter().map(Vec::len).max().unwrap_or(0);
        if inner_width == 0 {
            return Err(RunnerError::MalformedLevel("level rows are all empty".to_string()));
        }

        let mut rows: Vec<Vec<Tile>> = raw
            .into_iter()
            .map(|mut row| {
                row.resize(inner_width, Tile::Space);
                row.push(Tile::Goal);
                row
            })
            .collect();

        let mut border = vec![Tile::Death; inner_width];
        border.push(Tile::Goal);
        rows.push(border);

        let teleports = TeleportMap::build(&rows)?;
        let width = inner_width + 1;
        let height = rows.len();

        log::info!(
            "Loaded course {}x{} with {} teleport pair(s)",
            width,
            height,
            teleports.len()
        );

        Ok(Self {
            rows,
            width,
            height,
            teleports,
        })
    }

    pub fn parse(text: &str) -> Result<Self> {
        Self::load(text.lines())
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        log::debug!("Read level file {}", path.as_ref().display());
        Self::parse(&text)
    }

    /// Padded width, including the GOAL column
    pub fn width(&self) -> usize {
        self.width
    }

    /// Padded height, including the DEATH border row
    pub fn height(&self) -> usize {
        self.height
    }

    /// Panics outside the padded grid: the border keeps every legal lookup in range.
    pub fn tile_at(&self, x: usize, y: usize) -> Tile {
        assert!(
            x < self.width && y < self.height,
            "tile lookup ({}, {}) outside {}x{} course",
            x,
            y,
            self.width,
            self.height
        );
        self.rows[y][x]
    }

    pub fn tile(&self, at: Position) -> Tile {
        self.tile_at(at.x, at.y)
    }

    /// Partner of the teleport tile at `(x, y)`. Panics if that tile is not a teleport.
    pub fn teleport_target(&self, x: usize, y: usize) -> Position {
        match self.teleports.partner(Position::new(x, y)) {
            Some(target) => target,
            None => panic!(
                "teleport lookup at ({}, {}) on non-teleport tile {:?}",
                x,
                y,
                self.tile_at(x, y)
            ),
        }
    }

    pub fn teleports(&self) -> &TeleportMap {
        &self.teleports
    }

    pub fn row_symbols(&self, y: usize) -> String {
        self.rows[y].iter().map(|t| t.symbol()).collect()
    }
}
