//! Maze geometry as served by `/api/maze`: a wall grid plus the solved path.
//!
//! The maze is generated and solved elsewhere; this module only checks that
//! the payload is playable and offers lookups for rendering.

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tile {
    Open,
    Wall,
}

/// A maze cell in server order: `[row, col]` on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[usize; 2]", into = "[usize; 2]")]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn position(self) -> Position {
        Position { x: self.col, y: self.row }
    }
}

impl From<[usize; 2]> for Cell {
    fn from([row, col]: [usize; 2]) -> Self {
        Self { row, col }
    }
}

impl From<Cell> for [usize; 2] {
    fn from(cell: Cell) -> Self {
        [cell.row, cell.col]
    }
}

/// Screen-oriented tile coordinate (`x` = column, `y` = row).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Rectangular wall grid, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MazeGrid {
    rows: usize,
    cols: usize,
    tiles: Vec<Tile>,
}

impl MazeGrid {
    /// Builds a grid from wire values (`0` open, `1` wall).
    pub fn from_raw(raw: &[Vec<i64>]) -> Result<Self> {
        let rows = raw.len();
        let cols = raw.first().map(Vec::len).unwrap_or(0);
        if rows == 0 || cols == 0 {
            return Err(GameError::EmptyGrid);
        }
        let mut tiles = Vec::with_capacity(rows * cols);
        for (row, cells) in raw.iter().enumerate() {
            if cells.len() != cols {
                return Err(GameError::RaggedGrid { row, len: cells.len(), expected: cols });
            }
            for (col, &value) in cells.iter().enumerate() {
                let tile = match value {
                    0 => Tile::Open,
                    1 => Tile::Wall,
                    _ => return Err(GameError::InvalidTile { row, col, value }),
                };
                tiles.push(tile);
            }
        }
        Ok(Self { rows, cols, tiles })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn tile(&self, cell: Cell) -> Option<Tile> {
        if cell.row >= self.rows || cell.col >= self.cols {
            return None;
        }
        Some(self.tiles[cell.row * self.cols + cell.col])
    }

    /// Iterates every wall cell in row-major order.
    pub fn walls(&self) -> impl Iterator<Item = Cell> + '_ {
        self.tiles.iter().enumerate().filter_map(move |(idx, tile)| {
            (*tile == Tile::Wall).then(|| Cell::new(idx / self.cols, idx % self.cols))
        })
    }
}

/// Raw `/api/maze` body.
#[derive(Clone, Debug, Deserialize)]
pub struct MazePayload {
    pub grid: Vec<Vec<i64>>,
    pub path: Vec<Cell>,
}

/// A grid together with a start-to-end solution path that stays on open tiles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    grid: MazeGrid,
    path: Vec<Cell>,
}

impl Maze {
    pub fn new(grid: MazeGrid, path: Vec<Cell>) -> Result<Self> {
        if path.len() < 2 {
            return Err(GameError::PathTooShort(path.len()));
        }
        for &cell in &path {
            match grid.tile(cell) {
                None => return Err(GameError::PathOutOfBounds { row: cell.row, col: cell.col }),
                Some(Tile::Wall) => {
                    return Err(GameError::PathThroughWall { row: cell.row, col: cell.col });
                }
                Some(Tile::Open) => {}
            }
        }
        Ok(Self { grid, path })
    }

    pub fn grid(&self) -> &MazeGrid {
        &self.grid
    }

    pub fn solution(&self) -> &[Cell] {
        &self.path
    }

    pub fn start(&self) -> Cell {
        self.path[0]
    }

    pub fn end(&self) -> Cell {
        self.path[self.path.len() - 1]
    }
}

impl TryFrom<MazePayload> for Maze {
    type Error = GameError;

    fn try_from(payload: MazePayload) -> Result<Self> {
        let grid = MazeGrid::from_raw(&payload.grid)?;
        Maze::new(grid, payload.path)
    }
}
