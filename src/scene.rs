//! Canvas layout and the draw commands for one frame of the maze view.
//!
//! Nothing here touches the browser; the web layer replays the shapes on a
//! 2D context.

use crate::maze::{Cell, MazeGrid};

pub const WALL_BASE: &str = "#3b4b5c";
pub const WALL_HIGHLIGHT: &str = "#4a5b6b";
pub const WALL_SHADOW: &str = "#2f3e4d";
pub const START_MARKER: &str = "rgba(46, 204, 113, 0.7)";
pub const END_MARKER: &str = "rgba(231, 76, 60, 0.7)";
pub const PLAYER_OUTLINE: &str = "rgba(255, 255, 255, 0.9)";

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Rect { x: f64, y: f64, w: f64, h: f64, fill: String },
    Polygon { points: Vec<(f64, f64)>, fill: String },
    Circle { cx: f64, cy: f64, r: f64, fill: String, stroke: String, line_width: f64 },
}

/// Tile and canvas size fitted into the panel that hosts the maze.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub tile_size: f64,
    pub canvas_width: u32,
    pub canvas_height: u32,
}

impl Layout {
    /// Largest whole-pixel square tile that fits the maze in the panel.
    pub fn fit(panel_width: f64, panel_height: f64, grid: &MazeGrid) -> Self {
        let dim = grid.rows().max(grid.cols()).max(1) as f64;
        let tile = (panel_width.min(panel_height) / dim).floor().max(1.0);
        Self {
            tile_size: tile,
            canvas_width: (tile * grid.cols() as f64) as u32,
            canvas_height: (tile * grid.rows() as f64) as u32,
        }
    }
}

/// Beveled wall block: base square, light top/left edges, dark bottom/right.
fn wall(cell: Cell, tile: f64, out: &mut Vec<Shape>) {
    let x = cell.col as f64 * tile;
    let y = cell.row as f64 * tile;
    let b = tile / 8.0;
    let (r, d) = (x + tile, y + tile);
    out.push(Shape::Rect { x, y, w: tile, h: tile, fill: WALL_BASE.into() });
    let edges = [
        (WALL_HIGHLIGHT, [(x, y), (r, y), (r - b, y + b), (x + b, y + b)]),
        (WALL_HIGHLIGHT, [(x, y), (x, d), (x + b, d - b), (x + b, y + b)]),
        (WALL_SHADOW, [(x, d), (r, d), (r - b, d - b), (x + b, d - b)]),
        (WALL_SHADOW, [(r, y), (r, d), (r - b, d - b), (r - b, y + b)]),
    ];
    for (fill, points) in edges {
        out.push(Shape::Polygon { points: points.to_vec(), fill: fill.into() });
    }
}

fn marker(cell: Cell, tile: f64, fill: &str) -> Shape {
    Shape::Rect {
        x: cell.col as f64 * tile,
        y: cell.row as f64 * tile,
        w: tile,
        h: tile,
        fill: fill.into(),
    }
}

/// Walls plus start and end markers.
pub fn maze_shapes(grid: &MazeGrid, start: Cell, end: Cell, tile: f64) -> Vec<Shape> {
    let mut shapes = Vec::new();
    for cell in grid.walls() {
        wall(cell, tile, &mut shapes);
    }
    shapes.push(marker(start, tile, START_MARKER));
    shapes.push(marker(end, tile, END_MARKER));
    shapes
}

/// Token centred in the tile whose top-left corner is `(x, y)`.
pub fn player_shape(x: f64, y: f64, tile: f64, color: &str) -> Shape {
    Shape::Circle {
        cx: x + tile / 2.0,
        cy: y + tile / 2.0,
        r: tile / 2.8,
        fill: color.into(),
        stroke: PLAYER_OUTLINE.into(),
        line_width: 2.0,
    }
}
