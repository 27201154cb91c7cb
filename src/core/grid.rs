//! Fixed-size board model shared by the minigames.
//!
//! Boards are stored row-major as `rows[y][x]` so whole rows can be removed
//! and re-inserted (Tetris line clears) without reindexing every cell.

use serde::{Deserialize, Serialize};

/// A cell coordinate: `x` is the column, `y` is the row (0 = top).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i16,
    pub y: i16,
}

impl Position {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// Returns this position shifted by `(dx, dy)`.
    pub fn offset(self, dx: i16, dy: i16) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Whether this position lies on a `width` x `height` board.
    pub fn in_bounds(self, width: usize, height: usize) -> bool {
        self.x >= 0 && self.y >= 0 && (self.x as usize) < width && (self.y as usize) < height
    }
}

/// Fixed-size 2D cell array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    rows: Vec<Vec<T>>,
}

impl<T: Clone> Grid<T> {
    /// Create a `width` x `height` grid with every cell set to `fill`.
    pub fn new(width: usize, height: usize, fill: T) -> Self {
        Self {
            width,
            height,
            rows: vec![vec![fill; width]; height],
        }
    }

    /// Remove row `y` and push a fresh `fill` row in at the top.
    ///
    /// Every row above `y` moves down by one; rows below are untouched.
    pub fn collapse_row(&mut self, y: usize, fill: T) {
        self.rows.remove(y);
        self.rows.insert(0, vec![fill; self.width]);
    }
}

impl<T> Grid<T> {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.in_bounds(self.width, self.height)
    }

    pub fn get(&self, pos: Position) -> Option<&T> {
        if self.contains(pos) {
            Some(&self.rows[pos.y as usize][pos.x as usize])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, pos: Position) -> Option<&mut T> {
        if self.contains(pos) {
            Some(&mut self.rows[pos.y as usize][pos.x as usize])
        } else {
            None
        }
    }

    /// Row `y`, top to bottom.
    pub fn row(&self, y: usize) -> &[T] {
        &self.rows[y]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// All cells in row-major order with their positions.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &T)> {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, cell)| (Position::new(x as i16, y as i16), cell))
        })
    }

    /// Every position on the board, row-major.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let width = self.width;
        (0..self.height)
            .flat_map(move |y| (0..width).map(move |x| Position::new(x as i16, y as i16)))
    }

    /// In-bounds Moore neighbours of `pos` (up to 8), clipped at the edges.
    pub fn neighbors(&self, pos: Position) -> Vec<Position> {
        let mut neighbors = Vec::with_capacity(8);
        for dy in -1i16..=1 {
            for dx in -1i16..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let n = pos.offset(dx, dy);
                if self.contains(n) {
                    neighbors.push(n);
                }
            }
        }
        neighbors
    }
}
