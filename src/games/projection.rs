//! Read-only views of engine state for drawing.
//!
//! A [`Snapshot`] composites the board with whatever is moving on it (the
//! snake and its food, the falling piece) so the UI never has to know
//! per-game rules.

use super::tetris::PieceColor;
use super::{GameKind, MinesweeperGame, SnakeGame, TetrisGame};
use crate::core::Position;

/// Lifecycle as seen by a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Idle,
    Playing,
    GameOver,
    Won,
}

impl Lifecycle {
    pub fn is_finished(self) -> bool {
        matches!(self, Lifecycle::GameOver | Lifecycle::Won)
    }
}

/// What to draw in one board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellView {
    Empty,
    SnakeHead,
    SnakeBody,
    Food,
    Hidden,
    Flagged,
    Mine,
    /// Revealed safe cell with its neighbour count.
    Open(u8),
    Locked(PieceColor),
    Falling(PieceColor),
}

/// Everything needed to draw one frame of a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub kind: GameKind,
    pub lifecycle: Lifecycle,
    pub width: usize,
    pub height: usize,
    /// Row-major, `cells[y][x]`.
    pub cells: Vec<Vec<CellView>>,
    pub score: u32,
    pub elapsed_secs: u32,
    pub flags_placed: u16,
    pub mines: usize,
}

impl Snapshot {
    pub fn cell(&self, pos: Position) -> Option<CellView> {
        if !pos.in_bounds(self.width, self.height) {
            return None;
        }
        Some(self.cells[pos.y as usize][pos.x as usize])
    }
}

fn blank(width: usize, height: usize, fill: CellView) -> Vec<Vec<CellView>> {
    vec![vec![fill; width]; height]
}

fn paint(cells: &mut [Vec<CellView>], pos: Position, view: CellView) {
    if pos.x < 0 || pos.y < 0 {
        return;
    }
    if let Some(cell) = cells
        .get_mut(pos.y as usize)
        .and_then(|row| row.get_mut(pos.x as usize))
    {
        *cell = view;
    }
}

impl SnakeGame {
    pub fn snapshot(&self) -> Snapshot {
        let mut cells = blank(self.grid_width, self.grid_height, CellView::Empty);
        paint(&mut cells, self.food, CellView::Food);
        // head last so it wins over food or body on the same cell
        for segment in self.snake.iter().skip(1) {
            paint(&mut cells, *segment, CellView::SnakeBody);
        }
        if let Some(head) = self.snake.front() {
            paint(&mut cells, *head, CellView::SnakeHead);
        }
        Snapshot {
            kind: GameKind::Snake,
            lifecycle: self.phase.lifecycle(),
            width: self.grid_width,
            height: self.grid_height,
            cells,
            score: self.score,
            elapsed_secs: 0,
            flags_placed: 0,
            mines: 0,
        }
    }
}

impl MinesweeperGame {
    /// Mines stay hidden unless revealed, except after a loss when every
    /// mine is shown.
    pub fn snapshot(&self) -> Snapshot {
        let lifecycle = self.phase.lifecycle();
        let show_mines = lifecycle == Lifecycle::GameOver;
        let mut cells = blank(self.board.width(), self.board.height(), CellView::Hidden);
        for (pos, cell) in self.board.iter() {
            let view = if cell.is_revealed {
                if cell.is_mine {
                    CellView::Mine
                } else {
                    CellView::Open(cell.neighbor_mines)
                }
            } else if cell.is_flagged {
                CellView::Flagged
            } else if show_mines && cell.is_mine {
                CellView::Mine
            } else {
                CellView::Hidden
            };
            paint(&mut cells, pos, view);
        }
        Snapshot {
            kind: GameKind::Minesweeper,
            lifecycle,
            width: self.board.width(),
            height: self.board.height(),
            cells,
            score: 0,
            elapsed_secs: self.elapsed_secs,
            flags_placed: self.flags_placed,
            mines: self.total_mines(),
        }
    }
}

impl TetrisGame {
    pub fn snapshot(&self) -> Snapshot {
        let mut cells = blank(self.width(), self.height(), CellView::Empty);
        for (pos, cell) in self.board.iter() {
            if let Some(color) = cell {
                paint(&mut cells, pos, CellView::Locked(*color));
            }
        }
        if let Some(piece) = &self.piece {
            for pos in piece.cells() {
                paint(&mut cells, pos, CellView::Falling(piece.color));
            }
        }
        Snapshot {
            kind: GameKind::Tetris,
            lifecycle: self.phase.lifecycle(),
            width: self.width(),
            height: self.height(),
            cells,
            score: self.score,
            elapsed_secs: 0,
            flags_placed: 0,
            mines: 0,
        }
    }
}
