//! Tetris data structures: tetromino shapes, the falling piece and the board.

use crate::core::{
    Grid, Leaderboard, Position, ScoreEntry, LEADERBOARD_SIZE, TETRIS_GRAVITY_MS, TETRIS_HEIGHT,
    TETRIS_WIDTH,
};
use crate::games::Phase;
use rand::Rng;

/// Display colour of a locked or falling block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl PieceColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// The seven tetrominoes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TetrominoKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl TetrominoKind {
    pub const ALL: [TetrominoKind; 7] = [
        TetrominoKind::I,
        TetrominoKind::O,
        TetrominoKind::T,
        TetrominoKind::L,
        TetrominoKind::J,
        TetrominoKind::S,
        TetrominoKind::Z,
    ];

    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// Spawn orientation.
    pub fn shape(self) -> Shape {
        let rows: &[&[u8]] = match self {
            Self::I => &[&[1, 1, 1, 1]],
            Self::O => &[&[1, 1], &[1, 1]],
            Self::T => &[&[0, 1, 0], &[1, 1, 1]],
            Self::L => &[&[0, 0, 1], &[1, 1, 1]],
            Self::J => &[&[1, 0, 0], &[1, 1, 1]],
            Self::S => &[&[0, 1, 1], &[1, 1, 0]],
            Self::Z => &[&[1, 1, 0], &[0, 1, 1]],
        };
        Shape::from_rows(rows)
    }

    pub fn color(self) -> PieceColor {
        match self {
            Self::I => PieceColor::rgb(0x00, 0xf0, 0xf0),
            Self::O => PieceColor::rgb(0xf0, 0xf0, 0x00),
            Self::T => PieceColor::rgb(0xa0, 0x00, 0xf0),
            Self::L => PieceColor::rgb(0xf0, 0xa0, 0x00),
            Self::J => PieceColor::rgb(0x00, 0x00, 0xf0),
            Self::S => PieceColor::rgb(0x00, 0xf0, 0x00),
            Self::Z => PieceColor::rgb(0xf0, 0x00, 0x00),
        }
    }
}

/// A 0/1 occupancy matrix, `cells[row][col]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    cells: Vec<Vec<bool>>,
}

impl Shape {
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        Self {
            cells: rows
                .iter()
                .map(|row| row.iter().map(|&c| c != 0).collect())
                .collect(),
        }
    }

    pub fn width(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    pub fn height(&self) -> usize {
        self.cells.len()
    }

    /// Offsets `(dx, dy)` of the filled cells relative to the top-left corner.
    pub fn filled(&self) -> impl Iterator<Item = (i16, i16)> + '_ {
        self.cells.iter().enumerate().flat_map(|(dy, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &filled)| filled)
                .map(move |(dx, _)| (dx as i16, dy as i16))
        })
    }

    /// Quarter turn clockwise: row `i` of the result is column `i` read bottom to top.
    pub fn rotate_clockwise(&self) -> Self {
        let (w, h) = (self.width(), self.height());
        let cells = (0..w)
            .map(|col| (0..h).rev().map(|row| self.cells[row][col]).collect())
            .collect();
        Self { cells }
    }
}

/// The falling piece. `(x, y)` is the top-left of its bounding box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivePiece {
    pub kind: TetrominoKind,
    pub shape: Shape,
    pub color: PieceColor,
    pub x: i16,
    pub y: i16,
}

impl ActivePiece {
    /// A fresh piece centred horizontally on the top row.
    pub fn spawn(kind: TetrominoKind, board_width: usize) -> Self {
        let shape = kind.shape();
        let x = (board_width / 2) as i16 - (shape.width() / 2) as i16;
        Self {
            kind,
            color: kind.color(),
            shape,
            x,
            y: 0,
        }
    }

    /// Board positions covered by this piece.
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.shape
            .filled()
            .map(move |(dx, dy)| Position::new(self.x + dx, self.y + dy))
    }
}

/// Locked cells: `None` is empty.
pub type Board = Grid<Option<PieceColor>>;

/// Active tetris session.
#[derive(Debug, Clone)]
pub struct TetrisGame {
    pub phase: Phase,
    pub board: Board,
    /// Present only while playing.
    pub piece: Option<ActivePiece>,
    pub score: u32,
    /// Rows cleared this run.
    pub lines_cleared: u32,
    /// Pieces locked this run.
    pub pieces_locked: u32,
    pub gravity_ms: u64,
    /// Display-only high score table.
    pub leaderboard: Leaderboard,
}

impl Default for TetrisGame {
    fn default() -> Self {
        Self::new()
    }
}

impl TetrisGame {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            board: empty_board(),
            piece: None,
            score: 0,
            lines_cleared: 0,
            pieces_locked: 0,
            gravity_ms: TETRIS_GRAVITY_MS,
            leaderboard: default_leaderboard(),
        }
    }

    pub fn width(&self) -> usize {
        self.board.width()
    }

    pub fn height(&self) -> usize {
        self.board.height()
    }
}

pub fn empty_board() -> Board {
    Grid::new(TETRIS_WIDTH, TETRIS_HEIGHT, None)
}

pub fn default_leaderboard() -> Leaderboard {
    Leaderboard::new(
        LEADERBOARD_SIZE,
        vec![
            ScoreEntry::new("Player 1", 1200),
            ScoreEntry::new("Player 2", 800),
            ScoreEntry::new("Player 3", 500),
        ],
    )
}
