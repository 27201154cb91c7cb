//! Minesweeper data structures.

use crate::core::{Grid, Position, MINESWEEPER_CLOCK_MS, MINESWEEPER_GRID_SIZE, MINES_COUNT};
use crate::games::Phase;

/// Represents a single cell in the minesweeper grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    pub is_mine: bool,
    pub is_revealed: bool,
    pub is_flagged: bool,
    /// Mines in the Moore neighbourhood (0-8). Zero on mine cells.
    pub neighbor_mines: u8,
}

/// Board dimensions and mine count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardSpec {
    pub width: usize,
    pub height: usize,
    pub mines: usize,
}

impl Default for BoardSpec {
    fn default() -> Self {
        Self {
            width: MINESWEEPER_GRID_SIZE,
            height: MINESWEEPER_GRID_SIZE,
            mines: MINES_COUNT,
        }
    }
}

impl BoardSpec {
    /// Mine count actually placed: never more than the board has cells.
    pub fn effective_mines(&self) -> usize {
        self.mines.min(self.width * self.height)
    }

    pub fn safe_cells(&self) -> usize {
        self.width * self.height - self.effective_mines()
    }
}

/// Active minesweeper session.
#[derive(Debug, Clone)]
pub struct MinesweeperGame {
    pub phase: Phase,
    pub spec: BoardSpec,
    pub board: Grid<Cell>,
    /// Keyboard cursor, always on the board.
    pub cursor: Position,
    pub flags_placed: u16,
    /// Whole seconds elapsed while playing.
    pub elapsed_secs: u32,
    /// Cell that ended the game, if a mine was hit.
    pub detonated: Option<Position>,
}

impl Default for MinesweeperGame {
    fn default() -> Self {
        Self::new(BoardSpec::default())
    }
}

impl MinesweeperGame {
    /// An idle game with an empty, unmined board of the given size.
    pub fn new(spec: BoardSpec) -> Self {
        Self {
            phase: Phase::Idle,
            spec,
            board: Grid::new(spec.width, spec.height, Cell::default()),
            cursor: Position::new((spec.width / 2) as i16, (spec.height / 2) as i16),
            flags_placed: 0,
            elapsed_secs: 0,
            detonated: None,
        }
    }

    pub fn clock_ms(&self) -> u64 {
        MINESWEEPER_CLOCK_MS
    }

    /// Move the cursor, clamping to the board.
    pub fn move_cursor(&mut self, dx: i16, dy: i16) {
        let max_x = self.spec.width.saturating_sub(1) as i16;
        let max_y = self.spec.height.saturating_sub(1) as i16;
        self.cursor = Position::new(
            (self.cursor.x + dx).clamp(0, max_x),
            (self.cursor.y + dy).clamp(0, max_y),
        );
    }

    pub fn total_mines(&self) -> usize {
        self.spec.effective_mines()
    }

    /// Unrevealed cells that are not mines. Zero means the board is cleared.
    pub fn hidden_safe_cells(&self) -> usize {
        self.board
            .iter()
            .filter(|(_, c)| !c.is_revealed && !c.is_mine)
            .count()
    }

    /// `m:ss` display of the clock.
    pub fn clock_display(&self) -> String {
        format!("{}:{:02}", self.elapsed_secs / 60, self.elapsed_secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let game = MinesweeperGame::default();
        assert_eq!(game.phase, Phase::Idle);
        assert_eq!(game.board.width(), 16);
        assert_eq!(game.board.height(), 16);
        assert_eq!(game.total_mines(), 40);
        assert_eq!(game.cursor, Position::new(8, 8));
        assert_eq!(game.flags_placed, 0);
        assert_eq!(game.elapsed_secs, 0);
        assert!(game.board.iter().all(|(_, c)| *c == Cell::default()));
    }

    #[test]
    fn test_spec_clamps_mines() {
        let spec = BoardSpec {
            width: 3,
            height: 3,
            mines: 50,
        };
        assert_eq!(spec.effective_mines(), 9);
        assert_eq!(spec.safe_cells(), 0);
        assert_eq!(BoardSpec::default().safe_cells(), 216);
    }

    #[test]
    fn test_move_cursor_clamps() {
        let mut game = MinesweeperGame::new(BoardSpec {
            width: 9,
            height: 9,
            mines: 10,
        });
        assert_eq!(game.cursor, Position::new(4, 4));

        game.move_cursor(1, 0);
        assert_eq!(game.cursor, Position::new(5, 4));

        game.cursor = Position::new(0, 0);
        game.move_cursor(-1, -1);
        assert_eq!(game.cursor, Position::new(0, 0));

        game.cursor = Position::new(8, 8);
        game.move_cursor(1, 1);
        assert_eq!(game.cursor, Position::new(8, 8));
    }

    #[test]
    fn test_clock_display() {
        let mut game = MinesweeperGame::default();
        assert_eq!(game.clock_display(), "0:00");
        game.elapsed_secs = 75;
        assert_eq!(game.clock_display(), "1:15");
    }
}
