//! Fixed-size high score table, highest first.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub score: u32,
}

impl ScoreEntry {
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaderboard {
    capacity: usize,
    entries: Vec<ScoreEntry>,
}

impl Leaderboard {
    /// Build a table from existing entries. Entries are sorted and truncated.
    pub fn new(capacity: usize, entries: Vec<ScoreEntry>) -> Self {
        let mut board = Self { capacity, entries };
        board.normalize();
        board
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether `score` beats the lowest entry currently on the table.
    ///
    /// An empty table has no lowest entry and accepts nothing.
    pub fn qualifies(&self, score: u32) -> bool {
        self.entries.last().is_some_and(|lowest| score > lowest.score)
    }

    /// Insert `score` if it qualifies. Returns true if it was recorded.
    pub fn submit(&mut self, name: &str, score: u32) -> bool {
        if !self.qualifies(score) {
            return false;
        }
        self.entries.push(ScoreEntry::new(name, score));
        self.normalize();
        true
    }

    fn normalize(&mut self) {
        // stable: earlier entries win ties
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(self.capacity);
    }
}
