//! Fixed-interval step clock.
//!
//! The main loop feeds real elapsed milliseconds in; the ticker answers how
//! many whole intervals have passed. A ticker only exists while a game is
//! playing (see `games::Phase`), so dropping it is how a game stops its clock.

/// Longest single frame a movement ticker will account for. Longer stalls
/// are truncated so a suspended terminal does not replay dozens of steps at once.
pub const MAX_FRAME_MS: u64 = 500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticker {
    interval_ms: u64,
    accumulated_ms: u64,
    /// Per-frame cap; `None` counts every millisecond.
    max_frame_ms: Option<u64>,
}

impl Ticker {
    /// A movement/gravity ticker: frames are capped at [`MAX_FRAME_MS`].
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            accumulated_ms: 0,
            max_frame_ms: Some(MAX_FRAME_MS),
        }
    }

    /// A clock that must not lose time, such as an elapsed-seconds display.
    pub fn wall_clock(interval_ms: u64) -> Self {
        Self {
            max_frame_ms: None,
            ..Self::new(interval_ms)
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Add `dt_ms` of wall-clock time and return the number of completed intervals.
    pub fn advance(&mut self, dt_ms: u64) -> u32 {
        let dt_ms = self.max_frame_ms.map_or(dt_ms, |max| dt_ms.min(max));
        self.accumulated_ms += dt_ms;
        let steps = self.accumulated_ms / self.interval_ms;
        self.accumulated_ms %= self.interval_ms;
        steps as u32
    }
}
