use crate::grid::Side;
use crate::window::{Window, SLOT_COUNT};
use crate::WINDOW_COUNT;

/// Running per-side stone counts for every window on the board
///
/// Also maintains the untouched-window counter behind the draw heuristic:
/// it starts at the window total and drops by one the first time either
/// side puts a stone into a window.
pub struct LineTracker {
    counts: [[u8; 2]; SLOT_COUNT],
    open_windows: i32,
}

impl LineTracker {
    pub fn new() -> Self {
        Self {
            counts: [[0; 2]; SLOT_COUNT],
            open_windows: WINDOW_COUNT as i32,
        }
    }

    /// Count a stone into one window, returning the placing side's count
    /// in it before and after
    pub fn record_stone(&mut self, window: Window, side: Side) -> (u8, u8) {
        let slot = window.slot();
        if self.counts[slot] == [0, 0] {
            self.open_windows -= 1;
        }
        let count = &mut self.counts[slot][side.index()];
        let previous = *count;
        *count += 1;
        (previous, *count)
    }

    /// How many stones a side holds in one window
    pub fn count(&self, window: Window, side: Side) -> u8 {
        self.counts[window.slot()][side.index()]
    }

    /// Windows neither side has entered yet
    pub fn open_windows(&self) -> i32 {
        self.open_windows
    }

    pub fn reset(&mut self) {
        self.counts = [[0; 2]; SLOT_COUNT];
        self.open_windows = WINDOW_COUNT as i32;
    }
}

impl Default for LineTracker {
    fn default() -> Self {
        Self::new()
    }
}
