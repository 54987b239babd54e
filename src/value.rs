use crate::errors::GameError;
use crate::grid::{Grid, Side};
use crate::window::Window;
use crate::{GRID_SIZE, WIN_LENGTH};

// worth of holding n stones in an open window, indexed by n; the final
// entry lets the blocked-window lookup read one past a full count
pub(crate) const WEIGHTS: [i32; WIN_LENGTH + 2] = [0, 0, 4, 20, 100, 500, 0];

/// Per-cell, per-side worth of the board, kept in step with placements
///
/// A cell's worth for a side is the summed weight of that side's stones in
/// every open window through the cell, less what the side has forfeited in
/// windows the opponent broke into.
pub struct ValueGrid {
    values: [[i32; 2]; GRID_SIZE * GRID_SIZE],
}

impl ValueGrid {
    pub fn new() -> Self {
        Self {
            values: [[0; 2]; GRID_SIZE * GRID_SIZE],
        }
    }

    /// A side's current worth for one cell
    pub fn value(&self, x: usize, y: usize, side: Side) -> Result<i32, GameError> {
        if !Grid::in_bounds(x, y) {
            return Err(GameError::OutOfRange { x, y });
        }
        Ok(self.values[y * GRID_SIZE + x][side.index()])
    }

    // unchecked read for scan loops
    pub(crate) fn at(&self, x: usize, y: usize, side: Side) -> i32 {
        self.values[y * GRID_SIZE + x][side.index()]
    }

    /// Fold one placed stone into a window that covers it
    ///
    /// `previous` and `current` are the placing side's stone counts in the
    /// window around the placement, `opponents` the other side's count,
    /// which the placement leaves unchanged.
    pub(crate) fn apply_stone(
        &mut self,
        window: Window,
        side: Side,
        previous: u8,
        current: u8,
        opponents: u8,
    ) {
        if opponents == 0 {
            let delta = WEIGHTS[current as usize] - WEIGHTS[previous as usize];
            self.shift(window, side, delta);
        } else if current == 1 {
            // the first stone into an opponent-held window forfeits the
            // next weight step, not the accrued one
            let forfeit = WEIGHTS[opponents as usize + 1];
            self.shift(window, side.opponent(), -forfeit);
        }
    }

    fn shift(&mut self, window: Window, side: Side, delta: i32) {
        for &(x, y) in window.cells().iter() {
            self.values[y * GRID_SIZE + x][side.index()] += delta;
        }
    }

    pub(crate) fn reset(&mut self) {
        self.values = [[0; 2]; GRID_SIZE * GRID_SIZE];
    }
}

impl Default for ValueGrid {
    fn default() -> Self {
        Self::new()
    }
}
