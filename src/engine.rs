use rand::Rng;

use crate::errors::GameError;
use crate::grid::{Grid, Side};
use crate::movelog::{MoveLog, MoveRecord, Note};
use crate::tracker::LineTracker;
use crate::value::ValueGrid;
use crate::window::{Direction, Window};
use crate::{GRID_SIZE, WIN_LENGTH};

// own potential is weighted (16 + ATTACK_FACTOR)/16 against blocking the
// opponent, and the same constant bounds the random tie-break perturbation
const ATTACK_FACTOR: i32 = 4;

/// Where the game stands; advanced by placements, cleared by reset
///
/// The first terminal state latches: later placements still update the
/// board but can no longer change the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Won(Side),
    Drawn,
}

/// A completed five-in-a-row, as reported by the placement that made it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Win {
    pub side: Side,
    pub direction: Direction,
    pub line: [(usize, usize); WIN_LENGTH],
}

/// The game state in full: board, per-window stone counts, cell values and
/// move history, mutated together by each placement
///
/// The engine enforces placement legality but not turn order; whose turn it
/// is remains the caller's decision.
pub struct Engine {
    grid: Grid,
    tracker: LineTracker,
    values: ValueGrid,
    log: MoveLog,
    status: Status,
}

impl Engine {
    pub fn new() -> Self {
        Self {
            grid: Grid::new(),
            tracker: LineTracker::new(),
            values: ValueGrid::new(),
            log: MoveLog::new(),
            status: Status::InProgress,
        }
    }

    /// Place a stone for `side`, updating counts and values for every
    /// window through the cell
    ///
    /// Returns the completed five-in-a-row if this placement made one.
    /// Rejected placements leave the engine untouched.
    pub fn place_stone(
        &mut self,
        x: usize,
        y: usize,
        side: Side,
    ) -> Result<Option<Win>, GameError> {
        if self.grid.cell(x, y)?.is_some() {
            return Err(GameError::Occupied { x, y });
        }

        // validation is complete, state changes only from here on
        let mut completed = Vec::new();
        for window in Window::through(x, y) {
            let opponents = self.tracker.count(window, side.opponent());
            let (previous, current) = self.tracker.record_stone(window, side);
            self.values.apply_stone(window, side, previous, current, opponents);
            if current as usize == WIN_LENGTH {
                completed.push(window);
            }
        }
        self.grid.place(x, y, side);
        self.log.push(side, x, y);

        // windows come out direction-major, so the first completed one is
        // the win to report
        let win = completed.first().map(|&window| Win {
            side,
            direction: window.direction,
            line: self.trace_line(x, y, side, window.direction),
        });

        if self.status == Status::InProgress {
            if win.is_some() {
                self.status = Status::Won(side);
                self.log.annotate_last(Note::Won);
            } else if self.tracker.open_windows() <= 0 {
                self.status = Status::Drawn;
                self.log.annotate_last(Note::Tied);
            }
        }

        Ok(win)
    }

    /// Pick the most promising empty cell for `side`
    ///
    /// Scores every empty cell from the value grid, weighting own potential
    /// above blocking and adding a small random perturbation so play is not
    /// fully deterministic. On an untouched board the centre wins out.
    /// Fails only when no empty cell remains.
    pub fn find_best_move<R: Rng + ?Sized>(
        &self,
        side: Side,
        rng: &mut R,
    ) -> Result<(usize, usize), GameError> {
        let centre = (GRID_SIZE / 2, GRID_SIZE / 2);
        let mut best = if self.grid.at(centre.0, centre.1).is_none() {
            // floor score for the centre, so an all-zero board prefers it
            Some((centre, ATTACK_FACTOR))
        } else {
            None
        };

        for y in 0..GRID_SIZE {
            for x in 0..GRID_SIZE {
                if self.grid.at(x, y).is_some() {
                    continue;
                }
                let attack = self.values.at(x, y, side);
                let defence = self.values.at(x, y, side.opponent());
                let score =
                    attack * (16 + ATTACK_FACTOR) / 16 + defence + rng.gen_range(0..ATTACK_FACTOR);
                match best {
                    Some((_, top)) if score <= top => {}
                    _ => best = Some(((x, y), score)),
                }
            }
        }

        best.map(|(cell, _)| cell).ok_or(GameError::BoardFull)
    }

    /// True once a side has won or the draw heuristic has tripped
    pub fn is_game_over(&self) -> bool {
        self.status != Status::InProgress
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// The moves played so far, oldest first
    pub fn move_log(&self) -> &[MoveRecord] {
        self.log.entries()
    }

    /// A side's current worth for one cell, for diagnostics and tests
    pub fn value_of(&self, x: usize, y: usize, side: Side) -> Result<i32, GameError> {
        self.values.value(x, y, side)
    }

    /// Mark the most recent move as the point where the players swapped
    /// sides
    pub fn note_side_switch(&mut self) {
        self.log.annotate_last(Note::SwitchedSides);
    }

    #[cfg(test)]
    pub(crate) fn window_count(&self, window: Window, side: Side) -> u8 {
        self.tracker.count(window, side)
    }

    /// Return every component to its fresh-game state
    pub fn reset(&mut self) {
        self.grid.clear();
        self.tracker.reset();
        self.values.reset();
        self.log.clear();
        self.status = Status::InProgress;
    }

    // walk backward along the winning direction to the start of the run,
    // then take the first five cells forward
    fn trace_line(
        &self,
        x: usize,
        y: usize,
        side: Side,
        direction: Direction,
    ) -> [(usize, usize); WIN_LENGTH] {
        let (dx, dy) = direction.step();
        let (mut sx, mut sy) = (x as isize, y as isize);
        loop {
            let (px, py) = (sx - dx, sy - dy);
            if px < 0 || py < 0 || px >= GRID_SIZE as isize || py >= GRID_SIZE as isize {
                break;
            }
            if self.grid.at(px as usize, py as usize) != Some(side) {
                break;
            }
            sx = px;
            sy = py;
        }

        let mut line = [(0, 0); WIN_LENGTH];
        for (k, cell) in line.iter_mut().enumerate() {
            cell.0 = (sx + dx * k as isize) as usize;
            cell.1 = (sy + dy * k as isize) as usize;
        }
        line
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Deref for Engine {
    type Target = Grid;

    fn deref(&self) -> &Self::Target {
        &self.grid
    }
}
