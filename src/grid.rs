use std::fmt;

use crate::errors::GameError;
use crate::GRID_SIZE;

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Black,
    White,
}

impl Side {
    /// The other player
    pub fn opponent(self) -> Self {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    // stable index for per-side tables
    pub(crate) fn index(self) -> usize {
        match self {
            Side::Black => 0,
            Side::White => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Side::Black => write!(f, "Black"),
            Side::White => write!(f, "White"),
        }
    }
}

/// The 19x19 board, stored as a flat row-major array of cells
#[derive(Clone)]
pub struct Grid {
    cells: [Option<Side>; GRID_SIZE * GRID_SIZE],
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            cells: [None; GRID_SIZE * GRID_SIZE],
        }
    }
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bounds check shared by every coordinate-taking operation
    pub fn in_bounds(x: usize, y: usize) -> bool {
        x < GRID_SIZE && y < GRID_SIZE
    }

    /// The contents of a cell, or an error for off-board coordinates
    pub fn cell(&self, x: usize, y: usize) -> Result<Option<Side>, GameError> {
        if !Self::in_bounds(x, y) {
            return Err(GameError::OutOfRange { x, y });
        }
        Ok(self.cells[y * GRID_SIZE + x])
    }

    // unchecked read for internal loops over valid coordinates
    pub(crate) fn at(&self, x: usize, y: usize) -> Option<Side> {
        self.cells[y * GRID_SIZE + x]
    }

    // caller has already validated bounds and vacancy
    pub(crate) fn place(&mut self, x: usize, y: usize, side: Side) {
        self.cells[y * GRID_SIZE + x] = Some(side);
    }

    pub(crate) fn clear(&mut self) {
        self.cells = [None; GRID_SIZE * GRID_SIZE];
    }
}
