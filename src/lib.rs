//! An evaluation engine for the board game 'five in a row' (Gomoku)
//!
//! The engine maintains, incrementally and exactly, a heuristic valuation
//! of every empty cell as stones are placed on a 19x19 board, detects
//! completed rows of five, and selects moves for an automated player.
//!
//! # Basic Usage
//!
//! ```
//! use gomoku_ai::{engine::Engine, grid::Side};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut engine = Engine::new();
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! engine.place_stone(9, 9, Side::Black)?;
//! let (x, y) = engine.find_best_move(Side::White, &mut rng)?;
//! engine.place_stone(x, y, Side::White)?;
//!
//! assert!(!engine.is_game_over());
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod errors;

pub mod grid;

pub mod window;

pub mod tracker;

pub mod value;

pub mod movelog;

pub mod engine;


pub use engine::{Engine, Status, Win};
pub use errors::GameError;
pub use grid::{Grid, Side};
pub use movelog::{MoveRecord, Note};
pub use window::Direction;

/// The width and height of the game board in cells
pub const GRID_SIZE: usize = 19;

/// The number of aligned stones that completes a winning line
pub const WIN_LENGTH: usize = 5;

/// The number of anchor positions a window can take along one axis
pub const ANCHOR_SPAN: usize = GRID_SIZE - WIN_LENGTH + 1;

/// The total number of length-5 windows on the board: one horizontal and
/// one vertical family of `GRID_SIZE * ANCHOR_SPAN` windows each, plus two
/// diagonal families of `ANCHOR_SPAN * ANCHOR_SPAN`
pub const WINDOW_COUNT: usize = 2 * GRID_SIZE * ANCHOR_SPAN + 2 * ANCHOR_SPAN * ANCHOR_SPAN;

// ensure a window fits on the board, otherwise the anchor arithmetic underflows
const_assert!(WIN_LENGTH <= GRID_SIZE);
