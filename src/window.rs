use std::fmt;

use crate::{ANCHOR_SPAN, GRID_SIZE, WIN_LENGTH};

// dense per-direction anchor table size; anchors that never form a valid
// window leave their slot untouched
pub(crate) const SLOT_COUNT: usize = Direction::ALL.len() * GRID_SIZE * GRID_SIZE;

/// The four axes a winning line can lie on, in the order win detection
/// scans them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Horizontal,
    DiagonalLeft,
    DiagonalRight,
    Vertical,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::DiagonalLeft,
        Direction::DiagonalRight,
        Direction::Vertical,
    ];

    /// The unit step between consecutive cells of a window on this axis
    pub fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (1, 0),
            Direction::DiagonalLeft => (-1, 1),
            Direction::DiagonalRight => (1, 1),
            Direction::Vertical => (0, 1),
        }
    }

    // offset of this direction's block in the anchor table
    pub(crate) fn index(self) -> usize {
        match self {
            Direction::Horizontal => 0,
            Direction::DiagonalLeft => 1,
            Direction::DiagonalRight => 2,
            Direction::Vertical => 3,
        }
    }

    // a window anchored here must fit on the board in full
    pub(crate) fn anchor_in_range(self, ax: usize, ay: usize) -> bool {
        match self {
            Direction::Horizontal => ax < ANCHOR_SPAN && ay < GRID_SIZE,
            Direction::DiagonalLeft => {
                (WIN_LENGTH - 1..GRID_SIZE).contains(&ax) && ay < ANCHOR_SPAN
            }
            Direction::DiagonalRight => ax < ANCHOR_SPAN && ay < ANCHOR_SPAN,
            Direction::Vertical => ax < GRID_SIZE && ay < ANCHOR_SPAN,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Direction::Horizontal => write!(f, "horizontal"),
            Direction::DiagonalLeft => write!(f, "left diagonal"),
            Direction::DiagonalRight => write!(f, "right diagonal"),
            Direction::Vertical => write!(f, "vertical"),
        }
    }
}

/// One of the 1140 length-5 lines on the board, identified by its axis and
/// the cell it starts from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub direction: Direction,
    pub anchor: (usize, usize),
}

impl Window {
    /// Every window on the board, direction-major
    pub fn all() -> impl Iterator<Item = Window> {
        Direction::ALL.iter().flat_map(|&direction| {
            (0..GRID_SIZE).flat_map(move |ay| {
                (0..GRID_SIZE).filter_map(move |ax| {
                    if direction.anchor_in_range(ax, ay) {
                        Some(Window {
                            direction,
                            anchor: (ax, ay),
                        })
                    } else {
                        None
                    }
                })
            })
        })
    }

    /// The windows that cover a given cell
    ///
    /// A corner cell sits in 3 windows, the centre in 20.
    pub fn through(x: usize, y: usize) -> impl Iterator<Item = Window> {
        Direction::ALL.iter().flat_map(move |&direction| {
            let (dx, dy) = direction.step();
            (0..WIN_LENGTH).filter_map(move |k| {
                let ax = x as isize - dx * k as isize;
                let ay = y as isize - dy * k as isize;
                if ax < 0 || ay < 0 {
                    return None;
                }
                let (ax, ay) = (ax as usize, ay as usize);
                if direction.anchor_in_range(ax, ay) {
                    Some(Window {
                        direction,
                        anchor: (ax, ay),
                    })
                } else {
                    None
                }
            })
        })
    }

    /// The five cells this window covers, anchor first
    pub fn cells(self) -> [(usize, usize); WIN_LENGTH] {
        let (dx, dy) = self.direction.step();
        let (ax, ay) = self.anchor;
        let mut cells = [(0, 0); WIN_LENGTH];
        for (k, cell) in cells.iter_mut().enumerate() {
            cell.0 = (ax as isize + dx * k as isize) as usize;
            cell.1 = (ay as isize + dy * k as isize) as usize;
        }
        cells
    }

    pub(crate) fn slot(self) -> usize {
        let (ax, ay) = self.anchor;
        self.direction.index() * GRID_SIZE * GRID_SIZE + ay * GRID_SIZE + ax
    }
}
