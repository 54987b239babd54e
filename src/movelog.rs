use std::fmt;

use crate::grid::Side;

/// Annotations attached to a logged move after the fact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Note {
    Won,
    Tied,
    SwitchedSides,
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Note::Won => write!(f, "won"),
            Note::Tied => write!(f, "tied"),
            Note::SwitchedSides => write!(f, "switched sides"),
        }
    }
}

/// One successful placement as the log remembers it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub seq: usize,
    pub side: Side,
    pub x: usize,
    pub y: usize,
    pub note: Option<Note>,
}

/// The ordered history of placements in the current game
#[derive(Default)]
pub struct MoveLog {
    entries: Vec<MoveRecord>,
}

impl MoveLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, side: Side, x: usize, y: usize) {
        let seq = self.entries.len() + 1;
        self.entries.push(MoveRecord {
            seq,
            side,
            x,
            y,
            note: None,
        });
    }

    // a note lands on the most recent move; with no moves yet it is dropped
    pub(crate) fn annotate_last(&mut self, note: Note) {
        if let Some(last) = self.entries.last_mut() {
            last.note = Some(note);
        }
    }

    pub fn entries(&self) -> &[MoveRecord] {
        &self.entries
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}
