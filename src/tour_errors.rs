//! Errors for input that reaches the tour engine from outside.
//!
//! Everything the search generates internally is valid by construction, and
//! violations of its own preconditions panic. `TourErrors` only covers what a
//! front-end can get wrong: square text and caller-supplied prefix paths.
//! Option parsing keeps the `Result<(), String>` shape used by `set_option`.

use std::fmt;

use crate::tour_state::square::Square;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TourErrors {
    /// Square text that is neither `h2`-style algebraic nor `row,col`.
    ///
    /// Payload: the offending text.
    InvalidSquareString(String),

    /// Numeric coordinates outside `0..8`.
    ///
    /// Payload: (row, col) as given.
    InvalidRowOrCol((u8, u8)),

    /// A prefix path with no squares.
    EmptyPath,

    /// A prefix path longer than the board.
    ///
    /// Payload: the rejected length.
    PathTooLong(usize),

    /// A prefix path visiting the same square twice.
    RepeatedSquare(Square),

    /// Two consecutive prefix squares that are not a knight move apart.
    ///
    /// Payload: (from, to).
    NotAKnightMove((Square, Square)),
}

impl fmt::Display for TourErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TourErrors::InvalidSquareString(text) => write!(f, "invalid square '{text}'"),
            TourErrors::InvalidRowOrCol((row, col)) => {
                write!(f, "row/col ({row}, {col}) is off the board")
            }
            TourErrors::EmptyPath => write!(f, "path is empty"),
            TourErrors::PathTooLong(len) => write!(f, "path has {len} squares, board has 64"),
            TourErrors::RepeatedSquare(sq) => write!(f, "square {sq} visited twice"),
            TourErrors::NotAKnightMove((from, to)) => {
                write!(f, "{from} -> {to} is not a knight move")
            }
        }
    }
}

impl std::error::Error for TourErrors {}
