//! Square coordinates on the tour board.
//!
//! A `Square` is always on the board: `row` and `col` are both in `0..8`.
//! Off-board coordinates only exist transiently as signed `(row, col)` pairs
//! during move generation and are rejected by `Square::offset`.
//!
//! Text form: the file letter is the column (`a` = col 0) and the rank digit
//! is `row + 1`, so the default start `(1, 7)` reads `h2`. `row,col` with
//! zero-based numbers is accepted as well.

use std::fmt;

use crate::tour_errors::TourErrors;
use crate::tour_state::tour_rules::BOARD_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Build a square from coordinates known to be on the board.
    ///
    /// Panics on off-board input; use `Square::new` for untrusted values.
    #[inline]
    pub const fn at(row: u8, col: u8) -> Self {
        assert!(row < BOARD_SIZE && col < BOARD_SIZE, "square off the board");
        Self { row, col }
    }

    #[inline]
    pub fn new(row: u8, col: u8) -> Result<Self, TourErrors> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Ok(Self { row, col })
        } else {
            Err(TourErrors::InvalidRowOrCol((row, col)))
        }
    }

    /// Square for a bit index `0..64` (`row * 8 + col`).
    #[inline]
    pub const fn from_index(index: u8) -> Self {
        Self::at(index / BOARD_SIZE, index % BOARD_SIZE)
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    #[inline]
    pub const fn index(self) -> usize {
        (self.row as usize) * (BOARD_SIZE as usize) + self.col as usize
    }

    #[inline]
    pub const fn bit(self) -> u64 {
        1u64 << self.index()
    }

    /// Shift by a signed offset, returning `None` when the result leaves the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..BOARD_SIZE as i8).contains(&row) && (0..BOARD_SIZE as i8).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Parse `h2`-style algebraic text or zero-based `row,col`.
    pub fn parse(text: &str) -> Result<Self, TourErrors> {
        let trimmed = text.trim();
        if let Some((row, col)) = trimmed.split_once(',') {
            let row = row
                .trim()
                .parse::<u8>()
                .map_err(|_| TourErrors::InvalidSquareString(trimmed.to_owned()))?;
            let col = col
                .trim()
                .parse::<u8>()
                .map_err(|_| TourErrors::InvalidSquareString(trimmed.to_owned()))?;
            return Self::new(row, col);
        }

        let bytes = trimmed.as_bytes();
        if bytes.len() != 2 {
            return Err(TourErrors::InvalidSquareString(trimmed.to_owned()));
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(TourErrors::InvalidSquareString(trimmed.to_owned()));
        }
        Self::new(rank - b'1', file - b'a')
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            char::from(b'a' + self.col),
            char::from(b'1' + self.row)
        )
    }
}
