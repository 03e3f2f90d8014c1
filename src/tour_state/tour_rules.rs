//! Fixed board dimensions and defaults for the 8x8 knight's tour.

use crate::tour_state::square::Square;

pub const BOARD_SIZE: u8 = 8;
pub const BOARD_SQUARES: u8 = BOARD_SIZE * BOARD_SIZE;

/// Start square used until the front-end selects another one (row 1, col 7).
pub const DEFAULT_START_SQUARE: Square = Square::at(1, 7);
