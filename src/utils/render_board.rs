//! Terminal-oriented rendering of a tour board.
//!
//! Row 0 is printed at the top, matching the rank digits of `Square`'s
//! text form (`row + 1`).

use crate::tour_state::board_state::BoardState;
use crate::tour_state::square::Square;
use crate::tour_state::tour_rules::BOARD_SIZE;

/// Render move numbers as an 8x8 grid, `.` for unvisited squares.
pub fn render_board(board: &BoardState) -> String {
    let mut out = String::new();
    out.push_str("    a  b  c  d  e  f  g  h\n");

    for row in 0..BOARD_SIZE {
        out.push(char::from(b'1' + row));
        out.push(' ');

        for col in 0..BOARD_SIZE {
            match board.move_index(Square::at(row, col)) {
                0 => out.push_str("  ."),
                n => out.push_str(&format!("{n:>3}")),
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + row));
        out.push('\n');
    }

    out.push_str("    a  b  c  d  e  f  g  h");
    out
}
