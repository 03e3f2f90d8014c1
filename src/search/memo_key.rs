//! Memo keys for tour search states.
//!
//! Solvability of the rest of a tour depends only on which squares are
//! already visited and on the square the knight is about to enter, never on
//! the order the visited squares were reached in. A key therefore pairs the
//! occupancy bitboard (before entering) with the entered square.

use crate::tour_state::board_state::BoardState;
use crate::tour_state::square::Square;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemoKey {
    pub occupied: u64,
    pub head: Square,
}

impl MemoKey {
    #[inline]
    pub fn new(occupied: u64, head: Square) -> Self {
        Self { occupied, head }
    }

    /// Key for entering `head` from the board as it stands.
    #[inline]
    pub fn for_entry(board: &BoardState, head: Square) -> Self {
        Self::new(board.occupied_mask(), head)
    }

    /// Well-mixed 64-bit hash used to pick a table slot.
    #[inline]
    pub fn slot_hash(&self) -> u64 {
        let seed = self
            .occupied
            .wrapping_add((self.head.index() as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15));
        mix64(seed)
    }
}

#[inline]
fn mix64(value: u64) -> u64 {
    // splitmix64 finalizer
    let mut z = value.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
