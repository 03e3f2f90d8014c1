//! Candidate ordering for the next knight move.
//!
//! `WarnsdorffOrdering` sorts the free knight targets by onward degree, the
//! number of free squares a knight could continue to from there, lowest
//! first. The sort is stable over `KNIGHT_OFFSETS` order, which makes that
//! order the tie-breaker. `CanonicalOrdering` skips the sort and yields plain
//! depth-first backtracking.

use crate::moves::knight_moves::{knight_attacks, knight_targets};
use crate::tour_state::board_state::BoardState;
use crate::tour_state::square::Square;

pub trait MoveOrdering: Send + Sync {
    /// Free knight targets from `from`, in the order the search should try them.
    fn ordered_candidates(&self, board: &BoardState, from: Square) -> Vec<Square>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WarnsdorffOrdering;

#[derive(Debug, Clone, Copy, Default)]
pub struct CanonicalOrdering;

/// Count of free knight targets from `square` on `board` as it stands.
///
/// `square` itself never counts toward its own degree.
#[inline]
pub fn onward_degree(board: &BoardState, square: Square) -> u32 {
    (knight_attacks(square) & !board.occupied_mask()).count_ones()
}

impl MoveOrdering for WarnsdorffOrdering {
    fn ordered_candidates(&self, board: &BoardState, from: Square) -> Vec<Square> {
        let mut scored: Vec<(u32, Square)> = knight_targets(from)
            .filter(|sq| board.is_free(*sq))
            .map(|sq| (onward_degree(board, sq), sq))
            .collect();
        scored.sort_by_key(|(degree, _)| *degree);
        scored.into_iter().map(|(_, sq)| sq).collect()
    }
}

impl MoveOrdering for CanonicalOrdering {
    fn ordered_candidates(&self, board: &BoardState, from: Square) -> Vec<Square> {
        knight_targets(from).filter(|sq| board.is_free(*sq)).collect()
    }
}
