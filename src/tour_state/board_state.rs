//! Mutable occupancy grid for a tour in progress.
//!
//! `BoardState` stores the visit order of every square (0 = unvisited) next to
//! an occupancy bitboard kept in sync with it, so move ordering and memo keys
//! never have to scan the grid.

use crate::moves::knight_moves::is_knight_move;
use crate::tour_state::square::Square;
use crate::tour_state::tour_rules::BOARD_SQUARES;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    // Visit order per square, indexed by `Square::index`.
    move_indices: [u8; 64],

    // Occupancy cache, bit `Square::index` set when visited.
    occupied: u64,

    // Most recently assigned move index (0 on an empty board).
    last_move: u8,
}

impl Default for BoardState {
    fn default() -> Self {
        Self {
            move_indices: [0; 64],
            occupied: 0,
            last_move: 0,
        }
    }
}

impl BoardState {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// True iff `(row, col)` is on the board and not yet visited.
    #[inline]
    pub fn is_valid_move(&self, row: i8, col: i8) -> bool {
        if !(0..8).contains(&row) || !(0..8).contains(&col) {
            return false;
        }
        self.is_free(Square::at(row as u8, col as u8))
    }

    #[inline]
    pub fn is_free(&self, square: Square) -> bool {
        self.occupied & square.bit() == 0
    }

    /// Mark `square` with `move_index`.
    ///
    /// The caller guarantees `square` is unvisited and `move_index` is the next
    /// consecutive index; anything else panics.
    pub fn occupy(&mut self, square: Square, move_index: u8) {
        assert!(self.is_free(square), "occupy on visited square {square}");
        assert_eq!(
            move_index,
            self.last_move + 1,
            "move index {move_index} does not follow {}",
            self.last_move
        );
        self.move_indices[square.index()] = move_index;
        self.occupied |= square.bit();
        self.last_move = move_index;
    }

    /// Undo the most recent `occupy`. Only the newest square may be vacated.
    pub fn vacate(&mut self, square: Square) {
        assert!(
            self.last_move != 0 && self.move_indices[square.index()] == self.last_move,
            "vacate on {square}, which is not the newest square"
        );
        self.move_indices[square.index()] = 0;
        self.occupied &= !square.bit();
        self.last_move -= 1;
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.last_move == BOARD_SQUARES
    }

    #[inline]
    pub fn move_index(&self, square: Square) -> u8 {
        self.move_indices[square.index()]
    }

    #[inline]
    pub fn occupied_mask(&self) -> u64 {
        self.occupied
    }

    #[inline]
    pub fn visited_count(&self) -> u8 {
        self.last_move
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.last_move == 0
    }

    /// Visited squares ordered by move index.
    pub fn path(&self) -> Vec<Square> {
        let mut path = vec![Square::at(0, 0); self.last_move as usize];
        for index in 0..BOARD_SQUARES {
            let move_index = self.move_indices[index as usize];
            if move_index != 0 {
                path[move_index as usize - 1] = Square::from_index(index);
            }
        }
        path
    }

    /// Check that the visited squares form one simple knight path numbered
    /// `1..=m` without gaps, where `m` is the newest move index.
    pub fn is_consistent_path(&self) -> bool {
        if self.occupied.count_ones() != self.last_move as u32 {
            return false;
        }

        let mut by_index: [Option<Square>; 64] = [None; 64];
        for index in 0..BOARD_SQUARES {
            let move_index = self.move_indices[index as usize];
            let marked = move_index != 0;
            let bit_set = self.occupied & (1u64 << index) != 0;
            if marked != bit_set || move_index > self.last_move {
                return false;
            }
            if marked {
                let slot = &mut by_index[move_index as usize - 1];
                if slot.is_some() {
                    return false;
                }
                *slot = Some(Square::from_index(index));
            }
        }

        let path = &by_index[..self.last_move as usize];
        if path.iter().any(Option::is_none) {
            return false;
        }
        path.windows(2).all(|pair| match (pair[0], pair[1]) {
            (Some(from), Some(to)) => is_knight_move(from, to),
            _ => false,
        })
    }
}
