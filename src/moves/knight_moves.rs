use crate::tour_state::square::Square;

/// Knight offsets as `(d_row, d_col)` in canonical order.
///
/// Move ordering breaks ties by position in this array.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (-1, -2),
    (-2, -1),
    (1, -2),
    (2, -1),
];

pub const KNIGHT_ATTACKS: [u64; 64] = generate_knight_attacks();

#[inline]
pub const fn knight_attacks(square: Square) -> u64 {
    KNIGHT_ATTACKS[square.index()]
}

/// On-board knight targets from `square`, in `KNIGHT_OFFSETS` order.
pub fn knight_targets(square: Square) -> impl Iterator<Item = Square> {
    KNIGHT_OFFSETS
        .into_iter()
        .filter_map(move |(d_row, d_col)| square.offset(d_row, d_col))
}

#[inline]
pub fn is_knight_move(from: Square, to: Square) -> bool {
    knight_attacks(from) & to.bit() != 0
}

const fn generate_knight_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let row = (sq / 8) as i32;
        let col = (sq % 8) as i32;
        let mut attacks = 0u64;

        let mut i = 0usize;
        while i < KNIGHT_OFFSETS.len() {
            let (d_row, d_col) = KNIGHT_OFFSETS[i];
            attacks |= set_if_valid(row + d_row as i32, col + d_col as i32);
            i += 1;
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}

const fn set_if_valid(row: i32, col: i32) -> u64 {
    if row < 0 || row > 7 || col < 0 || col > 7 {
        return 0;
    }

    let square = (row as usize) * 8 + (col as usize);
    1u64 << square
}
