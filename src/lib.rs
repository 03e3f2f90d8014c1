//! Crate root module declarations for the knight's tour solver.
//!
//! Exposes the board model, knight move tables, the backtracking search with
//! its move ordering and memo table, the console front-end and text helpers
//! so binaries, benches and tests can import stable module paths.

pub mod tour_errors;

pub mod tour_state {
    pub mod board_state;
    pub mod square;
    pub mod tour_rules;
}

pub mod moves {
    pub mod knight_moves;
}

pub mod search {
    pub mod memo_key;
    pub mod memo_table;
    pub mod move_ordering;
    pub mod search_control;
    pub mod tour_config;
    pub mod tour_events;
    pub mod tour_search;
}

pub mod console {
    pub mod console_top;
}

pub mod utils {
    pub mod render_board;
}
