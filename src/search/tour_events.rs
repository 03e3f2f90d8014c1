//! Event interface between the tour search and whatever presents it.
//!
//! Events are delivered synchronously: the search does not continue until
//! the observer returns. Observers own all pacing and drawing.

use crate::tour_state::square::Square;

pub trait TourObserver {
    /// The run is armed: stop requests from here on are honored.
    fn on_search_started(&mut self, _head: Square) {}

    /// A square was newly occupied (including the start square at 1).
    fn on_move(&mut self, _square: Square, _move_number: u8) {}

    /// A square was vacated while backtracking.
    fn on_backtrack(&mut self, _square: Square) {}

    /// All 64 squares are visited; `path` lists them in visit order.
    fn on_solved(&mut self, _path: &[Square]) {}

    /// The search returned, by success, exhaustion or cancellation.
    fn on_search_ended(&mut self, _found: bool) {}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl TourObserver for NullObserver {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TourEvent {
    Move(Square, u8),
    Backtrack(Square),
    Solved(Vec<Square>),
    SearchEnded(bool),
}

/// Observer that records every event in order.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    pub events: Vec<TourEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, TourEvent::Move(..)))
            .count()
    }

    pub fn backtrack_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, TourEvent::Backtrack(_)))
            .count()
    }

    pub fn last_move(&self) -> Option<(Square, u8)> {
        self.events.iter().rev().find_map(|e| match e {
            TourEvent::Move(sq, n) => Some((*sq, *n)),
            _ => None,
        })
    }
}

impl TourObserver for EventLog {
    fn on_move(&mut self, square: Square, move_number: u8) {
        self.events.push(TourEvent::Move(square, move_number));
    }

    fn on_backtrack(&mut self, square: Square) {
        self.events.push(TourEvent::Backtrack(square));
    }

    fn on_solved(&mut self, path: &[Square]) {
        self.events.push(TourEvent::Solved(path.to_vec()));
    }

    fn on_search_ended(&mut self, found: bool) {
        self.events.push(TourEvent::SearchEnded(found));
    }
}
