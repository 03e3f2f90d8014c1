//! Backtracking knight's tour search.
//!
//! `TourSearch` owns the board, the memo table and the cancellation control
//! for one search at a time. The recursion marks a square, reports it to the
//! observer, tries the ordered candidates depth-first and undoes the square
//! when none of them completes the tour. Depth is bounded by the 64 squares
//! and branching by the 8 knight offsets.
//!
//! Cancellation is cooperative: the stop flag is polled at the top of every
//! recursive call and after every attempted candidate. A stopped search
//! returns immediately without unwinding the board, so the partial path
//! stays visible until `reset` or the next `start`.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use crate::moves::knight_moves::is_knight_move;
use crate::search::memo_key::MemoKey;
use crate::search::memo_table::{MemoStats, MemoTable};
use crate::search::move_ordering::{CanonicalOrdering, MoveOrdering, WarnsdorffOrdering};
use crate::search::search_control::{SearchControl, StopHandle};
use crate::search::tour_config::{MoveOrderingKind, TourConfig};
use crate::search::tour_events::TourObserver;
use crate::tour_errors::TourErrors;
use crate::tour_state::board_state::BoardState;
use crate::tour_state::square::Square;
use crate::tour_state::tour_rules::BOARD_SQUARES;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Recursive calls that passed the stop check, memo hits included.
    pub nodes: u64,
    pub backtracks: u64,
    pub memo_hits: u64,
    pub max_depth: u8,
    pub elapsed_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    Found,
    Stopped,
    Exhausted,
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SearchOutcome::Found => "found",
            SearchOutcome::Stopped => "stopped",
            SearchOutcome::Exhausted => "exhausted",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone)]
pub struct SearchResult {
    pub found: bool,
    /// Set when the run ended because of a stop request, never together with `found`.
    pub cancelled: bool,
    pub board: BoardState,
    pub stats: SearchStats,
    pub memo_stats: MemoStats,
    pub info_lines: Vec<String>,
}

impl SearchResult {
    pub fn outcome(&self) -> SearchOutcome {
        if self.found {
            SearchOutcome::Found
        } else if self.cancelled {
            SearchOutcome::Stopped
        } else {
            SearchOutcome::Exhausted
        }
    }

    /// The complete tour in visit order, when one was found.
    pub fn path(&self) -> Option<Vec<Square>> {
        self.found.then(|| self.board.path())
    }
}

#[derive(Debug)]
pub struct TourSearch {
    board: BoardState,
    memo: MemoTable,
    config: TourConfig,
    control: Arc<SearchControl>,
    stats: SearchStats,
    /// Set when a stop check inside the recursion saw the flag.
    cancelled: bool,
}

impl Default for TourSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl TourSearch {
    pub fn new() -> Self {
        Self::with_config(TourConfig::default())
    }

    pub fn with_config(config: TourConfig) -> Self {
        Self {
            board: BoardState::new_empty(),
            memo: MemoTable::new_with_mb(config.effective_memo_mb()),
            config,
            control: SearchControl::new(),
            stats: SearchStats::default(),
            cancelled: false,
        }
    }

    #[inline]
    pub fn config(&self) -> &TourConfig {
        &self.config
    }

    #[inline]
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    #[inline]
    pub fn memo(&self) -> &MemoTable {
        &self.memo
    }

    pub fn set_option(&mut self, name: &str, value: &str) -> Result<(), String> {
        let memo_mb_before = self.config.effective_memo_mb();
        self.config.set_option(name, value)?;
        if self.config.effective_memo_mb() != memo_mb_before {
            self.memo = MemoTable::new_with_mb(self.config.effective_memo_mb());
        }
        Ok(())
    }

    pub fn stop_handle(&self) -> StopHandle {
        StopHandle::new(self.control.clone())
    }

    /// Request cancellation of the running search.
    #[inline]
    pub fn stop(&self) {
        self.control.request_stop();
    }

    /// Clear the board, the memo table and the last run's counters.
    pub fn reset(&mut self) {
        self.board = BoardState::new_empty();
        self.memo.clear();
        self.stats = SearchStats::default();
        self.cancelled = false;
    }

    /// Search from the configured start square.
    pub fn start_default(&mut self, observer: &mut dyn TourObserver) -> SearchResult {
        let start = self.config.start_square;
        self.start(start, observer)
    }

    /// Fresh search from `start`: board and memo table are reset first.
    pub fn start(&mut self, start: Square, observer: &mut dyn TourObserver) -> SearchResult {
        self.reset();
        self.run(start, 1, observer)
    }

    /// Continue a tour from a caller-supplied prefix path.
    ///
    /// The board is rebuilt from `prefix` (reporting each square but the last
    /// as a move) and the search resumes from the last square. The memo table
    /// is kept, since its keys do not depend on how a board was reached.
    pub fn start_from_path(
        &mut self,
        prefix: &[Square],
        observer: &mut dyn TourObserver,
    ) -> Result<SearchResult, TourErrors> {
        validate_path(prefix)?;
        let Some((&head, placed)) = prefix.split_last() else {
            return Err(TourErrors::EmptyPath);
        };

        self.board = BoardState::new_empty();
        self.stats = SearchStats::default();
        for (i, &sq) in placed.iter().enumerate() {
            let move_number = i as u8 + 1;
            self.board.occupy(sq, move_number);
            observer.on_move(sq, move_number);
        }

        Ok(self.run(head, prefix.len() as u8, observer))
    }

    fn run(
        &mut self,
        head: Square,
        move_number: u8,
        observer: &mut dyn TourObserver,
    ) -> SearchResult {
        self.control.begin_run();
        self.cancelled = false;
        observer.on_search_started(head);
        let started_at = Instant::now();

        let found = self.search(head, move_number, observer);
        // A stop that arrives after the last check does not turn an
        // exhausted search into a cancelled one.
        let cancelled = !found && self.cancelled;

        self.stats.elapsed_ms = started_at.elapsed().as_millis() as u64;
        self.control.end_run();
        observer.on_search_ended(found);

        let mut result = SearchResult {
            found,
            cancelled,
            board: self.board.clone(),
            stats: self.stats,
            memo_stats: self.memo.stats(),
            info_lines: Vec::new(),
        };
        result.info_lines = self.info_lines(head, move_number, &result);
        result
    }

    fn search(&mut self, square: Square, move_number: u8, observer: &mut dyn TourObserver) -> bool {
        if self.control.should_stop() {
            self.cancelled = true;
            return false;
        }
        self.stats.nodes += 1;
        self.control.add_nodes(1);

        // A cached success still has to be walked to put its squares on the
        // board, so only cached failures cut the search short.
        let key = MemoKey::for_entry(&self.board, square);
        if self.memo.probe(key) == Some(false) {
            self.stats.memo_hits += 1;
            return false;
        }

        self.board.occupy(square, move_number);
        self.stats.max_depth = self.stats.max_depth.max(move_number);
        observer.on_move(square, move_number);

        if move_number == BOARD_SQUARES {
            debug_assert!(self.board.is_consistent_path());
            observer.on_solved(&self.board.path());
            self.memo.store(key, true);
            return true;
        }

        for candidate in self.ordered_candidates(square) {
            if self.search(candidate, move_number + 1, observer) {
                self.memo.store(key, true);
                return true;
            }
            if self.control.should_stop() {
                self.cancelled = true;
                return false;
            }
        }

        self.board.vacate(square);
        self.stats.backtracks += 1;
        observer.on_backtrack(square);
        self.memo.store(key, false);
        false
    }

    fn ordered_candidates(&self, from: Square) -> Vec<Square> {
        match self.config.ordering {
            MoveOrderingKind::Warnsdorff => WarnsdorffOrdering.ordered_candidates(&self.board, from),
            MoveOrderingKind::Canonical => CanonicalOrdering.ordered_candidates(&self.board, from),
        }
    }

    fn info_lines(&self, head: Square, move_number: u8, result: &SearchResult) -> Vec<String> {
        let stats = result.stats;
        let memo = result.memo_stats;
        vec![
            format!(
                "info string tour from {} move {} ordering {:?} memo_mb {}",
                head,
                move_number,
                self.config.ordering,
                self.config.effective_memo_mb()
            ),
            format!(
                "info string tour outcome {} nodes {} backtracks {} memo_hits {} max_depth {} elapsed_ms {}",
                result.outcome(),
                stats.nodes,
                stats.backtracks,
                stats.memo_hits,
                stats.max_depth,
                stats.elapsed_ms
            ),
            format!(
                "info string memo probes {} hits {} stores {} filled {} size_entries {}",
                memo.probes,
                memo.hits,
                memo.stores,
                self.memo.filled(),
                self.memo.len()
            ),
        ]
    }
}

/// Check that `path` is a simple knight path that fits on the board.
pub fn validate_path(path: &[Square]) -> Result<(), TourErrors> {
    if path.is_empty() {
        return Err(TourErrors::EmptyPath);
    }
    if path.len() > BOARD_SQUARES as usize {
        return Err(TourErrors::PathTooLong(path.len()));
    }

    let mut seen = 0u64;
    for &sq in path {
        if seen & sq.bit() != 0 {
            return Err(TourErrors::RepeatedSquare(sq));
        }
        seen |= sq.bit();
    }
    for pair in path.windows(2) {
        if !is_knight_move(pair[0], pair[1]) {
            return Err(TourErrors::NotAKnightMove((pair[0], pair[1])));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::{validate_path, SearchOutcome, TourSearch};
    use crate::search::search_control::StopHandle;
    use crate::search::tour_config::TourConfig;
    use crate::search::tour_events::{EventLog, NullObserver, TourEvent, TourObserver};
    use crate::tour_errors::TourErrors;
    use crate::tour_state::square::Square;
    use crate::tour_state::tour_rules::DEFAULT_START_SQUARE;

    fn small_memo() -> TourConfig {
        TourConfig {
            memo_mb: 1,
            ..TourConfig::default()
        }
    }

    fn assert_full_tour(path: &[Square], start: Square) {
        assert_eq!(path.len(), 64);
        assert_eq!(path[0], start);
        assert!(validate_path(path).is_ok(), "not a knight tour: {path:?}");
    }

    /// Calls `stop` from inside the move callback once `stop_at` is reached.
    struct StopAtMove {
        handle: StopHandle,
        stop_at: u8,
        log: EventLog,
    }

    impl TourObserver for StopAtMove {
        fn on_move(&mut self, square: Square, move_number: u8) {
            self.log.on_move(square, move_number);
            if move_number == self.stop_at {
                self.handle.stop();
            }
        }

        fn on_backtrack(&mut self, square: Square) {
            self.log.on_backtrack(square);
        }

        fn on_solved(&mut self, path: &[Square]) {
            self.log.on_solved(path);
        }

        fn on_search_ended(&mut self, found: bool) {
            self.log.on_search_ended(found);
        }
    }

    #[test]
    fn default_start_finds_full_tour() {
        let mut search = TourSearch::with_config(small_memo());
        let mut log = EventLog::new();
        let result = search.start(DEFAULT_START_SQUARE, &mut log);

        assert!(result.found);
        assert!(!result.cancelled);
        assert_eq!(result.outcome(), SearchOutcome::Found);
        assert!(result.board.is_complete());
        assert!(result.board.is_consistent_path());
        let path = result.path().expect("tour path");
        assert_full_tour(&path, DEFAULT_START_SQUARE);

        // Moves are numbered 1..=64 in emission order once backtracks are taken out.
        let mut expected = 1u8;
        for event in &log.events {
            if let TourEvent::Move(_, n) = event {
                if *n == expected {
                    expected += 1;
                }
            }
        }
        assert_eq!(expected, 65);
        assert_eq!(log.move_count() - log.backtrack_count(), 64);

        let solved: Vec<_> = log
            .events
            .iter()
            .filter(|e| matches!(e, TourEvent::Solved(_)))
            .collect();
        assert_eq!(solved, vec![&TourEvent::Solved(path)]);
        assert_eq!(log.events.last(), Some(&TourEvent::SearchEnded(true)));
        assert_eq!(result.info_lines.len(), 3);
        assert!(result.info_lines[1].contains("outcome found"));
    }

    #[test]
    fn every_start_square_finds_a_tour() {
        let mut search = TourSearch::with_config(small_memo());
        for index in 0..64u8 {
            let start = Square::from_index(index);
            let result = search.start(start, &mut NullObserver);
            assert!(result.found, "no tour from {start}");
            assert_full_tour(&result.path().expect("path"), start);
        }
    }

    #[test]
    fn seeded_random_starts_are_deterministic() {
        let mut rng = StdRng::seed_from_u64(0x5EED);
        let mut a = TourSearch::with_config(small_memo());
        let mut b = TourSearch::with_config(TourConfig {
            use_memo: false,
            ..TourConfig::default()
        });
        for _ in 0..8 {
            let start = Square::at(rng.random_range(0..8), rng.random_range(0..8));
            let with_memo = a.start(start, &mut NullObserver);
            let without_memo = b.start(start, &mut NullObserver);
            assert!(with_memo.found && without_memo.found);
            assert_eq!(with_memo.path(), without_memo.path());
        }
    }

    #[test]
    fn stop_from_move_callback_ends_search() {
        let mut search = TourSearch::with_config(small_memo());
        let mut observer = StopAtMove {
            handle: search.stop_handle(),
            stop_at: 5,
            log: EventLog::new(),
        };
        let result = search.start(DEFAULT_START_SQUARE, &mut observer);

        assert!(!result.found);
        assert!(result.cancelled);
        assert_eq!(result.outcome(), SearchOutcome::Stopped);
        assert_eq!(result.path(), None);

        let log = &observer.log;
        assert_eq!(log.move_count(), 5);
        assert_eq!(log.last_move().map(|(_, n)| n), Some(5));
        assert_eq!(log.events.last(), Some(&TourEvent::SearchEnded(false)));
        assert!(!log.events.iter().any(|e| matches!(e, TourEvent::Solved(_))));

        // The partial path is left in place for the caller to reset.
        assert_eq!(search.board().visited_count(), 5);
        assert!(search.board().is_consistent_path());
    }

    #[test]
    fn stop_before_start_is_cleared_by_start() {
        let mut search = TourSearch::with_config(small_memo());
        search.stop();
        let result = search.start(Square::at(0, 0), &mut NullObserver);
        assert!(result.found);
        assert!(!result.cancelled);
    }

    #[test]
    fn reset_after_partial_search_matches_fresh_run() {
        let mut search = TourSearch::with_config(small_memo());
        let mut observer = StopAtMove {
            handle: search.stop_handle(),
            stop_at: 9,
            log: EventLog::new(),
        };
        let partial = search.start(Square::at(4, 4), &mut observer);
        assert!(partial.cancelled);
        assert!(!search.board().is_empty());

        search.reset();
        assert!(search.board().is_empty());
        assert_eq!(search.board().occupied_mask(), 0);
        for index in 0..64u8 {
            assert_eq!(search.board().move_index(Square::from_index(index)), 0);
        }
        assert!(search.memo().is_empty());

        let mut after_reset = EventLog::new();
        let resumed = search.start(DEFAULT_START_SQUARE, &mut after_reset);

        let mut fresh_search = TourSearch::with_config(small_memo());
        let mut fresh = EventLog::new();
        let fresh_result = fresh_search.start(DEFAULT_START_SQUARE, &mut fresh);

        assert_eq!(after_reset.events, fresh.events);
        assert_eq!(resumed.path(), fresh_result.path());
        assert_eq!(resumed.stats.nodes, fresh_result.stats.nodes);
    }

    #[test]
    fn backtracking_prefix_gives_same_tour_with_and_without_memo() {
        let prefix = [Square::at(0, 2), Square::at(1, 4), Square::at(2, 6)];

        let mut with_memo = TourSearch::with_config(small_memo());
        let mut memo_log = EventLog::new();
        let memo_result = with_memo
            .start_from_path(&prefix, &mut memo_log)
            .expect("valid prefix");

        let mut without_memo = TourSearch::with_config(TourConfig {
            use_memo: false,
            ..TourConfig::default()
        });
        let plain_result = without_memo
            .start_from_path(&prefix, &mut NullObserver)
            .expect("valid prefix");

        assert!(memo_result.found && plain_result.found);
        assert_eq!(memo_result.path(), plain_result.path());
        let path = memo_result.path().expect("path");
        assert_eq!(&path[..3], &prefix);
        assert_full_tour(&path, prefix[0]);

        assert!(memo_result.stats.backtracks > 0);
        assert!(memo_result.stats.memo_hits > 0);
        assert_eq!(plain_result.stats.memo_hits, 0);
        assert!(memo_result.stats.backtracks <= plain_result.stats.backtracks);
        assert_eq!(
            memo_log.backtrack_count() as u64,
            memo_result.stats.backtracks
        );
    }

    #[test]
    fn identical_occupancy_reuses_cached_result() {
        // Two different orders over the same four squares, both ending boxed
        // in the a1 corner.
        let first = [
            Square::at(2, 1),
            Square::at(3, 3),
            Square::at(1, 2),
            Square::at(0, 0),
        ];
        let second = [
            Square::at(1, 2),
            Square::at(3, 3),
            Square::at(2, 1),
            Square::at(0, 0),
        ];

        let mut search = TourSearch::with_config(small_memo());
        let a = search
            .start_from_path(&first, &mut NullObserver)
            .expect("valid prefix");
        let mut log = EventLog::new();
        let b = search
            .start_from_path(&second, &mut log)
            .expect("valid prefix");

        assert!(!a.found && !b.found);
        assert_eq!(a.outcome(), SearchOutcome::Exhausted);
        assert_eq!(b.outcome(), SearchOutcome::Exhausted);
        assert_eq!(a.stats.memo_hits, 0);
        assert_eq!(a.stats.backtracks, 1);
        assert_eq!(b.stats.memo_hits, 1);
        assert_eq!(b.stats.backtracks, 0);
        // The cached answer is returned without re-entering the corner.
        assert_eq!(log.move_count(), 3);
        assert_eq!(log.events.last(), Some(&TourEvent::SearchEnded(false)));

        let mut uncached = TourSearch::with_config(TourConfig {
            use_memo: false,
            ..TourConfig::default()
        });
        let c = uncached
            .start_from_path(&second, &mut NullObserver)
            .expect("valid prefix");
        assert_eq!(c.found, b.found);
        assert_eq!(c.stats.memo_hits, 0);
    }

    /// Calls `stop` from inside the backtrack callback, once.
    struct StopOnBacktrack {
        handle: StopHandle,
        log: EventLog,
    }

    impl TourObserver for StopOnBacktrack {
        fn on_move(&mut self, square: Square, move_number: u8) {
            self.log.on_move(square, move_number);
        }

        fn on_backtrack(&mut self, square: Square) {
            self.log.on_backtrack(square);
            if !self.handle.is_stop_requested() {
                self.handle.stop();
            }
        }

        fn on_search_ended(&mut self, found: bool) {
            self.log.on_search_ended(found);
        }
    }

    #[test]
    fn stop_after_last_check_keeps_exhausted_outcome() {
        // a1 is boxed in by b3 and c2, so the head backtracks and the search ends.
        let prefix = [
            Square::at(2, 1),
            Square::at(3, 3),
            Square::at(1, 2),
            Square::at(0, 0),
        ];
        let mut search = TourSearch::with_config(small_memo());
        let mut observer = StopOnBacktrack {
            handle: search.stop_handle(),
            log: EventLog::new(),
        };
        let result = search
            .start_from_path(&prefix, &mut observer)
            .expect("valid prefix");

        assert!(observer.handle.is_stop_requested());
        assert_eq!(result.stats.backtracks, 1);
        assert!(!result.found);
        assert!(!result.cancelled);
        assert_eq!(result.outcome(), SearchOutcome::Exhausted);
        assert!(result.info_lines[1].contains("outcome exhausted"));
        assert_eq!(observer.log.backtrack_count(), 1);
        assert_eq!(
            observer.log.events.last(),
            Some(&TourEvent::SearchEnded(false))
        );
    }

    #[derive(Default)]
    struct StartWatcher {
        started: Vec<Square>,
        moves_before_start: usize,
    }

    impl TourObserver for StartWatcher {
        fn on_search_started(&mut self, head: Square) {
            self.started.push(head);
        }

        fn on_move(&mut self, _square: Square, _move_number: u8) {
            if self.started.is_empty() {
                self.moves_before_start += 1;
            }
        }
    }

    #[test]
    fn search_started_fires_once_after_arming() {
        let mut search = TourSearch::with_config(small_memo());
        search.stop();
        let mut watcher = StartWatcher::default();
        let result = search.start(Square::at(0, 0), &mut watcher);

        assert!(result.found);
        assert_eq!(watcher.started, vec![Square::at(0, 0)]);
        assert_eq!(watcher.moves_before_start, 0);
        assert!(!search.stop_handle().is_stop_requested());
    }

    #[test]
    fn stopped_prefix_search_leaves_memo_reusable() {
        let prefix = [Square::at(0, 2), Square::at(1, 4), Square::at(2, 6)];

        let mut fresh_search = TourSearch::with_config(small_memo());
        let fresh = fresh_search
            .start_from_path(&prefix, &mut NullObserver)
            .expect("valid prefix");
        assert!(fresh.found);

        let mut search = TourSearch::with_config(small_memo());
        let mut observer = StopOnBacktrack {
            handle: search.stop_handle(),
            log: EventLog::new(),
        };
        let stopped = search
            .start_from_path(&prefix, &mut observer)
            .expect("valid prefix");
        assert!(stopped.cancelled);
        assert_eq!(stopped.outcome(), SearchOutcome::Stopped);
        // Only the subtree that was genuinely exhausted got cached.
        assert_eq!(stopped.stats.backtracks, 1);
        assert_eq!(search.memo().stats().stores, 1);

        let resumed = search
            .start_from_path(&prefix, &mut NullObserver)
            .expect("valid prefix");
        assert_eq!(resumed.found, fresh.found);
        assert!(!resumed.cancelled);
        assert_eq!(resumed.path(), fresh.path());
    }

    #[test]
    fn canonical_ordering_completes_near_finished_tour() {
        let mut search = TourSearch::with_config(small_memo());
        let tour = search
            .start(DEFAULT_START_SQUARE, &mut NullObserver)
            .path()
            .expect("tour");

        search.set_option("Ordering", "canonical").expect("option");
        let result = search
            .start_from_path(&tour[..56], &mut NullObserver)
            .expect("valid prefix");
        assert!(result.found);
        let path = result.path().expect("path");
        assert_eq!(&path[..56], &tour[..56]);
        assert_full_tour(&path, DEFAULT_START_SQUARE);
    }

    #[test]
    fn full_path_prefix_is_solved_immediately() {
        let mut search = TourSearch::with_config(small_memo());
        let tour = search
            .start(Square::at(7, 0), &mut NullObserver)
            .path()
            .expect("tour");
        let mut log = EventLog::new();
        let result = search.start_from_path(&tour, &mut log).expect("valid");
        assert!(result.found);
        assert_eq!(log.move_count(), 64);
        assert_eq!(result.stats.nodes, 1);
    }

    #[test]
    fn invalid_prefixes_are_rejected() {
        let mut search = TourSearch::new();
        assert_eq!(
            search.start_from_path(&[], &mut NullObserver).err(),
            Some(TourErrors::EmptyPath)
        );
        assert_eq!(
            search
                .start_from_path(&[Square::at(0, 0), Square::at(1, 1)], &mut NullObserver)
                .err(),
            Some(TourErrors::NotAKnightMove((Square::at(0, 0), Square::at(1, 1))))
        );
        assert_eq!(
            search
                .start_from_path(
                    &[Square::at(0, 0), Square::at(1, 2), Square::at(0, 0)],
                    &mut NullObserver
                )
                .err(),
            Some(TourErrors::RepeatedSquare(Square::at(0, 0)))
        );
        let too_long = vec![Square::at(0, 0); 65];
        assert_eq!(
            validate_path(&too_long),
            Err(TourErrors::PathTooLong(65))
        );
        assert!(search.board().is_empty());
    }

    #[test]
    fn memo_option_rebuilds_table() {
        let mut search = TourSearch::new();
        assert!(search.memo().is_enabled());
        search.set_option("Memo", "off").expect("option");
        assert!(!search.memo().is_enabled());
        search.set_option("Memo", "on").expect("option");
        search.set_option("MemoMb", "1").expect("option");
        assert!(search.memo().is_enabled());
        assert!(search.set_option("Unknown", "1").is_err());
    }

    #[test]
    fn start_default_uses_configured_square() {
        let mut search = TourSearch::with_config(small_memo());
        search.set_option("StartSquare", "c3").expect("option");
        let result = search.start_default(&mut NullObserver);
        assert!(result.found);
        assert_eq!(result.path().expect("path")[0], Square::at(2, 2));
    }
}
