//! Tunable settings for `TourSearch`, adjusted by name like engine options.

use crate::tour_state::square::Square;
use crate::tour_state::tour_rules::DEFAULT_START_SQUARE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOrderingKind {
    Warnsdorff,
    Canonical,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TourConfig {
    pub start_square: Square,
    pub use_memo: bool,
    pub memo_mb: usize,
    pub ordering: MoveOrderingKind,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            start_square: DEFAULT_START_SQUARE,
            use_memo: true,
            memo_mb: 4,
            ordering: MoveOrderingKind::Warnsdorff,
        }
    }
}

impl TourConfig {
    /// Effective memo size; zero whenever memoization is switched off.
    #[inline]
    pub fn effective_memo_mb(&self) -> usize {
        if self.use_memo {
            self.memo_mb
        } else {
            0
        }
    }

    pub fn set_option(&mut self, name: &str, value: &str) -> Result<(), String> {
        if name.eq_ignore_ascii_case("StartSquare") {
            self.start_square = Square::parse(value).map_err(|e| e.to_string())?;
            return Ok(());
        }
        if name.eq_ignore_ascii_case("Memo") {
            let v = value.trim().to_ascii_lowercase();
            self.use_memo = match v.as_str() {
                "true" | "1" | "yes" | "on" => true,
                "false" | "0" | "no" | "off" => false,
                _ => return Err(format!("invalid Memo value '{value}'")),
            };
            return Ok(());
        }
        if name.eq_ignore_ascii_case("MemoMb") {
            self.memo_mb = value
                .trim()
                .parse::<usize>()
                .map_err(|_| format!("invalid MemoMb value '{value}'"))?;
            return Ok(());
        }
        if name.eq_ignore_ascii_case("Ordering") {
            let v = value.trim().to_ascii_lowercase();
            self.ordering = match v.as_str() {
                "warnsdorff" | "heuristic" => MoveOrderingKind::Warnsdorff,
                "canonical" | "plain" => MoveOrderingKind::Canonical,
                _ => return Err(format!("invalid Ordering value '{value}'")),
            };
            return Ok(());
        }
        Err(format!("unknown option '{name}'"))
    }
}
