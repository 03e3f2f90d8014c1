//! Fixed-size memo table of tour solvability keyed by `MemoKey`.
//!
//! Direct indexing with full-key verification. A lost entry only costs a
//! re-search, so collisions simply overwrite unless the resident entry sits
//! much closer to the root than the newcomer. A table built with zero
//! capacity is disabled: probes miss and stores are dropped.

use crate::search::memo_key::MemoKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoEntry {
    pub key: MemoKey,
    pub solvable: bool,
}

impl MemoEntry {
    /// Number of squares already visited when the key was recorded.
    #[inline]
    fn depth(&self) -> u32 {
        self.key.occupied.count_ones()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoStats {
    pub probes: u64,
    pub hits: u64,
    pub stores: u64,
}

#[derive(Debug, Clone)]
pub struct MemoTable {
    entries: Vec<Option<MemoEntry>>,
    filled: usize,
    stats: MemoStats,
}

impl MemoTable {
    const SHALLOW_KEEP_MARGIN: u32 = 8;

    pub fn new_with_mb(size_mb: usize) -> Self {
        if size_mb == 0 {
            return Self::disabled();
        }
        let bytes = size_mb * 1024 * 1024;
        let entry_size = std::mem::size_of::<Option<MemoEntry>>().max(1);
        let count = (bytes / entry_size).max(1);
        Self::with_entries(count)
    }

    pub fn with_entries(count: usize) -> Self {
        Self {
            entries: vec![None; count],
            filled: 0,
            stats: MemoStats::default(),
        }
    }

    pub fn disabled() -> Self {
        Self::with_entries(0)
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        !self.entries.is_empty()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.entries.fill(None);
        self.filled = 0;
        self.stats = MemoStats::default();
    }

    /// Slot count.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Number of slots currently holding an entry.
    #[inline]
    pub fn filled(&self) -> usize {
        self.filled
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.filled == 0
    }

    #[inline]
    pub fn stats(&self) -> MemoStats {
        self.stats
    }

    #[inline]
    fn idx(&self, key: MemoKey) -> usize {
        (key.slot_hash() as usize) % self.entries.len()
    }

    pub fn probe(&mut self, key: MemoKey) -> Option<bool> {
        if !self.is_enabled() {
            return None;
        }
        self.stats.probes += 1;
        let idx = self.idx(key);
        let hit = self.entries[idx]
            .filter(|e| e.key == key)
            .map(|e| e.solvable);
        if hit.is_some() {
            self.stats.hits += 1;
        }
        hit
    }

    pub fn store(&mut self, key: MemoKey, solvable: bool) {
        if !self.is_enabled() {
            return;
        }
        self.stats.stores += 1;
        let entry = MemoEntry { key, solvable };
        let idx = self.idx(key);
        match self.entries[idx] {
            None => {
                self.entries[idx] = Some(entry);
                self.filled += 1;
            }
            Some(existing) => {
                let replace = existing.key == key
                    || existing.depth() + Self::SHALLOW_KEEP_MARGIN >= entry.depth();
                if replace {
                    self.entries[idx] = Some(entry);
                }
            }
        }
    }
}
