//! Cooperative cancellation and progress accounting for a running search.
//!
//! The search owns a `SearchControl` behind an `Arc`; callers hold
//! `StopHandle` clones. A handle can be used from another thread or from
//! inside an observer callback while the search is running, since neither
//! needs a borrow of the search itself.

use std::sync::{
    atomic::{AtomicBool, AtomicU64, Ordering},
    Arc,
};

#[derive(Debug, Default)]
pub struct SearchControl {
    stop: AtomicBool,
    running: AtomicBool,
    pub nodes_visited: AtomicU64,
}

impl SearchControl {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    #[inline]
    pub fn request_stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    #[inline]
    pub fn should_stop(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn add_nodes(&self, n: u64) {
        self.nodes_visited.fetch_add(n, Ordering::Relaxed);
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Arm for a new run: clear the stop request and node count.
    ///
    /// A stop requested after `is_running` reads true is never lost.
    pub fn begin_run(&self) {
        self.stop.store(false, Ordering::Relaxed);
        self.nodes_visited.store(0, Ordering::Relaxed);
        self.running.store(true, Ordering::Release);
    }

    pub fn end_run(&self) {
        self.running.store(false, Ordering::Release);
    }
}

/// Cloneable handle for stopping and monitoring one `TourSearch`.
#[derive(Debug, Clone)]
pub struct StopHandle {
    control: Arc<SearchControl>,
}

impl StopHandle {
    pub(crate) fn new(control: Arc<SearchControl>) -> Self {
        Self { control }
    }

    #[inline]
    pub fn stop(&self) {
        self.control.request_stop();
    }

    #[inline]
    pub fn is_stop_requested(&self) -> bool {
        self.control.should_stop()
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.control.is_running()
    }

    #[inline]
    pub fn nodes_visited(&self) -> u64 {
        self.control.nodes_visited.load(Ordering::Relaxed)
    }
}
