//! Batch tour scan over start squares.
//!
//! Usage:
//! `cargo run --release --bin tour_scan -- [samples] [seed] [memo_mb]`
//!
//! `samples = 0` (default) scans all 64 squares; otherwise `samples` start
//! squares are drawn from a seeded RNG.

use chrono::Local;
use knight_tour::search::tour_config::TourConfig;
use knight_tour::search::tour_events::NullObserver;
use knight_tour::search::tour_search::TourSearch;
use knight_tour::tour_state::square::Square;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::env;

fn parse_arg<T: std::str::FromStr>(args: &[String], idx: usize, default: T) -> T {
    args.get(idx)
        .and_then(|s| s.parse::<T>().ok())
        .unwrap_or(default)
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let samples: usize = parse_arg(&args, 1, 0usize);
    let seed: u64 = parse_arg(&args, 2, 0u64);
    let memo_mb: usize = parse_arg(&args, 3, 4usize);

    let starts: Vec<Square> = if samples == 0 {
        (0..64u8).map(Square::from_index).collect()
    } else {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..samples)
            .map(|_| Square::from_index(rng.random_range(0..64)))
            .collect()
    };

    let mut search = TourSearch::with_config(TourConfig {
        memo_mb,
        ..TourConfig::default()
    });

    println!(
        "# tour scan {} samples={} seed={} memo_mb={}",
        Local::now().format("%Y-%m-%d %H:%M:%S"),
        starts.len(),
        seed,
        memo_mb
    );
    println!("square,found,nodes,backtracks,memo_hits,elapsed_ms");

    let mut solved = 0usize;
    for start in &starts {
        let result = search.start(*start, &mut NullObserver);
        if result.found {
            solved += 1;
        }
        println!(
            "{},{},{},{},{},{}",
            start,
            result.found,
            result.stats.nodes,
            result.stats.backtracks,
            result.stats.memo_hits,
            result.stats.elapsed_ms
        );
    }

    println!("# solved {}/{}", solved, starts.len());
}
