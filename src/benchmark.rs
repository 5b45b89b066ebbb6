//! Search many random boards and report average points and timings.
//!
//! Each game draws its own board from a seed derived from the base seed and
//! the game number, so runs are reproducible. Games run in parallel; every
//! game owns its grid, so nothing mutable is shared between threads.

use crate::error::{Error, Result};
use crate::grid::{Grid, DEFAULT_COLS, DEFAULT_ROWS};
use crate::scoring::ScoringPolicy;
use crate::search::WordSearch;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use std::time::{Duration, Instant};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkConfig {
    pub games: usize,
    pub rows: usize,
    pub cols: usize,
    pub seed: u64,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            games: 5000,
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            seed: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchmarkReport {
    pub games: usize,
    /// Mean points of the best word on each board.
    pub average_points: f64,
    /// Mean number of distinct words per board.
    pub average_words: f64,
    /// Mean wall time of one search.
    pub average_time: Duration,
    pub total_time: Duration,
}

struct GameOutcome {
    best_points: u32,
    words: usize,
    elapsed: Duration,
}

/// The board for game `game` of a run seeded with `seed`.
pub fn board_for_game(config: &BenchmarkConfig, game: usize) -> Result<Grid> {
    let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(game as u64));
    Grid::random(&mut rng, config.rows, config.cols)
}

/// Mean of `durations`, zero when there are none.
fn mean_duration(durations: impl Iterator<Item = Duration>) -> Duration {
    let (count, total) = durations.fold((0usize, 0.0f64), |(count, total), d| {
        (count + 1, total + d.as_secs_f64())
    });
    if count == 0 {
        Duration::ZERO
    } else {
        Duration::from_secs_f64(total / count as f64)
    }
}

pub fn run_benchmark<P>(
    search: &WordSearch,
    policy: &P,
    config: &BenchmarkConfig,
) -> Result<BenchmarkReport>
where
    P: ScoringPolicy + Sync + ?Sized,
{
    if config.games == 0 {
        return Err(Error::InvalidConfig("benchmark needs at least one game".into()));
    }

    let start = Instant::now();
    let outcomes: Vec<GameOutcome> = (0..config.games)
        .into_par_iter()
        .map(|game| -> Result<GameOutcome> {
            let mut board = board_for_game(config, game)?;
            let search_start = Instant::now();
            let found = search.find_all_words(&mut board);
            let elapsed = search_start.elapsed();
            let best_points = found
                .ranked(policy)
                .first()
                .map_or(0, |&(_, points)| points);
            Ok(GameOutcome {
                best_points,
                words: found.len(),
                elapsed,
            })
        })
        .collect::<Result<_>>()?;
    let total_time = start.elapsed();

    let games = outcomes.len() as f64;
    let average_points = outcomes.iter().map(|o| f64::from(o.best_points)).sum::<f64>() / games;
    let average_words = outcomes.iter().map(|o| o.words as f64).sum::<f64>() / games;
    let average_time = mean_duration(outcomes.iter().map(|o| o.elapsed));

    info!(
        games = outcomes.len(),
        average_points,
        average_words,
        "benchmark finished"
    );

    Ok(BenchmarkReport {
        games: outcomes.len(),
        average_points,
        average_words,
        average_time,
        total_time,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_duration() {
        let durations = [Duration::from_millis(10), Duration::from_millis(30)];
        let mean = mean_duration(durations.into_iter());
        assert!((mean.as_secs_f64() - 0.020).abs() < 1e-9);
    }

    #[test]
    fn test_mean_duration_of_nothing_is_zero() {
        assert_eq!(mean_duration(std::iter::empty()), Duration::ZERO);
    }
}
