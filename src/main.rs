//! Wordhunt Bot CLI
//!
//! Solve a single board or benchmark the search over many random boards.

use anyhow::{Context, Result};
use clap::{ArgGroup, Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, Level};
use wordhunt_bot::benchmark::{run_benchmark, BenchmarkConfig};
use wordhunt_bot::grid::{DEFAULT_COLS, DEFAULT_ROWS};
use wordhunt_bot::{default_trie, load_trie, Grid, LengthTable, SearchConfig, Trie, WordSearch};

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Find every dictionary word hidden in a Boggle-style letter grid."
)]
struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find and rank the words on one board.
    Solve(SolveArgs),
    /// Search many random boards and report averages.
    Bench(BenchArgs),
}

#[derive(Args, Debug)]
struct DictionaryArgs {
    /// Word list with one lower-case word per line. Defaults to the bundled list.
    #[arg(short, long)]
    dictionary: Option<PathBuf>,

    /// Shortest word to report.
    #[arg(long, default_value_t = 1)]
    min_length: usize,
}

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("board").required(true).args(["grid", "random"])))]
struct SolveArgs {
    /// Board rows separated by '/', e.g. "cats/dogs/rain/bowl".
    #[arg(short, long)]
    grid: Option<String>,

    /// Solve a random board instead.
    #[arg(long)]
    random: bool,

    /// Seed for the random board.
    #[arg(long, requires = "random")]
    seed: Option<u64>,

    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: usize,

    #[arg(long, default_value_t = DEFAULT_COLS)]
    cols: usize,

    /// Show only the best N words.
    #[arg(short, long)]
    top: Option<usize>,

    #[command(flatten)]
    dictionary: DictionaryArgs,
}

#[derive(Args, Debug)]
struct BenchArgs {
    #[arg(short = 'n', long, default_value_t = 5000)]
    games: usize,

    #[arg(long, default_value_t = 0)]
    seed: u64,

    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: usize,

    #[arg(long, default_value_t = DEFAULT_COLS)]
    cols: usize,

    #[command(flatten)]
    dictionary: DictionaryArgs,
}

/// Run `work` while animating `message` on stdout, clearing the line when
/// the work is done.
fn with_spinner<T>(message: &str, work: impl FnOnce() -> T) -> T {
    let done = AtomicBool::new(false);
    thread::scope(|scope| {
        scope.spawn(|| {
            const FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
            let mut stdout = io::stdout();
            for frame in FRAMES.iter().cycle() {
                if done.load(Ordering::Relaxed) {
                    break;
                }
                let _ = write!(stdout, "\r{} {}", frame, message);
                let _ = stdout.flush();
                thread::sleep(Duration::from_millis(80));
            }
            let _ = write!(stdout, "\r{}\r", " ".repeat(message.len() + 3));
            let _ = stdout.flush();
        });
        let result = work();
        done.store(true, Ordering::Relaxed);
        result
    })
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .init();
}

fn build_search(args: &DictionaryArgs) -> Result<WordSearch> {
    let trie: Trie = match &args.dictionary {
        Some(path) => load_trie(path)
            .with_context(|| format!("loading dictionary from {}", path.display()))?,
        None => default_trie().context("loading bundled dictionary")?,
    };
    let config = SearchConfig::new().with_min_word_length(args.min_length);
    Ok(WordSearch::with_config(trie, config)?)
}

fn solve(args: SolveArgs) -> Result<()> {
    let search = build_search(&args.dictionary)?;

    let mut grid = match &args.grid {
        Some(text) => text.parse::<Grid>().context("parsing --grid")?,
        None => {
            let seed = args.seed.unwrap_or_else(rand::random);
            debug!(seed, "generating random board");
            let mut rng = StdRng::seed_from_u64(seed);
            Grid::random(&mut rng, args.rows, args.cols)?
        }
    };

    println!("{}", grid);
    println!();

    let start = Instant::now();
    let found = search.find_all_words(&mut grid);
    let elapsed = start.elapsed();

    let policy = LengthTable::default();
    let ranked = found.ranked(&policy);
    let shown = args.top.unwrap_or(ranked.len()).min(ranked.len());

    println!("{:>4} {:>7}  Word", "#", "Points");
    println!("{}", "-".repeat(50));
    for (i, (word, points)) in ranked.iter().take(shown).enumerate() {
        println!("{:>4} {:>7}  {}", i + 1, points, word);
    }
    println!();
    println!("Words found: {}", found.len());
    println!("Total points: {}", found.total_points(&policy));
    println!("Time: {:.2?}", elapsed);
    Ok(())
}

fn bench(args: BenchArgs) -> Result<()> {
    let search = build_search(&args.dictionary)?;
    let config = BenchmarkConfig {
        games: args.games,
        rows: args.rows,
        cols: args.cols,
        seed: args.seed,
    };

    let report = with_spinner("Running benchmark...", || {
        run_benchmark(&search, &LengthTable::default(), &config)
    })?;

    println!("Games: {}", report.games);
    println!("Average points: {:.1}", report.average_points);
    println!("Average words: {:.1}", report.average_words);
    println!(
        "Average time: {:.4}ms",
        report.average_time.as_secs_f64() * 1000.0
    );
    println!("Total time: {:.3}s", report.total_time.as_secs_f64());
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Solve(args) => solve(args),
        Command::Bench(args) => bench(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_needs_a_board_source() {
        assert!(Cli::try_parse_from(["wordhunt-bot", "solve"]).is_err());
        assert!(Cli::try_parse_from(["wordhunt-bot", "solve", "--grid", "ab/cd"]).is_ok());
        assert!(Cli::try_parse_from(["wordhunt-bot", "solve", "--random"]).is_ok());
    }

    #[test]
    fn test_grid_and_random_conflict() {
        let args = ["wordhunt-bot", "solve", "--grid", "ab/cd", "--random"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_seed_requires_random() {
        let with_grid = ["wordhunt-bot", "solve", "--grid", "ab/cd", "--seed", "3"];
        assert!(Cli::try_parse_from(with_grid).is_err());

        let with_random = ["wordhunt-bot", "solve", "--random", "--seed", "3"];
        assert!(Cli::try_parse_from(with_random).is_ok());
    }

    #[test]
    fn test_with_spinner_returns_work_result() {
        assert_eq!(with_spinner("", || 6 * 7), 42);
    }
}
