use wordhunt_bot::benchmark::{board_for_game, run_benchmark, BenchmarkConfig};
use wordhunt_bot::{default_trie, Error, LengthTable, WordSearch};

fn small_config() -> BenchmarkConfig {
    BenchmarkConfig {
        games: 20,
        seed: 42,
        ..BenchmarkConfig::default()
    }
}

#[test]
fn test_benchmark_report() {
    let search = WordSearch::new(default_trie().unwrap()).unwrap();
    let report = run_benchmark(&search, &LengthTable::default(), &small_config()).unwrap();

    assert_eq!(report.games, 20);
    assert!(report.average_points >= 0.0);
    assert!(report.average_words > 0.0);
    assert!(report.total_time >= report.average_time);
}

#[test]
fn test_benchmark_is_reproducible() {
    let search = WordSearch::new(default_trie().unwrap()).unwrap();
    let policy = LengthTable::default();

    let first = run_benchmark(&search, &policy, &small_config()).unwrap();
    let second = run_benchmark(&search, &policy, &small_config()).unwrap();

    assert_eq!(first.average_points, second.average_points);
    assert_eq!(first.average_words, second.average_words);
}

#[test]
fn test_boards_differ_between_games() {
    let config = small_config();
    let boards: Vec<_> = (0..5).map(|g| board_for_game(&config, g).unwrap()).collect();

    assert_eq!(boards[0], board_for_game(&config, 0).unwrap());
    assert!(boards.windows(2).any(|pair| pair[0] != pair[1]));
}

#[test]
fn test_zero_games_rejected() {
    let search = WordSearch::new(default_trie().unwrap()).unwrap();
    let config = BenchmarkConfig {
        games: 0,
        ..BenchmarkConfig::default()
    };

    assert!(matches!(
        run_benchmark(&search, &LengthTable::default(), &config),
        Err(Error::InvalidConfig(_))
    ));
}
