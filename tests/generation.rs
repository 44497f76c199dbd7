use latin_square_gen::generator::{generate, GenerationConfig, GenerationStats};
use latin_square_gen::solution_counter::count_solutions;
use latin_square_gen::validator::validate_board;
use latin_square_gen::{rng, Board, Difficulty};

#[test]
fn generated_puzzles_have_exactly_one_solution() {
    rng::seed(1);
    let mut board = Board::create(3).unwrap();
    let mut stats = GenerationStats::default();
    assert!(generate(&mut board, &mut GenerationConfig::default(), &mut stats));
    assert_eq!(count_solutions(&mut board, 2), 1);
}

#[test]
fn update_stats_reconciles_clues_and_empty_after_generation() {
    rng::seed(2);
    let mut board = Board::create(3).unwrap();
    let mut stats = GenerationStats::default();
    generate(&mut board, &mut GenerationConfig::default(), &mut stats);
    board.update_stats();
    assert_eq!(board.clues() + board.empty(), board.total_cells());
}

#[test]
fn k2_minimal_board_generates_within_the_documented_clue_range() {
    rng::seed(3);
    let mut board = Board::create(2).unwrap();
    let mut stats = GenerationStats::default();
    assert!(generate(&mut board, &mut GenerationConfig::default(), &mut stats));
    assert!((4..=10).contains(&board.clues()));
    assert!(validate_board(&board));
}

#[test]
fn validate_board_matches_duplicate_free_definition_across_orders() {
    for k in 2..=4 {
        rng::seed(10 + k as u64);
        let mut board = Board::create(k).unwrap();
        let mut stats = GenerationStats::default();
        if generate(&mut board, &mut GenerationConfig::default(), &mut stats) {
            assert!(validate_board(&board));
        }
    }
}

#[test]
fn generate_with_difficulty_respects_requested_protection_policy() {
    use latin_square_gen::generate_with_difficulty;

    rng::seed(4);
    let mut board = Board::create(3).unwrap();
    let mut stats = GenerationStats::default();
    assert!(generate_with_difficulty(&mut board, Difficulty::Expert, &mut stats));
    assert_eq!(count_solutions(&mut board, 2), 1);
}

#[test]
fn identical_seed_reproduces_the_same_board_and_stats() {
    rng::seed(777);
    let mut board_a = Board::create(3).unwrap();
    let mut stats_a = GenerationStats::default();
    generate(&mut board_a, &mut GenerationConfig::default(), &mut stats_a);

    rng::seed(777);
    let mut board_b = Board::create(3).unwrap();
    let mut stats_b = GenerationStats::default();
    generate(&mut board_b, &mut GenerationConfig::default(), &mut stats_b);

    assert_eq!(
        board_a.iter_cells().collect::<Vec<_>>(),
        board_b.iter_cells().collect::<Vec<_>>()
    );
    assert_eq!(stats_a.phase1_removed, stats_b.phase1_removed);
    assert_eq!(stats_a.phase2_rounds, stats_b.phase2_rounds);
    assert_eq!(stats_a.phase3_removed, stats_b.phase3_removed);
}

#[test]
fn k5_either_succeeds_with_a_unique_solution_or_fails_within_the_timeout() {
    use std::time::{Duration, Instant};

    rng::seed(5);
    let mut board = Board::create(5).unwrap();
    let mut config = GenerationConfig::default();
    config.ac3hb_limits.timeout_ms = 2_000;
    let mut stats = GenerationStats::default();

    let start = Instant::now();
    let ok = generate(&mut board, &mut config, &mut stats);
    assert!(start.elapsed() < Duration::from_secs(30), "generator must respect its timeout");

    if ok {
        assert_eq!(count_solutions(&mut board, 2), 1);
    }
}
