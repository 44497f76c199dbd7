//! Generates a puzzle and pretty-prints it.

use argh::FromArgs;
use latin_square_gen::difficulty::difficulty_to_string;
use latin_square_gen::generator::{generate, GenerationConfig, GenerationStats};
use latin_square_gen::{evaluate_difficulty, rng, Board, Difficulty};

/// generate a Latin-square puzzle
#[derive(Debug, FromArgs)]
struct Args {
    /// subgrid order (board is k*k by k*k); 2..=5
    #[argh(option, default = "3")]
    k: usize,

    /// target difficulty: easy, medium, hard, expert
    #[argh(option, default = "String::from(\"medium\")")]
    difficulty: String,

    /// RNG seed, for reproducible output
    #[argh(option)]
    seed: Option<u64>,

    /// log phase/round boundaries
    #[argh(switch, long = "log-phases")]
    log_phases: bool,

    /// log AC-3 propagation statistics
    #[argh(switch, long = "log-constraints")]
    log_ac3: bool,

    /// log elapsed time per phase
    #[argh(switch, long = "log-elapsed")]
    log_elapsed: bool,
}

fn parse_difficulty(s: &str) -> Difficulty {
    match s.to_lowercase().as_str() {
        "easy" => Difficulty::Easy,
        "medium" => Difficulty::Medium,
        "hard" => Difficulty::Hard,
        "expert" => Difficulty::Expert,
        other => panic!("unknown difficulty '{}' (expected easy/medium/hard/expert)", other),
    }
}

fn main() {
    let args: Args = argh::from_env();

    if let Some(seed) = args.seed {
        rng::seed(seed);
    }

    let mut board = Board::create(args.k).unwrap_or_else(|| panic!("k must be in 2..=5, got {}", args.k));
    let difficulty = parse_difficulty(&args.difficulty);

    let mut config = GenerationConfig {
        difficulty_override: Some(difficulty),
        log_phases: args.log_phases,
        log_ac3: args.log_ac3,
        log_elapsed: args.log_elapsed,
        ..GenerationConfig::default()
    };
    let mut stats = GenerationStats::default();
    if !generate(&mut board, &mut config, &mut stats) {
        eprintln!("generation failed after {} attempt(s)", stats.attempts);
        std::process::exit(1);
    }

    println!("{}", board);
    println!(
        "clues: {}, difficulty: {}",
        board.clues(),
        difficulty_to_string(evaluate_difficulty(&board))
    );
}
