//! Completes a partially filled board read from the command line.
//!
//! The board is given as a single string of `k^4` digits/letters in
//! row-major order (`0` or `.` for blank, `1-9` then `A-Z` for values above
//! 9), e.g. for k=2: `1...2.........3.`.

use argh::FromArgs;
use latin_square_gen::completion::{complete_ac3hb, Ac3hbLimits};
use latin_square_gen::forced_cells::ForcedCellsRegistry;
use latin_square_gen::validator::validate_board;
use latin_square_gen::{rng, Board, Position};

/// complete a partially filled Latin-square board
#[derive(Debug, FromArgs)]
struct Args {
    /// subgrid order (board is k*k by k*k); 2..=5
    #[argh(option, default = "3")]
    k: usize,

    /// row-major board string; '.' or '0' for blank cells
    #[argh(positional)]
    board: String,

    /// RNG seed, for reproducible output
    #[argh(option)]
    seed: Option<u64>,
}

fn parse_cell(ch: char) -> u8 {
    match ch {
        '.' | '0' => 0,
        '1'..='9' => ch as u8 - b'0',
        'A'..='Z' => ch as u8 - b'A' + 10,
        other => panic!("unrecognized board character '{}'", other),
    }
}

fn main() {
    let args: Args = argh::from_env();

    if let Some(seed) = args.seed {
        rng::seed(seed);
    }

    let mut board = Board::create(args.k).unwrap_or_else(|| panic!("k must be in 2..=5, got {}", args.k));
    let n = board.board_size();
    let cells: Vec<char> = args.board.chars().filter(|c| !c.is_whitespace()).collect();
    if cells.len() != n * n {
        panic!("expected {} cells for k={}, got {}", n * n, args.k, cells.len());
    }
    for (i, ch) in cells.into_iter().enumerate() {
        board.set_cell(Position::new(i / n, i % n), parse_cell(ch));
    }
    board.update_stats();

    let mut registry = ForcedCellsRegistry::new();
    let solved = {
        let mut rng = rng::lock();
        complete_ac3hb(&mut board, &mut *rng, &mut registry, Ac3hbLimits::default())
    };

    if !solved {
        eprintln!("no completion found (inconsistent input, or the solver timed out)");
        std::process::exit(1);
    }

    println!("{}", board);
    println!("valid: {}", validate_board(&board));
}
