// Level generator CLI.
// Modes:
//   generate [easy|medium|hard] [game_id] [created_at]   generate a verified board and print it
//   verify <level.txt>                                    run the solvability search on a text level
//   walk [easy|medium|hard] [steps]                       random walk over a generated board
// Set RUST_LOG=debug to see search and retry logging.

use std::time::Duration;
use rand::Rng;
use sokogen::core::{Difficulty, Direction, SeedMaterial};
use sokogen::level_text::{parse_level, render_level_to_string, LevelParseError};
use sokogen::solver::{verify, SearchBudget, SolverConfig};
use sokogen::{apply_move, generate, is_valid_move, status, BoardState};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("Invalid number '{0}'")]
    Number(String),
    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),
    #[error("Could not read level file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Could not parse level: {0}")]
    Level(#[from] LevelParseError),
    #[error("Could not encode board: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let switch = args.first().map(String::as_str).unwrap_or("generate");
    let rest = args.get(1..).unwrap_or_default();

    match switch {
        "generate" => run_generate(rest)?,
        "verify" => run_verify(rest)?,
        "walk" => run_walk(rest)?,
        _ => {
            println!(
                "Unknown mode: {}. Use 'generate', 'verify' or 'walk'. defaulting to generate",
                switch
            );
            run_generate(&[])?;
        }
    }

    Ok(())
}

fn parse_difficulty(arg: Option<&String>) -> Difficulty {
    arg.map(|token| Difficulty::from_token_or_default(token)).unwrap_or_default()
}

fn parse_number<T: std::str::FromStr>(arg: &str) -> Result<T, CliError> {
    arg.parse().map_err(|_| CliError::Number(arg.to_string()))
}

fn run_generate(args: &[String]) -> Result<(), CliError> {
    let difficulty = parse_difficulty(args.first());
    let seed = match (args.get(1), args.get(2)) {
        (Some(game_id), Some(created_at)) => SeedMaterial::new(game_id.clone(), parse_number(created_at)?),
        (Some(game_id), None) => SeedMaterial::new(game_id.clone(), 0),
        _ => SeedMaterial::random(),
    };

    let board = generate(&seed, difficulty);
    info!(game_id = %seed.game_id, created_at = seed.created_at, verified = board.verified, "board ready");

    print_board(&board);
    println!("{}", board.to_json()?);
    Ok(())
}

fn run_verify(args: &[String]) -> Result<(), CliError> {
    let path = args.first().ok_or(CliError::MissingArgument("level file"))?;
    let text = std::fs::read_to_string(path)?;
    let level = parse_level(&text)?;

    // interactive callers wait on this, batch verification can afford more
    let config = SolverConfig::default()
        .with_budget(SearchBudget::node_limited(200_000).with_time_limit(Duration::from_secs(10)));
    let report = verify(&level, &config);

    print!("{}", render_level_to_string(&level));
    println!(
        "{:?} after {} expansions, {} states seen, {:?}",
        report.outcome, report.expansions, report.visited, report.elapsed
    );
    Ok(())
}

fn run_walk(args: &[String]) -> Result<(), CliError> {
    let difficulty = parse_difficulty(args.first());
    let steps: usize = match args.get(1) {
        Some(arg) => parse_number(arg)?,
        None => 200,
    };

    let mut board = generate(&SeedMaterial::random(), difficulty);
    let mut rng = rand::rng();
    for _ in 0..steps {
        if board.is_terminal() {
            break;
        }
        let direction: Direction = rng.random();
        let action = direction.into();
        if is_valid_move(&board, &action) {
            board = apply_move(&board, &action);
        }
    }

    print_board(&board);
    Ok(())
}

fn print_board(board: &BoardState) {
    print!("{}", render_level_to_string(&board.level));
    println!("{} | moves: {}", status(board), board.moves);
}
