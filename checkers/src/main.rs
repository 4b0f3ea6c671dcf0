mod game;
mod render;

use anyhow::{Context, Result};
use checkers_agents::SearchConfig;
use checkers_core::{Board, GameState, Side};
use clap::Parser;
use game::{Game, GameMode, Outcome};
use render::Renderer;
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Plies after which a computer-only game is stopped when no limit is given.
const DEFAULT_AVA_TURNS: usize = 200;

#[derive(Parser, Debug)]
#[command(name = "checkers", about = "Play checkers in the terminal", version)]
struct Args {
    /// Who plays: hvh, hva (you are red) or ava
    #[arg(long, value_enum, default_value_t = GameMode::Hva)]
    mode: GameMode,

    /// Search depth of the computer player
    #[arg(long, default_value_t = 3)]
    depth: u8,

    /// Seed for the computer's tie-breaking
    #[arg(long)]
    seed: Option<u64>,

    /// Board diagram to start from instead of the opening layout
    #[arg(long)]
    position: Option<PathBuf>,

    /// White moves first from the given position
    #[arg(long, requires = "position")]
    white_to_move: bool,

    /// Stop after this many plies
    #[arg(long)]
    max_turns: Option<usize>,

    /// Disable colours
    #[arg(long)]
    plain: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let state = match &args.position {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let board = Board::from_diagram(&text)
                .with_context(|| format!("invalid board diagram in {}", path.display()))?;
            let side = if args.white_to_move {
                Side::White
            } else {
                Side::Red
            };
            GameState::from_board(board, side)
        }
        None => GameState::new(),
    };

    let mut config = SearchConfig::depth(args.depth);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let max_turns = match args.mode {
        GameMode::Ava => Some(args.max_turns.unwrap_or(DEFAULT_AVA_TURNS)),
        GameMode::Hvh | GameMode::Hva => args.max_turns,
    };

    println!("Checkers: red moves up the board, white moves down.");
    println!("Enter moves as four numbers: from row, from col, to row, to col.");

    let stdin = io::stdin();
    let mut game = Game::new(state, args.mode, config, stdin.lock(), io::stdout())
        .with_renderer(Renderer::new(args.plain))
        .with_max_turns(max_turns);

    match game.run()? {
        Outcome::Winner(side) => info!(%side, "finished"),
        Outcome::TurnLimit => println!("No winner within {} plies.", max_turns.unwrap_or(0)),
        Outcome::Quit => println!("Goodbye."),
    }

    Ok(())
}
