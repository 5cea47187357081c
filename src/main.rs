//! Command-line front end: run bot matchups and tournaments, inspect positions, or play
//! moves by hand.

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::time::Duration;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use chess_arena::arena::{Matchup, StopFlag, Tournament};
use chess_arena::board::{Board, GameStatus, START_FEN};
use chess_arena::bots::BotKind;
use chess_arena::config::{ArenaConfig, ReportLevel, DEFAULT_GAMES};

#[derive(Parser)]
#[command(name = "chess_arena", version, about = "Chess rules engine and bot arena")]
struct Cli {
    /// Log verbosity: -v info, -vv debug, -vvv trace (RUST_LOG overrides)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a series of games between two bots and print the tally
    Matchup {
        #[arg(long, default_value = "check-capture")]
        white: BotKind,
        #[arg(long, default_value = "random")]
        black: BotKind,
        /// Number of games, all played concurrently
        #[arg(short = 'n', long, default_value_t = DEFAULT_GAMES)]
        games: usize,
        /// Per-game time budget; a game still running afterwards is scored as a draw
        #[arg(long, default_value_t = 10_000)]
        timeout_ms: u64,
        /// End each game as a draw after this many plies
        #[arg(long)]
        max_plies: Option<usize>,
        /// Seed for the white bot; the black bot uses seed + 1
        #[arg(long)]
        seed: Option<u64>,
        /// none, result or all
        #[arg(long, default_value = "none")]
        report: ReportLevel,
        /// Start every game from this position
        #[arg(long)]
        fen: Option<String>,
    },
    /// Play a matchup for every white/black pairing of the built-in bots
    Tournament {
        /// Games per pairing
        #[arg(short = 'n', long, default_value_t = DEFAULT_GAMES)]
        games: usize,
        #[arg(long, default_value_t = 10_000)]
        timeout_ms: u64,
        #[arg(long)]
        max_plies: Option<usize>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Apply moves to a position and describe the result
    Status {
        #[arg(long, default_value = START_FEN)]
        fen: String,
        /// Moves such as e2e4, applied in order
        moves: Vec<String>,
    },
    /// Enter moves for both sides from standard input
    Play {
        #[arg(long, default_value = START_FEN)]
        fen: String,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Matchup {
            white,
            black,
            games,
            timeout_ms,
            max_plies,
            seed,
            report,
            fen,
        } => {
            let config = ArenaConfig::default()
                .with_games(games)
                .with_game_timeout(Duration::from_millis(timeout_ms))
                .with_max_plies(max_plies)
                .with_report(report);
            let start = match fen {
                Some(fen) => Board::try_from_fen(&fen)?,
                None => Board::new(),
            };
            run_matchup(config, white, black, seed.unwrap_or_else(rand::random), start);
        }
        Commands::Tournament {
            games,
            timeout_ms,
            max_plies,
            seed,
        } => {
            let config = ArenaConfig::default()
                .with_games(games)
                .with_game_timeout(Duration::from_millis(timeout_ms))
                .with_max_plies(max_plies);
            run_tournament(config, seed.unwrap_or_else(rand::random));
        }
        Commands::Status { fen, moves } => {
            let mut board = Board::try_from_fen(&fen)?;
            for mv in &moves {
                board = board.try_apply_move(mv)?;
            }
            print_status(&board);
        }
        Commands::Play { fen } => {
            play_interactive(Board::try_from_fen(&fen)?)?;
        }
    }
    Ok(())
}

fn run_matchup(config: ArenaConfig, white: BotKind, black: BotKind, seed: u64, start: Board) {
    println!("{white} (white) vs {black} (black), {} games, seed {seed}", config.games);

    let matchup = Matchup::new(config, white.build(seed), black.build(seed.wrapping_add(1)))
        .with_start(start);
    let results = matchup.run(&StopFlag::new());

    println!("Completed:  {}", results.completed);
    println!("White wins: {}", results.white_wins);
    println!("Black wins: {}", results.black_wins);
    println!("Draws:      {}", results.draws);
    println!("Errors:     {}", results.errors);
}

fn run_tournament(config: ArenaConfig, seed: u64) {
    println!("Round robin, {} games per pairing, seed {seed}", config.games);

    let tournament = Tournament::round_robin(config, seed);
    let results = tournament.run(&StopFlag::new());

    println!(
        "{:<28} {:>5} {:>5} {:>5} {:>5} {:>6}",
        "Matchup", "Games", "White", "Black", "Draws", "Errors"
    );
    for (white, black, tally) in results {
        println!(
            "{:<28} {:>5} {:>5} {:>5} {:>5} {:>6}",
            format!("{white} vs {black}"),
            tally.completed,
            tally.white_wins,
            tally.black_wins,
            tally.draws,
            tally.errors
        );
    }
    if let Some(elapsed) = tournament.elapsed() {
        println!("Finished in {elapsed:.2?}");
    }
}

fn status_line(board: &Board) -> String {
    match board.status() {
        GameStatus::Normal => format!("{} to move", board.turn()),
        GameStatus::Check => format!("{} is in check", board.turn()),
        GameStatus::Checkmate => format!(
            "{} is checkmated, {} wins",
            board.turn(),
            board.turn().opponent()
        ),
        GameStatus::Stalemate => format!("{} is stalemated, draw", board.turn()),
    }
}

fn print_status(board: &Board) {
    println!("{board}");
    println!();
    println!("FEN: {}", board.to_fen());
    println!("Status: {}", status_line(board));
    let moves: Vec<String> = board.legal_moves().iter().map(|m| m.notation()).collect();
    println!("Legal moves ({}): {}", moves.len(), moves.join(" "));
}

fn play_interactive(mut board: Board) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        println!("{board}");
        println!();
        if board.status().is_terminal() {
            println!("{}", status_line(&board));
            return Ok(());
        }
        if board.status() == GameStatus::Check {
            println!("{}", status_line(&board));
        }

        print!("Enter a move: ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }
        let input = line.trim();
        match input {
            "" => continue,
            "quit" | "exit" => return Ok(()),
            "fen" => {
                println!("{}", board.to_fen());
                continue;
            }
            _ => {}
        }

        match board.try_apply_move(input) {
            Ok(next) => board = next,
            Err(err) => println!("Invalid move: {err}"),
        }
    }
}
