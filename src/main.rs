use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use connect_four::config::AppConfig;
use connect_four::game::{GameState, GameStatus, MoveOutcome, MoveResult, Player};

/// Drive a Connect Four game through the board engine from the command line.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four moves and report the result")]
struct Cli {
    /// Comma-separated columns to play, in order (e.g. 0,5,1,5)
    #[arg(long, value_delimiter = ',')]
    moves: Vec<usize>,

    /// After --moves, keep playing random legal moves until the game ends
    #[arg(long)]
    random: bool,

    /// Seed for --random (defaults to OS entropy)
    #[arg(long, requires = "random")]
    seed: Option<u64>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override the configured starting player: red or blue
    #[arg(long, value_parser = parse_player)]
    starting_player: Option<Player>,

    /// Print move results and final status as JSON
    #[arg(long)]
    json: bool,
}

fn parse_player(s: &str) -> Result<Player> {
    match s.to_ascii_lowercase().as_str() {
        "red" => Ok(Player::Red),
        "blue" => Ok(Player::Blue),
        other => bail!("unknown player '{}' (expected 'red' or 'blue')", other),
    }
}

#[derive(serde::Serialize)]
struct Report<'a> {
    moves: &'a [MoveResult],
    status: &'a GameStatus,
    message: String,
    board: Vec<&'a str>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(player) = cli.starting_player {
        config.game.starting_player = player;
    }

    let mut state = config.game.new_game();
    let mut results = Vec::with_capacity(cli.moves.len());

    for (i, &column) in cli.moves.iter().enumerate() {
        let result = state
            .drop_coin(column)
            .with_context(|| format!("move {} (column {column}) rejected", i + 1))?;
        results.push(result);
    }

    if cli.random {
        let mut rng = match cli.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        results.extend(play_random(&mut state, &mut rng)?);
    }

    info!(
        "finished after {} moves: {}",
        state.filled_count(),
        state.status_message()
    );

    let rendered = state
        .board()
        .render_with(|cell| config.display.symbol(cell));

    if cli.json {
        let report = Report {
            moves: &results,
            status: state.status(),
            message: state.status_message(),
            board: rendered.lines().collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for result in &results {
        println!(
            "{} -> column {}, row {}",
            result.player, result.position.column, result.position.row
        );
    }
    println!();
    println!("{rendered}");
    println!();
    println!("{}", state.status_message());
    if let Some(line) = state.winning_line() {
        let cells: Vec<String> = line.cells().iter().map(|pos| pos.to_string()).collect();
        println!("Winning line: {}", cells.join(" "));
    }

    Ok(())
}

/// Play uniformly random legal columns until the game is over
fn play_random(state: &mut GameState, rng: &mut StdRng) -> Result<Vec<MoveResult>> {
    let mut results = Vec::new();

    while !state.is_terminal() {
        let legal = state.legal_columns();
        if legal.is_empty() {
            break;
        }
        let column = legal[rng.random_range(0..legal.len())];
        let result = state
            .drop_coin(column)
            .with_context(|| format!("random move into column {column} rejected"))?;
        debug!("random move: {:?}", result.position);
        let done = !matches!(result.outcome, MoveOutcome::Continue);
        results.push(result);
        if done {
            break;
        }
    }

    Ok(results)
}
