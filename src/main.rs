//! Self-play demo.
//!
//! Usage:
//! `cargo run --release`
//! `cargo run --release -- --depth 3 --plies 80 --opponent random --seed 7`
//! `cargo run --release -- --fen "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1"`
//!
//! Set `SAPLING_LOG=debug` to see per-search diagnostics on stderr.

use log::{error, info};

use sapling_chess::engines::engine_negamax::NegamaxEngine;
use sapling_chess::engines::engine_random::RandomEngine;
use sapling_chess::engines::engine_trait::{Engine, SearchParams};
use sapling_chess::errors::{ChessError, ChessResult};
use sapling_chess::game_state::game_state::GameState;
use sapling_chess::search::negamax::DEFAULT_SEARCH_DEPTH;
use sapling_chess::utils::game_record::GameRecord;
use sapling_chess::utils::logging::init_logging;
use sapling_chess::utils::render_game_state::render_game_state;
use sapling_chess::utils::self_play::{play_game, SelfPlayConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Opponent {
    Negamax,
    Random,
}

#[derive(Debug, Clone)]
struct DemoArgs {
    depth: u8,
    plies: u16,
    fen: Option<String>,
    seed: Option<u64>,
    opponent: Opponent,
}

impl Default for DemoArgs {
    fn default() -> Self {
        Self {
            depth: DEFAULT_SEARCH_DEPTH,
            plies: 80,
            fen: None,
            seed: None,
            opponent: Opponent::Random,
        }
    }
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> ChessResult<T> {
    let value = value.ok_or_else(|| ChessError::InvalidOption(format!("{flag} needs a value")))?;
    value
        .parse::<T>()
        .map_err(|_| ChessError::InvalidOption(format!("bad value for {flag}: {value}")))
}

fn parse_args(args: &[String]) -> ChessResult<DemoArgs> {
    let mut out = DemoArgs::default();
    let mut iter = args.iter();

    while let Some(flag) = iter.next() {
        match flag.as_str() {
            "--depth" => out.depth = parse_value(flag, iter.next())?,
            "--plies" => out.plies = parse_value(flag, iter.next())?,
            "--seed" => out.seed = Some(parse_value(flag, iter.next())?),
            "--fen" => out.fen = Some(parse_value(flag, iter.next())?),
            "--opponent" => {
                out.opponent = match iter.next().map(String::as_str) {
                    Some("negamax") => Opponent::Negamax,
                    Some("random") => Opponent::Random,
                    other => {
                        return Err(ChessError::InvalidOption(format!(
                            "--opponent must be negamax or random, got {other:?}"
                        )))
                    }
                }
            }
            other => return Err(ChessError::InvalidOption(format!("unknown flag {other}"))),
        }
    }

    Ok(out)
}

fn run(args: DemoArgs) -> ChessResult<()> {
    let start = match &args.fen {
        Some(fen) => GameState::from_fen(fen)?,
        None => GameState::new_game(),
    };

    let mut light = NegamaxEngine::new();
    light.set_option("Depth", &args.depth.to_string())?;
    let mut dark: Box<dyn Engine> = match (args.opponent, args.seed) {
        (Opponent::Negamax, _) => Box::new(NegamaxEngine::new()),
        (Opponent::Random, Some(seed)) => Box::new(RandomEngine::with_seed(seed)),
        (Opponent::Random, None) => Box::new(RandomEngine::new()),
    };
    dark.set_option("Depth", &args.depth.to_string())?;

    info!(
        "{} (light) vs {} (dark), depth {}, up to {} plies",
        light.name(),
        dark.name(),
        args.depth,
        args.plies
    );
    println!("{}\n", render_game_state(&start));

    let result = play_game(
        &mut light,
        dark.as_mut(),
        start,
        SelfPlayConfig {
            max_plies: args.plies,
            params: SearchParams::default(),
        },
    )?;

    println!("{}\n", render_game_state(&result.final_state));
    println!("moves: {}", result.moves.join(" "));
    println!(
        "result: {} ({:?}) after {} plies",
        result.outcome.result_tag(),
        result.outcome,
        result.moves.len()
    );
    println!(
        "time: light {:.1} ms, dark {:.1} ms",
        result.light_time_ns as f64 / 1e6,
        result.dark_time_ns as f64 / 1e6
    );
    println!("fen: {}\n", result.final_state.get_fen());
    print!("{}", GameRecord::from_game(&result.final_state).to_text());

    Ok(())
}

fn main() -> ChessResult<()> {
    if let Err(err) = init_logging() {
        eprintln!("logging disabled: {err}");
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    let parsed = parse_args(&args)?;
    run(parsed).inspect_err(|err| error!("self-play failed: {err}"))
}
