//! Engine-versus-engine game runner.
//!
//! Plays two `Engine`s against each other from a given position until the
//! game ends or the ply limit is hit. Used by the demo binary and by tests
//! that need a whole game.

use std::time::Instant;

use log::debug;

use crate::engines::engine_trait::{Engine, SearchParams};
use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    LightWinsCheckmate,
    DarkWinsCheckmate,
    DrawStalemate,
    DrawFiftyMoveRule,
    /// Ply limit reached with the game still open.
    Unfinished,
}

impl GameOutcome {
    /// Result tag in the usual `1-0` / `0-1` / `1/2-1/2` / `*` form.
    pub fn result_tag(self) -> &'static str {
        match self {
            GameOutcome::LightWinsCheckmate => "1-0",
            GameOutcome::DarkWinsCheckmate => "0-1",
            GameOutcome::DrawStalemate | GameOutcome::DrawFiftyMoveRule => "1/2-1/2",
            GameOutcome::Unfinished => "*",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SelfPlayConfig {
    pub max_plies: u16,
    pub params: SearchParams,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            params: SearchParams::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SelfPlayResult {
    pub outcome: GameOutcome,
    /// Final position; its undo stack holds the whole game.
    pub final_state: GameState,
    pub moves: Vec<String>,
    pub light_time_ns: u128,
    pub dark_time_ns: u128,
}

/// Terminal status of a position, if any.
pub fn game_outcome(game_state: &mut GameState) -> Option<GameOutcome> {
    if !game_state.has_legal_moves() {
        let outcome = if game_state.is_check(game_state.side_to_move) {
            match game_state.side_to_move {
                Color::Light => GameOutcome::DarkWinsCheckmate,
                Color::Dark => GameOutcome::LightWinsCheckmate,
            }
        } else {
            GameOutcome::DrawStalemate
        };
        return Some(outcome);
    }
    if game_state.is_fifty_move_draw() {
        return Some(GameOutcome::DrawFiftyMoveRule);
    }
    None
}

pub fn play_game(
    light: &mut dyn Engine,
    dark: &mut dyn Engine,
    start: GameState,
    config: SelfPlayConfig,
) -> ChessResult<SelfPlayResult> {
    light.new_game();
    dark.new_game();

    let mut state = start;
    let mut moves = Vec::<String>::new();
    let mut light_time_ns = 0u128;
    let mut dark_time_ns = 0u128;

    for _ in 0..config.max_plies {
        if let Some(outcome) = game_outcome(&mut state) {
            debug!("game over after {} plies: {outcome:?}", moves.len());
            return Ok(SelfPlayResult {
                outcome,
                final_state: state,
                moves,
                light_time_ns,
                dark_time_ns,
            });
        }

        let mover = state.side_to_move;
        let engine: &mut dyn Engine = match mover {
            Color::Light => &mut *light,
            Color::Dark => &mut *dark,
        };

        let started = Instant::now();
        let out = engine.choose_move(&mut state, &config.params)?;
        let elapsed_ns = started.elapsed().as_nanos();
        match mover {
            Color::Light => light_time_ns = light_time_ns.saturating_add(elapsed_ns),
            Color::Dark => dark_time_ns = dark_time_ns.saturating_add(elapsed_ns),
        }

        // The position is open here, so an engine that passes is broken.
        let Some(chosen) = out.best_move else {
            return Err(ChessError::IllegalMove(format!(
                "{} returned no move in an open position",
                engine.name()
            )));
        };
        if !state.legal_moves().contains(&chosen) {
            return Err(ChessError::IllegalMove(format!(
                "{} chose {chosen}, which is not legal",
                engine.name()
            )));
        }

        moves.push(chosen.to_string());
        state.try_apply(chosen)?;
    }

    let outcome = game_outcome(&mut state).unwrap_or(GameOutcome::Unfinished);
    Ok(SelfPlayResult {
        outcome,
        final_state: state,
        moves,
        light_time_ns,
        dark_time_ns,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::engine_negamax::NegamaxEngine;
    use crate::engines::engine_trait::EngineOutput;
    use crate::engines::engine_random::RandomEngine;

    #[test]
    fn random_games_stay_legal_and_are_reproducible() {
        let config = SelfPlayConfig {
            max_plies: 60,
            ..SelfPlayConfig::default()
        };
        let first = play_game(
            &mut RandomEngine::with_seed(3),
            &mut RandomEngine::with_seed(4),
            GameState::new_game(),
            config,
        )
        .expect("game should run");
        let second = play_game(
            &mut RandomEngine::with_seed(3),
            &mut RandomEngine::with_seed(4),
            GameState::new_game(),
            config,
        )
        .expect("game should run");

        assert_eq!(first.moves, second.moves);
        assert_eq!(first.final_state.move_history().count(), first.moves.len());
        assert!(first.moves.len() <= 60);
    }

    #[test]
    fn negamax_delivers_mate_in_one() {
        // Mate leaves the defender zero mobility, the best a one-ply search can see.
        let start = GameState::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").expect("FEN should parse");
        let result = play_game(
            &mut NegamaxEngine::new(),
            &mut RandomEngine::with_seed(1),
            start,
            SelfPlayConfig {
                max_plies: 1,
                params: SearchParams { depth: Some(1) },
            },
        )
        .expect("game should run");

        assert_eq!(result.moves, ["a1a8"]);
        assert_eq!(result.outcome, GameOutcome::LightWinsCheckmate);
        assert_eq!(result.outcome.result_tag(), "1-0");
    }

    /// Always passes, even when moves exist.
    struct PassingEngine;

    impl Engine for PassingEngine {
        fn name(&self) -> &str {
            "passer"
        }

        fn choose_move(
            &mut self,
            _game_state: &mut GameState,
            _params: &SearchParams,
        ) -> ChessResult<EngineOutput> {
            Ok(EngineOutput::default())
        }
    }

    #[test]
    fn engine_without_a_move_in_an_open_position_is_an_error() {
        let err = play_game(
            &mut RandomEngine::with_seed(5),
            &mut PassingEngine,
            GameState::new_game(),
            SelfPlayConfig::default(),
        )
        .expect_err("a passing engine must stop the game");

        assert!(
            matches!(&err, ChessError::IllegalMove(msg) if msg.contains("passer")),
            "{err:?}"
        );
    }

    #[test]
    fn terminal_start_ends_immediately() {
        let start = GameState::from_fen("k7/2Q5/1K6/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        let result = play_game(
            &mut RandomEngine::with_seed(1),
            &mut RandomEngine::with_seed(2),
            start,
            SelfPlayConfig::default(),
        )
        .expect("game should run");
        assert!(result.moves.is_empty());
        assert_eq!(result.outcome, GameOutcome::DrawStalemate);
    }
}
