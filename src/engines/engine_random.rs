use log::debug;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput, SearchParams};
use crate::errors::ChessResult;
use crate::game_state::game_state::GameState;

/// Uniformly random legal mover. Baseline opponent for self-play.
pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible move sequence for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Sapling Random"
    }

    fn choose_move(
        &mut self,
        game_state: &mut GameState,
        _params: &SearchParams,
    ) -> ChessResult<EngineOutput> {
        let legal_moves = game_state.legal_moves();

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_moves {}",
            legal_moves.len()
        ));

        out.best_move = legal_moves.as_slice().choose(&mut self.rng).copied();
        if let Some(mv) = out.best_move {
            debug!("{} picked {mv} from {} moves", self.name(), legal_moves.len());
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_a_legal_move_reproducibly() {
        let mut game = GameState::new_game();
        let legal = game.legal_moves();

        let mut first = RandomEngine::with_seed(7);
        let mut second = RandomEngine::with_seed(7);
        let params = SearchParams::default();
        let a = first.choose_move(&mut game, &params).expect("engine should run");
        let b = second.choose_move(&mut game, &params).expect("engine should run");

        let picked = a.best_move.expect("start position has moves");
        assert!(legal.contains(&picked));
        assert_eq!(a.best_move, b.best_move);
    }

    #[test]
    fn no_move_when_checkmated() {
        let mut game = GameState::from_fen(
            "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3",
        )
        .expect("FEN should parse");
        let out = RandomEngine::with_seed(1)
            .choose_move(&mut game, &SearchParams::default())
            .expect("engine should run");
        assert_eq!(out.best_move, None);
    }
}
