use log::{info, warn};

use crate::engines::engine_trait::{Engine, EngineOutput, SearchParams};
use crate::errors::{ChessError, ChessResult};
use crate::game_state::game_state::GameState;
use crate::search::board_scoring::MaterialMobilityScorer;
use crate::search::negamax::{search_best_move, SearchConfig, SearchOutcome};

/// Fixed-depth negamax engine with the material-and-mobility scorer.
pub struct NegamaxEngine {
    config: SearchConfig,
    scorer: MaterialMobilityScorer,
}

impl NegamaxEngine {
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            config,
            scorer: MaterialMobilityScorer,
        }
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }
}

impl Default for NegamaxEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for NegamaxEngine {
    fn name(&self) -> &str {
        "Sapling Negamax"
    }

    fn set_option(&mut self, name: &str, value: &str) -> ChessResult<()> {
        if !name.eq_ignore_ascii_case("depth") {
            warn!("unknown engine option {name}");
            return Err(ChessError::InvalidOption(format!("unknown option {name}")));
        }

        let depth = value
            .trim()
            .parse::<u8>()
            .map_err(|_| ChessError::InvalidOption(format!("depth must be a number, got {value}")))?;
        self.config = SearchConfig::new(depth)?;
        Ok(())
    }

    fn choose_move(
        &mut self,
        game_state: &mut GameState,
        params: &SearchParams,
    ) -> ChessResult<EngineOutput> {
        let config = match params.depth {
            Some(depth) => SearchConfig::new(depth)?,
            None => self.config,
        };

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string negamax_engine requested_depth {}",
            config.depth
        ));

        match search_best_move(game_state, &self.scorer, config)? {
            SearchOutcome::BestMove(result) => {
                out.info_lines.push(format!(
                    "info depth {} nodes {} score cp {} pv {}",
                    result.depth, result.nodes, result.best_score, result.best_move
                ));
                info!(
                    "{} chose {} (score {}, {} nodes)",
                    self.name(),
                    result.best_move,
                    result.best_score,
                    result.nodes
                );
                out.best_move = Some(result.best_move);
                out.score = Some(result.best_score);
            }
            SearchOutcome::NoMoveAvailable => {
                out.info_lines
                    .push("info string negamax_engine no legal move".to_owned());
            }
        }

        Ok(out)
    }
}
