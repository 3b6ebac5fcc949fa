//! Engine abstraction layer used by front ends.
//!
//! Defines common input parameters and output payloads so different move
//! choosers can be swapped behind a single trait interface.

use crate::errors::ChessResult;
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::ChessMove;

/// Per-call overrides. `None` fields fall back to the engine's own settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchParams {
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    /// `None` when the position has no legal move.
    pub best_move: Option<ChessMove>,
    pub score: Option<i32>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn set_option(&mut self, _name: &str, _value: &str) -> ChessResult<()> {
        Ok(())
    }

    /// Choose a move for the side to move. `game_state` is borrowed mutably
    /// for the search and is unchanged on return.
    fn choose_move(
        &mut self,
        game_state: &mut GameState,
        params: &SearchParams,
    ) -> ChessResult<EngineOutput>;
}
