//! Static evaluation used at the search horizon.
//!
//! Search stays modular by delegating position scoring to `BoardScorer`.
//! The default `MaterialMobilityScorer` is plain material balance plus a
//! small bonus per legal move, both seen from the side to move.

use crate::game_state::{chess_types::*, game_state::GameState};

/// Bonus per legal move available to the side to move.
pub const MOBILITY_WEIGHT: i32 = 3;

pub trait BoardScorer: Send + Sync {
    /// Score from the perspective of the side to move. Takes `&mut` because
    /// scorers may generate legal moves, which apply and undo in place; the
    /// state must be unchanged on return.
    fn score(&self, game_state: &mut GameState) -> i32;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialMobilityScorer;

impl MaterialMobilityScorer {
    #[inline]
    pub const fn piece_value(piece: PieceKind) -> i32 {
        match piece {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 320,
            PieceKind::Bishop => 330,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 0,
        }
    }

    /// Light material minus dark material.
    pub fn material_balance(game_state: &GameState) -> i32 {
        PieceKind::ALL
            .iter()
            .map(|&piece| {
                let light = game_state.pieces_of(Color::Light, piece).count_ones() as i32;
                let dark = game_state.pieces_of(Color::Dark, piece).count_ones() as i32;
                (light - dark) * Self::piece_value(piece)
            })
            .sum()
    }
}

impl BoardScorer for MaterialMobilityScorer {
    fn score(&self, game_state: &mut GameState) -> i32 {
        evaluate(game_state)
    }
}

/// Material from the side to move's point of view plus
/// `MOBILITY_WEIGHT` per legal move of the side to move.
pub fn evaluate(game_state: &mut GameState) -> i32 {
    let balance = MaterialMobilityScorer::material_balance(game_state);
    let oriented = match game_state.side_to_move {
        Color::Light => balance,
        Color::Dark => -balance,
    };
    let mobility = game_state.legal_move_count() as i32 * MOBILITY_WEIGHT;
    oriented + mobility
}
