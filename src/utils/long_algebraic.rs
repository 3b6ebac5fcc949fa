//! Long algebraic move text (`e2e4`, `e7e8q`) to and from legal moves.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::{chess_types::PieceKind, game_state::GameState};
use crate::move_generation::legal_move_generator::find_legal_move;
use crate::moves::move_descriptions::ChessMove;
use crate::utils::algebraic::algebraic_to_square;

/// Long algebraic text for a move. Same as `ChessMove`'s `Display`.
#[inline]
pub fn move_to_long_algebraic(mv: ChessMove) -> String {
    mv.to_string()
}

/// Resolve long algebraic text against the legal moves of `game_state`.
///
/// Malformed text yields `InvalidAlgebraic`; well-formed text that names no
/// legal move yields `IllegalMove`. A pawn reaching the last rank without a
/// suffix promotes to a queen.
pub fn long_algebraic_to_move(
    long_algebraic: &str,
    game_state: &mut GameState,
) -> ChessResult<ChessMove> {
    let text = long_algebraic.trim();
    if !text.is_ascii() || !(4..=5).contains(&text.len()) {
        return Err(ChessError::InvalidAlgebraic(format!(
            "bad long algebraic move: {long_algebraic}"
        )));
    }

    let from = algebraic_to_square(&text[0..2])?;
    let to = algebraic_to_square(&text[2..4])?;
    let promotion = match text[4..].chars().next() {
        None => None,
        Some(ch) => Some(promotion_from_char(ch)?),
    };

    find_legal_move(game_state, from, to, promotion)
}

fn promotion_from_char(ch: char) -> ChessResult<PieceKind> {
    match PieceKind::from_char(ch) {
        Some(kind) if PieceKind::PROMOTIONS.contains(&kind) => Ok(kind),
        _ => Err(ChessError::InvalidAlgebraic(format!(
            "bad promotion piece '{ch}'"
        ))),
    }
}
