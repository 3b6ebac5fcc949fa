//! Full legal move generation pipeline and the rules-facing `GameState` API.
//!
//! Pseudo-legal moves are generated piece by piece, then each candidate is
//! applied and undone in place; a candidate survives only if the mover's king
//! is not attacked afterwards. Terminal-state queries build on the same
//! filter.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::FIFTY_MOVE_HALFMOVES;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::{apply_move, make_move, undo_move};
use crate::move_generation::legal_move_checks::{is_king_in_check, is_square_attacked};
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_pieces::{
    generate_bishop_moves, generate_knight_moves, generate_queen_moves, generate_rook_moves,
};
use crate::moves::move_descriptions::ChessMove;
use crate::utils::algebraic::square_name;

/// All pseudo-legal moves for the side to move, in generation order:
/// pawns, knights, bishops, rooks, queens, king.
pub fn generate_pseudo_legal_moves(game_state: &GameState, out: &mut Vec<ChessMove>) {
    generate_pawn_moves(game_state, out);
    generate_knight_moves(game_state, out);
    generate_bishop_moves(game_state, out);
    generate_rook_moves(game_state, out);
    generate_queen_moves(game_state, out);
    generate_king_moves(game_state, out);
}

/// Legal moves for the side to move. The state is mutated while filtering
/// and restored before returning.
pub fn generate_legal_moves(game_state: &mut GameState) -> Vec<ChessMove> {
    let mut pseudo = Vec::with_capacity(64);
    generate_pseudo_legal_moves(game_state, &mut pseudo);
    pseudo.retain(|mv| keeps_king_safe(game_state, *mv));
    pseudo
}

/// Whether at least one legal move exists. Stops at the first one found.
pub fn has_any_legal_move(game_state: &mut GameState) -> bool {
    let mut pseudo = Vec::with_capacity(64);
    generate_pseudo_legal_moves(game_state, &mut pseudo);
    pseudo.into_iter().any(|mv| keeps_king_safe(game_state, mv))
}

/// Resolve a `(from, to, promotion)` request against the legal move list.
///
/// A promotion without an explicit piece resolves to the queen promotion.
pub fn find_legal_move(
    game_state: &mut GameState,
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
) -> ChessResult<ChessMove> {
    let moves = generate_legal_moves(game_state);
    moves
        .iter()
        .find(|mv| mv.matches(from, to, promotion))
        .or_else(|| {
            if promotion.is_none() {
                moves
                    .iter()
                    .find(|mv| mv.matches(from, to, Some(PieceKind::Queen)))
            } else {
                None
            }
        })
        .copied()
        .ok_or_else(|| {
            ChessError::IllegalMove(format!(
                "no legal move from {} to {} (promotion {promotion:?})",
                square_name(from),
                square_name(to)
            ))
        })
}

fn keeps_king_safe(game_state: &mut GameState, mv: ChessMove) -> bool {
    let mover = game_state.side_to_move;
    make_move(game_state, mv);
    let safe = !is_king_in_check(game_state, mover);
    undo_move(game_state);
    safe
}

impl GameState {
    /// Legal moves for the side to move; the position is left unchanged.
    #[inline]
    pub fn legal_moves(&mut self) -> Vec<ChessMove> {
        generate_legal_moves(self)
    }

    #[inline]
    pub fn legal_move_count(&mut self) -> usize {
        generate_legal_moves(self).len()
    }

    #[inline]
    pub fn is_square_attacked(&self, square: Square, by_color: Color) -> bool {
        is_square_attacked(self, square, by_color)
    }

    /// Apply a move produced by `legal_moves()` for this exact position.
    ///
    /// Passing any other move is a caller bug: debug builds assert
    /// membership, release builds only reject structurally impossible moves.
    /// Use `try_apply` for moves that come from outside the engine.
    pub fn apply(&mut self, mv: ChessMove) -> ChessResult<()> {
        debug_assert!(
            self.legal_moves().contains(&mv),
            "apply called with a move that is not legal here: {mv}"
        );
        apply_move(self, mv)
    }

    /// Apply `mv` only if it is a member of `legal_moves()`; otherwise return
    /// `ChessError::IllegalMove` and leave the state untouched.
    pub fn try_apply(&mut self, mv: ChessMove) -> ChessResult<()> {
        if !self.legal_moves().contains(&mv) {
            return Err(ChessError::IllegalMove(format!(
                "{mv} is not legal in {}",
                self.get_fen()
            )));
        }
        apply_move(self, mv)
    }

    /// Revert the most recent `apply`, returning the move undone.
    #[inline]
    pub fn undo(&mut self) -> Option<ChessMove> {
        undo_move(self)
    }

    /// `undo` for callers that treat an empty history as an error.
    pub fn try_undo(&mut self) -> ChessResult<ChessMove> {
        undo_move(self).ok_or(ChessError::NothingToUndo)
    }

    #[inline]
    pub fn is_check(&self, color: Color) -> bool {
        is_king_in_check(self, color)
    }

    #[inline]
    pub fn has_legal_moves(&mut self) -> bool {
        has_any_legal_move(self)
    }

    pub fn is_checkmate(&mut self) -> bool {
        self.is_check(self.side_to_move) && !self.has_legal_moves()
    }

    pub fn is_stalemate(&mut self) -> bool {
        !self.is_check(self.side_to_move) && !self.has_legal_moves()
    }

    /// Half-move clock reached the fifty-move threshold.
    #[inline]
    pub fn is_fifty_move_draw(&self) -> bool {
        self.halfmove_clock >= FIFTY_MOVE_HALFMOVES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_position_has_twenty_moves() {
        let mut game = GameState::new_game();
        let before = game.clone();
        assert_eq!(game.legal_moves().len(), 20);
        assert_eq!(game, before);
    }

    #[test]
    fn pinned_piece_cannot_leave_the_pin_line() {
        // Light knight e2 is pinned by the rook on e8.
        let mut game = GameState::from_fen("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1").expect("FEN should parse");
        let moves = game.legal_moves();
        assert!(moves.iter().all(|mv| mv.piece != PieceKind::Knight));
    }

    #[test]
    fn king_cannot_step_into_attack() {
        let mut game = GameState::from_fen("4k3/8/8/8/8/8/r7/4K3 w - - 0 1").expect("FEN should parse");
        let names: Vec<String> = game.legal_moves().iter().map(ToString::to_string).collect();
        assert_eq!(names.len(), 2);
        assert!(names.contains(&"e1d1".to_owned()));
        assert!(names.contains(&"e1f1".to_owned()));
    }

    #[test]
    fn try_apply_rejects_illegal_moves_untouched() {
        let mut game = GameState::new_game();
        let before = game.clone();
        let bogus = ChessMove::new(12, 36, PieceKind::Pawn);
        assert!(matches!(game.try_apply(bogus), Err(ChessError::IllegalMove(_))));
        assert_eq!(game, before);
        assert_eq!(game.try_undo(), Err(ChessError::NothingToUndo));
    }

    #[test]
    fn find_legal_move_defaults_promotion_to_queen() {
        let mut game = GameState::from_fen("8/4P3/8/8/8/8/k7/4K3 w - - 0 1").expect("FEN should parse");
        let mv = find_legal_move(&mut game, 52, 60, None).expect("promotion should resolve");
        assert_eq!(mv.promotion, Some(PieceKind::Queen));
        let knight = find_legal_move(&mut game, 52, 60, Some(PieceKind::Knight))
            .expect("underpromotion should resolve");
        assert_eq!(knight.promotion, Some(PieceKind::Knight));
        assert!(find_legal_move(&mut game, 52, 44, None).is_err());
    }

    #[test]
    fn fifty_move_threshold() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 100 80").expect("FEN should parse");
        assert!(game.is_fifty_move_draw());
        assert!(!GameState::new_game().is_fifty_move_draw());
    }
}
