use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::ChessMove;

/// Single undo record pushed by `apply` and popped by `undo`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoState {
    pub mv: ChessMove,
    pub moved_piece: PieceKind,
    /// Captured kind and the square it stood on (differs from `mv.to` for en passant).
    pub captured: Option<(PieceKind, Square)>,

    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant_square: Option<Square>,
    pub prev_halfmove_clock: u16,
    pub prev_fullmove_number: u16,
}
