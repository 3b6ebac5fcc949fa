//! Attack and check detection.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::leaper_attacks::{king_attacks, knight_attacks, pawn_attacks};
use crate::moves::slider_attacks::{bishop_attacks, rook_attacks};

#[inline]
pub fn king_square(game_state: &GameState, color: Color) -> Option<Square> {
    let kings = game_state.pieces_of(color, PieceKind::King);
    if kings == 0 {
        None
    } else {
        Some(kings.trailing_zeros() as Square)
    }
}

#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    let Some(king_sq) = king_square(game_state, color) else {
        return false;
    };
    is_square_attacked(game_state, king_sq, color.opposite())
}

/// Whether any piece of `attacker_color` attacks `square`, regardless of what
/// stands on it. Works backwards from the target: a piece of kind K attacks
/// `square` exactly when a K on `square` would attack the piece.
pub fn is_square_attacked(game_state: &GameState, square: Square, attacker_color: Color) -> bool {
    let pieces = &game_state.pieces[attacker_color.index()];

    // A pawn of `attacker_color` hits `square` from the squares an opposing
    // pawn on `square` would hit.
    if pawn_attacks(attacker_color.opposite(), square) & pieces[PieceKind::Pawn.index()] != 0 {
        return true;
    }

    if knight_attacks(square) & pieces[PieceKind::Knight.index()] != 0 {
        return true;
    }

    if king_attacks(square) & pieces[PieceKind::King.index()] != 0 {
        return true;
    }

    let queens = pieces[PieceKind::Queen.index()];
    let diagonal = pieces[PieceKind::Bishop.index()] | queens;
    if diagonal != 0 && bishop_attacks(square, game_state.occupancy_all) & diagonal != 0 {
        return true;
    }

    let straight = pieces[PieceKind::Rook.index()] | queens;
    straight != 0 && rook_attacks(square, game_state.occupancy_all) & straight != 0
}
