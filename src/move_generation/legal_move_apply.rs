//! In-place move application and its exact inverse.
//!
//! `apply_move` pushes an `UndoState` before touching the board and
//! `undo_move` pops it, so any sequence of applies followed by the same number
//! of undos restores the original `GameState` bit for bit.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{castling_lane_for_king_move, castling_rights_revoked_by};
use crate::game_state::{chess_types::*, game_state::GameState, undo_state::UndoState};
use crate::move_generation::legal_move_shared::piece_on_square_for_color;
use crate::moves::move_descriptions::ChessMove;

/// Apply `mv` for the side to move.
///
/// Only structural consistency is verified here (the side to move owns
/// `mv.piece` on `mv.from` and does not occupy `mv.to`); full legality is the
/// caller's job. On error the state is unchanged.
pub fn apply_move(game_state: &mut GameState, mv: ChessMove) -> ChessResult<()> {
    let mover = game_state.side_to_move;
    if piece_on_square_for_color(game_state, mover, mv.from) != Some(mv.piece) {
        return Err(ChessError::IllegalMove(format!(
            "{mv}: no {mover:?} {:?} on the origin square",
            mv.piece
        )));
    }
    if game_state.occupancy_by_color[mover.index()] & square_mask(mv.to) != 0 {
        return Err(ChessError::IllegalMove(format!(
            "{mv}: destination holds a {mover:?} piece"
        )));
    }

    make_move(game_state, mv);
    Ok(())
}

/// Unchecked application used once a move is known to be consistent.
pub(crate) fn make_move(game_state: &mut GameState, mv: ChessMove) {
    let mover = game_state.side_to_move;
    let enemy = mover.opposite();
    let moved_piece = mv.piece;

    let captured = captured_piece_and_square(game_state, mv);

    game_state.undo_stack.push(UndoState {
        mv,
        moved_piece,
        captured,
        prev_castling_rights: game_state.castling_rights,
        prev_en_passant_square: game_state.en_passant_square,
        prev_halfmove_clock: game_state.halfmove_clock,
        prev_fullmove_number: game_state.fullmove_number,
    });

    if let Some((kind, square)) = captured {
        game_state.pieces[enemy.index()][kind.index()] &= !square_mask(square);
    }

    let placed = placed_piece(mover, mv);
    game_state.pieces[mover.index()][moved_piece.index()] &= !square_mask(mv.from);
    game_state.pieces[mover.index()][placed.index()] |= square_mask(mv.to);

    if moved_piece == PieceKind::King {
        if let Some(lane) = castling_lane_for_king_move(mv.from, mv.to) {
            relocate_rook(game_state, mover, lane.rook_from, lane.rook_to);
        }
    }

    game_state.castling_rights &=
        !(castling_rights_revoked_by(mv.from) | castling_rights_revoked_by(mv.to));

    game_state.en_passant_square =
        if moved_piece == PieceKind::Pawn && mv.from.abs_diff(mv.to) == 16 {
            Some((mv.from + mv.to) / 2)
        } else {
            None
        };

    if moved_piece == PieceKind::Pawn || captured.is_some() {
        game_state.halfmove_clock = 0;
    } else {
        game_state.halfmove_clock = game_state.halfmove_clock.saturating_add(1);
    }
    if mover == Color::Dark {
        game_state.fullmove_number = game_state.fullmove_number.saturating_add(1);
    }

    game_state.side_to_move = enemy;
    game_state.ply = game_state.ply.saturating_add(1);
    game_state.recalc_occupancy();
}

/// Revert the most recent `apply_move`. Returns the move that was undone.
pub fn undo_move(game_state: &mut GameState) -> Option<ChessMove> {
    let undo = game_state.undo_stack.pop()?;
    let mv = undo.mv;
    let mover = game_state.side_to_move.opposite();

    let placed = placed_piece(mover, mv);
    game_state.pieces[mover.index()][placed.index()] &= !square_mask(mv.to);
    game_state.pieces[mover.index()][undo.moved_piece.index()] |= square_mask(mv.from);

    if undo.moved_piece == PieceKind::King {
        if let Some(lane) = castling_lane_for_king_move(mv.from, mv.to) {
            relocate_rook(game_state, mover, lane.rook_to, lane.rook_from);
        }
    }

    if let Some((kind, square)) = undo.captured {
        game_state.pieces[mover.opposite().index()][kind.index()] |= square_mask(square);
    }

    game_state.castling_rights = undo.prev_castling_rights;
    game_state.en_passant_square = undo.prev_en_passant_square;
    game_state.halfmove_clock = undo.prev_halfmove_clock;
    game_state.fullmove_number = undo.prev_fullmove_number;
    game_state.side_to_move = mover;
    game_state.ply = game_state.ply.saturating_sub(1);
    game_state.recalc_occupancy();

    Some(mv)
}

/// Kind that ends up on the destination: the promotion choice (queen when
/// unspecified) for a pawn reaching its last rank, otherwise the mover.
#[inline]
fn placed_piece(mover: Color, mv: ChessMove) -> PieceKind {
    if mv.piece == PieceKind::Pawn && square_rank(mv.to) == mover.promotion_rank() {
        mv.promotion.unwrap_or(PieceKind::Queen)
    } else {
        mv.piece
    }
}

fn captured_piece_and_square(game_state: &GameState, mv: ChessMove) -> Option<(PieceKind, Square)> {
    let enemy = game_state.side_to_move.opposite();
    if let Some(kind) = piece_on_square_for_color(game_state, enemy, mv.to) {
        return Some((kind, mv.to));
    }

    // En passant: a diagonal pawn step onto the empty target square takes the
    // pawn that just double-stepped past it.
    let is_en_passant = mv.piece == PieceKind::Pawn
        && game_state.en_passant_square == Some(mv.to)
        && square_file(mv.from) != square_file(mv.to);
    if is_en_passant {
        let victim = make_square(square_file(mv.to), square_rank(mv.from));
        return piece_on_square_for_color(game_state, enemy, victim)
            .filter(|kind| *kind == PieceKind::Pawn)
            .map(|kind| (kind, victim));
    }

    None
}

fn relocate_rook(game_state: &mut GameState, color: Color, from: Square, to: Square) {
    let rooks = &mut game_state.pieces[color.index()][PieceKind::Rook.index()];
    *rooks &= !square_mask(from);
    *rooks |= square_mask(to);
}
