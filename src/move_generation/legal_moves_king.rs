use crate::game_state::chess_rules::castling_lanes_for;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::push_target_moves;
use crate::moves::leaper_attacks::king_attacks;
use crate::moves::move_descriptions::{ChessMove, FLAG_CASTLING};

pub fn generate_king_moves(game_state: &GameState, out: &mut Vec<ChessMove>) {
    let side = game_state.side_to_move;
    let own_occ = game_state.occupancy_by_color[side.index()];
    let king_bb = game_state.pieces_of(side, PieceKind::King);
    if king_bb == 0 {
        return;
    }

    let from = king_bb.trailing_zeros() as Square;
    push_target_moves(game_state, from, PieceKind::King, king_attacks(from) & !own_occ, out);
    generate_castling_moves(game_state, from, out);
}

/// Castling needs the right, the king and rook on their home squares, an
/// empty path, and no attacked square among the king's start, transit, and
/// destination squares.
fn generate_castling_moves(game_state: &GameState, king_from: Square, out: &mut Vec<ChessMove>) {
    let side = game_state.side_to_move;
    let enemy = side.opposite();
    let rooks = game_state.pieces_of(side, PieceKind::Rook);

    for lane in castling_lanes_for(side) {
        if game_state.castling_rights & lane.right == 0
            || lane.king_from != king_from
            || rooks & square_mask(lane.rook_from) == 0
            || game_state.occupancy_all & lane.must_be_empty != 0
        {
            continue;
        }

        let path_attacked = lane
            .must_be_safe
            .iter()
            .any(|&square| is_square_attacked(game_state, square, enemy));
        if path_attacked {
            continue;
        }

        out.push(ChessMove::new(lane.king_from, lane.king_to, PieceKind::King).with_flags(FLAG_CASTLING));
    }
}
