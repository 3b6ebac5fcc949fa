//! Pseudo-legal moves for knights and the three sliding pieces.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::{push_target_moves, squares_of};
use crate::moves::leaper_attacks::knight_attacks;
use crate::moves::move_descriptions::ChessMove;
use crate::moves::slider_attacks::{bishop_attacks, queen_attacks, rook_attacks};

pub fn generate_knight_moves(game_state: &GameState, out: &mut Vec<ChessMove>) {
    generate_piece_moves(game_state, PieceKind::Knight, out, |from, _| knight_attacks(from));
}

pub fn generate_bishop_moves(game_state: &GameState, out: &mut Vec<ChessMove>) {
    generate_piece_moves(game_state, PieceKind::Bishop, out, bishop_attacks);
}

pub fn generate_rook_moves(game_state: &GameState, out: &mut Vec<ChessMove>) {
    generate_piece_moves(game_state, PieceKind::Rook, out, rook_attacks);
}

pub fn generate_queen_moves(game_state: &GameState, out: &mut Vec<ChessMove>) {
    generate_piece_moves(game_state, PieceKind::Queen, out, queen_attacks);
}

fn generate_piece_moves(
    game_state: &GameState,
    kind: PieceKind,
    out: &mut Vec<ChessMove>,
    attacks: impl Fn(Square, u64) -> u64,
) {
    let side = game_state.side_to_move;
    let own_occ = game_state.occupancy_by_color[side.index()];

    for from in squares_of(game_state.pieces_of(side, kind)) {
        let targets = attacks(from, game_state.occupancy_all) & !own_occ;
        push_target_moves(game_state, from, kind, targets, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_position_knights_have_four_moves() {
        let game = GameState::new_game();
        let mut out = Vec::new();
        generate_knight_moves(&game, &mut out);
        assert_eq!(out.len(), 4);
        assert!(out.iter().all(|mv| !mv.is_capture()));
    }

    #[test]
    fn sliders_stop_on_blockers_and_flag_captures() {
        // Rook a1, own pawn a3, enemy knight d1.
        let game = GameState::from_fen("4k3/8/8/8/8/P7/8/R2nK3 w - - 0 1").expect("FEN should parse");
        let mut out = Vec::new();
        generate_rook_moves(&game, &mut out);
        let names: Vec<String> = out.iter().map(ToString::to_string).collect();
        assert_eq!(out.len(), 4);
        assert!(names.contains(&"a1a2".to_owned()));
        assert!(!names.contains(&"a1a3".to_owned()));
        let capture = out.iter().find(|mv| mv.to == 3).expect("rook should reach d1");
        assert!(capture.is_capture());
    }

    #[test]
    fn queen_combines_rook_and_bishop_rays() {
        let game = GameState::from_fen("4k3/8/8/8/3Q4/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let mut out = Vec::new();
        generate_queen_moves(&game, &mut out);
        assert_eq!(out.len(), 27);
        let mut bishop_only = Vec::new();
        generate_bishop_moves(&game, &mut bishop_only);
        assert!(bishop_only.is_empty());
    }
}
