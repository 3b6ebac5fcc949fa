use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::squares_of;
use crate::moves::leaper_attacks::pawn_attacks;
use crate::moves::move_descriptions::{
    ChessMove, FLAG_CAPTURE, FLAG_DOUBLE_PAWN_PUSH, FLAG_EN_PASSANT,
};

/// Pseudo-legal pawn pushes, double pushes, captures, en passant, and
/// promotions (one move per promotion kind).
pub fn generate_pawn_moves(game_state: &GameState, out: &mut Vec<ChessMove>) {
    let side = game_state.side_to_move;
    let enemy_occ = game_state.occupancy_by_color[side.opposite().index()];
    let empty = !game_state.occupancy_all;
    let ep_mask = game_state.en_passant_square.map_or(0, square_mask);

    for from in squares_of(game_state.pieces_of(side, PieceKind::Pawn)) {
        // A pawn never stands on its promotion rank, so one step stays on board.
        let one_step = match side {
            Color::Light => from + 8,
            Color::Dark => from - 8,
        };

        if square_mask(one_step) & empty != 0 {
            push_pawn_move(side, ChessMove::new(from, one_step, PieceKind::Pawn), out);

            if square_rank(from) == side.pawn_start_rank() {
                let two_step = match side {
                    Color::Light => from + 16,
                    Color::Dark => from - 16,
                };
                if square_mask(two_step) & empty != 0 {
                    out.push(
                        ChessMove::new(from, two_step, PieceKind::Pawn)
                            .with_flags(FLAG_DOUBLE_PAWN_PUSH),
                    );
                }
            }
        }

        let attacks = pawn_attacks(side, from);
        for to in squares_of(attacks & enemy_occ) {
            push_pawn_move(
                side,
                ChessMove::new(from, to, PieceKind::Pawn).with_flags(FLAG_CAPTURE),
                out,
            );
        }

        if attacks & ep_mask != 0 {
            if let Some(to) = game_state.en_passant_square {
                out.push(
                    ChessMove::new(from, to, PieceKind::Pawn)
                        .with_flags(FLAG_CAPTURE | FLAG_EN_PASSANT),
                );
            }
        }
    }
}

fn push_pawn_move(side: Color, mv: ChessMove, out: &mut Vec<ChessMove>) {
    if square_rank(mv.to) == side.promotion_rank() {
        for kind in PieceKind::PROMOTIONS {
            out.push(mv.with_promotion(kind));
        }
    } else {
        out.push(mv);
    }
}

#[cfg(test)]
mod tests {
    use super::generate_pawn_moves;
    use crate::game_state::game_state::GameState;

    fn pawn_moves(fen: &str) -> Vec<String> {
        let game = GameState::from_fen(fen).expect("FEN should parse");
        let mut out = Vec::new();
        generate_pawn_moves(&game, &mut out);
        let mut names: Vec<String> = out.iter().map(ToString::to_string).collect();
        names.sort();
        names
    }

    #[test]
    fn start_rank_pawn_can_single_and_double_step() {
        assert_eq!(pawn_moves("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1"), vec!["e2e3", "e2e4"]);
    }

    #[test]
    fn blocked_pawn_has_no_push() {
        assert!(pawn_moves("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1").is_empty());
    }

    #[test]
    fn promotion_generates_four_choices_per_target() {
        let moves = pawn_moves("1r2k3/P7/8/8/8/8/8/4K3 w - - 0 1");
        assert_eq!(moves.len(), 8);
        assert!(moves.contains(&"a7b8n".to_owned()));
        assert!(moves.contains(&"a7a8q".to_owned()));
    }

    #[test]
    fn dark_pawn_takes_en_passant() {
        let moves = pawn_moves("4k3/8/8/8/3pP3/8/8/4K3 b - e3 0 1");
        assert_eq!(moves, vec!["d4d3", "d4e3"]);
    }
}
