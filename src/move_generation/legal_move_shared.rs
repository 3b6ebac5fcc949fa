use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::{ChessMove, FLAG_CAPTURE};

#[inline]
pub fn piece_on_square_for_color(
    game_state: &GameState,
    color: Color,
    square: Square,
) -> Option<PieceKind> {
    let mask = square_mask(square);
    if game_state.occupancy_by_color[color.index()] & mask == 0 {
        return None;
    }
    PieceKind::ALL
        .into_iter()
        .find(|kind| game_state.pieces[color.index()][kind.index()] & mask != 0)
}

/// Push one move per set bit of `targets`, flagging landings on enemy pieces
/// as captures. `targets` must already exclude own-occupied squares.
#[inline]
pub fn push_target_moves(
    game_state: &GameState,
    from: Square,
    piece: PieceKind,
    mut targets: u64,
    out: &mut Vec<ChessMove>,
) {
    let enemy_occ = game_state.occupancy_by_color[game_state.side_to_move.opposite().index()];
    while targets != 0 {
        let to = targets.trailing_zeros() as Square;
        let flags = if enemy_occ & square_mask(to) != 0 {
            FLAG_CAPTURE
        } else {
            0
        };
        out.push(ChessMove::new(from, to, piece).with_flags(flags));
        targets &= targets - 1;
    }
}

/// Iterate the squares of a bitboard, lowest index first.
#[inline]
pub fn squares_of(mut bitboard: u64) -> impl Iterator<Item = Square> {
    std::iter::from_fn(move || {
        if bitboard == 0 {
            return None;
        }
        let square = bitboard.trailing_zeros() as Square;
        bitboard &= bitboard - 1;
        Some(square)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squares_of_walks_low_to_high() {
        let squares: Vec<Square> = squares_of((1 << 3) | (1 << 40) | 1).collect();
        assert_eq!(squares, vec![0, 3, 40]);
    }

    #[test]
    fn finds_piece_for_requested_color_only() {
        let game = GameState::new_game();
        assert_eq!(
            piece_on_square_for_color(&game, Color::Light, 4),
            Some(PieceKind::King)
        );
        assert_eq!(piece_on_square_for_color(&game, Color::Dark, 4), None);
    }
}
