//! Terminal-oriented Unicode board renderer.
//!
//! Used by the self-play binary and handy when debugging a failing test.

use crate::game_state::{chess_types::*, game_state::GameState};

/// Render the board with rank 8 on top, framed by file letters and rank
/// numbers, followed by a line naming the side to move.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();
    out.push_str("  a b c d e f g h\n");

    for rank in (0..8u8).rev() {
        let rank_char = char::from(b'1' + rank);
        out.push(rank_char);

        for file in 0..8u8 {
            out.push(' ');
            out.push(
                game_state
                    .piece_on(make_square(file, rank))
                    .map_or('·', piece_glyph),
            );
        }

        out.push(' ');
        out.push(rank_char);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h\n");
    out.push_str(match game_state.side_to_move {
        Color::Light => "Light to move",
        Color::Dark => "Dark to move",
    });
    out
}

fn piece_glyph(piece: Piece) -> char {
    const LIGHT: [char; 6] = ['♙', '♘', '♗', '♖', '♕', '♔'];
    const DARK: [char; 6] = ['♟', '♞', '♝', '♜', '♛', '♚'];
    match piece.color {
        Color::Light => LIGHT[piece.kind.index()],
        Color::Dark => DARK[piece.kind.index()],
    }
}
