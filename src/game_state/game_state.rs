//! Core incremental board state representation.
//!
//! `GameState` is the position the whole crate works on. It stores piece
//! bitboards, occupancy caches, turn/state flags, clocks, and the undo stack
//! used by the apply/undo contract that search relies on.

use crate::errors::ChessResult;
use crate::game_state::chess_rules::BACK_RANK;
use crate::game_state::chess_types::*;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

/// Incremental game state optimized for in-place apply/undo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    // --- Bitboard representation ---
    // [color][piece_kind]
    pub pieces: [[u64; 6]; 2],

    // Occupancy caches.
    pub occupancy_by_color: [u64; 2],
    pub occupancy_all: u64,

    // --- Side and state flags ---
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,

    // --- Clocks / move counters ---
    pub halfmove_clock: u16,
    pub fullmove_number: u16,
    pub ply: u16,

    // --- Apply/undo stack ---
    pub undo_stack: Vec<UndoState>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            pieces: [[0; 6]; 2],
            occupancy_by_color: [0; 2],
            occupancy_all: 0,

            side_to_move: Color::Light,
            castling_rights: 0,
            en_passant_square: None,

            halfmove_clock: 0,
            fullmove_number: 1,
            ply: 0,

            undo_stack: Vec::new(),
        }
    }
}

impl GameState {
    /// Empty board, light to move, no rights. Mostly useful for tests and
    /// the FEN parser.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard starting position.
    pub fn new_game() -> Self {
        let mut game_state = Self::default();
        for (file, kind) in BACK_RANK.iter().enumerate() {
            let file = file as u8;
            game_state.put_piece(Color::Light, *kind, make_square(file, 0));
            game_state.put_piece(Color::Light, PieceKind::Pawn, make_square(file, 1));
            game_state.put_piece(Color::Dark, PieceKind::Pawn, make_square(file, 6));
            game_state.put_piece(Color::Dark, *kind, make_square(file, 7));
        }
        game_state.castling_rights = CASTLE_ALL;
        game_state
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// Place a piece and refresh occupancy. Does not touch the undo stack.
    pub fn put_piece(&mut self, color: Color, kind: PieceKind, square: Square) {
        self.remove_piece(square);
        self.pieces[color.index()][kind.index()] |= square_mask(square);
        self.recalc_occupancy();
    }

    /// Clear whatever stands on `square`. Does not touch the undo stack.
    pub fn remove_piece(&mut self, square: Square) -> Option<Piece> {
        let found = self.piece_on(square)?;
        self.pieces[found.color.index()][found.kind.index()] &= !square_mask(square);
        self.recalc_occupancy();
        Some(found)
    }

    #[inline]
    pub fn piece_on(&self, square: Square) -> Option<Piece> {
        let mask = square_mask(square);
        if self.occupancy_all & mask == 0 {
            return None;
        }
        for color in Color::ALL {
            for kind in PieceKind::ALL {
                if self.pieces[color.index()][kind.index()] & mask != 0 {
                    return Some(Piece::new(color, kind));
                }
            }
        }
        None
    }

    #[inline]
    pub fn pieces_of(&self, color: Color, kind: PieceKind) -> u64 {
        self.pieces[color.index()][kind.index()]
    }

    /// Moves applied since this state was created, oldest first.
    pub fn move_history(&self) -> impl Iterator<Item = crate::moves::move_descriptions::ChessMove> + '_ {
        self.undo_stack.iter().map(|undo| undo.mv)
    }

    pub(crate) fn recalc_occupancy(&mut self) {
        for color in Color::ALL {
            self.occupancy_by_color[color.index()] = self.pieces[color.index()]
                .iter()
                .fold(0u64, |acc, bb| acc | bb);
        }
        self.occupancy_all = self.occupancy_by_color[Color::Light.index()]
            | self.occupancy_by_color[Color::Dark.index()];
    }
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;

    #[test]
    fn new_game_matches_starting_fen() {
        let built = GameState::new_game();
        let parsed = GameState::from_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        assert_eq!(built, parsed);
        assert_eq!(built.get_fen(), STARTING_POSITION_FEN);
        assert_eq!(built.occupancy_all.count_ones(), 32);
    }

    #[test]
    fn put_and_remove_keep_occupancy_in_sync() {
        let mut game = GameState::new_empty();
        game.put_piece(Color::Dark, PieceKind::Queen, 27);
        assert_eq!(
            game.piece_on(27),
            Some(Piece::new(Color::Dark, PieceKind::Queen))
        );
        assert_eq!(game.occupancy_by_color[Color::Dark.index()], 1u64 << 27);

        game.put_piece(Color::Light, PieceKind::Knight, 27);
        assert_eq!(game.pieces_of(Color::Dark, PieceKind::Queen), 0);

        assert_eq!(
            game.remove_piece(27),
            Some(Piece::new(Color::Light, PieceKind::Knight))
        );
        assert_eq!(game.occupancy_all, 0);
        assert_eq!(game.remove_piece(27), None);
    }
}
