//! Canonical chess-rule constants.
//!
//! Standard starting position, castling geometry, and the per-square table of
//! castling rights revoked when a move touches a king or rook home square.

use crate::game_state::chess_types::*;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Back-rank layout shared by both colors, file `a` first.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Half-move clock value at which the fifty-move rule allows a draw claim.
pub const FIFTY_MOVE_HALFMOVES: u16 = 100;

/// One castling option: the right it needs, the king and rook paths, and the
/// squares that must be empty or unattacked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingLane {
    pub right: CastlingRights,
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
    pub must_be_empty: u64,
    /// King start, transit, and destination squares.
    pub must_be_safe: [Square; 3],
}

pub const CASTLING_LANES: [CastlingLane; 4] = [
    CastlingLane {
        right: CASTLE_LIGHT_KINGSIDE,
        king_from: 4,
        king_to: 6,
        rook_from: 7,
        rook_to: 5,
        must_be_empty: (1 << 5) | (1 << 6),
        must_be_safe: [4, 5, 6],
    },
    CastlingLane {
        right: CASTLE_LIGHT_QUEENSIDE,
        king_from: 4,
        king_to: 2,
        rook_from: 0,
        rook_to: 3,
        must_be_empty: (1 << 1) | (1 << 2) | (1 << 3),
        must_be_safe: [4, 3, 2],
    },
    CastlingLane {
        right: CASTLE_DARK_KINGSIDE,
        king_from: 60,
        king_to: 62,
        rook_from: 63,
        rook_to: 61,
        must_be_empty: (1 << 61) | (1 << 62),
        must_be_safe: [60, 61, 62],
    },
    CastlingLane {
        right: CASTLE_DARK_QUEENSIDE,
        king_from: 60,
        king_to: 58,
        rook_from: 56,
        rook_to: 59,
        must_be_empty: (1 << 57) | (1 << 58) | (1 << 59),
        must_be_safe: [60, 59, 58],
    },
];

/// Castling lanes available to `color`.
#[inline]
pub fn castling_lanes_for(color: Color) -> &'static [CastlingLane] {
    match color {
        Color::Light => &CASTLING_LANES[0..2],
        Color::Dark => &CASTLING_LANES[2..4],
    }
}

/// Lane whose king destination is `king_to`, for a king leaving `king_from`.
#[inline]
pub fn castling_lane_for_king_move(king_from: Square, king_to: Square) -> Option<&'static CastlingLane> {
    CASTLING_LANES
        .iter()
        .find(|lane| lane.king_from == king_from && lane.king_to == king_to)
}

/// Rights lost when any move starts or ends on `square`.
#[inline]
pub const fn castling_rights_revoked_by(square: Square) -> CastlingRights {
    match square {
        0 => CASTLE_LIGHT_QUEENSIDE,
        4 => CASTLE_LIGHT_KINGSIDE | CASTLE_LIGHT_QUEENSIDE,
        7 => CASTLE_LIGHT_KINGSIDE,
        56 => CASTLE_DARK_QUEENSIDE,
        60 => CASTLE_DARK_KINGSIDE | CASTLE_DARK_QUEENSIDE,
        63 => CASTLE_DARK_KINGSIDE,
        _ => 0,
    }
}
