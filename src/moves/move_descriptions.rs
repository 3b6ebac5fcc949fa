//! Move value type.
//!
//! A move is a `(from, to, promotion)` triple. The moving piece and the flags
//! below are filled in by the generator from the position the move was
//! generated in, so two moves for the same position compare equal exactly
//! when they describe the same action.

use std::fmt;

use crate::game_state::chess_types::{PieceKind, Square};
use crate::utils::algebraic::square_name;

pub type MoveFlags = u8;

pub const FLAG_CAPTURE: MoveFlags = 1 << 0;
pub const FLAG_DOUBLE_PAWN_PUSH: MoveFlags = 1 << 1;
pub const FLAG_EN_PASSANT: MoveFlags = 1 << 2;
pub const FLAG_CASTLING: MoveFlags = 1 << 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessMove {
    pub from: Square,
    pub to: Square,
    pub piece: PieceKind,
    pub promotion: Option<PieceKind>,
    pub flags: MoveFlags,
}

impl ChessMove {
    #[inline]
    pub const fn new(from: Square, to: Square, piece: PieceKind) -> Self {
        Self {
            from,
            to,
            piece,
            promotion: None,
            flags: 0,
        }
    }

    #[inline]
    pub const fn with_flags(mut self, flags: MoveFlags) -> Self {
        self.flags |= flags;
        self
    }

    #[inline]
    pub const fn with_promotion(mut self, promotion: PieceKind) -> Self {
        self.promotion = Some(promotion);
        self
    }

    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.flags & FLAG_CAPTURE != 0
    }

    #[inline]
    pub const fn is_en_passant(&self) -> bool {
        self.flags & FLAG_EN_PASSANT != 0
    }

    #[inline]
    pub const fn is_castling(&self) -> bool {
        self.flags & FLAG_CASTLING != 0
    }

    #[inline]
    pub const fn is_double_pawn_push(&self) -> bool {
        self.flags & FLAG_DOUBLE_PAWN_PUSH != 0
    }

    #[inline]
    pub const fn is_promotion(&self) -> bool {
        self.promotion.is_some()
    }

    /// `(from, to, promotion)` match, ignoring derived metadata.
    #[inline]
    pub fn matches(&self, from: Square, to: Square, promotion: Option<PieceKind>) -> bool {
        self.from == from && self.to == to && self.promotion == promotion
    }
}

/// Long algebraic form, e.g. `e2e4` or `e7e8q`.
impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", square_name(self.from), square_name(self.to))?;
        if let Some(promotion) = self.promotion {
            write!(f, "{}", promotion.to_char())?;
        }
        Ok(())
    }
}
