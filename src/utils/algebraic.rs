//! Square conversions between algebraic coordinates (e.g. `e4`) and indices.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{make_square, square_file, square_rank, Square};

/// Convert algebraic notation (for example: "e4") to a square index.
#[inline]
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let &[file, rank] = square.as_bytes() else {
        return Err(ChessError::InvalidAlgebraic(format!("bad square: {square}")));
    };

    if !(b'a'..=b'h').contains(&file) {
        return Err(ChessError::InvalidAlgebraic(format!(
            "bad file '{}' in {square}",
            file as char
        )));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidAlgebraic(format!(
            "bad rank '{}' in {square}",
            rank as char
        )));
    }

    Ok(make_square(file - b'a', rank - b'1'))
}

/// Convert a square index (`0..=63`) to algebraic notation, rejecting
/// out-of-range indices.
#[inline]
pub fn square_to_algebraic(square: Square) -> ChessResult<String> {
    if square > 63 {
        return Err(ChessError::InvalidAlgebraic(format!(
            "square index out of bounds: {square}"
        )));
    }
    Ok(square_name(square))
}

/// Algebraic name of an on-board square.
#[inline]
pub fn square_name(square: Square) -> String {
    let file_char = char::from(b'a' + square_file(square));
    let rank_char = char::from(b'1' + square_rank(square));
    format!("{file_char}{rank_char}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_and_center_squares() {
        assert_eq!(algebraic_to_square("a1"), Ok(0));
        assert_eq!(algebraic_to_square("h8"), Ok(63));
        assert_eq!(algebraic_to_square("e4"), Ok(28));
        assert_eq!(square_to_algebraic(0).as_deref(), Ok("a1"));
        assert_eq!(square_name(60), "e8");
    }

    #[test]
    fn rejects_malformed_text() {
        for bad in ["", "e", "e44", "i1", "a9", "E4"] {
            assert!(algebraic_to_square(bad).is_err(), "{bad} should be rejected");
        }
        assert!(square_to_algebraic(64).is_err());
    }
}
