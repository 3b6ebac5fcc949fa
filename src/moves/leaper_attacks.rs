//! Precomputed attack tables for pieces with fixed jump patterns.
//!
//! Knight, king, and pawn attacks do not depend on occupancy, so each is a
//! 64-entry table built at compile time from a list of `(file, rank)` offsets.

use crate::game_state::chess_types::{Color, Square};

const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

const KING_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

const LIGHT_PAWN_OFFSETS: [(i32, i32); 2] = [(-1, 1), (1, 1)];
const DARK_PAWN_OFFSETS: [(i32, i32); 2] = [(-1, -1), (1, -1)];

pub const KNIGHT_ATTACKS: [u64; 64] = leaper_table(&KNIGHT_OFFSETS);
pub const KING_ATTACKS: [u64; 64] = leaper_table(&KING_OFFSETS);
/// Indexed by `[color][square]`.
pub const PAWN_ATTACKS: [[u64; 64]; 2] = [
    leaper_table(&LIGHT_PAWN_OFFSETS),
    leaper_table(&DARK_PAWN_OFFSETS),
];

#[inline]
pub const fn knight_attacks(square: Square) -> u64 {
    KNIGHT_ATTACKS[square as usize]
}

#[inline]
pub const fn king_attacks(square: Square) -> u64 {
    KING_ATTACKS[square as usize]
}

/// Squares a pawn of `color` standing on `square` attacks.
#[inline]
pub const fn pawn_attacks(color: Color, square: Square) -> u64 {
    PAWN_ATTACKS[color.index()][square as usize]
}

const fn leaper_table(offsets: &[(i32, i32)]) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let rank = (sq / 8) as i32;
        let mut i = 0usize;

        while i < offsets.len() {
            let target_file = file + offsets[i].0;
            let target_rank = rank + offsets[i].1;
            if target_file >= 0 && target_file < 8 && target_rank >= 0 && target_rank < 8 {
                table[sq] |= 1u64 << (target_rank * 8 + target_file);
            }
            i += 1;
        }

        sq += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knight_in_center_and_corner() {
        assert_eq!(knight_attacks(27).count_ones(), 8); // d4
        assert_eq!(knight_attacks(0), (1u64 << 10) | (1u64 << 17)); // a1 -> c2, b3
    }

    #[test]
    fn king_on_edge_squares() {
        assert_eq!(king_attacks(0).count_ones(), 3);
        assert_eq!(king_attacks(4).count_ones(), 5);
        assert_eq!(king_attacks(36).count_ones(), 8);
    }

    #[test]
    fn pawn_attacks_point_forward_for_each_color() {
        // e2 light pawn hits d3/f3, e7 dark pawn hits d6/f6.
        assert_eq!(pawn_attacks(Color::Light, 12), (1u64 << 19) | (1u64 << 21));
        assert_eq!(pawn_attacks(Color::Dark, 52), (1u64 << 43) | (1u64 << 45));
        // a-file pawns only attack one side, last rank pawns attack nothing.
        assert_eq!(pawn_attacks(Color::Light, 8), 1u64 << 17);
        assert_eq!(pawn_attacks(Color::Light, 60), 0);
    }
}
