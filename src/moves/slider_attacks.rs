//! Occupancy-aware attacks for bishops, rooks, and queens.
//!
//! Each ray is walked from the origin until it leaves the board or hits an
//! occupied square; the blocking square is included so captures fall out of
//! masking with enemy occupancy.

use crate::game_state::chess_types::Square;

const ROOK_DIRECTIONS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
const BISHOP_DIRECTIONS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

#[inline]
pub fn rook_attacks(square: Square, occupancy: u64) -> u64 {
    ray_attacks(square, occupancy, &ROOK_DIRECTIONS)
}

#[inline]
pub fn bishop_attacks(square: Square, occupancy: u64) -> u64 {
    ray_attacks(square, occupancy, &BISHOP_DIRECTIONS)
}

#[inline]
pub fn queen_attacks(square: Square, occupancy: u64) -> u64 {
    rook_attacks(square, occupancy) | bishop_attacks(square, occupancy)
}

fn ray_attacks(square: Square, occupancy: u64, directions: &[(i32, i32)]) -> u64 {
    let origin_file = i32::from(square % 8);
    let origin_rank = i32::from(square / 8);
    let mut attacks = 0u64;

    for &(file_step, rank_step) in directions {
        let mut file = origin_file + file_step;
        let mut rank = origin_rank + rank_step;

        while (0..8).contains(&file) && (0..8).contains(&rank) {
            let bit = 1u64 << (rank * 8 + file);
            attacks |= bit;
            if occupancy & bit != 0 {
                break;
            }
            file += file_step;
            rank += rank_step;
        }
    }

    attacks
}
