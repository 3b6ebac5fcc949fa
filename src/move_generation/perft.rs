//! Perft node counting over the in-place apply/undo contract.
//!
//! Used as the move generator's correctness oracle: node counts for the
//! standard reference positions are well known, and any rules bug shows up
//! as a mismatch.

use crate::errors::ChessResult;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::generate_legal_moves;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Count leaf nodes (and leaf move categories) `depth` plies below `game_state`.
/// The state is restored before returning.
pub fn perft(game_state: &mut GameState, depth: u8) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for mv in generate_legal_moves(game_state) {
        apply_move(game_state, mv)?;

        if depth == 1 {
            let mut leaf = PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            };
            leaf.captures += usize::from(mv.is_capture());
            leaf.en_passant += usize::from(mv.is_en_passant());
            leaf.castles += usize::from(mv.is_castling());
            leaf.promotions += usize::from(mv.is_promotion());
            if game_state.is_check(game_state.side_to_move) {
                leaf.checks += 1;
                leaf.checkmates += usize::from(!game_state.has_legal_moves());
            }
            total.merge(leaf);
        } else {
            total.merge(perft(game_state, depth - 1)?);
        }

        game_state.undo();
    }

    Ok(total)
}

/// Per-root-move node counts, the usual tool for bisecting a perft mismatch.
pub fn perft_divide(game_state: &mut GameState, depth: u8) -> ChessResult<Vec<(String, usize)>> {
    let mut out = Vec::new();
    if depth == 0 {
        return Ok(out);
    }

    for mv in generate_legal_moves(game_state) {
        apply_move(game_state, mv)?;
        let nodes = perft(game_state, depth - 1)?.nodes;
        game_state.undo();
        out.push((mv.to_string(), nodes));
    }

    Ok(out)
}
