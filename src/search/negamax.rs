//! Fixed-depth negamax search with alpha-beta pruning.
//!
//! The search owns no board: it borrows one `GameState` mutably and walks the
//! tree with apply/undo, so the caller gets the position back unchanged.
//! Move ordering is a plain two-bucket split (captures first), and horizon
//! or terminal nodes are scored by a `BoardScorer`.

use log::{debug, trace};

use crate::errors::{ChessError, ChessResult};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{make_move, undo_move};
use crate::moves::move_descriptions::ChessMove;
use crate::search::board_scoring::{BoardScorer, MaterialMobilityScorer};

/// Stand-in for infinity in the alpha-beta window. Far above any reachable
/// evaluation and safe to negate.
pub const INFINITY_SCORE: i32 = 1_000_000_000;

/// Depth used when nothing else is configured.
pub const DEFAULT_SEARCH_DEPTH: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub depth: u8,
}

impl SearchConfig {
    /// Reject depth 0, which has no root move to choose.
    pub fn new(depth: u8) -> ChessResult<Self> {
        if depth == 0 {
            return Err(ChessError::InvalidDepth(depth));
        }
        Ok(Self { depth })
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_SEARCH_DEPTH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: ChessMove,
    pub best_score: i32,
    pub depth: u8,
    pub nodes: u64,
}

/// Either a chosen move or the explicit signal that the root is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    BestMove(SearchResult),
    NoMoveAvailable,
}

impl SearchOutcome {
    #[inline]
    pub fn best_move(&self) -> Option<ChessMove> {
        match self {
            SearchOutcome::BestMove(result) => Some(result.best_move),
            SearchOutcome::NoMoveAvailable => None,
        }
    }
}

/// Legal moves with captures first; generation order is kept inside each
/// bucket.
pub fn order_moves(game_state: &mut GameState) -> Vec<ChessMove> {
    let (mut captures, quiet): (Vec<_>, Vec<_>) = game_state
        .legal_moves()
        .into_iter()
        .partition(ChessMove::is_capture);
    captures.extend(quiet);
    captures
}

/// Negamax value of `game_state` searched `depth` plies deep inside the
/// `(alpha, beta)` window.
///
/// Moves come straight from `order_moves`, so they are applied unchecked.
pub fn negamax<S: BoardScorer>(
    game_state: &mut GameState,
    scorer: &S,
    depth: u8,
    mut alpha: i32,
    beta: i32,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;

    if depth == 0 {
        return scorer.score(game_state);
    }

    let moves = order_moves(game_state);
    if moves.is_empty() {
        return scorer.score(game_state);
    }

    let mut best = -INFINITY_SCORE;
    for mv in moves {
        make_move(game_state, mv);
        let score = -negamax(game_state, scorer, depth - 1, -beta, -alpha, nodes);
        undo_move(game_state);

        if score > best {
            best = score;
        }
        if best > alpha {
            alpha = best;
        }
        if alpha >= beta {
            break;
        }
    }

    best
}

/// Pick the best move for the side to move at `config.depth`.
///
/// Ties keep the earliest move in `order_moves` order.
pub fn search_best_move<S: BoardScorer>(
    game_state: &mut GameState,
    scorer: &S,
    config: SearchConfig,
) -> ChessResult<SearchOutcome> {
    if config.depth == 0 {
        return Err(ChessError::InvalidDepth(config.depth));
    }

    let moves = order_moves(game_state);
    let mut nodes = 1u64;
    let mut alpha = -INFINITY_SCORE;
    let mut best: Option<(ChessMove, i32)> = None;

    for mv in moves {
        make_move(game_state, mv);
        let score = -negamax(
            game_state,
            scorer,
            config.depth - 1,
            -INFINITY_SCORE,
            -alpha,
            &mut nodes,
        );
        undo_move(game_state);
        trace!("root move {mv} scored {score}");

        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((mv, score));
        }
        alpha = alpha.max(score);
    }

    let Some((best_move, best_score)) = best else {
        debug!("no legal move at root: {}", game_state.get_fen());
        return Ok(SearchOutcome::NoMoveAvailable);
    };

    debug!(
        "depth {} searched {nodes} nodes, best {best_move} score {best_score}",
        config.depth
    );
    Ok(SearchOutcome::BestMove(SearchResult {
        best_move,
        best_score,
        depth: config.depth,
        nodes,
    }))
}

/// `search_best_move` with the default material-and-mobility scorer.
pub fn best_move(game_state: &mut GameState, depth: u8) -> ChessResult<SearchOutcome> {
    search_best_move(game_state, &MaterialMobilityScorer, SearchConfig::new(depth)?)
}
