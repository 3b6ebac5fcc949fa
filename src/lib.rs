//! Crate root module declarations for the Sapling Chess engine.
//!
//! Exposes the rules core (game state, move generation), the fixed-depth
//! search, the engines built on it, and text helpers (FEN, long algebraic,
//! game records, rendering) so the binary, tests, and benches share one set
//! of module paths.

pub mod errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod undo_state;
}

pub mod moves {
    pub mod leaper_attacks;
    pub mod move_descriptions;
    pub mod slider_attacks;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_king;
    pub mod legal_moves_pawn;
    pub mod legal_moves_pieces;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod negamax;
}

pub mod engines {
    pub mod engine_negamax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod game_record;
    pub mod logging;
    pub mod long_algebraic;
    pub mod render_game_state;
    pub mod self_play;
}
