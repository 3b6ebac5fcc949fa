//! FEN-to-GameState parser.
//!
//! Builds a fully populated state from a Forsyth-Edwards Notation string and
//! rejects positions that break the board invariants: exactly one king per
//! color, no pawns on the first or last rank, castling rights only where king
//! and rook are still at home, an en-passant square that a double push could
//! have produced, and the side that just moved not left in check.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::CASTLING_LANES;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::utils::algebraic::{algebraic_to_square, square_name};

const BACK_RANKS: u64 = 0xFF00_0000_0000_00FF;

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side to move"))?;
    let castling_part = parts.next().ok_or_else(|| invalid("missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| invalid("missing en-passant square"))?;
    // Clocks are optional; many hand-written positions omit them.
    let halfmove_part = parts.next().unwrap_or("0");
    let fullmove_part = parts.next().unwrap_or("1");

    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let mut game_state = GameState::new_empty();

    parse_board(board_part, &mut game_state)?;
    game_state.side_to_move = parse_side_to_move(side_part)?;
    game_state.castling_rights = parse_castling_rights(castling_part)?;
    game_state.en_passant_square = parse_en_passant_square(en_passant_part)?;
    game_state.halfmove_clock = halfmove_part
        .parse::<u16>()
        .map_err(|_| invalid(&format!("bad halfmove clock: {halfmove_part}")))?;
    game_state.fullmove_number = fullmove_part
        .parse::<u16>()
        .map_err(|_| invalid(&format!("bad fullmove number: {fullmove_part}")))?;

    game_state.recalc_occupancy();
    validate(&game_state)?;

    Ok(game_state)
}

fn invalid(msg: &str) -> ChessError {
    ChessError::InvalidFen(msg.to_owned())
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> ChessResult<()> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = (7 - fen_rank_idx) as u8;
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(&format!("bad empty-square count '{ch}'")));
                }
                file += empty_count as u8;
                if file > 8 {
                    return Err(invalid(&format!("rank '{rank_str}' has too many files")));
                }
                continue;
            }

            let kind = PieceKind::from_char(ch)
                .ok_or_else(|| invalid(&format!("bad piece character '{ch}'")))?;
            let color = if ch.is_ascii_uppercase() {
                Color::Light
            } else {
                Color::Dark
            };

            if file >= 8 {
                return Err(invalid(&format!("rank '{rank_str}' has too many files")));
            }

            let square = make_square(file, board_rank);
            game_state.pieces[color.index()][kind.index()] |= square_mask(square);
            file += 1;
        }

        if file != 8 {
            return Err(invalid(&format!("rank '{rank_str}' does not sum to 8 files")));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(invalid(&format!("bad side to move: {side_part}"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    if castling_part == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;
    for ch in castling_part.chars() {
        rights |= match ch {
            'K' => CASTLE_LIGHT_KINGSIDE,
            'Q' => CASTLE_LIGHT_QUEENSIDE,
            'k' => CASTLE_DARK_KINGSIDE,
            'q' => CASTLE_DARK_QUEENSIDE,
            _ => return Err(invalid(&format!("bad castling character '{ch}'"))),
        };
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> ChessResult<Option<Square>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let square = algebraic_to_square(en_passant_part)
        .map_err(|_| invalid(&format!("bad en-passant square: {en_passant_part}")))?;
    Ok(Some(square))
}

/// Every right needs its king and rook still on their home squares.
fn validate_castling_rights(game_state: &GameState) -> ChessResult<()> {
    for lane in CASTLING_LANES {
        if game_state.castling_rights & lane.right == 0 {
            continue;
        }
        let color = if lane.king_from < 8 { Color::Light } else { Color::Dark };
        let king_home = game_state.pieces_of(color, PieceKind::King) & square_mask(lane.king_from) != 0;
        let rook_home = game_state.pieces_of(color, PieceKind::Rook) & square_mask(lane.rook_from) != 0;
        if !(king_home && rook_home) {
            return Err(invalid(&format!(
                "castling right {:?} without {color:?} king and rook at home",
                castling_char(lane.right)
            )));
        }
    }
    Ok(())
}

fn castling_char(right: CastlingRights) -> char {
    match right {
        CASTLE_LIGHT_KINGSIDE => 'K',
        CASTLE_LIGHT_QUEENSIDE => 'Q',
        CASTLE_DARK_KINGSIDE => 'k',
        _ => 'q',
    }
}

/// The target must sit behind a pawn that just double-pushed: on rank 6 with
/// light to move (rank 3 with dark), empty, with the enemy pawn one step
/// past it and the pawn's start square vacated.
fn validate_en_passant(game_state: &GameState) -> ChessResult<()> {
    let Some(target) = game_state.en_passant_square else {
        return Ok(());
    };
    let mover = game_state.side_to_move;
    let pusher = mover.opposite();
    let name = square_name(target);

    let expected_rank = match mover {
        Color::Light => 5,
        Color::Dark => 2,
    };
    if square_rank(target) != expected_rank {
        return Err(invalid(&format!(
            "en-passant square {name} must be on rank {} with {mover:?} to move",
            expected_rank + 1
        )));
    }
    let (pawn_square, origin) = match mover {
        Color::Light => (target - 8, target + 8),
        Color::Dark => (target + 8, target - 8),
    };
    if game_state.occupancy_all & (square_mask(target) | square_mask(origin)) != 0 {
        return Err(invalid(&format!("en-passant square {name} has no vacated double-push path")));
    }
    if game_state.pieces_of(pusher, PieceKind::Pawn) & square_mask(pawn_square) == 0 {
        return Err(invalid(&format!("en-passant square {name} has no {pusher:?} pawn to capture")));
    }
    Ok(())
}

fn validate(game_state: &GameState) -> ChessResult<()> {
    for color in Color::ALL {
        let kings = game_state.pieces_of(color, PieceKind::King).count_ones();
        if kings != 1 {
            return Err(invalid(&format!("{color:?} must have exactly one king, found {kings}")));
        }
        if game_state.pieces_of(color, PieceKind::Pawn) & BACK_RANKS != 0 {
            return Err(invalid("pawns cannot stand on the first or last rank"));
        }
    }

    validate_castling_rights(game_state)?;
    validate_en_passant(game_state)?;

    if is_king_in_check(game_state, game_state.side_to_move.opposite()) {
        return Err(invalid("side not to move is in check"));
    }

    Ok(())
}
