//! Save and restore games as a small text record.
//!
//! The format is a header block followed by numbered long algebraic moves:
//!
//! ```text
//! [Date "2024.05.01"]
//! [FEN "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"]
//!
//! 1. e2e4 e7e5 2. g1f3
//! ```
//!
//! Restoring validates every move against the legal move list, so a record
//! that replays successfully always describes a reachable game.

use std::collections::BTreeMap;

use chrono::{Local, NaiveDate};
use log::warn;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::{chess_types::Color, game_state::GameState};
use crate::utils::long_algebraic::long_algebraic_to_move;

const DATE_FORMAT: &str = "%Y.%m.%d";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub date: NaiveDate,
    pub initial_fen: String,
    /// Long algebraic moves, oldest first.
    pub moves: Vec<String>,
}

impl GameRecord {
    /// Record of a game from the standard starting position with no moves.
    pub fn new() -> Self {
        Self {
            date: Local::now().date_naive(),
            initial_fen: STARTING_POSITION_FEN.to_owned(),
            moves: Vec::new(),
        }
    }

    /// Capture every move applied to `game_state`, along with the position
    /// they were played from. Dated today.
    pub fn from_game(game_state: &GameState) -> Self {
        let moves = game_state.move_history().map(|mv| mv.to_string()).collect();

        let mut initial = game_state.clone();
        while initial.undo().is_some() {}

        Self {
            date: Local::now().date_naive(),
            initial_fen: initial.get_fen(),
            moves,
        }
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("[Date \"{}\"]\n", self.date.format(DATE_FORMAT)));
        out.push_str(&format!("[FEN \"{}\"]\n", self.initial_fen));
        out.push('\n');

        // Numbering follows the recorded position's own move counters.
        let (mut fullmove, mut side) = GameState::from_fen(&self.initial_fen)
            .map(|state| (state.fullmove_number, state.side_to_move))
            .unwrap_or((1, Color::Light));

        let mut parts = Vec::with_capacity(self.moves.len() + self.moves.len() / 2 + 1);
        for (idx, mv) in self.moves.iter().enumerate() {
            match side {
                Color::Light => parts.push(format!("{fullmove}.")),
                Color::Dark if idx == 0 => parts.push(format!("{fullmove}...")),
                Color::Dark => {}
            }
            parts.push(mv.clone());
            if side == Color::Dark {
                fullmove += 1;
            }
            side = side.opposite();
        }

        out.push_str(&parts.join(" "));
        out.push('\n');
        out
    }

    /// Parse record text. Only the structure is checked here; `replay`
    /// validates the moves themselves.
    pub fn parse(text: &str) -> ChessResult<Self> {
        let mut headers = BTreeMap::<String, String>::new();
        let mut moves = Vec::new();

        for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
            if line.starts_with('[') {
                let (key, value) = parse_header_line(line)?;
                headers.insert(key, value);
                continue;
            }

            for token in line.split_whitespace() {
                if is_move_number_token(token) {
                    continue;
                }
                moves.push(token.to_owned());
            }
        }

        let date = match headers.get("Date") {
            Some(value) => NaiveDate::parse_from_str(value, DATE_FORMAT)
                .map_err(|_| ChessError::InvalidRecord(format!("bad date: {value}")))?,
            None => {
                warn!("game record has no Date header; using today");
                Local::now().date_naive()
            }
        };
        let initial_fen = headers
            .remove("FEN")
            .unwrap_or_else(|| STARTING_POSITION_FEN.to_owned());

        Ok(Self {
            date,
            initial_fen,
            moves,
        })
    }

    /// Rebuild the game by applying each recorded move to the initial
    /// position. Any move that is not legal where it was played rejects the
    /// whole record.
    pub fn replay(&self) -> ChessResult<GameState> {
        let mut game_state = GameState::from_fen(&self.initial_fen)
            .map_err(|err| ChessError::InvalidRecord(format!("bad initial position: {err}")))?;

        for (ply, text) in self.moves.iter().enumerate() {
            let mv = long_algebraic_to_move(text, &mut game_state).map_err(|err| {
                ChessError::InvalidRecord(format!("move {} ({text}): {err}", ply + 1))
            })?;
            game_state.try_apply(mv)?;
        }

        Ok(game_state)
    }
}

impl Default for GameRecord {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_header_line(line: &str) -> ChessResult<(String, String)> {
    let inner = line
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| ChessError::InvalidRecord(format!("bad header line: {line}")))?;

    let (key, raw_value) = inner
        .split_once(' ')
        .ok_or_else(|| ChessError::InvalidRecord(format!("header without value: {line}")))?;
    let value = raw_value
        .trim()
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or_else(|| ChessError::InvalidRecord(format!("unquoted header value: {line}")))?;

    Ok((key.trim().to_owned(), value.to_owned()))
}

fn is_move_number_token(token: &str) -> bool {
    let digits = token.trim_end_matches('.');
    digits.len() < token.len() && !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::long_algebraic::long_algebraic_to_move;

    fn play(game: &mut GameState, moves: &[&str]) {
        for text in moves {
            let mv = long_algebraic_to_move(text, game).expect("move should be legal");
            game.apply(mv).expect("move should apply");
        }
    }

    #[test]
    fn save_and_restore_from_start() {
        let mut game = GameState::new_game();
        play(&mut game, &["e2e4", "e7e5", "g1f3", "b8c6"]);

        let record = GameRecord::from_game(&game);
        assert_eq!(record.initial_fen, STARTING_POSITION_FEN);
        assert_eq!(record.moves, ["e2e4", "e7e5", "g1f3", "b8c6"]);

        let text = record.to_text();
        assert!(text.contains("1. e2e4 e7e5 2. g1f3 b8c6"));

        let parsed = GameRecord::parse(&text).expect("record should parse");
        assert_eq!(parsed, record);
        let restored = parsed.replay().expect("record should replay");
        assert_eq!(restored.get_fen(), game.get_fen());
        assert_eq!(restored.move_history().count(), 4);
    }

    #[test]
    fn dark_to_move_start_is_numbered_with_ellipsis() {
        let mut game = GameState::from_fen("4k3/4p3/8/8/8/8/4P3/4K3 b - - 0 7").expect("FEN should parse");
        play(&mut game, &["e7e5", "e2e4"]);

        let record = GameRecord::from_game(&game);
        assert_eq!(record.initial_fen, "4k3/4p3/8/8/8/8/4P3/4K3 b - - 0 7");
        assert!(record.to_text().contains("7... e7e5 8. e2e4"));

        let restored = GameRecord::parse(&record.to_text())
            .and_then(|parsed| parsed.replay())
            .expect("record should round trip");
        assert_eq!(restored.get_fen(), game.get_fen());
    }

    #[test]
    fn date_header_is_kept() {
        let text = "[Date \"2021.03.14\"]\n\n1. d2d4\n";
        let record = GameRecord::parse(text).expect("record should parse");
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2021, 3, 14).expect("valid date"));
        assert_eq!(record.initial_fen, STARTING_POSITION_FEN);
        assert!(record.to_text().starts_with("[Date \"2021.03.14\"]"));
    }

    #[test]
    fn rejects_illegal_and_malformed_records() {
        let illegal = GameRecord::parse("1. e2e5\n").expect("structure is fine");
        assert!(matches!(illegal.replay(), Err(ChessError::InvalidRecord(_))));

        assert!(matches!(
            GameRecord::parse("[Date 2021.03.14]\n"),
            Err(ChessError::InvalidRecord(_))
        ));
        assert!(matches!(
            GameRecord::parse("[Date \"March\"]\n"),
            Err(ChessError::InvalidRecord(_))
        ));

        let bad_fen = GameRecord::parse("[FEN \"8/8/8 w - - 0 1\"]\n").expect("structure is fine");
        assert!(matches!(bad_fen.replay(), Err(ChessError::InvalidRecord(_))));
    }
}
