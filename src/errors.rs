//! Errors used throughout the crate.
//!
//! `ChessError` is the single error type returned by rules, parsing, search,
//! and engine code. Every variant is raised before any board mutation happens,
//! so a failed call leaves the `GameState` untouched.
//!
//! Usage guidelines:
//! - `IllegalMove` and `InvalidDepth` indicate caller bugs (a move that was
//!   never checked against `legal_moves()`, a zero search depth).
//! - `InvalidFen`, `InvalidAlgebraic`, `InvalidRecord`, and `InvalidOption`
//!   come from external text and are suitable for showing to end users.
//! - A position with no legal moves is not an error; search reports it as
//!   `SearchOutcome::NoMoveAvailable`.

use std::error::Error;
use std::fmt;

pub type ChessResult<T> = Result<T, ChessError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// A move that is not a member of `legal_moves()` was applied.
    IllegalMove(String),
    /// Search depth must be at least one.
    InvalidDepth(u8),
    /// Malformed or inconsistent FEN text.
    InvalidFen(String),
    /// Malformed square or long algebraic move text.
    InvalidAlgebraic(String),
    /// Malformed saved game record.
    InvalidRecord(String),
    /// Unknown engine option name or unusable value.
    InvalidOption(String),
    /// `undo` was requested with an empty move history.
    NothingToUndo,
}

impl fmt::Display for ChessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessError::IllegalMove(msg) => write!(f, "illegal move: {msg}"),
            ChessError::InvalidDepth(depth) => {
                write!(f, "invalid search depth {depth}: depth must be at least 1")
            }
            ChessError::InvalidFen(msg) => write!(f, "invalid FEN: {msg}"),
            ChessError::InvalidAlgebraic(msg) => write!(f, "invalid algebraic notation: {msg}"),
            ChessError::InvalidRecord(msg) => write!(f, "invalid game record: {msg}"),
            ChessError::InvalidOption(msg) => write!(f, "invalid engine option: {msg}"),
            ChessError::NothingToUndo => write!(f, "no move to undo"),
        }
    }
}

impl Error for ChessError {}
