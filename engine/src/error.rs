use std::error::Error;
use std::fmt;

use crate::types::Position;

/// Rejected by `Board::apply`: the position is outside the board or the
/// cell is already occupied. The board is left unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IllegalMove {
    pub position: Position,
}

impl fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "illegal move at {}: out of range or cell occupied",
            self.position
        )
    }
}

impl Error for IllegalMove {}

/// Rejected by `choose_move`: the board is full. The caller must check the
/// outcome before asking for a computer move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoLegalMove;

impl fmt::Display for NoLegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no legal move: board is full")
    }
}

impl Error for NoLegalMove {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayError {
    GameOver,
    NotBotTurn,
    Illegal(IllegalMove),
    NoLegalMove(NoLegalMove),
}

impl fmt::Display for PlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayError::GameOver => write!(f, "game is already over"),
            PlayError::NotBotTurn => write!(f, "it is not the computer's turn"),
            PlayError::Illegal(e) => write!(f, "{}", e),
            PlayError::NoLegalMove(e) => write!(f, "{}", e),
        }
    }
}

impl Error for PlayError {}

impl From<IllegalMove> for PlayError {
    fn from(e: IllegalMove) -> Self {
        PlayError::Illegal(e)
    }
}

impl From<NoLegalMove> for PlayError {
    fn from(e: NoLegalMove) -> Self {
        PlayError::NoLegalMove(e)
    }
}
