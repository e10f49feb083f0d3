mod board;
mod bot_controller;
mod error;
pub mod logger;
mod session;
mod session_rng;
mod types;
mod win_detector;

pub use board::{BOARD_SIZE, Board};
pub use bot_controller::choose_move;
pub use error::{IllegalMove, NoLegalMove, PlayError};
pub use session::{BOT_MARK, GameSession, SessionMode};
pub use session_rng::SessionRng;
pub use types::{Difficulty, Mark, Outcome, Position, WinningLine};
pub use win_detector::{check_win, check_win_with_line, outcome};
