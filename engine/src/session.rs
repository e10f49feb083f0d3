use crate::board::Board;
use crate::bot_controller::choose_move;
use crate::error::PlayError;
use crate::session_rng::SessionRng;
use crate::types::{Difficulty, Mark, Outcome, Position, WinningLine};
use crate::win_detector::{check_win_with_line, outcome};

/// The computer always plays O; X is the (first) human and opens the game.
pub const BOT_MARK: Mark = Mark::O;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionMode {
    HumanVsHuman,
    HumanVsBot { difficulty: Difficulty },
}

/// One game: a board, whose turn it is, and how the O side is driven.
/// The outcome is always re-derived from the cells, never stored, so a
/// terminal board stays terminal no matter how it is queried.
pub struct GameSession {
    board: Board,
    current_mark: Mark,
    last_move: Option<Position>,
    mode: SessionMode,
    rng: SessionRng,
}

impl GameSession {
    pub fn new(mode: SessionMode) -> Self {
        Self::with_rng(mode, SessionRng::from_entropy())
    }

    pub fn with_seed(mode: SessionMode, seed: u64) -> Self {
        Self::with_rng(mode, SessionRng::new(seed))
    }

    fn with_rng(mode: SessionMode, rng: SessionRng) -> Self {
        Self {
            board: Board::empty(),
            current_mark: Mark::X,
            last_move: None,
            mode,
            rng,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn outcome(&self) -> Outcome {
        outcome(&self.board)
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.board)
    }

    /// Place the current player's mark. Turn order is handled here: X
    /// first, marks alternating after every successful move.
    pub fn play(&mut self, position: Position) -> Result<(), PlayError> {
        if self.outcome().is_over() {
            return Err(PlayError::GameOver);
        }
        self.board.apply(position, self.current_mark)?;
        self.last_move = Some(position);
        self.current_mark = self.current_mark.opponent();
        Ok(())
    }

    pub fn bot_turn_due(&self) -> bool {
        matches!(self.mode, SessionMode::HumanVsBot { .. })
            && self.current_mark == BOT_MARK
            && !self.outcome().is_over()
    }

    pub fn play_bot_turn(&mut self) -> Result<Position, PlayError> {
        let SessionMode::HumanVsBot { difficulty } = self.mode else {
            return Err(PlayError::NotBotTurn);
        };
        if self.outcome().is_over() {
            return Err(PlayError::GameOver);
        }
        if self.current_mark != BOT_MARK {
            return Err(PlayError::NotBotTurn);
        }

        let position = choose_move(&self.board, BOT_MARK, difficulty, &mut self.rng)?;
        self.play(position)?;
        Ok(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlayError;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn test_x_moves_first_and_marks_alternate() {
        let mut session = GameSession::with_seed(SessionMode::HumanVsHuman, 1);
        assert_eq!(session.current_mark(), Mark::X);

        session.play(pos(0, 0)).unwrap();
        assert_eq!(session.board().get(pos(0, 0)), Some(Mark::X));
        assert_eq!(session.current_mark(), Mark::O);

        session.play(pos(1, 1)).unwrap();
        assert_eq!(session.board().get(pos(1, 1)), Some(Mark::O));
        assert_eq!(session.current_mark(), Mark::X);
    }

    #[test]
    fn test_illegal_move_leaves_session_unchanged() {
        let mut session = GameSession::with_seed(SessionMode::HumanVsHuman, 1);
        session.play(pos(0, 0)).unwrap();

        let err = session.play(pos(0, 0)).unwrap_err();
        assert!(matches!(err, PlayError::Illegal(_)));
        assert_eq!(session.current_mark(), Mark::O);
        assert_eq!(session.last_move(), Some(pos(0, 0)));
    }

    #[test]
    fn test_no_moves_accepted_after_game_over() {
        let mut session = GameSession::with_seed(SessionMode::HumanVsHuman, 1);
        // X takes the top row.
        for position in [pos(0, 0), pos(1, 0), pos(0, 1), pos(1, 1), pos(0, 2)] {
            session.play(position).unwrap();
        }
        assert_eq!(session.outcome(), Outcome::XWins);

        let err = session.play(pos(2, 2)).unwrap_err();
        assert_eq!(err, PlayError::GameOver);
        assert_eq!(session.board().get(pos(2, 2)), None);
    }

    #[test]
    fn test_winning_line_after_win() {
        let mut session = GameSession::with_seed(SessionMode::HumanVsHuman, 1);
        for position in [pos(0, 0), pos(1, 0), pos(0, 1), pos(1, 1), pos(0, 2)] {
            session.play(position).unwrap();
        }
        let line = session.winning_line().unwrap();
        assert_eq!(line.mark, Mark::X);
        assert_eq!(line.cells, [pos(0, 0), pos(0, 1), pos(0, 2)]);
    }

    #[test]
    fn test_bot_turn_follows_human_move() {
        let mode = SessionMode::HumanVsBot {
            difficulty: Difficulty::Hard,
        };
        let mut session = GameSession::with_seed(mode, 1);
        assert!(!session.bot_turn_due());

        session.play(pos(0, 0)).unwrap();
        assert!(session.bot_turn_due());

        let position = session.play_bot_turn().unwrap();
        assert_eq!(session.board().get(position), Some(Mark::O));
        assert_eq!(session.current_mark(), Mark::X);
        assert!(!session.bot_turn_due());
    }

    #[test]
    fn test_bot_turn_rejected_when_not_due() {
        let mode = SessionMode::HumanVsBot {
            difficulty: Difficulty::Easy,
        };
        let mut session = GameSession::with_seed(mode, 1);
        assert_eq!(session.play_bot_turn().unwrap_err(), PlayError::NotBotTurn);

        let mut pvp = GameSession::with_seed(SessionMode::HumanVsHuman, 1);
        pvp.play(pos(0, 0)).unwrap();
        assert_eq!(pvp.play_bot_turn().unwrap_err(), PlayError::NotBotTurn);
    }

    #[test]
    fn test_fixed_seed_makes_easy_games_reproducible() {
        let mode = SessionMode::HumanVsBot {
            difficulty: Difficulty::Easy,
        };
        let play_game = |seed: u64| {
            let mut session = GameSession::with_seed(mode, seed);
            let mut bot_moves = Vec::new();
            for position in [pos(0, 0), pos(0, 1), pos(1, 0)] {
                if session.outcome().is_over() {
                    break;
                }
                session.play(position).ok();
                if session.bot_turn_due() {
                    bot_moves.push(session.play_bot_turn().unwrap());
                }
            }
            bot_moves
        };
        assert_eq!(play_game(99), play_game(99));
    }
}
