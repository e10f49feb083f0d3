use crate::board::Board;
use crate::types::{Mark, Outcome, Position, WinningLine};

// 3 rows, 3 columns, 2 diagonals. Scan order matches the original rules:
// rows first, then columns, then diagonals.
const LINES: [[Position; 3]; 8] = [
    [Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)],
    [Position::new(1, 0), Position::new(1, 1), Position::new(1, 2)],
    [Position::new(2, 0), Position::new(2, 1), Position::new(2, 2)],
    [Position::new(0, 0), Position::new(1, 0), Position::new(2, 0)],
    [Position::new(0, 1), Position::new(1, 1), Position::new(2, 1)],
    [Position::new(0, 2), Position::new(1, 2), Position::new(2, 2)],
    [Position::new(0, 0), Position::new(1, 1), Position::new(2, 2)],
    [Position::new(0, 2), Position::new(1, 1), Position::new(2, 0)],
];

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    for line in LINES {
        let Some(mark) = board.get(line[0]) else {
            continue;
        };
        if board.get(line[1]) == Some(mark) && board.get(line[2]) == Some(mark) {
            return Some(WinningLine::new(mark, line));
        }
    }
    None
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

pub fn outcome(board: &Board) -> Outcome {
    if let Some(winner) = check_win(board) {
        return Outcome::win_for(winner);
    }
    if board.is_full() {
        return Outcome::Draw;
    }
    Outcome::Ongoing
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: Option<Mark> = Some(Mark::X);
    const O: Option<Mark> = Some(Mark::O);
    const E: Option<Mark> = None;

    #[test]
    fn test_empty_board_is_ongoing() {
        assert_eq!(outcome(&Board::empty()), Outcome::Ongoing);
    }

    #[test]
    fn test_row_win() {
        let board = Board::from_rows([[X, X, X], [O, O, E], [E, E, E]]);
        assert_eq!(outcome(&board), Outcome::XWins);
    }

    #[test]
    fn test_column_win() {
        let board = Board::from_rows([[X, O, E], [X, O, E], [E, O, X]]);
        assert_eq!(outcome(&board), Outcome::OWins);
    }

    #[test]
    fn test_main_diagonal_win() {
        let board = Board::from_rows([[X, O, E], [O, X, E], [E, E, X]]);
        assert_eq!(outcome(&board), Outcome::XWins);
    }

    #[test]
    fn test_anti_diagonal_win() {
        let board = Board::from_rows([[X, X, O], [X, O, E], [O, E, E]]);
        assert_eq!(outcome(&board), Outcome::OWins);
    }

    #[test]
    fn test_full_board_without_winner_is_draw() {
        let board = Board::from_rows([[X, O, X], [X, O, O], [O, X, X]]);
        assert_eq!(outcome(&board), Outcome::Draw);
        assert!(board.legal_moves().is_empty());
    }

    #[test]
    fn test_partial_board_is_ongoing() {
        let board = Board::from_rows([[X, O, E], [E, X, E], [E, E, E]]);
        assert_eq!(outcome(&board), Outcome::Ongoing);
    }

    #[test]
    fn test_winning_line_reports_cells() {
        let board = Board::from_rows([[X, O, O], [X, O, E], [X, E, E]]);
        let line = check_win_with_line(&board).unwrap();
        assert_eq!(line.mark, Mark::X);
        assert_eq!(
            line.cells,
            [
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(2, 0)
            ]
        );
    }

    #[test]
    fn test_top_row_sequence_ends_in_x_win() {
        // X (0,0), O (1,1), X (0,1), O (2,2), X (0,2)
        let mut board = Board::empty();
        board.apply(Position::new(0, 0), Mark::X).unwrap();
        board.apply(Position::new(1, 1), Mark::O).unwrap();
        board.apply(Position::new(0, 1), Mark::X).unwrap();
        assert_eq!(outcome(&board), Outcome::Ongoing);
        board.apply(Position::new(2, 2), Mark::O).unwrap();
        board.apply(Position::new(0, 2), Mark::X).unwrap();
        assert_eq!(outcome(&board), Outcome::XWins);
    }

    #[test]
    fn test_full_board_sequence_ends_in_draw() {
        // X: (0,0),(0,1),(1,2),(2,0),(2,2); O: (0,2),(1,0),(1,1),(2,1)
        let mut board = Board::empty();
        let x_moves = [(0, 0), (0, 1), (1, 2), (2, 0), (2, 2)];
        let o_moves = [(0, 2), (1, 0), (1, 1), (2, 1)];
        for i in 0..4 {
            board
                .apply(Position::new(x_moves[i].0, x_moves[i].1), Mark::X)
                .unwrap();
            board
                .apply(Position::new(o_moves[i].0, o_moves[i].1), Mark::O)
                .unwrap();
        }
        board
            .apply(Position::new(x_moves[4].0, x_moves[4].1), Mark::X)
            .unwrap();

        assert_eq!(outcome(&board), Outcome::Draw);
        assert!(board.legal_moves().is_empty());
    }
}
