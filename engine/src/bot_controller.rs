use crate::board::Board;
use crate::error::NoLegalMove;
use crate::session_rng::SessionRng;
use crate::types::{Difficulty, Mark, Outcome, Position};
use crate::win_detector::{check_win, outcome};

const CENTER: Position = Position::new(1, 1);

pub fn choose_move(
    board: &Board,
    mark: Mark,
    difficulty: Difficulty,
    rng: &mut SessionRng,
) -> Result<Position, NoLegalMove> {
    match difficulty {
        Difficulty::Easy => random_move(board, rng),
        Difficulty::Medium => medium_move(board, mark, rng),
        Difficulty::Hard => minimax_move(board, mark),
    }
}

fn random_move(board: &Board, rng: &mut SessionRng) -> Result<Position, NoLegalMove> {
    let moves = board.legal_moves();
    rng.pick(&moves).copied().ok_or(NoLegalMove)
}

// Fixed priority: win, block, center, random. Blocks only an immediate
// opponent win; deeper threats (forks) are out of this tier's lookahead.
fn medium_move(board: &Board, mark: Mark, rng: &mut SessionRng) -> Result<Position, NoLegalMove> {
    if board.legal_moves().is_empty() {
        return Err(NoLegalMove);
    }

    if let Some(position) = find_winning_move(board, mark) {
        return Ok(position);
    }

    if let Some(position) = find_winning_move(board, mark.opponent()) {
        return Ok(position);
    }

    if board.is_legal(CENTER) {
        return Ok(CENTER);
    }

    random_move(board, rng)
}

fn find_winning_move(board: &Board, mark: Mark) -> Option<Position> {
    for position in board.legal_moves() {
        let mut probe = *board;
        probe.set_cell(position, Some(mark));
        if outcome(&probe) == Outcome::win_for(mark) {
            return Some(position);
        }
    }
    None
}

// Exhaustive search of the remaining game tree; at most 9 plies. Win for
// the bot scores +1, loss -1, draw 0. The first maximal move in row-major
// order wins ties, which makes this tier deterministic.
fn minimax_move(board: &Board, bot_mark: Mark) -> Result<Position, NoLegalMove> {
    let moves = board.legal_moves();
    if moves.is_empty() {
        return Err(NoLegalMove);
    }

    // Scratch copy: the search never touches the caller's board.
    let mut scratch = *board;

    let mut best_move = None;
    let mut best_score = i32::MIN;

    for position in moves {
        scratch.set_cell(position, Some(bot_mark));
        let score = minimax(&mut scratch, bot_mark.opponent(), bot_mark, i32::MIN, i32::MAX);
        scratch.set_cell(position, None);

        if score > best_score {
            best_score = score;
            best_move = Some(position);
        }
    }

    best_move.ok_or(NoLegalMove)
}

// Alpha-beta pruned, but every subtree is entered with a full window at its
// root child above, so returned scores there are exact and pruning cannot
// change the selected move.
fn minimax(board: &mut Board, to_move: Mark, bot_mark: Mark, mut alpha: i32, mut beta: i32) -> i32 {
    if let Some(winner) = check_win(board) {
        return if winner == bot_mark { 1 } else { -1 };
    }

    let moves = board.legal_moves();
    if moves.is_empty() {
        return 0;
    }

    if to_move == bot_mark {
        let mut max_score = i32::MIN;
        for position in moves {
            board.set_cell(position, Some(to_move));
            let score = minimax(board, to_move.opponent(), bot_mark, alpha, beta);
            board.set_cell(position, None);

            max_score = max_score.max(score);
            alpha = alpha.max(score);
            if beta <= alpha {
                break;
            }
        }
        max_score
    } else {
        let mut min_score = i32::MAX;
        for position in moves {
            board.set_cell(position, Some(to_move));
            let score = minimax(board, to_move.opponent(), bot_mark, alpha, beta);
            board.set_cell(position, None);

            min_score = min_score.min(score);
            beta = beta.min(score);
            if beta <= alpha {
                break;
            }
        }
        min_score
    }
}
