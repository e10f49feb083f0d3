use criterion::{Criterion, criterion_group, criterion_main};
use tictactoe_engine::{Board, Difficulty, Mark, Position, SessionRng, choose_move, outcome};

fn bench_hard_move_empty_board(c: &mut Criterion) {
    c.bench_function("hard_move_empty_board", |b| {
        let mut rng = SessionRng::new(7);
        b.iter(|| {
            let board = Board::empty();
            choose_move(&board, Mark::X, Difficulty::Hard, &mut rng)
        });
    });
}

fn bench_hard_move_mid_game(c: &mut Criterion) {
    c.bench_function("hard_move_mid_game", |b| {
        let mut board = Board::empty();
        let moves = [
            (0, 0, Mark::X),
            (1, 1, Mark::O),
            (0, 1, Mark::X),
            (0, 2, Mark::O),
        ];
        for (row, col, mark) in moves {
            board.apply(Position::new(row, col), mark).unwrap();
        }

        let mut rng = SessionRng::new(7);
        b.iter(|| choose_move(&board, Mark::X, Difficulty::Hard, &mut rng));
    });
}

fn bench_hard_full_selfplay_game(c: &mut Criterion) {
    c.bench_function("hard_full_selfplay_game", |b| {
        let mut rng = SessionRng::new(7);
        b.iter(|| {
            let mut board = Board::empty();
            let mut to_move = Mark::X;
            while !outcome(&board).is_over() {
                let position = choose_move(&board, to_move, Difficulty::Hard, &mut rng)
                    .expect("ongoing board has a legal move");
                board.apply(position, to_move).expect("chosen move is legal");
                to_move = to_move.opponent();
            }
            outcome(&board)
        });
    });
}

criterion_group!(
    benches,
    bench_hard_move_empty_board,
    bench_hard_move_mid_game,
    bench_hard_full_selfplay_game
);
criterion_main!(benches);
