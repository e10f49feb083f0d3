mod ui;

use std::io;

use clap::Parser;
use tictactoe_engine::{Difficulty, GameSession, Mark, SessionMode};

use ui::{DifficultyChoice, ModeChoice, Ui};

#[derive(Parser)]
#[command(name = "tictactoe", about = "Tic-tac-toe in the terminal, against a friend or the computer")]
struct Args {
    /// Fixed seed for the computer's random moves (reproducible games).
    #[arg(long)]
    seed: Option<u64>,

    /// Disable ANSI colors.
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let ui = Ui::new(!args.no_color);

    ui.show_title();

    loop {
        let Some(mode_choice) = ui.prompt_mode()? else {
            break;
        };

        let mode = match mode_choice {
            ModeChoice::HumanVsComputer => {
                let Some(difficulty) = ui.prompt_difficulty()? else {
                    break;
                };
                let difficulty = match difficulty {
                    DifficultyChoice::Easy => Difficulty::Easy,
                    DifficultyChoice::Medium => Difficulty::Medium,
                    DifficultyChoice::Hard => Difficulty::Hard,
                };
                println!("\nGame started! You are X, the computer is O.");
                SessionMode::HumanVsBot { difficulty }
            }
            ModeChoice::HumanVsHuman => {
                println!("\nGame started! Player 1 is X, Player 2 is O.");
                SessionMode::HumanVsHuman
            }
        };

        let mut session = match args.seed {
            Some(seed) => GameSession::with_seed(mode, seed),
            None => GameSession::new(mode),
        };

        if !run_game(&ui, &mut session)? {
            break;
        }

        match ui.prompt_play_again()? {
            Some(true) => continue,
            Some(false) | None => break,
        }
    }

    ui.show_goodbye();
    Ok(())
}

// Plays one game to its end. Returns false if input ended early.
fn run_game(ui: &Ui, session: &mut GameSession) -> io::Result<bool> {
    loop {
        ui.show_board(session.board());

        let outcome = session.outcome();
        if outcome.is_over() {
            ui.show_result(outcome);
            return Ok(true);
        }

        if session.bot_turn_due() {
            ui.show_thinking();
            match session.play_bot_turn() {
                Ok(position) => ui.show_bot_move(position),
                Err(e) => {
                    eprintln!("computer move failed: {}", e);
                    return Ok(false);
                }
            }
            continue;
        }

        let label = player_label(session);
        loop {
            let Some(position) = ui.prompt_move(&label)? else {
                return Ok(false);
            };
            match session.play(position) {
                Ok(()) => break,
                Err(_) => ui.show_illegal_move(),
            }
        }
    }
}

fn player_label(session: &GameSession) -> String {
    match (session.mode(), session.current_mark()) {
        (SessionMode::HumanVsBot { .. }, _) => "You (X)".to_string(),
        (SessionMode::HumanVsHuman, Mark::X) => "Player 1 (X)".to_string(),
        (SessionMode::HumanVsHuman, Mark::O) => "Player 2 (O)".to_string(),
    }
}
