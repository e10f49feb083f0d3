use std::io::{self, BufRead, Write};

use tictactoe_engine::{Board, Mark, Outcome, Position};

const RED: &str = "\x1b[91m";
const GREEN: &str = "\x1b[92m";
const YELLOW: &str = "\x1b[93m";
const BLUE: &str = "\x1b[94m";
const MAGENTA: &str = "\x1b[95m";
const CYAN: &str = "\x1b[96m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeChoice {
    HumanVsComputer,
    HumanVsHuman,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DifficultyChoice {
    Easy,
    Medium,
    Hard,
}

pub struct Ui {
    color: bool,
}

impl Ui {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, style: &str, text: &str) -> String {
        if self.color {
            format!("{}{}{}", style, text, RESET)
        } else {
            text.to_string()
        }
    }

    fn paint2(&self, a: &str, b: &str, text: &str) -> String {
        if self.color {
            format!("{}{}{}{}", a, b, text, RESET)
        } else {
            text.to_string()
        }
    }

    pub fn show_title(&self) {
        println!();
        println!("{}", self.paint2(CYAN, BOLD, "+----------------------------------+"));
        println!("{}", self.paint2(CYAN, BOLD, "|           TIC TAC TOE            |"));
        println!("{}", self.paint2(CYAN, BOLD, "+----------------------------------+"));
    }

    pub fn show_board(&self, board: &Board) {
        println!();
        println!("{}", self.paint(BOLD, "Current board:"));
        println!("{}", self.paint(YELLOW, "     0   1   2"));
        for (row, cells) in board.rows().iter().enumerate() {
            let mut line = format!("  {}  ", self.paint(YELLOW, &row.to_string()));
            for (col, cell) in cells.iter().enumerate() {
                let symbol = match cell {
                    Some(Mark::X) => self.paint2(RED, BOLD, "X"),
                    Some(Mark::O) => self.paint2(BLUE, BOLD, "O"),
                    None => " ".to_string(),
                };
                line.push_str(&symbol);
                if col < 2 {
                    line.push_str(" | ");
                }
            }
            println!("{}", line);
            if row < 2 {
                println!("    ---|---|---");
            }
        }
    }

    pub fn prompt_mode(&self) -> io::Result<Option<ModeChoice>> {
        loop {
            println!();
            println!("{}", self.paint(BOLD, "Select game mode:"));
            println!("{} Human vs Computer", self.paint(GREEN, "1."));
            println!("{} Human vs Human", self.paint(GREEN, "2."));

            let Some(choice) = self.prompt_line("Enter your choice (1-2): ")? else {
                return Ok(None);
            };
            match choice.as_str() {
                "1" => return Ok(Some(ModeChoice::HumanVsComputer)),
                "2" => return Ok(Some(ModeChoice::HumanVsHuman)),
                _ => println!("{}", self.paint(RED, "Invalid choice! Please enter 1 or 2.")),
            }
        }
    }

    pub fn prompt_difficulty(&self) -> io::Result<Option<DifficultyChoice>> {
        loop {
            println!();
            println!("{}", self.paint(BOLD, "Select difficulty:"));
            println!("{} Easy (random moves)", self.paint(GREEN, "1."));
            println!("{} Medium (basic strategy)", self.paint(YELLOW, "2."));
            println!("{} Hard (unbeatable)", self.paint(RED, "3."));

            let Some(choice) = self.prompt_line("Enter difficulty (1-3): ")? else {
                return Ok(None);
            };
            match choice.as_str() {
                "1" => return Ok(Some(DifficultyChoice::Easy)),
                "2" => return Ok(Some(DifficultyChoice::Medium)),
                "3" => return Ok(Some(DifficultyChoice::Hard)),
                _ => println!("{}", self.paint(RED, "Invalid choice! Please enter 1, 2, or 3.")),
            }
        }
    }

    /// Keeps prompting until the input parses as coordinates; legality is
    /// the engine's call, not ours.
    pub fn prompt_move(&self, player_label: &str) -> io::Result<Option<Position>> {
        loop {
            println!();
            let prompt = format!(
                "{} (format: row,col or row col): ",
                self.paint(BOLD, &format!("{}'s turn", player_label))
            );
            let Some(input) = self.prompt_line(&prompt)? else {
                return Ok(None);
            };
            match parse_move(&input) {
                Some(position) => return Ok(Some(position)),
                None => println!(
                    "{}",
                    self.paint(
                        RED,
                        "Invalid format! Please enter row,col (e.g., 1,2) or row col (e.g., 1 2)."
                    )
                ),
            }
        }
    }

    pub fn show_illegal_move(&self) {
        println!(
            "{}",
            self.paint(RED, "Invalid move! Cell is already occupied or out of bounds.")
        );
    }

    pub fn show_thinking(&self) {
        println!();
        println!("{}", self.paint(MAGENTA, "Computer is thinking..."));
    }

    pub fn show_bot_move(&self, position: Position) {
        println!(
            "{}",
            self.paint(
                MAGENTA,
                &format!("Computer plays: {},{}", position.row, position.col)
            )
        );
    }

    pub fn show_result(&self, outcome: Outcome) {
        println!();
        match outcome {
            Outcome::XWins => println!("{}", self.paint2(GREEN, BOLD, "Player X wins!")),
            Outcome::OWins => println!("{}", self.paint2(GREEN, BOLD, "Player O wins!")),
            Outcome::Draw => println!("{}", self.paint2(YELLOW, BOLD, "It's a draw!")),
            Outcome::Ongoing => {}
        }
    }

    pub fn prompt_play_again(&self) -> io::Result<Option<bool>> {
        loop {
            let Some(choice) = self.prompt_line("\nPlay again? (y/n): ")? else {
                return Ok(None);
            };
            match choice.to_lowercase().as_str() {
                "y" | "yes" => return Ok(Some(true)),
                "n" | "no" => return Ok(Some(false)),
                _ => println!("{}", self.paint(RED, "Please enter 'y' for yes or 'n' for no.")),
            }
        }
    }

    pub fn show_goodbye(&self) {
        println!();
        println!("{}", self.paint(CYAN, "Thanks for playing! Goodbye!"));
    }

    // Returns None on end of input.
    fn prompt_line(&self, prompt: &str) -> io::Result<Option<String>> {
        print!("{}", self.paint(CYAN, prompt));
        io::stdout().flush()?;

        let mut input = String::new();
        let read = io::stdin().lock().read_line(&mut input)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(input.trim().to_string()))
    }
}

/// Accepts "row,col" and "row col".
pub fn parse_move(input: &str) -> Option<Position> {
    let parts: Vec<&str> = if input.contains(',') {
        input.split(',').map(str::trim).collect()
    } else {
        input.split_whitespace().collect()
    };

    let [row, col] = parts.as_slice() else {
        return None;
    };
    let row = row.parse().ok()?;
    let col = col.parse().ok()?;
    Some(Position::new(row, col))
}
