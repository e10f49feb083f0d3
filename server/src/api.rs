use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tictactoe_engine::{
    Board, Difficulty, GameSession, Outcome, PlayError, Position, SessionMode, log,
};

use crate::registry::GameRegistry;

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeDto {
    Human,
    Ai,
}

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyDto {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyDto> for Difficulty {
    fn from(dto: DifficultyDto) -> Self {
        match dto {
            DifficultyDto::Easy => Difficulty::Easy,
            DifficultyDto::Medium => Difficulty::Medium,
            DifficultyDto::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct NewGameRequest {
    pub mode: ModeDto,
    #[serde(default)]
    pub difficulty: Option<DifficultyDto>,
}

#[derive(Debug, Deserialize)]
pub struct MoveRequest {
    pub game_id: String,
    pub row: usize,
    pub col: usize,
}

// Board on the wire: 3 rows of 3 nullable mark strings.
type BoardDto = [[Option<char>; 3]; 3];

#[derive(Debug, Serialize)]
pub struct PositionDto {
    pub row: usize,
    pub col: usize,
}

impl From<Position> for PositionDto {
    fn from(position: Position) -> Self {
        Self {
            row: position.row,
            col: position.col,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NewGameResponse {
    pub game_id: String,
    pub board: BoardDto,
    pub current_player: char,
    pub game_state: &'static str,
}

#[derive(Debug, Serialize)]
pub struct MoveResponse {
    pub board: BoardDto,
    pub current_player: char,
    pub game_state: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_move: Option<PositionDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winning_line: Option<[PositionDto; 3]>,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ApiError {
    GameNotFound,
    InvalidMove,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::GameNotFound => (StatusCode::NOT_FOUND, "Game not found"),
            ApiError::InvalidMove => (StatusCode::BAD_REQUEST, "Invalid move"),
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

pub async fn new_game(
    State(registry): State<GameRegistry>,
    Json(request): Json<NewGameRequest>,
) -> Result<Json<NewGameResponse>, ApiError> {
    let mode = match request.mode {
        ModeDto::Human => SessionMode::HumanVsHuman,
        ModeDto::Ai => SessionMode::HumanVsBot {
            difficulty: request.difficulty.unwrap_or(DifficultyDto::Easy).into(),
        },
    };

    let game_id = registry.create(mode).await;
    let (board, current_player, game_state, seed) = registry
        .with_game(&game_id, |session| {
            (
                board_dto(session.board()),
                session.current_mark().as_char(),
                outcome_token(session.outcome()),
                session.seed(),
            )
        })
        .await
        .ok_or(ApiError::GameNotFound)?;

    log!("Created game {} ({:?}, seed {})", game_id, mode, seed);

    Ok(Json(NewGameResponse {
        game_id,
        board,
        current_player,
        game_state,
    }))
}

pub async fn make_move(
    State(registry): State<GameRegistry>,
    Json(request): Json<MoveRequest>,
) -> Result<Json<MoveResponse>, ApiError> {
    let game_id = request.game_id.clone();
    let position = Position::new(request.row, request.col);

    let played = registry
        .with_game(&game_id, |session| -> Result<MoveResponse, PlayError> {
            session.play(position)?;

            let mut ai_move = None;
            if session.bot_turn_due() {
                match session.play_bot_turn() {
                    Ok(bot_position) => ai_move = Some(bot_position),
                    Err(e) => {
                        // Driver-side sequencing bug, not a client error.
                        log!("[game:{}] computer move failed: {}", game_id, e);
                    }
                }
            }

            Ok(build_move_response(session, ai_move))
        })
        .await
        .ok_or(ApiError::GameNotFound)?;

    match played {
        Ok(response) => Ok(Json(response)),
        Err(_play_error) => Err(ApiError::InvalidMove),
    }
}

fn build_move_response(session: &GameSession, ai_move: Option<Position>) -> MoveResponse {
    let winning_line = session
        .winning_line()
        .map(|line| line.cells.map(PositionDto::from));

    MoveResponse {
        board: board_dto(session.board()),
        current_player: session.current_mark().as_char(),
        game_state: outcome_token(session.outcome()),
        ai_move: ai_move.map(PositionDto::from),
        winning_line,
    }
}

fn board_dto(board: &Board) -> BoardDto {
    board.rows().map(|row| row.map(|cell| cell.map(|mark| mark.as_char())))
}

fn outcome_token(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Ongoing => "ongoing",
        Outcome::XWins => "x_wins",
        Outcome::OWins => "o_wins",
        Outcome::Draw => "draw",
    }
}
