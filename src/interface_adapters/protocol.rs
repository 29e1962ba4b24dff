// Wire protocol DTOs and conversions for the public scoreboard API.
// Field names match what the board and judge pages render.

use crate::domain::{Answer, GameState};
use crate::use_cases::QuestionSummary;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Messages the server pushes to connected clients over the WebSocket.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum ServerMessage {
    // Full board snapshot; sent on connect and after every mutation.
    StateUpdate(GameStateDto),
}

#[derive(Debug, Clone, Serialize)]
pub struct AnswerDto {
    pub id: u32,
    pub text: String,
    pub points: u32,
    pub revealed: bool,
}

impl From<&Answer> for AnswerDto {
    fn from(answer: &Answer) -> Self {
        Self {
            id: answer.id,
            text: answer.text.clone(),
            points: answer.points,
            revealed: answer.revealed,
        }
    }
}

/// Full board snapshot in the wire shape clients render.
#[derive(Debug, Clone, Serialize)]
pub struct GameStateDto {
    pub question_id: u32,
    pub question: String,
    pub answers: Vec<AnswerDto>,
    pub last_selected: Option<AnswerDto>,
    pub strikes: u8,
    #[serde(rename = "roundScore")]
    pub round_score: u32,
    #[serde(rename = "team1Name")]
    pub team1_name: String,
    #[serde(rename = "team2Name")]
    pub team2_name: String,
    #[serde(rename = "team1Score")]
    pub team1_score: i64,
    #[serde(rename = "team2Score")]
    pub team2_score: i64,
    #[serde(rename = "activeTeam")]
    pub active_team: u8,
}

impl From<&GameState> for GameStateDto {
    fn from(state: &GameState) -> Self {
        Self {
            question_id: state.question_id,
            question: state.prompt.clone(),
            answers: state.answers.iter().map(AnswerDto::from).collect(),
            last_selected: state.last_selected.as_ref().map(AnswerDto::from),
            strikes: state.strikes,
            round_score: state.round_score,
            team1_name: state.team1_name.clone(),
            team2_name: state.team2_name.clone(),
            team1_score: state.team1_score,
            team2_score: state.team2_score,
            active_team: state.active_team.index(),
        }
    }
}

/// Bank listing entry; never carries answers or points.
#[derive(Debug, Serialize)]
pub struct QuestionSummaryDto {
    pub id: u32,
    pub question: String,
    pub answer_count: usize,
}

impl From<&QuestionSummary> for QuestionSummaryDto {
    fn from(summary: &QuestionSummary) -> Self {
        Self {
            id: summary.id,
            question: summary.prompt.clone(),
            answer_count: summary.answer_count,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SelectRequest {
    #[serde(default)]
    pub id: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct NewQuestionRequest {
    #[serde(default)]
    pub question_id: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct ActiveTeamRequest {
    #[serde(default)]
    pub team: Option<i64>,
}

// `score` stays untyped so a non-integer value maps to the API's own
// error message instead of a generic deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct SetScoreRequest {
    #[serde(default)]
    pub team: Option<i64>,
    #[serde(default)]
    pub score: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct OkResponse {
    pub ok: bool,
}

#[derive(Debug, Serialize)]
pub struct SelectResponse {
    pub ok: bool,
    pub selected: AnswerDto,
    #[serde(rename = "roundScore")]
    pub round_score: u32,
}

#[derive(Debug, Serialize)]
pub struct NewQuestionResponse {
    pub ok: bool,
    pub question_id: u32,
}

#[derive(Debug, Serialize)]
pub struct NextRoundResponse {
    pub ok: bool,
    pub question_id: u32,
    pub awarded_points: u32,
    #[serde(rename = "team1Score")]
    pub team1_score: i64,
    #[serde(rename = "team2Score")]
    pub team2_score: i64,
}

#[derive(Debug, Serialize)]
pub struct ActiveTeamResponse {
    pub ok: bool,
    pub active: u8,
}

#[derive(Debug, Serialize)]
pub struct AwardResponse {
    pub ok: bool,
    pub awarded: u32,
}

#[derive(Debug, Serialize)]
pub struct StealResponse {
    pub ok: bool,
    pub awarded: u32,
    pub to: u8,
}

#[derive(Debug, Serialize)]
pub struct StrikesResponse {
    pub ok: bool,
    pub strikes: u8,
}

#[derive(Debug, Serialize)]
pub struct ScoresResponse {
    pub ok: bool,
    #[serde(rename = "team1Score")]
    pub team1_score: i64,
    #[serde(rename = "team2Score")]
    pub team2_score: i64,
}

#[derive(Debug, Serialize)]
pub struct QuestionListResponse {
    pub questions: Vec<QuestionSummaryDto>,
}

// Simple error envelope for JSON responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
