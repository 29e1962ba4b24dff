// HTTP handlers: translate transport payloads into engine calls and engine
// results into responses. Every successful mutation publishes the fresh
// snapshot before the response goes out.

use crate::domain::{GameError, Team};
use crate::interface_adapters::protocol::{
    ActiveTeamRequest, ActiveTeamResponse, AnswerDto, AwardResponse, ErrorResponse, GameStateDto,
    NewQuestionRequest, NewQuestionResponse, NextRoundResponse, OkResponse, QuestionListResponse,
    QuestionSummaryDto, ScoresResponse, SelectRequest, SelectResponse, SetScoreRequest,
    StealResponse, StrikesResponse,
};
use crate::interface_adapters::state::AppState;
use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;
use tracing::info;

type ApiError = (StatusCode, Json<ErrorResponse>);

pub async fn get_state(State(state): State<Arc<AppState>>) -> Json<GameStateDto> {
    let engine = state.engine.lock().await;
    Json(GameStateDto::from(engine.current_state()))
}

pub async fn list_questions(State(state): State<Arc<AppState>>) -> Json<QuestionListResponse> {
    let engine = state.engine.lock().await;
    let questions = engine
        .list_questions()
        .iter()
        .map(QuestionSummaryDto::from)
        .collect();
    Json(QuestionListResponse { questions })
}

pub async fn select_answer(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SelectRequest>,
) -> Result<Json<SelectResponse>, ApiError> {
    let Some(answer_id) = payload.id else {
        return Err(error_response(StatusCode::BAD_REQUEST, "id required"));
    };

    let mut engine = state.engine.lock().await;
    let outcome = engine.select_answer(answer_id).map_err(map_game_error)?;
    // A repeat select scores nothing but still refreshes presentation.
    state.publish(engine.current_state().clone());

    Ok(Json(SelectResponse {
        ok: true,
        selected: AnswerDto::from(&outcome.answer),
        round_score: outcome.round_score,
    }))
}

pub async fn reset_board(State(state): State<Arc<AppState>>) -> Json<OkResponse> {
    let mut engine = state.engine.lock().await;
    engine.reset_board();
    state.publish(engine.current_state().clone());
    Json(OkResponse { ok: true })
}

pub async fn new_question(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewQuestionRequest>,
) -> Result<Json<NewQuestionResponse>, ApiError> {
    let mut engine = state.engine.lock().await;
    let question_id = engine
        .new_question(payload.question_id)
        .map_err(map_game_error)?;
    state.publish(engine.current_state().clone());

    info!(question_id, "question loaded");
    Ok(Json(NewQuestionResponse {
        ok: true,
        question_id,
    }))
}

pub async fn next_round(
    State(state): State<Arc<AppState>>,
) -> Result<Json<NextRoundResponse>, ApiError> {
    let mut engine = state.engine.lock().await;
    let outcome = engine.next_round().map_err(map_game_error)?;
    state.publish(engine.current_state().clone());

    info!(
        question_id = outcome.question_id,
        awarded_points = outcome.awarded_points,
        "round advanced"
    );
    Ok(Json(NextRoundResponse {
        ok: true,
        question_id: outcome.question_id,
        awarded_points: outcome.awarded_points,
        team1_score: outcome.team1_score,
        team2_score: outcome.team2_score,
    }))
}

pub async fn set_active_team(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ActiveTeamRequest>,
) -> Result<Json<ActiveTeamResponse>, ApiError> {
    let Some(value) = payload.team else {
        return Err(error_response(StatusCode::BAD_REQUEST, "team must be 1 or 2"));
    };
    let team = Team::from_index(value).map_err(map_game_error)?;

    let mut engine = state.engine.lock().await;
    let active = engine.set_active_team(team);
    state.publish(engine.current_state().clone());

    Ok(Json(ActiveTeamResponse { ok: true, active }))
}

pub async fn award(State(state): State<Arc<AppState>>) -> Json<AwardResponse> {
    let mut engine = state.engine.lock().await;
    let outcome = engine.award();
    state.publish(engine.current_state().clone());

    Json(AwardResponse {
        ok: true,
        awarded: outcome.awarded,
    })
}

pub async fn award_steal(State(state): State<Arc<AppState>>) -> Json<StealResponse> {
    let mut engine = state.engine.lock().await;
    let outcome = engine.award_steal();
    state.publish(engine.current_state().clone());

    Json(StealResponse {
        ok: true,
        awarded: outcome.awarded,
        to: outcome.to.index(),
    })
}

pub async fn add_strike(State(state): State<Arc<AppState>>) -> Json<StrikesResponse> {
    let mut engine = state.engine.lock().await;
    let strikes = engine.add_strike();
    state.publish(engine.current_state().clone());

    Json(StrikesResponse { ok: true, strikes })
}

pub async fn clear_strikes(State(state): State<Arc<AppState>>) -> Json<StrikesResponse> {
    let mut engine = state.engine.lock().await;
    let strikes = engine.clear_strikes();
    state.publish(engine.current_state().clone());

    Json(StrikesResponse { ok: true, strikes })
}

pub async fn set_score(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SetScoreRequest>,
) -> Result<Json<ScoresResponse>, ApiError> {
    let Some(value) = payload.team else {
        return Err(error_response(StatusCode::BAD_REQUEST, "team must be 1 or 2"));
    };
    let team = Team::from_index(value).map_err(map_game_error)?;
    let Some(score) = payload.score.as_ref().and_then(|score| score.as_i64()) else {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "score must be an integer",
        ));
    };

    let mut engine = state.engine.lock().await;
    let (team1_score, team2_score) = engine.set_team_score(team, score);
    state.publish(engine.current_state().clone());

    Ok(Json(ScoresResponse {
        ok: true,
        team1_score,
        team2_score,
    }))
}

// Helper to build a JSON error body.
fn error_response(status: StatusCode, message: &str) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

// Maps domain errors to HTTP responses.
fn map_game_error(err: GameError) -> ApiError {
    match err {
        GameError::AnswerNotFound { .. } => error_response(StatusCode::NOT_FOUND, "not found"),
        GameError::QuestionNotFound { .. } => {
            error_response(StatusCode::NOT_FOUND, "question not found")
        }
        GameError::NoQuestions => error_response(StatusCode::NOT_FOUND, "no questions loaded"),
        GameError::InvalidTeam { .. } => {
            error_response(StatusCode::BAD_REQUEST, "team must be 1 or 2")
        }
    }
}
