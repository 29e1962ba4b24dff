use crate::interface_adapters::handlers::{
    add_strike, award, award_steal, clear_strikes, get_state, list_questions, new_question,
    next_round, reset_board, select_answer, set_active_team, set_score,
};
use crate::interface_adapters::net::ws_handler;
use crate::interface_adapters::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

pub fn app(state: Arc<AppState>) -> Router {
    // Wire the HTTP routes and the push channel to their handlers.
    Router::new()
        .route("/api/state", get(get_state))
        .route("/api/questions", get(list_questions))
        .route("/api/select", post(select_answer))
        .route("/api/reset", post(reset_board))
        .route("/api/new_question", post(new_question))
        .route("/api/next_round", post(next_round))
        .route("/api/active", post(set_active_team))
        .route("/api/award", post(award))
        .route("/api/award_steal", post(award_steal))
        .route("/api/strike", post(add_strike))
        .route("/api/clear_strikes", post(clear_strikes))
        .route("/api/set_score", post(set_score))
        .route("/game", get(ws_handler))
        .with_state(state)
}
