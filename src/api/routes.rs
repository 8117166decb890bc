use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

use crate::api::handlers::{
    rankings::{get_rankings, get_summary},
    rounds::{create_round, list_rounds, record_player_score, remove_round, update_round},
    settings::{export_data, get_handicaps, import_data, set_cup_name, set_handicaps},
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/data", get(export_data).post(import_data))
        .route("/api/years/:year/rankings", get(get_rankings))
        .route("/api/years/:year/summary", get(get_summary))
        .route("/api/years/:year/rounds", get(list_rounds).post(create_round))
        .route(
            "/api/years/:year/rounds/:number",
            put(update_round).delete(remove_round),
        )
        .route("/api/years/:year/scores", post(record_player_score))
        .route("/api/years/:year/cup-name", put(set_cup_name))
        .route("/api/handicaps", get(get_handicaps).put(set_handicaps))
        .with_state(state)
}
