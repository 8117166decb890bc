use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use crate::api::models::CupNameRequest;
use crate::domain::{HandicapMap, ScoreData, Year};

use super::{persist, read_store, store_error, write_store, AppState};

pub async fn get_handicaps(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let store = match read_store(&state) {
        Ok(store) => store,
        Err(response) => return response,
    };
    Json(store.handicaps().clone()).into_response()
}

pub async fn set_handicaps(
    State(state): State<Arc<AppState>>,
    Json(handicaps): Json<HandicapMap>,
) -> impl IntoResponse {
    let mut store = match write_store(&state) {
        Ok(store) => store,
        Err(response) => return response,
    };
    if let Err(e) = store.set_handicaps(handicaps) {
        return store_error(e);
    }
    if let Err(response) = persist(&state, &store) {
        return response;
    }
    StatusCode::NO_CONTENT.into_response()
}

pub async fn set_cup_name(
    State(state): State<Arc<AppState>>,
    Path(year): Path<Year>,
    Json(request): Json<CupNameRequest>,
) -> impl IntoResponse {
    let mut store = match write_store(&state) {
        Ok(store) => store,
        Err(response) => return response,
    };
    if let Err(e) = store.set_cup_name(year, &request.name) {
        return store_error(e);
    }
    if let Err(response) = persist(&state, &store) {
        return response;
    }
    StatusCode::NO_CONTENT.into_response()
}

/// Export the whole document, the same shape the remote endpoint serves.
pub async fn export_data(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let store = match read_store(&state) {
        Ok(store) => store,
        Err(response) => return response,
    };
    Json(store.data().clone()).into_response()
}

/// Import a whole document, replacing the current one. Shape errors are
/// caught by deserialization; content is taken as-is (last writer wins).
pub async fn import_data(
    State(state): State<Arc<AppState>>,
    Json(data): Json<ScoreData>,
) -> impl IntoResponse {
    let mut store = match write_store(&state) {
        Ok(store) => store,
        Err(response) => return response,
    };
    store.replace_data(data);
    if let Err(response) = persist(&state, &store) {
        return response;
    }
    StatusCode::NO_CONTENT.into_response()
}
