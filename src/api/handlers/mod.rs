use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;

use crate::api::models::ErrorBody;
use crate::config::settings::AppConfig;
use crate::errors::StoreError;
use crate::store::{FileStore, SeasonStore};

pub mod rankings;
pub mod rounds;
pub mod settings;

pub struct AppState {
    pub store: RwLock<SeasonStore>,
    pub file: FileStore,
    pub config: AppConfig,
}

#[derive(Deserialize)]
pub struct RankingParams {
    /// `with` applies handicaps; anything else (or absent) is the raw view.
    pub handicap: Option<String>,
}

#[derive(Deserialize)]
pub struct SummaryParams {
    pub player: Option<String>,
}

pub fn read_store(state: &AppState) -> Result<RwLockReadGuard<'_, SeasonStore>, Response> {
    state
        .store
        .read()
        .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "Store lock poisoned").into_response())
}

pub fn write_store(state: &AppState) -> Result<RwLockWriteGuard<'_, SeasonStore>, Response> {
    state
        .store
        .write()
        .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "Store lock poisoned").into_response())
}

/// Persist the document after a successful mutation. The write lock is
/// still held by the caller, so saves are serialized.
pub fn persist(state: &AppState, store: &SeasonStore) -> Result<(), Response> {
    state.file.save(store.data()).map_err(|e| {
        log::error!("Failed to persist document: {e:?}");
        (StatusCode::INTERNAL_SERVER_ERROR, "Failed to persist data").into_response()
    })
}

/// Map store validation failures onto HTTP statuses. A short round that
/// still needs caller confirmation is a conflict, not a hard rejection.
pub fn store_error(err: StoreError) -> Response {
    let status = match err {
        StoreError::NeedsConfirmation { .. } => StatusCode::CONFLICT,
        StoreError::SeasonNotFound(_) | StoreError::RoundNotFound { .. } => StatusCode::NOT_FOUND,
        _ => StatusCode::UNPROCESSABLE_ENTITY,
    };
    (
        status,
        Json(ErrorBody {
            error: err.to_string(),
        }),
    )
        .into_response()
}
