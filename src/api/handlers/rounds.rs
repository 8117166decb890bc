use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use crate::api::models::{
    AchievementInput, PlayerScoreRequest, RoundListItem, RoundRequest, SavedRoundResponse,
};
use crate::domain::{Achievement, RoundInput, ScoreEntry, Year};
use crate::ranking::{count_scorers, is_valid};
use crate::store::MergeOutcome;

use super::{persist, read_store, store_error, write_store, AppState};

/// Raw round listing, invalid rounds included and flagged.
pub async fn list_rounds(
    State(state): State<Arc<AppState>>,
    Path(year): Path<Year>,
) -> impl IntoResponse {
    let settings = &state.config.ranking;
    let store = match read_store(&state) {
        Ok(store) => store,
        Err(response) => return response,
    };

    let items: Vec<RoundListItem> = store
        .season(year)
        .map(|season| {
            season
                .rounds
                .iter()
                .map(|round| RoundListItem {
                    round_number: round.round_number,
                    date: round.date,
                    course: round.course.clone(),
                    participants: count_scorers(round),
                    valid: is_valid(round, settings),
                    scores: round.scores.clone(),
                })
                .collect()
        })
        .unwrap_or_default();

    Json(items).into_response()
}

/// Bulk entry: one round for the whole group, optionally with hole-in-one
/// and eagle achievements attached to the same date and course.
pub async fn create_round(
    State(state): State<Arc<AppState>>,
    Path(year): Path<Year>,
    Json(request): Json<RoundRequest>,
) -> impl IntoResponse {
    let mut store = match write_store(&state) {
        Ok(store) => store,
        Err(response) => return response,
    };

    let RoundRequest {
        date,
        course,
        scores,
        confirm_short,
        hole_in_one,
        eagle,
    } = request;
    let to_achievement = |input: AchievementInput| Achievement {
        user: input.user,
        date,
        course: course.clone(),
        hole: input.hole,
    };
    let hole_in_one = hole_in_one.map(&to_achievement);
    let eagle = eagle.map(&to_achievement);
    let input = RoundInput {
        date,
        course,
        scores,
    };

    // One store write: a rejected achievement must not leave the round
    // committed behind a failed response.
    let number = match store.add_round_with_achievements(
        year,
        input,
        confirm_short,
        hole_in_one,
        eagle,
    ) {
        Ok(number) => number,
        Err(e) => return store_error(e),
    };

    if let Err(response) = persist(&state, &store) {
        return response;
    }
    (
        StatusCode::CREATED,
        Json(SavedRoundResponse {
            year,
            round_number: number,
            created: true,
        }),
    )
        .into_response()
}

/// Edit mode: full replacement of date, course and the score map.
pub async fn update_round(
    State(state): State<Arc<AppState>>,
    Path((year, number)): Path<(Year, u32)>,
    Json(request): Json<RoundRequest>,
) -> impl IntoResponse {
    let mut store = match write_store(&state) {
        Ok(store) => store,
        Err(response) => return response,
    };

    let input = RoundInput {
        date: request.date,
        course: request.course,
        scores: request.scores,
    };
    if let Err(e) = store.replace_round(year, number, input, request.confirm_short) {
        return store_error(e);
    }
    if let Err(response) = persist(&state, &store) {
        return response;
    }
    Json(SavedRoundResponse {
        year,
        round_number: number,
        created: false,
    })
    .into_response()
}

pub async fn remove_round(
    State(state): State<Arc<AppState>>,
    Path((year, number)): Path<(Year, u32)>,
) -> impl IntoResponse {
    let mut store = match write_store(&state) {
        Ok(store) => store,
        Err(response) => return response,
    };

    if let Err(e) = store.delete_round(year, number) {
        return store_error(e);
    }
    if let Err(response) = persist(&state, &store) {
        return response;
    }
    StatusCode::NO_CONTENT.into_response()
}

/// Single-player entry: merge into the matching round or open a new one.
pub async fn record_player_score(
    State(state): State<Arc<AppState>>,
    Path(year): Path<Year>,
    Json(request): Json<PlayerScoreRequest>,
) -> impl IntoResponse {
    let mut store = match write_store(&state) {
        Ok(store) => store,
        Err(response) => return response,
    };

    let entry = ScoreEntry {
        score: request.score,
        putt: request.putt,
    };
    let outcome = match store.merge_player_score(
        year,
        &request.player,
        request.date,
        &request.course,
        entry,
    ) {
        Ok(outcome) => outcome,
        Err(e) => return store_error(e),
    };
    if let Err(response) = persist(&state, &store) {
        return response;
    }

    let (status, number, created) = match outcome {
        MergeOutcome::Created(n) => (StatusCode::CREATED, n, true),
        MergeOutcome::Updated(n) => (StatusCode::OK, n, false),
    };
    (
        status,
        Json(SavedRoundResponse {
            year,
            round_number: number,
            created,
        }),
    )
        .into_response()
}
