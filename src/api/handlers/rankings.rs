use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use crate::api::models::{RankingsResponse, SummaryResponse};
use crate::domain::Year;
use crate::ranking;

use super::{read_store, AppState, RankingParams, SummaryParams};

/// The three leaderboards for a season. An absent season renders as empty
/// result sets, not an error.
pub async fn get_rankings(
    State(state): State<Arc<AppState>>,
    Path(year): Path<Year>,
    Query(params): Query<RankingParams>,
) -> impl IntoResponse {
    let apply_handicap = params.handicap.as_deref() == Some("with");
    let settings = &state.config.ranking;

    let store = match read_store(&state) {
        Ok(store) => store,
        Err(response) => return response,
    };

    let empty = Vec::new();
    let rounds = store.season(year).map_or(&empty, |s| &s.rounds);
    let roster = store.roster();
    let handicaps = store.handicaps();

    Json(RankingsResponse {
        year,
        cup_name: cup_name(&store, &state, year),
        apply_handicap,
        overall: ranking::overall_standings(roster, rounds, handicaps, apply_handicap, settings),
        best_scores: ranking::best_score_standings(
            roster,
            rounds,
            handicaps,
            apply_handicap,
            settings,
        ),
        putting: ranking::putt_standings(roster, rounds, settings),
    })
    .into_response()
}

/// Season summary: dashboard counts, best-score and best-putt holders,
/// achievements, and optionally one player's personal stats.
pub async fn get_summary(
    State(state): State<Arc<AppState>>,
    Path(year): Path<Year>,
    Query(params): Query<SummaryParams>,
) -> impl IntoResponse {
    let settings = &state.config.ranking;

    let store = match read_store(&state) {
        Ok(store) => store,
        Err(response) => return response,
    };

    if let Some(player) = params.player.as_deref() {
        if !store.roster().contains(player) {
            return (StatusCode::NOT_FOUND, format!("Unknown player: {player}")).into_response();
        }
    }

    let season = store.season(year).cloned().unwrap_or_default();
    let roster = store.roster();

    let personal = params
        .player
        .as_deref()
        .map(|player| ranking::personal_stats(player, &season.rounds, settings));

    Json(SummaryResponse {
        year,
        cup_name: cup_name(&store, &state, year),
        summary: ranking::season_summary(roster, &season.rounds, settings),
        best_score: ranking::best_score(roster, &season.rounds, settings),
        best_putt: ranking::best_putt_average(roster, &season.rounds, settings),
        personal,
        hole_in_ones: season.hole_in_ones,
        eagles: season.eagles,
    })
    .into_response()
}

fn cup_name(store: &crate::store::SeasonStore, state: &AppState, year: Year) -> String {
    store
        .cup_name(year)
        .unwrap_or(state.config.default_cup_name)
        .to_string()
}
