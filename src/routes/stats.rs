use axum::{extract::State, Json};

use crate::{error::Result, models::StatsResponse, queries::stats_queries, AppState};

pub async fn get_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>> {
    let stats = stats_queries::get_stats(&state.db).await?;

    Ok(Json(stats))
}
