//! News feed handler

use crate::error::ApiError;
use crate::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use plantguard_core::NewsArticle;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct NewsQuery {
    limit: Option<String>,
}

pub async fn latest(
    State(state): State<AppState>,
    Query(query): Query<NewsQuery>,
) -> Result<Json<Vec<NewsArticle>>, ApiError> {
    // `?limit=` with no value means the default
    let limit = match query.limit.as_deref().map(str::trim) {
        None | Some("") => state.news_default_limit,
        Some(raw) => raw
            .parse::<usize>()
            .map_err(|_| ApiError::bad_request("Invalid limit"))?,
    };

    Ok(Json(state.store.get_latest_news_articles(limit).await?))
}
