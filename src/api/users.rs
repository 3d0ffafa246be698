use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use super::ApiError;
use crate::models::PersonRecord;
use crate::search::search_directory;
use crate::state::AppState;
use crate::utils::contains_special_characters;

#[derive(Debug, Deserialize)]
pub struct UserSearchQuery {
    /// Free-text name phrase, e.g. "Jan van der Berg" / 姓名搜索词
    #[serde(default)]
    pub name: Option<String>,
}

/// 按姓名搜索用户
pub async fn search_users(
    State(state): State<Arc<AppState>>,
    Query(params): Query<UserSearchQuery>,
) -> Result<Json<Vec<PersonRecord>>, ApiError> {
    let phrase = params.name.as_deref();
    if phrase.is_some_and(contains_special_characters) {
        return Err(ApiError::InvalidQueryCharacter);
    }

    let people = search_directory(state.directory.as_ref(), phrase, &state.search_options).await?;
    tracing::debug!("User search {:?} returned {} people", phrase, people.len());
    Ok(Json(people))
}

/// 获取用户详情
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<PersonRecord>, ApiError> {
    let id: i64 = id.parse().map_err(|_| ApiError::NumericIdRequired)?;

    state
        .directory
        .get(id)
        .await?
        .map(Json)
        .ok_or(ApiError::UserNotFound)
}
