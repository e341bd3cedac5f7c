// src/handlers/leaderboard.rs

use axum::{
    Extension, Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Serialize;

use crate::{
    error::AppError,
    models::{submission::SubmissionQuery, user::Role},
    services::leaderboard::{LeaderboardEntry, LeaderboardFilter, compute_leaderboard, rank_of},
    store::SharedStore,
    utils::jwt::Claims,
};

/// Ranked leaderboard of all students, optionally restricted by `class` and `semester`.
pub async fn get_leaderboard(
    State(store): State<SharedStore>,
    Query(filter): Query<LeaderboardFilter>,
) -> Result<impl IntoResponse, AppError> {
    let students = store.list_users(Some(Role::Student)).await?;
    let submissions = store.list_submissions(&SubmissionQuery::default()).await?;

    Ok(Json(compute_leaderboard(&submissions, &students, &filter)))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MyStanding {
    pub rank: usize,
    /// Number of students ranked alongside the caller.
    pub out_of: usize,
    pub entry: LeaderboardEntry,
}

/// The caller's position among classmates (same class and semester).
/// Student only. A student without a class or semester has no cohort and gets 400.
pub async fn my_standing(
    State(store): State<SharedStore>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, AppError> {
    if claims.is_teacher() {
        return Err(AppError::Forbidden("Teachers are not ranked".to_string()));
    }

    let me = store
        .find_user(claims.user_id()?)
        .await?
        .ok_or(AppError::NotFound("User not found".to_string()))?;

    let (Some(class), Some(semester)) = (me.class.clone(), me.semester) else {
        return Err(AppError::BadRequest(
            "Student has no class and semester assigned".to_string(),
        ));
    };
    let filter = LeaderboardFilter {
        class: Some(class),
        semester: Some(semester),
    };

    let students = store.list_users(Some(Role::Student)).await?;
    let submissions = store.list_submissions(&SubmissionQuery::default()).await?;
    let board = compute_leaderboard(&submissions, &students, &filter);

    let rank = rank_of(&board, me.id)
        .ok_or_else(|| AppError::InternalServerError(format!("user {} missing from own leaderboard", me.id)))?;

    Ok(Json(MyStanding {
        rank,
        out_of: board.len(),
        entry: board[rank - 1].clone(),
    }))
}
