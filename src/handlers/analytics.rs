// src/handlers/analytics.rs

use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};

use crate::{
    error::AppError,
    models::{challenge::ChallengeQuery, submission::SubmissionQuery, user::Role},
    services::{analytics::compute_analytics, leaderboard::LeaderboardFilter},
    store::SharedStore,
};

/// Dashboard analytics for the students matching `class`/`semester`.
/// Teacher only.
pub async fn get_analytics(
    State(store): State<SharedStore>,
    Query(filter): Query<LeaderboardFilter>,
) -> Result<impl IntoResponse, AppError> {
    // Challenges without a class apply to everyone, so all of them are reported.
    let challenges = store.list_challenges(&ChallengeQuery::default()).await?;
    let students = store.list_users(Some(Role::Student)).await?;
    let submissions = store.list_submissions(&SubmissionQuery::default()).await?;

    Ok(Json(compute_analytics(&challenges, &submissions, &students, &filter)))
}
