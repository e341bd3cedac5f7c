// src/handlers/challenge.rs

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use validator::Validate;

use crate::{
    error::AppError,
    models::challenge::{Challenge, ChallengeQuery, CreateChallengeRequest, NewChallenge, PublicChallenge},
    store::SharedStore,
    utils::{html::clean_html, jwt::Claims},
};

/// Teachers see the answer key, everyone else gets the public view.
fn present(challenge: Challenge, claims: &Claims) -> Response {
    if claims.is_teacher() {
        Json(challenge).into_response()
    } else {
        Json(PublicChallenge::from(challenge)).into_response()
    }
}

/// Lists challenges, optionally filtered by class, semester and difficulty.
pub async fn list_challenges(
    State(store): State<SharedStore>,
    Extension(claims): Extension<Claims>,
    Query(query): Query<ChallengeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let challenges = store.list_challenges(&query).await?;

    if claims.is_teacher() {
        return Ok(Json(challenges).into_response());
    }

    let public: Vec<PublicChallenge> = challenges.into_iter().map(PublicChallenge::from).collect();
    Ok(Json(public).into_response())
}

/// Retrieves a single challenge by ID.
pub async fn get_challenge(
    State(store): State<SharedStore>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let challenge = store
        .find_challenge(id)
        .await?
        .ok_or(AppError::NotFound("Challenge not found".to_string()))?;

    Ok(present(challenge, &claims))
}

/// Today's challenge: the most recently created one, without its answer.
/// Public, so the landing page can show it before login.
pub async fn todays_challenge(State(store): State<SharedStore>) -> Result<impl IntoResponse, AppError> {
    let latest = store
        .list_challenges(&ChallengeQuery::default())
        .await?
        .into_iter()
        .max_by_key(|c| (c.created_at, c.id))
        .ok_or(AppError::NotFound("No challenge available".to_string()))?;

    Ok(Json(PublicChallenge::from(latest)))
}

/// Creates a new challenge.
/// Teacher only.
pub async fn create_challenge(
    State(store): State<SharedStore>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateChallengeRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let challenge = store
        .insert_challenge(NewChallenge {
            title: payload.title,
            question: clean_html(&payload.question),
            options: payload.options,
            correct_answer: payload.correct_answer,
            difficulty: payload.difficulty,
            created_by: claims.user_id()?,
            due_date: payload.due_date,
            image_url: payload.image_url,
            class: payload.class,
            semester: payload.semester,
        })
        .await?;

    tracing::info!("Challenge {} '{}' created by {}", challenge.id, challenge.title, claims.sub);

    Ok((StatusCode::CREATED, Json(challenge)))
}
