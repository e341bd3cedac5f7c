// src/handlers/submission.rs

use axum::{
    Extension, Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use validator::Validate;

use crate::{
    error::AppError,
    models::submission::{NewSubmission, SubmissionQuery, SubmitAnswerRequest, SubmitAnswerResponse},
    store::SharedStore,
    utils::jwt::Claims,
};

/// Records a student's answer to a challenge.
///
/// * Only students may submit.
/// * Correctness is decided here by comparing against the answer key.
/// * Responds 404 when the challenge does not exist and 409 when it was already answered.
pub async fn submit_answer(
    State(store): State<SharedStore>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<SubmitAnswerRequest>,
) -> Result<impl IntoResponse, AppError> {
    if claims.is_teacher() {
        return Err(AppError::Forbidden("Only students can submit answers".to_string()));
    }
    req.validate()?;

    let challenge = store
        .find_challenge(req.challenge_id)
        .await?
        .ok_or(AppError::NotFound("Challenge not found".to_string()))?;

    let is_correct = challenge.check_answer(&req.answer);

    let submission = store
        .insert_submission(NewSubmission {
            challenge_id: challenge.id,
            user_id: claims.user_id()?,
            answer: req.answer,
            is_correct,
            time_spent: req.time_spent,
            image_url: req.image_url,
        })
        .await?;

    tracing::info!(
        "Submission {} by user {} on challenge {} (correct: {})",
        submission.id,
        submission.user_id,
        submission.challenge_id,
        submission.is_correct
    );

    Ok((
        StatusCode::CREATED,
        Json(SubmitAnswerResponse {
            submission,
            correct_answer: challenge.correct_answer,
            message: if is_correct { "Correct answer!" } else { "Incorrect answer." },
        }),
    ))
}

/// Lists submissions.
///
/// Students only ever see their own; `userId` in the query is ignored for them.
/// Teachers see everything, optionally filtered by `challengeId` and `userId`.
pub async fn list_submissions(
    State(store): State<SharedStore>,
    Extension(claims): Extension<Claims>,
    Query(mut query): Query<SubmissionQuery>,
) -> Result<impl IntoResponse, AppError> {
    if !claims.is_teacher() {
        query.user_id = Some(claims.user_id()?);
    }

    let submissions = store.list_submissions(&query).await?;

    Ok(Json(submissions))
}
