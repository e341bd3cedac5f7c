// src/handlers/question.rs

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use validator::Validate;

use crate::{
    error::AppError,
    models::question::{CreateQuestionRequest, NewQuestion, QuestionQuery},
    store::SharedStore,
    utils::{html::clean_html, jwt::Claims},
};

/// Lists the question bank, optionally filtered by difficulty and topic.
pub async fn list_questions(
    State(store): State<SharedStore>,
    Query(query): Query<QuestionQuery>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(store.list_questions(&query).await?))
}

pub async fn get_question(
    State(store): State<SharedStore>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let question = store
        .find_question(id)
        .await?
        .ok_or(AppError::NotFound("Question not found".to_string()))?;

    Ok(Json(question))
}

/// Adds a coding problem to the question bank.
/// Teacher only.
pub async fn create_question(
    State(store): State<SharedStore>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateQuestionRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let question = store
        .insert_question(NewQuestion {
            title: payload.title,
            difficulty: payload.difficulty,
            topic: payload.topic,
            description: clean_html(&payload.description),
            starter_code: payload.starter_code,
            test_cases: payload.test_cases,
            created_by: claims.user_id()?,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(question)))
}
