// src/models/submission.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::challenge::validate_url_string;

/// A student's recorded answer to a challenge.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: i64,
    pub challenge_id: i64,
    pub user_id: i64,
    pub answer: String,
    pub is_correct: bool,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
    /// Seconds the student spent before submitting.
    pub time_spent: u32,
    pub image_url: Option<String>,
}

/// Data needed by the store to append a submission.
/// `is_correct` is decided by the handler, never by the client.
#[derive(Debug, Clone)]
pub struct NewSubmission {
    pub challenge_id: i64,
    pub user_id: i64,
    pub answer: String,
    pub is_correct: bool,
    pub time_spent: u32,
    pub image_url: Option<String>,
}

/// Filters for listing submissions.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionQuery {
    pub challenge_id: Option<i64>,
    pub user_id: Option<i64>,
}

impl SubmissionQuery {
    pub fn matches(&self, s: &Submission) -> bool {
        self.challenge_id.is_none_or(|id| s.challenge_id == id)
            && self.user_id.is_none_or(|id| s.user_id == id)
    }
}

/// DTO for submitting an answer.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAnswerRequest {
    pub challenge_id: i64,
    #[validate(length(min = 1, max = 20000))]
    pub answer: String,
    /// Capped at one day.
    #[validate(range(max = 86_400))]
    pub time_spent: u32,
    #[validate(length(max = 500), custom(function = validate_url_string))]
    pub image_url: Option<String>,
}

/// Response returned after a submission is recorded.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAnswerResponse {
    pub submission: Submission,
    pub correct_answer: String,
    pub message: &'static str,
}
