// src/models/question.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::challenge::Difficulty;

/// An input/expected-output pair used to check a coding answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct TestCase {
    #[validate(length(max = 2000))]
    pub input: String,
    #[validate(length(max = 2000))]
    pub expected: String,
}

/// A reusable coding problem in the question bank.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: i64,

    pub title: String,

    pub difficulty: Difficulty,

    /// Free-form topic tag, e.g. "data-structures".
    pub topic: String,

    /// Problem statement, HTML-sanitized on the way in.
    pub description: String,

    /// Code the editor is pre-filled with.
    pub starter_code: String,

    pub test_cases: Vec<TestCase>,

    pub created_by: i64,

    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub title: String,
    pub difficulty: Difficulty,
    pub topic: String,
    pub description: String,
    pub starter_code: String,
    pub test_cases: Vec<TestCase>,
    pub created_by: i64,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct QuestionQuery {
    pub difficulty: Option<Difficulty>,
    pub topic: Option<String>,
}

impl QuestionQuery {
    pub fn matches(&self, q: &Question) -> bool {
        self.difficulty.is_none_or(|d| q.difficulty == d)
            && self
                .topic
                .as_ref()
                .is_none_or(|t| q.topic.eq_ignore_ascii_case(t))
    }
}

/// DTO for creating a new question.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuestionRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    pub difficulty: Difficulty,
    #[validate(length(min = 1, max = 50))]
    pub topic: String,
    #[validate(length(min = 1, max = 10000))]
    pub description: String,
    #[serde(default)]
    #[validate(length(max = 10000))]
    pub starter_code: String,
    #[validate(length(min = 1, max = 50), nested)]
    pub test_cases: Vec<TestCase>,
}
