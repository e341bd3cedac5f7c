// src/store/mod.rs

//! Storage abstraction.
//!
//! Handlers and services only see the [`Store`] trait, so the leaderboard and
//! analytics code can be exercised against fixtures without a database.

pub mod memory;
pub mod seed;

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    error::AppError,
    models::{
        challenge::{Challenge, ChallengeQuery, NewChallenge},
        question::{NewQuestion, Question, QuestionQuery},
        submission::{NewSubmission, Submission, SubmissionQuery},
        user::{NewUser, Role, User},
    },
};

pub use memory::MemoryStore;

/// Shared handle injected into handlers through `AppState`.
pub type SharedStore = Arc<dyn Store>;

/// Get/list/append access to users, challenges, submissions and questions.
///
/// Implementations assign ids and creation timestamps on insert.
#[async_trait]
pub trait Store: Send + Sync {
    async fn find_user(&self, id: i64) -> Result<Option<User>, AppError>;
    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, AppError>;
    /// Lists users, optionally restricted to one role, in id order.
    async fn list_users(&self, role: Option<Role>) -> Result<Vec<User>, AppError>;
    /// Fails with `Conflict` when the username is taken.
    async fn insert_user(&self, new_user: NewUser) -> Result<User, AppError>;

    async fn find_challenge(&self, id: i64) -> Result<Option<Challenge>, AppError>;
    async fn list_challenges(&self, query: &ChallengeQuery) -> Result<Vec<Challenge>, AppError>;
    async fn insert_challenge(&self, new_challenge: NewChallenge) -> Result<Challenge, AppError>;

    async fn list_submissions(&self, query: &SubmissionQuery) -> Result<Vec<Submission>, AppError>;
    /// Fails with `NotFound` when the referenced challenge does not exist and
    /// with `Conflict` when the user already answered that challenge.
    async fn insert_submission(&self, new_submission: NewSubmission) -> Result<Submission, AppError>;

    async fn find_question(&self, id: i64) -> Result<Option<Question>, AppError>;
    async fn list_questions(&self, query: &QuestionQuery) -> Result<Vec<Question>, AppError>;
    async fn insert_question(&self, new_question: NewQuestion) -> Result<Question, AppError>;
}
