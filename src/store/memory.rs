// src/store/memory.rs

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::Store;
use crate::{
    error::AppError,
    models::{
        challenge::{Challenge, ChallengeQuery, NewChallenge},
        question::{NewQuestion, Question, QuestionQuery},
        submission::{NewSubmission, Submission, SubmissionQuery},
        user::{NewUser, Role, User},
    },
};

/// Monotonic id source. Ids start at 1 and are never handed out twice.
#[derive(Debug)]
pub struct IdSequence(AtomicI64);

impl IdSequence {
    pub fn new() -> Self {
        Self(AtomicI64::new(1))
    }

    pub fn next(&self) -> i64 {
        self.0.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Default)]
struct Tables {
    users: Vec<User>,
    challenges: Vec<Challenge>,
    submissions: Vec<Submission>,
    questions: Vec<Question>,
}

/// Process-local store. Everything is lost on restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
    user_ids: IdSequence,
    challenge_ids: IdSequence,
    submission_ids: IdSequence,
    question_ids: IdSequence,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn find_user(&self, id: i64) -> Result<Option<User>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.username == username).cloned())
    }

    async fn list_users(&self, role: Option<Role>) -> Result<Vec<User>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables
            .users
            .iter()
            .filter(|u| role.is_none_or(|r| u.role == r))
            .cloned()
            .collect())
    }

    async fn insert_user(&self, new_user: NewUser) -> Result<User, AppError> {
        let mut tables = self.tables.write().await;

        if tables.users.iter().any(|u| u.username == new_user.username) {
            return Err(AppError::Conflict(format!(
                "Username '{}' already exists",
                new_user.username
            )));
        }

        let user = User {
            id: self.user_ids.next(),
            username: new_user.username,
            password: new_user.password_hash,
            role: new_user.role,
            name: new_user.name,
            email: new_user.email,
            department: new_user.department,
            class: new_user.class,
            semester: new_user.semester,
            created_at: Utc::now(),
        };
        tables.users.push(user.clone());

        Ok(user)
    }

    async fn find_challenge(&self, id: i64) -> Result<Option<Challenge>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables.challenges.iter().find(|c| c.id == id).cloned())
    }

    async fn list_challenges(&self, query: &ChallengeQuery) -> Result<Vec<Challenge>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables
            .challenges
            .iter()
            .filter(|c| query.matches(c))
            .cloned()
            .collect())
    }

    async fn insert_challenge(&self, new_challenge: NewChallenge) -> Result<Challenge, AppError> {
        let mut tables = self.tables.write().await;

        let challenge = Challenge {
            id: self.challenge_ids.next(),
            title: new_challenge.title,
            question: new_challenge.question,
            options: new_challenge.options,
            correct_answer: new_challenge.correct_answer,
            difficulty: new_challenge.difficulty,
            created_by: new_challenge.created_by,
            created_at: Utc::now(),
            due_date: new_challenge.due_date,
            image_url: new_challenge.image_url,
            class: new_challenge.class,
            semester: new_challenge.semester,
        };
        tables.challenges.push(challenge.clone());

        Ok(challenge)
    }

    async fn list_submissions(&self, query: &SubmissionQuery) -> Result<Vec<Submission>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables
            .submissions
            .iter()
            .filter(|s| query.matches(s))
            .cloned()
            .collect())
    }

    async fn insert_submission(&self, new_submission: NewSubmission) -> Result<Submission, AppError> {
        let mut tables = self.tables.write().await;

        if !tables
            .challenges
            .iter()
            .any(|c| c.id == new_submission.challenge_id)
        {
            return Err(AppError::NotFound("Challenge not found".to_string()));
        }

        if tables.submissions.iter().any(|s| {
            s.user_id == new_submission.user_id && s.challenge_id == new_submission.challenge_id
        }) {
            return Err(AppError::Conflict("Challenge already answered".to_string()));
        }

        let submission = Submission {
            id: self.submission_ids.next(),
            challenge_id: new_submission.challenge_id,
            user_id: new_submission.user_id,
            answer: new_submission.answer,
            is_correct: new_submission.is_correct,
            submitted_at: Utc::now(),
            time_spent: new_submission.time_spent,
            image_url: new_submission.image_url,
        };
        tables.submissions.push(submission.clone());

        Ok(submission)
    }

    async fn find_question(&self, id: i64) -> Result<Option<Question>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables.questions.iter().find(|q| q.id == id).cloned())
    }

    async fn list_questions(&self, query: &QuestionQuery) -> Result<Vec<Question>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .iter()
            .filter(|q| query.matches(q))
            .cloned()
            .collect())
    }

    async fn insert_question(&self, new_question: NewQuestion) -> Result<Question, AppError> {
        let mut tables = self.tables.write().await;

        let question = Question {
            id: self.question_ids.next(),
            title: new_question.title,
            difficulty: new_question.difficulty,
            topic: new_question.topic,
            description: new_question.description,
            starter_code: new_question.starter_code,
            test_cases: new_question.test_cases,
            created_by: new_question.created_by,
            created_at: Utc::now(),
        };
        tables.questions.push(question.clone());

        Ok(question)
    }
}
