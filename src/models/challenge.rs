// src/models/challenge.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use url::Url;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// One selectable answer of a multiple-choice challenge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ChallengeOption {
    #[validate(length(min = 1, max = 20))]
    pub id: String,
    #[validate(length(min = 1, max = 500))]
    pub text: String,
}

/// A question assigned to students.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    pub id: i64,
    pub title: String,
    pub question: String,
    pub options: Vec<ChallengeOption>,
    pub correct_answer: String,
    pub difficulty: Difficulty,
    /// Id of the authoring teacher.
    pub created_by: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub due_date: Option<NaiveDate>,
    pub image_url: Option<String>,
    pub class: Option<String>,
    pub semester: Option<u32>,
}

impl Challenge {
    /// Strict string matching against the stored answer key.
    pub fn check_answer(&self, answer: &str) -> bool {
        answer == self.correct_answer
    }
}

/// DTO for sending a challenge to students (excludes the answer key).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicChallenge {
    pub id: i64,
    pub title: String,
    pub question: String,
    pub options: Vec<ChallengeOption>,
    pub difficulty: Difficulty,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub due_date: Option<NaiveDate>,
    pub image_url: Option<String>,
    pub class: Option<String>,
    pub semester: Option<u32>,
}

impl From<Challenge> for PublicChallenge {
    fn from(c: Challenge) -> Self {
        Self {
            id: c.id,
            title: c.title,
            question: c.question,
            options: c.options,
            difficulty: c.difficulty,
            created_at: c.created_at,
            due_date: c.due_date,
            image_url: c.image_url,
            class: c.class,
            semester: c.semester,
        }
    }
}

/// Data needed by the store to append a challenge.
#[derive(Debug, Clone)]
pub struct NewChallenge {
    pub title: String,
    pub question: String,
    pub options: Vec<ChallengeOption>,
    pub correct_answer: String,
    pub difficulty: Difficulty,
    pub created_by: i64,
    pub due_date: Option<NaiveDate>,
    pub image_url: Option<String>,
    pub class: Option<String>,
    pub semester: Option<u32>,
}

/// Filters for listing challenges. Absent fields do not restrict.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ChallengeQuery {
    pub class: Option<String>,
    pub semester: Option<u32>,
    pub difficulty: Option<Difficulty>,
}

impl ChallengeQuery {
    pub fn matches(&self, c: &Challenge) -> bool {
        self.class.as_ref().is_none_or(|class| c.class.as_ref() == Some(class))
            && self.semester.is_none_or(|sem| c.semester == Some(sem))
            && self.difficulty.is_none_or(|d| c.difficulty == d)
    }
}

/// DTO for creating a new challenge.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = validate_answer_is_option))]
pub struct CreateChallengeRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1, max = 5000))]
    pub question: String,
    #[validate(length(min = 2, max = 10), nested)]
    pub options: Vec<ChallengeOption>,
    #[validate(length(min = 1, max = 20))]
    pub correct_answer: String,
    pub difficulty: Difficulty,
    pub due_date: Option<NaiveDate>,
    #[validate(length(max = 500), custom(function = validate_url_string))]
    pub image_url: Option<String>,
    #[validate(length(min = 1, max = 50))]
    pub class: Option<String>,
    #[validate(range(min = 1, max = 12))]
    pub semester: Option<u32>,
}

/// The answer key must name one of the option ids.
fn validate_answer_is_option(req: &CreateChallengeRequest) -> Result<(), validator::ValidationError> {
    if !req.options.iter().any(|o| o.id == req.correct_answer) {
        return Err(validator::ValidationError::new("correct_answer_not_an_option"));
    }
    Ok(())
}

/// Validates that a string is a correctly formatted URL.
pub(crate) fn validate_url_string(url: &str) -> Result<(), validator::ValidationError> {
    if Url::parse(url).is_err() {
        return Err(validator::ValidationError::new("invalid_url"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(id: &str, text: &str) -> ChallengeOption {
        ChallengeOption {
            id: id.to_string(),
            text: text.to_string(),
        }
    }

    fn request() -> CreateChallengeRequest {
        CreateChallengeRequest {
            title: "HTML5".to_string(),
            question: "Which element is used to get highlighted text in HTML5?".to_string(),
            options: vec![option("u", "<u>"), option("mark", "<mark>")],
            correct_answer: "mark".to_string(),
            difficulty: Difficulty::Easy,
            due_date: None,
            image_url: None,
            class: None,
            semester: None,
        }
    }

    #[test]
    fn answer_must_be_one_of_the_options() {
        assert!(request().validate().is_ok());

        let mut req = request();
        req.correct_answer = "highlight".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn image_url_must_parse() {
        let mut req = request();
        req.image_url = Some("not a url".to_string());
        assert!(req.validate().is_err());

        req.image_url = Some("https://example.com/diagram.png".to_string());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn query_matches_only_given_fields() {
        let challenge = Challenge {
            id: 1,
            title: "t".to_string(),
            question: "q".to_string(),
            options: vec![],
            correct_answer: "A".to_string(),
            difficulty: Difficulty::Medium,
            created_by: 1,
            created_at: chrono::Utc::now(),
            due_date: None,
            image_url: None,
            class: Some("CS 101".to_string()),
            semester: Some(2),
        };

        assert!(ChallengeQuery::default().matches(&challenge));
        assert!(ChallengeQuery {
            class: Some("CS 101".to_string()),
            ..Default::default()
        }
        .matches(&challenge));
        assert!(!ChallengeQuery {
            semester: Some(1),
            ..Default::default()
        }
        .matches(&challenge));
        assert!(!ChallengeQuery {
            difficulty: Some(Difficulty::Hard),
            ..Default::default()
        }
        .matches(&challenge));
        assert!(challenge.check_answer("A"));
        assert!(!challenge.check_answer("a"));
    }
}
