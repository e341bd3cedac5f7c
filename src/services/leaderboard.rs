// src/services/leaderboard.rs

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{
    config::{POINTS_PER_CORRECT, TIME_PENALTY_DIVISOR},
    models::{submission::Submission, user::User},
};

/// Restricts which students take part in a ranking. Absent fields match everyone.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct LeaderboardFilter {
    pub class: Option<String>,
    pub semester: Option<u32>,
}

impl LeaderboardFilter {
    pub fn matches(&self, student: &User) -> bool {
        self.class
            .as_ref()
            .is_none_or(|class| student.class.as_ref() == Some(class))
            && self.semester.is_none_or(|sem| student.semester == Some(sem))
    }
}

/// One ranked row: student identity plus the computed metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub class: Option<String>,
    pub semester: Option<u32>,
    pub total_submissions: usize,
    pub correct_submissions: usize,
    /// Percentage of correct submissions, 0 when there are none.
    pub accuracy: f64,
    /// Mean seconds per submission, 0 when there are none.
    pub average_time: f64,
    /// `correct * 10 - averageTime / 10`. Can be negative.
    pub score: f64,
}

#[derive(Debug, Default, Clone, Copy)]
struct Tally {
    total: usize,
    correct: usize,
    time_sum: u64,
}

/// Builds the ranked leaderboard for the students passing `filter`.
///
/// Students without submissions are kept with zeroed metrics. The sort is
/// stable, so tied scores keep the order of `students`.
pub fn compute_leaderboard(
    submissions: &[Submission],
    students: &[User],
    filter: &LeaderboardFilter,
) -> Vec<LeaderboardEntry> {
    let mut tallies: HashMap<i64, Tally> = HashMap::new();
    for s in submissions {
        let tally = tallies.entry(s.user_id).or_default();
        tally.total += 1;
        if s.is_correct {
            tally.correct += 1;
        }
        tally.time_sum += u64::from(s.time_spent);
    }

    let mut entries: Vec<LeaderboardEntry> = students
        .iter()
        .filter(|student| filter.matches(student))
        .map(|student| {
            let tally = tallies.get(&student.id).copied().unwrap_or_default();
            entry_for(student, tally)
        })
        .collect();

    entries.sort_by(|a, b| b.score.total_cmp(&a.score));
    entries
}

fn entry_for(student: &User, tally: Tally) -> LeaderboardEntry {
    let (accuracy, average_time) = if tally.total == 0 {
        (0.0, 0.0)
    } else {
        let total = tally.total as f64;
        (
            tally.correct as f64 / total * 100.0,
            tally.time_sum as f64 / total,
        )
    };

    LeaderboardEntry {
        id: student.id,
        name: student.name.clone(),
        username: student.username.clone(),
        class: student.class.clone(),
        semester: student.semester,
        total_submissions: tally.total,
        correct_submissions: tally.correct,
        accuracy,
        average_time,
        score: score(tally.correct, average_time),
    }
}

fn score(correct: usize, average_time: f64) -> f64 {
    correct as f64 * POINTS_PER_CORRECT - average_time / TIME_PENALTY_DIVISOR
}

/// 1-based position of `user_id` in an already ranked list.
pub fn rank_of(entries: &[LeaderboardEntry], user_id: i64) -> Option<usize> {
    entries.iter().position(|e| e.id == user_id).map(|i| i + 1)
}
