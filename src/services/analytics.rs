// src/services/analytics.rs

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::{
    config::TOP_PERFORMERS_COUNT,
    models::{
        challenge::{Challenge, Difficulty},
        submission::Submission,
        user::User,
    },
    services::leaderboard::{LeaderboardEntry, LeaderboardFilter, compute_leaderboard},
};

/// Per-challenge attempt statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengePerformance {
    pub challenge_id: i64,
    pub title: String,
    pub difficulty: Difficulty,
    pub attempts: usize,
    pub correct: usize,
    pub success_rate: f64,
    pub average_time: f64,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct DifficultyBreakdown {
    pub easy: usize,
    pub medium: usize,
    pub hard: usize,
}

/// Aggregate figures for the teacher dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    pub total_students: usize,
    pub total_challenges: usize,
    pub total_submissions: usize,
    pub overall_accuracy: f64,
    pub average_time: f64,
    pub challenge_performance: Vec<ChallengePerformance>,
    pub difficulty_breakdown: DifficultyBreakdown,
    pub top_performers: Vec<LeaderboardEntry>,
}

/// Summarises activity of the students passing `filter`.
///
/// Submissions by students outside the filter (or by unknown users) are not counted.
pub fn compute_analytics(
    challenges: &[Challenge],
    submissions: &[Submission],
    students: &[User],
    filter: &LeaderboardFilter,
) -> AnalyticsReport {
    let in_scope: HashSet<i64> = students
        .iter()
        .filter(|s| filter.matches(s))
        .map(|s| s.id)
        .collect();

    let counted: Vec<&Submission> = submissions
        .iter()
        .filter(|s| in_scope.contains(&s.user_id))
        .collect();

    let total_submissions = counted.len();
    let correct = counted.iter().filter(|s| s.is_correct).count();
    let time_sum: u64 = counted.iter().map(|s| u64::from(s.time_spent)).sum();

    let mut per_challenge: HashMap<i64, (usize, usize, u64)> = HashMap::new();
    for s in &counted {
        let slot = per_challenge.entry(s.challenge_id).or_default();
        slot.0 += 1;
        if s.is_correct {
            slot.1 += 1;
        }
        slot.2 += u64::from(s.time_spent);
    }

    let challenge_performance = challenges
        .iter()
        .map(|c| {
            let (attempts, correct, time_sum) = per_challenge.get(&c.id).copied().unwrap_or_default();
            ChallengePerformance {
                challenge_id: c.id,
                title: c.title.clone(),
                difficulty: c.difficulty,
                attempts,
                correct,
                success_rate: percentage(correct, attempts),
                average_time: mean(time_sum, attempts),
            }
        })
        .collect();

    let mut difficulty_breakdown = DifficultyBreakdown::default();
    for c in challenges {
        match c.difficulty {
            Difficulty::Easy => difficulty_breakdown.easy += 1,
            Difficulty::Medium => difficulty_breakdown.medium += 1,
            Difficulty::Hard => difficulty_breakdown.hard += 1,
        }
    }

    let mut top_performers = compute_leaderboard(submissions, students, filter);
    top_performers.truncate(TOP_PERFORMERS_COUNT);

    AnalyticsReport {
        total_students: in_scope.len(),
        total_challenges: challenges.len(),
        total_submissions,
        overall_accuracy: percentage(correct, total_submissions),
        average_time: mean(time_sum, total_submissions),
        challenge_performance,
        difficulty_breakdown,
        top_performers,
    }
}

fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

fn mean(sum: u64, count: usize) -> f64 {
    if count == 0 { 0.0 } else { sum as f64 / count as f64 }
}
