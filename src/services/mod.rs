// src/services/mod.rs

pub mod analytics;
pub mod leaderboard;
