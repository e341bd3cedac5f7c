// src/handlers/mod.rs

pub mod analytics;
pub mod auth;
pub mod challenge;
pub mod leaderboard;
pub mod question;
pub mod submission;
