// src/config.rs

use std::env;
use dotenvy::dotenv;

/// Points awarded per correct submission on the leaderboard.
pub const POINTS_PER_CORRECT: f64 = 10.0;

/// Average time (seconds) is divided by this before being subtracted from the score.
pub const TIME_PENALTY_DIVISOR: f64 = 10.0;

/// Number of leaderboard entries reported as top performers in analytics.
pub const TOP_PERFORMERS_COUNT: usize = 5;

#[derive(Debug, Clone)]
pub struct Config {
    pub jwt_secret: String,
    /// Token lifetime in seconds.
    pub jwt_expiration: u64,
    pub rust_log: String,
    pub port: u16,
    /// Populate the store with demo users, challenges and questions at startup.
    pub seed_demo_data: bool,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let jwt_secret = env::var("JWT_SECRET")
            .expect("JWT_SECRET must be set");

        let jwt_expiration = env::var("JWT_EXPIRATION")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(86_400);

        let rust_log = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string());

        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(8080);

        let seed_demo_data = env::var("SEED_DEMO_DATA")
            .map(|v| !matches!(v.to_ascii_lowercase().as_str(), "0" | "false" | "no"))
            .unwrap_or(true);

        Self {
            jwt_secret,
            jwt_expiration,
            rust_log,
            port,
            seed_demo_data,
        }
    }
}
