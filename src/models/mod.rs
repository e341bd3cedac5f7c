// src/models/mod.rs

pub mod challenge;
pub mod question;
pub mod submission;
pub mod user;
