//! Business logic services.
//!
//! Services coordinate between repositories and hold the rules the
//! controllers expose over HTTP: account registration and login, experience
//! and rank progression, queue pairing, match scoring, leaderboard assembly,
//! and the chat tutor fallback chain.

pub mod auth;
pub mod chat;
pub mod game;
pub mod leaderboard;
pub mod matchmaking;
pub mod progression;
pub mod user;
