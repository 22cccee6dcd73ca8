//! HTTP controllers.
//!
//! Thin request handlers: extract the session, delegate to a service, map
//! the outcome to a response. Each endpoint carries its utoipa annotation for
//! the generated API documentation.

pub mod auth;
pub mod chat;
pub mod game;
pub mod leaderboard;
pub mod matchmaking;
pub mod user;
pub mod util;
