pub mod api;
pub mod chat;
pub mod game;
pub mod leaderboard;
pub mod user;
