mod auth;
mod chat;
mod game;
mod leaderboard;
mod matchmaking;
