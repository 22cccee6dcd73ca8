pub mod battle;
pub mod chat;
pub mod dashboard;
pub mod home;
pub mod leaderboard;
pub mod not_found;

pub use battle::Battle;
pub use chat::Chat;
pub use dashboard::Dashboard;
pub use home::Home;
pub use leaderboard::Leaderboard;
pub use not_found::NotFound;
