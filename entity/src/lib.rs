pub mod comprehension_question;
pub mod game_match;
pub mod matchmaking_queue;
pub mod profile;
pub mod reading_passage;
pub mod spelling_word;

pub mod prelude;

pub use game_match::{GameType, MatchStatus};
