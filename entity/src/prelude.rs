pub use super::comprehension_question::Entity as ComprehensionQuestion;
pub use super::game_match::Entity as GameMatch;
pub use super::matchmaking_queue::Entity as MatchmakingQueue;
pub use super::profile::Entity as Profile;
pub use super::reading_passage::Entity as ReadingPassage;
pub use super::spelling_word::Entity as SpellingWord;
