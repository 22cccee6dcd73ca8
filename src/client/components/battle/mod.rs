pub mod reading_game;
pub mod result_card;
pub mod spelling_game;

pub use reading_game::ReadingGame;
pub use result_card::ResultCard;
pub use spelling_game::SpellingGame;
