use std::sync::Arc;

use axum::response::{IntoResponse, Response};
use readclash::server::{error::Error, model::app::AppState, service::chat::ChatService};
use readclash_test_utils::TestSetup;
use tower_sessions::{MemoryStore, Session};

/// App state over the test database with an unconfigured chat service.
pub fn test_state(test: &TestSetup) -> AppState {
    AppState {
        db: test.db.clone(),
        chat: ChatService::new(Default::default()),
    }
}

/// An additional independent session, for tests involving two players.
pub fn second_session() -> Session {
    let store = Arc::new(MemoryStore::default());
    Session::new(None, store, None)
}

/// Collapse a controller result into its HTTP response.
pub fn response_of<T: IntoResponse>(result: Result<T, Error>) -> Response {
    match result {
        Ok(response) => response.into_response(),
        Err(error) => error.into_response(),
    }
}

/// Tables used by the full controller flows.
#[macro_export]
macro_rules! controller_setup {
    () => {
        readclash_test_utils::test_setup_with_tables!(
            entity::prelude::Profile,
            entity::prelude::ReadingPassage,
            entity::prelude::ComprehensionQuestion,
            entity::prelude::SpellingWord,
            entity::prelude::MatchmakingQueue,
            entity::prelude::GameMatch
        )
    };
}
