use sea_orm::DatabaseConnection;

use crate::server::service::chat::ChatService;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub chat: ChatService,
}

impl From<(DatabaseConnection, ChatService)> for AppState {
    fn from((db, chat): (DatabaseConnection, ChatService)) -> Self {
        Self { db, chat }
    }
}
