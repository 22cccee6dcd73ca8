pub use sea_orm_migration::prelude::*;

mod m20260115_000001_reading_passage;
mod m20260115_000002_comprehension_question;
mod m20260115_000003_spelling_word;
mod m20260115_000004_profile;
mod m20260115_000005_game_match;
mod m20260115_000006_matchmaking_queue;
mod m20260115_000007_seed_content;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260115_000001_reading_passage::Migration),
            Box::new(m20260115_000002_comprehension_question::Migration),
            Box::new(m20260115_000003_spelling_word::Migration),
            Box::new(m20260115_000004_profile::Migration),
            Box::new(m20260115_000005_game_match::Migration),
            Box::new(m20260115_000006_matchmaking_queue::Migration),
            Box::new(m20260115_000007_seed_content::Migration),
        ]
    }
}
