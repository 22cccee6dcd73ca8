use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

/// Read access to the seeded quiz content tables.
pub struct ContentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContentRepository<'a> {
    /// Creates a new instance of [`ContentRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn all_passages(&self) -> Result<Vec<entity::reading_passage::Model>, DbErr> {
        entity::prelude::ReadingPassage::find().all(self.db).await
    }

    pub async fn get_passage(
        &self,
        passage_id: i32,
    ) -> Result<Option<entity::reading_passage::Model>, DbErr> {
        entity::prelude::ReadingPassage::find_by_id(passage_id)
            .one(self.db)
            .await
    }

    /// Questions for a passage in their stored order
    pub async fn questions_for(
        &self,
        passage_id: i32,
    ) -> Result<Vec<entity::comprehension_question::Model>, DbErr> {
        entity::prelude::ComprehensionQuestion::find()
            .filter(entity::comprehension_question::Column::PassageId.eq(passage_id))
            .order_by_asc(entity::comprehension_question::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn all_words(&self) -> Result<Vec<entity::spelling_word::Model>, DbErr> {
        entity::prelude::SpellingWord::find().all(self.db).await
    }

    pub async fn words_by_ids(
        &self,
        word_ids: Vec<i32>,
    ) -> Result<Vec<entity::spelling_word::Model>, DbErr> {
        entity::prelude::SpellingWord::find()
            .filter(entity::spelling_word::Column::Id.is_in(word_ids))
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use readclash_test_utils::prelude::*;

    use crate::server::data::content::ContentRepository;

    /// Expect questions to come back in stored order for the right passage
    #[tokio::test]
    async fn test_questions_for_passage() -> Result<(), TestError> {
        let test = test_setup_with_tables!(
            entity::prelude::ReadingPassage,
            entity::prelude::ComprehensionQuestion
        )?;

        let passage = factory::passage(&test.db, "The Water Cycle").await?;
        let other = factory::passage(&test.db, "Volcanoes").await?;
        let first = factory::question(&test.db, passage.id, "What is rain?", 0).await?;
        let second = factory::question(&test.db, passage.id, "What is snow?", 1).await?;
        factory::question(&test.db, other.id, "What is lava?", 2).await?;

        let questions = ContentRepository::new(&test.db)
            .questions_for(passage.id)
            .await?;

        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].id, first.id);
        assert_eq!(questions[1].id, second.id);

        Ok(())
    }

    /// Expect only the requested words back
    #[tokio::test]
    async fn test_words_by_ids() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::SpellingWord)?;

        let first = factory::word(&test.db, "because", 1).await?;
        factory::word(&test.db, "rhythm", 2).await?;
        let third = factory::word(&test.db, "necessary", 2).await?;

        let words = ContentRepository::new(&test.db)
            .words_by_ids(vec![first.id, third.id])
            .await?;

        let mut found: Vec<String> = words.into_iter().map(|w| w.word).collect();
        found.sort();

        assert_eq!(found, vec!["because".to_string(), "necessary".to_string()]);

        Ok(())
    }
}
