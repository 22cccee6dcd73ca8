use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

pub struct QueueRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> QueueRepository<'a> {
    /// Creates a new instance of [`QueueRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert an intent-to-play entry for a profile
    ///
    /// Fails on the unique profile constraint if the profile already has a
    /// pending entry.
    pub async fn create(
        &self,
        profile_id: i32,
        game_type: entity::GameType,
    ) -> Result<entity::matchmaking_queue::Model, DbErr> {
        let entry = entity::matchmaking_queue::ActiveModel {
            profile_id: ActiveValue::Set(profile_id),
            game_type: ActiveValue::Set(game_type),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        entry.insert(self.db).await
    }

    pub async fn get_by_profile_id(
        &self,
        profile_id: i32,
    ) -> Result<Option<entity::matchmaking_queue::Model>, DbErr> {
        entity::prelude::MatchmakingQueue::find()
            .filter(entity::matchmaking_queue::Column::ProfileId.eq(profile_id))
            .one(self.db)
            .await
    }

    /// The longest-waiting entry for a game type, excluding the caller's own
    pub async fn oldest_waiting(
        &self,
        game_type: entity::GameType,
        exclude_profile_id: i32,
    ) -> Result<Option<entity::matchmaking_queue::Model>, DbErr> {
        entity::prelude::MatchmakingQueue::find()
            .filter(entity::matchmaking_queue::Column::GameType.eq(game_type))
            .filter(entity::matchmaking_queue::Column::ProfileId.ne(exclude_profile_id))
            .order_by_asc(entity::matchmaking_queue::Column::CreatedAt)
            .order_by_asc(entity::matchmaking_queue::Column::Id)
            .one(self.db)
            .await
    }

    /// Delete a specific entry by its row id
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::MatchmakingQueue::delete_by_id(id)
            .exec(self.db)
            .await
    }

    /// Delete the pending entry owned by a profile, and no others
    ///
    /// Returns OK regardless of an entry existing; check
    /// [`DeleteResult::rows_affected`] for the outcome.
    pub async fn delete_by_profile_id(&self, profile_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::MatchmakingQueue::delete_many()
            .filter(entity::matchmaking_queue::Column::ProfileId.eq(profile_id))
            .exec(self.db)
            .await
    }

    /// Delete entries created before the cutoff, used by the stale sweep
    pub async fn delete_older_than(&self, cutoff: NaiveDateTime) -> Result<DeleteResult, DbErr> {
        entity::prelude::MatchmakingQueue::delete_many()
            .filter(entity::matchmaking_queue::Column::CreatedAt.lt(cutoff))
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use readclash_test_utils::prelude::*;

    use crate::server::data::{profile::ProfileRepository, queue::QueueRepository};

    async fn setup_profiles(
        db: &sea_orm::DatabaseConnection,
    ) -> Result<(entity::profile::Model, entity::profile::Model), sea_orm::DbErr> {
        let repo = ProfileRepository::new(db);
        let one = repo
            .create("one".to_string(), "hash".to_string(), "fox".to_string())
            .await?;
        let two = repo
            .create("two".to_string(), "hash".to_string(), "owl".to_string())
            .await?;

        Ok((one, two))
    }

    mod create_tests {
        use super::*;

        /// Expect success when inserting a queue entry
        #[tokio::test]
        async fn test_create_queue_entry_success() -> Result<(), TestError> {
            let test = test_setup_with_tables!(
                entity::prelude::Profile,
                entity::prelude::MatchmakingQueue
            )?;
            let (one, _) = setup_profiles(&test.db).await?;
            let repo = QueueRepository::new(&test.db);

            let entry = repo.create(one.id, entity::GameType::Reading).await?;

            assert_eq!(entry.profile_id, one.id);
            assert_eq!(entry.game_type, entity::GameType::Reading);

            Ok(())
        }

        /// Expect error when the profile already has a pending entry
        #[tokio::test]
        async fn test_create_queue_entry_duplicate_error() -> Result<(), TestError> {
            let test = test_setup_with_tables!(
                entity::prelude::Profile,
                entity::prelude::MatchmakingQueue
            )?;
            let (one, _) = setup_profiles(&test.db).await?;
            let repo = QueueRepository::new(&test.db);

            repo.create(one.id, entity::GameType::Reading).await?;
            let result = repo.create(one.id, entity::GameType::Spelling).await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod delete_by_profile_id_tests {
        use super::*;

        /// Expect only the caller's entry to be removed
        #[tokio::test]
        async fn test_delete_own_entry_only() -> Result<(), TestError> {
            let test = test_setup_with_tables!(
                entity::prelude::Profile,
                entity::prelude::MatchmakingQueue
            )?;
            let (one, two) = setup_profiles(&test.db).await?;
            let repo = QueueRepository::new(&test.db);

            repo.create(one.id, entity::GameType::Reading).await?;
            repo.create(two.id, entity::GameType::Reading).await?;

            let result = repo.delete_by_profile_id(one.id).await?;

            assert_eq!(result.rows_affected, 1);
            assert!(repo.get_by_profile_id(one.id).await?.is_none());
            assert!(repo.get_by_profile_id(two.id).await?.is_some());

            Ok(())
        }

        /// Expect no rows affected when the profile is not queued
        #[tokio::test]
        async fn test_delete_not_queued_noop() -> Result<(), TestError> {
            let test = test_setup_with_tables!(
                entity::prelude::Profile,
                entity::prelude::MatchmakingQueue
            )?;
            let (one, _) = setup_profiles(&test.db).await?;
            let repo = QueueRepository::new(&test.db);

            let result = repo.delete_by_profile_id(one.id).await?;

            assert_eq!(result.rows_affected, 0);

            Ok(())
        }
    }

    mod oldest_waiting_tests {
        use super::*;

        /// Expect the longest-waiting compatible entry, never the caller's own
        #[tokio::test]
        async fn test_oldest_waiting_excludes_caller() -> Result<(), TestError> {
            let test = test_setup_with_tables!(
                entity::prelude::Profile,
                entity::prelude::MatchmakingQueue
            )?;
            let (one, two) = setup_profiles(&test.db).await?;
            let repo = QueueRepository::new(&test.db);

            repo.create(one.id, entity::GameType::Spelling).await?;
            repo.create(two.id, entity::GameType::Spelling).await?;

            let found = repo
                .oldest_waiting(entity::GameType::Spelling, two.id)
                .await?;

            assert_eq!(found.unwrap().profile_id, one.id);

            Ok(())
        }

        /// Expect None when only entries of another game type wait
        #[tokio::test]
        async fn test_oldest_waiting_game_type_mismatch() -> Result<(), TestError> {
            let test = test_setup_with_tables!(
                entity::prelude::Profile,
                entity::prelude::MatchmakingQueue
            )?;
            let (one, two) = setup_profiles(&test.db).await?;
            let repo = QueueRepository::new(&test.db);

            repo.create(one.id, entity::GameType::Reading).await?;

            let found = repo
                .oldest_waiting(entity::GameType::Spelling, two.id)
                .await?;

            assert!(found.is_none());

            Ok(())
        }
    }

    mod delete_older_than_tests {
        use super::*;
        use chrono::{Duration, Utc};
        use sea_orm::{ActiveModelTrait, ActiveValue};

        /// Expect only entries beyond the cutoff to be swept
        #[tokio::test]
        async fn test_delete_older_than_cutoff() -> Result<(), TestError> {
            let test = test_setup_with_tables!(
                entity::prelude::Profile,
                entity::prelude::MatchmakingQueue
            )?;
            let (one, two) = setup_profiles(&test.db).await?;
            let repo = QueueRepository::new(&test.db);

            // Backdate one entry past the cutoff
            let stale = entity::matchmaking_queue::ActiveModel {
                profile_id: ActiveValue::Set(one.id),
                game_type: ActiveValue::Set(entity::GameType::Reading),
                created_at: ActiveValue::Set(
                    (Utc::now() - Duration::minutes(10)).naive_utc(),
                ),
                ..Default::default()
            };
            stale.insert(&test.db).await?;
            repo.create(two.id, entity::GameType::Reading).await?;

            let cutoff = (Utc::now() - Duration::minutes(5)).naive_utc();
            let result = repo.delete_older_than(cutoff).await?;

            assert_eq!(result.rows_affected, 1);
            assert!(repo.get_by_profile_id(one.id).await?.is_none());
            assert!(repo.get_by_profile_id(two.id).await?.is_some());

            Ok(())
        }
    }
}
