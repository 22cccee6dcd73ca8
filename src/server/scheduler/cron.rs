use chrono::{Duration, Utc};
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};

use crate::server::data::queue::QueueRepository;

use super::config::queue_sweep;

/// Initialize and start the cron job scheduler
///
/// Currently runs a single job: sweeping abandoned matchmaking queue entries
/// so a closed tab cannot leave a phantom player waiting forever.
pub async fn start_scheduler(db: &DatabaseConnection) -> Result<(), JobSchedulerError> {
    let sched = JobScheduler::new().await?;

    let db_clone = db.clone();

    sched
        .add(Job::new_async(
            queue_sweep::CRON_EXPRESSION,
            move |_, _| {
                let db = db_clone.clone();

                Box::pin(async move {
                    match sweep_stale_queue_entries(&db).await {
                        Ok(0) => (),
                        Ok(count) => {
                            tracing::info!("Swept {} stale matchmaking queue entries", count)
                        }
                        Err(e) => tracing::error!("Error sweeping matchmaking queue: {:?}", e),
                    }
                })
            },
        )?)
        .await?;

    sched.start().await?;

    Ok(())
}

/// Delete queue entries older than the staleness cutoff, returning how many
/// were removed.
pub async fn sweep_stale_queue_entries(db: &DatabaseConnection) -> Result<u64, sea_orm::DbErr> {
    let cutoff =
        (Utc::now() - Duration::minutes(queue_sweep::STALE_AFTER_MINUTES)).naive_utc();

    let result = QueueRepository::new(db).delete_older_than(cutoff).await?;

    Ok(result.rows_affected)
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use readclash_test_utils::prelude::*;
    use sea_orm::{ActiveModelTrait, ActiveValue};

    use crate::server::{
        data::queue::QueueRepository, scheduler::cron::sweep_stale_queue_entries,
    };

    /// Expect the sweep to remove stale entries and leave fresh ones
    #[tokio::test]
    async fn test_sweep_stale_queue_entries() -> Result<(), TestError> {
        let test = test_setup_with_tables!(
            entity::prelude::Profile,
            entity::prelude::MatchmakingQueue
        )?;
        let fresh_profile = factory::profile(&test.db, "fresh").await?;
        let stale_profile = factory::profile(&test.db, "stale").await?;
        let queue_repo = QueueRepository::new(&test.db);

        queue_repo
            .create(fresh_profile.id, entity::GameType::Reading)
            .await?;

        let stale_entry = entity::matchmaking_queue::ActiveModel {
            profile_id: ActiveValue::Set(stale_profile.id),
            game_type: ActiveValue::Set(entity::GameType::Reading),
            created_at: ActiveValue::Set((Utc::now() - Duration::minutes(30)).naive_utc()),
            ..Default::default()
        };
        stale_entry.insert(&test.db).await?;

        let swept = sweep_stale_queue_entries(&test.db).await?;

        assert_eq!(swept, 1);
        assert!(queue_repo
            .get_by_profile_id(fresh_profile.id)
            .await?
            .is_some());
        assert!(queue_repo
            .get_by_profile_id(stale_profile.id)
            .await?
            .is_none());

        Ok(())
    }
}
