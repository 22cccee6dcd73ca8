use readclash_test_utils::prelude::*;

use crate::{
    model::game::{GameType, QueueStatusDto},
    server::{
        data::queue::QueueRepository,
        service::matchmaking::MatchmakingService,
    },
};

async fn setup_players(
    db: &sea_orm::DatabaseConnection,
) -> Result<(entity::profile::Model, entity::profile::Model), sea_orm::DbErr> {
    let one = factory::profile(db, "one").await?;
    let two = factory::profile(db, "two").await?;

    Ok((one, two))
}

macro_rules! matchmaking_setup {
    () => {
        test_setup_with_tables!(
            entity::prelude::Profile,
            entity::prelude::ReadingPassage,
            entity::prelude::ComprehensionQuestion,
            entity::prelude::SpellingWord,
            entity::prelude::MatchmakingQueue,
            entity::prelude::GameMatch
        )
    };
}

/// Expect the first joiner to wait
#[tokio::test]
async fn test_join_empty_queue_waits() -> Result<(), TestError> {
    let test = matchmaking_setup!()?;
    let (one, _) = setup_players(&test.db).await?;
    let service = MatchmakingService::new(&test.db);

    let status = service.join(one.id, GameType::Reading).await.unwrap();

    assert_eq!(
        status,
        QueueStatusDto::Waiting {
            game_type: GameType::Reading
        }
    );

    Ok(())
}

/// Expect the second joiner to be paired with the first and both queue rows
/// to be consumed
#[tokio::test]
async fn test_join_pairs_with_oldest_waiting() -> Result<(), TestError> {
    let test = matchmaking_setup!()?;
    let (one, two) = setup_players(&test.db).await?;
    factory::seed_spelling_words(&test.db).await?;
    let service = MatchmakingService::new(&test.db);
    let queue_repo = QueueRepository::new(&test.db);

    service.join(one.id, GameType::Spelling).await.unwrap();
    let status = service.join(two.id, GameType::Spelling).await.unwrap();

    match status {
        QueueStatusDto::Matched {
            game_type,
            opponent,
            ..
        } => {
            assert_eq!(game_type, GameType::Spelling);
            assert_eq!(opponent.username, "one");
        }
        other => panic!("expected Matched, got {:?}", other),
    }

    assert!(queue_repo.get_by_profile_id(one.id).await?.is_none());
    assert!(queue_repo.get_by_profile_id(two.id).await?.is_none());

    Ok(())
}

/// Expect players queued for different game types not to be paired
#[tokio::test]
async fn test_join_does_not_pair_across_game_types() -> Result<(), TestError> {
    let test = matchmaking_setup!()?;
    let (one, two) = setup_players(&test.db).await?;
    factory::seed_reading_content(&test.db).await?;
    let service = MatchmakingService::new(&test.db);

    service.join(one.id, GameType::Spelling).await.unwrap();
    let status = service.join(two.id, GameType::Reading).await.unwrap();

    assert_eq!(
        status,
        QueueStatusDto::Waiting {
            game_type: GameType::Reading
        }
    );

    Ok(())
}

/// Expect a second join while waiting to be rejected
#[tokio::test]
async fn test_join_while_queued_conflict() -> Result<(), TestError> {
    let test = matchmaking_setup!()?;
    let (one, _) = setup_players(&test.db).await?;
    let service = MatchmakingService::new(&test.db);

    service.join(one.id, GameType::Reading).await.unwrap();
    let result = service.join(one.id, GameType::Reading).await;

    assert!(result.is_err());

    Ok(())
}

/// Expect pairing to fail gracefully when no content has been seeded
#[tokio::test]
async fn test_join_without_content_errors() -> Result<(), TestError> {
    let test = matchmaking_setup!()?;
    let (one, two) = setup_players(&test.db).await?;
    let service = MatchmakingService::new(&test.db);

    service.join(one.id, GameType::Spelling).await.unwrap();
    let result = service.join(two.id, GameType::Spelling).await;

    assert!(result.is_err());

    Ok(())
}

/// Expect status to move Waiting -> Matched -> Idle across the lifecycle
#[tokio::test]
async fn test_status_transitions() -> Result<(), TestError> {
    let test = matchmaking_setup!()?;
    let (one, two) = setup_players(&test.db).await?;
    factory::seed_reading_content(&test.db).await?;
    let service = MatchmakingService::new(&test.db);

    assert_eq!(service.status(one.id).await.unwrap(), QueueStatusDto::Idle);

    service.join(one.id, GameType::Reading).await.unwrap();
    assert_eq!(
        service.status(one.id).await.unwrap(),
        QueueStatusDto::Waiting {
            game_type: GameType::Reading
        }
    );

    service.join(two.id, GameType::Reading).await.unwrap();
    assert!(matches!(
        service.status(one.id).await.unwrap(),
        QueueStatusDto::Matched { .. }
    ));

    Ok(())
}

/// Expect leave to remove only the caller's entry and to be idempotent
#[tokio::test]
async fn test_leave_own_entry_only() -> Result<(), TestError> {
    let test = matchmaking_setup!()?;
    let (one, two) = setup_players(&test.db).await?;
    let service = MatchmakingService::new(&test.db);
    let queue_repo = QueueRepository::new(&test.db);

    service.join(one.id, GameType::Reading).await.unwrap();
    service.join(two.id, GameType::Spelling).await.unwrap();

    service.leave(one.id).await.unwrap();

    assert!(queue_repo.get_by_profile_id(one.id).await?.is_none());
    assert!(queue_repo.get_by_profile_id(two.id).await?.is_some());

    // Leaving again is a no-op
    service.leave(one.id).await.unwrap();

    Ok(())
}
