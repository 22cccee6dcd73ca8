use readclash_test_utils::prelude::*;

use crate::{
    model::game::{GameType, MatchContentDto, MatchOutcome, QueueStatusDto},
    server::{
        data::profile::ProfileRepository,
        service::{game::MatchService, matchmaking::MatchmakingService, progression},
    },
};

macro_rules! match_setup {
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

/// Pair two players into a reading match and return (one, two, match_id).
async fn paired_reading_match(
    db: &sea_orm::DatabaseConnection,
) -> Result<(entity::profile::Model, entity::profile::Model, i32), TestError> {
    let one = factory::profile(db, "one").await?;
    let two = factory::profile(db, "two").await?;
    factory::seed_reading_content(db).await?;

    let service = MatchmakingService::new(db);
    service.join(one.id, GameType::Reading).await.unwrap();
    let status = service.join(two.id, GameType::Reading).await.unwrap();

    let match_id = match status {
        QueueStatusDto::Matched { match_id, .. } => match_id,
        other => panic!("expected Matched, got {:?}", other),
    };

    Ok((one, two, match_id))
}

mod content_tests {
    use super::*;

    /// Expect both participants to receive the same passage and questions
    #[tokio::test]
    async fn test_content_same_for_both_players() -> Result<(), TestError> {
        let test = match_setup!()?;
        let (one, two, match_id) = paired_reading_match(&test.db).await?;
        let service = MatchService::new(&test.db);

        let for_one = service.content(one.id, match_id).await.unwrap();
        let for_two = service.content(two.id, match_id).await.unwrap();

        assert_eq!(for_one, for_two);

        match for_one {
            MatchContentDto::Reading { questions, .. } => {
                assert!(!questions.is_empty());
            }
            other => panic!("expected reading content, got {:?}", other),
        }

        Ok(())
    }

    /// Expect a non-participant to be rejected
    #[tokio::test]
    async fn test_content_non_participant_forbidden() -> Result<(), TestError> {
        let test = match_setup!()?;
        let (_, _, match_id) = paired_reading_match(&test.db).await?;
        let outsider = factory::profile(&test.db, "outsider").await?;
        let service = MatchService::new(&test.db);

        let result = service.content(outsider.id, match_id).await;

        assert!(result.is_err());

        Ok(())
    }
}

mod report_tests {
    use super::*;

    /// Expect the first report to leave the match running
    #[tokio::test]
    async fn test_first_report_keeps_match_open() -> Result<(), TestError> {
        let test = match_setup!()?;
        let (one, _, match_id) = paired_reading_match(&test.db).await?;
        let service = MatchService::new(&test.db);

        let result = service.report(one.id, match_id, 2, 3).await.unwrap();

        assert!(!result.completed);
        assert_eq!(result.your_score, Some(2));
        assert!(result.opponent_score.is_none());
        assert!(result.outcome.is_none());

        Ok(())
    }

    /// Expect the second report to settle the match and award experience
    #[tokio::test]
    async fn test_second_report_settles_match() -> Result<(), TestError> {
        let test = match_setup!()?;
        let (one, two, match_id) = paired_reading_match(&test.db).await?;
        let service = MatchService::new(&test.db);
        let profile_repo = ProfileRepository::new(&test.db);

        service.report(one.id, match_id, 1, 3).await.unwrap();
        let result = service.report(two.id, match_id, 3, 3).await.unwrap();

        assert!(result.completed);
        assert_eq!(result.outcome, Some(MatchOutcome::Won));
        assert_eq!(
            result.experience_gained,
            Some(progression::experience_for(3, 3, true))
        );

        let winner = profile_repo.get_by_id(two.id).await?.unwrap();
        let loser = profile_repo.get_by_id(one.id).await?.unwrap();

        assert_eq!(winner.experience, progression::experience_for(3, 3, true));
        assert_eq!(loser.experience, progression::experience_for(1, 3, false));

        Ok(())
    }

    /// Expect equal scores to settle as a draw with no winner
    #[tokio::test]
    async fn test_equal_scores_draw() -> Result<(), TestError> {
        let test = match_setup!()?;
        let (one, two, match_id) = paired_reading_match(&test.db).await?;
        let service = MatchService::new(&test.db);

        service.report(one.id, match_id, 2, 3).await.unwrap();
        let result = service.report(two.id, match_id, 2, 3).await.unwrap();

        assert!(result.completed);
        assert_eq!(result.outcome, Some(MatchOutcome::Draw));

        Ok(())
    }

    /// Expect a second report from the same player to be rejected
    #[tokio::test]
    async fn test_double_report_conflict() -> Result<(), TestError> {
        let test = match_setup!()?;
        let (one, _, match_id) = paired_reading_match(&test.db).await?;
        let service = MatchService::new(&test.db);

        service.report(one.id, match_id, 2, 3).await.unwrap();
        let result = service.report(one.id, match_id, 3, 3).await;

        assert!(result.is_err());

        Ok(())
    }

    /// Expect any report after completion to be rejected
    #[tokio::test]
    async fn test_report_after_completion_conflict() -> Result<(), TestError> {
        let test = match_setup!()?;
        let (one, two, match_id) = paired_reading_match(&test.db).await?;
        let service = MatchService::new(&test.db);

        service.report(one.id, match_id, 2, 3).await.unwrap();
        service.report(two.id, match_id, 1, 3).await.unwrap();
        let result = service.report(one.id, match_id, 2, 3).await;

        assert!(result.is_err());

        Ok(())
    }

    /// Expect a report with the wrong question count to be rejected
    #[tokio::test]
    async fn test_report_wrong_total_rejected() -> Result<(), TestError> {
        let test = match_setup!()?;
        let (one, _, match_id) = paired_reading_match(&test.db).await?;
        let service = MatchService::new(&test.db);

        let result = service.report(one.id, match_id, 2, 10).await;

        assert!(result.is_err());

        Ok(())
    }

    /// Expect an out-of-range score to be clamped to the question count
    #[tokio::test]
    async fn test_report_score_clamped() -> Result<(), TestError> {
        let test = match_setup!()?;
        let (one, _, match_id) = paired_reading_match(&test.db).await?;
        let service = MatchService::new(&test.db);

        let result = service.report(one.id, match_id, 99, 3).await.unwrap();

        assert_eq!(result.your_score, Some(3));

        Ok(())
    }
}

mod history_tests {
    use super::*;

    /// Expect completed matches to show up in both players' histories
    #[tokio::test]
    async fn test_history_after_completion() -> Result<(), TestError> {
        let test = match_setup!()?;
        let (one, two, match_id) = paired_reading_match(&test.db).await?;
        let service = MatchService::new(&test.db);

        service.report(one.id, match_id, 3, 3).await.unwrap();
        service.report(two.id, match_id, 1, 3).await.unwrap();

        let history_one = service.history(one.id).await.unwrap();
        let history_two = service.history(two.id).await.unwrap();

        assert_eq!(history_one.len(), 1);
        assert_eq!(history_one[0].opponent, "two");
        assert_eq!(history_one[0].outcome, MatchOutcome::Won);
        assert_eq!(history_two[0].outcome, MatchOutcome::Lost);

        Ok(())
    }

    /// Expect an in-progress match to stay out of history
    #[tokio::test]
    async fn test_history_excludes_in_progress() -> Result<(), TestError> {
        let test = match_setup!()?;
        let (one, _, _) = paired_reading_match(&test.db).await?;
        let service = MatchService::new(&test.db);

        assert!(service.history(one.id).await.unwrap().is_empty());

        Ok(())
    }
}
