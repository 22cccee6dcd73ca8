use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use readclash::{
    model::game::{GameType, ReportScoreDto},
    server::{
        controller::game::{content, history, report, result},
        model::session::SessionProfileId,
        service::matchmaking::MatchmakingService,
    },
};
use readclash_test_utils::prelude::*;
use tower_sessions::Session;

use crate::controller_setup;
use crate::util::{response_of, second_session, test_state};

/// Two logged-in sessions paired into a reading match.
async fn paired_setup(
    test: &TestSetup,
) -> Result<(Session, Session, i32), TestError> {
    factory::seed_reading_content(&test.db).await?;

    let one = factory::profile(&test.db, "one").await?;
    let two = factory::profile(&test.db, "two").await?;

    let session_two = second_session();
    SessionProfileId::insert(&test.session, one.id).await.unwrap();
    SessionProfileId::insert(&session_two, two.id).await.unwrap();

    let service = MatchmakingService::new(&test.db);
    service.join(one.id, GameType::Reading).await.unwrap();
    let status = service.join(two.id, GameType::Reading).await.unwrap();

    let match_id = match status {
        readclash::model::game::QueueStatusDto::Matched { match_id, .. } => match_id,
        _ => panic!("expected a match to form"),
    };

    Ok((test.session.clone(), session_two, match_id))
}

/// Expect participants to fetch content and outsiders to get 403
#[tokio::test]
async fn content_participant_only() -> Result<(), TestError> {
    let test = controller_setup!()?;
    let state = test_state(&test);
    let (session_one, _, match_id) = paired_setup(&test).await?;

    let ok = response_of(
        content(State(state.clone()), session_one, Path(match_id)).await,
    );
    assert_eq!(ok.status(), StatusCode::OK);

    let outsider = factory::profile(&test.db, "outsider").await?;
    let outsider_session = second_session();
    SessionProfileId::insert(&outsider_session, outsider.id).await.unwrap();

    let forbidden = response_of(
        content(State(state), outsider_session, Path(match_id)).await,
    );
    assert_eq!(forbidden.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect 404 for a match that does not exist
#[tokio::test]
async fn content_unknown_match_not_found() -> Result<(), TestError> {
    let test = controller_setup!()?;
    let state = test_state(&test);

    let profile = factory::profile(&test.db, "reader_one").await?;
    SessionProfileId::insert(&test.session, profile.id).await.unwrap();

    let response = response_of(content(State(state), test.session.clone(), Path(99)).await);

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect the full report flow: two reports settle the match, re-reports
/// conflict, history fills in
#[tokio::test]
async fn report_flow_settles_match() -> Result<(), TestError> {
    let test = controller_setup!()?;
    let state = test_state(&test);
    let (session_one, session_two, match_id) = paired_setup(&test).await?;

    let first = response_of(
        report(
            State(state.clone()),
            session_one.clone(),
            Path(match_id),
            Json(ReportScoreDto { score: 3, total: 3 }),
        )
        .await,
    );
    assert_eq!(first.status(), StatusCode::OK);

    let double = response_of(
        report(
            State(state.clone()),
            session_one.clone(),
            Path(match_id),
            Json(ReportScoreDto { score: 3, total: 3 }),
        )
        .await,
    );
    assert_eq!(double.status(), StatusCode::CONFLICT);

    let second = response_of(
        report(
            State(state.clone()),
            session_two.clone(),
            Path(match_id),
            Json(ReportScoreDto { score: 1, total: 3 }),
        )
        .await,
    );
    assert_eq!(second.status(), StatusCode::OK);

    let late = response_of(
        report(
            State(state.clone()),
            session_two.clone(),
            Path(match_id),
            Json(ReportScoreDto { score: 2, total: 3 }),
        )
        .await,
    );
    assert_eq!(late.status(), StatusCode::CONFLICT);

    let settled = response_of(
        result(State(state.clone()), session_one.clone(), Path(match_id)).await,
    );
    assert_eq!(settled.status(), StatusCode::OK);

    let past = response_of(history(State(state), session_one).await);
    assert_eq!(past.status(), StatusCode::OK);

    Ok(())
}

/// Expect a report with a mismatched total to be rejected
#[tokio::test]
async fn report_wrong_total_bad_request() -> Result<(), TestError> {
    let test = controller_setup!()?;
    let state = test_state(&test);
    let (session_one, _, match_id) = paired_setup(&test).await?;

    let response = response_of(
        report(
            State(state),
            session_one,
            Path(match_id),
            Json(ReportScoreDto { score: 2, total: 5 }),
        )
        .await,
    );

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
