use axum::{extract::State, http::StatusCode, Json};
use readclash::{
    model::game::{GameType, JoinQueueDto},
    server::{
        controller::matchmaking::{join, leave, status},
        model::session::SessionProfileId,
    },
};
use readclash_test_utils::prelude::*;

use crate::controller_setup;
use crate::util::{response_of, second_session, test_state};

/// Expect 401 from every queue endpoint without a login
#[tokio::test]
async fn queue_endpoints_require_login() -> Result<(), TestError> {
    let test = controller_setup!()?;
    let state = test_state(&test);

    let join_response = response_of(
        join(
            State(state.clone()),
            test.session.clone(),
            Json(JoinQueueDto {
                game_type: GameType::Reading,
            }),
        )
        .await,
    );
    assert_eq!(join_response.status(), StatusCode::UNAUTHORIZED);

    let status_response = response_of(status(State(state.clone()), test.session.clone()).await);
    assert_eq!(status_response.status(), StatusCode::UNAUTHORIZED);

    let leave_response = response_of(leave(State(state), test.session.clone()).await);
    assert_eq!(leave_response.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect join then rejoin to conflict, and leave to be a clean 200 twice
#[tokio::test]
async fn join_leave_lifecycle() -> Result<(), TestError> {
    let test = controller_setup!()?;
    let state = test_state(&test);

    let profile = factory::profile(&test.db, "reader_one").await?;
    SessionProfileId::insert(&test.session, profile.id).await.unwrap();

    let first = response_of(
        join(
            State(state.clone()),
            test.session.clone(),
            Json(JoinQueueDto {
                game_type: GameType::Reading,
            }),
        )
        .await,
    );
    assert_eq!(first.status(), StatusCode::OK);

    let again = response_of(
        join(
            State(state.clone()),
            test.session.clone(),
            Json(JoinQueueDto {
                game_type: GameType::Reading,
            }),
        )
        .await,
    );
    assert_eq!(again.status(), StatusCode::CONFLICT);

    let gone = response_of(leave(State(state.clone()), test.session.clone()).await);
    assert_eq!(gone.status(), StatusCode::OK);

    // Idempotent
    let still_gone = response_of(leave(State(state), test.session.clone()).await);
    assert_eq!(still_gone.status(), StatusCode::OK);

    Ok(())
}

/// Expect two compatible joins to produce a match visible from both sessions
#[tokio::test]
async fn two_joins_form_a_match() -> Result<(), TestError> {
    let test = controller_setup!()?;
    let state = test_state(&test);
    factory::seed_spelling_words(&test.db).await?;

    let one = factory::profile(&test.db, "one").await?;
    let two = factory::profile(&test.db, "two").await?;

    let session_two = second_session();
    SessionProfileId::insert(&test.session, one.id).await.unwrap();
    SessionProfileId::insert(&session_two, two.id).await.unwrap();

    let first = response_of(
        join(
            State(state.clone()),
            test.session.clone(),
            Json(JoinQueueDto {
                game_type: GameType::Spelling,
            }),
        )
        .await,
    );
    assert_eq!(first.status(), StatusCode::OK);

    let second = response_of(
        join(
            State(state.clone()),
            session_two.clone(),
            Json(JoinQueueDto {
                game_type: GameType::Spelling,
            }),
        )
        .await,
    );
    assert_eq!(second.status(), StatusCode::OK);

    // Both sides see the same in-progress match via their status poll
    let one_status = response_of(status(State(state.clone()), test.session.clone()).await);
    let two_status = response_of(status(State(state), session_two).await);

    assert_eq!(one_status.status(), StatusCode::OK);
    assert_eq!(two_status.status(), StatusCode::OK);

    Ok(())
}
