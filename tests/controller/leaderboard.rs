use axum::{
    extract::{Query, State},
    http::StatusCode,
};
use readclash::server::controller::leaderboard::{get_leaderboard, LeaderboardQuery};
use readclash_test_utils::prelude::*;

use crate::controller_setup;
use crate::util::{response_of, test_state};

/// Expect the leaderboard to be public and return 200
#[tokio::test]
async fn leaderboard_is_public() -> Result<(), TestError> {
    let test = controller_setup!()?;
    let state = test_state(&test);

    factory::profile(&test.db, "reader_one").await?;

    let response = response_of(
        get_leaderboard(State(state), Query(LeaderboardQuery { limit: None })).await,
    );

    assert_eq!(response.status(), StatusCode::OK);

    Ok(())
}

/// Expect an explicit limit to be accepted
#[tokio::test]
async fn leaderboard_with_limit() -> Result<(), TestError> {
    let test = controller_setup!()?;
    let state = test_state(&test);

    let response = response_of(
        get_leaderboard(State(state), Query(LeaderboardQuery { limit: Some(5) })).await,
    );

    assert_eq!(response.status(), StatusCode::OK);

    Ok(())
}
