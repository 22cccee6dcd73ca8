use axum::{extract::State, http::StatusCode, Json};
use readclash::{
    model::chat::ChatRequestDto,
    server::{controller::chat::chat, model::session::SessionProfileId},
};
use readclash_test_utils::prelude::*;

use crate::controller_setup;
use crate::util::{response_of, test_state};

/// Expect 401 without a login
#[tokio::test]
async fn chat_requires_login() -> Result<(), TestError> {
    let test = controller_setup!()?;
    let state = test_state(&test);

    let response = response_of(
        chat(
            State(state),
            test.session.clone(),
            Json(ChatRequestDto {
                message: "hello".to_string(),
            }),
        )
        .await,
    );

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 200 even with no providers configured; the tutor always answers
#[tokio::test]
async fn chat_always_answers_when_logged_in() -> Result<(), TestError> {
    let test = controller_setup!()?;
    let state = test_state(&test);

    let profile = factory::profile(&test.db, "reader_one").await?;
    SessionProfileId::insert(&test.session, profile.id).await.unwrap();

    for message in ["hello there", "completely unmatched question xyz"] {
        let response = response_of(
            chat(
                State(state.clone()),
                test.session.clone(),
                Json(ChatRequestDto {
                    message: message.to_string(),
                }),
            )
            .await,
        );

        assert_eq!(response.status(), StatusCode::OK);
    }

    Ok(())
}
