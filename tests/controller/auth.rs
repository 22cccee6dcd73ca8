use axum::{extract::State, http::StatusCode, Json};
use readclash::{
    model::user::{LoginDto, RegisterDto},
    server::{
        controller::auth::{get_user, login, logout, register},
        model::session::SessionProfileId,
    },
};
use readclash_test_utils::prelude::*;

use crate::controller_setup;
use crate::util::{response_of, test_state};

fn register_dto(username: &str) -> RegisterDto {
    RegisterDto {
        username: username.to_string(),
        password: "correct horse".to_string(),
    }
}

/// Expect 201 with the new user and a populated session on registration
#[tokio::test]
async fn register_creates_account_and_session() -> Result<(), TestError> {
    let test = controller_setup!()?;
    let state = test_state(&test);

    let response = response_of(
        register(
            State(state),
            test.session.clone(),
            Json(register_dto("reader_one")),
        )
        .await,
    );

    assert_eq!(response.status(), StatusCode::CREATED);
    assert!(SessionProfileId::get(&test.session).await.unwrap().is_some());

    Ok(())
}

/// Expect 409 when the username is already registered
#[tokio::test]
async fn register_duplicate_username_conflict() -> Result<(), TestError> {
    let test = controller_setup!()?;
    let state = test_state(&test);

    response_of(
        register(
            State(state.clone()),
            test.session.clone(),
            Json(register_dto("reader_one")),
        )
        .await,
    );

    let response = response_of(
        register(
            State(state),
            crate::util::second_session(),
            Json(register_dto("reader_one")),
        )
        .await,
    );

    assert_eq!(response.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 400 for a username failing validation
#[tokio::test]
async fn register_invalid_username_bad_request() -> Result<(), TestError> {
    let test = controller_setup!()?;
    let state = test_state(&test);

    let response = response_of(
        register(
            State(state),
            test.session.clone(),
            Json(register_dto("a")),
        )
        .await,
    );

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 200 on login with the right password, 401 with the wrong one
#[tokio::test]
async fn login_verifies_credentials() -> Result<(), TestError> {
    let test = controller_setup!()?;
    let state = test_state(&test);

    response_of(
        register(
            State(state.clone()),
            test.session.clone(),
            Json(register_dto("reader_one")),
        )
        .await,
    );

    let ok = response_of(
        login(
            State(state.clone()),
            crate::util::second_session(),
            Json(LoginDto {
                username: "reader_one".to_string(),
                password: "correct horse".to_string(),
            }),
        )
        .await,
    );
    assert_eq!(ok.status(), StatusCode::OK);

    let wrong = response_of(
        login(
            State(state),
            crate::util::second_session(),
            Json(LoginDto {
                username: "reader_one".to_string(),
                password: "wrong horse".to_string(),
            }),
        )
        .await,
    );
    assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 404 from the current-user endpoint without a session
#[tokio::test]
async fn get_user_without_session_not_found() -> Result<(), TestError> {
    let test = controller_setup!()?;
    let state = test_state(&test);

    let response = response_of(get_user(State(state), test.session.clone()).await);

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect the current user after registration, then 404 after logout
#[tokio::test]
async fn get_user_roundtrip_with_logout() -> Result<(), TestError> {
    let test = controller_setup!()?;
    let state = test_state(&test);

    response_of(
        register(
            State(state.clone()),
            test.session.clone(),
            Json(register_dto("reader_one")),
        )
        .await,
    );

    let found = response_of(get_user(State(state.clone()), test.session.clone()).await);
    assert_eq!(found.status(), StatusCode::OK);

    let out = response_of(logout(test.session.clone()).await);
    assert_eq!(out.status(), StatusCode::OK);

    let gone = response_of(get_user(State(state), test.session.clone()).await);
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect a stale session pointing at a deleted profile to be cleared
#[tokio::test]
async fn get_user_stale_session_cleared() -> Result<(), TestError> {
    let test = controller_setup!()?;
    let state = test_state(&test);

    SessionProfileId::insert(&test.session, 404).await.unwrap();

    let response = response_of(get_user(State(state), test.session.clone()).await);

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(SessionProfileId::get(&test.session).await.unwrap().is_none());

    Ok(())
}
