use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::seq::IndexedRandom;
use sea_orm::DatabaseConnection;

use crate::{
    model::user::{UserDto, AVATARS},
    server::{
        data::profile::ProfileRepository,
        error::{auth::AuthError, Error},
        service::user::user_dto,
    },
};

const USERNAME_MIN: usize = 3;
const USERNAME_MAX: usize = 24;
const PASSWORD_MIN: usize = 8;

/// Service handling registration and credential verification.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Register a new account.
    ///
    /// Validates the username and password, hashes the password with
    /// argon2id, and creates the profile row with a random starting avatar.
    pub async fn register(&self, username: &str, password: &str) -> Result<UserDto, Error> {
        let username = username.trim();
        validate_username(username)?;
        validate_password(password)?;

        let profile_repo = ProfileRepository::new(self.db);

        if profile_repo.get_by_username(username).await?.is_some() {
            return Err(AuthError::UsernameTaken.into());
        }

        let password_hash = hash_password(password)?;

        let avatar = AVATARS
            .choose(&mut rand::rng())
            .copied()
            .unwrap_or("fox")
            .to_string();

        let profile = profile_repo
            .create(username.to_string(), password_hash, avatar)
            .await?;

        Ok(user_dto(&profile))
    }

    /// Verify a username/password pair.
    ///
    /// Unknown usernames and wrong passwords both map to
    /// [`AuthError::InvalidCredentials`] so callers cannot probe for
    /// registered names.
    pub async fn verify(&self, username: &str, password: &str) -> Result<UserDto, Error> {
        let profile_repo = ProfileRepository::new(self.db);

        let profile = profile_repo
            .get_by_username(username.trim())
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let parsed_hash = PasswordHash::new(&profile.password_hash)
            .map_err(|e| AuthError::PasswordHash(e.to_string()))?;

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .map_err(|_| AuthError::InvalidCredentials)?;

        Ok(user_dto(&profile))
    }
}

fn hash_password(password: &str) -> Result<String, Error> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AuthError::PasswordHash(e.to_string()))?;

    Ok(hash.to_string())
}

fn validate_username(username: &str) -> Result<(), AuthError> {
    if username.len() < USERNAME_MIN || username.len() > USERNAME_MAX {
        return Err(AuthError::InvalidUsername(format!(
            "must be between {} and {} characters",
            USERNAME_MIN, USERNAME_MAX
        )));
    }

    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(AuthError::InvalidUsername(
            "only letters, digits and underscores are allowed".to_string(),
        ));
    }

    Ok(())
}

fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.len() < PASSWORD_MIN {
        return Err(AuthError::InvalidPassword(format!(
            "must be at least {} characters",
            PASSWORD_MIN
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use readclash_test_utils::prelude::*;

    use crate::server::service::auth::AuthService;

    /// Expect registration followed by verification with the same credentials
    #[tokio::test]
    async fn test_register_and_verify() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::Profile)?;
        let service = AuthService::new(&test.db);

        let registered = service.register("reader_one", "correct horse").await.unwrap();
        let verified = service.verify("reader_one", "correct horse").await.unwrap();

        assert_eq!(registered.id, verified.id);
        assert_eq!(verified.username, "reader_one");
        assert_eq!(verified.experience, 0);

        Ok(())
    }

    /// Expect a duplicate username to be rejected
    #[tokio::test]
    async fn test_register_duplicate_username() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::Profile)?;
        let service = AuthService::new(&test.db);

        service.register("reader_one", "correct horse").await.unwrap();
        let result = service.register("reader_one", "other password").await;

        assert!(result.is_err());

        Ok(())
    }

    /// Expect the wrong password to fail verification
    #[tokio::test]
    async fn test_verify_wrong_password() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::Profile)?;
        let service = AuthService::new(&test.db);

        service.register("reader_one", "correct horse").await.unwrap();
        let result = service.verify("reader_one", "wrong horse").await;

        assert!(result.is_err());

        Ok(())
    }

    /// Expect an unknown username to fail verification
    #[tokio::test]
    async fn test_verify_unknown_username() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::Profile)?;
        let service = AuthService::new(&test.db);

        let result = service.verify("nobody", "correct horse").await;

        assert!(result.is_err());

        Ok(())
    }

    /// Expect malformed usernames to be rejected before hashing
    #[tokio::test]
    async fn test_register_invalid_username() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::Profile)?;
        let service = AuthService::new(&test.db);

        for username in ["ab", "has spaces", "way_too_long_for_a_username_field"] {
            let result = service.register(username, "correct horse").await;
            assert!(result.is_err(), "expected rejection for {:?}", username);
        }

        Ok(())
    }
}
