use sea_orm::DatabaseConnection;

use crate::{
    model::user::{UserDto, AVATARS},
    server::{
        data::profile::ProfileRepository, error::auth::AuthError, error::Error,
        service::progression,
    },
};

/// Service for profile operations: reading the current user, switching
/// avatars, and awarding experience.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a user with their derived rank.
    ///
    /// # Returns
    /// - `Ok(Some(UserDto))` - Profile found
    /// - `Ok(None)` - Profile not found in database
    pub async fn get_user(&self, profile_id: i32) -> Result<Option<UserDto>, Error> {
        let profile_repo = ProfileRepository::new(self.db);

        let profile = match profile_repo.get_by_id(profile_id).await? {
            Some(profile) => profile,
            None => return Ok(None),
        };

        Ok(Some(user_dto(&profile)))
    }

    /// Switch the profile's avatar to one of the built-in avatar keys
    pub async fn update_avatar(
        &self,
        profile_id: i32,
        avatar: &str,
    ) -> Result<Option<UserDto>, Error> {
        if !AVATARS.contains(&avatar) {
            return Err(AuthError::InvalidAvatar(avatar.to_string()).into());
        }

        let profile_repo = ProfileRepository::new(self.db);

        let profile = profile_repo
            .update_avatar(profile_id, avatar.to_string())
            .await?;

        Ok(profile.as_ref().map(user_dto))
    }

    /// Award experience to a profile after a completed match
    pub async fn add_experience(&self, profile_id: i32, delta: i32) -> Result<(), Error> {
        let profile_repo = ProfileRepository::new(self.db);

        if profile_repo.add_experience(profile_id, delta).await?.is_none() {
            return Err(Error::InternalError(format!(
                "Failed to award {} experience to missing profile ID {}",
                delta, profile_id
            )));
        }

        Ok(())
    }
}

/// Map a profile row to its API shape, deriving the rank from experience.
pub fn user_dto(profile: &entity::profile::Model) -> UserDto {
    UserDto {
        id: profile.id,
        username: profile.username.clone(),
        avatar: profile.avatar.clone(),
        experience: profile.experience,
        rank: progression::rank_for(profile.experience),
    }
}
