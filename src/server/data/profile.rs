use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

pub struct ProfileRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProfileRepository<'a> {
    /// Creates a new instance of [`ProfileRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new profile with zero experience
    pub async fn create(
        &self,
        username: String,
        password_hash: String,
        avatar: String,
    ) -> Result<entity::profile::Model, DbErr> {
        let profile = entity::profile::ActiveModel {
            username: ActiveValue::Set(username),
            password_hash: ActiveValue::Set(password_hash),
            avatar: ActiveValue::Set(avatar),
            experience: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        profile.insert(self.db).await
    }

    pub async fn get_by_id(&self, profile_id: i32) -> Result<Option<entity::profile::Model>, DbErr> {
        entity::prelude::Profile::find_by_id(profile_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::profile::Model>, DbErr> {
        entity::prelude::Profile::find()
            .filter(entity::profile::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    /// Update a profile's avatar
    ///
    /// Returns None if the profile does not exist.
    pub async fn update_avatar(
        &self,
        profile_id: i32,
        avatar: String,
    ) -> Result<Option<entity::profile::Model>, DbErr> {
        let profile = match self.get_by_id(profile_id).await? {
            Some(profile) => profile,
            None => return Ok(None),
        };

        let mut profile_am = profile.into_active_model();
        profile_am.avatar = ActiveValue::Set(avatar);
        profile_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(profile_am.update(self.db).await?))
    }

    /// Add experience to a profile, clamping the total at zero
    ///
    /// Returns None if the profile does not exist.
    pub async fn add_experience(
        &self,
        profile_id: i32,
        delta: i32,
    ) -> Result<Option<entity::profile::Model>, DbErr> {
        let profile = match self.get_by_id(profile_id).await? {
            Some(profile) => profile,
            None => return Ok(None),
        };

        let experience = (profile.experience + delta).max(0);

        let mut profile_am = profile.into_active_model();
        profile_am.experience = ActiveValue::Set(experience);
        profile_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(profile_am.update(self.db).await?))
    }

    /// Profiles ordered by experience descending, ties broken by the earlier
    /// account.
    pub async fn top_by_experience(
        &self,
        limit: u64,
    ) -> Result<Vec<entity::profile::Model>, DbErr> {
        entity::prelude::Profile::find()
            .order_by_desc(entity::profile::Column::Experience)
            .order_by_asc(entity::profile::Column::CreatedAt)
            .limit(limit)
            .all(self.db)
            .await
    }
}
