use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

use entity::{GameType, MatchStatus};

pub struct MatchRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MatchRepository<'a> {
    /// Creates a new instance of [`MatchRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create an in-progress match between two players over fixed content
    pub async fn create(
        &self,
        player_one_id: i32,
        player_two_id: i32,
        game_type: GameType,
        passage_id: Option<i32>,
        word_ids: Option<serde_json::Value>,
        total_questions: i32,
    ) -> Result<entity::game_match::Model, DbErr> {
        let game_match = entity::game_match::ActiveModel {
            player_one_id: ActiveValue::Set(player_one_id),
            player_two_id: ActiveValue::Set(player_two_id),
            game_type: ActiveValue::Set(game_type),
            passage_id: ActiveValue::Set(passage_id),
            word_ids: ActiveValue::Set(word_ids),
            total_questions: ActiveValue::Set(total_questions),
            status: ActiveValue::Set(MatchStatus::InProgress),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        game_match.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        match_id: i32,
    ) -> Result<Option<entity::game_match::Model>, DbErr> {
        entity::prelude::GameMatch::find_by_id(match_id)
            .one(self.db)
            .await
    }

    /// The in-progress match a profile participates in, if any
    pub async fn find_in_progress_for(
        &self,
        profile_id: i32,
    ) -> Result<Option<entity::game_match::Model>, DbErr> {
        entity::prelude::GameMatch::find()
            .filter(entity::game_match::Column::Status.eq(MatchStatus::InProgress))
            .filter(
                Condition::any()
                    .add(entity::game_match::Column::PlayerOneId.eq(profile_id))
                    .add(entity::game_match::Column::PlayerTwoId.eq(profile_id)),
            )
            .one(self.db)
            .await
    }

    /// Store one participant's reported score
    pub async fn record_score(
        &self,
        game_match: entity::game_match::Model,
        is_player_one: bool,
        score: i32,
    ) -> Result<entity::game_match::Model, DbErr> {
        let mut match_am = game_match.into_active_model();
        if is_player_one {
            match_am.player_one_score = ActiveValue::Set(Some(score));
        } else {
            match_am.player_two_score = ActiveValue::Set(Some(score));
        }

        match_am.update(self.db).await
    }

    /// Mark a match completed; `winner_id` is None on a draw
    pub async fn complete(
        &self,
        game_match: entity::game_match::Model,
        winner_id: Option<i32>,
    ) -> Result<entity::game_match::Model, DbErr> {
        let mut match_am = game_match.into_active_model();
        match_am.winner_id = ActiveValue::Set(winner_id);
        match_am.status = ActiveValue::Set(MatchStatus::Completed);
        match_am.completed_at = ActiveValue::Set(Some(Utc::now().naive_utc()));

        match_am.update(self.db).await
    }

    /// Completed matches for a profile, most recent first
    pub async fn completed_for(
        &self,
        profile_id: i32,
    ) -> Result<Vec<entity::game_match::Model>, DbErr> {
        entity::prelude::GameMatch::find()
            .filter(entity::game_match::Column::Status.eq(MatchStatus::Completed))
            .filter(
                Condition::any()
                    .add(entity::game_match::Column::PlayerOneId.eq(profile_id))
                    .add(entity::game_match::Column::PlayerTwoId.eq(profile_id)),
            )
            .order_by_desc(entity::game_match::Column::CompletedAt)
            .all(self.db)
            .await
    }

    /// Win counts grouped by winner for the given profiles
    pub async fn wins_by_profile_ids(
        &self,
        profile_ids: Vec<i32>,
    ) -> Result<Vec<(Option<i32>, i64)>, DbErr> {
        entity::prelude::GameMatch::find()
            .select_only()
            .column(entity::game_match::Column::WinnerId)
            .column_as(entity::game_match::Column::Id.count(), "wins")
            .filter(entity::game_match::Column::WinnerId.is_in(profile_ids))
            .group_by(entity::game_match::Column::WinnerId)
            .into_tuple::<(Option<i32>, i64)>()
            .all(self.db)
            .await
    }
}
