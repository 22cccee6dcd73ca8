use sea_orm::entity::prelude::*;

use super::game_match::GameType;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "matchmaking_queue")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// One pending entry per player.
    #[sea_orm(unique)]
    pub profile_id: i32,
    pub game_type: GameType,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::profile::Entity",
        from = "Column::ProfileId",
        to = "super::profile::Column::Id"
    )]
    Profile,
}

impl Related<super::profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Profile.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
