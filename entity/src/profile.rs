use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "profile")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    pub password_hash: String,
    pub avatar: String,
    pub experience: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::matchmaking_queue::Entity")]
    MatchmakingQueue,
}

impl Related<super::matchmaking_queue::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MatchmakingQueue.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
