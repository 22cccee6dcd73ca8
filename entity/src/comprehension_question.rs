use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "comprehension_question")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub passage_id: i32,
    #[sea_orm(column_type = "Text")]
    pub prompt: String,
    /// JSON array of answer option strings.
    pub options: Json,
    pub correct_index: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::reading_passage::Entity",
        from = "Column::PassageId",
        to = "super::reading_passage::Column::Id"
    )]
    ReadingPassage,
}

impl Related<super::reading_passage::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReadingPassage.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
