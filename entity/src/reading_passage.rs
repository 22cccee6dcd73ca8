use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "reading_passage")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub body: String,
    pub difficulty: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::comprehension_question::Entity")]
    ComprehensionQuestion,
}

impl Related<super::comprehension_question::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ComprehensionQuestion.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
