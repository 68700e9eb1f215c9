use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "support_response_attachment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub response_id: i32,
    pub storage_key: String,
    pub file_name: String,
    pub content_type: String,
    pub size: i64,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::support_response::Entity",
        from = "Column::ResponseId",
        to = "super::support_response::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    SupportResponse,
}

impl Related<super::support_response::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SupportResponse.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
