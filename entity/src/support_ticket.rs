use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "support_ticket")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Human readable identifier, e.g. `INSP-M3K9Z1QX-7GQ2`.
    #[sea_orm(unique)]
    pub ticket_number: String,
    pub user_id: i32,
    pub subject: String,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub category: String,
    /// One of `OPEN`, `IN_PROGRESS`, `RESOLVED`, `CLOSED`.
    pub status: String,
    /// One of `LOW`, `MEDIUM`, `HIGH`, `URGENT`.
    pub priority: String,
    pub resolved_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::support_response::Entity")]
    SupportResponse,
    #[sea_orm(has_many = "super::support_attachment::Entity")]
    SupportAttachment,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::support_response::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SupportResponse.def()
    }
}

impl Related<super::support_attachment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SupportAttachment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
