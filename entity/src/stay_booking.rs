use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "stay_booking")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub stay_id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub check_in: Date,
    pub check_out: Date,
    pub guests: i32,
    pub amount: i32,
    /// Shares the participation lifecycle.
    pub status: String,
    pub payment_screenshot_key: Option<String>,
    pub transaction_id: Option<String>,
    pub payment_submitted_at: Option<DateTimeUtc>,
    pub payment_verified_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
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
    #[sea_orm(
        belongs_to = "super::stay::Entity",
        from = "Column::StayId",
        to = "super::stay::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Stay,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::stay::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Stay.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
