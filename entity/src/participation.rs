use sea_orm::entity::prelude::*;

/// A user's registration for an event.
///
/// `name`, `email`, `phone` and `college` are a snapshot of the registrant taken at
/// registration time and re-synced when the user edits their profile. The pair
/// (`user_id`, `event_id`) is unique at the storage level.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "participation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub event_id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub college: String,
    /// One of `REGISTERED`, `PAYMENT_SUBMITTED`, `CONFIRMED`, `CANCELLED`.
    pub status: String,
    pub payment_amount: Option<i32>,
    pub payment_screenshot_key: Option<String>,
    pub transaction_id: Option<String>,
    pub payment_submitted_at: Option<DateTimeUtc>,
    pub payment_verified_at: Option<DateTimeUtc>,
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
    #[sea_orm(
        belongs_to = "super::event::Entity",
        from = "Column::EventId",
        to = "super::event::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Event,
    #[sea_orm(has_many = "super::team_member::Entity")]
    TeamMember,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

impl Related<super::team_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeamMember.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
