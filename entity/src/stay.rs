use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "stay")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub place: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    /// Price per guest per night in whole rupees.
    pub price: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::stay_booking::Entity")]
    StayBooking,
}

impl Related<super::stay_booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StayBooking.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
