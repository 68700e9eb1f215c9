//! Stay, food and booking factories.

use chrono::{Duration, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a stay priced at 500 per guest per night.
pub async fn create_stay(db: &DatabaseConnection) -> Result<entity::stay::Model, DbErr> {
    entity::stay::ActiveModel {
        place: ActiveValue::Set("Hostel Block A".to_string()),
        description: ActiveValue::Set(Some("Shared rooms near the main gate".to_string())),
        price: ActiveValue::Set(500),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a food entry for the given weekday and meal type.
pub async fn create_food(
    db: &DatabaseConnection,
    weekday: &str,
    meal_type: &str,
) -> Result<entity::food::Model, DbErr> {
    entity::food::ActiveModel {
        weekday: ActiveValue::Set(weekday.to_string()),
        meal_type: ActiveValue::Set(meal_type.to_string()),
        items: ActiveValue::Set("Idli, Sambar".to_string()),
        price: ActiveValue::Set(60),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a two night, single guest booking with a submitted payment.
pub async fn create_booking(
    db: &DatabaseConnection,
    user: &entity::user::Model,
    stay: &entity::stay::Model,
) -> Result<entity::stay_booking::Model, DbErr> {
    let check_in: NaiveDate = (Utc::now() + Duration::days(7)).date_naive();
    let now = Utc::now();
    entity::stay_booking::ActiveModel {
        user_id: ActiveValue::Set(user.id),
        stay_id: ActiveValue::Set(stay.id),
        name: ActiveValue::Set(user.name.clone()),
        email: ActiveValue::Set(user.email.clone()),
        phone: ActiveValue::Set("9000000000".to_string()),
        check_in: ActiveValue::Set(check_in),
        check_out: ActiveValue::Set(check_in + Duration::days(2)),
        guests: ActiveValue::Set(1),
        amount: ActiveValue::Set(stay.price * 2),
        status: ActiveValue::Set("PAYMENT_SUBMITTED".to_string()),
        payment_screenshot_key: ActiveValue::Set(Some(format!(
            "payments/{}/booking.png",
            user.id
        ))),
        transaction_id: ActiveValue::Set(None),
        payment_submitted_at: ActiveValue::Set(Some(now)),
        payment_verified_at: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
