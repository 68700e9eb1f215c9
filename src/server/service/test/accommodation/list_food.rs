use super::*;

/// Tests the food menu ordering when rows are inserted out of order.
///
/// Expected: Ok ordered by weekday, then meal within a day
#[tokio::test]
async fn orders_by_weekday_then_meal() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_accommodation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_food(db, "TUESDAY", "BREAKFAST").await?;
    factory::create_food(db, "MONDAY", "DINNER").await?;
    factory::create_food(db, "MONDAY", "BREAKFAST").await?;

    let menu = AccommodationService::new(db).list_food().await?;

    let order: Vec<(&str, MealType)> = menu
        .iter()
        .map(|f| (f.weekday.as_str(), f.meal_type))
        .collect();
    assert_eq!(
        order,
        vec![
            ("MONDAY", MealType::Breakfast),
            ("MONDAY", MealType::Dinner),
            ("TUESDAY", MealType::Breakfast),
        ]
    );

    Ok(())
}
