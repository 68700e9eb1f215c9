use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::{accommodation::MealType, participation::ParticipationStatus},
    server::model::accommodation::{
        weekday_index, BookStayParams, CreateFoodParams, CreateStayParams,
    },
};

pub type BookingWithStay = (entity::stay_booking::Model, Option<entity::stay::Model>);

pub struct AccommodationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AccommodationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_stays(&self) -> Result<Vec<entity::stay::Model>, DbErr> {
        entity::prelude::Stay::find()
            .order_by_asc(entity::stay::Column::Place)
            .all(self.db)
            .await
    }

    pub async fn find_stay(&self, id: i32) -> Result<Option<entity::stay::Model>, DbErr> {
        entity::prelude::Stay::find_by_id(id).one(self.db).await
    }

    pub async fn create_stay(&self, params: CreateStayParams) -> Result<entity::stay::Model, DbErr> {
        entity::stay::ActiveModel {
            place: ActiveValue::Set(params.place),
            description: ActiveValue::Set(params.description),
            price: ActiveValue::Set(params.price),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn delete_stay(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Stay::delete_by_id(id).exec(self.db).await?;
        Ok(result.rows_affected)
    }

    /// Food menu ordered by weekday (Monday first) then meal.
    pub async fn get_food(&self) -> Result<Vec<entity::food::Model>, DbErr> {
        let mut food = entity::prelude::Food::find().all(self.db).await?;
        food.sort_by_key(|f| {
            (
                weekday_index(&f.weekday),
                MealType::parse(&f.meal_type),
                f.id,
            )
        });
        Ok(food)
    }

    pub async fn create_food(&self, params: CreateFoodParams) -> Result<entity::food::Model, DbErr> {
        entity::food::ActiveModel {
            weekday: ActiveValue::Set(params.weekday),
            meal_type: ActiveValue::Set(params.meal_type.as_str().to_string()),
            items: ActiveValue::Set(params.items),
            price: ActiveValue::Set(params.price),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn delete_food(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Food::delete_by_id(id).exec(self.db).await?;
        Ok(result.rows_affected)
    }

    /// Inserts a booking in `PAYMENT_SUBMITTED` with the guest snapshot.
    pub async fn create_booking(
        &self,
        user: &entity::user::Model,
        params: BookStayParams,
        amount: i32,
        now: DateTime<Utc>,
    ) -> Result<entity::stay_booking::Model, DbErr> {
        entity::stay_booking::ActiveModel {
            user_id: ActiveValue::Set(user.id),
            stay_id: ActiveValue::Set(params.stay_id),
            name: ActiveValue::Set(user.name.clone()),
            email: ActiveValue::Set(user.email.clone()),
            phone: ActiveValue::Set(params.phone),
            check_in: ActiveValue::Set(params.check_in),
            check_out: ActiveValue::Set(params.check_out),
            guests: ActiveValue::Set(params.guests),
            amount: ActiveValue::Set(amount),
            status: ActiveValue::Set(ParticipationStatus::PaymentSubmitted.as_str().to_string()),
            payment_screenshot_key: ActiveValue::Set(Some(params.screenshot_key)),
            transaction_id: ActiveValue::Set(params.transaction_id),
            payment_submitted_at: ActiveValue::Set(Some(now)),
            payment_verified_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_booking(&self, id: i32) -> Result<Option<BookingWithStay>, DbErr> {
        entity::prelude::StayBooking::find_by_id(id)
            .find_also_related(entity::prelude::Stay)
            .one(self.db)
            .await
    }

    pub async fn get_bookings_by_user(&self, user_id: i32) -> Result<Vec<BookingWithStay>, DbErr> {
        entity::prelude::StayBooking::find()
            .filter(entity::stay_booking::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::Stay)
            .order_by_desc(entity::stay_booking::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Bookings in a status with pagination, oldest first so the verification queue
    /// is worked in order.
    pub async fn get_bookings_paginated(
        &self,
        status: Option<ParticipationStatus>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<BookingWithStay>, u64), DbErr> {
        let mut query = entity::prelude::StayBooking::find();
        if let Some(status) = status {
            query = query.filter(entity::stay_booking::Column::Status.eq(status.as_str()));
        }

        let paginator = query
            .find_also_related(entity::prelude::Stay)
            .order_by_asc(entity::stay_booking::Column::CreatedAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(page).await?;

        Ok((rows, total))
    }

    pub async fn set_booking_status(
        &self,
        booking: entity::stay_booking::Model,
        status: ParticipationStatus,
        now: DateTime<Utc>,
    ) -> Result<entity::stay_booking::Model, DbErr> {
        let mut active = booking.into_active_model();
        active.status = ActiveValue::Set(status.as_str().to_string());
        if status == ParticipationStatus::Confirmed {
            active.payment_verified_at = ActiveValue::Set(Some(now));
        }
        active.update(self.db).await
    }
}
