//! Stays, the food menu and stay bookings.
//!
//! A booking is paid up front: it is created in `PAYMENT_SUBMITTED` with the amount
//! computed from the stay's nightly price per guest, and confirmed by an admin, which
//! queues the invoice email.

use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        accommodation::{BookingDto, FoodDto, StayDto},
        api::PageDto,
        participation::ParticipationStatus,
    },
    server::{
        data::{
            accommodation::{AccommodationRepository, BookingWithStay},
            is_foreign_key_violation,
            outbox::OutboxRepository,
            user::UserRepository,
        },
        error::{auth::AuthError, AppError},
        model::{
            accommodation::{
                booking_dto, food_dto, stay_dto, BookStayParams, CreateFoodParams,
                CreateStayParams,
            },
            auth::Principal,
            outbox::OutboxMessage,
            participation::parse_status,
        },
    },
};

fn to_booking_dto((booking, stay): BookingWithStay) -> BookingDto {
    let place = stay.map(|s| s.place).unwrap_or_default();
    booking_dto(booking, place)
}

pub struct AccommodationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AccommodationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_stays(&self) -> Result<Vec<StayDto>, AppError> {
        let stays = AccommodationRepository::new(self.db).get_stays().await?;

        Ok(stays.into_iter().map(stay_dto).collect())
    }

    /// Menu ordered by weekday, then meal.
    pub async fn list_food(&self) -> Result<Vec<FoodDto>, AppError> {
        let food = AccommodationRepository::new(self.db).get_food().await?;

        Ok(food.into_iter().map(food_dto).collect())
    }

    pub async fn create_stay(
        &self,
        principal: &Principal,
        params: CreateStayParams,
    ) -> Result<StayDto, AppError> {
        principal.require_admin()?;

        let stay = AccommodationRepository::new(self.db)
            .create_stay(params)
            .await?;

        Ok(stay_dto(stay))
    }

    /// Deletes a stay that has no bookings.
    pub async fn delete_stay(&self, principal: &Principal, id: i32) -> Result<(), AppError> {
        principal.require_admin()?;

        match AccommodationRepository::new(self.db).delete_stay(id).await {
            Ok(0) => Err(AppError::NotFound("Stay not found".to_string())),
            Ok(_) => Ok(()),
            Err(err) if is_foreign_key_violation(&err) => Err(AppError::Conflict(
                "This stay has bookings and cannot be deleted".to_string(),
            )),
            Err(err) => Err(err.into()),
        }
    }

    pub async fn create_food(
        &self,
        principal: &Principal,
        params: CreateFoodParams,
    ) -> Result<FoodDto, AppError> {
        principal.require_admin()?;

        let food = AccommodationRepository::new(self.db)
            .create_food(params)
            .await?;

        Ok(food_dto(food))
    }

    pub async fn delete_food(&self, principal: &Principal, id: i32) -> Result<(), AppError> {
        principal.require_admin()?;

        let deleted = AccommodationRepository::new(self.db).delete_food(id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound("Menu item not found".to_string()));
        }

        Ok(())
    }

    /// Books a stay for the caller with a submitted payment.
    ///
    /// # Returns
    /// - `Ok(BookingDto)` - Booking in `PAYMENT_SUBMITTED`, amount = price x nights x guests
    /// - `Err(AppError::NotFound)` - Stay does not exist
    pub async fn book_stay(
        &self,
        principal: &Principal,
        params: BookStayParams,
    ) -> Result<BookingDto, AppError> {
        let repo = AccommodationRepository::new(self.db);

        let stay = repo
            .find_stay(params.stay_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Stay not found".to_string()))?;
        let user = UserRepository::new(self.db)
            .find_by_id(principal.user_id)
            .await?
            .ok_or(AuthError::UserNotInDatabase(principal.user_id))?;

        let amount = params.amount(stay.price)?;
        let booking = repo.create_booking(&user, params, amount, Utc::now()).await?;

        Ok(booking_dto(booking, stay.place))
    }

    /// Confirms a booking's payment and queues the accommodation invoice email.
    pub async fn verify_booking(
        &self,
        principal: &Principal,
        booking_id: i32,
    ) -> Result<BookingDto, AppError> {
        principal.require_admin()?;

        let (booking, stay) = AccommodationRepository::new(self.db)
            .find_booking(booking_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        if parse_status(&booking.status) != ParticipationStatus::PaymentSubmitted {
            return Err(AppError::BadRequest(
                "Only submitted payments can be verified".to_string(),
            ));
        }

        let now = Utc::now();
        let txn = self.db.begin().await?;

        let booking = AccommodationRepository::new(&txn)
            .set_booking_status(booking, ParticipationStatus::Confirmed, now)
            .await?;
        OutboxRepository::new(&txn)
            .enqueue(
                &OutboxMessage::AccommodationConfirmation {
                    booking_id: booking.id,
                },
                now,
            )
            .await?;

        txn.commit().await?;

        Ok(to_booking_dto((booking, stay)))
    }

    pub async fn list_my_bookings(&self, principal: &Principal) -> Result<Vec<BookingDto>, AppError> {
        let bookings = AccommodationRepository::new(self.db)
            .get_bookings_by_user(principal.user_id)
            .await?;

        Ok(bookings.into_iter().map(to_booking_dto).collect())
    }

    /// Page of bookings for the admin verification queue. `page` is one-based.
    pub async fn list_for_admin(
        &self,
        principal: &Principal,
        status: Option<ParticipationStatus>,
        page: u64,
        per_page: u64,
    ) -> Result<PageDto<BookingDto>, AppError> {
        principal.require_admin()?;

        let page = page.max(1);
        let (bookings, total) = AccommodationRepository::new(self.db)
            .get_bookings_paginated(status, page - 1, per_page)
            .await?;

        Ok(PageDto {
            items: bookings.into_iter().map(to_booking_dto).collect(),
            total,
            page,
            per_page,
        })
    }
}
