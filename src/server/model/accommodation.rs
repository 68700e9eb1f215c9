use chrono::NaiveDate;

use crate::{
    model::{
        accommodation::{
            BookStayDto, BookingDto, CreateFoodDto, CreateStayDto, FoodDto, MealType, StayDto,
            WEEKDAYS,
        },
        api::FieldErrorDto,
    },
    server::{
        error::validation::ValidationError,
        model::{check_amount, check_length, check_phone, participation::parse_status},
        service::storage::key_belongs_to,
    },
};

const MAX_NIGHTS: i64 = 14;
const MAX_GUESTS: i32 = 6;

pub fn stay_dto(stay: entity::stay::Model) -> StayDto {
    StayDto {
        id: stay.id,
        place: stay.place,
        description: stay.description,
        price: stay.price,
    }
}

pub fn food_dto(food: entity::food::Model) -> FoodDto {
    FoodDto {
        id: food.id,
        meal_type: MealType::parse(&food.meal_type).unwrap_or(MealType::Lunch),
        weekday: food.weekday,
        items: food.items,
        price: food.price,
    }
}

/// Position of a weekday in the week, unknown names sort last.
pub fn weekday_index(weekday: &str) -> usize {
    WEEKDAYS
        .iter()
        .position(|d| *d == weekday)
        .unwrap_or(WEEKDAYS.len())
}

pub fn booking_dto(booking: entity::stay_booking::Model, place: String) -> BookingDto {
    BookingDto {
        id: booking.id,
        stay_id: booking.stay_id,
        place,
        name: booking.name,
        email: booking.email,
        phone: booking.phone,
        check_in: booking.check_in,
        check_out: booking.check_out,
        guests: booking.guests,
        amount: booking.amount,
        status: parse_status(&booking.status),
        payment_screenshot_key: booking.payment_screenshot_key,
        transaction_id: booking.transaction_id,
        payment_verified_at: booking.payment_verified_at,
        created_at: booking.created_at,
    }
}

#[derive(Debug, Clone)]
pub struct CreateStayParams {
    pub place: String,
    pub description: Option<String>,
    pub price: i32,
}

impl CreateStayParams {
    pub fn from_dto(dto: CreateStayDto) -> Result<Self, ValidationError> {
        let mut errors = Vec::new();
        check_length(&mut errors, "place", "Place", &dto.place, 2, 120);
        check_amount(&mut errors, "price", "Price", dto.price);
        ValidationError::check(errors)?;

        Ok(Self {
            place: dto.place.trim().to_string(),
            description: dto.description.filter(|d| !d.trim().is_empty()),
            price: dto.price,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateFoodParams {
    pub weekday: String,
    pub meal_type: MealType,
    pub items: String,
    pub price: i32,
}

impl CreateFoodParams {
    pub fn from_dto(dto: CreateFoodDto) -> Result<Self, ValidationError> {
        let mut errors = Vec::new();
        let weekday = dto.weekday.trim().to_uppercase();
        if !WEEKDAYS.contains(&weekday.as_str()) {
            errors.push(FieldErrorDto::new("weekday", "Unknown weekday"));
        }
        check_length(&mut errors, "items", "Items", &dto.items, 2, 500);
        check_amount(&mut errors, "price", "Price", dto.price);
        ValidationError::check(errors)?;

        Ok(Self {
            weekday,
            meal_type: dto.meal_type,
            items: dto.items.trim().to_string(),
            price: dto.price,
        })
    }
}

#[derive(Debug, Clone)]
pub struct BookStayParams {
    pub stay_id: i32,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: i32,
    pub phone: String,
    pub screenshot_key: String,
    pub transaction_id: Option<String>,
}

impl BookStayParams {
    pub fn from_dto(dto: BookStayDto, user_id: i32) -> Result<Self, ValidationError> {
        let mut errors = Vec::new();

        let nights = (dto.check_out - dto.check_in).num_days();
        if nights < 1 {
            errors.push(FieldErrorDto::new(
                "check_out",
                "Check-out must be after check-in",
            ));
        } else if nights > MAX_NIGHTS {
            errors.push(FieldErrorDto::new(
                "check_out",
                format!("Bookings are limited to {} nights", MAX_NIGHTS),
            ));
        }
        if dto.guests < 1 || dto.guests > MAX_GUESTS {
            errors.push(FieldErrorDto::new(
                "guests",
                format!("Guests must be between 1 and {}", MAX_GUESTS),
            ));
        }
        check_phone(&mut errors, "phone", &dto.phone);
        if !key_belongs_to(&dto.screenshot_key, "payments", user_id) {
            errors.push(FieldErrorDto::new(
                "screenshot_key",
                "Upload a payment screenshot first",
            ));
        }
        let transaction_id = dto
            .transaction_id
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        if transaction_id.as_ref().is_some_and(|t| t.chars().count() > 64) {
            errors.push(FieldErrorDto::new(
                "transaction_id",
                "Transaction ID must be at most 64 characters",
            ));
        }
        ValidationError::check(errors)?;

        Ok(Self {
            stay_id: dto.stay_id,
            check_in: dto.check_in,
            check_out: dto.check_out,
            guests: dto.guests,
            phone: dto.phone.trim().to_string(),
            screenshot_key: dto.screenshot_key,
            transaction_id,
        })
    }

    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    /// Price per guest per night times nights times guests.
    ///
    /// Stays priced before the price cap existed can still overflow `i32`; such a
    /// booking is rejected rather than stored with a wrapped amount.
    pub fn amount(&self, price: i32) -> Result<i32, ValidationError> {
        i32::try_from(self.nights())
            .ok()
            .and_then(|nights| price.checked_mul(nights))
            .and_then(|total| total.checked_mul(self.guests))
            .ok_or_else(|| ValidationError::field("guests", "Booking total is too large"))
    }
}
