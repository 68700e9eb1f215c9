use crate::{
    model::{
        api::FieldErrorDto,
        participation::{
            CheckoutDto, ParticipationDto, ParticipationStatus, RegistrationDto,
            ReuploadPaymentDto,
        },
        validation::validate_registrant,
    },
    server::{
        error::validation::ValidationError,
        service::storage::key_belongs_to,
    },
};

/// Point-in-time copy of the registrant's identity, stored on the participation and
/// on team rows. Only an explicit profile sync rewrites it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrantSnapshot {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub college: String,
}

impl RegistrantSnapshot {
    fn build(
        errors: &mut Vec<FieldErrorDto>,
        name: String,
        email: &str,
        phone: String,
        college: String,
    ) -> Self {
        let snapshot = Self {
            name: name.trim().to_string(),
            email: email.to_string(),
            phone: phone.trim().to_string(),
            college: college.trim().to_string(),
        };
        errors.extend(validate_registrant(
            &snapshot.name,
            &snapshot.phone,
            &snapshot.college,
        ));
        snapshot
    }
}

#[derive(Debug, Clone)]
pub struct RegistrationParams {
    pub snapshot: RegistrantSnapshot,
}

impl RegistrationParams {
    /// `email` is the authenticated user's email, never client supplied.
    pub fn from_dto(dto: RegistrationDto, email: &str) -> Result<Self, ValidationError> {
        let mut errors = Vec::new();
        let snapshot = RegistrantSnapshot::build(&mut errors, dto.name, email, dto.phone, dto.college);
        ValidationError::check(errors)?;

        Ok(Self { snapshot })
    }
}

#[derive(Debug, Clone)]
pub struct CheckoutParams {
    pub snapshot: RegistrantSnapshot,
    pub screenshot_key: String,
    pub transaction_id: Option<String>,
}

fn check_transaction_id(errors: &mut Vec<FieldErrorDto>, transaction_id: &Option<String>) {
    if let Some(id) = transaction_id {
        if id.chars().count() > 64 {
            errors.push(FieldErrorDto::new(
                "transaction_id",
                "Transaction ID must be at most 64 characters",
            ));
        }
    }
}

fn check_screenshot_key(errors: &mut Vec<FieldErrorDto>, key: &str, user_id: i32) {
    if !key_belongs_to(key, "payments", user_id) {
        errors.push(FieldErrorDto::new(
            "screenshot_key",
            "Upload a payment screenshot first",
        ));
    }
}

fn normalize_transaction_id(transaction_id: Option<String>) -> Option<String> {
    transaction_id
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}

impl CheckoutParams {
    pub fn from_dto(dto: CheckoutDto, user_id: i32, email: &str) -> Result<Self, ValidationError> {
        let mut errors = Vec::new();
        let snapshot = RegistrantSnapshot::build(&mut errors, dto.name, email, dto.phone, dto.college);
        let transaction_id = normalize_transaction_id(dto.transaction_id);
        check_transaction_id(&mut errors, &transaction_id);
        check_screenshot_key(&mut errors, &dto.screenshot_key, user_id);
        ValidationError::check(errors)?;

        Ok(Self {
            snapshot,
            screenshot_key: dto.screenshot_key,
            transaction_id,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ReuploadPaymentParams {
    pub participation_id: i32,
    pub screenshot_key: String,
    pub transaction_id: Option<String>,
}

impl ReuploadPaymentParams {
    pub fn from_dto(dto: ReuploadPaymentDto, user_id: i32) -> Result<Self, ValidationError> {
        let mut errors = Vec::new();
        let transaction_id = normalize_transaction_id(dto.transaction_id);
        check_transaction_id(&mut errors, &transaction_id);
        check_screenshot_key(&mut errors, &dto.screenshot_key, user_id);
        ValidationError::check(errors)?;

        Ok(Self {
            participation_id: dto.participation_id,
            screenshot_key: dto.screenshot_key,
            transaction_id,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct ParticipationFilter {
    pub event_id: Option<i32>,
    pub status: Option<ParticipationStatus>,
}

/// Stored statuses are written by this crate only; unknown values read as `Registered`.
pub fn parse_status(value: &str) -> ParticipationStatus {
    ParticipationStatus::parse(value).unwrap_or(ParticipationStatus::Registered)
}

pub fn participation_dto(
    participation: entity::participation::Model,
    event: Option<&entity::event::Model>,
    team_id: Option<i32>,
) -> ParticipationDto {
    ParticipationDto {
        id: participation.id,
        user_id: participation.user_id,
        event_id: participation.event_id,
        event_name: event.map(|e| e.name.clone()).unwrap_or_default(),
        event_slug: event.map(|e| e.slug.clone()).unwrap_or_default(),
        name: participation.name,
        email: participation.email,
        phone: participation.phone,
        college: participation.college,
        status: parse_status(&participation.status),
        payment_amount: participation.payment_amount,
        payment_screenshot_key: participation.payment_screenshot_key,
        transaction_id: participation.transaction_id,
        payment_submitted_at: participation.payment_submitted_at,
        payment_verified_at: participation.payment_verified_at,
        team_id,
        created_at: participation.created_at,
    }
}
