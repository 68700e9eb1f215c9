use chrono::{DateTime, Utc};

use crate::{
    model::{
        api::FieldErrorDto,
        event::{CreateEventDto, EventDto},
    },
    server::{
        error::validation::ValidationError,
        model::{check_amount, check_length},
    },
};

pub fn event_dto(event: entity::event::Model) -> EventDto {
    EventDto {
        id: event.id,
        slug: event.slug,
        name: event.name,
        description: event.description,
        venue: event.venue,
        fee: event.fee,
        team_event: event.team_event,
        min_team_size: event.min_team_size,
        max_team_size: event.max_team_size,
        registration_open: event.registration_open,
        starts_at: event.starts_at,
    }
}

#[derive(Debug, Clone)]
pub struct CreateEventParams {
    pub slug: String,
    pub name: String,
    pub description: String,
    pub venue: Option<String>,
    pub fee: i32,
    pub team_event: bool,
    pub min_team_size: i32,
    pub max_team_size: i32,
    pub starts_at: DateTime<Utc>,
}

impl CreateEventParams {
    pub fn from_dto(dto: CreateEventDto) -> Result<Self, ValidationError> {
        let mut errors = Vec::new();

        let slug = dto.slug.trim().to_lowercase();
        if slug.is_empty()
            || !slug
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            errors.push(FieldErrorDto::new(
                "slug",
                "Slug may only contain lowercase letters, digits and dashes",
            ));
        }
        check_length(&mut errors, "name", "Name", &dto.name, 3, 120);
        check_amount(&mut errors, "fee", "Fee", dto.fee);

        let (min_team_size, max_team_size) = if dto.team_event {
            (dto.min_team_size, dto.max_team_size)
        } else {
            (1, 1)
        };
        if min_team_size < 1 || max_team_size < min_team_size {
            errors.push(FieldErrorDto::new(
                "max_team_size",
                "Team size bounds are invalid",
            ));
        }
        ValidationError::check(errors)?;

        Ok(Self {
            slug,
            name: dto.name.trim().to_string(),
            description: dto.description,
            venue: dto.venue.filter(|v| !v.trim().is_empty()),
            fee: dto.fee,
            team_event: dto.team_event,
            min_team_size,
            max_team_size,
            starts_at: dto.starts_at,
        })
    }
}
