use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct EventDto {
    pub id: i32,
    pub slug: String,
    pub name: String,
    pub description: String,
    pub venue: Option<String>,
    /// Fee in whole rupees, 0 for free events.
    pub fee: i32,
    pub team_event: bool,
    pub min_team_size: i32,
    pub max_team_size: i32,
    pub registration_open: bool,
    pub starts_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CreateEventDto {
    pub slug: String,
    pub name: String,
    pub description: String,
    pub venue: Option<String>,
    pub fee: i32,
    #[serde(default)]
    pub team_event: bool,
    #[serde(default = "default_team_size")]
    pub min_team_size: i32,
    #[serde(default = "default_team_size")]
    pub max_team_size: i32,
    pub starts_at: DateTime<Utc>,
}

fn default_team_size() -> i32 {
    1
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct SetRegistrationOpenDto {
    pub open: bool,
}
