//! Shared helpers for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user registered for a fresh paid event.
///
/// # Returns
/// - `Ok((user, event, participation))` - Created entities, participation in `REGISTERED`
/// - `Err(DbErr)` - Database error during creation
pub async fn create_registered_participant(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::event::Model,
        entity::participation::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let event = crate::factory::event::create_event(db).await?;
    let participation =
        crate::factory::participation::create_participation(db, &user, &event).await?;

    Ok((user, event, participation))
}

/// Creates a team event and a team led by a freshly registered user.
///
/// The leader is also inserted as the team's first member.
///
/// # Returns
/// - `Ok((leader, event, leader_participation, team))`
/// - `Err(DbErr)` - Database error during creation
pub async fn create_team_with_leader(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::event::Model,
        entity::participation::Model,
        entity::team::Model,
    ),
    DbErr,
> {
    let leader = crate::factory::user::create_user(db).await?;
    let event = crate::factory::event::create_team_event(db).await?;
    let participation =
        crate::factory::participation::create_participation(db, &leader, &event).await?;
    let team = crate::factory::team::create_team(db, &event, &participation).await?;
    crate::factory::team::create_team_member(db, &team, &participation).await?;

    Ok((leader, event, participation, team))
}
