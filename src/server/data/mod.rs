//! Database repository layer for all domain entities.
//!
//! Each repository borrows a connection and performs the CRUD work for one area.
//! Repositories are generic over `ConnectionTrait` so services can run several of them
//! inside one `DatabaseTransaction`. They return entity models; conversion to DTOs
//! happens in `server::model`.

pub mod accommodation;
pub mod announcement;
pub mod event;
pub mod outbox;
pub mod participation;
pub mod support;
pub mod team;
pub mod user;

#[cfg(test)]
mod test;

use sea_orm::{DbErr, SqlErr};

/// Whether the error is a unique constraint violation raised by the database.
pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

/// Whether the error is a foreign key violation, e.g. deleting a row still referenced
/// by another table.
pub fn is_foreign_key_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_)))
}
