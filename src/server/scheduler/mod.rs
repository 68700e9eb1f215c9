//! Cron jobs started alongside the web server.

pub mod outbox;
