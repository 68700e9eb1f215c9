mod outbox;
mod participation;
mod support;
mod team;
mod user;
