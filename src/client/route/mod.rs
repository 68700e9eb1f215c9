pub mod accommodation;
pub mod admin;
pub mod event;
pub mod home;
pub mod login;
pub mod support;
pub mod ticket;

pub use accommodation::Accommodation;
pub use admin::{Admin, AdminPayments};
pub use event::EventPage;
pub use home::Home;
pub use login::Login;
pub use support::Support;
pub use ticket::Ticket;
