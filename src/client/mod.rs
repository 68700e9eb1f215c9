#[cfg(feature = "web")]
pub mod api;
pub mod app;
pub mod component;
pub mod constant;
pub mod model;
pub mod route;
pub mod router;
pub mod store;

pub use app::App;
