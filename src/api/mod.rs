// API routes and handlers

pub mod auth;
pub mod error;
pub mod goals;
pub mod health;
pub mod progress;
pub mod routes;
pub mod workout_plans;

pub use error::ApiError;
pub use routes::create_routes;
