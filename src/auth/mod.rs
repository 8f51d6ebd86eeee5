// Authentication: password hashing, JWT tokens, credential stores and middleware

pub mod errors;
pub mod jwt;
pub mod middleware;
pub mod models;
pub mod password;
pub mod service;

pub use errors::AuthError;
pub use jwt::{extract_bearer_token, JwtService};
pub use middleware::{trainer_auth_middleware, user_auth_middleware};
pub use models::*;
pub use service::AuthService;
