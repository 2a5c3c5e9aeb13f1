use crate::state::AppState;
use axum::Router;

mod claims;
mod dto;
pub mod handlers;
pub mod jwt;
pub mod middleware;
pub mod password;

pub use claims::Claims;
pub use jwt::JwtKeys;
pub use middleware::{require_auth, AuthUser};

/// Public routes: `POST /login`, `POST /signup`.
pub fn router() -> Router<AppState> {
    handlers::auth_routes()
}
