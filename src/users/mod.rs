pub mod dto;
pub mod handlers;
pub mod repo;
mod repo_types;

use axum::Router;

use crate::state::AppState;

pub use repo::{PgUserStore, UserStore};
pub use repo_types::{User, UserChanges};

/// Protected routes; the caller wraps them with `auth::require_auth`.
pub fn router() -> Router<AppState> {
    handlers::user_routes()
}
