use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::get,
    Extension, Json, Router,
};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use super::{dto::UpdateUserRequest, repo_types::UserChanges, User};
use crate::{
    auth::{password::hash_password_blocking, AuthUser},
    error::{ApiError, ApiResult},
    state::AppState,
};

/// Routes behind the auth gate: `GET /`, `PUT /:id`, `DELETE /:id`.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users))
        .route("/:id", axum::routing::put(update_user).delete(delete_user))
}

// A path segment that is not a UUID cannot name any row.
fn parse_id(raw: &str) -> ApiResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| {
        warn!(id = %raw, "malformed user id");
        ApiError::NotFound
    })
}

#[instrument(skip(state, caller))]
pub async fn list_users(
    State(state): State<AppState>,
    Extension(AuthUser(caller)): Extension<AuthUser>,
) -> ApiResult<Json<Vec<User>>> {
    let users = state
        .users
        .list_all()
        .await
        .map_err(ApiError::unexpected("Error retrieving users"))?;
    debug!(caller = %caller.id, count = users.len(), "listed users");
    Ok(Json(users))
}

#[instrument(skip(state, caller, body))]
pub async fn update_user(
    State(state): State<AppState>,
    Extension(AuthUser(caller)): Extension<AuthUser>,
    Path(id): Path<String>,
    body: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> ApiResult<Json<User>> {
    let id = parse_id(&id)?;
    let Json(payload) = body.map_err(ApiError::bad_body("Error updating user"))?;
    let password_hash = match payload.password {
        Some(plain) => Some(
            hash_password_blocking(plain)
                .await
                .map_err(ApiError::unexpected("Error updating user"))?,
        ),
        None => None,
    };
    let changes = UserChanges {
        email: payload.email,
        password_hash,
    };

    match state.users.update_by_id(id, changes).await {
        Ok(Some(user)) => {
            info!(user_id = %user.id, caller = %caller.id, "user updated");
            Ok(Json(user))
        }
        Ok(None) => {
            warn!(user_id = %id, "update target not found");
            Err(ApiError::NotFound)
        }
        Err(e) => Err(ApiError::unexpected("Error updating user")(e)),
    }
}

#[instrument(skip(state, caller))]
pub async fn delete_user(
    State(state): State<AppState>,
    Extension(AuthUser(caller)): Extension<AuthUser>,
    Path(id): Path<String>,
) -> ApiResult<Json<User>> {
    let id = parse_id(&id)?;

    match state.users.delete_by_id(id).await {
        Ok(Some(user)) => {
            info!(user_id = %user.id, caller = %caller.id, "user deleted");
            Ok(Json(user))
        }
        Ok(None) => {
            warn!(user_id = %id, "delete target not found");
            Err(ApiError::NotFound)
        }
        Err(e) => Err(ApiError::unexpected("Error deleting user")(e)),
    }
}
