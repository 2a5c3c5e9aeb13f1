use axum::{
    extract::{rejection::JsonRejection, FromRef, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use tracing::{info, instrument, warn};

use super::{
    dto::{Credentials, TokenResponse},
    jwt::JwtKeys,
    password::{hash_password_blocking, verify_password_blocking},
};
use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
    users::User,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/signup", post(signup))
}

#[instrument(skip(state, body))]
pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<Credentials>, JsonRejection>,
) -> ApiResult<Json<TokenResponse>> {
    let Json(payload) = body.map_err(ApiError::bad_body("Error during login"))?;
    let failed = ApiError::unexpected("Error during login");

    let user = match state.users.find_by_email(&payload.email).await {
        Ok(Some(u)) => u,
        Ok(None) => {
            warn!(email = %payload.email, "login unknown email");
            return Err(ApiError::InvalidCredentials);
        }
        Err(e) => return Err(failed(e)),
    };

    let ok = match verify_password_blocking(payload.password, user.password.clone()).await {
        Ok(v) => v,
        Err(e) => return Err(failed(e)),
    };
    if !ok {
        warn!(user_id = %user.id, "login invalid password");
        return Err(ApiError::InvalidCredentials);
    }

    let token = JwtKeys::from_ref(&state).issue(&user).map_err(failed)?;

    info!(user_id = %user.id, email = %user.email, "user logged in");
    Ok(Json(TokenResponse { token }))
}

#[instrument(skip(state, body))]
pub async fn signup(
    State(state): State<AppState>,
    body: Result<Json<Credentials>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<User>)> {
    let Json(payload) = body.map_err(ApiError::bad_body("Error during signup"))?;
    let hash = hash_password_blocking(payload.password)
        .await
        .map_err(ApiError::unexpected("Error during signup"))?;

    let user = state
        .users
        .insert(&payload.email, &hash)
        .await
        .map_err(ApiError::unexpected("Error during signup"))?;

    info!(user_id = %user.id, email = %user.email, "user signed up");
    Ok((StatusCode::CREATED, Json(user)))
}
