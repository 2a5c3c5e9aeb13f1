use axum::{
    extract::{FromRef, Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};
use tracing::{debug, warn};

use super::{claims::Claims, jwt::JwtKeys};
use crate::{error::ApiError, state::AppState};

/// Claims of the caller, inserted into request extensions by `require_auth`.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

/// Token following the `Bearer` scheme, if any.
pub(crate) fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

/// Rejects with 401 when no bearer token is sent and 403 when it does not verify.
/// The wrapped handler only runs for a valid token.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(req.headers()).ok_or_else(|| {
        debug!("rejected request: missing bearer token");
        ApiError::AuthMissing
    })?;

    let claims = JwtKeys::from_ref(&state).verify(token).map_err(|e| {
        warn!(error = %e, "invalid or expired token");
        ApiError::AuthInvalid
    })?;

    req.extensions_mut().insert(AuthUser(claims));
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(value: &str) -> HeaderMap {
        let mut h = HeaderMap::new();
        h.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        h
    }

    #[test]
    fn extracts_bearer_token() {
        assert_eq!(bearer_token(&headers("Bearer abc.def.ghi")), Some("abc.def.ghi"));
        assert_eq!(bearer_token(&headers("bearer abc")), Some("abc"));
    }

    #[test]
    fn missing_or_empty_token_is_none() {
        assert_eq!(bearer_token(&HeaderMap::new()), None);
        assert_eq!(bearer_token(&headers("Bearer")), None);
        assert_eq!(bearer_token(&headers("Bearer   ")), None);
    }

    #[test]
    fn other_schemes_are_ignored() {
        assert_eq!(bearer_token(&headers("Basic dXNlcjpwYXNz")), None);
    }
}
