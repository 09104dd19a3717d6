use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use uuid::Uuid;

use pediguide_auth::jwt::validate_token;

use crate::error::ApiError;
use crate::state::AppState;

/// A doctor authenticated by `Authorization: Bearer <jwt>`.
///
/// Taking this as a handler argument makes the route doctor-only: a missing
/// token is rejected with 401, an invalid or expired one with 403.
#[derive(Clone, Copy, Debug)]
pub struct AuthDoctor {
    pub id: Uuid,
}

impl FromRequestParts<AppState> for AuthDoctor {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers)
            .ok_or_else(|| ApiError::Unauthorized("Access denied. No token provided.".to_string()))?;

        let claims = validate_token(token, &state.jwt_secret).map_err(|e| {
            tracing::debug!(error = %e, "rejected bearer token");
            ApiError::Forbidden("Invalid or expired token".to_string())
        })?;

        Ok(AuthDoctor { id: claims.id })
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}
