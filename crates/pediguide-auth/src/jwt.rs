use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AuthError;

/// One day.
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 86_400;

/// Claims carried by a doctor session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorClaims {
    /// Doctor id.
    pub id: Uuid,
    pub iat: i64,
    pub exp: i64,
}

/// Sign an HS256 token for `doctor_id`, valid for `ttl_secs` from now.
pub fn issue_token(doctor_id: Uuid, secret: &str, ttl_secs: i64) -> Result<String, AuthError> {
    let now = jiff::Timestamp::now().as_second();
    let claims = DoctorClaims {
        id: doctor_id,
        iat: now,
        exp: now + ttl_secs,
    };
    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;
    tracing::debug!(doctor_id = %doctor_id, ttl_secs, "issued doctor token");
    Ok(token)
}

/// Check signature and expiry, returning the claims.
pub fn validate_token(token: &str, secret: &str) -> Result<DoctorClaims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    validation.leeway = 0;
    validation.set_required_spec_claims(&["exp"]);

    let data = decode::<DoctorClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )?;
    Ok(data.claims)
}
