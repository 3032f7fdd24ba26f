use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{encode, EncodingKey, Header};

use super::claims::{Subject, TokenClaims};
use crate::error::AppError;
use crate::state::security_config::SecurityConfig;

/// Mint an access token for `user_id`, valid for the configured TTL from `now`.
///
/// The subject is written as a decimal string, the form most JWT issuers use.
pub fn mint_access_token(
    user_id: i64,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, AppError> {
    let iat = now
        .duration_since(UNIX_EPOCH)
        .map_err(|_| AppError::internal("Failed to get current time".to_string()))?
        .as_secs() as i64;

    let exp = iat + security.token_ttl.as_secs() as i64;

    let claims = TokenClaims {
        sub: Some(Subject::Text(user_id.to_string())),
        exp,
        iat: Some(iat),
        iss: security.issuer.clone(),
    };

    encode(
        &Header::new(security.algorithm),
        &claims,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|e| AppError::internal(format!("Failed to encode JWT: {e}")))
}
