//! Sign arbitrary claim sets, including ones a real issuer would never mint.

use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde_json::Value;

/// Seconds since the epoch, right now.
pub fn now_secs() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before epoch")
        .as_secs() as i64
}

/// HS256-sign `claims` with `secret`.
pub fn sign_claims(claims: &Value, secret: &[u8]) -> String {
    sign_claims_with(claims, secret, Algorithm::HS256)
}

pub fn sign_claims_with(claims: &Value, secret: &[u8], algorithm: Algorithm) -> String {
    encode(
        &Header::new(algorithm),
        claims,
        &EncodingKey::from_secret(secret),
    )
    .expect("Failed to encode JWT")
}

/// Replace the final character of `token` with a different base64url one.
pub fn tamper_last_char(token: &str) -> String {
    let mut chars: Vec<char> = token.chars().collect();
    if let Some(last) = chars.last_mut() {
        *last = if *last == 'A' { 'B' } else { 'A' };
    }
    chars.into_iter().collect()
}
