use std::fmt;

use tracing::warn;

use crate::auth::AuthError;

/// Log a bearer token the gate refused.
///
/// Only a short fingerprint of the token is recorded, never the token itself.
pub fn auth_rejected(error: &AuthError, token: &str) {
    warn!(
        event = "SECURITY_AUTH_REJECTED",
        reason = error.reason_code(),
        token_fp = %TokenFingerprint(token),
        "Bearer token rejected"
    );
}

/// Log a request that reached a protected route without a usable
/// `Authorization: Bearer` header.
pub fn bearer_missing(path: &str) {
    warn!(
        event = "SECURITY_BEARER_MISSING",
        path,
        "Missing or malformed Authorization header"
    );
}

/// Displays the first 12 hex characters of the token's BLAKE3 digest.
///
/// Enough to correlate repeated failures of the same token across log lines
/// without making the token recoverable.
pub struct TokenFingerprint<'a>(pub &'a str);

impl fmt::Display for TokenFingerprint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digest = blake3::hash(self.0.as_bytes());
        f.write_str(&digest.to_hex().as_str()[..12])
    }
}
