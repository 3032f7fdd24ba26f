//! Bearer-token verification shared by every report service.

use std::fmt;

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, DecodingKey, Validation};

use super::claims::TokenClaims;
use super::error::AuthError;
use super::identity::Identity;
use crate::logging::security;
use crate::state::security_config::SecurityConfig;

/// Verifies bearer tokens and resolves them to an [`Identity`].
///
/// Built once at startup from the process-wide [`SecurityConfig`] and then
/// only read, so a single instance can be shared across all workers.
pub struct AuthGate {
    keys: Vec<DecodingKey>,
    validation: Validation,
}

impl AuthGate {
    pub fn new(security: &SecurityConfig) -> Self {
        let keys = security
            .verification_secrets()
            .map(DecodingKey::from_secret)
            .collect();

        // Pin the algorithm so a token cannot pick its own verification scheme.
        let mut validation = Validation::new(security.algorithm);
        validation.validate_exp = true;
        validation.leeway = security.leeway_secs;
        if let Some(issuer) = &security.issuer {
            validation.set_issuer(&[issuer.as_str()]);
            validation.set_required_spec_claims(&["exp", "iss"]);
        }

        Self { keys, validation }
    }

    /// Verify `token` and resolve its subject.
    ///
    /// Rejections are logged here; callers only decide how to answer.
    pub fn authenticate(&self, token: &str) -> Result<Identity, AuthError> {
        let result = self
            .verify(token)
            .and_then(|claims| Identity::from_verified_claims(&claims));

        if let Err(err) = &result {
            security::auth_rejected(err, token);
        }
        result
    }

    /// Decode and verify against each configured key in turn.
    ///
    /// Only a signature mismatch moves on to the next key; every other
    /// failure is independent of the key and ends verification.
    fn verify(&self, token: &str) -> Result<TokenClaims, AuthError> {
        for key in &self.keys {
            match decode::<TokenClaims>(token, key, &self.validation) {
                Ok(data) => return Ok(data.claims),
                Err(e) if matches!(e.kind(), ErrorKind::InvalidSignature) => continue,
                Err(e) => return Err(AuthError::from(e)),
            }
        }
        Err(AuthError::signature("invalid_signature"))
    }
}

impl fmt::Debug for AuthGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthGate")
            .field("keys", &self.keys.len())
            .field("algorithms", &self.validation.algorithms)
            .field("leeway", &self.validation.leeway)
            .finish()
    }
}
