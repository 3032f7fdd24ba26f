use serde::Serialize;

use super::claims::TokenClaims;
use super::error::AuthError;

/// Authenticated caller, resolved from a verified bearer token.
///
/// There is no public constructor: the only way to obtain one outside this
/// crate is through [`AuthGate::authenticate`](super::AuthGate::authenticate)
/// or the request extractor built on top of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Identity {
    user_id: i64,
}

impl Identity {
    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    /// Resolve the subject of claims that already passed verification.
    pub(crate) fn from_verified_claims(claims: &TokenClaims) -> Result<Self, AuthError> {
        let subject = claims.sub.as_ref().ok_or(AuthError::SubjectMissing)?;
        let user_id = subject.user_id().ok_or(AuthError::SubjectInvalid)?;
        Ok(Self { user_id })
    }
}
