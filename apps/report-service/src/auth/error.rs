use jsonwebtoken::errors::{Error as JwtError, ErrorKind};
use thiserror::Error;

/// Why the gate refused a bearer token.
///
/// The variants only matter for logs; at the HTTP boundary all of them
/// become the same 401 response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("token could not be decoded")]
    TokenMalformed,
    #[error("token failed verification ({reason})")]
    TokenSignatureInvalid { reason: &'static str },
    #[error("token has no subject claim")]
    SubjectMissing,
    #[error("token subject is not a numeric user id")]
    SubjectInvalid,
}

impl AuthError {
    pub(crate) fn signature(reason: &'static str) -> Self {
        Self::TokenSignatureInvalid { reason }
    }

    /// Stable snake_case code for structured logs.
    pub fn reason_code(&self) -> &'static str {
        match self {
            AuthError::TokenMalformed => "token_malformed",
            AuthError::TokenSignatureInvalid { reason } => reason,
            AuthError::SubjectMissing => "subject_missing",
            AuthError::SubjectInvalid => "subject_invalid",
        }
    }
}

impl From<JwtError> for AuthError {
    fn from(e: JwtError) -> Self {
        match e.kind() {
            ErrorKind::InvalidToken
            | ErrorKind::Base64(_)
            | ErrorKind::Json(_)
            | ErrorKind::Utf8(_) => AuthError::TokenMalformed,
            ErrorKind::InvalidSignature => AuthError::signature("invalid_signature"),
            ErrorKind::ExpiredSignature => AuthError::signature("token_expired"),
            ErrorKind::ImmatureSignature => AuthError::signature("token_not_yet_valid"),
            ErrorKind::InvalidIssuer => AuthError::signature("invalid_issuer"),
            ErrorKind::InvalidAlgorithm => AuthError::signature("invalid_algorithm"),
            _ => AuthError::signature("invalid_claims"),
        }
    }
}
