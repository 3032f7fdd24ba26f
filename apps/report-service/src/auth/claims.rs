//! Typed claim set carried by access tokens.

use serde::{Deserialize, Serialize};

/// The `sub` claim as it appears on the wire.
///
/// Issuers put either a JSON string (`"42"`) or a JSON integer (`42`) here.
/// Anything else still decodes, so that a strange subject is reported as an
/// unusable subject rather than a malformed token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Subject {
    Numeric(i64),
    Text(String),
    Other(serde_json::Value),
}

impl Subject {
    /// Numeric user id, if the subject holds one.
    pub fn user_id(&self) -> Option<i64> {
        match self {
            Subject::Numeric(id) => Some(*id),
            Subject::Text(text) => text.parse::<i64>().ok(),
            Subject::Other(_) => None,
        }
    }
}

/// Claims decoded from a verified token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<Subject>,
    /// Expiry (seconds since epoch)
    pub exp: i64,
    /// Issued-at (seconds since epoch)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
}
