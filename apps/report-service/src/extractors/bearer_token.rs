use actix_web::dev::Payload;
use actix_web::http::header::{self, HeaderMap, HeaderValue};
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::error::AppError;
use crate::logging::security;

/// Raw token taken from an `Authorization: Bearer <token>` header.
///
/// Holding one says nothing about validity; it only means the header was
/// well-formed. Pass it to the gate to get an identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse the `Authorization` header out of a header map.
    pub fn from_headers(headers: &HeaderMap) -> Result<Self, AppError> {
        parse_authorization(headers.get(header::AUTHORIZATION))
    }
}

/// Accepts exactly `Bearer <token>`: two whitespace-separated parts,
/// case-sensitive scheme, non-empty token.
pub fn parse_authorization(value: Option<&HeaderValue>) -> Result<BearerToken, AppError> {
    let value = value.ok_or_else(AppError::unauthenticated)?;
    let value = value.to_str().map_err(|_| AppError::unauthenticated())?;

    let mut parts = value.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) if !token.is_empty() => {
            Ok(BearerToken(token.to_string()))
        }
        _ => Err(AppError::unauthenticated()),
    }
}

impl FromRequest for BearerToken {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let token = Self::from_headers(req.headers());
        if token.is_err() {
            security::bearer_missing(req.path());
        }
        ready(token)
    }
}
