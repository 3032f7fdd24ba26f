use actix_web::dev::Payload;
use actix_web::http::header::HeaderMap;
use actix_web::{web, FromRequest, HttpMessage, HttpRequest};
use futures_util::future::{ready, Ready};

use super::bearer_token::BearerToken;
use crate::auth::Identity;
use crate::error::AppError;
use crate::logging::security;
use crate::state::app_state::AppState;

/// Handlers take `Identity` as an argument to require authentication.
///
/// Behind the `RequireIdentity` middleware the identity is already in the
/// request extensions and is reused; otherwise the bearer token is read and
/// verified here.
impl FromRequest for Identity {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        if let Some(identity) = req.extensions().get::<Identity>() {
            return ready(Ok(*identity));
        }

        ready(resolve_identity(
            req.headers(),
            req.path(),
            req.app_data::<web::Data<AppState>>(),
        ))
    }
}

/// Header to identity: the one pipeline behind both the extractor and the
/// `RequireIdentity` middleware.
pub(crate) fn resolve_identity(
    headers: &HeaderMap,
    path: &str,
    app_state: Option<&web::Data<AppState>>,
) -> Result<Identity, AppError> {
    let token = BearerToken::from_headers(headers).inspect_err(|_| {
        security::bearer_missing(path);
    })?;

    let app_state =
        app_state.ok_or_else(|| AppError::internal("AppState not available".to_string()))?;

    Ok(app_state.authenticate(token.as_str())?)
}
