//! Scope-level authentication.
//!
//! Wrap a scope with [`RequireIdentity`] to authenticate every request in it
//! before routing. On success the [`Identity`](crate::auth::Identity) is
//! stored in the request extensions, where the `Identity` extractor picks it up. On failure the
//! request never reaches a handler and gets the 401 rejection response.

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::error::ResponseError;
use actix_web::{web, Error, HttpMessage};
use futures_util::future::{ready, LocalBoxFuture, Ready};

use crate::extractors::identity::resolve_identity;
use crate::state::app_state::AppState;

pub struct RequireIdentity;

impl<S, B> Transform<S, ServiceRequest> for RequireIdentity
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireIdentityMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireIdentityMiddleware { service }))
    }
}

pub struct RequireIdentityMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequireIdentityMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let resolved = resolve_identity(
            req.headers(),
            req.path(),
            req.app_data::<web::Data<AppState>>(),
        );

        match resolved {
            Ok(identity) => {
                // Store the identity BEFORE calling the service
                req.extensions_mut().insert(identity);

                let fut = self.service.call(req);
                Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) })
            }
            Err(err) => {
                // Answer here rather than returning Err so outer middleware
                // still sees a normal response.
                let (request, _payload) = req.into_parts();
                let response = err.error_response().map_into_right_body();
                Box::pin(async move { Ok(ServiceResponse::new(request, response)) })
            }
        }
    }
}
