use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{HeaderName, HeaderValue},
    Error, HttpMessage,
};
use futures_util::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::time::Instant;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request id stored in request extensions for handlers that want it
#[derive(Debug, Clone)]
pub struct RequestIdValue(pub String);

/// Tags every request with an id, logs start and completion, and echoes the
/// id back in the `X-Request-ID` response header.
pub struct RequestId;

impl<S, B> Transform<S, ServiceRequest> for RequestId
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestIdMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestIdMiddleware { service }))
    }
}

pub struct RequestIdMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequestIdMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let request_id = req
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|h| h.to_str().ok())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        req.extensions_mut().insert(RequestIdValue(request_id.clone()));

        let method = req.method().clone();
        let path = req.path().to_string();
        let started = Instant::now();

        tracing::info!(
            request_id = %request_id,
            method = %method,
            path = %path,
            "Incoming request"
        );

        let fut = self.service.call(req);

        Box::pin(async move {
            let mut res = fut.await?;

            if let Ok(value) = HeaderValue::from_str(&request_id) {
                res.headers_mut()
                    .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
            }

            tracing::info!(
                request_id = %request_id,
                status = %res.status(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Request completed"
            );

            Ok(res)
        })
    }
}
