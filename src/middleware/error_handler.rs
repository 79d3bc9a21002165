use actix_web::{
    error::{JsonPayloadError, PathError, QueryPayloadError},
    Error, HttpRequest, HttpResponse,
};

use crate::core::AppError;

/// Fallback handler for routes that matched on path but not on method
pub async fn method_not_allowed(req: HttpRequest) -> Result<HttpResponse, AppError> {
    tracing::warn!(
        method = %req.method(),
        path = %req.path(),
        "Method not allowed"
    );
    Err(AppError::MethodNotAllowed)
}

/// Malformed JSON bodies become validation errors with the standard envelope
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> Error {
    log_error("json", &err);
    AppError::validation(format!("Invalid request body: {}", err)).into()
}

/// Non-numeric or otherwise unparsable path segments
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> Error {
    log_error("path", &err);
    AppError::validation(format!("Invalid path parameter: {}", err)).into()
}

pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> Error {
    log_error("query", &err);
    AppError::validation(format!("Invalid query string: {}", err)).into()
}

pub fn log_error(source: &str, err: &dyn std::fmt::Display) {
    tracing::debug!(source = source, error = %err, "Rejected request input");
}
