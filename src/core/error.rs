use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Rejected request input (bad body, bad path id)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Resource not found
    #[error("{0} not found")]
    NotFound(String),

    /// HTTP verb not supported on the matched route
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Storage failure; the driver text is surfaced unchanged
    #[error("{0}")]
    Storage(#[from] sqlx::Error),

    /// Schema migration failure at startup
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal server errors
    #[error("{0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        let error_message = self.to_string();

        HttpResponse::build(status_code).json(serde_json::json!({
            "error": {
                "message": error_message,
                "code": status_code.as_u16(),
            }
        }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Migration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        AppError::NotFound(resource.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
