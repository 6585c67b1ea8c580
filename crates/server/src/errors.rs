use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use header_theme_branding::BrandingError;
use header_theme_core::ThemeError;
use serde_json::json;
use std::fmt;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": {
                "message": self.message,
                "status": self.status.as_u16(),
            }
        }));

        (self.status, body).into_response()
    }
}

impl From<BrandingError> for AppError {
    fn from(err: BrandingError) -> Self {
        match err {
            BrandingError::EmptyUpload => Self::bad_request("No selected file"),
            BrandingError::InvalidImage(e) => {
                tracing::warn!(error = %e, "rejected logo upload");
                Self::bad_request("Invalid image format or corrupted image")
            }
            BrandingError::CorruptLogo => {
                tracing::error!("stored logo failed validation");
                Self::internal("Retrieved logo is not a valid image")
            }
            BrandingError::CorruptStyle(e) => {
                tracing::error!(error = %e, "stored header style is unreadable");
                Self::internal("Stored header style is corrupt")
            }
            other => {
                tracing::error!(error = ?other, "storage operation failed");
                Self::internal("Storage operation failed")
            }
        }
    }
}

impl From<ThemeError> for AppError {
    fn from(err: ThemeError) -> Self {
        Self::bad_request(err.to_string())
    }
}
