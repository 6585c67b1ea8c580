use axum::{
    body::Bytes,
    extract::{Multipart, Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use header_theme_branding::BrandingError;
use header_theme_core::{HeaderStyle, StyleSource, Theme};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    errors::{AppError, AppResult},
    state::AppState,
};

const UPLOAD_FIELD: &str = "logo";

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub message: String,
    pub dominant_color: String,
    pub complementary_color: String,
    pub source: StyleSource,
}

#[derive(Debug, Deserialize)]
pub struct ThemeQuery {
    pub color: Option<String>,
}

/// Runs storage and image work off the async executor.
async fn run_blocking<T, F>(f: F) -> AppResult<T>
where
    F: FnOnce() -> Result<T, BrandingError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| AppError::internal(format!("background task failed: {e}")))?
        .map_err(AppError::from)
}

/// POST /api/upload-logo - store a logo and derive the header style from it.
pub async fn upload_logo(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    let mut upload: Option<Bytes> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::new(e.status(), e.body_text()))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let unnamed = field.file_name() == Some("");
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::new(e.status(), e.body_text()))?;
        if unnamed || data.is_empty() {
            return Err(AppError::bad_request("No selected file"));
        }
        upload = Some(data);
        break;
    }

    let data = upload.ok_or_else(|| AppError::bad_request("No logo file provided"))?;
    debug!(bytes = data.len(), "received logo upload");

    let branding = state.branding.clone();
    let style = run_blocking(move || branding.upload_logo(&data)).await?;

    Ok(Json(UploadResponse {
        message: "Logo uploaded and style generated".to_string(),
        dominant_color: style.dominant_color,
        complementary_color: style.complementary_color,
        source: style.source,
    }))
}

/// GET /api/header-style - the stored header style, or the default one.
pub async fn header_style(State(state): State<AppState>) -> AppResult<Json<HeaderStyle>> {
    let branding = state.branding.clone();
    let style = run_blocking(move || branding.header_style()).await?;
    Ok(Json(style))
}

/// GET /api/logo - the stored logo bytes.
pub async fn logo(State(state): State<AppState>) -> AppResult<Response> {
    let branding = state.branding.clone();
    let logo = run_blocking(move || branding.logo())
        .await?
        .ok_or_else(|| AppError::not_found("Logo not found"))?;

    Ok((
        [
            (header::CONTENT_TYPE, logo.content_type),
            (header::CACHE_CONTROL, "no-cache"),
        ],
        logo.bytes,
    )
        .into_response())
}

/// GET /api/theme?color=%23rrggbb - theme preview for a color.
pub async fn theme(Query(query): Query<ThemeQuery>) -> AppResult<Json<Theme>> {
    let theme = Theme::derive(query.color.as_deref())?;
    Ok(Json(theme))
}
