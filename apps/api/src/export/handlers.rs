//! Axum route handlers for the Export API.

use axum::{extract::Multipart, Json};
use bytes::Bytes;
use serde::Deserialize;
use tracing::info;

use super::capture::ImageCapture;
use super::pdf::{render_pdf, PdfExportError};
use super::{
    component, document, portfolio_filename, validate_for_export, Artifact, COMPONENT_FILENAME,
    COMPONENT_MIME, HTML_MIME,
};
use crate::errors::AppError;
use crate::models::{PortfolioRecord, ThemeId};

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    pub portfolio: PortfolioRecord,
    /// Overrides the record's own theme when present.
    pub theme: Option<String>,
}

impl ExportRequest {
    fn theme(&self) -> ThemeId {
        self.theme
            .as_deref()
            .map(ThemeId::from_id)
            .unwrap_or(self.portfolio.theme)
    }
}

/// POST /api/v1/exports/html
pub async fn handle_export_html(
    Json(request): Json<ExportRequest>,
) -> Result<Artifact, AppError> {
    validate_for_export(&request.portfolio)?;
    let theme = request.theme();
    let html = document::render(&request.portfolio, theme);
    let filename = portfolio_filename(&request.portfolio.personal_info.full_name, "html");
    info!("Exported {filename} ({})", theme.as_str());
    Ok(Artifact::new(filename, HTML_MIME, html))
}

/// POST /api/v1/exports/component
pub async fn handle_export_component(
    Json(request): Json<ExportRequest>,
) -> Result<Artifact, AppError> {
    validate_for_export(&request.portfolio)?;
    let source = component::render(&request.portfolio, request.theme())
        .map_err(|e| AppError::Internal(e.into()))?;
    info!("Exported {COMPONENT_FILENAME}");
    Ok(Artifact::new(COMPONENT_FILENAME, COMPONENT_MIME, source))
}

/// POST /api/v1/exports/pdf
///
/// Multipart form: `fullName` (text) and `snapshot` (PNG of the rendered portfolio).
/// A missing or undecodable snapshot fails like any other capture error.
pub async fn handle_export_pdf(mut multipart: Multipart) -> Result<Artifact, AppError> {
    let mut full_name = String::new();
    let mut snapshot: Option<Bytes> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(e.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "fullName" => {
                full_name = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(e.to_string()))?;
            }
            "snapshot" => {
                snapshot = Some(
                    field
                        .bytes()
                        .await
                        .map_err(|e| AppError::Validation(e.to_string()))?,
                );
            }
            _ => {}
        }
    }

    if full_name.trim().is_empty() {
        return Err(AppError::Validation(
            "Please complete the required fields before exporting: fullName".to_string(),
        ));
    }

    let mut capture = match snapshot.as_deref().map(ImageCapture::from_png).transpose() {
        Ok(capture) => capture,
        Err(failure) => {
            tracing::error!(error = %failure, "Snapshot could not be decoded");
            return Err(PdfExportError::from(failure).into());
        }
    };

    let artifact = render_pdf(capture.as_mut(), &full_name).await?;
    Ok(artifact)
}
