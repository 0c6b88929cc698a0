// Export pipeline: turns a portfolio snapshot into a downloadable artifact.
// Renderers only read the record; required-field checks happen before they run.

pub mod capture;
pub mod component;
pub mod document;
pub mod handlers;
pub mod pdf;

use std::sync::LazyLock;

use axum::{
    http::header,
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use regex::Regex;

use crate::errors::AppError;
use crate::models::PortfolioRecord;

pub const HTML_MIME: &str = "text/html";
pub const COMPONENT_MIME: &str = "text/javascript";
pub const PDF_MIME: &str = "application/pdf";
pub const COMPONENT_FILENAME: &str = "Portfolio.jsx";

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// A rendered export ready to be handed to the caller as a download.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub filename: String,
    pub mime_type: &'static str,
    pub bytes: Bytes,
}

impl Artifact {
    pub fn new(filename: impl Into<String>, mime_type: &'static str, bytes: impl Into<Bytes>) -> Self {
        Self {
            filename: filename.into(),
            mime_type,
            bytes: bytes.into(),
        }
    }
}

impl IntoResponse for Artifact {
    fn into_response(self) -> Response {
        let disposition = format!(
            "attachment; filename=\"{}\"",
            self.filename.replace('"', "")
        );
        (
            [
                (header::CONTENT_TYPE, self.mime_type.to_string()),
                (header::CONTENT_DISPOSITION, disposition),
            ],
            self.bytes,
        )
            .into_response()
    }
}

/// Lowercases and replaces every whitespace run with `-`.
pub fn slugify(full_name: &str) -> String {
    WHITESPACE_RUN
        .replace_all(&full_name.trim().to_lowercase(), "-")
        .into_owned()
}

/// `<slug>-portfolio.<ext>`
pub fn portfolio_filename(full_name: &str, extension: &str) -> String {
    format!("{}-portfolio.{extension}", slugify(full_name))
}

/// Name, title and email must be present before any export.
pub fn validate_for_export(record: &PortfolioRecord) -> Result<(), AppError> {
    let info = &record.personal_info;
    let missing: Vec<&str> = [
        ("fullName", &info.full_name),
        ("title", &info.title),
        ("email", &info.email),
    ]
    .into_iter()
    .filter(|(_, value)| value.trim().is_empty())
    .map(|(field, _)| field)
    .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "Please complete the required fields before exporting: {}",
            missing.join(", ")
        )))
    }
}
