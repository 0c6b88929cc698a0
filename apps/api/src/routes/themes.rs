use axum::{extract::Path, Json};

use crate::errors::AppError;
use crate::models::ThemeId;
use crate::theme::{all_themes, ThemeInfo};

/// GET /api/v1/themes
pub async fn handle_list_themes() -> Json<Vec<ThemeInfo>> {
    Json(all_themes())
}

/// GET /api/v1/themes/:id
///
/// Exact lookup. The lenient fallback to `minimal` applies to records, not to this route.
pub async fn handle_get_theme(Path(id): Path<String>) -> Result<Json<ThemeInfo>, AppError> {
    ThemeId::ALL
        .iter()
        .find(|theme| theme.as_str() == id)
        .map(|theme| Json(theme.info()))
        .ok_or_else(|| AppError::NotFound(format!("Theme '{id}' not found")))
}
