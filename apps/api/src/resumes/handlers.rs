//! Axum route handlers for the resume CRUD API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::Owner;
use crate::errors::AppError;
use crate::models::resume::{ResumeRow, ResumeUpdate};
use crate::resumes::{store, template};
use crate::state::AppState;
use crate::uploads;

#[derive(Debug, Deserialize)]
pub struct CreateResumeRequest {
    pub title: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DeleteResumeResponse {
    pub message: String,
}

/// GET /api/resumes
///
/// Returns all resumes owned by the caller, most recently updated first.
/// An empty list is a success, not an error.
pub async fn handle_list_resumes(
    State(state): State<AppState>,
    Owner(owner_id): Owner,
) -> Result<Json<Vec<ResumeRow>>, AppError> {
    let resumes = store::list_by_owner(&state.db, owner_id)
        .await
        .map_err(|e| AppError::store("Failed to fetch resumes", e))?;
    Ok(Json(resumes))
}

/// POST /api/resumes
///
/// Creates a resume from the default template. The title is required and
/// trimmed; a blank title is rejected before anything is persisted.
pub async fn handle_create_resume(
    State(state): State<AppState>,
    Owner(owner_id): Owner,
    Json(request): Json<CreateResumeRequest>,
) -> Result<(StatusCode, Json<ResumeRow>), AppError> {
    let title = validated_title(request.title.as_deref())?;

    let resume = store::create_with_defaults(&state.db, owner_id, &title)
        .await
        .map_err(|e| AppError::store("Failed to create resume", e))?;

    Ok((StatusCode::CREATED, Json(resume)))
}

/// GET /api/resumes/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Owner(owner_id): Owner,
    Path(id): Path<Uuid>,
) -> Result<Json<ResumeRow>, AppError> {
    let resume = store::find_by_id_and_owner(&state.db, id, owner_id)
        .await
        .map_err(|e| AppError::store("Failed to fetch resume", e))?
        .ok_or_else(|| AppError::NotFound("Resume not found".to_string()))?;

    Ok(Json(resume))
}

/// PUT /api/resumes/:id
///
/// Shallow-merges the partial body onto the stored record and persists the
/// result. A resume owned by someone else answers 404, same as a missing one.
pub async fn handle_update_resume(
    State(state): State<AppState>,
    Owner(owner_id): Owner,
    Path(id): Path<Uuid>,
    Json(update): Json<ResumeUpdate>,
) -> Result<Json<ResumeRow>, AppError> {
    let mut resume = store::find_by_id_and_owner(&state.db, id, owner_id)
        .await
        .map_err(|e| AppError::store("Failed to fetch resume", e))?
        .ok_or_else(|| AppError::NotFound("Resume not found or unauthorized".to_string()))?;

    template::apply_update(&mut resume, update);

    let saved = store::save(&state.db, &resume)
        .await
        .map_err(|e| AppError::store("Failed to update resume", e))?;

    Ok(Json(saved))
}

/// DELETE /api/resumes/:id
///
/// Unlinks any referenced image files before removing the record. File
/// cleanup is best-effort and never blocks or fails the deletion.
pub async fn handle_delete_resume(
    State(state): State<AppState>,
    Owner(owner_id): Owner,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteResumeResponse>, AppError> {
    let resume = store::find_by_id_and_owner(&state.db, id, owner_id)
        .await
        .map_err(|e| AppError::store("Failed to fetch resume", e))?
        .ok_or_else(|| AppError::NotFound("Resume not found or unauthorized".to_string()))?;

    uploads::remove_referenced_file(&state.config.upload_dir, resume.thumbnail_link.as_deref())
        .await;
    uploads::remove_referenced_file(
        &state.config.upload_dir,
        Some(resume.profile_info.preview_url.as_str()),
    )
    .await;

    let deleted = store::delete_by_id_and_owner(&state.db, id, owner_id)
        .await
        .map_err(|e| AppError::store("Failed to delete resume", e))?;

    if !deleted {
        return Err(AppError::NotFound(
            "Resume not found or unauthorized".to_string(),
        ));
    }

    Ok(Json(DeleteResumeResponse {
        message: "Resume deleted successfully".to_string(),
    }))
}

fn validated_title(raw: Option<&str>) -> Result<String, AppError> {
    match raw.map(str::trim) {
        Some(title) if !title.is_empty() => Ok(title.to_string()),
        _ => Err(AppError::Validation("Resume title is required".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_is_trimmed() {
        assert_eq!(validated_title(Some("  My Resume ")).unwrap(), "My Resume");
    }

    #[test]
    fn test_missing_title_rejected() {
        assert!(matches!(
            validated_title(None),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_whitespace_only_title_rejected() {
        assert!(matches!(
            validated_title(Some("  ")),
            Err(AppError::Validation(_))
        ));
    }
}
