//! Axum route handler for the generation proxy.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::auth::Owner;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub prompt: Option<String>,
    #[serde(default)]
    pub field_type: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateContentResponse {
    pub content: String,
}

/// POST /api/ai/generate
///
/// Validates the prompt, then hands off to the proxy. The response is always
/// 200 with some content; external failures never surface here.
pub async fn handle_generate_content(
    State(state): State<AppState>,
    Owner(_owner_id): Owner,
    Json(request): Json<GenerateContentRequest>,
) -> Result<Json<GenerateContentResponse>, AppError> {
    let prompt = request
        .prompt
        .as_deref()
        .map(str::trim)
        .filter(|prompt| !prompt.is_empty())
        .ok_or_else(|| AppError::Validation("Prompt is required".to_string()))?;

    let field_type = request.field_type.as_deref().unwrap_or("");
    let content = state.generator.generate(prompt, field_type).await;

    Ok(Json(GenerateContentResponse { content }))
}
