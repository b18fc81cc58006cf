use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::ai::dtos::{GenerateContentDto, GeneratedContentDto};
use crate::features::ai::services::AiService;
use crate::shared::types::ApiResponse;

/// Generate copy for an admin form field
#[utoipa::path(
    post,
    path = "/api/admin/ai/generate",
    tag = "ai",
    request_body = GenerateContentDto,
    responses(
        (status = 200, description = "Generation outcome; success=false carries the error", body = ApiResponse<GeneratedContentDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Authentication required")
    ),
    security(("basic_auth" = []))
)]
pub async fn generate(
    State(service): State<Arc<AiService>>,
    AppJson(dto): AppJson<GenerateContentDto>,
) -> Result<Json<ApiResponse<GeneratedContentDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let outcome = service.generate_field(dto).await;

    // The outcome is always a 200: generation failures are data, not
    // transport errors.
    Ok(Json(ApiResponse {
        success: outcome.success,
        data: outcome.content.map(|content| GeneratedContentDto { content }),
        message: None,
        meta: None,
        errors: outcome.error.map(|error| vec![error]),
    }))
}
