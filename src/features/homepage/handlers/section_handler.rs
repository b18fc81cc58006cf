use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::homepage::dtos::{
    DeleteSectionResponseDto, SectionSavedDto, UpsertClientReviewDto, UpsertDiasporaDto,
    UpsertFeaturesDto, UpsertHeroDto, UpsertNewsletterDto, UpsertPortfolioDto, UpsertServicesDto,
    UpsertStatsDto, UpsertStepsDto, UpsertWhoWeAreDto,
};
use crate::features::homepage::services::{HomepageService, SectionSlot};
use crate::shared::types::ApiResponse;

fn saved(section_id: Uuid) -> Json<ApiResponse<SectionSavedDto>> {
    Json(ApiResponse::success(
        Some(SectionSavedDto { section_id }),
        None,
        None,
    ))
}

/// Save the hero section of a page
#[utoipa::path(
    put,
    path = "/api/admin/pages/{page_id}/sections/hero",
    tag = "homepage",
    params(("page_id" = Uuid, Path, description = "Page ID")),
    request_body = UpsertHeroDto,
    responses(
        (status = 200, description = "Hero section saved", body = ApiResponse<SectionSavedDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Page not found"),
        (status = 401, description = "Authentication required")
    ),
    security(("basic_auth" = []))
)]
pub async fn upsert_hero(
    State(service): State<Arc<HomepageService>>,
    Path(page_id): Path<Uuid>,
    AppJson(dto): AppJson<UpsertHeroDto>,
) -> Result<Json<ApiResponse<SectionSavedDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    Ok(saved(service.upsert_hero(page_id, dto).await?))
}

/// Save the stats section of a page
#[utoipa::path(
    put,
    path = "/api/admin/pages/{page_id}/sections/stats",
    tag = "homepage",
    params(("page_id" = Uuid, Path, description = "Page ID")),
    request_body = UpsertStatsDto,
    responses(
        (status = 200, description = "Stats section saved", body = ApiResponse<SectionSavedDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Page not found"),
        (status = 401, description = "Authentication required")
    ),
    security(("basic_auth" = []))
)]
pub async fn upsert_stats(
    State(service): State<Arc<HomepageService>>,
    Path(page_id): Path<Uuid>,
    AppJson(dto): AppJson<UpsertStatsDto>,
) -> Result<Json<ApiResponse<SectionSavedDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    Ok(saved(service.upsert_stats(page_id, dto).await?))
}

/// Save the client review badge of a page
#[utoipa::path(
    put,
    path = "/api/admin/pages/{page_id}/sections/client-review",
    tag = "homepage",
    params(("page_id" = Uuid, Path, description = "Page ID")),
    request_body = UpsertClientReviewDto,
    responses(
        (status = 200, description = "Client review saved", body = ApiResponse<SectionSavedDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Page not found"),
        (status = 401, description = "Authentication required")
    ),
    security(("basic_auth" = []))
)]
pub async fn upsert_client_review(
    State(service): State<Arc<HomepageService>>,
    Path(page_id): Path<Uuid>,
    AppJson(dto): AppJson<UpsertClientReviewDto>,
) -> Result<Json<ApiResponse<SectionSavedDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    Ok(saved(service.upsert_client_review(page_id, dto).await?))
}

/// Save the diaspora section of a page
#[utoipa::path(
    put,
    path = "/api/admin/pages/{page_id}/sections/diaspora",
    tag = "homepage",
    params(("page_id" = Uuid, Path, description = "Page ID")),
    request_body = UpsertDiasporaDto,
    responses(
        (status = 200, description = "Diaspora section saved", body = ApiResponse<SectionSavedDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Page not found"),
        (status = 401, description = "Authentication required")
    ),
    security(("basic_auth" = []))
)]
pub async fn upsert_diaspora(
    State(service): State<Arc<HomepageService>>,
    Path(page_id): Path<Uuid>,
    AppJson(dto): AppJson<UpsertDiasporaDto>,
) -> Result<Json<ApiResponse<SectionSavedDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    Ok(saved(service.upsert_diaspora(page_id, dto).await?))
}

/// Save the features section of a page
#[utoipa::path(
    put,
    path = "/api/admin/pages/{page_id}/sections/features",
    tag = "homepage",
    params(("page_id" = Uuid, Path, description = "Page ID")),
    request_body = UpsertFeaturesDto,
    responses(
        (status = 200, description = "Features section saved", body = ApiResponse<SectionSavedDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Page not found"),
        (status = 401, description = "Authentication required")
    ),
    security(("basic_auth" = []))
)]
pub async fn upsert_features(
    State(service): State<Arc<HomepageService>>,
    Path(page_id): Path<Uuid>,
    AppJson(dto): AppJson<UpsertFeaturesDto>,
) -> Result<Json<ApiResponse<SectionSavedDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    Ok(saved(service.upsert_features(page_id, dto).await?))
}

/// Save the steps section of a page
#[utoipa::path(
    put,
    path = "/api/admin/pages/{page_id}/sections/steps",
    tag = "homepage",
    params(("page_id" = Uuid, Path, description = "Page ID")),
    request_body = UpsertStepsDto,
    responses(
        (status = 200, description = "Steps section saved", body = ApiResponse<SectionSavedDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Page not found"),
        (status = 401, description = "Authentication required")
    ),
    security(("basic_auth" = []))
)]
pub async fn upsert_steps(
    State(service): State<Arc<HomepageService>>,
    Path(page_id): Path<Uuid>,
    AppJson(dto): AppJson<UpsertStepsDto>,
) -> Result<Json<ApiResponse<SectionSavedDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    Ok(saved(service.upsert_steps(page_id, dto).await?))
}

/// Save the services section of a page
#[utoipa::path(
    put,
    path = "/api/admin/pages/{page_id}/sections/services",
    tag = "homepage",
    params(("page_id" = Uuid, Path, description = "Page ID")),
    request_body = UpsertServicesDto,
    responses(
        (status = 200, description = "Services section saved", body = ApiResponse<SectionSavedDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Page not found"),
        (status = 401, description = "Authentication required")
    ),
    security(("basic_auth" = []))
)]
pub async fn upsert_services(
    State(service): State<Arc<HomepageService>>,
    Path(page_id): Path<Uuid>,
    AppJson(dto): AppJson<UpsertServicesDto>,
) -> Result<Json<ApiResponse<SectionSavedDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    Ok(saved(service.upsert_services(page_id, dto).await?))
}

/// Save the newsletter section of a page
#[utoipa::path(
    put,
    path = "/api/admin/pages/{page_id}/sections/newsletter",
    tag = "homepage",
    params(("page_id" = Uuid, Path, description = "Page ID")),
    request_body = UpsertNewsletterDto,
    responses(
        (status = 200, description = "Newsletter section saved", body = ApiResponse<SectionSavedDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Page not found"),
        (status = 401, description = "Authentication required")
    ),
    security(("basic_auth" = []))
)]
pub async fn upsert_newsletter(
    State(service): State<Arc<HomepageService>>,
    Path(page_id): Path<Uuid>,
    AppJson(dto): AppJson<UpsertNewsletterDto>,
) -> Result<Json<ApiResponse<SectionSavedDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    Ok(saved(service.upsert_newsletter(page_id, dto).await?))
}

/// Save the who-we-are section of a page
#[utoipa::path(
    put,
    path = "/api/admin/pages/{page_id}/sections/who-we-are",
    tag = "homepage",
    params(("page_id" = Uuid, Path, description = "Page ID")),
    request_body = UpsertWhoWeAreDto,
    responses(
        (status = 200, description = "Who-we-are section saved", body = ApiResponse<SectionSavedDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Page not found"),
        (status = 401, description = "Authentication required")
    ),
    security(("basic_auth" = []))
)]
pub async fn upsert_who_we_are(
    State(service): State<Arc<HomepageService>>,
    Path(page_id): Path<Uuid>,
    AppJson(dto): AppJson<UpsertWhoWeAreDto>,
) -> Result<Json<ApiResponse<SectionSavedDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    Ok(saved(service.upsert_who_we_are(page_id, dto).await?))
}

/// Save the portfolio section of a page
#[utoipa::path(
    put,
    path = "/api/admin/pages/{page_id}/sections/portfolio",
    tag = "homepage",
    params(("page_id" = Uuid, Path, description = "Page ID")),
    request_body = UpsertPortfolioDto,
    responses(
        (status = 200, description = "Portfolio section saved", body = ApiResponse<SectionSavedDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Page not found"),
        (status = 401, description = "Authentication required")
    ),
    security(("basic_auth" = []))
)]
pub async fn upsert_portfolio(
    State(service): State<Arc<HomepageService>>,
    Path(page_id): Path<Uuid>,
    AppJson(dto): AppJson<UpsertPortfolioDto>,
) -> Result<Json<ApiResponse<SectionSavedDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    Ok(saved(service.upsert_portfolio(page_id, dto).await?))
}

/// Remove a section from a page
#[utoipa::path(
    delete,
    path = "/api/admin/pages/{page_id}/sections/{section}",
    tag = "homepage",
    params(
        ("page_id" = Uuid, Path, description = "Page ID"),
        ("section" = String, Path, description = "Section name, e.g. hero, stats, who-we-are")
    ),
    responses(
        (status = 200, description = "Section deleted", body = ApiResponse<DeleteSectionResponseDto>),
        (status = 400, description = "Unknown section name"),
        (status = 404, description = "Page or section not found"),
        (status = 401, description = "Authentication required")
    ),
    security(("basic_auth" = []))
)]
pub async fn delete_section(
    State(service): State<Arc<HomepageService>>,
    Path((page_id, section)): Path<(Uuid, String)>,
) -> Result<Json<ApiResponse<DeleteSectionResponseDto>>> {
    let slot: SectionSlot = section.parse()?;
    service.delete_section(page_id, slot).await?;
    Ok(Json(ApiResponse::success(
        Some(DeleteSectionResponseDto { deleted: true }),
        Some("Section deleted successfully".to_string()),
        None,
    )))
}
