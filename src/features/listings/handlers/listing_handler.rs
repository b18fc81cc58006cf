use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::homepage::dtos::SectionSavedDto;
use crate::features::listings::dtos::{
    CreateHomeDto, DeleteHomeResponseDto, GalleryImageDto, HomeCardDto, HomeDetailPageDto,
    HomeListQuery, HomeResponseDto, ReplaceDetailsDto, ReplaceGalleryDto, UpdateHomeDto,
    UpsertListingsCtaDto, UpsertListingsHeroDto,
};
use crate::features::listings::services::ListingService;
use crate::shared::types::{ApiResponse, Meta};

// ---- public ----

/// List homes for sale
#[utoipa::path(
    get,
    path = "/api/homes",
    tag = "listings",
    params(HomeListQuery),
    responses(
        (status = 200, description = "Homes retrieved successfully", body = ApiResponse<Vec<HomeCardDto>>)
    )
)]
pub async fn list_homes(
    State(service): State<Arc<ListingService>>,
    Query(params): Query<HomeListQuery>,
) -> Result<Json<ApiResponse<Vec<HomeCardDto>>>> {
    let (homes, total) = service.list(&params).await?;
    Ok(Json(ApiResponse::success(
        Some(homes),
        None,
        Some(Meta { total }),
    )))
}

/// Get a home's public detail page
#[utoipa::path(
    get,
    path = "/api/homes/{slug}",
    tag = "listings",
    params(("slug" = String, Path, description = "Home slug")),
    responses(
        (status = 200, description = "Home retrieved successfully", body = ApiResponse<HomeDetailPageDto>),
        (status = 404, description = "Home not found")
    )
)]
pub async fn get_home(
    State(service): State<Arc<ListingService>>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<HomeDetailPageDto>>> {
    let detail = service.detail(&slug).await?;
    Ok(Json(ApiResponse::success(Some(detail), None, None)))
}

// ---- staff ----

/// Create a home
#[utoipa::path(
    post,
    path = "/api/admin/homes",
    tag = "listings",
    request_body = CreateHomeDto,
    responses(
        (status = 201, description = "Home created successfully", body = ApiResponse<HomeResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Slug already in use"),
        (status = 401, description = "Authentication required")
    ),
    security(("basic_auth" = []))
)]
pub async fn create_home(
    State(service): State<Arc<ListingService>>,
    AppJson(dto): AppJson<CreateHomeDto>,
) -> Result<(StatusCode, Json<ApiResponse<HomeResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let home = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(home.into()), None, None)),
    ))
}

/// List all homes for the admin panel
#[utoipa::path(
    get,
    path = "/api/admin/homes",
    tag = "listings",
    responses(
        (status = 200, description = "Homes retrieved successfully", body = ApiResponse<Vec<HomeResponseDto>>),
        (status = 401, description = "Authentication required")
    ),
    security(("basic_auth" = []))
)]
pub async fn list_homes_admin(
    State(service): State<Arc<ListingService>>,
) -> Result<Json<ApiResponse<Vec<HomeResponseDto>>>> {
    let homes = service.list_admin().await?;
    let total = homes.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(homes.into_iter().map(HomeResponseDto::from).collect()),
        None,
        Some(Meta { total }),
    )))
}

/// Get a home by ID
#[utoipa::path(
    get,
    path = "/api/admin/homes/{id}",
    tag = "listings",
    params(("id" = Uuid, Path, description = "Home ID")),
    responses(
        (status = 200, description = "Home retrieved successfully", body = ApiResponse<HomeResponseDto>),
        (status = 404, description = "Home not found"),
        (status = 401, description = "Authentication required")
    ),
    security(("basic_auth" = []))
)]
pub async fn get_home_admin(
    State(service): State<Arc<ListingService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<HomeResponseDto>>> {
    let home = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(home.into()), None, None)))
}

/// Update a home
#[utoipa::path(
    patch,
    path = "/api/admin/homes/{id}",
    tag = "listings",
    params(("id" = Uuid, Path, description = "Home ID")),
    request_body = UpdateHomeDto,
    responses(
        (status = 200, description = "Home updated successfully", body = ApiResponse<HomeResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Home not found"),
        (status = 409, description = "Slug already in use"),
        (status = 401, description = "Authentication required")
    ),
    security(("basic_auth" = []))
)]
pub async fn update_home(
    State(service): State<Arc<ListingService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateHomeDto>,
) -> Result<Json<ApiResponse<HomeResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let home = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(home.into()), None, None)))
}

/// Delete a home
#[utoipa::path(
    delete,
    path = "/api/admin/homes/{id}",
    tag = "listings",
    params(("id" = Uuid, Path, description = "Home ID")),
    responses(
        (status = 200, description = "Home deleted successfully", body = ApiResponse<DeleteHomeResponseDto>),
        (status = 404, description = "Home not found"),
        (status = 401, description = "Authentication required")
    ),
    security(("basic_auth" = []))
)]
pub async fn delete_home(
    State(service): State<Arc<ListingService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<DeleteHomeResponseDto>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        Some(DeleteHomeResponseDto { deleted: true }),
        Some("Home deleted successfully".to_string()),
        None,
    )))
}

/// Replace a home's gallery
#[utoipa::path(
    put,
    path = "/api/admin/homes/{id}/gallery",
    tag = "listings",
    params(("id" = Uuid, Path, description = "Home ID")),
    request_body = ReplaceGalleryDto,
    responses(
        (status = 200, description = "Gallery replaced successfully", body = ApiResponse<Vec<GalleryImageDto>>),
        (status = 404, description = "Home not found"),
        (status = 401, description = "Authentication required")
    ),
    security(("basic_auth" = []))
)]
pub async fn replace_gallery(
    State(service): State<Arc<ListingService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<ReplaceGalleryDto>,
) -> Result<Json<ApiResponse<Vec<GalleryImageDto>>>> {
    let gallery = service.replace_gallery(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(gallery), None, None)))
}

/// Replace a home's detail rows
#[utoipa::path(
    put,
    path = "/api/admin/homes/{id}/details",
    tag = "listings",
    params(("id" = Uuid, Path, description = "Home ID")),
    request_body = ReplaceDetailsDto,
    responses(
        (status = 200, description = "Details replaced successfully", body = ApiResponse<HomeResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Home not found"),
        (status = 401, description = "Authentication required")
    ),
    security(("basic_auth" = []))
)]
pub async fn replace_details(
    State(service): State<Arc<ListingService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<ReplaceDetailsDto>,
) -> Result<Json<ApiResponse<HomeResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    service.replace_details(id, dto).await?;
    let home = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(home.into()), None, None)))
}

/// Save the available-homes page intro block
#[utoipa::path(
    put,
    path = "/api/admin/pages/{page_id}/listings/hero",
    tag = "listings",
    params(("page_id" = Uuid, Path, description = "Page ID")),
    request_body = UpsertListingsHeroDto,
    responses(
        (status = 200, description = "Intro block saved", body = ApiResponse<SectionSavedDto>),
        (status = 404, description = "Page not found"),
        (status = 401, description = "Authentication required")
    ),
    security(("basic_auth" = []))
)]
pub async fn upsert_listings_hero(
    State(service): State<Arc<ListingService>>,
    Path(page_id): Path<Uuid>,
    AppJson(dto): AppJson<UpsertListingsHeroDto>,
) -> Result<Json<ApiResponse<SectionSavedDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let section_id = service.upsert_hero(page_id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(SectionSavedDto { section_id }),
        None,
        None,
    )))
}

/// Save the available-homes page call-to-action
#[utoipa::path(
    put,
    path = "/api/admin/pages/{page_id}/listings/cta",
    tag = "listings",
    params(("page_id" = Uuid, Path, description = "Page ID")),
    request_body = UpsertListingsCtaDto,
    responses(
        (status = 200, description = "Call-to-action saved", body = ApiResponse<SectionSavedDto>),
        (status = 404, description = "Page not found"),
        (status = 401, description = "Authentication required")
    ),
    security(("basic_auth" = []))
)]
pub async fn upsert_listings_cta(
    State(service): State<Arc<ListingService>>,
    Path(page_id): Path<Uuid>,
    AppJson(dto): AppJson<UpsertListingsCtaDto>,
) -> Result<Json<ApiResponse<SectionSavedDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let section_id = service.upsert_cta(page_id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(SectionSavedDto { section_id }),
        None,
        None,
    )))
}
