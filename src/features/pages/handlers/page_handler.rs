use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::pages::dtos::{
    CreatePageDto, DeletePageResponseDto, MenuItemDto, PageResponseDto, PublicPageDto,
    UpdatePageDto,
};
use crate::features::pages::models::{Page, PageKind};
use crate::features::pages::routes::PublicPageState;
use crate::features::pages::services::PageService;
use crate::shared::types::{ApiResponse, Meta};

// ---- public ----

/// Navigation menu of live pages
#[utoipa::path(
    get,
    path = "/api/pages/menu",
    tag = "pages",
    responses(
        (status = 200, description = "Menu retrieved successfully", body = ApiResponse<Vec<MenuItemDto>>)
    )
)]
pub async fn get_menu(
    State(state): State<PublicPageState>,
) -> Result<Json<ApiResponse<Vec<MenuItemDto>>>> {
    let items = state.pages.menu().await?;
    Ok(Json(ApiResponse::success(Some(items), None, None)))
}

/// Assembled home page
#[utoipa::path(
    get,
    path = "/api/pages/home",
    tag = "pages",
    responses(
        (status = 200, description = "Home page retrieved successfully", body = ApiResponse<PublicPageDto>),
        (status = 404, description = "No live home page")
    )
)]
pub async fn get_home_page(
    State(state): State<PublicPageState>,
) -> Result<Json<ApiResponse<PublicPageDto>>> {
    let page = state.pages.root_page().await?;
    let dto = render_page(&state, page).await?;
    Ok(Json(ApiResponse::success(Some(dto), None, None)))
}

/// Resolve a page by its public path
#[utoipa::path(
    get,
    path = "/api/pages/{path}",
    tag = "pages",
    params(("path" = String, Path, description = "Slug chain, e.g. `process` or `guides/diaspora`")),
    responses(
        (status = 200, description = "Page retrieved successfully", body = ApiResponse<PublicPageDto>),
        (status = 404, description = "Page not found or not live")
    )
)]
pub async fn get_page_by_path(
    State(state): State<PublicPageState>,
    Path(path): Path<String>,
) -> Result<Json<ApiResponse<PublicPageDto>>> {
    let page = state.pages.resolve_path(&path).await?;
    let dto = render_page(&state, page).await?;
    Ok(Json(ApiResponse::success(Some(dto), None, None)))
}

/// Assemble the public content for a resolved page. Section-backed kinds
/// pull from their tables; everything else renders the stored payload.
async fn render_page(state: &PublicPageState, page: Page) -> Result<PublicPageDto> {
    let content = match page.kind {
        PageKind::Home => to_content(&state.home.assemble(page.id).await?)?,
        PageKind::AvailableHomes => to_content(&state.listings.assemble_page(page.id).await?)?,
        _ => page.decoded_payload().to_value(),
    };

    Ok(PublicPageDto {
        kind: page.kind,
        title: page.title,
        meta_title: page.meta_title,
        meta_description: page.meta_description,
        content,
    })
}

fn to_content<T: serde::Serialize>(payload: &T) -> Result<serde_json::Value> {
    serde_json::to_value(payload)
        .map_err(|e| AppError::Internal(format!("Failed to encode page content: {}", e)))
}

// ---- staff ----

/// Create a page
#[utoipa::path(
    post,
    path = "/api/admin/pages",
    tag = "pages",
    request_body = CreatePageDto,
    responses(
        (status = 201, description = "Page created successfully", body = ApiResponse<PageResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Parent page not found"),
        (status = 409, description = "Sibling slug already in use"),
        (status = 401, description = "Authentication required")
    ),
    security(("basic_auth" = []))
)]
pub async fn create_page(
    State(service): State<Arc<PageService>>,
    AppJson(dto): AppJson<CreatePageDto>,
) -> Result<(StatusCode, Json<ApiResponse<PageResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let page = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(page.into()), None, None)),
    ))
}

/// List all pages in tree order
#[utoipa::path(
    get,
    path = "/api/admin/pages",
    tag = "pages",
    responses(
        (status = 200, description = "Pages retrieved successfully", body = ApiResponse<Vec<PageResponseDto>>),
        (status = 401, description = "Authentication required")
    ),
    security(("basic_auth" = []))
)]
pub async fn list_pages(
    State(service): State<Arc<PageService>>,
) -> Result<Json<ApiResponse<Vec<PageResponseDto>>>> {
    let pages = service.list().await?;
    let total = pages.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(pages.into_iter().map(PageResponseDto::from).collect()),
        None,
        Some(Meta { total }),
    )))
}

/// Get a page by ID
#[utoipa::path(
    get,
    path = "/api/admin/pages/{id}",
    tag = "pages",
    params(("id" = Uuid, Path, description = "Page ID")),
    responses(
        (status = 200, description = "Page retrieved successfully", body = ApiResponse<PageResponseDto>),
        (status = 404, description = "Page not found"),
        (status = 401, description = "Authentication required")
    ),
    security(("basic_auth" = []))
)]
pub async fn get_page(
    State(service): State<Arc<PageService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<PageResponseDto>>> {
    let page = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(page.into()), None, None)))
}

/// Update a page
#[utoipa::path(
    patch,
    path = "/api/admin/pages/{id}",
    tag = "pages",
    params(("id" = Uuid, Path, description = "Page ID")),
    request_body = UpdatePageDto,
    responses(
        (status = 200, description = "Page updated successfully", body = ApiResponse<PageResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Page not found"),
        (status = 409, description = "Sibling slug already in use"),
        (status = 401, description = "Authentication required")
    ),
    security(("basic_auth" = []))
)]
pub async fn update_page(
    State(service): State<Arc<PageService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdatePageDto>,
) -> Result<Json<ApiResponse<PageResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let page = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(page.into()), None, None)))
}

/// Delete a page and its subtree
#[utoipa::path(
    delete,
    path = "/api/admin/pages/{id}",
    tag = "pages",
    params(("id" = Uuid, Path, description = "Page ID")),
    responses(
        (status = 200, description = "Page deleted successfully", body = ApiResponse<DeletePageResponseDto>),
        (status = 404, description = "Page not found"),
        (status = 401, description = "Authentication required")
    ),
    security(("basic_auth" = []))
)]
pub async fn delete_page(
    State(service): State<Arc<PageService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<DeletePageResponseDto>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        Some(DeletePageResponseDto { deleted: true }),
        Some("Page deleted successfully".to_string()),
        None,
    )))
}
