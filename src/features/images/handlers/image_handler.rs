use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::images::dtos::{
    CreateImageFromUrlDto, DeleteImageResponseDto, ImageDetailDto, ImageListItemDto,
    ImageListQuery, ImageResponseDto, UpdateImageDto, UploadImageDto,
};
use crate::features::images::services::ImageService;
use crate::shared::constants::{image_extension, ALLOWED_IMAGE_TYPES, MAX_IMAGE_SIZE};
use crate::shared::types::{ApiResponse, Meta};

/// Upload an image into the library
///
/// Accepts multipart/form-data with:
/// - `file`: The image payload (required)
/// - `alt_text`: Accessibility text (optional, extracted from the payload when omitted)
/// - `caption`: Display caption (optional, extracted from the payload when omitted)
#[utoipa::path(
    post,
    path = "/api/admin/images/upload",
    tag = "images",
    request_body(
        content = UploadImageDto,
        content_type = "multipart/form-data",
        description = "Image upload form with optional alt text and caption fields",
    ),
    responses(
        (status = 201, description = "Image uploaded successfully", body = ApiResponse<ImageResponseDto>),
        (status = 400, description = "Invalid image or validation error"),
        (status = 401, description = "Authentication required"),
        (status = 413, description = "Image too large")
    ),
    security(
        ("basic_auth" = [])
    )
)]
pub async fn upload_image(
    State(service): State<Arc<ImageService>>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<ImageResponseDto>>)> {
    let mut file_data: Option<Vec<u8>> = None;
    let mut file_name: Option<String> = None;
    let mut content_type: Option<String> = None;
    let mut alt_text: Option<String> = None;
    let mut caption: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        debug!("Failed to read multipart field: {}", e);
        AppError::BadRequest(format!("Failed to read multipart data: {}", e))
    })? {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "file" => {
                let ct = field
                    .content_type()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());

                let fname = field
                    .file_name()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "unnamed".to_string());

                let data = field.bytes().await.map_err(|e| {
                    debug!("Failed to read image bytes: {}", e);
                    AppError::BadRequest(format!("Failed to read image data: {}", e))
                })?;

                file_data = Some(data.to_vec());
                file_name = Some(fname);
                content_type = Some(ct);
            }
            "alt_text" => {
                let text = field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read alt_text field: {}", e))
                })?;
                if !text.is_empty() {
                    alt_text = Some(text);
                }
            }
            "caption" => {
                let text = field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read caption field: {}", e))
                })?;
                if !text.is_empty() {
                    caption = Some(text);
                }
            }
            _ => {
                debug!("Ignoring unknown field: {}", field_name);
            }
        }
    }

    let file_data =
        file_data.ok_or_else(|| AppError::BadRequest("Image file is required".to_string()))?;
    let file_name =
        file_name.ok_or_else(|| AppError::BadRequest("Filename is required".to_string()))?;
    let content_type =
        content_type.ok_or_else(|| AppError::BadRequest("Content type is required".to_string()))?;

    if file_data.len() > MAX_IMAGE_SIZE {
        return Err(AppError::BadRequest(format!(
            "Image too large. Maximum size is {} bytes ({} MB)",
            MAX_IMAGE_SIZE,
            MAX_IMAGE_SIZE / 1024 / 1024
        )));
    }

    if image_extension(&content_type).is_none() {
        return Err(AppError::BadRequest(format!(
            "Image type '{}' is not allowed. Allowed types: {}",
            content_type,
            ALLOWED_IMAGE_TYPES
                .iter()
                .map(|(mime, _)| *mime)
                .collect::<Vec<_>>()
                .join(", ")
        )));
    }

    let response = service
        .upload(file_data, &file_name, &content_type, alt_text, caption)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(response), None, None)),
    ))
}

/// Register an externally hosted image
#[utoipa::path(
    post,
    path = "/api/admin/images",
    tag = "images",
    request_body = CreateImageFromUrlDto,
    responses(
        (status = 201, description = "Image registered successfully", body = ApiResponse<ImageResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Authentication required")
    ),
    security(
        ("basic_auth" = [])
    )
)]
pub async fn create_image_from_url(
    State(service): State<Arc<ImageService>>,
    AppJson(dto): AppJson<CreateImageFromUrlDto>,
) -> Result<(StatusCode, Json<ApiResponse<ImageResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let image = service.create_from_url(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(image), None, None)),
    ))
}

/// List images with usage counts
#[utoipa::path(
    get,
    path = "/api/admin/images",
    tag = "images",
    params(ImageListQuery),
    responses(
        (status = 200, description = "Images retrieved successfully", body = ApiResponse<Vec<ImageListItemDto>>),
        (status = 401, description = "Authentication required")
    ),
    security(
        ("basic_auth" = [])
    )
)]
pub async fn list_images(
    State(service): State<Arc<ImageService>>,
    Query(params): Query<ImageListQuery>,
) -> Result<Json<ApiResponse<Vec<ImageListItemDto>>>> {
    let (images, total) = service.list(&params).await?;
    Ok(Json(ApiResponse::success(
        Some(images),
        None,
        Some(Meta { total }),
    )))
}

/// Get an image with its usage summary
#[utoipa::path(
    get,
    path = "/api/admin/images/{id}",
    tag = "images",
    params(
        ("id" = Uuid, Path, description = "Image ID")
    ),
    responses(
        (status = 200, description = "Image retrieved successfully", body = ApiResponse<ImageDetailDto>),
        (status = 404, description = "Image not found"),
        (status = 401, description = "Authentication required")
    ),
    security(
        ("basic_auth" = [])
    )
)]
pub async fn get_image(
    State(service): State<Arc<ImageService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ImageDetailDto>>> {
    let detail = service.get_detail(id).await?;
    Ok(Json(ApiResponse::success(Some(detail), None, None)))
}

/// Update an image's descriptive fields
#[utoipa::path(
    patch,
    path = "/api/admin/images/{id}",
    tag = "images",
    params(
        ("id" = Uuid, Path, description = "Image ID")
    ),
    request_body = UpdateImageDto,
    responses(
        (status = 200, description = "Image updated successfully", body = ApiResponse<ImageResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Image not found"),
        (status = 401, description = "Authentication required")
    ),
    security(
        ("basic_auth" = [])
    )
)]
pub async fn update_image(
    State(service): State<Arc<ImageService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateImageDto>,
) -> Result<Json<ApiResponse<ImageResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let image = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(image), None, None)))
}

/// Delete an image
///
/// Content that referenced the image keeps rendering; its references
/// become empty.
#[utoipa::path(
    delete,
    path = "/api/admin/images/{id}",
    tag = "images",
    params(
        ("id" = Uuid, Path, description = "Image ID")
    ),
    responses(
        (status = 200, description = "Image deleted successfully", body = ApiResponse<DeleteImageResponseDto>),
        (status = 404, description = "Image not found"),
        (status = 401, description = "Authentication required")
    ),
    security(
        ("basic_auth" = [])
    )
)]
pub async fn delete_image(
    State(service): State<Arc<ImageService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<DeleteImageResponseDto>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        Some(DeleteImageResponseDto { deleted: true }),
        Some("Image deleted successfully".to_string()),
        None,
    )))
}
