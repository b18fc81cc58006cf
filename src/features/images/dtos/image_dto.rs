use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::images::registry::OwnerKind;
use crate::shared::constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Upload image request DTO for OpenAPI documentation
/// Note: This struct is for Swagger UI documentation only.
/// The actual handler uses axum's Multipart extractor directly.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct UploadImageDto {
    /// The image file to upload
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub file: String,
    /// Short accessibility label; extracted from the image when omitted
    #[schema(example = "Completed villa in Runda")]
    pub alt_text: Option<String>,
    /// Longer caption; extracted from the image when omitted
    pub caption: Option<String>,
}

/// Request DTO for registering an externally hosted image
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateImageFromUrlDto {
    /// URL of the externally hosted media
    #[validate(url(message = "Invalid URL format"))]
    #[validate(length(max = 500, message = "URL must not exceed 500 characters"))]
    pub external_url: String,

    #[validate(length(max = 200, message = "Alt text must not exceed 200 characters"))]
    pub alt_text: Option<String>,

    #[validate(length(max = 200, message = "Caption must not exceed 200 characters"))]
    pub caption: Option<String>,
}

/// Request DTO for editing image texts. Absent texts are left unchanged;
/// `external_url` is applied as sent, so omitting it clears a URL-backed
/// image.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateImageDto {
    #[validate(length(max = 200, message = "Alt text must not exceed 200 characters"))]
    pub alt_text: Option<String>,

    #[validate(length(max = 200, message = "Caption must not exceed 200 characters"))]
    pub caption: Option<String>,

    /// Replacement external URL; ignored for images with an uploaded payload
    #[serde(default)]
    #[validate(url(message = "Invalid URL format"))]
    #[validate(length(max = 500, message = "URL must not exceed 500 characters"))]
    pub external_url: Option<String>,
}

/// Response DTO for a single image
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImageResponseDto {
    pub id: Uuid,
    /// Resolved URL: uploaded payload first, external URL second, else empty
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,
    pub alt_text: String,
    pub caption: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// List entry: image plus how many content records reference it
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImageListItemDto {
    pub id: Uuid,
    pub image_url: String,
    pub alt_text: String,
    pub caption: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i32>,
    pub usage_count: i64,
    pub created_at: DateTime<Utc>,
}

/// One usage row in the image detail view
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImageUsageDto {
    pub owner_type: OwnerKind,
    pub owner_id: Uuid,
    pub field_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_label: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Detail response: the image with its usage summary
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImageDetailDto {
    #[serde(flatten)]
    pub image: ImageResponseDto,
    pub usage_count: i64,
    /// Distinct owner kinds referencing this image
    pub owner_types: Vec<String>,
    /// Most recently touched usage rows; `usage_count` carries the full total
    pub usages: Vec<ImageUsageDto>,
}

/// Response DTO for delete operations
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteImageResponseDto {
    /// Confirmation that the image was deleted
    pub deleted: bool,
}

fn default_page() -> i64 {
    1
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

/// Query params for listing images
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct ImageListQuery {
    /// Page number (1-indexed)
    #[serde(default = "default_page")]
    #[param(minimum = 1)]
    pub page: i64,

    /// Items per page
    #[serde(default = "default_page_size")]
    #[param(minimum = 1, maximum = 100)]
    pub page_size: i64,

    /// Search in alt text and caption
    pub search: Option<String>,
}

impl ImageListQuery {
    pub fn offset(&self) -> i64 {
        (self.page.max(1) - 1) * self.limit()
    }

    pub fn limit(&self) -> i64 {
        self.page_size.clamp(1, MAX_PAGE_SIZE)
    }
}
