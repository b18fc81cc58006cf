use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::pages::models::{Page, PageKind, PageStatus};

/// Request DTO for creating a page
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePageDto {
    pub kind: PageKind,

    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    /// URL slug; generated from the title when omitted
    #[validate(length(max = 255, message = "Slug must not exceed 255 characters"))]
    pub slug: Option<String>,

    pub parent_id: Option<Uuid>,

    #[validate(length(max = 70, message = "Meta title must not exceed 70 characters"))]
    pub meta_title: Option<String>,

    #[validate(length(max = 160, message = "Meta description must not exceed 160 characters"))]
    pub meta_description: Option<String>,

    #[serde(default)]
    pub show_in_menus: bool,

    #[serde(default)]
    pub menu_order: i32,

    #[serde(default)]
    pub is_published: bool,

    pub go_live_at: Option<DateTime<Utc>>,
    pub expire_at: Option<DateTime<Utc>>,

    /// Kind-specific content; shape depends on `kind`
    pub payload: Option<serde_json::Value>,
}

/// Request DTO for updating a page. Absent fields are left unchanged,
/// except the publish window: `go_live_at` and `expire_at` are applied
/// as sent, so omitting them clears the window.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePageDto {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: Option<String>,

    #[validate(length(max = 255, message = "Slug must not exceed 255 characters"))]
    pub slug: Option<String>,

    #[validate(length(max = 70, message = "Meta title must not exceed 70 characters"))]
    pub meta_title: Option<String>,

    #[validate(length(max = 160, message = "Meta description must not exceed 160 characters"))]
    pub meta_description: Option<String>,

    pub show_in_menus: Option<bool>,
    pub menu_order: Option<i32>,
    pub is_published: Option<bool>,

    #[serde(default)]
    pub go_live_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub expire_at: Option<DateTime<Utc>>,

    pub payload: Option<serde_json::Value>,
}

/// Staff response DTO for a page
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageResponseDto {
    pub id: Uuid,
    pub parent_id: Option<Uuid>,
    pub kind: PageKind,
    pub title: String,
    pub slug: String,
    pub meta_title: String,
    pub meta_description: String,
    pub show_in_menus: bool,
    pub menu_order: i32,
    pub is_published: bool,
    pub status: PageStatus,
    pub go_live_at: Option<DateTime<Utc>>,
    pub expire_at: Option<DateTime<Utc>>,
    pub payload: serde_json::Value,
    pub revision: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Page> for PageResponseDto {
    fn from(page: Page) -> Self {
        let status = page.status();
        Self {
            id: page.id,
            parent_id: page.parent_id,
            kind: page.kind,
            title: page.title,
            slug: page.slug,
            meta_title: page.meta_title,
            meta_description: page.meta_description,
            show_in_menus: page.show_in_menus,
            menu_order: page.menu_order,
            is_published: page.is_published,
            status,
            go_live_at: page.go_live_at,
            expire_at: page.expire_at,
            payload: page.payload.0,
            revision: page.revision,
            created_at: page.created_at,
            updated_at: page.updated_at,
        }
    }
}

/// One entry in the public navigation menu
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemDto {
    pub title: String,
    /// Slug chain from the root, e.g. "process" or "guides/diaspora"
    pub path: String,
    pub kind: PageKind,
    pub menu_order: i32,
}

/// Public response DTO for a resolved page
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicPageDto {
    pub kind: PageKind,
    pub title: String,
    pub meta_title: String,
    pub meta_description: String,
    /// Kind-specific content assembled for rendering
    pub content: serde_json::Value,
}

/// Response DTO for delete operations
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeletePageResponseDto {
    pub deleted: bool,
}
