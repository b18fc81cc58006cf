use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::listings::models::{DetailSection, Home, HomeStatus};
use crate::shared::constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Request DTO for creating a home
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateHomeDto {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    /// URL slug; generated from the title when omitted
    #[validate(length(max = 200, message = "Slug must not exceed 200 characters"))]
    pub slug: Option<String>,

    #[validate(length(max = 200, message = "Location must not exceed 200 characters"))]
    #[serde(default)]
    pub location: String,

    /// Display price in KES format
    #[validate(length(max = 100, message = "Price must not exceed 100 characters"))]
    #[serde(default)]
    pub price: String,

    #[validate(range(min = 0, message = "Beds must not be negative"))]
    #[serde(default)]
    pub beds: i32,

    #[validate(range(min = 0, message = "Baths must not be negative"))]
    #[serde(default)]
    pub baths: i32,

    #[validate(range(min = 0, message = "Square footage must not be negative"))]
    #[serde(default)]
    pub sqft: i32,

    #[serde(default)]
    pub status: HomeStatus,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub is_featured: bool,

    #[serde(default)]
    pub position: i32,
}

/// Request DTO for updating a home. Absent fields are left unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHomeDto {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,

    #[validate(length(max = 200, message = "Slug must not exceed 200 characters"))]
    pub slug: Option<String>,

    #[validate(length(max = 200, message = "Location must not exceed 200 characters"))]
    pub location: Option<String>,

    #[validate(length(max = 100, message = "Price must not exceed 100 characters"))]
    pub price: Option<String>,

    #[validate(range(min = 0, message = "Beds must not be negative"))]
    pub beds: Option<i32>,

    #[validate(range(min = 0, message = "Baths must not be negative"))]
    pub baths: Option<i32>,

    #[validate(range(min = 0, message = "Square footage must not be negative"))]
    pub sqft: Option<i32>,

    pub status: Option<HomeStatus>,
    pub description: Option<String>,
    pub is_featured: Option<bool>,
    pub position: Option<i32>,
}

/// Staff response DTO for a home
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HomeResponseDto {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub location: String,
    pub price: String,
    pub beds: i32,
    pub baths: i32,
    pub sqft: i32,
    pub status: HomeStatus,
    pub description: String,
    pub is_featured: bool,
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Home> for HomeResponseDto {
    fn from(home: Home) -> Self {
        Self {
            id: home.id,
            title: home.title,
            slug: home.slug,
            location: home.location,
            price: home.price,
            beds: home.beds,
            baths: home.baths,
            sqft: home.sqft,
            status: home.status,
            description: home.description,
            is_featured: home.is_featured,
            position: home.position,
            created_at: home.created_at,
            updated_at: home.updated_at,
        }
    }
}

/// Public listing card
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HomeCardDto {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub location: String,
    pub price: String,
    pub beds: i32,
    pub baths: i32,
    pub sqft: i32,
    pub status: HomeStatus,
    /// Display text for the status badge, e.g. "Under Offer"
    pub status_display: String,
    pub is_featured: bool,
    /// Cover image URL, empty when the gallery is empty
    pub image_url: String,
}

/// One gallery entry in a replace request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GalleryEntryDto {
    pub image_id: Option<Uuid>,
    #[serde(default)]
    pub is_cover: bool,
}

/// Request DTO replacing a home's gallery wholesale, in submitted order
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceGalleryDto {
    pub images: Vec<GalleryEntryDto>,
}

/// One gallery entry in responses
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImageDto {
    pub id: Uuid,
    pub image_id: Option<Uuid>,
    pub image_url: String,
    pub is_cover: bool,
    pub position: i32,
}

/// One key/value row in a details replace request
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DetailItemDto {
    pub section: DetailSection,
    #[validate(length(max = 200, message = "Title must not exceed 200 characters"))]
    pub title: String,
    pub value: String,
}

/// Request DTO replacing a home's detail rows wholesale
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceDetailsDto {
    #[validate(nested)]
    pub details: Vec<DetailItemDto>,
}

/// One detail group on the public detail page
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DetailGroupDto {
    pub section: DetailSection,
    /// Heading, e.g. "Kitchen & Dining"
    pub label: String,
    pub items: Vec<DetailItemViewDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DetailItemViewDto {
    pub title: String,
    pub value: String,
}

/// Public detail page for a home
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HomeDetailPageDto {
    #[serde(flatten)]
    pub card: HomeCardDto,
    pub description: String,
    pub gallery: Vec<GalleryImageDto>,
    pub details: Vec<DetailGroupDto>,
}

fn d_listings_hero_title() -> String {
    "Available Homes For Sale".into()
}

fn d_listings_hero_description() -> String {
    "High-quality homes built by TrustBuildUrban for immediate purchase. Move-in ready \
     residences in Kenya's most sought-after neighborhoods."
        .into()
}

fn d_cta_title() -> String {
    "Didn't find what you're looking for?".into()
}

fn d_cta_description() -> String {
    "We can design and build a bespoke home specifically for you on your preferred piece of land."
        .into()
}

fn d_cta_button_text() -> String {
    "LEARN ABOUT CUSTOM BUILD".into()
}

fn d_cta_button_link() -> String {
    "/process/".into()
}

/// Upsert DTO for the listings page intro block
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UpsertListingsHeroDto {
    #[validate(length(max = 200, message = "Title must not exceed 200 characters"))]
    pub title: String,
    pub description: String,
}

impl Default for UpsertListingsHeroDto {
    fn default() -> Self {
        Self {
            title: d_listings_hero_title(),
            description: d_listings_hero_description(),
        }
    }
}

/// Upsert DTO for the listings page custom-build call-to-action
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UpsertListingsCtaDto {
    #[validate(length(max = 200, message = "Title must not exceed 200 characters"))]
    pub title: String,
    pub description: String,
    #[validate(length(max = 100, message = "Button text must not exceed 100 characters"))]
    pub button_text: String,
    #[validate(length(max = 200, message = "Button link must not exceed 200 characters"))]
    pub button_link: String,
}

impl Default for UpsertListingsCtaDto {
    fn default() -> Self {
        Self {
            title: d_cta_title(),
            description: d_cta_description(),
            button_text: d_cta_button_text(),
            button_link: d_cta_button_link(),
        }
    }
}

/// Intro block as served publicly
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListingsHeroViewDto {
    pub title: String,
    pub description: String,
}

impl ListingsHeroViewDto {
    pub fn fallback() -> Self {
        Self {
            title: d_listings_hero_title(),
            description: d_listings_hero_description(),
        }
    }
}

/// Call-to-action as served publicly
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListingsCtaViewDto {
    pub title: String,
    pub description: String,
    pub button_text: String,
    pub button_link: String,
}

impl ListingsCtaViewDto {
    pub fn fallback() -> Self {
        Self {
            title: d_cta_title(),
            description: d_cta_description(),
            button_text: d_cta_button_text(),
            button_link: d_cta_button_link(),
        }
    }
}

/// The assembled available-homes page
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListingsPageDto {
    pub hero: ListingsHeroViewDto,
    pub homes: Vec<HomeCardDto>,
    pub cta: ListingsCtaViewDto,
}

/// Response DTO for delete operations
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteHomeResponseDto {
    pub deleted: bool,
}

fn default_page() -> i64 {
    1
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

/// Query params for the public home list
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct HomeListQuery {
    /// Filter by sales status
    pub status: Option<HomeStatus>,

    /// Only featured homes when true
    pub featured: Option<bool>,

    /// Page number (1-indexed)
    #[serde(default = "default_page")]
    #[param(minimum = 1)]
    pub page: i64,

    /// Items per page
    #[serde(default = "default_page_size")]
    #[param(minimum = 1, maximum = 100)]
    pub page_size: i64,
}

impl HomeListQuery {
    pub fn offset(&self) -> i64 {
        (self.page.max(1) - 1) * self.limit()
    }

    pub fn limit(&self) -> i64 {
        self.page_size.clamp(1, MAX_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listings_defaults_match_stock_copy() {
        let hero: UpsertListingsHeroDto = serde_json::from_str("{}").unwrap();
        assert_eq!(hero.title, "Available Homes For Sale");

        let cta: UpsertListingsCtaDto = serde_json::from_str("{}").unwrap();
        assert_eq!(cta.button_text, "LEARN ABOUT CUSTOM BUILD");
        assert_eq!(cta.button_link, "/process/");
    }

    #[test]
    fn test_home_list_query_pagination() {
        let q: HomeListQuery = serde_urlencoded::from_str("page=3&page_size=10").unwrap();
        assert_eq!(q.offset(), 20);
        assert_eq!(q.limit(), 10);

        let q: HomeListQuery = serde_urlencoded::from_str("").unwrap();
        assert_eq!(q.page, 1);
        assert!(q.status.is_none());
    }

    #[test]
    fn test_status_filter_parses() {
        let q: HomeListQuery = serde_urlencoded::from_str("status=under_offer&featured=true").unwrap();
        assert_eq!(q.status, Some(HomeStatus::UnderOffer));
        assert_eq!(q.featured, Some(true));
    }
}
