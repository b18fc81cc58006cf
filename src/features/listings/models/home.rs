use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Sales status of a listed home, matching the `home_status` database enum.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema, Default,
)]
#[sqlx(type_name = "home_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum HomeStatus {
    #[default]
    Available,
    UnderOffer,
    Sold,
    Reserved,
}

impl HomeStatus {
    /// Display text for listing cards.
    pub fn display(self) -> &'static str {
        match self {
            HomeStatus::Available => "Available",
            HomeStatus::UnderOffer => "Under Offer",
            HomeStatus::Sold => "Sold",
            HomeStatus::Reserved => "Reserved",
        }
    }
}

/// A home offered for sale.
#[derive(Debug, Clone, FromRow)]
pub struct Home {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub location: String,
    /// Display price in KES format, e.g. "KES 45,000,000"
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

/// One gallery entry of a home. The referenced library image is
/// usage-tracked per row.
#[derive(Debug, Clone, FromRow)]
pub struct HomeImage {
    pub id: Uuid,
    pub home_id: Uuid,
    pub image_id: Option<Uuid>,
    pub is_cover: bool,
    pub position: i32,
    pub created_at: DateTime<Utc>,
}

/// Grouping key for home detail rows, matching the `detail_section`
/// database enum. One table replaces the original's eight near-identical
/// key/value tables.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[sqlx(type_name = "detail_section", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum DetailSection {
    Bathroom,
    Bedroom,
    HeatingCooling,
    KitchenDining,
    Interior,
    OtherRooms,
    GarageParking,
    Utilities,
    Outdoor,
}

impl DetailSection {
    /// All sections in their display order.
    pub const ALL: [DetailSection; 9] = [
        DetailSection::Bathroom,
        DetailSection::Bedroom,
        DetailSection::HeatingCooling,
        DetailSection::KitchenDining,
        DetailSection::Interior,
        DetailSection::OtherRooms,
        DetailSection::GarageParking,
        DetailSection::Utilities,
        DetailSection::Outdoor,
    ];

    /// Heading shown above the group on the detail page.
    pub fn label(self) -> &'static str {
        match self {
            DetailSection::Bathroom => "Bathroom Information",
            DetailSection::Bedroom => "Bedroom Information",
            DetailSection::HeatingCooling => "Heating & Cooling",
            DetailSection::KitchenDining => "Kitchen & Dining",
            DetailSection::Interior => "Interior Features",
            DetailSection::OtherRooms => "Other Rooms",
            DetailSection::GarageParking => "Garage & Parking",
            DetailSection::Utilities => "Utilities & Green Energy",
            DetailSection::Outdoor => "Outdoor Spaces",
        }
    }
}

/// One key/value row on a home's detail page.
#[derive(Debug, Clone, FromRow)]
pub struct HomeDetail {
    pub id: Uuid,
    pub home_id: Uuid,
    pub section: DetailSection,
    pub title: String,
    pub value: String,
    pub position: i32,
}

/// Intro copy block of the available-homes page (`UNIQUE (page_id)`).
#[derive(Debug, Clone, FromRow)]
pub struct ListingsHeroSection {
    pub id: Uuid,
    pub page_id: Uuid,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Custom-build call-to-action of the available-homes page.
#[derive(Debug, Clone, FromRow)]
pub struct ListingsCtaSection {
    pub id: Uuid,
    pub page_id: Uuid,
    pub title: String,
    pub description: String,
    pub button_text: String,
    pub button_link: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        assert_eq!(HomeStatus::UnderOffer.display(), "Under Offer");
        assert_eq!(HomeStatus::Available.display(), "Available");
    }

    #[test]
    fn test_detail_sections_have_distinct_labels() {
        let mut labels: Vec<&str> = DetailSection::ALL.iter().map(|s| s.label()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), DetailSection::ALL.len());
    }
}
