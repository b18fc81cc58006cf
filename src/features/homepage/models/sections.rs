//! Home-page section models.
//!
//! Every wrapper table holds at most one row per page (`UNIQUE (page_id)`);
//! child tables carry a `position` column for ordering. Image references
//! are nullable FKs into the image library and are usage-tracked.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Hero banner at the top of the home page.
#[derive(Debug, Clone, FromRow)]
pub struct HeroSection {
    pub id: Uuid,
    pub page_id: Uuid,
    pub tagline: String,
    pub heading_main: String,
    pub heading_highlight: String,
    pub heading_suffix: String,
    pub description: String,
    pub background_image_id: Option<Uuid>,
    /// Overlay opacity percentage (0-100)
    pub overlay_opacity: i32,
    pub show_verified_badge: bool,
    pub verified_text: String,
    pub show_live_tracking: bool,
    pub live_tracking_text: String,
    pub company_name: String,
    pub company_location: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// "By the numbers" strip.
#[derive(Debug, Clone, FromRow)]
pub struct StatsSection {
    pub id: Uuid,
    pub page_id: Uuid,
    pub header: String,
    pub background_pattern_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct StatItem {
    pub id: Uuid,
    pub stats_section_id: Uuid,
    pub number: String,
    pub subtitle: String,
    pub position: i32,
}

/// Aggregate review badge (rating plus review-count copy).
#[derive(Debug, Clone, FromRow)]
pub struct ClientReview {
    pub id: Uuid,
    pub page_id: Uuid,
    pub rating: i32,
    pub total_reviews: String,
    pub label_text: String,
    pub button_text: String,
    pub button_link: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// "The diaspora challenge" narrative block with a featured project.
#[derive(Debug, Clone, FromRow)]
pub struct DiasporaSection {
    pub id: Uuid,
    pub page_id: Uuid,
    pub eyebrow: String,
    pub heading: String,
    pub attribution: String,
    pub featured_label: String,
    pub featured_title: String,
    pub featured_image_id: Option<Uuid>,
    /// Fallback when no library image is linked
    pub featured_image_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct DiasporaChallenge {
    pub id: Uuid,
    pub diaspora_section_id: Uuid,
    pub title: String,
    pub description: String,
    pub position: i32,
}

#[derive(Debug, Clone, FromRow)]
pub struct FeaturesSection {
    pub id: Uuid,
    pub page_id: Uuid,
    pub eyebrow: String,
    pub heading: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct Feature {
    pub id: Uuid,
    pub features_section_id: Uuid,
    pub title: String,
    pub description: String,
    /// SVG icon markup
    pub icon_path: String,
    pub position: i32,
}

#[derive(Debug, Clone, FromRow)]
pub struct StepsSection {
    pub id: Uuid,
    pub page_id: Uuid,
    pub eyebrow: String,
    pub heading: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct Step {
    pub id: Uuid,
    pub steps_section_id: Uuid,
    pub title: String,
    pub description: String,
    pub position: i32,
}

#[derive(Debug, Clone, FromRow)]
pub struct ServicesSection {
    pub id: Uuid,
    pub page_id: Uuid,
    pub subtitle: String,
    pub heading: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct ServiceItem {
    pub id: Uuid,
    pub services_section_id: Uuid,
    pub title: String,
    pub description: String,
    /// SVG icon markup
    pub icon: String,
    /// Comma-separated expertise areas, split for the public payload
    pub expertise: String,
    pub position: i32,
}

/// Lead-magnet block (building guide download).
#[derive(Debug, Clone, FromRow)]
pub struct NewsletterSection {
    pub id: Uuid,
    pub page_id: Uuid,
    pub heading: String,
    pub description: String,
    pub placeholder: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Full-width block with a dark overlay and centered copy.
#[derive(Debug, Clone, FromRow)]
pub struct WhoWeAreSection {
    pub id: Uuid,
    pub page_id: Uuid,
    pub label: String,
    pub heading: String,
    pub description: String,
    pub button_text: String,
    pub button_link: String,
    pub background_image_id: Option<Uuid>,
    pub background_image_url: String,
    pub overlay_opacity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct PortfolioSection {
    pub id: Uuid,
    pub page_id: Uuid,
    pub eyebrow: String,
    pub heading: String,
    pub description: String,
    pub button_text: String,
    pub button_link: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
