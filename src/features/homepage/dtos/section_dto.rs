//! Upsert DTOs for the home-page sections.
//!
//! Missing fields fall back to the stock marketing copy so a bare `PUT {}`
//! produces a fully populated section.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::homepage::models::{ButtonSize, ButtonStyle};

fn d_true() -> bool {
    true
}

fn d_hero_overlay() -> i32 {
    50
}

fn d_verified_text() -> String {
    "Verified".into()
}

fn d_live_tracking_text() -> String {
    "Live Project Tracking".into()
}

fn d_rating() -> i32 {
    5
}

fn d_total_reviews() -> String {
    "12,000+".into()
}

fn d_reviews_label() -> String {
    "Client Reviews".into()
}

fn d_reviews_button() -> String {
    "Discover Excellence".into()
}

fn d_hash_link() -> String {
    "#".into()
}

fn d_diaspora_eyebrow() -> String {
    "The Diaspora Challenge".into()
}

fn d_diaspora_heading() -> String {
    "Building in Kenya should not be a gamble.".into()
}

fn d_diaspora_attribution() -> String {
    "TrustBuildUrban was founded to replace fear with structured, world-class building standards."
        .into()
}

fn d_featured_label() -> String {
    "Featured Project".into()
}

fn d_featured_title() -> String {
    "The Grand Residence, Runda".into()
}

fn d_features_eyebrow() -> String {
    "The TrustBuildUrban Standard".into()
}

fn d_features_heading() -> String {
    "Why Hundreds of Diaspora Families Trust Us".into()
}

fn d_steps_eyebrow() -> String {
    "Transparent Execution".into()
}

fn d_steps_heading() -> String {
    "Our 7-Step Architectural Journey".into()
}

fn d_steps_description() -> String {
    "A meticulously structured process from initial concept to the day we hand over your keys."
        .into()
}

fn d_services_subtitle() -> String {
    "Our Specializations".into()
}

fn d_services_heading() -> String {
    "Elite Engineering & Architectural Excellence".into()
}

fn d_newsletter_heading() -> String {
    "Free Diaspora Home Building Guide".into()
}

fn d_newsletter_description() -> String {
    "Download our comprehensive manual on navigating land laws, approvals, and construction \
     costs in Kenya from abroad."
        .into()
}

fn d_newsletter_placeholder() -> String {
    "Enter your email".into()
}

fn d_who_label() -> String {
    "Who We Are".into()
}

fn d_who_heading() -> String {
    "Committed, client-focused, and process-driven builders.".into()
}

fn d_who_description() -> String {
    "We deliver world-class construction services with a focus on quality, transparency, and \
     client satisfaction."
        .into()
}

fn d_learn_more() -> String {
    "Learn More".into()
}

fn d_about_link() -> String {
    "/about".into()
}

fn d_who_overlay() -> i32 {
    40
}

fn d_stats_header() -> String {
    "TRUSTBUILD URBAN BY THE NUMBERS".into()
}

fn d_stat_number() -> String {
    "500+".into()
}

fn d_stat_subtitle() -> String {
    "Projects Completed".into()
}

fn d_portfolio_eyebrow() -> String {
    "Our Work".into()
}

fn d_portfolio_heading() -> String {
    "A Glimpse of Our Architectural Excellence".into()
}

fn d_portfolio_description() -> String {
    "Luxury and family homes delivered across the country.".into()
}

fn d_portfolio_button() -> String {
    "View Portfolio".into()
}

fn d_portfolio_link() -> String {
    "/portfolio".into()
}

/// Call-to-action button payload, shared by hero and newsletter sections
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ButtonDto {
    #[validate(length(max = 100, message = "Button text must not exceed 100 characters"))]
    pub text: String,
    #[validate(length(max = 200, message = "Button link must not exceed 200 characters"))]
    pub link: String,
    /// SVG icon markup or icon class
    #[validate(length(max = 500, message = "Button icon must not exceed 500 characters"))]
    pub icon: String,
    pub style: ButtonStyle,
    pub size: ButtonSize,
    pub is_external: bool,
    pub is_full_width: bool,
}

impl Default for ButtonDto {
    fn default() -> Self {
        Self {
            text: String::new(),
            link: String::new(),
            icon: String::new(),
            style: ButtonStyle::default(),
            size: ButtonSize::default(),
            is_external: false,
            is_full_width: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UpsertHeroDto {
    #[validate(length(max = 200, message = "Tagline must not exceed 200 characters"))]
    pub tagline: String,
    #[validate(length(max = 200, message = "Heading must not exceed 200 characters"))]
    pub heading_main: String,
    #[validate(length(max = 100, message = "Highlight must not exceed 100 characters"))]
    pub heading_highlight: String,
    #[validate(length(max = 100, message = "Suffix must not exceed 100 characters"))]
    pub heading_suffix: String,
    pub description: String,
    pub background_image_id: Option<Uuid>,
    #[validate(range(min = 0, max = 100, message = "Overlay opacity must be 0-100"))]
    pub overlay_opacity: i32,
    pub show_verified_badge: bool,
    #[validate(length(max = 50, message = "Verified text must not exceed 50 characters"))]
    pub verified_text: String,
    pub show_live_tracking: bool,
    #[validate(length(max = 100, message = "Live tracking text must not exceed 100 characters"))]
    pub live_tracking_text: String,
    #[validate(length(max = 100, message = "Company name must not exceed 100 characters"))]
    pub company_name: String,
    #[validate(length(max = 100, message = "Company location must not exceed 100 characters"))]
    pub company_location: String,
    #[validate(nested)]
    pub buttons: Vec<ButtonDto>,
}

impl Default for UpsertHeroDto {
    fn default() -> Self {
        Self {
            tagline: String::new(),
            heading_main: String::new(),
            heading_highlight: String::new(),
            heading_suffix: String::new(),
            description: String::new(),
            background_image_id: None,
            overlay_opacity: d_hero_overlay(),
            show_verified_badge: d_true(),
            verified_text: d_verified_text(),
            show_live_tracking: d_true(),
            live_tracking_text: d_live_tracking_text(),
            company_name: String::new(),
            company_location: String::new(),
            buttons: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct StatItemDto {
    #[serde(default = "d_stat_number")]
    #[validate(length(max = 20, message = "Stat number must not exceed 20 characters"))]
    pub number: String,
    #[serde(default = "d_stat_subtitle")]
    #[validate(length(max = 100, message = "Stat subtitle must not exceed 100 characters"))]
    pub subtitle: String,
}

impl Default for StatItemDto {
    fn default() -> Self {
        Self {
            number: d_stat_number(),
            subtitle: d_stat_subtitle(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UpsertStatsDto {
    #[validate(length(max = 100, message = "Header must not exceed 100 characters"))]
    pub header: String,
    pub background_pattern_id: Option<Uuid>,
    #[validate(nested)]
    pub stats: Vec<StatItemDto>,
}

impl Default for UpsertStatsDto {
    fn default() -> Self {
        Self {
            header: d_stats_header(),
            background_pattern_id: None,
            stats: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UpsertClientReviewDto {
    #[validate(range(min = 1, max = 5, message = "Rating must be 1-5"))]
    pub rating: i32,
    #[validate(length(max = 20, message = "Total reviews must not exceed 20 characters"))]
    pub total_reviews: String,
    #[validate(length(max = 100, message = "Label must not exceed 100 characters"))]
    pub label_text: String,
    #[validate(length(max = 100, message = "Button text must not exceed 100 characters"))]
    pub button_text: String,
    #[validate(length(max = 200, message = "Button link must not exceed 200 characters"))]
    pub button_link: String,
}

impl Default for UpsertClientReviewDto {
    fn default() -> Self {
        Self {
            rating: d_rating(),
            total_reviews: d_total_reviews(),
            label_text: d_reviews_label(),
            button_text: d_reviews_button(),
            button_link: d_hash_link(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ChallengeDto {
    #[validate(length(max = 200, message = "Title must not exceed 200 characters"))]
    pub title: String,
    pub description: String,
}

impl Default for ChallengeDto {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UpsertDiasporaDto {
    #[validate(length(max = 100, message = "Eyebrow must not exceed 100 characters"))]
    pub eyebrow: String,
    pub heading: String,
    pub attribution: String,
    #[validate(length(max = 100, message = "Featured label must not exceed 100 characters"))]
    pub featured_label: String,
    #[validate(length(max = 200, message = "Featured title must not exceed 200 characters"))]
    pub featured_title: String,
    pub featured_image_id: Option<Uuid>,
    #[validate(length(max = 500, message = "Image URL must not exceed 500 characters"))]
    pub featured_image_url: String,
    #[validate(nested)]
    pub challenges: Vec<ChallengeDto>,
}

impl Default for UpsertDiasporaDto {
    fn default() -> Self {
        Self {
            eyebrow: d_diaspora_eyebrow(),
            heading: d_diaspora_heading(),
            attribution: d_diaspora_attribution(),
            featured_label: d_featured_label(),
            featured_title: d_featured_title(),
            featured_image_id: None,
            featured_image_url: String::new(),
            challenges: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct FeatureDto {
    #[validate(length(max = 200, message = "Title must not exceed 200 characters"))]
    pub title: String,
    pub description: String,
    /// SVG icon markup
    pub icon_path: String,
}

impl Default for FeatureDto {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            icon_path: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UpsertFeaturesDto {
    #[validate(length(max = 100, message = "Eyebrow must not exceed 100 characters"))]
    pub eyebrow: String,
    pub heading: String,
    #[validate(nested)]
    pub features: Vec<FeatureDto>,
}

impl Default for UpsertFeaturesDto {
    fn default() -> Self {
        Self {
            eyebrow: d_features_eyebrow(),
            heading: d_features_heading(),
            features: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct StepDto {
    #[validate(length(max = 200, message = "Title must not exceed 200 characters"))]
    pub title: String,
    pub description: String,
}

impl Default for StepDto {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UpsertStepsDto {
    #[validate(length(max = 100, message = "Eyebrow must not exceed 100 characters"))]
    pub eyebrow: String,
    pub heading: String,
    pub description: String,
    #[validate(nested)]
    pub steps: Vec<StepDto>,
}

impl Default for UpsertStepsDto {
    fn default() -> Self {
        Self {
            eyebrow: d_steps_eyebrow(),
            heading: d_steps_heading(),
            description: d_steps_description(),
            steps: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceItemDto {
    #[validate(length(max = 200, message = "Title must not exceed 200 characters"))]
    pub title: String,
    pub description: String,
    /// SVG icon markup
    pub icon: String,
    /// Comma-separated expertise areas
    pub expertise: String,
}

impl Default for ServiceItemDto {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            icon: String::new(),
            expertise: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UpsertServicesDto {
    #[validate(length(max = 100, message = "Subtitle must not exceed 100 characters"))]
    pub subtitle: String,
    pub heading: String,
    #[validate(nested)]
    pub services: Vec<ServiceItemDto>,
}

impl Default for UpsertServicesDto {
    fn default() -> Self {
        Self {
            subtitle: d_services_subtitle(),
            heading: d_services_heading(),
            services: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UpsertNewsletterDto {
    pub heading: String,
    pub description: String,
    #[validate(length(max = 100, message = "Placeholder must not exceed 100 characters"))]
    pub placeholder: String,
    #[validate(nested)]
    pub buttons: Vec<ButtonDto>,
}

impl Default for UpsertNewsletterDto {
    fn default() -> Self {
        Self {
            heading: d_newsletter_heading(),
            description: d_newsletter_description(),
            placeholder: d_newsletter_placeholder(),
            buttons: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UpsertWhoWeAreDto {
    #[validate(length(max = 100, message = "Label must not exceed 100 characters"))]
    pub label: String,
    pub heading: String,
    pub description: String,
    #[validate(length(max = 100, message = "Button text must not exceed 100 characters"))]
    pub button_text: String,
    #[validate(length(max = 200, message = "Button link must not exceed 200 characters"))]
    pub button_link: String,
    pub background_image_id: Option<Uuid>,
    #[validate(length(max = 500, message = "Image URL must not exceed 500 characters"))]
    pub background_image_url: String,
    #[validate(range(min = 0, max = 100, message = "Overlay opacity must be 0-100"))]
    pub overlay_opacity: i32,
}

impl Default for UpsertWhoWeAreDto {
    fn default() -> Self {
        Self {
            label: d_who_label(),
            heading: d_who_heading(),
            description: d_who_description(),
            button_text: d_learn_more(),
            button_link: d_about_link(),
            background_image_id: None,
            background_image_url: String::new(),
            overlay_opacity: d_who_overlay(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UpsertPortfolioDto {
    #[validate(length(max = 100, message = "Eyebrow must not exceed 100 characters"))]
    pub eyebrow: String,
    pub heading: String,
    pub description: String,
    #[validate(length(max = 100, message = "Button text must not exceed 100 characters"))]
    pub button_text: String,
    #[validate(length(max = 200, message = "Button link must not exceed 200 characters"))]
    pub button_link: String,
}

impl Default for UpsertPortfolioDto {
    fn default() -> Self {
        Self {
            eyebrow: d_portfolio_eyebrow(),
            heading: d_portfolio_heading(),
            description: d_portfolio_description(),
            button_text: d_portfolio_button(),
            button_link: d_portfolio_link(),
        }
    }
}

/// Response DTO for section upserts
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SectionSavedDto {
    pub section_id: Uuid,
}

/// Response DTO for section delete operations
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteSectionResponseDto {
    pub deleted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_hero_upsert_fills_stock_copy() {
        let dto: UpsertHeroDto = serde_json::from_str("{}").unwrap();
        assert_eq!(dto.overlay_opacity, 50);
        assert!(dto.show_verified_badge);
        assert_eq!(dto.verified_text, "Verified");
        assert_eq!(dto.live_tracking_text, "Live Project Tracking");
        assert!(dto.buttons.is_empty());
    }

    #[test]
    fn bare_newsletter_upsert_fills_stock_copy() {
        let dto: UpsertNewsletterDto = serde_json::from_str("{}").unwrap();
        assert_eq!(dto.heading, "Free Diaspora Home Building Guide");
        assert_eq!(dto.placeholder, "Enter your email");
    }

    #[test]
    fn explicit_fields_override_defaults() {
        let dto: UpsertWhoWeAreDto =
            serde_json::from_str(r#"{"label": "Our Team", "overlayOpacity": 70}"#).unwrap();
        assert_eq!(dto.label, "Our Team");
        assert_eq!(dto.overlay_opacity, 70);
        assert_eq!(dto.button_link, "/about");
    }

    #[test]
    fn button_defaults_are_primary_medium() {
        let dto: ButtonDto = serde_json::from_str(r#"{"text": "Start"}"#).unwrap();
        assert_eq!(dto.style, ButtonStyle::Primary);
        assert_eq!(dto.size, ButtonSize::Medium);
        assert!(!dto.is_external);
    }
}
