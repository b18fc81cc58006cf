//! Public view DTOs for the assembled home page.
//!
//! Each section DTO has a `fallback()` constructor returning the hard-coded
//! copy served when the section row is missing, so the public payload is
//! always complete.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::homepage::models::{ButtonSize, ButtonStyle, SectionButton};

const HERO_FALLBACK_IMAGE: &str =
    "https://images.unsplash.com/photo-1600607687920-4e2a09cf159d?auto=format&fit=crop&q=80&w=1200";
const DIASPORA_FALLBACK_IMAGE: &str =
    "https://images.unsplash.com/photo-1564013799919-ab600027ffc6?q=80&w=870&auto=format&fit=crop";

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ButtonViewDto {
    pub text: String,
    pub link: String,
    pub icon: String,
    pub style: ButtonStyle,
    pub size: ButtonSize,
    pub is_external: bool,
    pub is_full_width: bool,
}

impl From<SectionButton> for ButtonViewDto {
    fn from(button: SectionButton) -> Self {
        Self {
            text: button.text,
            link: button.link,
            icon: button.icon,
            style: button.style,
            size: button.size,
            is_external: button.is_external,
            is_full_width: button.is_full_width,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HeroViewDto {
    pub tagline: String,
    pub heading_main: String,
    pub heading_highlight: String,
    pub heading_suffix: String,
    pub description: String,
    pub image_url: String,
    pub overlay_opacity: i32,
    pub show_verified_badge: bool,
    pub verified_text: String,
    pub show_live_tracking: bool,
    pub live_tracking_text: String,
    pub company_name: String,
    pub company_location: String,
    pub buttons: Vec<ButtonViewDto>,
}

impl HeroViewDto {
    pub fn fallback() -> Self {
        Self {
            tagline: String::new(),
            heading_main: String::new(),
            heading_highlight: String::new(),
            heading_suffix: String::new(),
            description: String::new(),
            image_url: HERO_FALLBACK_IMAGE.to_string(),
            overlay_opacity: 50,
            show_verified_badge: true,
            verified_text: "Verified".to_string(),
            show_live_tracking: true,
            live_tracking_text: "Live Project Tracking".to_string(),
            company_name: "TrustBuild".to_string(),
            company_location: "Nairobi, Kenya".to_string(),
            buttons: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatViewDto {
    pub number: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatsViewDto {
    pub header: String,
    pub background_url: String,
    pub stats: Vec<StatViewDto>,
}

impl StatsViewDto {
    pub fn fallback() -> Self {
        Self {
            header: "TRUSTBUILD URBAN BY THE NUMBERS".to_string(),
            background_url: String::new(),
            stats: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientReviewViewDto {
    pub rating: i32,
    pub total_reviews: String,
    pub label_text: String,
    pub button_text: String,
    pub button_link: String,
}

impl ClientReviewViewDto {
    pub fn fallback() -> Self {
        Self {
            rating: 5,
            total_reviews: "12,000+".to_string(),
            label_text: "Client Reviews".to_string(),
            button_text: "Discover Excellence".to_string(),
            button_link: "#".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeViewDto {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiasporaViewDto {
    pub eyebrow: String,
    pub heading: String,
    pub attribution: String,
    pub featured_label: String,
    pub featured_title: String,
    pub featured_image_url: String,
    pub challenges: Vec<ChallengeViewDto>,
}

impl DiasporaViewDto {
    pub fn fallback() -> Self {
        Self {
            eyebrow: "The Diaspora Challenge".to_string(),
            heading: "Building in Kenya should not be a gamble.".to_string(),
            attribution: "TrustBuildUrban was founded to replace fear with structured, \
                          world-class building standards."
                .to_string(),
            featured_label: "Featured Project".to_string(),
            featured_title: "The Grand Residence, Runda".to_string(),
            featured_image_url: DIASPORA_FALLBACK_IMAGE.to_string(),
            challenges: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeatureViewDto {
    pub title: String,
    pub description: String,
    pub icon_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeaturesViewDto {
    pub eyebrow: String,
    pub heading: String,
    pub features: Vec<FeatureViewDto>,
}

impl FeaturesViewDto {
    pub fn fallback() -> Self {
        Self {
            eyebrow: "The TrustBuildUrban Standard".to_string(),
            heading: "Why Hundreds of Diaspora Families Trust Us".to_string(),
            features: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StepViewDto {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StepsViewDto {
    pub eyebrow: String,
    pub heading: String,
    pub description: String,
    pub steps: Vec<StepViewDto>,
}

impl StepsViewDto {
    pub fn fallback() -> Self {
        Self {
            eyebrow: "Transparent Execution".to_string(),
            heading: "Our 7-Step Architectural Journey".to_string(),
            description: "A meticulously structured process from initial concept to the day we \
                          hand over your keys."
                .to_string(),
            steps: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceViewDto {
    pub title: String,
    pub description: String,
    pub icon: String,
    /// Comma-separated in storage, split for rendering
    pub expertise: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServicesViewDto {
    pub subtitle: String,
    pub heading: String,
    pub services: Vec<ServiceViewDto>,
}

impl ServicesViewDto {
    pub fn fallback() -> Self {
        Self {
            subtitle: "Our Specializations".to_string(),
            heading: "Elite Engineering & Architectural Excellence".to_string(),
            services: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterViewDto {
    pub heading: String,
    pub description: String,
    pub placeholder: String,
    /// First button's text, or the stock CTA when no button exists
    pub cta_text: String,
    pub buttons: Vec<ButtonViewDto>,
}

impl NewsletterViewDto {
    pub fn fallback() -> Self {
        Self {
            heading: "Free Diaspora Home Building Guide".to_string(),
            description: "Download our comprehensive manual on navigating land laws, approvals, \
                          and construction costs in Kenya from abroad."
                .to_string(),
            placeholder: "Enter your email".to_string(),
            cta_text: "GET THE GUIDE".to_string(),
            buttons: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WhoWeAreViewDto {
    pub label: String,
    pub heading: String,
    pub description: String,
    pub button_text: String,
    pub button_link: String,
    pub background_image_url: String,
    pub overlay_opacity: i32,
}

impl WhoWeAreViewDto {
    pub fn fallback() -> Self {
        Self {
            label: "Who We Are".to_string(),
            heading: "Committed, client-focused, and process-driven builders.".to_string(),
            description: "We deliver world-class construction services with a focus on quality, \
                          transparency, and client satisfaction."
                .to_string(),
            button_text: "Learn More".to_string(),
            button_link: "/about".to_string(),
            background_image_url: String::new(),
            overlay_opacity: 40,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioViewDto {
    pub eyebrow: String,
    pub heading: String,
    pub description: String,
    pub button_text: String,
    pub button_link: String,
}

impl PortfolioViewDto {
    pub fn fallback() -> Self {
        Self {
            eyebrow: "Our Work".to_string(),
            heading: "A Glimpse of Our Architectural Excellence".to_string(),
            description: "Luxury and family homes delivered across the country.".to_string(),
            button_text: "View Portfolio".to_string(),
            button_link: "/portfolio".to_string(),
        }
    }
}

/// The full assembled home page served to the public site
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HomePayloadDto {
    pub hero: HeroViewDto,
    pub stats: StatsViewDto,
    pub client_review: ClientReviewViewDto,
    pub diaspora: DiasporaViewDto,
    pub features: FeaturesViewDto,
    pub steps: StepsViewDto,
    pub services: ServicesViewDto,
    pub newsletter: NewsletterViewDto,
    pub who_we_are: WhoWeAreViewDto,
    pub portfolio: PortfolioViewDto,
}
