use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::ai::{dtos as ai_dtos, handlers as ai_handlers};
use crate::features::company::{
    dtos as company_dtos, handlers as company_handlers, models as company_models,
};
use crate::features::homepage::{dtos as homepage_dtos, handlers as homepage_handlers};
use crate::features::images::{dtos as images_dtos, handlers as images_handlers};
use crate::features::leads::{dtos as leads_dtos, handlers as leads_handlers, models as leads_models};
use crate::features::listings::{
    dtos as listings_dtos, handlers as listings_handlers, models as listings_models,
};
use crate::features::pages::{dtos as pages_dtos, handlers as pages_handlers, models as pages_models};
use crate::features::{homepage, images};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Images
        images_handlers::upload_image,
        images_handlers::create_image_from_url,
        images_handlers::list_images,
        images_handlers::get_image,
        images_handlers::update_image,
        images_handlers::delete_image,
        // Pages (public)
        pages_handlers::get_menu,
        pages_handlers::get_home_page,
        pages_handlers::get_page_by_path,
        // Pages (staff)
        pages_handlers::create_page,
        pages_handlers::list_pages,
        pages_handlers::get_page,
        pages_handlers::update_page,
        pages_handlers::delete_page,
        // Homepage sections (staff)
        homepage_handlers::upsert_hero,
        homepage_handlers::upsert_stats,
        homepage_handlers::upsert_client_review,
        homepage_handlers::upsert_diaspora,
        homepage_handlers::upsert_features,
        homepage_handlers::upsert_steps,
        homepage_handlers::upsert_services,
        homepage_handlers::upsert_newsletter,
        homepage_handlers::upsert_who_we_are,
        homepage_handlers::upsert_portfolio,
        homepage_handlers::delete_section,
        // Listings (public)
        listings_handlers::list_homes,
        listings_handlers::get_home,
        // Listings (staff)
        listings_handlers::create_home,
        listings_handlers::list_homes_admin,
        listings_handlers::get_home_admin,
        listings_handlers::update_home,
        listings_handlers::delete_home,
        listings_handlers::replace_gallery,
        listings_handlers::replace_details,
        listings_handlers::upsert_listings_hero,
        listings_handlers::upsert_listings_cta,
        // Leads (public)
        leads_handlers::submit_contact,
        leads_handlers::submit_showing,
        leads_handlers::submit_offer,
        // Leads (staff)
        leads_handlers::list_submissions,
        leads_handlers::update_submission_status,
        leads_handlers::list_showings,
        leads_handlers::update_showing_status,
        leads_handlers::list_offers,
        leads_handlers::update_offer_status,
        // Company
        company_handlers::get_company_info,
        company_handlers::get_company,
        company_handlers::upsert_company,
        company_handlers::create_person,
        company_handlers::list_persons,
        company_handlers::get_person,
        company_handlers::update_person,
        company_handlers::delete_person,
        // AI
        ai_handlers::generate,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Images
            images::OwnerKind,
            images_dtos::UploadImageDto,
            images_dtos::CreateImageFromUrlDto,
            images_dtos::UpdateImageDto,
            images_dtos::ImageResponseDto,
            images_dtos::ImageListItemDto,
            images_dtos::ImageDetailDto,
            images_dtos::ImageUsageDto,
            images_dtos::DeleteImageResponseDto,
            ApiResponse<images_dtos::ImageResponseDto>,
            ApiResponse<Vec<images_dtos::ImageListItemDto>>,
            ApiResponse<images_dtos::ImageDetailDto>,
            ApiResponse<images_dtos::DeleteImageResponseDto>,
            // Pages
            pages_models::PageKind,
            pages_models::PageStatus,
            pages_dtos::CreatePageDto,
            pages_dtos::UpdatePageDto,
            pages_dtos::PageResponseDto,
            pages_dtos::PublicPageDto,
            pages_dtos::MenuItemDto,
            pages_dtos::DeletePageResponseDto,
            ApiResponse<pages_dtos::PageResponseDto>,
            ApiResponse<Vec<pages_dtos::PageResponseDto>>,
            ApiResponse<pages_dtos::PublicPageDto>,
            ApiResponse<Vec<pages_dtos::MenuItemDto>>,
            ApiResponse<pages_dtos::DeletePageResponseDto>,
            // Homepage sections
            homepage::models::ButtonStyle,
            homepage::models::ButtonSize,
            homepage_dtos::ButtonDto,
            homepage_dtos::StatItemDto,
            homepage_dtos::ChallengeDto,
            homepage_dtos::FeatureDto,
            homepage_dtos::StepDto,
            homepage_dtos::ServiceItemDto,
            homepage_dtos::UpsertHeroDto,
            homepage_dtos::UpsertStatsDto,
            homepage_dtos::UpsertClientReviewDto,
            homepage_dtos::UpsertDiasporaDto,
            homepage_dtos::UpsertFeaturesDto,
            homepage_dtos::UpsertStepsDto,
            homepage_dtos::UpsertServicesDto,
            homepage_dtos::UpsertNewsletterDto,
            homepage_dtos::UpsertWhoWeAreDto,
            homepage_dtos::UpsertPortfolioDto,
            homepage_dtos::SectionSavedDto,
            homepage_dtos::DeleteSectionResponseDto,
            homepage_dtos::HomePayloadDto,
            homepage_dtos::HeroViewDto,
            homepage_dtos::ButtonViewDto,
            homepage_dtos::StatsViewDto,
            homepage_dtos::StatViewDto,
            homepage_dtos::ClientReviewViewDto,
            homepage_dtos::DiasporaViewDto,
            homepage_dtos::ChallengeViewDto,
            homepage_dtos::FeaturesViewDto,
            homepage_dtos::FeatureViewDto,
            homepage_dtos::StepsViewDto,
            homepage_dtos::StepViewDto,
            homepage_dtos::ServicesViewDto,
            homepage_dtos::ServiceViewDto,
            homepage_dtos::NewsletterViewDto,
            homepage_dtos::WhoWeAreViewDto,
            homepage_dtos::PortfolioViewDto,
            ApiResponse<homepage_dtos::SectionSavedDto>,
            ApiResponse<homepage_dtos::DeleteSectionResponseDto>,
            // Listings
            listings_models::HomeStatus,
            listings_models::DetailSection,
            listings_dtos::CreateHomeDto,
            listings_dtos::UpdateHomeDto,
            listings_dtos::HomeResponseDto,
            listings_dtos::HomeCardDto,
            listings_dtos::HomeDetailPageDto,
            listings_dtos::GalleryEntryDto,
            listings_dtos::GalleryImageDto,
            listings_dtos::ReplaceGalleryDto,
            listings_dtos::DetailGroupDto,
            listings_dtos::DetailItemDto,
            listings_dtos::DetailItemViewDto,
            listings_dtos::ReplaceDetailsDto,
            listings_dtos::UpsertListingsHeroDto,
            listings_dtos::UpsertListingsCtaDto,
            listings_dtos::ListingsHeroViewDto,
            listings_dtos::ListingsCtaViewDto,
            listings_dtos::ListingsPageDto,
            listings_dtos::DeleteHomeResponseDto,
            ApiResponse<listings_dtos::HomeResponseDto>,
            ApiResponse<Vec<listings_dtos::HomeResponseDto>>,
            ApiResponse<Vec<listings_dtos::HomeCardDto>>,
            ApiResponse<listings_dtos::HomeDetailPageDto>,
            ApiResponse<Vec<listings_dtos::GalleryImageDto>>,
            ApiResponse<listings_dtos::DeleteHomeResponseDto>,
            // Leads
            leads_models::ContactSubject,
            leads_models::SubmissionStatus,
            leads_models::PreferredTime,
            leads_models::ShowingStatus,
            leads_models::FinancingType,
            leads_models::OfferStatus,
            leads_dtos::CreateContactSubmissionDto,
            leads_dtos::CreateShowingRequestDto,
            leads_dtos::CreatePropertyOfferDto,
            leads_dtos::ContactSubmissionDto,
            leads_dtos::ShowingRequestDto,
            leads_dtos::PropertyOfferDto,
            leads_dtos::LeadReceivedDto,
            leads_dtos::UpdateSubmissionStatusDto,
            leads_dtos::UpdateShowingStatusDto,
            leads_dtos::UpdateOfferStatusDto,
            ApiResponse<leads_dtos::LeadReceivedDto>,
            ApiResponse<Vec<leads_dtos::ContactSubmissionDto>>,
            ApiResponse<leads_dtos::ContactSubmissionDto>,
            ApiResponse<Vec<leads_dtos::ShowingRequestDto>>,
            ApiResponse<leads_dtos::ShowingRequestDto>,
            ApiResponse<Vec<leads_dtos::PropertyOfferDto>>,
            ApiResponse<leads_dtos::PropertyOfferDto>,
            // Company
            company_models::ContactRole,
            company_dtos::UpsertCompanyDto,
            company_dtos::CompanyDto,
            company_dtos::CompanyInfoDto,
            company_dtos::CreateContactPersonDto,
            company_dtos::UpdateContactPersonDto,
            company_dtos::ContactPersonDto,
            company_dtos::TeamMemberDto,
            company_dtos::DeletePersonResponseDto,
            ApiResponse<company_dtos::CompanyInfoDto>,
            ApiResponse<company_dtos::CompanyDto>,
            ApiResponse<Vec<company_dtos::ContactPersonDto>>,
            ApiResponse<company_dtos::ContactPersonDto>,
            ApiResponse<company_dtos::DeletePersonResponseDto>,
            // AI
            ai_dtos::GenerateContentDto,
            ai_dtos::GeneratedContentDto,
            ApiResponse<ai_dtos::GeneratedContentDto>,
        )
    ),
    tags(
        (name = "images", description = "Shared image library with usage tracking"),
        (name = "pages", description = "Hierarchical marketing pages and the public path resolver"),
        (name = "homepage", description = "Home page section management (staff only)"),
        (name = "listings", description = "Available homes catalog and listings page sections"),
        (name = "leads", description = "Contact, showing and offer submissions"),
        (name = "company", description = "Company profile and team directory"),
        (name = "ai", description = "AI-assisted copy generation (staff only)"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "TrustBuild Core API",
        version = "0.1.0",
        description = "Headless CMS backend for the TrustBuild Urban website",
    )
)]
pub struct ApiDoc;

/// Adds the HTTP Basic security scheme used by the staff endpoints
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "basic_auth",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Basic).build()),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_document_covers_the_image_upload_form() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/api/admin/images/upload"));

        let components = doc.components.expect("components registered");
        assert!(components.schemas.contains_key("UploadImageDto"));
    }

    #[test]
    fn test_openapi_document_registers_basic_auth_scheme() {
        let doc = ApiDoc::openapi();

        let components = doc.components.expect("components registered");
        assert!(components.security_schemes.contains_key("basic_auth"));
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
