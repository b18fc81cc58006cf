use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::company::models::{Company, ContactPerson, ContactRole};
use crate::shared::validation::PHONE_REGEX;

fn d_country() -> String {
    "Kenya".to_string()
}

fn d_city() -> String {
    "Nairobi".to_string()
}

/// Request DTO for saving the company profile. The whole profile is
/// replaced on every save.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UpsertCompanyDto {
    /// Full legal name of the company
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,

    /// Brand name if different from the legal name
    #[validate(length(max = 200, message = "Trading name must not exceed 200 characters"))]
    pub trading_name: String,

    #[validate(length(max = 300, message = "Tagline must not exceed 300 characters"))]
    pub tagline: String,

    #[validate(length(max = 100, message = "Registration number must not exceed 100 characters"))]
    pub registration_number: String,

    /// KRA PIN / Tax ID
    #[validate(length(max = 100, message = "Tax ID must not exceed 100 characters"))]
    pub tax_identification_number: String,

    #[validate(length(max = 100, message = "VAT number must not exceed 100 characters"))]
    pub vat_number: String,

    #[validate(range(min = 1800, max = 2100, message = "Year founded is out of range"))]
    pub year_founded: Option<i32>,

    #[validate(length(max = 100, message = "Company type must not exceed 100 characters"))]
    pub company_type: String,

    #[validate(length(max = 100, message = "Country must not exceed 100 characters"))]
    pub country_of_incorporation: String,

    pub physical_address: String,

    #[validate(length(max = 100, message = "City must not exceed 100 characters"))]
    pub city: String,

    #[validate(length(max = 100, message = "County must not exceed 100 characters"))]
    pub county: String,

    #[validate(length(max = 100, message = "Country must not exceed 100 characters"))]
    pub country: String,

    #[validate(length(max = 20, message = "Postal code must not exceed 20 characters"))]
    pub postal_code: String,

    /// e.g. "P.O. Box 12345-00100, Nairobi"
    #[validate(length(max = 100, message = "P.O. Box must not exceed 100 characters"))]
    pub po_box: String,

    /// Office/HQ latitude, decimal degrees
    pub latitude: Option<Decimal>,

    pub longitude: Option<Decimal>,

    #[validate(length(max = 30, message = "Phone must not exceed 30 characters"))]
    pub primary_phone: String,

    #[validate(length(max = 30, message = "Phone must not exceed 30 characters"))]
    pub secondary_phone: String,

    #[validate(length(max = 30, message = "WhatsApp number must not exceed 30 characters"))]
    pub whatsapp_number: String,

    pub primary_email: String,
    pub support_email: String,

    #[validate(url(message = "Invalid website URL"))]
    pub website: Option<String>,

    #[validate(url(message = "Invalid Facebook URL"))]
    pub facebook_url: Option<String>,

    #[validate(url(message = "Invalid Instagram URL"))]
    pub instagram_url: Option<String>,

    #[validate(url(message = "Invalid Twitter URL"))]
    pub twitter_url: Option<String>,

    #[validate(url(message = "Invalid LinkedIn URL"))]
    pub linkedin_url: Option<String>,

    #[validate(url(message = "Invalid YouTube URL"))]
    pub youtube_url: Option<String>,

    #[validate(url(message = "Invalid TikTok URL"))]
    pub tiktok_url: Option<String>,
}

impl Default for UpsertCompanyDto {
    fn default() -> Self {
        Self {
            name: String::new(),
            trading_name: String::new(),
            tagline: String::new(),
            registration_number: String::new(),
            tax_identification_number: String::new(),
            vat_number: String::new(),
            year_founded: None,
            company_type: String::new(),
            country_of_incorporation: d_country(),
            physical_address: String::new(),
            city: d_city(),
            county: String::new(),
            country: d_country(),
            postal_code: String::new(),
            po_box: String::new(),
            latitude: None,
            longitude: None,
            primary_phone: String::new(),
            secondary_phone: String::new(),
            whatsapp_number: String::new(),
            primary_email: String::new(),
            support_email: String::new(),
            website: None,
            facebook_url: None,
            instagram_url: None,
            twitter_url: None,
            linkedin_url: None,
            youtube_url: None,
            tiktok_url: None,
        }
    }
}

/// Company profile as stored, with the derived map URLs.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDto {
    pub id: Uuid,
    pub name: String,
    pub trading_name: String,
    pub display_name: String,
    pub tagline: String,
    pub registration_number: String,
    pub tax_identification_number: String,
    pub vat_number: String,
    pub year_founded: Option<i32>,
    pub company_type: String,
    pub country_of_incorporation: String,
    pub physical_address: String,
    pub city: String,
    pub county: String,
    pub country: String,
    pub postal_code: String,
    pub po_box: String,
    pub latitude: Option<Decimal>,
    pub longitude: Option<Decimal>,
    pub osm_embed_url: String,
    pub osm_full_url: String,
    pub primary_phone: String,
    pub secondary_phone: String,
    pub whatsapp_number: String,
    pub primary_email: String,
    pub support_email: String,
    pub website: String,
    pub facebook_url: String,
    pub instagram_url: String,
    pub twitter_url: String,
    pub linkedin_url: String,
    pub youtube_url: String,
    pub tiktok_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Company> for CompanyDto {
    fn from(c: Company) -> Self {
        let display_name = c.display_name().to_string();
        let osm_embed_url = c.osm_embed_url();
        let osm_full_url = c.osm_full_url();
        Self {
            id: c.id,
            name: c.name,
            trading_name: c.trading_name,
            display_name,
            tagline: c.tagline,
            registration_number: c.registration_number,
            tax_identification_number: c.tax_identification_number,
            vat_number: c.vat_number,
            year_founded: c.year_founded,
            company_type: c.company_type,
            country_of_incorporation: c.country_of_incorporation,
            physical_address: c.physical_address,
            city: c.city,
            county: c.county,
            country: c.country,
            postal_code: c.postal_code,
            po_box: c.po_box,
            latitude: c.latitude,
            longitude: c.longitude,
            osm_embed_url,
            osm_full_url,
            primary_phone: c.primary_phone,
            secondary_phone: c.secondary_phone,
            whatsapp_number: c.whatsapp_number,
            primary_email: c.primary_email,
            support_email: c.support_email,
            website: c.website,
            facebook_url: c.facebook_url,
            instagram_url: c.instagram_url,
            twitter_url: c.twitter_url,
            linkedin_url: c.linkedin_url,
            youtube_url: c.youtube_url,
            tiktok_url: c.tiktok_url,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

/// Request DTO for creating a contact person
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactPersonDto {
    #[validate(length(min = 1, max = 100, message = "First name must be 1-100 characters"))]
    pub first_name: String,

    #[validate(length(max = 100, message = "Last name must not exceed 100 characters"))]
    #[serde(default)]
    pub last_name: String,

    #[serde(default)]
    pub email: String,

    #[validate(regex(path = "*PHONE_REGEX", message = "Invalid phone number"))]
    pub phone: Option<String>,

    #[serde(default)]
    pub role: ContactRole,

    /// Job title as displayed publicly (e.g. "Head of Sales")
    #[validate(length(max = 200, message = "Title must not exceed 200 characters"))]
    #[serde(default)]
    pub title: String,

    /// Profile photo from the shared image library
    pub portrait_image_id: Option<Uuid>,

    #[serde(default)]
    pub bio: String,

    #[serde(default = "d_true")]
    pub is_public: bool,

    #[serde(default)]
    pub position: i32,
}

fn d_true() -> bool {
    true
}

/// Request DTO for updating a contact person. Absent fields are left
/// unchanged; `portrait_image_id` is always applied so the portrait can be
/// cleared.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContactPersonDto {
    #[validate(length(min = 1, max = 100, message = "First name must be 1-100 characters"))]
    pub first_name: Option<String>,

    #[validate(length(max = 100, message = "Last name must not exceed 100 characters"))]
    pub last_name: Option<String>,

    pub email: Option<String>,

    #[validate(regex(path = "*PHONE_REGEX", message = "Invalid phone number"))]
    pub phone: Option<String>,

    pub role: Option<ContactRole>,

    #[validate(length(max = 200, message = "Title must not exceed 200 characters"))]
    pub title: Option<String>,

    #[serde(default)]
    pub portrait_image_id: Option<Uuid>,

    pub bio: Option<String>,
    pub is_public: Option<bool>,
    pub position: Option<i32>,
}

/// Staff response DTO for a contact person
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactPersonDto {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub role: ContactRole,
    pub role_display: String,
    pub title: String,
    pub portrait_image_id: Option<Uuid>,
    pub bio: String,
    pub is_public: bool,
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ContactPerson> for ContactPersonDto {
    fn from(p: ContactPerson) -> Self {
        let full_name = p.full_name();
        Self {
            id: p.id,
            first_name: p.first_name,
            last_name: p.last_name,
            full_name,
            email: p.email,
            phone: p.phone,
            role: p.role,
            role_display: p.role.label().to_string(),
            title: p.title,
            portrait_image_id: p.portrait_image_id,
            bio: p.bio,
            is_public: p.is_public,
            position: p.position,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

/// Public team member card
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberDto {
    pub full_name: String,
    pub role: ContactRole,
    pub role_display: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub portrait_url: String,
    pub bio: String,
}

/// Public payload: footer/contact details plus the public team listing.
/// `company` is null until the profile has been set up.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInfoDto {
    pub company: Option<CompanyDto>,
    pub team: Vec<TeamMemberDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeletePersonResponseDto {
    pub deleted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_company_defaults() {
        let dto: UpsertCompanyDto =
            serde_json::from_str(r#"{"name": "TrustBuild Urban Ltd"}"#).unwrap();
        assert_eq!(dto.city, "Nairobi");
        assert_eq!(dto.country, "Kenya");
        assert_eq!(dto.country_of_incorporation, "Kenya");
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_upsert_company_rejects_bad_url() {
        let dto: UpsertCompanyDto = serde_json::from_str(
            r#"{"name": "TrustBuild Urban Ltd", "website": "not-a-url"}"#,
        )
        .unwrap();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_create_person_defaults_to_public() {
        let dto: CreateContactPersonDto =
            serde_json::from_str(r#"{"firstName": "Grace"}"#).unwrap();
        assert!(dto.is_public);
        assert_eq!(dto.role, ContactRole::Other);
        assert!(dto.validate().is_ok());
    }
}
