use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::leads::models::{
    ContactSubject, ContactSubmission, FinancingType, OfferStatus, PreferredTime, PropertyOffer,
    ShowingRequest, ShowingStatus, SubmissionStatus,
};
use crate::shared::constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::shared::validation::PHONE_REGEX;

/// Public contact form submission.
///
/// `website` is a honeypot: real visitors never see the field, so any value
/// marks the submission as bot traffic.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactSubmissionDto {
    #[validate(length(min = 1, max = 100, message = "First name must be 1-100 characters"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100, message = "Last name must be 1-100 characters"))]
    pub last_name: String,

    #[validate(email(message = "Invalid email address"))]
    #[validate(length(max = 254, message = "Email must not exceed 254 characters"))]
    pub email: String,

    #[serde(default)]
    pub subject: ContactSubject,

    #[validate(length(min = 1, max = 5000, message = "Message must be 1-5000 characters"))]
    pub message: String,

    /// Honeypot; leave empty
    #[serde(default)]
    pub website: Option<String>,
}

/// Public showing request for a specific home
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateShowingRequestDto {
    #[validate(length(min = 1, max = 100, message = "First name must be 1-100 characters"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100, message = "Last name must be 1-100 characters"))]
    pub last_name: String,

    #[validate(email(message = "Invalid email address"))]
    #[validate(length(max = 254, message = "Email must not exceed 254 characters"))]
    pub email: String,

    #[validate(regex(path = "*PHONE_REGEX", message = "Invalid phone number"))]
    pub phone: String,

    pub preferred_date: Option<NaiveDate>,

    #[serde(default)]
    pub preferred_time: PreferredTime,

    #[serde(default)]
    pub is_first_time_buyer: bool,

    #[validate(length(max = 5000, message = "Message must not exceed 5000 characters"))]
    #[serde(default)]
    pub message: String,

    /// Honeypot; leave empty
    #[serde(default)]
    pub website: Option<String>,
}

/// Public purchase offer for a specific home
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePropertyOfferDto {
    #[validate(length(min = 1, max = 100, message = "First name must be 1-100 characters"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100, message = "Last name must be 1-100 characters"))]
    pub last_name: String,

    #[validate(email(message = "Invalid email address"))]
    #[validate(length(max = 254, message = "Email must not exceed 254 characters"))]
    pub email: String,

    #[validate(regex(path = "*PHONE_REGEX", message = "Invalid phone number"))]
    pub phone: String,

    /// Offer amount in KES display format
    #[validate(length(min = 1, max = 100, message = "Offer amount must be 1-100 characters"))]
    pub offer_amount: String,

    #[serde(default)]
    pub financing_type: FinancingType,

    #[serde(default)]
    pub is_first_time_buyer: bool,

    #[validate(length(max = 5000, message = "Message must not exceed 5000 characters"))]
    #[serde(default)]
    pub message: String,

    /// Honeypot; leave empty
    #[serde(default)]
    pub website: Option<String>,
}

/// Staff response DTO for a contact submission
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmissionDto {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub subject: ContactSubject,
    pub message: String,
    pub status: SubmissionStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ContactSubmission> for ContactSubmissionDto {
    fn from(s: ContactSubmission) -> Self {
        Self {
            id: s.id,
            first_name: s.first_name,
            last_name: s.last_name,
            email: s.email,
            subject: s.subject,
            message: s.message,
            status: s.status,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

/// Staff response DTO for a showing request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShowingRequestDto {
    pub id: Uuid,
    pub home_id: Uuid,
    /// Title of the home the lead refers to; empty when the home is gone
    pub home_title: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub preferred_date: Option<NaiveDate>,
    pub preferred_time: PreferredTime,
    pub is_first_time_buyer: bool,
    pub message: String,
    pub status: ShowingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ShowingRequestDto {
    pub fn from_model(r: ShowingRequest, home_title: String) -> Self {
        Self {
            id: r.id,
            home_id: r.home_id,
            home_title,
            first_name: r.first_name,
            last_name: r.last_name,
            email: r.email,
            phone: r.phone,
            preferred_date: r.preferred_date,
            preferred_time: r.preferred_time,
            is_first_time_buyer: r.is_first_time_buyer,
            message: r.message,
            status: r.status,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// Staff response DTO for a purchase offer
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PropertyOfferDto {
    pub id: Uuid,
    pub home_id: Uuid,
    pub home_title: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub offer_amount: String,
    pub financing_type: FinancingType,
    pub is_first_time_buyer: bool,
    pub message: String,
    pub status: OfferStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PropertyOfferDto {
    pub fn from_model(o: PropertyOffer, home_title: String) -> Self {
        Self {
            id: o.id,
            home_id: o.home_id,
            home_title,
            first_name: o.first_name,
            last_name: o.last_name,
            email: o.email,
            phone: o.phone,
            offer_amount: o.offer_amount,
            financing_type: o.financing_type,
            is_first_time_buyer: o.is_first_time_buyer,
            message: o.message,
            status: o.status,
            created_at: o.created_at,
            updated_at: o.updated_at,
        }
    }
}

/// Status patch DTOs, one per lead type
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSubmissionStatusDto {
    pub status: SubmissionStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateShowingStatusDto {
    pub status: ShowingStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOfferStatusDto {
    pub status: OfferStatus,
}

/// Public acknowledgement after a form submission
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeadReceivedDto {
    pub received: bool,
}

fn default_page() -> i64 {
    1
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

/// Query params for staff lead lists
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct LeadListQuery {
    /// Page number (1-indexed)
    #[serde(default = "default_page")]
    #[param(minimum = 1)]
    pub page: i64,

    /// Items per page
    #[serde(default = "default_page_size")]
    #[param(minimum = 1, maximum = 100)]
    pub page_size: i64,
}

impl LeadListQuery {
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
    fn test_contact_dto_defaults() {
        let dto: CreateContactSubmissionDto = serde_json::from_str(
            r#"{"firstName": "Amina", "lastName": "Odhiambo",
                "email": "amina@example.com", "message": "Hello"}"#,
        )
        .unwrap();
        assert_eq!(dto.subject, ContactSubject::NewProject);
        assert!(dto.website.is_none());
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_contact_dto_rejects_bad_email() {
        let dto: CreateContactSubmissionDto = serde_json::from_str(
            r#"{"firstName": "A", "lastName": "B", "email": "nope", "message": "Hi"}"#,
        )
        .unwrap();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_showing_request_phone_validation() {
        let dto: CreateShowingRequestDto = serde_json::from_str(
            r#"{"firstName": "A", "lastName": "B", "email": "a@b.co",
                "phone": "not a phone"}"#,
        )
        .unwrap();
        assert!(dto.validate().is_err());

        let dto: CreateShowingRequestDto = serde_json::from_str(
            r#"{"firstName": "A", "lastName": "B", "email": "a@b.co",
                "phone": "+254 722 000 000"}"#,
        )
        .unwrap();
        assert!(dto.validate().is_ok());
        assert_eq!(dto.preferred_time, PreferredTime::Morning);
    }

    #[test]
    fn test_offer_financing_parses() {
        let dto: CreatePropertyOfferDto = serde_json::from_str(
            r#"{"firstName": "A", "lastName": "B", "email": "a@b.co",
                "phone": "+254722000000", "offerAmount": "KES 40,000,000",
                "financingType": "mortgage"}"#,
        )
        .unwrap();
        assert_eq!(dto.financing_type, FinancingType::Mortgage);
        assert!(dto.validate().is_ok());
    }
}
