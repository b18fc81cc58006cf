//! Lead capture models: contact submissions, showing requests and purchase
//! offers, each with a small triage status machine.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Subject of a contact form submission, matching the `contact_subject`
/// database enum.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema, Default,
)]
#[sqlx(type_name = "contact_subject", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ContactSubject {
    #[default]
    NewProject,
    DiasporaConsultation,
    Partnership,
    Other,
}

/// Triage status of a contact submission (`submission_status`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema, Default,
)]
#[sqlx(type_name = "submission_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    #[default]
    New,
    Read,
    Replied,
    Archived,
}

#[derive(Debug, Clone, FromRow)]
pub struct ContactSubmission {
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

/// Requested slot of a home showing (`preferred_time`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema, Default,
)]
#[sqlx(type_name = "preferred_time", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PreferredTime {
    #[default]
    Morning,
    Afternoon,
    Evening,
}

/// Triage status of a showing request (`showing_status`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema, Default,
)]
#[sqlx(type_name = "showing_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ShowingStatus {
    #[default]
    New,
    Contacted,
    Scheduled,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, FromRow)]
pub struct ShowingRequest {
    pub id: Uuid,
    pub home_id: Uuid,
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

/// How a buyer intends to pay (`financing_type`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema, Default,
)]
#[sqlx(type_name = "financing_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum FinancingType {
    #[default]
    Cash,
    Mortgage,
    Installments,
    Other,
}

/// Triage status of a purchase offer (`offer_status`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema, Default,
)]
#[sqlx(type_name = "offer_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum OfferStatus {
    #[default]
    New,
    UnderReview,
    Accepted,
    Declined,
    Withdrawn,
}

#[derive(Debug, Clone, FromRow)]
pub struct PropertyOffer {
    pub id: Uuid,
    pub home_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    /// Offer amount in KES display format
    pub offer_amount: String,
    pub financing_type: FinancingType,
    pub is_first_time_buyer: bool,
    pub message: String,
    pub status: OfferStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
