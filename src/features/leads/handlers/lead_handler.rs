use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::leads::dtos::{
    ContactSubmissionDto, CreateContactSubmissionDto, CreatePropertyOfferDto,
    CreateShowingRequestDto, LeadListQuery, LeadReceivedDto, PropertyOfferDto, ShowingRequestDto,
    UpdateOfferStatusDto, UpdateShowingStatusDto, UpdateSubmissionStatusDto,
};
use crate::features::leads::services::LeadService;
use crate::shared::types::{ApiResponse, Meta};

/// True when the hidden honeypot field was filled in. Bots get the same
/// acknowledgement as real visitors, but nothing is persisted.
fn is_honeypot_hit(website: &Option<String>) -> bool {
    website.as_deref().is_some_and(|v| !v.trim().is_empty())
}

fn received() -> (StatusCode, Json<ApiResponse<LeadReceivedDto>>) {
    (
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(LeadReceivedDto { received: true }),
            Some("Thank you! We will get back to you shortly.".to_string()),
            None,
        )),
    )
}

// ---- public intake ----

/// Submit the contact form
#[utoipa::path(
    post,
    path = "/api/contact/submissions",
    tag = "leads",
    request_body = CreateContactSubmissionDto,
    responses(
        (status = 201, description = "Submission received", body = ApiResponse<LeadReceivedDto>),
        (status = 400, description = "Validation error")
    )
)]
pub async fn submit_contact(
    State(service): State<Arc<LeadService>>,
    AppJson(dto): AppJson<CreateContactSubmissionDto>,
) -> Result<(StatusCode, Json<ApiResponse<LeadReceivedDto>>)> {
    if is_honeypot_hit(&dto.website) {
        info!("Honeypot triggered on contact form, dropping submission");
        return Ok(received());
    }

    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    service.submit_contact(dto).await?;
    Ok(received())
}

/// Request a showing for a home
#[utoipa::path(
    post,
    path = "/api/homes/{slug}/showing-requests",
    tag = "leads",
    params(("slug" = String, Path, description = "Home slug")),
    request_body = CreateShowingRequestDto,
    responses(
        (status = 201, description = "Request received", body = ApiResponse<LeadReceivedDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Home not found")
    )
)]
pub async fn submit_showing(
    State(service): State<Arc<LeadService>>,
    Path(slug): Path<String>,
    AppJson(dto): AppJson<CreateShowingRequestDto>,
) -> Result<(StatusCode, Json<ApiResponse<LeadReceivedDto>>)> {
    if is_honeypot_hit(&dto.website) {
        info!("Honeypot triggered on showing form, dropping submission");
        return Ok(received());
    }

    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    service.submit_showing(&slug, dto).await?;
    Ok(received())
}

/// Make an offer on a home
#[utoipa::path(
    post,
    path = "/api/homes/{slug}/offers",
    tag = "leads",
    params(("slug" = String, Path, description = "Home slug")),
    request_body = CreatePropertyOfferDto,
    responses(
        (status = 201, description = "Offer received", body = ApiResponse<LeadReceivedDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Home not found")
    )
)]
pub async fn submit_offer(
    State(service): State<Arc<LeadService>>,
    Path(slug): Path<String>,
    AppJson(dto): AppJson<CreatePropertyOfferDto>,
) -> Result<(StatusCode, Json<ApiResponse<LeadReceivedDto>>)> {
    if is_honeypot_hit(&dto.website) {
        info!("Honeypot triggered on offer form, dropping submission");
        return Ok(received());
    }

    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    service.submit_offer(&slug, dto).await?;
    Ok(received())
}

// ---- staff triage ----

/// List contact submissions, newest first
#[utoipa::path(
    get,
    path = "/api/admin/leads/contact-submissions",
    tag = "leads",
    params(LeadListQuery),
    responses(
        (status = 200, description = "Submissions retrieved successfully", body = ApiResponse<Vec<ContactSubmissionDto>>),
        (status = 401, description = "Authentication required")
    ),
    security(("basic_auth" = []))
)]
pub async fn list_submissions(
    State(service): State<Arc<LeadService>>,
    Query(params): Query<LeadListQuery>,
) -> Result<Json<ApiResponse<Vec<ContactSubmissionDto>>>> {
    let (submissions, total) = service.list_submissions(&params).await?;
    Ok(Json(ApiResponse::success(
        Some(
            submissions
                .into_iter()
                .map(ContactSubmissionDto::from)
                .collect(),
        ),
        None,
        Some(Meta { total }),
    )))
}

/// Update a contact submission's triage status
#[utoipa::path(
    patch,
    path = "/api/admin/leads/contact-submissions/{id}/status",
    tag = "leads",
    params(("id" = Uuid, Path, description = "Submission ID")),
    request_body = UpdateSubmissionStatusDto,
    responses(
        (status = 200, description = "Status updated", body = ApiResponse<ContactSubmissionDto>),
        (status = 404, description = "Submission not found"),
        (status = 401, description = "Authentication required")
    ),
    security(("basic_auth" = []))
)]
pub async fn update_submission_status(
    State(service): State<Arc<LeadService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateSubmissionStatusDto>,
) -> Result<Json<ApiResponse<ContactSubmissionDto>>> {
    let submission = service.update_submission_status(id, dto.status).await?;
    Ok(Json(ApiResponse::success(
        Some(submission.into()),
        None,
        None,
    )))
}

/// List showing requests, newest first
#[utoipa::path(
    get,
    path = "/api/admin/leads/showing-requests",
    tag = "leads",
    params(LeadListQuery),
    responses(
        (status = 200, description = "Requests retrieved successfully", body = ApiResponse<Vec<ShowingRequestDto>>),
        (status = 401, description = "Authentication required")
    ),
    security(("basic_auth" = []))
)]
pub async fn list_showings(
    State(service): State<Arc<LeadService>>,
    Query(params): Query<LeadListQuery>,
) -> Result<Json<ApiResponse<Vec<ShowingRequestDto>>>> {
    let (requests, total) = service.list_showings(&params).await?;
    Ok(Json(ApiResponse::success(
        Some(requests),
        None,
        Some(Meta { total }),
    )))
}

/// Update a showing request's triage status
#[utoipa::path(
    patch,
    path = "/api/admin/leads/showing-requests/{id}/status",
    tag = "leads",
    params(("id" = Uuid, Path, description = "Request ID")),
    request_body = UpdateShowingStatusDto,
    responses(
        (status = 200, description = "Status updated", body = ApiResponse<ShowingRequestDto>),
        (status = 404, description = "Request not found"),
        (status = 401, description = "Authentication required")
    ),
    security(("basic_auth" = []))
)]
pub async fn update_showing_status(
    State(service): State<Arc<LeadService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateShowingStatusDto>,
) -> Result<Json<ApiResponse<ShowingRequestDto>>> {
    let request = service.update_showing_status(id, dto.status).await?;
    let dto = ShowingRequestDto::from_model(request, String::new());
    Ok(Json(ApiResponse::success(Some(dto), None, None)))
}

/// List purchase offers, newest first
#[utoipa::path(
    get,
    path = "/api/admin/leads/offers",
    tag = "leads",
    params(LeadListQuery),
    responses(
        (status = 200, description = "Offers retrieved successfully", body = ApiResponse<Vec<PropertyOfferDto>>),
        (status = 401, description = "Authentication required")
    ),
    security(("basic_auth" = []))
)]
pub async fn list_offers(
    State(service): State<Arc<LeadService>>,
    Query(params): Query<LeadListQuery>,
) -> Result<Json<ApiResponse<Vec<PropertyOfferDto>>>> {
    let (offers, total) = service.list_offers(&params).await?;
    Ok(Json(ApiResponse::success(
        Some(offers),
        None,
        Some(Meta { total }),
    )))
}

/// Update a purchase offer's triage status
#[utoipa::path(
    patch,
    path = "/api/admin/leads/offers/{id}/status",
    tag = "leads",
    params(("id" = Uuid, Path, description = "Offer ID")),
    request_body = UpdateOfferStatusDto,
    responses(
        (status = 200, description = "Status updated", body = ApiResponse<PropertyOfferDto>),
        (status = 404, description = "Offer not found"),
        (status = 401, description = "Authentication required")
    ),
    security(("basic_auth" = []))
)]
pub async fn update_offer_status(
    State(service): State<Arc<LeadService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateOfferStatusDto>,
) -> Result<Json<ApiResponse<PropertyOfferDto>>> {
    let offer = service.update_offer_status(id, dto.status).await?;
    let dto = PropertyOfferDto::from_model(offer, String::new());
    Ok(Json(ApiResponse::success(Some(dto), None, None)))
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum_test::TestServer;
    use serde_json::json;

    use crate::features::leads::routes;
    use crate::shared::test_helpers::lazy_test_pool;

    #[test]
    fn test_honeypot_detection() {
        assert!(!is_honeypot_hit(&None));
        assert!(!is_honeypot_hit(&Some(String::new())));
        assert!(!is_honeypot_hit(&Some("   ".to_string())));
        assert!(is_honeypot_hit(&Some("http://spam.example".to_string())));
    }

    // The honeypot path never reaches the database, so a lazy pool that
    // would fail on first query proves the submission was dropped.
    #[tokio::test]
    async fn test_honeypot_submission_gets_fake_success() {
        let service = Arc::new(LeadService::new(lazy_test_pool()));
        let server = TestServer::new(routes::routes(service)).unwrap();

        let response = server
            .post("/api/contact/submissions")
            .json(&json!({
                "firstName": "Spam",
                "lastName": "Bot",
                "email": "bot@spam.example",
                "message": "Buy now",
                "website": "http://spam.example"
            }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["received"], true);
    }
}
