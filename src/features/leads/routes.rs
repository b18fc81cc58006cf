//! Lead routes: public intake forms plus the staff triage surface.

use std::sync::Arc;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::features::leads::handlers;
use crate::features::leads::services::LeadService;

/// Public routes (no authentication)
pub fn routes(service: Arc<LeadService>) -> Router {
    Router::new()
        .route("/api/contact/submissions", post(handlers::submit_contact))
        .route(
            "/api/homes/{slug}/showing-requests",
            post(handlers::submit_showing),
        )
        .route("/api/homes/{slug}/offers", post(handlers::submit_offer))
        .with_state(service)
}

/// Staff routes (basic-auth layer applied by the admin router)
pub fn admin_routes(service: Arc<LeadService>) -> Router {
    Router::new()
        .route(
            "/api/admin/leads/contact-submissions",
            get(handlers::list_submissions),
        )
        .route(
            "/api/admin/leads/contact-submissions/{id}/status",
            patch(handlers::update_submission_status),
        )
        .route(
            "/api/admin/leads/showing-requests",
            get(handlers::list_showings),
        )
        .route(
            "/api/admin/leads/showing-requests/{id}/status",
            patch(handlers::update_showing_status),
        )
        .route("/api/admin/leads/offers", get(handlers::list_offers))
        .route(
            "/api/admin/leads/offers/{id}/status",
            patch(handlers::update_offer_status),
        )
        .with_state(service)
}
