//! Listing routes: a public storefront plus the staff admin surface.

use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};

use crate::features::listings::handlers;
use crate::features::listings::services::ListingService;

/// Public routes (no authentication)
pub fn routes(service: Arc<ListingService>) -> Router {
    Router::new()
        .route("/api/homes", get(handlers::list_homes))
        .route("/api/homes/{slug}", get(handlers::get_home))
        .with_state(service)
}

/// Staff routes (basic-auth layer applied by the admin router)
pub fn admin_routes(service: Arc<ListingService>) -> Router {
    Router::new()
        .route(
            "/api/admin/homes",
            get(handlers::list_homes_admin).post(handlers::create_home),
        )
        .route(
            "/api/admin/homes/{id}",
            get(handlers::get_home_admin)
                .patch(handlers::update_home)
                .delete(handlers::delete_home),
        )
        .route(
            "/api/admin/homes/{id}/gallery",
            put(handlers::replace_gallery),
        )
        .route(
            "/api/admin/homes/{id}/details",
            put(handlers::replace_details),
        )
        .route(
            "/api/admin/pages/{page_id}/listings/hero",
            put(handlers::upsert_listings_hero),
        )
        .route(
            "/api/admin/pages/{page_id}/listings/cta",
            put(handlers::upsert_listings_cta),
        )
        .with_state(service)
}
