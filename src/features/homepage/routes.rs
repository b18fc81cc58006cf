//! Home-page section routes (staff only; the basic-auth layer is applied
//! where the admin router is assembled).

use std::sync::Arc;

use axum::{
    routing::{delete, put},
    Router,
};

use crate::features::homepage::handlers;
use crate::features::homepage::services::HomepageService;

pub fn admin_routes(service: Arc<HomepageService>) -> Router {
    Router::new()
        .route(
            "/api/admin/pages/{page_id}/sections/hero",
            put(handlers::upsert_hero),
        )
        .route(
            "/api/admin/pages/{page_id}/sections/stats",
            put(handlers::upsert_stats),
        )
        .route(
            "/api/admin/pages/{page_id}/sections/client-review",
            put(handlers::upsert_client_review),
        )
        .route(
            "/api/admin/pages/{page_id}/sections/diaspora",
            put(handlers::upsert_diaspora),
        )
        .route(
            "/api/admin/pages/{page_id}/sections/features",
            put(handlers::upsert_features),
        )
        .route(
            "/api/admin/pages/{page_id}/sections/steps",
            put(handlers::upsert_steps),
        )
        .route(
            "/api/admin/pages/{page_id}/sections/services",
            put(handlers::upsert_services),
        )
        .route(
            "/api/admin/pages/{page_id}/sections/newsletter",
            put(handlers::upsert_newsletter),
        )
        .route(
            "/api/admin/pages/{page_id}/sections/who-we-are",
            put(handlers::upsert_who_we_are),
        )
        .route(
            "/api/admin/pages/{page_id}/sections/portfolio",
            put(handlers::upsert_portfolio),
        )
        .route(
            "/api/admin/pages/{page_id}/sections/{section}",
            delete(handlers::delete_section),
        )
        .with_state(service)
}
