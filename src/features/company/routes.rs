//! Company routes: the public footer/contact payload plus the staff
//! profile and team management surface.

use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};

use crate::features::company::handlers;
use crate::features::company::services::CompanyService;

/// Public routes (no authentication)
pub fn routes(service: Arc<CompanyService>) -> Router {
    Router::new()
        .route("/api/company", get(handlers::get_company_info))
        .with_state(service)
}

/// Staff routes (basic-auth layer applied by the admin router)
pub fn admin_routes(service: Arc<CompanyService>) -> Router {
    Router::new()
        .route(
            "/api/admin/company",
            get(handlers::get_company).put(handlers::upsert_company),
        )
        .route(
            "/api/admin/company/persons",
            get(handlers::list_persons).post(handlers::create_person),
        )
        .route(
            "/api/admin/company/persons/{id}",
            get(handlers::get_person)
                .patch(handlers::update_person)
                .delete(handlers::delete_person),
        )
        .with_state(service)
}
