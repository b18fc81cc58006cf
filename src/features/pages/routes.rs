//! Page routes: the public site surface plus the staff page tree CRUD.
//!
//! The public side dispatches on page kind, so it carries the section
//! assembly services alongside the page tree.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::homepage::services::HomeAssemblyService;
use crate::features::listings::services::ListingService;
use crate::features::pages::handlers;
use crate::features::pages::services::PageService;

/// State for the public page endpoints: path resolution plus the
/// kind-specific content assembly.
#[derive(Clone)]
pub struct PublicPageState {
    pub pages: Arc<PageService>,
    pub home: Arc<HomeAssemblyService>,
    pub listings: Arc<ListingService>,
}

/// Public routes (no authentication).
///
/// `/api/pages/home` and `/api/pages/menu` are fixed routes; everything
/// else resolves through the slug chain.
pub fn routes(state: PublicPageState) -> Router {
    Router::new()
        .route("/api/pages/menu", get(handlers::get_menu))
        .route("/api/pages/home", get(handlers::get_home_page))
        .route("/api/pages/{*path}", get(handlers::get_page_by_path))
        .with_state(state)
}

/// Staff routes (basic-auth layer applied by the admin router)
pub fn admin_routes(service: Arc<PageService>) -> Router {
    Router::new()
        .route(
            "/api/admin/pages",
            post(handlers::create_page).get(handlers::list_pages),
        )
        .route(
            "/api/admin/pages/{id}",
            get(handlers::get_page)
                .patch(handlers::update_page)
                .delete(handlers::delete_page),
        )
        .with_state(service)
}
