use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::ai::handlers;
use crate::features::ai::services::AiService;

/// Staff routes (basic-auth layer applied by the admin router)
pub fn admin_routes(service: Arc<AiService>) -> Router {
    Router::new()
        .route("/api/admin/ai/generate", post(handlers::generate))
        .with_state(service)
}
