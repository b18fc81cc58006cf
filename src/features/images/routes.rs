use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::features::images::handlers;
use crate::features::images::services::ImageService;
use crate::shared::constants::MAX_IMAGE_SIZE;

/// Staff routes (basic-auth layer applied by the admin router)
pub fn admin_routes(service: Arc<ImageService>) -> Router {
    Router::new()
        .route(
            "/api/admin/images/upload",
            post(handlers::upload_image).layer(DefaultBodyLimit::max(MAX_IMAGE_SIZE + 1024 * 1024)),
        )
        .route(
            "/api/admin/images",
            get(handlers::list_images).post(handlers::create_image_from_url),
        )
        .route(
            "/api/admin/images/{id}",
            get(handlers::get_image)
                .patch(handlers::update_image)
                .delete(handlers::delete_image),
        )
        .with_state(service)
}
