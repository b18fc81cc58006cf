//! Homes for sale: listings, galleries, detail sheets and the
//! available-homes page blocks.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/homes` | No | List homes (status/featured filters) |
//! | GET | `/api/homes/{slug}` | No | Home detail with gallery and details |
//! | POST | `/api/admin/homes` | Basic | Create home |
//! | GET | `/api/admin/homes` | Basic | List all homes |
//! | GET/PATCH/DELETE | `/api/admin/homes/{id}` | Basic | Manage one home |
//! | PUT | `/api/admin/homes/{id}/gallery` | Basic | Replace gallery |
//! | PUT | `/api/admin/homes/{id}/details` | Basic | Replace detail rows |
//! | PUT | `/api/admin/pages/{page_id}/listings/hero` | Basic | Intro block |
//! | PUT | `/api/admin/pages/{page_id}/listings/cta` | Basic | Call-to-action |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ListingService;
