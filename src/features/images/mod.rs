//! The shared image library: uploads to object storage, URL-only entries,
//! best-effort metadata extraction and the usage reverse index that tells
//! editors where an image is referenced before they delete it.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/admin/images/upload` | Basic | Upload a binary image |
//! | POST | `/api/admin/images` | Basic | Register an external URL |
//! | GET | `/api/admin/images` | Basic | List with usage counts |
//! | GET | `/api/admin/images/{id}` | Basic | Detail with usage listing |
//! | PATCH | `/api/admin/images/{id}` | Basic | Update metadata |
//! | DELETE | `/api/admin/images/{id}` | Basic | Delete; owner references go null |

pub mod dtos;
pub mod handlers;
pub mod metadata;
pub mod models;
pub mod registry;
pub mod routes;
pub mod services;
pub mod tracker;

pub use registry::{default_registry, OwnerKind, UsageRegistry};
pub use services::ImageService;
pub use tracker::UsageTracker;
