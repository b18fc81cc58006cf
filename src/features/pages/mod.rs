//! The page tree: hierarchical marketing pages with scheduled publishing,
//! kind-specific payloads and the public path resolver.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/pages/menu` | No | Navigation menu of live pages |
//! | GET | `/api/pages/home` | No | Assembled home page |
//! | GET | `/api/pages/{*path}` | No | Resolve a slug chain |
//! | POST | `/api/admin/pages` | Basic | Create page |
//! | GET | `/api/admin/pages` | Basic | List the tree |
//! | GET/PATCH/DELETE | `/api/admin/pages/{id}` | Basic | Manage one page |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use routes::PublicPageState;
pub use services::PageService;
