//! Company profile: legal identity, contact details, the office map pin
//! and named contact persons.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/company` | No | Contact details + public team |
//! | GET/PUT | `/api/admin/company` | Basic | Manage the profile |
//! | GET/POST | `/api/admin/company/persons` | Basic | List / add persons |
//! | GET/PATCH/DELETE | `/api/admin/company/persons/{id}` | Basic | Manage one person |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::CompanyService;
