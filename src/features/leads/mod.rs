//! Lead capture: contact submissions, showing requests and purchase offers.
//!
//! Public forms carry a honeypot field; filled honeypots are acknowledged
//! but never persisted.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/contact/submissions` | No | Contact form |
//! | POST | `/api/homes/{slug}/showing-requests` | No | Request a showing |
//! | POST | `/api/homes/{slug}/offers` | No | Make an offer |
//! | GET | `/api/admin/leads/contact-submissions` | Basic | List submissions |
//! | PATCH | `/api/admin/leads/contact-submissions/{id}/status` | Basic | Triage |
//! | GET | `/api/admin/leads/showing-requests` | Basic | List requests |
//! | PATCH | `/api/admin/leads/showing-requests/{id}/status` | Basic | Triage |
//! | GET | `/api/admin/leads/offers` | Basic | List offers |
//! | PATCH | `/api/admin/leads/offers/{id}/status` | Basic | Triage |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::LeadService;
