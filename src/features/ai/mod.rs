//! AI copywriting helper for the staff content editor, backed by
//! OpenRouter. Without an API key the endpoint answers with a
//! "not configured" outcome instead of calling out.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/admin/ai/generate` | Basic | Generate copy for a form field |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::{AiService, GenerationOutcome};
