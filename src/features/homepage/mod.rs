//! Home-page section content.
//!
//! Ten one-per-page section tables hang off a page; staff edit them through
//! per-section upserts and the public site receives the fully assembled
//! payload with stock fallbacks for anything missing.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | PUT | `/api/admin/pages/{page_id}/sections/{name}` | Basic | Upsert one section |
//! | DELETE | `/api/admin/pages/{page_id}/sections/{name}` | Basic | Remove one section |
//!
//! The assembled home payload is served through the pages feature's
//! `GET /api/pages/home`.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{HomeAssemblyService, HomepageService};
