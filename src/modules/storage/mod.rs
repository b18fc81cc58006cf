//! Storage module for the image library payloads
//!
//! Provides a MinIO/S3-compatible client for uploading and deleting public
//! marketing media and building the direct URLs the site serves.

mod minio_client;

pub use minio_client::MinIOClient;
