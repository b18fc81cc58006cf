//! Shared layer - types, constants and helpers used across features

pub mod constants;
pub mod prompts;
pub mod test_helpers;
pub mod text;
pub mod types;
pub mod validation;
