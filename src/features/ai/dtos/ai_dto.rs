use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request DTO for the copywriting helper. Field metadata drives both the
/// derived prompt and the response length; `custom_prompt` overrides the
/// derived prompt entirely.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentDto {
    /// Label of the field being filled (e.g. "Hero Description")
    #[validate(length(max = 200, message = "Field label must not exceed 200 characters"))]
    pub field_label: Option<String>,

    /// What the field's content should accomplish
    #[validate(length(max = 1000, message = "Help text must not exceed 1000 characters"))]
    pub help_text: Option<String>,

    /// Character limit of the target field
    #[validate(range(min = 1, message = "Max length must be positive"))]
    pub max_length: Option<i32>,

    /// "short_text" or "long_text"
    pub field_type: Option<String>,

    /// Free-form instruction; replaces the derived prompt when present
    #[validate(length(max = 5000, message = "Prompt must not exceed 5000 characters"))]
    pub custom_prompt: Option<String>,

    /// Neighbouring field values for context (e.g. the section heading)
    pub related_values: Option<HashMap<String, String>>,

    #[serde(default = "d_true")]
    pub use_brand_context: bool,
}

fn d_true() -> bool {
    true
}

/// Generated copy, present only on success
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedContentDto {
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brand_context_defaults_on() {
        let dto: GenerateContentDto =
            serde_json::from_str(r#"{"customPrompt": "Write a tagline"}"#).unwrap();
        assert!(dto.use_brand_context);
        assert!(dto.validate().is_ok());
    }
}
