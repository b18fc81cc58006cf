use std::collections::HashMap;

use minijinja::Value;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::config::AiConfig;
use crate::features::ai::dtos::GenerateContentDto;
use crate::shared::prompts::render_template;

const BRAND_CONTEXT_TEMPLATE: &str = "brand_context.jinja";
const FIELD_PROMPT_TEMPLATE: &str = "field_prompt.jinja";

const GENERIC_SYSTEM_MESSAGE: &str = "You are a professional content writer. Write compelling, \
     professional, and engaging content. Keep the content concise and impactful.";

/// Result of a generation attempt. The helper never fails its caller:
/// configuration, transport and API problems all land in `error`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOutcome {
    pub success: bool,
    pub content: Option<String>,
    pub error: Option<String>,
}

impl GenerationOutcome {
    fn ok(content: String) -> Self {
        Self {
            success: true,
            content: Some(content),
            error: None,
        }
    }

    fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            content: None,
            error: Some(error.into()),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f64,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    #[serde(default)]
    content: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: Option<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: Option<String>,
}

/// AI copywriting helper backed by OpenRouter's chat-completions API.
pub struct AiService {
    client: reqwest::Client,
    config: AiConfig,
}

impl AiService {
    pub fn new(config: AiConfig) -> Result<Self, String> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| format!("Failed to build HTTP client: {}", e))?;

        Ok(Self { client, config })
    }

    /// Generate copy for a single admin form field. The prompt is the
    /// caller's custom instruction when given, otherwise derived from the
    /// field metadata; `max_tokens` follows the field's max length.
    pub async fn generate_field(&self, dto: GenerateContentDto) -> GenerationOutcome {
        let prompt = match &dto.custom_prompt {
            Some(custom) if !custom.trim().is_empty() => custom.clone(),
            _ => build_field_prompt(&dto),
        };

        let max_tokens = match dto.max_length {
            Some(max_length) if max_length > 0 => (max_length as u32 / 3).clamp(100, 1000),
            _ => 500,
        };

        let user_message = match render_user_message(&prompt, &dto) {
            Ok(message) => message,
            Err(e) => {
                warn!("Failed to render field prompt template: {}", e);
                format!("Task: {}", prompt)
            }
        };

        self.generate(&user_message, max_tokens, dto.use_brand_context)
            .await
    }

    /// Low-level generation call. Missing API key short-circuits without a
    /// network request.
    pub async fn generate(
        &self,
        user_message: &str,
        max_tokens: u32,
        use_brand_context: bool,
    ) -> GenerationOutcome {
        let Some(api_key) = self.config.api_key.as_deref() else {
            return GenerationOutcome::failed(
                "OpenRouter API key not configured. Set OPENROUTER_API_KEY in the environment.",
            );
        };

        let system_message = if use_brand_context {
            render_template(BRAND_CONTEXT_TEMPLATE, &HashMap::new()).unwrap_or_else(|e| {
                warn!("Failed to render brand context template: {}", e);
                GENERIC_SYSTEM_MESSAGE.to_string()
            })
        } else {
            GENERIC_SYSTEM_MESSAGE.to_string()
        };

        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_message,
                },
                ChatMessage {
                    role: "user",
                    content: user_message.to_string(),
                },
            ],
            max_tokens,
            temperature: 0.7,
        };

        let url = format!("{}/chat/completions", self.config.base_url);
        debug!("Calling OpenRouter: model={}", self.config.model);

        let response = match self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) if e.is_timeout() => {
                return GenerationOutcome::failed("Request timed out. Please try again.");
            }
            Err(e) => {
                warn!("OpenRouter request failed: {}", e);
                return GenerationOutcome::failed(format!("Request failed: {}", e));
            }
        };

        let status = response.status();
        if !status.is_success() {
            let fallback = format!("API Error: {}", status.as_u16());
            let message = match response.json::<ApiErrorBody>().await {
                Ok(body) => body
                    .error
                    .and_then(|detail| detail.message)
                    .unwrap_or(fallback),
                Err(_) => fallback,
            };
            return GenerationOutcome::failed(message);
        }

        match response.json::<ChatResponse>().await {
            Ok(body) => {
                let content = body
                    .choices
                    .into_iter()
                    .next()
                    .map(|choice| choice.message.content)
                    .unwrap_or_default();
                GenerationOutcome::ok(content.trim().to_string())
            }
            Err(e) => {
                warn!("OpenRouter returned a malformed body: {}", e);
                GenerationOutcome::failed(format!("Unexpected error: {}", e))
            }
        }
    }
}

/// Derive a prompt from the field metadata when no custom prompt is given.
fn build_field_prompt(dto: &GenerateContentDto) -> String {
    let mut parts = Vec::new();

    if let Some(label) = dto.field_label.as_deref().filter(|s| !s.is_empty()) {
        parts.push(format!("Generate content for the '{}' field.", label));
    }
    if let Some(help) = dto.help_text.as_deref().filter(|s| !s.is_empty()) {
        parts.push(format!("The content should: {}", help));
    }
    if let Some(max_length) = dto.max_length.filter(|n| *n > 0) {
        parts.push(format!("Keep the content under {} characters.", max_length));
    }
    match dto.field_type.as_deref() {
        Some("short_text") => parts.push("Be concise - this is a short text field.".to_string()),
        Some("long_text") => {
            parts.push("You can write a longer, more detailed response.".to_string())
        }
        _ => {}
    }
    parts.push("\nGenerate appropriate content now.".to_string());

    parts.join("\n")
}

fn render_user_message(
    prompt: &str,
    dto: &GenerateContentDto,
) -> Result<String, crate::shared::prompts::TemplateError> {
    let mut ctx = HashMap::new();
    ctx.insert("prompt", Value::from(prompt));
    ctx.insert(
        "field_label",
        Value::from(dto.field_label.clone().unwrap_or_default()),
    );
    ctx.insert(
        "help_text",
        Value::from(dto.help_text.clone().unwrap_or_default()),
    );
    ctx.insert("max_length", Value::from(dto.max_length.unwrap_or(0)));
    ctx.insert(
        "field_type",
        Value::from(dto.field_type.clone().unwrap_or_default()),
    );
    ctx.insert(
        "related_values",
        Value::from_serialize(dto.related_values.clone().unwrap_or_default()),
    );

    render_template(FIELD_PROMPT_TEMPLATE, &ctx)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(max_length: Option<i32>) -> GenerateContentDto {
        GenerateContentDto {
            field_label: Some("Hero Description".to_string()),
            help_text: Some("A compelling description".to_string()),
            max_length,
            field_type: Some("long_text".to_string()),
            custom_prompt: None,
            related_values: None,
            use_brand_context: true,
        }
    }

    #[test]
    fn test_max_tokens_follows_max_length() {
        // mirrors the clamp in generate_field
        let tokens = |max_length: Option<i32>| match max_length {
            Some(n) if n > 0 => (n as u32 / 3).clamp(100, 1000),
            _ => 500,
        };

        assert_eq!(tokens(Some(200)), 100);
        assert_eq!(tokens(Some(900)), 300);
        assert_eq!(tokens(Some(9000)), 1000);
        assert_eq!(tokens(None), 500);
        assert_eq!(tokens(Some(0)), 500);
    }

    #[test]
    fn test_build_field_prompt_uses_metadata() {
        let prompt = build_field_prompt(&dto(Some(200)));
        assert!(prompt.contains("'Hero Description' field"));
        assert!(prompt.contains("The content should: A compelling description"));
        assert!(prompt.contains("under 200 characters"));
        assert!(prompt.contains("longer, more detailed"));
    }

    #[tokio::test]
    async fn test_missing_api_key_short_circuits() {
        let service = AiService::new(AiConfig {
            api_key: None,
            model: "z-ai/glm-4.5-air:free".to_string(),
            base_url: "https://openrouter.ai/api/v1".to_string(),
            timeout: std::time::Duration::from_secs(30),
        })
        .unwrap();

        let outcome = service.generate_field(dto(None)).await;
        assert!(!outcome.success);
        assert!(outcome.content.is_none());
        assert!(outcome.error.unwrap().contains("not configured"));
    }
}
