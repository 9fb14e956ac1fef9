//! Insight (LLM collaborator) configuration.

use serde::{Deserialize, Serialize};

/// Settings for the external insight model used for organization
/// suggestions and advisory messages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightConfig {
    /// Base URL of the OpenAI-compatible chat-completions API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// API key sent as a bearer token.
    #[serde(default)]
    pub api_key: String,
    /// Model identifier.
    #[serde(default = "default_model")]
    pub model: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub request_timeout_seconds: u64,
}

fn default_base_url() -> String {
    "https://api.groq.com/openai/v1".to_string()
}

fn default_model() -> String {
    "llama-3.3-70b-versatile".to_string()
}

fn default_timeout() -> u64 {
    30
}
