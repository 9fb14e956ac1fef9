//! HTTP client for the insight model.

use std::time::Duration;

use tracing::debug;

use nestbox_core::config::insight::InsightConfig;
use nestbox_core::error::{AppError, ErrorKind};
use nestbox_core::result::AppResult;

use crate::types::{ChatMessage, ChatRequest, ChatResponse, Recommendation};

const SYSTEM_PROMPT: &str = "You are an AI assistant that analyzes file metadata given";

/// Client for the OpenAI-compatible chat-completions endpoint.
///
/// One request per call, no retries; the configured timeout is the only
/// guard against a hanging collaborator.
#[derive(Debug, Clone)]
pub struct InsightClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl InsightClient {
    /// Creates a new client from insight configuration.
    pub fn new(config: &InsightConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    "Failed to build insight HTTP client",
                    e,
                )
            })?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }

    /// Free-text organization suggestions for the given metadata blob.
    pub async fn organization_suggestions(&self, metadata: &serde_json::Value) -> AppResult<String> {
        let prompt = format!(
            "Analyze the following metadata and provide suggestions for better file \
             organization. Do not provide code of any sort and do not repeat the metadata, \
             just the suggestions: {metadata}"
        );
        self.complete(&prompt).await
    }

    /// Ask which single file should be opened next.
    ///
    /// The model answers in prose with an embedded JSON pair (name and
    /// url); the fragment is parsed best-effort.
    pub async fn recommend_file(
        &self,
        metadata: &serde_json::Value,
    ) -> AppResult<Option<Recommendation>> {
        let prompt = format!(
            "Analyze the following metadata and reply with only the file that should be \
             opened at the current time, as a JSON object with exactly two pairs: \
             \"name\" (full name with extension) and \"url\". If no metadata is provided, \
             reply with \"NO files to analyse\": {metadata}"
        );
        let content = self.complete(&prompt).await?;
        Ok(Recommendation::extract(&content))
    }

    /// A short friendly confirmation after an organize run.
    pub async fn organize_confirmation(&self) -> AppResult<String> {
        self.complete(
            "Reply only with \"files processed\" followed by a short happy message, \
             and nothing else.",
        )
        .await
    }

    /// Send one user prompt and return the first choice's content.
    async fn complete(&self, prompt: &str) -> AppResult<String> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompt.to_string(),
                },
            ],
            temperature: 0.5,
            max_completion_tokens: 1024,
        };

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::ExternalService, "Insight request failed", e)
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::external_service(format!(
                "Insight model returned status {status}"
            )));
        }

        let body: ChatResponse = response.json().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::ExternalService,
                "Failed to decode insight response",
                e,
            )
        })?;

        let content = body
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| AppError::external_service("Insight response had no choices"))?;

        debug!(chars = content.len(), "Insight completion received");
        Ok(content)
    }
}
