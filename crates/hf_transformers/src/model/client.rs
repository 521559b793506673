//! Model client for the Hugging Face Inference API

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use std::fmt;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{InferenceError, Operation, Result};
use crate::model::context::CallContext;
use crate::model::response::{parse_classification, parse_generation};
use crate::model::types::{
    ClassificationResult, GenerationOptions, GenerationResult, ModelInfo, Provider, Task,
};
use crate::model::Model;

/// Outbound request body
#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    parameters: Option<&'a GenerationOptions>,
}

/// A model served by the Hugging Face Inference API
#[derive(Clone)]
pub struct HfModel {
    model_name: String,
    api_token: Option<String>,
    base_url: String,
    timeout: Duration,
    task: Task,
    client: reqwest::Client,
}

impl HfModel {
    /// Create a client for `model_name` with settings from the environment
    /// (see [`Config::from_env`]). A missing token is allowed; requests are
    /// then sent without an `Authorization` header.
    pub fn new(model_name: impl Into<String>) -> Result<Self> {
        Self::from_config(model_name, &Config::from_env())
    }

    /// Create a client with an explicit API token, ignoring the environment
    pub fn with_token(model_name: impl Into<String>, api_token: impl Into<String>) -> Result<Self> {
        Self::from_config(model_name, &Config::new().with_token(api_token))
    }

    /// Create a client from resolved settings
    pub fn from_config(model_name: impl Into<String>, config: &Config) -> Result<Self> {
        let model_name = model_name.into();
        if model_name.trim().is_empty() {
            return Err(InferenceError::InvalidInput(
                "model name must not be empty".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .build()
            .map_err(InferenceError::ClientBuild)?;

        Ok(Self {
            model_name,
            api_token: config.token.clone().filter(|t| !t.is_empty()),
            base_url: config.base_url.clone(),
            timeout: config.timeout,
            task: Task::TextClassification,
            client,
        })
    }

    /// Point the client at another API base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the task reported by [`Model::describe`]
    pub fn with_task(mut self, task: Task) -> Self {
        self.task = task;
        self
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    pub fn api_token(&self) -> Option<&str> {
        self.api_token.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Full inference URL for this model
    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}",
            self.base_url.trim_end_matches('/'),
            self.model_name
        )
    }

    /// Send one POST with `payload` and return the raw success body
    async fn post(
        &self,
        ctx: &CallContext,
        operation: Operation,
        payload: &InferenceRequest<'_>,
    ) -> Result<String> {
        let url = self.endpoint();
        let body = serde_json::to_vec(payload)?;

        debug!(
            url = %url,
            model = %self.model_name,
            authenticated = self.api_token.is_some(),
            "sending {} request",
            operation
        );

        let mut request = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .timeout(self.timeout)
            .body(body);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        ctx.run(operation, async move {
            let response = request
                .send()
                .await
                .map_err(|source| InferenceError::Transport { operation, source })?;
            let status = response.status();
            let text = response
                .text()
                .await
                .map_err(|source| InferenceError::Transport { operation, source })?;

            if !status.is_success() {
                warn!(status = status.as_u16(), "{} request rejected", operation);
                return Err(InferenceError::RequestFailed {
                    operation,
                    status: status.as_u16(),
                    body: text,
                });
            }

            debug!(status = status.as_u16(), bytes = text.len(), "received response");
            Ok(text)
        })
        .await
    }
}

impl fmt::Debug for HfModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HfModel")
            .field("model_name", &self.model_name)
            .field("api_token", &self.api_token.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("task", &self.task)
            .finish()
    }
}

fn require_input(value: &str, what: &str) -> Result<()> {
    if value.is_empty() {
        return Err(InferenceError::InvalidInput(format!("{} must not be empty", what)));
    }
    Ok(())
}

#[async_trait]
impl Model for HfModel {
    async fn classify(&self, ctx: &CallContext, text: &str) -> Result<ClassificationResult> {
        require_input(text, "text")?;
        let payload = InferenceRequest {
            inputs: text,
            parameters: None,
        };
        let body = self.post(ctx, Operation::Classification, &payload).await?;
        parse_classification(&body)
    }

    async fn generate(
        &self,
        ctx: &CallContext,
        prompt: &str,
        options: Option<&GenerationOptions>,
    ) -> Result<GenerationResult> {
        require_input(prompt, "prompt")?;
        let payload = InferenceRequest {
            inputs: prompt,
            parameters: options.filter(|o| o.has_parameters()),
        };
        let body = self.post(ctx, Operation::Generation, &payload).await?;
        parse_generation(&body)
    }

    fn describe(&self) -> ModelInfo {
        ModelInfo {
            name: self.model_name.clone(),
            task: self.task,
            provider: Provider::HuggingFace,
        }
    }
}
