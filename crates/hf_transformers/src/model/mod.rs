//! Model interface and its back-ends
//!
//! This module provides:
//! - `client`: Hugging Face Inference API client
//! - `context`: Per-call cancellation and deadlines
//! - `response`: Response body parsing
//! - `types`: Request and result types

mod client;
mod context;
pub mod response;
mod types;

use async_trait::async_trait;

use crate::error::Result;

pub use client::HfModel;
pub use context::CallContext;
pub use types::{
    ClassificationResult, GenerationOptions, GenerationResult, ModelInfo, Provider, Task,
};

/// Capabilities shared by every model back-end
#[async_trait]
pub trait Model: Send + Sync {
    /// Classify `text`, returning the best-matching label and its score
    async fn classify(&self, ctx: &CallContext, text: &str) -> Result<ClassificationResult>;

    /// Continue `prompt`; `None` options send no generation parameters
    async fn generate(
        &self,
        ctx: &CallContext,
        prompt: &str,
        options: Option<&GenerationOptions>,
    ) -> Result<GenerationResult>;

    /// Describe the model without performing I/O
    fn describe(&self) -> ModelInfo;
}
