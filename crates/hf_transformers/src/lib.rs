//! hf_transformers: transformer models over the Hugging Face Inference API
//!
//! This library provides:
//! - A `Model` interface for text classification and text generation
//! - `HfModel`, a client for the hosted Inference API
//! - Cooperative cancellation and deadlines through `CallContext`
//! - A registry of commonly used model aliases
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use hf_transformers::{CallContext, GenerationOptions, HfModel, Model};
//!
//! #[tokio::main]
//! async fn main() -> hf_transformers::Result<()> {
//!     let ctx = CallContext::with_timeout(Duration::from_secs(30));
//!
//!     let model = HfModel::new("distilbert-base-uncased-finetuned-sst-2-english")?;
//!     let result = model.classify(&ctx, "Rust is amazing for backend services!").await?;
//!     println!("Label: {}, Score: {:.4}", result.label, result.score);
//!
//!     let generator = HfModel::new("gpt2")?;
//!     let options = GenerationOptions::new().with_max_length(100).with_temperature(0.7);
//!     let generated = generator.generate(&ctx, "The future of AI is", Some(&options)).await?;
//!     println!("{}", generated.generated_text);
//!     Ok(())
//! }
//! ```

// Core modules
pub mod error;

// Configuration module
pub mod config;

// Model interface and back-ends
pub mod model;

pub use error::{ErrorKind, InferenceError, Operation, Result};

pub use config::{
    get_model_config, list_model_aliases, resolve_model_name, token_from_env, Config, ModelConfig,
    DEFAULT_TIMEOUT, HUGGINGFACE_API_BASE, POPULAR_MODELS, TOKEN_ENV_VARS,
};

pub use model::{
    CallContext, ClassificationResult, GenerationOptions, GenerationResult, HfModel, Model,
    ModelInfo, Provider, Task,
};

/// Model used by [`quick_classify`]
pub const DEFAULT_CLASSIFICATION_MODEL: &str = "distilbert-base-uncased-finetuned-sst-2-english";

/// Model used by [`quick_generate`]
pub const DEFAULT_GENERATION_MODEL: &str = "gpt2";

/// Classify `text` with [`DEFAULT_CLASSIFICATION_MODEL`]
pub async fn quick_classify(ctx: &CallContext, text: &str) -> Result<ClassificationResult> {
    let model = HfModel::new(DEFAULT_CLASSIFICATION_MODEL)?;
    model.classify(ctx, text).await
}

/// Generate from `prompt` with [`DEFAULT_GENERATION_MODEL`] and
/// [`GenerationOptions::default_sampling`]
pub async fn quick_generate(ctx: &CallContext, prompt: &str) -> Result<GenerationResult> {
    let model = HfModel::new(DEFAULT_GENERATION_MODEL)?.with_task(Task::TextGeneration);
    model
        .generate(ctx, prompt, Some(&GenerationOptions::default_sampling()))
        .await
}
