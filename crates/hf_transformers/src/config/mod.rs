//! Configuration module for hf_transformers
//!
//! This module contains:
//! - `settings`: Client settings (token, timeout, endpoint) and environment lookup
//! - `models`: Registry of commonly used model aliases

mod models;
mod settings;

pub use models::{
    get_model_config, list_model_aliases, resolve_model_name, ModelConfig, POPULAR_MODELS,
};
pub use settings::{
    token_from_env, token_from_lookup, Config, DEFAULT_TIMEOUT, ENDPOINT_ENV_VAR,
    HUGGINGFACE_API_BASE, TIMEOUT_ENV_VAR, TOKEN_ENV_VARS,
};
