//! Registry of commonly used models

use phf::phf_map;

use crate::model::Provider;

/// A named model and the provider that serves it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelConfig {
    pub name: &'static str,
    pub provider: Provider,
}

/// Alias -> model configuration
pub static POPULAR_MODELS: phf::Map<&'static str, ModelConfig> = phf_map! {
    "sentiment" => ModelConfig {
        name: "distilbert-base-uncased-finetuned-sst-2-english",
        provider: Provider::HuggingFace,
    },
    "gpt2" => ModelConfig {
        name: "gpt2",
        provider: Provider::HuggingFace,
    },
    "gpt2-medium" => ModelConfig {
        name: "gpt2-medium",
        provider: Provider::HuggingFace,
    },
    "bert-base" => ModelConfig {
        name: "bert-base-uncased",
        provider: Provider::HuggingFace,
    },
    "distilbert" => ModelConfig {
        name: "distilbert-base-uncased",
        provider: Provider::HuggingFace,
    },
};

/// Look up a registry entry by alias
pub fn get_model_config(alias: &str) -> Option<&'static ModelConfig> {
    POPULAR_MODELS.get(alias)
}

/// Resolve an alias to its full model name; other names pass through unchanged
pub fn resolve_model_name(name: &str) -> &str {
    match POPULAR_MODELS.get(name) {
        Some(config) => config.name,
        None => name,
    }
}

/// List all registered aliases, sorted
pub fn list_model_aliases() -> Vec<&'static str> {
    let mut aliases: Vec<&'static str> = POPULAR_MODELS.keys().copied().collect();
    aliases.sort_unstable();
    aliases
}
