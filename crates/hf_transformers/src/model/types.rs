//! Request and result types shared by all model back-ends

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// NLP task a model performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Task {
    TextGeneration,
    TextClassification,
    TokenClassification,
    QuestionAnswering,
    FillMask,
    Summarization,
    Translation,
}

impl Task {
    pub const ALL: [Task; 7] = [
        Task::TextGeneration,
        Task::TextClassification,
        Task::TokenClassification,
        Task::QuestionAnswering,
        Task::FillMask,
        Task::Summarization,
        Task::Translation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Task::TextGeneration => "text-generation",
            Task::TextClassification => "text-classification",
            Task::TokenClassification => "token-classification",
            Task::QuestionAnswering => "question-answering",
            Task::FillMask => "fill-mask",
            Task::Summarization => "summarization",
            Task::Translation => "translation",
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Task {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Task::ALL
            .iter()
            .copied()
            .find(|task| task.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown task: {}", s))
    }
}

/// Service that runs the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum Provider {
    HuggingFace,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::HuggingFace => "huggingface",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of text classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub label: String,
    pub score: f64,
}

/// Result of text generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub generated_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

/// Metadata describing a model client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub name: String,
    pub task: Task,
    pub provider: Provider,
}

/// Sampling parameters for text generation.
///
/// Only fields above their zero value are sent to the API; a field left at
/// zero (or `false`) is omitted from the request entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationOptions {
    #[serde(skip_serializing_if = "is_zero")]
    pub max_length: u32,
    #[serde(skip_serializing_if = "is_not_positive")]
    pub temperature: f64,
    #[serde(skip_serializing_if = "is_not_positive")]
    pub top_p: f64,
    #[serde(skip_serializing_if = "is_zero")]
    pub top_k: u32,
    #[serde(skip_serializing_if = "is_false")]
    pub do_sample: bool,
    #[serde(skip_serializing_if = "is_zero")]
    pub num_return_sequences: u32,
}

fn is_zero(value: &u32) -> bool {
    *value == 0
}

// NaN counts as not positive
fn is_not_positive(value: &f64) -> bool {
    value.partial_cmp(&0.0) != Some(Ordering::Greater)
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl GenerationOptions {
    /// Create empty options (no parameters sent)
    pub fn new() -> Self {
        Self::default()
    }

    /// Sampling preset used by the quick generation entry point
    pub fn default_sampling() -> Self {
        Self::new()
            .with_max_length(50)
            .with_temperature(0.7)
            .with_do_sample(true)
    }

    pub fn with_max_length(mut self, max_length: u32) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_top_p(mut self, top_p: f64) -> Self {
        self.top_p = top_p;
        self
    }

    pub fn with_top_k(mut self, top_k: u32) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn with_do_sample(mut self, do_sample: bool) -> Self {
        self.do_sample = do_sample;
        self
    }

    pub fn with_num_return_sequences(mut self, n: u32) -> Self {
        self.num_return_sequences = n;
        self
    }

    /// Whether any field would be sent on the wire
    pub fn has_parameters(&self) -> bool {
        !is_zero(&self.max_length)
            || !is_not_positive(&self.temperature)
            || !is_not_positive(&self.top_p)
            || !is_zero(&self.top_k)
            || self.do_sample
            || !is_zero(&self.num_return_sequences)
    }
}
