//! Parsing of inference API response bodies
//!
//! The API answers with a JSON array whose first element carries the result.
//! Only two things are validated: the body is JSON and index 0 exists. Field
//! reads coerce scalars (numbers and bools) and default independently when a
//! key is missing, null, or holds an array or object.

use serde_json::Value;

use crate::error::{InferenceError, Operation, Result};
use crate::model::types::{ClassificationResult, GenerationResult};

/// Parse `body` and return the element at array index 0
pub fn first_element(body: &str, operation: Operation) -> Result<Value> {
    let value: Value =
        serde_json::from_str(body).map_err(|_| InferenceError::MalformedResponse {
            operation,
            body: body.to_string(),
        })?;

    match value {
        Value::Array(mut items) if !items.is_empty() => Ok(items.swap_remove(0)),
        _ => Err(InferenceError::EmptyResult { operation }),
    }
}

/// Read a field as text; numbers and bools render as their JSON text
pub fn string_field(element: &Value, key: &str) -> String {
    match element.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Read a field as a number; numeric strings parse and bools map to 1 / 0
pub fn float_field(element: &Value, key: &str) -> Option<f64> {
    match element.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

pub fn parse_classification(body: &str) -> Result<ClassificationResult> {
    let element = first_element(body, Operation::Classification)?;
    Ok(ClassificationResult {
        label: string_field(&element, "label"),
        score: float_field(&element, "score").unwrap_or(0.0),
    })
}

pub fn parse_generation(body: &str) -> Result<GenerationResult> {
    let element = first_element(body, Operation::Generation)?;
    Ok(GenerationResult {
        generated_text: string_field(&element, "generated_text"),
        score: float_field(&element, "score"),
    })
}
