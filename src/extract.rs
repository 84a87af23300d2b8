//! Reply text extraction from an upstream `generateContent` body.
//!
//! The upstream body is untrusted: any level of
//! `candidates[0].content.parts[0].text` may be missing or have the wrong
//! type. Extraction never fails; it degrades to one of three fixed messages.

use serde_json::{Map, Value};

pub const MISSING_TEXT: &str = "No valid response.";
pub const NO_CANDIDATE: &str = "No valid response from API.";
pub const MALFORMED: &str = "Error processing response.";

/// Outcome of walking the upstream response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// `candidates[0].content.parts[0].text` was present.
    Text(String),
    /// A first part exists (or `parts` is empty, null or absent) but has no `text`.
    MissingText,
    /// No candidate, or the first candidate has no `content`.
    NoCandidate,
    /// A value along the path had the wrong JSON type.
    Malformed(String),
}

impl Extraction {
    pub fn into_message(self) -> String {
        match self {
            Extraction::Text(text) => text,
            Extraction::MissingText => MISSING_TEXT.to_string(),
            Extraction::NoCandidate => NO_CANDIDATE.to_string(),
            Extraction::Malformed(_) => MALFORMED.to_string(),
        }
    }
}

pub fn extract(response: &Value) -> Extraction {
    walk(response).unwrap_or_else(Extraction::Malformed)
}

/// Like [`extract`], mapped to display text. Malformed bodies are logged.
pub fn extract_response_text(response: &Value) -> String {
    let extraction = extract(response);
    if let Extraction::Malformed(reason) = &extraction {
        tracing::warn!("Error extracting response: {}", reason);
    }
    extraction.into_message()
}

fn walk(response: &Value) -> Result<Extraction, String> {
    let Some(root) = response.as_object() else {
        return Ok(Extraction::NoCandidate);
    };

    let candidates = match root.get("candidates") {
        None => return Ok(Extraction::NoCandidate),
        Some(value) if is_falsy(value) => return Ok(Extraction::NoCandidate),
        Some(value) => expect_array(value, "candidates")?,
    };
    let Some(first_candidate) = candidates.first() else {
        return Ok(Extraction::NoCandidate);
    };

    let candidate = expect_object(first_candidate, "candidates[0]")?;
    let Some(content) = candidate.get("content") else {
        return Ok(Extraction::NoCandidate);
    };

    // Absent, null and empty `parts` all count as an empty sequence.
    let content = expect_object(content, "content")?;
    let parts = match content.get("parts") {
        None => return Ok(Extraction::MissingText),
        Some(value) if is_falsy(value) => return Ok(Extraction::MissingText),
        Some(value) => expect_array(value, "parts")?,
    };
    let Some(first_part) = parts.first() else {
        return Ok(Extraction::MissingText);
    };

    match expect_object(first_part, "parts[0]")?.get("text") {
        None => Ok(Extraction::MissingText),
        Some(Value::String(text)) => Ok(Extraction::Text(text.clone())),
        Some(other) if is_falsy(other) => Ok(Extraction::Text(String::new())),
        Some(other) => Err(format!("text is {}, expected a string", kind(other))),
    }
}

/// `null`, `false`, zero and empty strings/arrays/objects.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}

fn expect_object<'a>(value: &'a Value, at: &str) -> Result<&'a Map<String, Value>, String> {
    value
        .as_object()
        .ok_or_else(|| format!("{} is {}, expected an object", at, kind(value)))
}

fn expect_array<'a>(value: &'a Value, at: &str) -> Result<&'a Vec<Value>, String> {
    value
        .as_array()
        .ok_or_else(|| format!("{} is {}, expected an array", at, kind(value)))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
