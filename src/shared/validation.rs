use serde::Serialize;
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Validation messages keyed by form field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// `Ok(value)` when nothing was recorded.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

pub const REQUIRED: &str = "This field is required.";

/// Required-field check; surrounding whitespace does not count as input.
pub fn required_text(errors: &mut FieldErrors, field: &str, raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        errors.add(field, REQUIRED);
    }
    trimmed.to_string()
}

pub fn max_chars(errors: &mut FieldErrors, field: &str, value: &str, limit: usize) {
    let count = value.chars().count();
    if count > limit {
        errors.add(
            field,
            format!("Ensure this value has at most {limit} characters (it has {count})."),
        );
    }
}
