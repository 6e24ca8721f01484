use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::validation::{required_text, FieldErrors};

/// Submitted entry fields. The parent topic comes from the route and the
/// owner from the caller, never from the payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EntryForm {
    #[schema(example = "Start from the definition of a group.")]
    #[serde(default)]
    pub text: String,
}

impl EntryForm {
    pub fn with_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn validate(&self) -> Result<String, FieldErrors> {
        let mut errors = FieldErrors::new();
        let text = required_text(&mut errors, "text", &self.text);
        errors.into_result(text)
    }
}
