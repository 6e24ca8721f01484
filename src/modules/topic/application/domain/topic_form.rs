use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::validation::{max_chars, required_text, FieldErrors};

/// Matches the `topics.text` column.
pub const TOPIC_TEXT_MAX_CHARS: usize = 200;

/// Submitted topic fields. There is no owner field: unknown
/// keys in the payload are dropped during deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TopicForm {
    #[schema(example = "Algebra")]
    #[serde(default)]
    pub text: String,
}

impl TopicForm {
    pub fn with_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Returns the cleaned text.
    pub fn validate(&self) -> Result<String, FieldErrors> {
        let mut errors = FieldErrors::new();

        let text = required_text(&mut errors, "text", &self.text);
        max_chars(&mut errors, "text", &text, TOPIC_TEXT_MAX_CHARS);

        errors.into_result(text)
    }
}
