pub mod topic_form;

pub use topic_form::{TopicForm, TOPIC_TEXT_MAX_CHARS};
