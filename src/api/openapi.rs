use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::api::schemas::{ErrorDetail, ErrorResponse, FieldErrorsResponse};
use crate::auth::adapter::incoming::web::routes::{
    LoginRequestDto, RegisterUserRequest, SessionResponse,
};
use crate::entry::adapter::incoming::web::routes::{
    DeleteEntryPage, EditEntryPage, EntryResponse, NewEntryPage,
};
use crate::entry::application::domain::EntryForm;
use crate::shared::validation::FieldErrors;
use crate::topic::adapter::incoming::web::routes::{
    DeleteTopicPage, EditTopicPage, IndexPage, NewTopicPage, TopicPage, TopicResponse, TopicsPage,
};
use crate::topic::application::domain::TopicForm;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "MathBlog Q&A API",
        version = "1.0.0",
        description = "Topics and entries with owner-only editing",
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user_handler,

        // Topic endpoints
        crate::topic::adapter::incoming::web::routes::index_handler,
        crate::topic::adapter::incoming::web::routes::list_topics_handler,
        crate::topic::adapter::incoming::web::routes::list_owned_topics_handler,
        crate::topic::adapter::incoming::web::routes::view_topic_handler,
        crate::topic::adapter::incoming::web::routes::new_topic_form_handler,
        crate::topic::adapter::incoming::web::routes::new_topic_handler,
        crate::topic::adapter::incoming::web::routes::edit_topic_form_handler,
        crate::topic::adapter::incoming::web::routes::edit_topic_handler,
        crate::topic::adapter::incoming::web::routes::confirm_delete_topic_handler,
        crate::topic::adapter::incoming::web::routes::delete_topic_handler,

        // Entry endpoints
        crate::entry::adapter::incoming::web::routes::new_entry_form_handler,
        crate::entry::adapter::incoming::web::routes::new_entry_handler,
        crate::entry::adapter::incoming::web::routes::edit_entry_form_handler,
        crate::entry::adapter::incoming::web::routes::edit_entry_handler,
        crate::entry::adapter::incoming::web::routes::confirm_delete_entry_handler,
        crate::entry::adapter::incoming::web::routes::delete_entry_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,
            FieldErrors,
            FieldErrorsResponse,

            // Auth DTOs
            RegisterUserRequest,
            LoginRequestDto,
            SessionResponse,

            // Topic DTOs
            TopicForm,
            TopicResponse,
            IndexPage,
            TopicsPage,
            TopicPage,
            NewTopicPage,
            EditTopicPage,
            DeleteTopicPage,

            // Entry DTOs
            EntryForm,
            EntryResponse,
            NewEntryPage,
            EditEntryPage,
            DeleteEntryPage,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration and login"),
        (name = "topics", description = "Topics; editing and deleting are owner-only"),
        (name = "entries", description = "Entries under a topic; editing and deleting are owner-only"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token from /api/auth/login or /api/auth/register"))
                        .build(),
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for expected in [
            "/",
            "/api/auth/register",
            "/api/auth/login",
            "/api/topics",
            "/api/my-topics",
            "/api/topics/{topic_id}",
            "/api/new-topic",
            "/api/edit-topic/{topic_id}",
            "/api/delete-topic/{topic_id}",
            "/api/new-entry/{topic_id}",
            "/api/edit-entry/{entry_id}",
            "/api/delete-entry/{entry_id}",
        ] {
            assert!(paths.contains(&expected), "missing {expected}");
        }
    }

    #[test]
    fn bearer_scheme_is_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.unwrap();
        assert!(components.security_schemes.contains_key("BearerAuth"));
    }
}
