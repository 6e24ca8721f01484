use actix_web::{get, post, web, HttpResponse, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::shared::validation::FieldErrors;
use crate::topic::application::domain::TopicForm;
use crate::topic::application::ports::incoming::use_cases::{
    EditTopicCommand, EditTopicError, GetOwnedTopicError,
};
use crate::AppState;

use super::{EditTopicPage, TOPICS_PATH};

/// Edit form for one of the caller's topics
#[utoipa::path(
    get,
    path = "/api/edit-topic/{topic_id}",
    tag = "topics",
    security(("BearerAuth" = [])),
    params(("topic_id" = Uuid, Path, description = "Topic ID")),
    responses(
        (status = 200, description = "Form filled with the current text", body = inline(SuccessResponse<EditTopicPage>)),
        (status = 404, description = "Topic missing or owned by someone else", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/edit-topic/{topic_id}")]
pub async fn edit_topic_form_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let topic_id = path.into_inner();

    match data.topic.get_owned.execute(user.user_id, topic_id).await {
        Ok(topic) => ApiResponse::success(EditTopicPage {
            form: TopicForm::with_text(topic.text.clone()),
            topic: topic.into(),
            errors: FieldErrors::new(),
        }),
        Err(e) => map_get_owned_error(topic_id, e),
    }
}

/// Replace the text of one of the caller's topics
///
/// Redirects to the topic list on success.
#[utoipa::path(
    post,
    path = "/api/edit-topic/{topic_id}",
    tag = "topics",
    security(("BearerAuth" = [])),
    params(("topic_id" = Uuid, Path, description = "Topic ID")),
    request_body = TopicForm,
    responses(
        (status = 303, description = "Saved; redirected to /api/topics"),
        (status = 200, description = "Invalid form shown again with field errors", body = EditTopicPage),
        (status = 404, description = "Topic missing or owned by someone else", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/edit-topic/{topic_id}")]
pub async fn edit_topic_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    form: web::Json<TopicForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let topic_id = path.into_inner();
    let form = form.into_inner();

    let command = match EditTopicCommand::new(user.user_id, topic_id, &form) {
        Ok(command) => command,
        Err(errors) => {
            // The page still needs the record, and a foreign topic stays hidden.
            return match data.topic.get_owned.execute(user.user_id, topic_id).await {
                Ok(topic) => ApiResponse::invalid(EditTopicPage {
                    topic: topic.into(),
                    form,
                    errors,
                }),
                Err(e) => map_get_owned_error(topic_id, e),
            };
        }
    };

    match data.topic.edit.execute(command).await {
        Ok(topic) => {
            info!(topic_id = %topic.id, "Topic edited");
            ApiResponse::see_other(TOPICS_PATH)
        }
        Err(EditTopicError::NotFound) => ApiResponse::not_found(),
        Err(e) => {
            error!(%topic_id, error = %e, "Failed to edit topic");
            ApiResponse::internal_error()
        }
    }
}

fn map_get_owned_error(topic_id: Uuid, err: GetOwnedTopicError) -> HttpResponse {
    match err {
        GetOwnedTopicError::NotFound => ApiResponse::not_found(),
        GetOwnedTopicError::QueryFailed(msg) => {
            error!(%topic_id, error = %msg, "Failed to load topic for editing");
            ApiResponse::internal_error()
        }
    }
}
