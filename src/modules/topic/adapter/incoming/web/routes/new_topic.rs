use actix_web::{get, post, web, Responder};
use tracing::{error, info};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::shared::validation::FieldErrors;
use crate::topic::application::domain::TopicForm;
use crate::topic::application::ports::incoming::use_cases::CreateTopicCommand;
use crate::AppState;

use super::{NewTopicPage, TOPICS_PATH};

/// Blank topic form
#[utoipa::path(
    get,
    path = "/api/new-topic",
    tag = "topics",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Empty form", body = inline(SuccessResponse<NewTopicPage>)),
        (status = 303, description = "Not logged in; redirected to the login route", body = ErrorResponse),
    )
)]
#[get("/api/new-topic")]
pub async fn new_topic_form_handler(_user: AuthenticatedUser) -> impl Responder {
    ApiResponse::success(NewTopicPage {
        form: TopicForm::default(),
        errors: FieldErrors::new(),
    })
}

/// Create a topic
///
/// The caller becomes the owner; an owner supplied in the body is ignored.
/// Redirects to the topic list on success.
#[utoipa::path(
    post,
    path = "/api/new-topic",
    tag = "topics",
    security(("BearerAuth" = [])),
    request_body = TopicForm,
    responses(
        (status = 303, description = "Created; redirected to /api/topics"),
        (status = 200, description = "Invalid form shown again with field errors", body = NewTopicPage),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/new-topic")]
pub async fn new_topic_handler(
    user: AuthenticatedUser,
    form: web::Json<TopicForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let form = form.into_inner();

    let command = match CreateTopicCommand::new(user.user_id, &form) {
        Ok(command) => command,
        Err(errors) => return ApiResponse::invalid(NewTopicPage { form, errors }),
    };

    match data.topic.create.execute(command).await {
        Ok(topic) => {
            info!(topic_id = %topic.id, owner = %topic.owner, "Topic created");
            ApiResponse::see_other(TOPICS_PATH)
        }
        Err(e) => {
            error!(user_id = %user.user_id, error = %e, "Failed to create topic");
            ApiResponse::internal_error()
        }
    }
}
