use actix_web::{get, post, web, HttpResponse, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::entry::application::domain::EntryForm;
use crate::entry::application::ports::incoming::use_cases::{CreateEntryCommand, CreateEntryError};
use crate::shared::api::ApiResponse;
use crate::shared::validation::FieldErrors;
use crate::topic::adapter::incoming::web::routes::topic_path;
use crate::topic::application::ports::incoming::use_cases::ViewTopicError;
use crate::AppState;

use super::{EntryResponse, NewEntryPage};

/// Entry form for a topic, with the entries already posted
#[utoipa::path(
    get,
    path = "/api/new-entry/{topic_id}",
    tag = "entries",
    security(("BearerAuth" = [])),
    params(("topic_id" = Uuid, Path, description = "Topic ID")),
    responses(
        (status = 200, description = "Empty form, topic and its entries", body = inline(SuccessResponse<NewEntryPage>)),
        (status = 404, description = "Topic not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/new-entry/{topic_id}")]
pub async fn new_entry_form_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let topic_id = path.into_inner();
    render_page(&data, user.user_id, topic_id, EntryForm::default(), FieldErrors::new()).await
}

/// Add an entry to any topic
///
/// The caller becomes the entry's owner. Redirects to the topic on success.
#[utoipa::path(
    post,
    path = "/api/new-entry/{topic_id}",
    tag = "entries",
    security(("BearerAuth" = [])),
    params(("topic_id" = Uuid, Path, description = "Topic ID")),
    request_body = EntryForm,
    responses(
        (status = 303, description = "Created; redirected to /api/topics/{topic_id}"),
        (status = 200, description = "Invalid form shown again with field errors", body = NewEntryPage),
        (status = 404, description = "Topic not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/new-entry/{topic_id}")]
pub async fn new_entry_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    form: web::Json<EntryForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let topic_id = path.into_inner();
    let form = form.into_inner();

    let command = match CreateEntryCommand::new(user.user_id, topic_id, &form) {
        Ok(command) => command,
        Err(errors) => return render_page(&data, user.user_id, topic_id, form, errors).await,
    };

    match data.entry.create.execute(command).await {
        Ok(entry) => {
            info!(entry_id = %entry.id, %topic_id, owner = %entry.owner, "Entry created");
            ApiResponse::see_other(&topic_path(topic_id))
        }
        Err(CreateEntryError::TopicNotFound) => ApiResponse::not_found(),
        Err(e) => {
            error!(%topic_id, error = %e, "Failed to create entry");
            ApiResponse::internal_error()
        }
    }
}

/// Blank forms render with a success envelope, rejected ones with
/// `VALIDATION_FAILED`.
async fn render_page(
    data: &AppState,
    requester: UserId,
    topic_id: Uuid,
    form: EntryForm,
    errors: FieldErrors,
) -> HttpResponse {
    let detail = match data.topic.view.execute(requester, topic_id).await {
        Ok(detail) => detail,
        Err(ViewTopicError::NotFound) => return ApiResponse::not_found(),
        Err(e) => {
            error!(%topic_id, error = %e, "Failed to load topic for new entry");
            return ApiResponse::internal_error();
        }
    };

    let rejected = !errors.is_empty();
    let page = NewEntryPage {
        topic: detail.topic.into(),
        entries: detail.entries.into_iter().map(EntryResponse::from).collect(),
        form,
        errors,
    };

    if rejected {
        ApiResponse::invalid(page)
    } else {
        ApiResponse::success(page)
    }
}
