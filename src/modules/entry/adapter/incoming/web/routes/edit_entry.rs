use actix_web::{get, post, web, HttpResponse, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::entry::application::domain::EntryForm;
use crate::entry::application::ports::incoming::use_cases::{
    EditEntryCommand, EditEntryError, GetOwnedEntryError,
};
use crate::shared::api::ApiResponse;
use crate::shared::validation::FieldErrors;
use crate::topic::adapter::incoming::web::routes::topic_path;
use crate::AppState;

use super::EditEntryPage;

/// Edit form for one of the caller's entries
#[utoipa::path(
    get,
    path = "/api/edit-entry/{entry_id}",
    tag = "entries",
    security(("BearerAuth" = [])),
    params(("entry_id" = Uuid, Path, description = "Entry ID")),
    responses(
        (status = 200, description = "Form filled with the current text", body = inline(SuccessResponse<EditEntryPage>)),
        (status = 404, description = "Entry missing or owned by someone else", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/edit-entry/{entry_id}")]
pub async fn edit_entry_form_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let entry_id = path.into_inner();

    match data.entry.get_owned.execute(user.user_id, entry_id).await {
        Ok(entry) => ApiResponse::success(EditEntryPage {
            form: EntryForm::with_text(entry.text.clone()),
            entry: entry.into(),
            errors: FieldErrors::new(),
        }),
        Err(e) => map_get_owned_error(entry_id, e),
    }
}

/// Replace the text of one of the caller's entries
///
/// Redirects to the entry's topic on success.
#[utoipa::path(
    post,
    path = "/api/edit-entry/{entry_id}",
    tag = "entries",
    security(("BearerAuth" = [])),
    params(("entry_id" = Uuid, Path, description = "Entry ID")),
    request_body = EntryForm,
    responses(
        (status = 303, description = "Saved; redirected to /api/topics/{topic_id}"),
        (status = 200, description = "Invalid form shown again with field errors", body = EditEntryPage),
        (status = 404, description = "Entry missing or owned by someone else", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/edit-entry/{entry_id}")]
pub async fn edit_entry_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    form: web::Json<EntryForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let entry_id = path.into_inner();
    let form = form.into_inner();

    let command = match EditEntryCommand::new(user.user_id, entry_id, &form) {
        Ok(command) => command,
        Err(errors) => {
            return match data.entry.get_owned.execute(user.user_id, entry_id).await {
                Ok(entry) => ApiResponse::invalid(EditEntryPage {
                    entry: entry.into(),
                    form,
                    errors,
                }),
                Err(e) => map_get_owned_error(entry_id, e),
            };
        }
    };

    match data.entry.edit.execute(command).await {
        Ok(entry) => {
            info!(entry_id = %entry.id, "Entry edited");
            ApiResponse::see_other(&topic_path(entry.topic_id))
        }
        Err(EditEntryError::NotFound) => ApiResponse::not_found(),
        Err(e) => {
            error!(%entry_id, error = %e, "Failed to edit entry");
            ApiResponse::internal_error()
        }
    }
}

fn map_get_owned_error(entry_id: Uuid, err: GetOwnedEntryError) -> HttpResponse {
    match err {
        GetOwnedEntryError::NotFound => ApiResponse::not_found(),
        GetOwnedEntryError::QueryFailed(msg) => {
            error!(%entry_id, error = %msg, "Failed to load entry for editing");
            ApiResponse::internal_error()
        }
    }
}
