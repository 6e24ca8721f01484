use actix_web::{web, HttpResponse, Resource, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::entry::application::ports::incoming::use_cases::{
    DeleteEntryError, GetOwnedEntryError,
};
use crate::shared::api::ApiResponse;
use crate::topic::adapter::incoming::web::routes::topic_path;
use crate::AppState;

use super::DeleteEntryPage;

pub fn delete_entry_resource() -> Resource {
    web::resource("/api/delete-entry/{entry_id}")
        .route(web::get().to(confirm_delete_entry_handler))
        .route(web::post().to(delete_entry_handler))
        .default_service(web::to(method_not_allowed))
}

async fn method_not_allowed() -> HttpResponse {
    ApiResponse::method_not_allowed()
}

/// Deletion confirmation for one of the caller's entries
#[utoipa::path(
    get,
    path = "/api/delete-entry/{entry_id}",
    tag = "entries",
    security(("BearerAuth" = [])),
    params(("entry_id" = Uuid, Path, description = "Entry ID")),
    responses(
        (status = 200, description = "Entry about to be deleted", body = inline(SuccessResponse<DeleteEntryPage>)),
        (status = 404, description = "Entry missing or owned by someone else", body = ErrorResponse),
        (status = 405, description = "Method other than GET or POST", body = ErrorResponse),
    )
)]
pub async fn confirm_delete_entry_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let entry_id = path.into_inner();

    match data.entry.get_owned.execute(user.user_id, entry_id).await {
        Ok(entry) => ApiResponse::success(DeleteEntryPage {
            entry: entry.into(),
        }),
        Err(GetOwnedEntryError::NotFound) => ApiResponse::not_found(),
        Err(e) => {
            error!(%entry_id, error = %e, "Failed to load entry for deletion");
            ApiResponse::internal_error()
        }
    }
}

/// Delete one of the caller's entries
///
/// Redirects to the entry's former topic on success.
#[utoipa::path(
    post,
    path = "/api/delete-entry/{entry_id}",
    tag = "entries",
    security(("BearerAuth" = [])),
    params(("entry_id" = Uuid, Path, description = "Entry ID")),
    responses(
        (status = 303, description = "Deleted; redirected to /api/topics/{topic_id}"),
        (status = 404, description = "Entry missing or owned by someone else", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
pub async fn delete_entry_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let entry_id = path.into_inner();

    match data.entry.delete.execute(user.user_id, entry_id).await {
        Ok(topic_id) => {
            info!(%entry_id, %topic_id, "Entry deleted");
            ApiResponse::see_other(&topic_path(topic_id))
        }
        Err(DeleteEntryError::NotFound) => ApiResponse::not_found(),
        Err(e) => {
            error!(%entry_id, error = %e, "Failed to delete entry");
            ApiResponse::internal_error()
        }
    }
}
