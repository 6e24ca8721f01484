use actix_web::{web, HttpResponse, Resource, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::topic::application::ports::incoming::use_cases::{
    DeleteTopicError, GetOwnedTopicError,
};
use crate::AppState;

use super::{DeleteTopicPage, TOPICS_PATH};

/// GET confirms, POST deletes, every other method is refused.
pub fn delete_topic_resource() -> Resource {
    web::resource("/api/delete-topic/{topic_id}")
        .route(web::get().to(confirm_delete_topic_handler))
        .route(web::post().to(delete_topic_handler))
        .default_service(web::to(method_not_allowed))
}

async fn method_not_allowed() -> HttpResponse {
    ApiResponse::method_not_allowed()
}

/// Deletion confirmation for one of the caller's topics
#[utoipa::path(
    get,
    path = "/api/delete-topic/{topic_id}",
    tag = "topics",
    security(("BearerAuth" = [])),
    params(("topic_id" = Uuid, Path, description = "Topic ID")),
    responses(
        (status = 200, description = "Topic about to be deleted", body = inline(SuccessResponse<DeleteTopicPage>)),
        (status = 404, description = "Topic missing or owned by someone else", body = ErrorResponse),
        (status = 405, description = "Method other than GET or POST", body = ErrorResponse),
    )
)]
pub async fn confirm_delete_topic_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let topic_id = path.into_inner();

    match data.topic.get_owned.execute(user.user_id, topic_id).await {
        Ok(topic) => ApiResponse::success(DeleteTopicPage {
            topic: topic.into(),
        }),
        Err(GetOwnedTopicError::NotFound) => ApiResponse::not_found(),
        Err(e) => {
            error!(%topic_id, error = %e, "Failed to load topic for deletion");
            ApiResponse::internal_error()
        }
    }
}

/// Delete one of the caller's topics with all of its entries
///
/// Redirects to the topic list on success.
#[utoipa::path(
    post,
    path = "/api/delete-topic/{topic_id}",
    tag = "topics",
    security(("BearerAuth" = [])),
    params(("topic_id" = Uuid, Path, description = "Topic ID")),
    responses(
        (status = 303, description = "Deleted; redirected to /api/topics"),
        (status = 404, description = "Topic missing or owned by someone else", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
pub async fn delete_topic_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let topic_id = path.into_inner();

    match data.topic.delete.execute(user.user_id, topic_id).await {
        Ok(()) => ApiResponse::see_other(TOPICS_PATH),
        Err(DeleteTopicError::NotFound) => ApiResponse::not_found(),
        Err(e) => {
            error!(%topic_id, error = %e, "Failed to delete topic");
            ApiResponse::internal_error()
        }
    }
}
