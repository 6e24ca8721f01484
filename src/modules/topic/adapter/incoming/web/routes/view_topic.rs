use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::topic::application::ports::incoming::use_cases::ViewTopicError;
use crate::AppState;

use super::TopicPage;

/// Show a topic and its entries
///
/// Open to every logged-in user, not only the owner.
#[utoipa::path(
    get,
    path = "/api/topics/{topic_id}",
    tag = "topics",
    security(("BearerAuth" = [])),
    params(("topic_id" = Uuid, Path, description = "Topic ID")),
    responses(
        (status = 200, description = "Topic with entries, oldest entry first", body = inline(SuccessResponse<TopicPage>)),
        (status = 303, description = "Not logged in; redirected to the login route", body = ErrorResponse),
        (status = 404, description = "Topic not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/topics/{topic_id}")]
pub async fn view_topic_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let topic_id = path.into_inner();

    match data.topic.view.execute(user.user_id, topic_id).await {
        Ok(detail) => ApiResponse::success(TopicPage::from(detail)),
        Err(ViewTopicError::NotFound) => ApiResponse::not_found(),
        Err(e) => {
            error!(%topic_id, error = %e, "Failed to load topic");
            ApiResponse::internal_error()
        }
    }
}
