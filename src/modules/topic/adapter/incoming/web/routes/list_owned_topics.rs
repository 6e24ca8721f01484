use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::TopicsPage;

/// List the caller's own topics
#[utoipa::path(
    get,
    path = "/api/my-topics",
    tag = "topics",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Topics owned by the caller, most recent first", body = inline(SuccessResponse<TopicsPage>)),
        (status = 303, description = "Not logged in; redirected to the login route", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/my-topics")]
pub async fn list_owned_topics_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.topic.list_owned.execute(user.user_id).await {
        Ok(topics) => ApiResponse::success(TopicsPage::new(topics)),
        Err(e) => {
            error!(user_id = %user.user_id, error = %e, "Failed to list owned topics");
            ApiResponse::internal_error()
        }
    }
}
