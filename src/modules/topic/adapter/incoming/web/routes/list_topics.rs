use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::TopicsPage;

/// List every topic
///
/// Topics of all users, most recent first.
#[utoipa::path(
    get,
    path = "/api/topics",
    tag = "topics",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "All topics", body = inline(SuccessResponse<TopicsPage>)),
        (status = 303, description = "Not logged in; redirected to the login route", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/topics")]
pub async fn list_topics_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.topic.list.execute().await {
        Ok(topics) => ApiResponse::success(TopicsPage::new(topics)),
        Err(e) => {
            error!(user_id = %user.user_id, error = %e, "Failed to list topics");
            ApiResponse::internal_error()
        }
    }
}
