use actix_web::{get, Responder};

use crate::api::schemas::SuccessResponse;
use crate::shared::api::ApiResponse;

use super::IndexPage;

/// Landing page
#[utoipa::path(
    get,
    path = "/",
    tag = "topics",
    responses(
        (status = 200, description = "Landing page", body = inline(SuccessResponse<IndexPage>)),
    )
)]
#[get("/")]
pub async fn index_handler() -> impl Responder {
    ApiResponse::success(IndexPage {
        title: "MathBlog".to_string(),
        description: "Ask questions and share answers, one topic at a time.".to_string(),
    })
}
