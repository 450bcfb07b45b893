use actix_web::{get, web::ServiceConfig, HttpResponse};
use use_cases::diaries::types::DiaryVisible;
use utoipa::OpenApi;

use crate::{diaries, utils::ErrorResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "날씨 일기 프로젝트",
        description = "날씨 일기를 CRUD 할 수 있는 백엔드 API 입니다.",
        version = "2.0.0"
    ),
    paths(
        diaries::create::create_diary_endpoint,
        diaries::read::read_diary_endpoint,
        diaries::read::read_diaries_endpoint,
        diaries::update::update_diary_endpoint,
        diaries::delete::delete_diary_endpoint,
    ),
    components(schemas(DiaryVisible, ErrorResponse)),
    tags((name = "diaries", description = "Weather diary CRUD"))
)]
pub struct ApiDoc;

#[get("/api-docs/openapi.json")]
pub async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

pub fn api_doc_routes(cfg: &mut ServiceConfig) {
    cfg.service(openapi_json);
}
