use actix_web::{
    put,
    web::{Data, Query},
    HttpResponse,
};
use db_adapters::diary_adapter::DiaryAdapter;
use sea_orm::DbConn;
use use_cases::{
    diaries::{types::DiaryUpdateRequest, update::update_diary},
    UseCaseError,
};

use crate::{
    diaries::params::DateQuery,
    utils::{response_404, response_500, ErrorResponse},
};

/// 선택한 날짜의 일기 데이터를 수정합니다.
///
/// 같은 날짜에 일기가 여러 개 있으면 가장 먼저 작성된 일기만 수정됩니다.
#[utoipa::path(
    put,
    path = "/update/diary",
    tag = "diaries",
    params(DateQuery),
    request_body(
        content = String,
        content_type = "text/plain",
        description = "수정할 일기 텍스트를 포함하는 요청 본문",
        example = json!("수정된 일기 내용입니다.")
    ),
    responses(
        (status = 200, description = "Updated."),
        (status = 400, description = "Malformed date.", body = ErrorResponse),
        (status = 404, description = "No diary for the date.", body = ErrorResponse),
        (status = 500, description = "Unexpected error.", body = ErrorResponse),
    )
)]
#[tracing::instrument(name = "Updating a diary", skip(db, text))]
#[put("/update/diary")]
pub async fn update_diary_endpoint(
    db: Data<DbConn>,
    query: Query<DateQuery>,
    text: String,
) -> HttpResponse {
    match update_diary(
        DiaryUpdateRequest {
            date: query.date,
            text,
        },
        DiaryAdapter::init(&db),
    )
    .await
    {
        Ok(_) => HttpResponse::Ok().finish(),
        Err(e) => match &e {
            UseCaseError::NotFound(message) => response_404(message),
            _ => response_500(e),
        },
    }
}
