use actix_web::{
    delete,
    web::{Data, Query},
    HttpResponse,
};
use db_adapters::diary_adapter::DiaryAdapter;
use sea_orm::DbConn;
use use_cases::diaries::delete::delete_diary;

use crate::{
    diaries::params::DateQuery,
    utils::{response_500, ErrorResponse},
};

/// 선택한 날짜의 일기 데이터를 삭제합니다.
#[utoipa::path(
    delete,
    path = "/delete/diary",
    tag = "diaries",
    params(DateQuery),
    responses(
        (status = 200, description = "Deleted, or nothing to delete."),
        (status = 400, description = "Malformed date.", body = ErrorResponse),
        (status = 500, description = "Unexpected error.", body = ErrorResponse),
    )
)]
#[tracing::instrument(name = "Deleting diaries of a date", skip(db))]
#[delete("/delete/diary")]
pub async fn delete_diary_endpoint(db: Data<DbConn>, query: Query<DateQuery>) -> HttpResponse {
    match delete_diary(query.date, DiaryAdapter::init(&db)).await {
        Ok(_) => HttpResponse::Ok().finish(),
        Err(e) => response_500(e),
    }
}
