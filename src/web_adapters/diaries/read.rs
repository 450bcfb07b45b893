use actix_web::{
    get,
    web::{Data, Query},
    HttpResponse,
};
use db_adapters::diary_adapter::DiaryAdapter;
use sea_orm::DbConn;
use use_cases::{
    diaries::{
        read::{read_diaries, read_diary},
        types::DiaryVisible,
    },
    UseCaseError,
};

use crate::{
    diaries::params::{DateQuery, DateRangeQuery},
    utils::{response_400, response_500, ErrorResponse},
};

/// 선택한 날짜의 모든 일기 데이터를 가져옵니다.
#[utoipa::path(
    get,
    path = "/read/diary",
    tag = "diaries",
    params(DateQuery),
    responses(
        (status = 200, description = "All diaries of the date.", body = [DiaryVisible]),
        (status = 400, description = "Malformed date.", body = ErrorResponse),
        (status = 500, description = "Unexpected error.", body = ErrorResponse),
    )
)]
#[tracing::instrument(name = "Reading diaries of a date", skip(db))]
#[get("/read/diary")]
pub async fn read_diary_endpoint(db: Data<DbConn>, query: Query<DateQuery>) -> HttpResponse {
    match read_diary(query.date, DiaryAdapter::init(&db)).await {
        Ok(res) => HttpResponse::Ok().json(res),
        Err(e) => response_500(e),
    }
}

/// 선택한 기간 중의 모든 일기 데이터를 가져옵니다.
///
/// startDate부터 endDate까지(양 끝 포함) 작성된 일기를 날짜순으로 반환합니다.
#[utoipa::path(
    get,
    path = "/read/diaries",
    tag = "diaries",
    params(DateRangeQuery),
    responses(
        (status = 200, description = "All diaries within the range.", body = [DiaryVisible]),
        (status = 400, description = "Malformed dates or startDate after endDate.", body = ErrorResponse),
        (status = 500, description = "Unexpected error.", body = ErrorResponse),
    )
)]
#[tracing::instrument(name = "Reading diaries of a period", skip(db))]
#[get("/read/diaries")]
pub async fn read_diaries_endpoint(
    db: Data<DbConn>,
    query: Query<DateRangeQuery>,
) -> HttpResponse {
    match read_diaries(query.start_date, query.end_date, DiaryAdapter::init(&db)).await {
        Ok(res) => HttpResponse::Ok().json(res),
        Err(e) => match &e {
            UseCaseError::BadRequest(message) => response_400(message),
            _ => response_500(e),
        },
    }
}
