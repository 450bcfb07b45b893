use actix_web::{
    post,
    web::{Data, Query},
    HttpResponse,
};
use db_adapters::{date_weather_adapter::DateWeatherAdapter, diary_adapter::DiaryAdapter};
use sea_orm::DbConn;
use use_cases::diaries::{create::create_diary, types::DiaryCreateRequest};
use weather_adapters::WeatherProvider;

use crate::{
    diaries::params::DateQuery,
    utils::{response_500, ErrorResponse},
};

/// 일기 텍스트와 날짜를 이용해서 DB에 일기 저장합니다.
///
/// 주어진 날짜와 일기 텍스트를 사용하여 데이터베이스에 일기를 저장합니다.
/// 저장 시점의 날씨 정보가 함께 기록됩니다.
#[utoipa::path(
    post,
    path = "/create/diary",
    tag = "diaries",
    params(DateQuery),
    request_body(
        content = String,
        content_type = "text/plain",
        description = "일기 텍스트를 포함하는 요청 본문",
        example = json!("오늘은 날씨가 좋다. 일기를 작성합니다.")
    ),
    responses(
        (status = 200, description = "Saved."),
        (status = 400, description = "Malformed date.", body = ErrorResponse),
        (status = 500, description = "Unexpected error.", body = ErrorResponse),
    )
)]
#[tracing::instrument(name = "Creating a diary", skip(db, weather_provider, text))]
#[post("/create/diary")]
pub async fn create_diary_endpoint(
    db: Data<DbConn>,
    weather_provider: Data<dyn WeatherProvider>,
    query: Query<DateQuery>,
    text: String,
) -> HttpResponse {
    match create_diary(
        DiaryCreateRequest {
            date: query.date,
            text,
        },
        DiaryAdapter::init(&db),
        DateWeatherAdapter::init(&db),
        weather_provider.get_ref(),
    )
    .await
    {
        Ok(_) => HttpResponse::Ok().finish(),
        Err(e) => response_500(e),
    }
}
