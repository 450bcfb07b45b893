use db_adapters::{
    date_weather_adapter::DateWeatherAdapter,
    diary_adapter::{CreateDiaryParams, DiaryAdapter, DiaryMutation},
};
use weather_adapters::WeatherProvider;

use crate::{
    diaries::types::{DiaryCreateRequest, DiaryVisible},
    error_500,
    weather::resolve_weather,
    UseCaseError,
};

pub async fn create_diary<'a>(
    params: DiaryCreateRequest,
    diary_adapter: DiaryAdapter<'a>,
    date_weather_adapter: DateWeatherAdapter<'a>,
    weather_provider: &dyn WeatherProvider,
) -> Result<DiaryVisible, UseCaseError> {
    let weather = resolve_weather(params.date, date_weather_adapter, weather_provider).await;

    diary_adapter
        .create(CreateDiaryParams {
            date: params.date,
            text: params.text,
            weather,
        })
        .await
        .map(DiaryVisible::from)
        .map_err(error_500)
}
