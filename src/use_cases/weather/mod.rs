use chrono::NaiveDate;
use db_adapters::{
    date_weather_adapter::{
        DateWeatherAdapter, DateWeatherFilter, DateWeatherMutation, DateWeatherQuery,
        UpsertDateWeatherParams,
    },
    diary_adapter::WeatherFields,
};
use tracing::{event, instrument, Level};
use weather_adapters::WeatherProvider;

use crate::{error_500, UseCaseError};

/// Stored snapshot for the date first, then a live lookup. A failed lookup
/// yields empty fields instead of an error.
#[instrument(skip(date_weather_adapter, weather_provider))]
pub async fn resolve_weather<'a>(
    date: NaiveDate,
    date_weather_adapter: DateWeatherAdapter<'a>,
    weather_provider: &dyn WeatherProvider,
) -> WeatherFields {
    match date_weather_adapter.filter_eq_date(date).get_one().await {
        Ok(Some(snapshot)) => {
            return WeatherFields {
                weather: Some(snapshot.weather),
                icon: Some(snapshot.icon),
                temperature: Some(snapshot.temperature),
            }
        }
        Ok(None) => (),
        Err(e) => {
            event!(target: "backend", Level::WARN, "Failed to read weather snapshot: {:?}", e);
        }
    }

    match weather_provider.current_weather().await {
        Ok(report) => WeatherFields {
            weather: Some(report.weather),
            icon: Some(report.icon),
            temperature: Some(report.temperature),
        },
        Err(e) => {
            event!(target: "backend", Level::WARN, "Diary will be saved without weather: {}", e);
            WeatherFields::default()
        }
    }
}

#[instrument(skip(weather_provider, date_weather_adapter))]
pub async fn snapshot_date_weather<'a>(
    date: NaiveDate,
    weather_provider: &dyn WeatherProvider,
    date_weather_adapter: DateWeatherAdapter<'a>,
) -> Result<(), UseCaseError> {
    let report = weather_provider.current_weather().await.map_err(error_500)?;
    date_weather_adapter
        .upsert(UpsertDateWeatherParams {
            date,
            weather: report.weather,
            icon: report.icon,
            temperature: report.temperature,
        })
        .await
        .map_err(error_500)
}
