use chrono::{DateTime, Duration, NaiveDate, Utc};
use db_adapters::date_weather_adapter::DateWeatherAdapter;
use sea_orm::DbConn;
use tracing::{event, instrument, Level};
use use_cases::weather::snapshot_date_weather;
use weather_adapters::WeatherProvider;

const DIARY_UTC_OFFSET_HOURS: i64 = 9;

#[instrument(skip(db, weather_provider))]
pub async fn weather_snapshot(
    db: &DbConn,
    weather_provider: &dyn WeatherProvider,
    now: DateTime<Utc>,
) {
    let date = diary_date(now);
    match snapshot_date_weather(date, weather_provider, DateWeatherAdapter::init(db)).await {
        Ok(_) => event!(Level::INFO, "Saved weather snapshot of {}.", date),
        Err(e) => event!(Level::ERROR, "Failed to save weather snapshot of {}: {:?}", date, e),
    }
}

/// The calendar date diary writers are living in at `now`.
fn diary_date(now: DateTime<Utc>) -> NaiveDate {
    (now + Duration::hours(DIARY_UTC_OFFSET_HOURS)).date_naive()
}
