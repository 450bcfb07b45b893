//! Weather lookups used to enrich diary entries.
//!
//! [`WeatherProvider`] is the seam the use cases depend on; [`OpenWeatherProvider`]
//! is the production implementation backed by the OpenWeather "current weather" API.

mod open_weather;

use std::fmt::Debug;

use async_trait::async_trait;

pub use open_weather::OpenWeatherProvider;

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    /// Main condition group, e.g. "Clear", "Rain".
    pub weather: String,
    pub icon: String,
    pub temperature: f64,
}

#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("weather provider is not configured")]
    NotConfigured,
    #[error("failed to call weather provider: {0}")]
    Request(#[from] reqwest::Error),
    #[error("weather provider responded with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("failed to parse weather response: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("weather response contained no condition")]
    MissingCondition,
}

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_weather(&self) -> Result<WeatherReport, WeatherError>;
}

/// Used when no API key is configured. Every lookup fails with `NotConfigured`.
#[derive(Debug, Clone, Default)]
pub struct DisabledWeatherProvider;

#[async_trait]
impl WeatherProvider for DisabledWeatherProvider {
    async fn current_weather(&self) -> Result<WeatherReport, WeatherError> {
        Err(WeatherError::NotConfigured)
    }
}
