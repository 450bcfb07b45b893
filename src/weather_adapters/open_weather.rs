use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{event, instrument, Level};

use crate::{WeatherError, WeatherProvider, WeatherReport};

const CURRENT_WEATHER_PATH: &str = "/data/2.5/weather";

#[derive(Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    city: String,
    http: Client,
}

impl std::fmt::Debug for OpenWeatherProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherProvider")
            .field("base_url", &self.base_url)
            .field("city", &self.city)
            .finish()
    }
}

impl OpenWeatherProvider {
    pub fn new(api_key: String, base_url: String, city: String) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            city,
            http: Client::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    main: OwMain,
    weather: Vec<OwWeather>,
}

fn parse_current_weather(body: &str) -> Result<WeatherReport, WeatherError> {
    let parsed: OwCurrentResponse = serde_json::from_str(body)?;
    let condition = parsed
        .weather
        .into_iter()
        .next()
        .ok_or(WeatherError::MissingCondition)?;
    Ok(WeatherReport {
        weather: condition.main,
        icon: condition.icon,
        temperature: parsed.main.temp,
    })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    #[instrument(skip_all, fields(city = %self.city))]
    async fn current_weather(&self) -> Result<WeatherReport, WeatherError> {
        let res = self
            .http
            .get(format!("{}{}", self.base_url, CURRENT_WEATHER_PATH))
            .query(&[("q", self.city.as_str()), ("appid", self.api_key.as_str())])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            event!(target: "backend", Level::WARN, %status, "OpenWeather request failed.");
            return Err(WeatherError::Status {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        parse_current_weather(&body)
    }
}
