use std::sync::Arc;

use actix_web::{dev::Server, middleware::Compress, web::Data, App, HttpServer};
use common::{db::init_db, settings::types::Settings};
use cron_processes::run_cron_processes;
use sea_orm::DatabaseConnection;
use server::configure_app;
use tracing::{event, Level};
use weather_adapters::{DisabledWeatherProvider, OpenWeatherProvider, WeatherProvider};
use web_adapters::CatchAll;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(settings: Settings) -> Result<Self, std::io::Error> {
        let db = init_db(&settings)
            .await
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        let weather_provider = get_weather_provider(&settings);

        if run_cron_processes(db.clone(), weather_provider.clone())
            .await
            .is_err()
        {
            event!(target: "backend", Level::WARN, "Cron processes are not running.");
        }

        let address = format!(
            "{}:{}",
            settings.application.host, settings.application.port
        );

        let listener = std::net::TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();
        let server = run(listener, db, weather_provider)?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

fn get_weather_provider(settings: &Settings) -> Arc<dyn WeatherProvider> {
    if settings.weather.api_key.is_empty() {
        event!(target: "backend", Level::WARN, "WEATHER_API_KEY is not set. Diaries will be saved without weather.");
        return Arc::new(DisabledWeatherProvider);
    }
    Arc::new(OpenWeatherProvider::new(
        settings.weather.api_key.clone(),
        settings.weather.base_url.clone(),
        settings.weather.city.clone(),
    ))
}

fn run(
    listener: std::net::TcpListener,
    db: DatabaseConnection,
    weather_provider: Arc<dyn WeatherProvider>,
) -> Result<Server, std::io::Error> {
    let weather_provider: Data<dyn WeatherProvider> = Data::from(weather_provider);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(CatchAll)
            .wrap(Compress::default())
            .configure(configure_app)
            .app_data(Data::new(db.clone()))
            .app_data(weather_provider.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
