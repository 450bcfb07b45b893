use common::settings::types::Settings;
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

const LOG_FILE_PREFIX: &str = "weather_diary";

fn default_directive(debug: bool) -> &'static str {
    if debug {
        "trace"
    } else {
        "info"
    }
}

/// Stdout always; JSON lines outside debug; hourly files under `log_dir`,
/// keeping at most `max_log_files`.
pub fn get_subscriber(
    settings: &Settings,
) -> (impl tracing::Subscriber + Send + Sync, WorkerGuard) {
    let debug = settings.debug;
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(debug)));

    let json_log = (!debug).then(|| fmt::layer().json());

    let file_appender = rolling::Builder::new()
        .rotation(rolling::Rotation::HOURLY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix("log")
        .max_log_files(settings.application.max_log_files)
        .build(&settings.application.log_dir)
        .expect("Failed to initialize rolling file appender.");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let file_log = fmt::layer().with_ansi(false).with_writer(non_blocking);

    let subscriber = Registry::default()
        .with(env_filter)
        .with(fmt::layer().pretty())
        .with(json_log)
        .with(file_log);

    (subscriber, guard)
}

pub fn init_subscriber(settings: &Settings) -> WorkerGuard {
    let (subscriber, guard) = get_subscriber(settings);
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");
    guard
}
