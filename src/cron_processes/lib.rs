use std::sync::Arc;

use sea_orm::DbConn;
use tokio_cron_scheduler::{Job, JobScheduler};
use tracing::{event, instrument, Level};
use weather_adapters::WeatherProvider;

mod weather_snapshot;

/// 01:00 in Asia/Seoul; the scheduler runs on UTC.
const WEATHER_SNAPSHOT_SCHEDULE: &str = "0 0 16 * * *";

#[instrument(skip_all)]
pub async fn run_cron_processes(
    db: DbConn,
    weather_provider: Arc<dyn WeatherProvider>,
) -> Result<(), ()> {
    let scheduler = match JobScheduler::new().await {
        Ok(scheduler) => scheduler,
        Err(e) => {
            event!(Level::ERROR, "{:?}", e);
            return Err(());
        }
    };

    let weather_snapshot_job = match Job::new_async(WEATHER_SNAPSHOT_SCHEDULE, move |_, _| {
        let params = (db.clone(), weather_provider.clone());
        Box::pin(async move {
            weather_snapshot::weather_snapshot(&params.0, params.1.as_ref(), chrono::Utc::now())
                .await
        })
    }) {
        Ok(job) => job,
        Err(e) => {
            event!(Level::ERROR, "{:?}", e);
            return Err(());
        }
    };
    if let Err(e) = scheduler.add(weather_snapshot_job).await {
        event!(Level::ERROR, "{:?}", e);
        return Err(());
    };

    if let Err(e) = scheduler.start().await {
        event!(Level::ERROR, "{:?}", e);
        return Err(());
    }

    Ok(())
}
