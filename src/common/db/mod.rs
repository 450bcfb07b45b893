use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbConn, DbErr};
use tracing::{event, Level};

use crate::settings::types::Settings;

pub async fn init_db(settings: &Settings) -> Result<DbConn, DbErr> {
    connect_and_migrate(&settings.database.url).await
}

pub async fn connect_and_migrate(database_url: &str) -> Result<DbConn, DbErr> {
    let mut options = ConnectOptions::new(database_url);
    options.sqlx_logging(false);
    if database_url.starts_with("sqlite") {
        // Each pooled connection to `sqlite::memory:` would open its own database.
        options.max_connections(1);
    }
    let db = Database::connect(options).await?;
    event!(target: "backend", Level::DEBUG, "Connected to {:?}.", db.get_database_backend());
    Migrator::up(&db, None).await?;
    Ok(db)
}
