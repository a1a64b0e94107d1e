use dioxus_logger::tracing;

use crate::server::{
    config::Config,
    error::{internal::InternalError, AppError},
};

/// Installs the global tracing subscriber at the configured level.
///
/// # Returns
/// - `Ok(())` - Logger installed
/// - `Err(AppError::InternalErr)` - A global subscriber was already set
pub fn init_logging(config: &Config) -> Result<(), AppError> {
    dioxus_logger::init(config.log_level)
        .map_err(|err| InternalError::Logger(err.to_string()))?;

    tracing::debug!("Logging initialised at {}", config.log_level);

    Ok(())
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Database ready, migrations applied");

    Ok(db)
}
