#![cfg(test)]
use configs::DatabaseConfig;
use sea_orm::DatabaseConnection;

/// Fresh in-memory sqlite database with both tables created.
///
/// The pool is capped at one connection: every sqlite memory connection is
/// its own database.
pub async fn memory_db() -> Result<DatabaseConnection, anyhow::Error> {
    let cfg = DatabaseConfig {
        url: "sqlite::memory:".into(),
        max_connections: 1,
        min_connections: 1,
        ..DatabaseConfig::default()
    };
    let db = models::db::connect_with_config(&cfg).await?;
    models::db::ensure_schema(&db).await?;
    Ok(db)
}
