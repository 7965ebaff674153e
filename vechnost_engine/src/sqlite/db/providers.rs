use sqlx::SqliteConnection;

use crate::{db_types::NewProviderConfig, traits::CatalogError};

/// Stores upstream provider credentials and returns the new row id. The secrets are written
/// as-is; nothing in the engine reads them back.
pub(crate) async fn insert_provider_config(
    config: NewProviderConfig,
    conn: &mut SqliteConnection,
) -> Result<i64, CatalogError> {
    let result = sqlx::query(
        r#"INSERT INTO provider_configs (name, api_key, api_secret, active) VALUES ($1, $2, $3, $4)"#,
    )
    .bind(config.name)
    .bind(config.api_key.reveal().clone())
    .bind(config.api_secret.as_ref().map(|s| s.reveal().clone()))
    .bind(config.active)
    .execute(conn)
    .await?;
    Ok(result.last_insert_rowid())
}
