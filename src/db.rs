//! Database connection management
//!
//! Handles pool construction and holds the catalog-listing statement.

use crate::config::DatabaseConfig;
use crate::error::AppError;
use deadpool_postgres::{Config, ManagerConfig, Pool, RecyclingMethod, Runtime};
use tokio_postgres::NoTls;
use tracing::info;

/// Catalog-listing statement: the PostgreSQL equivalent of MySQL's
/// `SHOW TABLES`. All base tables outside the system schemas, in a
/// stable order.
pub const LIST_TABLES: &str = r#"
    SELECT
        t.table_schema,
        t.table_name
    FROM information_schema.tables t
    WHERE t.table_schema NOT IN ('pg_catalog', 'information_schema')
      AND t.table_type = 'BASE TABLE'
    ORDER BY t.table_schema, t.table_name
"#;

/// Create the connection pool and verify it with a probe query
pub async fn init_pool(config: &DatabaseConfig) -> Result<Pool, AppError> {
    let pool = create_pool(config)?;

    // Simple test query to verify connection works
    let client = pool.get().await?;
    let _row = client.query_one("SELECT 1 AS ok", &[]).await?;
    drop(client);

    info!(
        "Database connection verified: {}:{}/{} (TLS: {})",
        config.host, config.port, config.database, config.use_tls
    );
    Ok(pool)
}

/// Create a connection pool with given configuration
fn create_pool(config: &DatabaseConfig) -> Result<Pool, AppError> {
    let mut cfg = Config::new();
    cfg.host = Some(config.host.clone());
    cfg.port = Some(config.port);
    cfg.user = Some(config.user.clone());
    cfg.password = Some(config.password.clone());
    cfg.dbname = Some(config.database.clone());
    cfg.manager = Some(ManagerConfig {
        recycling_method: RecyclingMethod::Fast,
    });

    if config.use_tls {
        // TLS connector for managed providers that refuse plaintext
        let certs = rustls_native_certs::load_native_certs();
        let mut root_store = rustls::RootCertStore::empty();
        for cert in certs.certs {
            root_store.add(cert).ok();
        }

        let tls_config = rustls::ClientConfig::builder()
            .with_root_certificates(root_store)
            .with_no_client_auth();

        let tls = tokio_postgres_rustls::MakeRustlsConnect::new(tls_config);

        cfg.create_pool(Some(Runtime::Tokio1), tls)
            .map_err(|e| AppError::Config(format!("Failed to create TLS pool: {}", e)))
    } else {
        cfg.create_pool(Some(Runtime::Tokio1), NoTls)
            .map_err(|e| AppError::Config(format!("Failed to create pool: {}", e)))
    }
}
