//! Root route handlers
//!
//! The root route serves either the table catalog dump or the
//! greeting, depending on the configured mode. Both respond with
//! plain text.

use crate::db::LIST_TABLES;
use crate::error::ApiResult;
use crate::render::{self, TableRecord};
use crate::state::SharedState;
use axum::extract::State;
use tracing::{debug, info};

/// Dump the database's table catalog
pub async fn index(State(state): State<SharedState>) -> ApiResult<String> {
    debug!("Dumping table catalog");

    let pool = state.pool()?;
    let client = pool.get().await?;

    let rows = client.query(LIST_TABLES, &[]).await?;

    let records: Vec<TableRecord> = rows
        .iter()
        .map(|row| TableRecord {
            schema: row.get("table_schema"),
            name: row.get("table_name"),
        })
        .collect();

    info!("Listed {} tables", records.len());

    Ok(render::render_tables(&records))
}

/// Static greeting, rendered with the same dump convention
pub async fn hello() -> String {
    render::render_greeting()
}
